use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row of the users table, and the JSON shape returned to callers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, ToSchema)]
pub struct User {
    /// Identifier assigned by the database on insert
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

/// Request body for create and update.
///
/// Keys match case-insensitively, an exact-case key taking precedence. A
/// missing or `null` field becomes an empty string and unknown fields (an
/// `id` included) are ignored. Nothing about the values is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, ToSchema)]
pub struct UserInput {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
}

impl UserInput {
    /// Parse a request body. Only a JSON object is accepted.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;
        let Value::Object(fields) = value else {
            return Err(serde_json::Error::custom("request body must be a JSON object"));
        };

        Ok(Self {
            name: string_field(&fields, "name")?,
            email: string_field(&fields, "email")?,
        })
    }

    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Result<String, serde_json::Error> {
    let value = fields.get(key).or_else(|| {
        fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    });

    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(serde_json::Error::custom(format!(
            "{} must be a string, got {}",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_json_shape() {
        let user = User {
            id: 7,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({"id": 7, "name": "Alice", "email": "a@x.com"})
        );
    }

    #[test]
    fn test_input_ignores_id_and_defaults_missing_fields() {
        let input = UserInput::from_json(r#"{"id": 42, "name": "Bob"}"#).unwrap();
        assert_eq!(input.name, "Bob");
        assert_eq!(input.email, "");
        assert_eq!(input.into_user(3).id, 3);
    }

    #[test]
    fn test_input_null_fields_read_as_empty() {
        let input = UserInput::from_json(r#"{"name": null, "email": "a@x.com"}"#).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.email, "a@x.com");
    }

    #[test]
    fn test_input_keys_match_any_case() {
        let input = UserInput::from_json(r#"{"Name": "Bob", "EMAIL": "b@x.com"}"#).unwrap();
        assert_eq!(input.name, "Bob");
        assert_eq!(input.email, "b@x.com");

        let input = UserInput::from_json(r#"{"NAME": "Upper", "name": "exact"}"#).unwrap();
        assert_eq!(input.name, "exact");
    }

    #[test]
    fn test_input_rejects_non_objects() {
        assert!(UserInput::from_json(r#""not json""#).is_err());
        assert!(UserInput::from_json("null").is_err());
        assert!(UserInput::from_json("[]").is_err());
        assert!(UserInput::from_json(r#"["Bob", "b@x.com"]"#).is_err());
        assert!(UserInput::from_json("not json").is_err());
        assert!(UserInput::from_json("").is_err());
        assert!(UserInput::from_json(r#"{"name": 5}"#).is_err());
    }
}
