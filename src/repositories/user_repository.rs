//! PostgreSQL implementation of [`UserRepository`].

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use sqlx::PgPool;

use crate::errors::ApiError;
use crate::models::{User, UserInput};
use crate::repositories::UserRepository;

const CREATE_TABLE: &str =
    "CREATE TABLE IF NOT EXISTS users (id SERIAL PRIMARY KEY, name TEXT, email TEXT)";
const SELECT_ALL: &str = "SELECT id, name, email FROM users";
const INSERT: &str = "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id";
const UPDATE: &str = "UPDATE users SET name = $1, email = $2 WHERE id = $3";
const DELETE: &str = "DELETE FROM users WHERE id = $1";

/// Users table access over a shared connection pool.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the users table unless it already exists.
    ///
    /// Called once during bootstrap. There is no migration beyond this.
    pub async fn ensure_table(&self) -> Result<(), sqlx::Error> {
        info!("Ensuring users table exists...");
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        info!("Users table ready");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Selecting all users");
        let users: Vec<User> = sqlx::query_as::<_, User>(SELECT_ALL)
            .fetch(&self.pool)
            .try_collect()
            .await?;
        Ok(users)
    }

    async fn insert(&self, input: &UserInput) -> Result<i32, ApiError> {
        let id = sqlx::query_scalar::<_, i32>(INSERT)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(&self.pool)
            .await?;
        debug!("Repository: Inserted user with id: {}", id);
        Ok(id)
    }

    async fn update(&self, id: i32, input: &UserInput) -> Result<u64, ApiError> {
        debug!("Repository: Updating user with id: {}", id);
        let result = sqlx::query(UPDATE)
            .bind(&input.name)
            .bind(&input.email)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, ApiError> {
        debug!("Repository: Deleting user with id: {}", id);
        let result = sqlx::query(DELETE).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sqlx::postgres::PgPoolOptions;

    /// Connects to the database named by `DATABASE_URL`. Rows created here
    /// are removed again, but other rows in the table are left alone.
    async fn repository() -> PgUserRepository {
        dotenv::dotenv().ok();
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPoolOptions::new()
            .max_connections(2)
            .connect(&url)
            .await
            .expect("Failed to connect to PostgreSQL");
        let repository = PgUserRepository::new(pool);
        repository.ensure_table().await.unwrap();
        // Idempotent
        repository.ensure_table().await.unwrap();
        repository
    }

    fn input(name: &str, email: &str) -> UserInput {
        UserInput {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL reachable through DATABASE_URL"]
    async fn test_insert_then_find_all() {
        let repository = repository().await;

        let first = repository.insert(&input("Alice", "a@x.com")).await.unwrap();
        let second = repository.insert(&input("Alice", "a@x.com")).await.unwrap();
        assert!(first > 0);
        assert!(second > first);

        let users = repository.find_all().await.unwrap();
        let matching: Vec<&User> = users.iter().filter(|u| u.id == first).collect();
        assert_eq!(
            matching,
            vec![&User {
                id: first,
                name: "Alice".to_string(),
                email: "a@x.com".to_string(),
            }]
        );

        assert_eq!(repository.delete(first).await.unwrap(), 1);
        assert_eq!(repository.delete(second).await.unwrap(), 1);
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL reachable through DATABASE_URL"]
    async fn test_update_counts_affected_rows() {
        let repository = repository().await;

        assert_eq!(
            repository
                .update(i32::MAX, &input("Nobody", "n@x.com"))
                .await
                .unwrap(),
            0
        );

        let id = repository.insert(&input("Bob", "b@x.com")).await.unwrap();
        assert_eq!(
            repository
                .update(id, &input("Robert", "r@x.com"))
                .await
                .unwrap(),
            1
        );
        let users = repository.find_all().await.unwrap();
        let updated = users.iter().find(|u| u.id == id).unwrap();
        assert_eq!(updated.name, "Robert");
        assert_eq!(updated.email, "r@x.com");

        repository.delete(id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "needs a PostgreSQL reachable through DATABASE_URL"]
    async fn test_delete_twice() {
        let repository = repository().await;

        let id = repository.insert(&input("Carol", "c@x.com")).await.unwrap();
        assert_eq!(repository.delete(id).await.unwrap(), 1);
        assert_eq!(repository.delete(id).await.unwrap(), 0);

        let users = repository.find_all().await.unwrap();
        assert!(users.iter().all(|u| u.id != id));
    }
}
