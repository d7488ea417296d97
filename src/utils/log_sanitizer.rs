//! Masking of user-supplied values before they reach the log.
//!
//! Emails are free-form text here, so masking works on characters and never
//! assumes the value is a well-formed address.

const VISIBLE_CHARS: usize = 3;

/// Mask an email address for safe logging.
///
/// Keeps the first three characters of the local part and the domain.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_email("user@example.com"), "use***@example.com");
/// assert_eq!(mask_email("ab@test.org"), "ab***@test.org");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{}***@{}", prefix(local), domain),
        None => format!("{}***", prefix(email)),
    }
}

fn prefix(value: &str) -> &str {
    match value.char_indices().nth(VISIBLE_CHARS) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
