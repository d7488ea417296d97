//! Fixed response bodies returned to callers.
//!
//! Error bodies never carry the underlying cause; that only goes to the log.

pub const BODY_BAD_REQUEST: &str = "Bad Request";
pub const BODY_NOT_FOUND: &str = "Item Not Found";
pub const BODY_METHOD_NOT_ALLOWED: &str = "method not allowed";
pub const BODY_INTERNAL_ERROR: &str = "Internal Server Error";

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

// Diagnostics for the server log
pub const ERR_INVALID_USER_ID: &str = "id path parameter is not an integer";
pub const ERR_MISSING_USER_ID: &str = "id path parameter is missing";
pub const ERR_USER_NOT_FOUND: &str = "no user row matched id";
