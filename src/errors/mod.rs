use std::fmt;

use crate::config::ConfigError;
use crate::constants::{
    BODY_BAD_REQUEST, BODY_INTERNAL_ERROR, BODY_METHOD_NOT_ALLOWED, BODY_NOT_FOUND,
};
use crate::models::GatewayResponse;

/// A request that ended without a success response.
///
/// The carried string is a diagnostic for the server log. Callers only ever
/// see the fixed body for the variant.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    MethodNotAllowed(String),
    InternalServerError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::MethodNotAllowed(method) => write!(f, "Method Not Allowed: {}", method),
            ApiError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) | ApiError::MethodNotAllowed(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::InternalServerError(_) => 500,
        }
    }

    pub fn error_response(&self) -> GatewayResponse {
        let body = match self {
            ApiError::BadRequest(_) => BODY_BAD_REQUEST,
            ApiError::NotFound(_) => BODY_NOT_FOUND,
            ApiError::MethodNotAllowed(_) => BODY_METHOD_NOT_ALLOWED,
            ApiError::InternalServerError(_) => BODY_INTERNAL_ERROR,
        };
        GatewayResponse::text(self.status_code(), body)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

/// Failures before the first request is served. All of them are fatal.
#[derive(Debug)]
pub enum BootstrapError {
    Config(ConfigError),
    Connect(sqlx::Error),
    CreateTable(sqlx::Error),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::Config(err) => write!(f, "invalid configuration: {}", err),
            BootstrapError::Connect(err) => write!(f, "failed to connect to database: {}", err),
            BootstrapError::CreateTable(err) => {
                write!(f, "failed to create users table: {}", err)
            }
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::Config(err) => Some(err),
            BootstrapError::Connect(err) | BootstrapError::CreateTable(err) => Some(err),
        }
    }
}

impl From<ConfigError> for BootstrapError {
    fn from(err: ConfigError) -> Self {
        BootstrapError::Config(err)
    }
}
