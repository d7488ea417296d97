//! Method dispatch and request/response mapping for the users resource.
//!
//! Every error is turned into a terminal response right here. Client errors
//! are logged at `warn`, everything else at `error`.

use std::sync::Arc;

use log::{debug, error, warn};
use serde::Serialize;

use crate::constants::{ERR_INVALID_USER_ID, ERR_MISSING_USER_ID, PATH_PARAM_ID};
use crate::errors::ApiError;
use crate::models::{GatewayRequest, GatewayResponse, UserInput};
use crate::repositories::UserRepository;
use crate::services::UserService;

/// Entry point shared by the Lambda runtime and the local server.
pub struct UserHandler {
    user_service: UserService,
}

impl UserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            user_service: UserService::new(repository),
        }
    }

    pub async fn handle(&self, request: GatewayRequest) -> GatewayResponse {
        debug!("Handling {} request", request.method);
        let result = match request.method.as_str() {
            "GET" => self.list_users().await,
            "POST" => self.create_user(&request).await,
            "PUT" => self.update_user(&request).await,
            "DELETE" => self.delete_user(&request).await,
            other => Err(ApiError::MethodNotAllowed(other.to_string())),
        };

        result.unwrap_or_else(|err| {
            if err.status_code() >= 500 {
                error!("{} {} failed: {}", request.method, request_target(&request), err);
            } else {
                warn!("{} {} rejected: {}", request.method, request_target(&request), err);
            }
            err.error_response()
        })
    }

    async fn list_users(&self) -> Result<GatewayResponse, ApiError> {
        let users = self.user_service.list_users().await?;
        Ok(GatewayResponse::json(200, to_json(&users)?))
    }

    async fn create_user(&self, request: &GatewayRequest) -> Result<GatewayResponse, ApiError> {
        let input = parse_input(request)?;
        let user = self.user_service.create_user(input).await?;
        Ok(GatewayResponse::json(201, to_json(&user)?))
    }

    async fn update_user(&self, request: &GatewayRequest) -> Result<GatewayResponse, ApiError> {
        let id = parse_id(request)?;
        let input = parse_input(request)?;
        let user = self.user_service.update_user(id, input).await?;
        Ok(GatewayResponse::json(200, to_json(&user)?))
    }

    async fn delete_user(&self, request: &GatewayRequest) -> Result<GatewayResponse, ApiError> {
        let id = parse_id(request)?;
        self.user_service.delete_user(id).await?;
        Ok(GatewayResponse::no_content())
    }
}

fn parse_id(request: &GatewayRequest) -> Result<i32, ApiError> {
    let raw = request
        .path_parameter(PATH_PARAM_ID)
        .ok_or_else(|| ApiError::BadRequest(ERR_MISSING_USER_ID.to_string()))?;
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("{}: {:?}", ERR_INVALID_USER_ID, raw)))
}

fn parse_input(request: &GatewayRequest) -> Result<UserInput, ApiError> {
    UserInput::from_json(request.body_str())
        .map_err(|e| ApiError::BadRequest(format!("malformed request body: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| {
        ApiError::InternalServerError(format!("failed to serialize response: {}", e))
    })
}

fn request_target(request: &GatewayRequest) -> String {
    match request.path_parameter(PATH_PARAM_ID) {
        Some(id) => format!("/users/{}", id),
        None => "/users".to_string(),
    }
}
