//! Routes for the local development server.
//!
//! Every users route funnels into the same [`UserHandler`] the Lambda entry
//! point uses, so method dispatch and status codes are identical in both
//! modes. Methods without a dedicated route still reach the handler and get
//! its "method not allowed" response.

use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::constants::PATH_PARAM_ID;
use crate::handlers::UserHandler;
use crate::models::{GatewayRequest, GatewayResponse, HealthResponse, User, UserInput};
use crate::openapi::ApiDoc;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health_check))
        .route("/api/openapi.json", web::get().to(openapi_json))
        .service(
            web::resource("/users")
                // List all users
                .route(web::get().to(list_users))
                // Create a user
                .route(web::post().to(create_user))
                .default_service(web::to(forward)),
        )
        .service(
            web::resource("/users/{id}")
                // Replace name and email
                .route(web::put().to(update_user))
                // Delete a user
                .route(web::delete().to(delete_user))
                .default_service(web::to(forward)),
        );
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user, in no particular order", body = [User]),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn list_users(
    handler: web::Data<UserHandler>,
    req: HttpRequest,
    body: String,
) -> HttpResponse {
    forward(handler, req, body).await
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created with a database-assigned id", body = User),
        (status = 400, description = "Body is not a JSON object", body = String),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn create_user(
    handler: web::Data<UserHandler>,
    req: HttpRequest,
    body: String,
) -> HttpResponse {
    forward(handler, req, body).await
}

/// Replace a user's name and email
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UserInput,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Id is not an integer or body is malformed", body = String),
        (status = 404, description = "No user with this id", body = String),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn update_user(
    handler: web::Data<UserHandler>,
    req: HttpRequest,
    body: String,
) -> HttpResponse {
    forward(handler, req, body).await
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Id is not an integer", body = String),
        (status = 404, description = "No user with this id", body = String),
        (status = 500, description = "Storage failure", body = String)
    )
)]
pub async fn delete_user(
    handler: web::Data<UserHandler>,
    req: HttpRequest,
    body: String,
) -> HttpResponse {
    forward(handler, req, body).await
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: "Server is running".to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    use utoipa::OpenApi;
    HttpResponse::Ok().json(ApiDoc::openapi())
}

async fn forward(handler: web::Data<UserHandler>, req: HttpRequest, body: String) -> HttpResponse {
    let response = handler.handle(gateway_request(&req, body)).await;
    http_response(response)
}

fn gateway_request(req: &HttpRequest, body: String) -> GatewayRequest {
    let request = GatewayRequest::new(req.method().as_str()).with_body(body);
    match req.match_info().get(PATH_PARAM_ID) {
        Some(id) => request.with_path_parameter(PATH_PARAM_ID, id),
        None => request,
    }
}

fn http_response(response: GatewayResponse) -> HttpResponse {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);
    if let Some(content_type) = response.content_type {
        builder.content_type(content_type);
    }
    if response.body.is_empty() {
        builder.finish()
    } else {
        builder.body(response.body)
    }
}
