use utoipa::OpenApi;

use crate::models::{HealthResponse, User, UserInput};

/// OpenAPI documentation for the local users server
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Gateway API",
        version = "0.1.0",
        description = "CRUD over a single users table. The same handler serves API Gateway proxy events in Lambda mode.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "List, create, update and delete users")
    ),
    paths(
        crate::routes::list_users,
        crate::routes::create_user,
        crate::routes::update_user,
        crate::routes::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            User,
            UserInput,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
