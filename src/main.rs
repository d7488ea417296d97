mod config;
mod constants;
mod database;
mod errors;
mod handlers;
mod lambda;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::config::{Config, ServerMode};
use crate::errors::BootstrapError;
use crate::handlers::UserHandler;
use crate::repositories::PgUserRepository;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(BootstrapError::from)?;
    info!("Starting users gateway in {} mode", config.server_mode);

    // Held for the whole process and closed only after serving stops
    let pool = database::bootstrap(&config).await?;
    let handler = Arc::new(UserHandler::new(Arc::new(PgUserRepository::new(
        pool.clone(),
    ))));

    let served = match config.server_mode {
        ServerMode::Lambda => lambda::run(handler).await,
        ServerMode::Local => run_local_server(&config, handler)
            .await
            .map_err(Into::into),
    };

    info!("Closing database connections");
    pool.close().await;
    served
}

async fn run_local_server(config: &Config, handler: Arc<UserHandler>) -> std::io::Result<()> {
    let handler = web::Data::from(handler);
    let server_addr = format!("{}:{}", config.server_host, config.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(handler.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
