//! Process-wide database bootstrap.
//!
//! The pool returned by [`bootstrap`] is the only connection state in the
//! process. `main` owns it, hands clones to the repository and closes it once
//! the serving loop has returned.

use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;
use crate::errors::BootstrapError;
use crate::repositories::PgUserRepository;

/// Connect to the database and make sure the users table exists.
pub async fn bootstrap(config: &Config) -> Result<PgPool, BootstrapError> {
    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .map_err(BootstrapError::Connect)?;
    info!("Connected to PostgreSQL successfully!");

    PgUserRepository::new(pool.clone())
        .ensure_table()
        .await
        .map_err(BootstrapError::CreateTable)?;

    Ok(pool)
}
