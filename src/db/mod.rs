pub mod repository;

use std::str::FromStr;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::{debug, info};

use crate::config::DatabaseConfig;

pub use repository::{SqliteTodoRepository, TodoRepository};

const SCHEMA: &str = include_str!("schema.sql");

/// Open a connection pool for `config.url`, creating the database file if needed.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .busy_timeout(config.timeout);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.timeout);

    // Each connection to an in-memory database sees its own empty database,
    // and the data is gone once that connection closes.
    if is_in_memory(&config.url) {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;

    info!("connected to database at {}", config.url);
    Ok(pool)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Create the `todo` table when it does not exist yet.
pub async fn ensure_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(db).await?;
    debug!("todo schema ready");
    Ok(())
}
