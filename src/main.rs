use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::config::AppConfig;
use todo_api::db::{self, SqliteTodoRepository};
use todo_api::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "todo_api=debug,tower_http=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let pool = db::connect(&config.database).await?;
    db::ensure_schema(&pool).await?;

    let state = AppState::new(Arc::new(SqliteTodoRepository::new(pool)));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("Server started on port {}", config.port);
    axum::serve(listener, app).await?;

    Ok(())
}
