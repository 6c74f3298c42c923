pub mod axum_http;
pub mod config;
pub mod observability;

use std::sync::Arc;

use anyhow::Result;
use infra::postgres::{bootstrap, postgres_connection};
use tracing::info;

pub async fn run() -> Result<()> {
    observability::init_observability("backend")?;

    let dotenvy_env = config::config_loader::load()?;
    info!(stage = %dotenvy_env.stage, "ENV has been loaded");

    let postgres_pool = Arc::new(postgres_connection::establish_connection(
        &dotenvy_env.database.url,
        dotenvy_env.database.pool_options(),
    ));
    info!(
        max_connections = dotenvy_env.database.max_connections,
        "Postgres pool has been created"
    );

    bootstrap::ensure_plans_table(Arc::clone(&postgres_pool)).await?;

    axum_http::http_serve::start(Arc::new(dotenvy_env), Arc::clone(&postgres_pool)).await?;

    drop(postgres_pool);
    info!("Postgres pool has been released");

    Ok(())
}
