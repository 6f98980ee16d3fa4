//! Roster entry-point: wires the users REST endpoints to an HTTP listener.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use roster::outbound::persistence::{DbPool, PoolConfig};
use server::{ServerConfig, ServerSettings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    if let Some(database_url) = settings.database_url.as_deref() {
        let pool_config =
            PoolConfig::new(database_url).with_connection_timeout(settings.connect_timeout());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
        info!("using PostgreSQL storage");
        config = config.with_db_pool(pool);
    } else {
        info!("using in-memory storage");
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting HTTP listener");
    server::create_server(health_state, config)?.await
}
