//! Service entry-point: wires logging, configuration, persistence, and the
//! HTTP server.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use intake::inbound::http::health::HealthState;
use intake::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use intake::server::{ServerConfig, create_server};

const DEFAULT_PORT: u16 = 8000;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let port = env::var("API_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let bind_addr = SocketAddr::from(([0, 0, 0, 0], port));

    let mut config = ServerConfig::new(bind_addr);
    match env::var("DATABASE_URL") {
        Ok(database_url) => {
            run_pending_migrations(&database_url)
                .await
                .wrap_err("apply database migrations")?;
            let pool = DbPool::new(PoolConfig::new(database_url))
                .await
                .wrap_err("build database pool")?;
            config = config.with_db_pool(pool);
        }
        Err(_) => {
            warn!("DATABASE_URL not set; records are kept in memory and lost on restart");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting intake server");
    create_server(health_state, config)?
        .await
        .wrap_err("server terminated")
}
