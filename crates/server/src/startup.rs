use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::{init_logging_default, init_logging_json};
use configs::{AppConfig, LogFormat};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

/// Install the tracing subscriber selected by `logging.format`.
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    cfg.server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Connect, migrate and assemble the router for an already-loaded config.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    Ok(routes::build_router(ServerState::new(db)))
}

/// Config file, else defaults plus `SERVER_*` / `DATABASE_URL` from the environment.
pub fn load_config() -> anyhow::Result<AppConfig> {
    dotenv().ok();
    AppConfig::load_or_env()
}

/// Build the app and serve until Ctrl+C.
pub async fn serve(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;
    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting hotel api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_host_is_invalid_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
        cfg.server.host = "127.0.0.1".into();
        assert_eq!(bind_addr(&cfg).unwrap().port(), cfg.server.port);
    }
}
