use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Connect with pool settings from configuration.
///
/// An in-memory SQLite database lives inside a single connection, so the pool
/// is pinned to exactly one connection in that case.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);

    if cfg.is_sqlite() && cfg.url.contains(":memory:") {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }

    let db = Database::connect(opt).await?;
    info!(backend = ?db.get_database_backend(), "database connected");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbBackend;

    #[tokio::test]
    async fn memory_sqlite_connects_as_sqlite() -> anyhow::Result<()> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
        let db = connect_with_config(&cfg).await?;
        assert_eq!(db.get_database_backend(), DbBackend::Sqlite);
        db.ping().await?;
        Ok(())
    }
}
