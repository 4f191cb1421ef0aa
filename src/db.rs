use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;
use crate::gateway::{Gateway, MemoryGateway, PgGateway};

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Postgres when DATABASE_URL is set, otherwise an in-memory store that
/// forgets everything on restart.
pub async fn connect_gateway(config: &AppConfig) -> Result<Arc<dyn Gateway>, sqlx::Error> {
    match &config.database_url {
        Some(url) => {
            let pool = init_pool(url, config.max_connections).await?;
            run_migrations(&pool).await?;
            log::info!("Connected to Postgres ({} connections)", config.max_connections);
            Ok(Arc::new(PgGateway::new(pool)))
        }
        None => {
            log::warn!("DATABASE_URL not set, using in-memory storage (data lost on restart)");
            Ok(Arc::new(MemoryGateway::new()))
        }
    }
}
