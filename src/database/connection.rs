//! PostgreSQL connection handle
//!
//! Este módulo mantiene el pool durante toda la vida del servidor: se abre
//! al arrancar, se migra, se pasa explícitamente a los repositorios y se
//! cierra al apagar.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Abrir el pool y aplicar las migraciones embebidas
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        log::info!("🔌 Connecting to database {}", mask_database_url(&config.url));

        let pool = config
            .create_pool()
            .await
            .context("failed to connect to the database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("failed to run database migrations")?;

        log::info!("✅ Database ready (max {} connections)", config.max_connections);
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(self) {
        self.pool.close().await;
        log::info!("🔌 Database pool closed");
    }
}

/// Ocultar las credenciales de una URL de base de datos antes de loguearla
fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    match url[scheme_end + 3..].find('@') {
        Some(at) => format!("{}***:***@{}", &url[..scheme_end + 3], &url[scheme_end + 3 + at + 1..]),
        None => url.to_string(),
    }
}
