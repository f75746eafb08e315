pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

use std::time::Duration;

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

use crate::error::Result;

/// Schema migrations embedded at compile time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection pool sizing.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolSettings {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl PoolSettings {
    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// Shared handle to the relational store.
///
/// Cloning is cheap; every clone shares the same pool. Connections are
/// checked out per operation and returned to the pool when dropped.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect eagerly, failing if the database cannot be reached.
    pub async fn connect(database_url: &str, settings: &PoolSettings) -> Result<Self> {
        let pool = settings.pool_options().connect(database_url).await?;
        Ok(Self { pool })
    }

    /// Build the pool without opening a connection until the first query.
    pub fn connect_lazy(database_url: &str, settings: &PoolSettings) -> Result<Self> {
        let pool = settings.pool_options().connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Round-trip a trivial query to check the store is reachable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
