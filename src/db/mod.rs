pub mod contacts;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::models::{Contact, NewContact};

pub use contacts::PgContactStore;
pub use memory::MemoryContactStore;

/// Connection strings with this prefix select [`MemoryContactStore`].
pub const MEMORY_URL_PREFIX: &str = "memory://";

#[derive(Debug)]
pub enum StoreError {
    Unavailable(String),
    Database(sqlx::Error),
    Migrate(sqlx::migrate::MigrateError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
            StoreError::Database(err) => write!(f, "Database error: {err}"),
            StoreError::Migrate(err) => write!(f, "Migration error: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Migrate(err)
    }
}

/// Write side of the contacts collection.
///
/// An insert either stores one complete record or fails without leaving
/// anything behind. There is deliberately no read path here.
#[async_trait]
pub trait ContactStore: Send + Sync {
    fn backend(&self) -> &str;
    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError>;
}

pub type SharedStore = Arc<dyn ContactStore>;

/// Open the store named by `config.database_url`, applying migrations for
/// Postgres. Called once at startup; the handle is shared by all requests.
pub async fn connect(config: &Config) -> Result<SharedStore, StoreError> {
    if config.database_url.starts_with(MEMORY_URL_PREFIX) {
        tracing::warn!("Using in-memory contact store, submissions will not survive a restart");
        return Ok(Arc::new(MemoryContactStore::new()));
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    Ok(Arc::new(PgContactStore::new(pool)))
}
