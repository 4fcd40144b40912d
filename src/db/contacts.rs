use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Contact, NewContact};

use super::{ContactStore, StoreError};

pub async fn create(pool: &PgPool, contact: &NewContact) -> Result<Contact, sqlx::Error> {
    sqlx::query_as::<_, Contact>(
        "INSERT INTO contacts (name, email, message)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(contact.name())
    .bind(contact.email())
    .bind(contact.message())
    .fetch_one(pool)
    .await
}

pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    fn backend(&self) -> &str {
        "postgres"
    }

    async fn insert(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        Ok(create(&self.pool, contact).await?)
    }
}
