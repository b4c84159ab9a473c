//! Error types for the PostgreSQL stores.

use datagen_core::{StoreError, StoreKind};
use thiserror::Error;

/// Errors that can occur while talking to one of the PostgreSQL databases.
#[derive(Error, Debug)]
pub enum PostgreSQLStoreError {
    /// PostgreSQL query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Connection error.
    #[error("Failed to connect to {store} database: {source}")]
    Connect {
        store: StoreKind,
        #[source]
        source: tokio_postgres::Error,
    },
}

impl PostgreSQLStoreError {
    /// Attribute this error to `store`.
    pub fn into_store_error(self, store: StoreKind) -> StoreError {
        match self {
            PostgreSQLStoreError::PostgreSQL(source)
            | PostgreSQLStoreError::Connect { source, .. } => StoreError::database(store, source),
        }
    }
}
