//! PostgreSQL stores for the ecom-datagen order pipeline.
//!
//! Implements [`datagen_core::RetailStore`], [`datagen_core::LogisticsStore`]
//! and [`datagen_core::AccountsStore`] on top of tokio-postgres. The three
//! stores are separate connections, usually to separate databases; no
//! statement or transaction ever spans two of them.

pub mod args;
pub mod error;
pub mod insert;
pub mod store;

pub use args::PostgreSQLConnectionArgs;
pub use error::PostgreSQLStoreError;
pub use store::{
    close_all, connect_all, PostgreSQLAccounts, PostgreSQLLogistics, PostgreSQLRetail,
    PostgreSQLStore, PostgreSQLStores,
};
