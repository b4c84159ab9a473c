//! Store traits, one per database.
//!
//! Each trait covers exactly the reads and writes the generator performs
//! against that database. Implementations are expected to run every
//! single-row write in autocommit mode and every multi-row seed write
//! inside one transaction.

use crate::rows::{NewCustomer, NewOrder, NewShipment, NewTransaction, NewWarehouse};
use crate::settings::SettingRow;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Which of the three databases an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Retail,
    Logistics,
    Accounts,
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKind::Retail => write!(f, "retail"),
            StoreKind::Logistics => write!(f, "logistics"),
            StoreKind::Accounts => write!(f, "accounts"),
        }
    }
}

/// Errors returned by store implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying database client failed.
    #[error("{store} database error: {source}")]
    Database {
        store: StoreKind,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The store refused the write (constraint violation and the like).
    #[error("{store} store rejected write: {reason}")]
    Rejected { store: StoreKind, reason: String },
}

impl StoreError {
    pub fn database<E>(store: StoreKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Database {
            store,
            source: Box::new(source),
        }
    }

    pub fn rejected(store: StoreKind, reason: impl Into<String>) -> Self {
        StoreError::Rejected {
            store,
            reason: reason.into(),
        }
    }

    /// The database this error came from.
    pub fn store(&self) -> StoreKind {
        match self {
            StoreError::Database { store, .. } | StoreError::Rejected { store, .. } => *store,
        }
    }
}

/// Customers, orders and the settings table.
#[async_trait]
pub trait RetailStore: Send {
    /// Every `(name, value)` pair of the settings table, unfiltered.
    async fn load_settings(&mut self) -> Result<Vec<SettingRow>, StoreError>;

    /// Insert all customers in one transaction and return their ids in order.
    async fn insert_customers(
        &mut self,
        customers: &[NewCustomer],
    ) -> Result<Vec<i64>, StoreError>;

    /// All customer ids currently stored.
    async fn customer_ids(&mut self) -> Result<Vec<i64>, StoreError>;

    /// Insert one order. `None` means the store did not return an id.
    async fn insert_order(&mut self, order: &NewOrder) -> Result<Option<i64>, StoreError>;
}

/// Cities, warehouses and shipments.
#[async_trait]
pub trait LogisticsStore: Send {
    /// Insert cities that are not present yet. Returns how many were new.
    async fn insert_cities(&mut self, names: &[&str]) -> Result<u64, StoreError>;

    /// Insert all warehouses in one transaction and return their ids in order.
    async fn insert_warehouses(
        &mut self,
        warehouses: &[NewWarehouse],
    ) -> Result<Vec<i64>, StoreError>;

    /// All warehouse ids currently stored.
    async fn warehouse_ids(&mut self) -> Result<Vec<i64>, StoreError>;

    async fn insert_shipment(&mut self, shipment: &NewShipment) -> Result<(), StoreError>;
}

/// Payment methods and financial transactions.
#[async_trait]
pub trait AccountsStore: Send {
    /// Insert payment methods that are not present yet. Returns how many were new.
    async fn insert_payment_methods(&mut self, names: &[&str]) -> Result<u64, StoreError>;

    async fn insert_transaction(&mut self, transaction: &NewTransaction)
        -> Result<(), StoreError>;
}

/// The three independent store handles used by one run.
///
/// There is no transaction spanning the handles: a failure after the
/// order insert leaves the order without its shipment or transaction.
#[derive(Debug)]
pub struct Stores<R, L, A> {
    pub retail: R,
    pub logistics: L,
    pub accounts: A,
}

impl<R, L, A> Stores<R, L, A>
where
    R: RetailStore,
    L: LogisticsStore,
    A: AccountsStore,
{
    pub fn new(retail: R, logistics: L, accounts: A) -> Self {
        Self {
            retail,
            logistics,
            accounts,
        }
    }
}
