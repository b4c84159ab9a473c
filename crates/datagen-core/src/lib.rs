//! Core types for the ecom-datagen framework.
//!
//! This crate provides the foundational types shared by the generator,
//! the PostgreSQL store implementation and the driver:
//!
//! - [`Settings`] - Snapshot of the operator-controlled settings table
//! - [`NewOrder`], [`NewShipment`], [`NewTransaction`] - Rows produced per iteration
//! - [`NewWarehouse`], [`NewCustomer`] - Rows produced by the first-load seeders
//! - [`RetailStore`], [`LogisticsStore`], [`AccountsStore`] - One trait per database
//! - [`reference`] - Fixed lookup lists and the identifier ranges derived from them
//!
//! # Architecture
//!
//! ```text
//! datagen-core (this crate)
//!    │
//!    ├─── datagen-generator   (produces rows defined here)
//!    ├─── datagen-postgresql  (implements the store traits)
//!    └─── ecom-datagen        (seeders, order generator, driver loop)
//! ```
//!
//! The three stores are independent. Nothing in these traits spans more
//! than one of them, so an order, its shipment and its transaction are
//! only consistent on a best-effort basis.

pub mod reference;
pub mod rows;
pub mod settings;
pub mod store;

// Re-exports for convenience
pub use reference::{CITIES, PAYMENT_METHODS};
pub use rows::{NewCustomer, NewOrder, NewShipment, NewTransaction, NewWarehouse};
pub use settings::{SettingRow, Settings, SettingsError};
pub use store::{AccountsStore, LogisticsStore, RetailStore, StoreError, StoreKind, Stores};
