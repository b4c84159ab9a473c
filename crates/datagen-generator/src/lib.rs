//! Synthetic data generator for the ecom-datagen order pipeline.
//!
//! This crate provides the [`DataGenerator`] which produces warehouses,
//! customers, orders, shipments and transactions. The generator owns a
//! seeded RNG so that a run with a fixed seed is reproducible given the
//! same identifiers and clock readings.
//!
//! # Architecture
//!
//! ```text
//!    seed (u64) or OS entropy
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - rng (StdRng) │
//! └────────┬────────┘
//!          │
//!          ▼
//!    NewWarehouse / NewCustomer / NewOrder / NewShipment / NewTransaction
//! ```
//!
//! # Example
//!
//! ```rust
//! use datagen_generator::DataGenerator;
//!
//! let mut generator = DataGenerator::new(42);
//! let customers = generator.customers(3).unwrap();
//! assert_eq!(customers.len(), 3);
//! ```
//!
//! # Value generators
//!
//! - [`generators::contact`] - names, emails, addresses, phone numbers, locations
//! - [`generators::numeric`] - integer ranges and two-decimal amounts
//! - [`generators::timestamp`] - dates within the current year and near-future dates

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{
    DataGenerator, GeneratorError, DELIVERY_DAYS, MAX_EMAIL_ATTEMPTS, ORDER_AMOUNT_CENTS,
    PHONE_MAX_LEN, WAREHOUSE_CAPACITY,
};
