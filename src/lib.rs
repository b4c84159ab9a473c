//! ecom-datagen library
//!
//! Seeds and continuously generates synthetic e-commerce data across three
//! PostgreSQL databases: retail (customers, orders, settings), logistics
//! (cities, warehouses, shipments) and accounts (payment methods,
//! transactions).
//!
//! # Flow
//!
//! 1. [`config::load_settings`] reads the operator-controlled settings table
//! 2. On a first load, [`seed::seed_all`] creates reference data, warehouses
//!    and customers; otherwise [`seed::load_identifiers`] reads the
//!    existing ids
//! 3. While continuous loading is on, [`pipeline::run_batch`] writes one
//!    order, one shipment and one transaction per iteration, and the
//!    [`driver::Driver`] re-reads the settings between batches
//!
//! The stores are independent connections. An iteration that fails after
//! its order was written leaves that order without a shipment or a
//! transaction; nothing is rolled back across stores.
//!
//! # CLI Usage
//!
//! ```bash
//! ecom-datagen \
//!   --retail-connection-string "host=localhost user=postgres dbname=retail" \
//!   --logistics-connection-string "host=localhost user=postgres dbname=logistics" \
//!   --accounts-connection-string "host=localhost user=postgres dbname=accounts"
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod pipeline;
pub mod seed;
pub mod testing;

pub use driver::{Driver, RunSummary};
pub use error::DatagenError;
pub use pipeline::{run_batch, BatchMetrics};
pub use seed::{Identifiers, CUSTOMER_COUNT, WAREHOUSE_COUNT};
