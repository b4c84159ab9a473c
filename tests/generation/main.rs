//! Generation tests against the in-memory stores.
//!
//! These cover the observable behavior of a run without a database:
//! 1. Seeding is idempotent for reference data and creates the fixed
//!    number of warehouses and customers
//! 2. Every batch attempts exactly `batch_size` iterations, whatever fails
//! 3. Shipments and transactions always point at a stored order and carry
//!    its amount
//! 4. The driver follows the settings table from one batch to the next

mod orders;
mod seeding;
