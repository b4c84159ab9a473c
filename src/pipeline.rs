//! Order, shipment and transaction generation.
//!
//! Each iteration writes to all three stores in turn, linked by the order
//! id the retail store hands back. The writes are independent: when the
//! shipment or transaction insert fails, the rows already written for
//! that iteration stay where they are.

use crate::error::DatagenError;
use crate::seed::Identifiers;
use chrono::{Local, NaiveDateTime};
use datagen_core::{AccountsStore, LogisticsStore, NewOrder, RetailStore, StoreError, Stores};
use datagen_generator::DataGenerator;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info};

/// Iterations between two progress lines.
pub const PROGRESS_INTERVAL: u64 = 1000;

/// Counters for one batch, or for a whole run once merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchMetrics {
    /// Iterations started.
    pub attempted: u64,
    /// Orders inserted with an id returned.
    pub orders: u64,
    pub shipments: u64,
    pub transactions: u64,
    /// Order inserts that returned no id.
    pub missing_ids: u64,
    /// Iterations abandoned because of a store error.
    pub failures: u64,
    pub duration: Duration,
}

impl BatchMetrics {
    /// Calculate orders per second.
    pub fn orders_per_second(&self) -> f64 {
        if self.duration.as_secs_f64() > 0.0 {
            self.orders as f64 / self.duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Add another batch's counters to these.
    pub fn merge(&mut self, other: &BatchMetrics) {
        self.attempted += other.attempted;
        self.orders += other.orders;
        self.shipments += other.shipments;
        self.transactions += other.transactions;
        self.missing_ids += other.missing_ids;
        self.failures += other.failures;
        self.duration += other.duration;
    }
}

/// Why a single iteration stopped early.
#[derive(Error, Debug)]
enum IterationError {
    #[error("order insert returned no order_id")]
    MissingOrderId,

    #[error("no warehouses to ship order {0} from")]
    NoWarehouses(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Attempt exactly `batch_size` order/shipment/transaction triples.
///
/// Failures while writing an iteration's rows are logged and counted,
/// never returned. Picking the customer comes before any write, so an
/// empty customer list ends the run instead.
pub async fn run_batch<R, L, A>(
    stores: &mut Stores<R, L, A>,
    generator: &mut DataGenerator,
    ids: &Identifiers,
    batch_size: u64,
) -> Result<BatchMetrics, DatagenError>
where
    R: RetailStore,
    L: LogisticsStore,
    A: AccountsStore,
{
    let start = Instant::now();
    let mut metrics = BatchMetrics::default();

    for i in 0..batch_size {
        let Some(customer_id) = generator.pick(&ids.customer_ids) else {
            return Err(DatagenError::NoCustomers);
        };
        metrics.attempted += 1;
        let now = Local::now().naive_local();
        let order = generator.order(customer_id, now);

        match place_order(stores, generator, ids, &order, now, &mut metrics).await {
            Ok(order_id) => debug!("Order {} written to all stores", order_id),
            Err(IterationError::MissingOrderId) => {
                error!("Failed to retrieve order_id, skipping shipment and transaction");
                metrics.missing_ids += 1;
            }
            Err(e) => {
                error!("Order iteration failed: {}", e);
                metrics.failures += 1;
            }
        }

        if i % PROGRESS_INTERVAL == 0 {
            info!("Processed {} orders and shipments", i);
        }
    }

    metrics.duration = start.elapsed();
    info!(
        "{} orders and shipments added ({} complete, {} missing ids, {} failed, {:.2} orders/sec)",
        batch_size,
        metrics.transactions,
        metrics.missing_ids,
        metrics.failures,
        metrics.orders_per_second()
    );

    Ok(metrics)
}

/// Write one order, then its shipment, then its transaction. Returns the
/// order id once all three are stored.
async fn place_order<R, L, A>(
    stores: &mut Stores<R, L, A>,
    generator: &mut DataGenerator,
    ids: &Identifiers,
    order: &NewOrder,
    now: NaiveDateTime,
    metrics: &mut BatchMetrics,
) -> Result<i64, IterationError>
where
    R: RetailStore,
    L: LogisticsStore,
    A: AccountsStore,
{
    let order_id = stores
        .retail
        .insert_order(order)
        .await?
        .ok_or(IterationError::MissingOrderId)?;
    metrics.orders += 1;

    let warehouse_id = generator
        .pick(&ids.warehouse_ids)
        .ok_or(IterationError::NoWarehouses(order_id))?;
    let shipment = generator.shipment(order_id, order, warehouse_id, now);
    stores.logistics.insert_shipment(&shipment).await?;
    metrics.shipments += 1;

    let transaction = generator.transaction(order_id, order);
    stores.accounts.insert_transaction(&transaction).await?;
    metrics.transactions += 1;

    Ok(order_id)
}
