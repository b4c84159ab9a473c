//! Order/shipment/transaction batch tests.

use chrono::{Datelike, Local, NaiveDate};
use datagen_generator::DataGenerator;
use ecom_datagen::testing::{
    memory_stores, MemoryAccounts, MemoryLogistics, MemoryRetail, MemoryStores,
};
use ecom_datagen::{run_batch, DatagenError, Identifiers};
use rust_decimal::Decimal;
use std::collections::HashMap;

const SEED: u64 = 42;

/// Stores holding 20 customers and 10 warehouses from an earlier run.
fn existing_stores() -> (MemoryStores, Identifiers) {
    let mut stores = memory_stores();
    stores.retail = MemoryRetail::new().with_existing_customers(20);
    stores.logistics = MemoryLogistics::new().with_existing_warehouses(10);
    let ids = Identifiers {
        customer_ids: (1..=20).collect(),
        warehouse_ids: (1..=10).collect(),
    };
    (stores, ids)
}

#[tokio::test]
async fn test_batch_writes_linked_rows() {
    let (mut stores, ids) = existing_stores();
    let mut generator = DataGenerator::new(SEED);

    let metrics = run_batch(&mut stores, &mut generator, &ids, 200)
        .await
        .unwrap();

    assert_eq!(metrics.attempted, 200);
    assert_eq!(metrics.orders, 200);
    assert_eq!(metrics.shipments, 200);
    assert_eq!(metrics.transactions, 200);

    let orders: HashMap<i64, _> = stores
        .retail
        .orders()
        .iter()
        .map(|(id, order)| (*id, order))
        .collect();

    for shipment in stores.logistics.shipments() {
        let order = orders[&shipment.order_id];
        assert_eq!(shipment.total_amount, order.total_amount);
        assert!(ids.warehouse_ids.contains(&shipment.warehouse_id));
        assert!((1..=10).contains(&shipment.city_id));
        assert!(shipment.delivery_date > Local::now().date_naive());
    }

    for transaction in stores.accounts.transactions() {
        let order = orders[&transaction.order_id];
        assert_eq!(transaction.amount, order.total_amount);
        assert_eq!(transaction.customer_id, order.customer_id);
        assert_eq!(transaction.transaction_date, order.order_date);
        assert!((1..=5).contains(&transaction.payment_method_id));
    }
}

#[tokio::test]
async fn test_orders_are_within_bounds() {
    let (mut stores, ids) = existing_stores();
    let mut generator = DataGenerator::new(SEED);

    let before = Local::now().naive_local();
    run_batch(&mut stores, &mut generator, &ids, 100)
        .await
        .unwrap();
    let after = Local::now().naive_local();

    let year_start = NaiveDate::from_ymd_opt(before.year(), 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    for (_, order) in stores.retail.orders() {
        assert!(ids.customer_ids.contains(&order.customer_id));
        assert!(order.order_date >= year_start);
        assert!(order.order_date <= after);
        assert_eq!(order.total_amount.scale(), 2);
        assert!(order.total_amount >= Decimal::new(2000, 2));
        assert!(order.total_amount <= Decimal::new(100_000, 2));
    }
}

#[tokio::test]
async fn test_failed_iterations_still_count() {
    let (mut stores, ids) = existing_stores();
    stores.retail = stores
        .retail
        .fail_order_call(1)
        .missing_order_id_call(3);

    let metrics = run_batch(&mut stores, &mut DataGenerator::new(SEED), &ids, 5)
        .await
        .unwrap();

    assert_eq!(metrics.attempted, 5);
    assert_eq!(stores.retail.order_calls(), 5);
    assert_eq!(metrics.failures, 1);
    assert_eq!(metrics.missing_ids, 1);
    assert_eq!(metrics.orders, 3);

    // No shipment or transaction without a stored order.
    assert_eq!(stores.logistics.shipments().len(), 3);
    assert_eq!(stores.accounts.transactions().len(), 3);
    let order_ids: Vec<i64> = stores.retail.orders().iter().map(|(id, _)| *id).collect();
    for shipment in stores.logistics.shipments() {
        assert!(order_ids.contains(&shipment.order_id));
    }
}

#[tokio::test]
async fn test_partial_failure_is_not_rolled_back() {
    let (mut stores, ids) = existing_stores();
    stores.logistics = stores.logistics.fail_shipment_call(0);
    stores.accounts = MemoryAccounts::new().fail_transaction_call(1);

    let metrics = run_batch(&mut stores, &mut DataGenerator::new(SEED), &ids, 4)
        .await
        .unwrap();

    assert_eq!(metrics.failures, 2);
    // Every order stays, including the ones whose later writes failed.
    assert_eq!(stores.retail.orders().len(), 4);
    // Iteration 0 lost its shipment and therefore its transaction.
    assert_eq!(stores.logistics.shipments().len(), 3);
    // Transaction call 1 belongs to iteration 2, which keeps its shipment.
    assert_eq!(stores.accounts.transactions().len(), 2);
}

#[tokio::test]
async fn test_empty_customer_list_is_fatal() {
    let (mut stores, mut ids) = existing_stores();
    ids.customer_ids.clear();

    let result = run_batch(&mut stores, &mut DataGenerator::new(SEED), &ids, 3).await;

    assert!(matches!(result, Err(DatagenError::NoCustomers)));
    assert_eq!(stores.retail.order_calls(), 0);
    assert!(stores.retail.orders().is_empty());
}

#[tokio::test]
async fn test_empty_customer_list_with_zero_batch_is_fine() {
    let (mut stores, mut ids) = existing_stores();
    ids.customer_ids.clear();

    let metrics = run_batch(&mut stores, &mut DataGenerator::new(SEED), &ids, 0)
        .await
        .unwrap();

    assert_eq!(metrics.attempted, 0);
}

#[tokio::test]
async fn test_empty_warehouse_list_fails_each_iteration() {
    let (mut stores, mut ids) = existing_stores();
    ids.warehouse_ids.clear();

    let metrics = run_batch(&mut stores, &mut DataGenerator::new(SEED), &ids, 3)
        .await
        .unwrap();

    assert_eq!(metrics.failures, 3);
    assert_eq!(stores.retail.orders().len(), 3);
    assert!(stores.logistics.shipments().is_empty());
    assert!(stores.accounts.transactions().is_empty());
}

#[tokio::test]
async fn test_zero_batch_does_nothing() {
    let (mut stores, ids) = existing_stores();

    let metrics = run_batch(&mut stores, &mut DataGenerator::new(SEED), &ids, 0)
        .await
        .unwrap();

    assert_eq!(metrics.attempted, 0);
    assert!(stores.retail.orders().is_empty());
}
