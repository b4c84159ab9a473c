//! PostgreSQL store integration test.
//!
//! Needs three empty databases. Connection strings come from
//! `DATAGEN_TEST_RETAIL_URL`, `DATAGEN_TEST_LOGISTICS_URL` and
//! `DATAGEN_TEST_ACCOUNTS_URL`. The fixture DDL under `tests/fixtures`
//! drops and recreates the tables before the test runs.
//!
//! ```bash
//! cargo test --test postgresql_stores -- --ignored
//! ```

use datagen_generator::DataGenerator;
use datagen_postgresql::{close_all, connect_all, PostgreSQLConnectionArgs};
use ecom_datagen::seed::{load_identifiers, seed_reference_data};
use ecom_datagen::{run_batch, Driver, CUSTOMER_COUNT, WAREHOUSE_COUNT};
use rust_decimal::Decimal;
use std::collections::HashMap;
use tokio_postgres::{Client, NoTls};

const SEED: u64 = 42;

fn connection_args() -> PostgreSQLConnectionArgs {
    let url = |var: &str, db: &str| {
        std::env::var(var).unwrap_or_else(|_| {
            format!("host=localhost port=5432 user=postgres password=postgres dbname={db}")
        })
    };
    PostgreSQLConnectionArgs {
        retail_connection_string: url("DATAGEN_TEST_RETAIL_URL", "retail"),
        logistics_connection_string: url("DATAGEN_TEST_LOGISTICS_URL", "logistics"),
        accounts_connection_string: url("DATAGEN_TEST_ACCOUNTS_URL", "accounts"),
    }
}

async fn raw_client(connection_string: &str) -> Client {
    let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
        .await
        .expect("Failed to connect to PostgreSQL");
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("PostgreSQL connection error: {}", e);
        }
    });
    client
}

async fn count(client: &Client, table: &str) -> i64 {
    client
        .query_one(&format!("SELECT COUNT(*) FROM {table}"), &[])
        .await
        .unwrap()
        .get(0)
}

async fn amounts(client: &Client, table: &str, column: &str) -> HashMap<i64, Decimal> {
    client
        .query(
            &format!("SELECT order_id::bigint, {column} FROM {table}"),
            &[],
        )
        .await
        .unwrap()
        .iter()
        .map(|row| (row.get(0), row.get(1)))
        .collect()
}

#[tokio::test]
#[ignore = "requires retail, logistics and accounts PostgreSQL databases"]
async fn test_postgresql_first_load_and_batch() {
    tracing_subscriber::fmt()
        .with_env_filter("ecom_datagen=info,datagen_postgresql=info")
        .try_init()
        .ok();

    let args = connection_args();
    let retail = raw_client(&args.retail_connection_string).await;
    let logistics = raw_client(&args.logistics_connection_string).await;
    let accounts = raw_client(&args.accounts_connection_string).await;

    // === SETUP ===
    retail
        .batch_execute(include_str!("../fixtures/retail.sql"))
        .await
        .unwrap();
    logistics
        .batch_execute(include_str!("../fixtures/logistics.sql"))
        .await
        .unwrap();
    accounts
        .batch_execute(include_str!("../fixtures/accounts.sql"))
        .await
        .unwrap();

    let mut stores = connect_all(&args).await.unwrap();

    // === PHASE 1: first load (first_load=1, continous_loading=0) ===
    let summary = Driver::new(DataGenerator::new(SEED))
        .run(&mut stores)
        .await
        .unwrap();
    assert!(summary.seeded);
    assert_eq!(summary.batches, 0);

    assert_eq!(count(&logistics, "Cities").await, 10);
    assert_eq!(count(&accounts, "paymentmethods").await, 5);
    assert_eq!(count(&logistics, "Warehouses").await, WAREHOUSE_COUNT as i64);
    assert_eq!(count(&retail, "Customers").await, CUSTOMER_COUNT as i64);
    assert_eq!(count(&retail, "Orders").await, 0);

    // === PHASE 2: reference seeding is idempotent ===
    seed_reference_data(&mut stores.logistics, &mut stores.accounts)
        .await
        .unwrap();
    assert_eq!(count(&logistics, "Cities").await, 10);
    assert_eq!(count(&accounts, "paymentmethods").await, 5);

    // === PHASE 3: one batch against the existing ids ===
    let ids = load_identifiers(&mut stores).await.unwrap();
    assert_eq!(ids.warehouse_ids.len(), WAREHOUSE_COUNT);
    assert_eq!(ids.customer_ids.len(), CUSTOMER_COUNT);

    let mut generator = DataGenerator::new(SEED + 1);
    let metrics = run_batch(&mut stores, &mut generator, &ids, 5)
        .await
        .unwrap();
    assert_eq!(metrics.transactions, 5);

    let orders = amounts(&retail, "Orders", "total_amount").await;
    let shipments = amounts(&logistics, "Shipments", "total_amount").await;
    let transactions = amounts(&accounts, "transactions", "amount").await;
    assert_eq!(orders.len(), 5);
    assert_eq!(orders, shipments);
    assert_eq!(orders, transactions);

    close_all(stores).await;
}
