//! SQL statements and single-statement helpers.
//!
//! Identifiers are cast to `bigint` on the way in and out so the stores
//! may use either `SERIAL` or `BIGSERIAL` keys. Every helper takes a
//! [`GenericClient`] so the same code runs in autocommit mode on a
//! [`tokio_postgres::Client`] and inside a seed transaction.

use crate::error::PostgreSQLStoreError;
use datagen_core::{NewCustomer, NewOrder, NewShipment, NewTransaction, NewWarehouse, SettingRow};
use tokio_postgres::GenericClient;

pub const SELECT_SETTINGS: &str = "SELECT name::text, value::text FROM settings";

pub const INSERT_CITY: &str =
    "INSERT INTO Cities (city_name) VALUES ($1) ON CONFLICT (city_name) DO NOTHING";

pub const INSERT_PAYMENT_METHOD: &str =
    "INSERT INTO paymentmethods (method_name) VALUES ($1) ON CONFLICT (method_name) DO NOTHING";

pub const INSERT_WAREHOUSE: &str = "INSERT INTO Warehouses (location, capacity) \
     VALUES ($1, $2::integer) RETURNING warehouse_id::bigint";

pub const INSERT_CUSTOMER: &str = "INSERT INTO Customers (name, email, address, phone) \
     VALUES ($1, $2, $3, $4) RETURNING customer_id::bigint";

pub const SELECT_WAREHOUSE_IDS: &str = "SELECT warehouse_id::bigint FROM Warehouses";

pub const SELECT_CUSTOMER_IDS: &str = "SELECT customer_id::bigint FROM Customers";

pub const INSERT_ORDER: &str = "INSERT INTO Orders (customer_id, order_date, total_amount) \
     VALUES ($1::bigint, $2::timestamp, $3::numeric) RETURNING order_id::bigint";

pub const INSERT_SHIPMENT: &str = "INSERT INTO Shipments \
     (order_id, warehouse_id, shipment_date, delivery_date, total_amount, city_id) \
     VALUES ($1::bigint, $2::bigint, $3::timestamp, $4::date, $5::numeric, $6::bigint)";

pub const INSERT_TRANSACTION: &str = "INSERT INTO transactions \
     (order_id, customer_id, payment_method_id, transaction_date, amount) \
     VALUES ($1::bigint, $2::bigint, $3::bigint, $4::timestamp, $5::numeric)";

/// Read every row of the settings table.
pub async fn select_settings<C: GenericClient>(
    client: &C,
) -> Result<Vec<SettingRow>, PostgreSQLStoreError> {
    let rows = client.query(SELECT_SETTINGS, &[]).await?;
    Ok(rows
        .iter()
        .map(|row| (row.get::<_, String>(0), row.get::<_, String>(1)))
        .collect())
}

/// Run a single-parameter `INSERT ... ON CONFLICT DO NOTHING` for each
/// name. Returns how many rows were actually inserted.
pub async fn insert_names<C: GenericClient>(
    client: &C,
    sql: &str,
    names: &[&str],
) -> Result<u64, PostgreSQLStoreError> {
    let statement = client.prepare(sql).await?;
    let mut inserted = 0;
    for name in names {
        inserted += client.execute(&statement, &[name]).await?;
    }
    Ok(inserted)
}

pub async fn insert_warehouse<C: GenericClient>(
    client: &C,
    warehouse: &NewWarehouse,
) -> Result<i64, PostgreSQLStoreError> {
    let row = client
        .query_one(INSERT_WAREHOUSE, &[&warehouse.location, &warehouse.capacity])
        .await?;
    Ok(row.get(0))
}

pub async fn insert_customer<C: GenericClient>(
    client: &C,
    customer: &NewCustomer,
) -> Result<i64, PostgreSQLStoreError> {
    let row = client
        .query_one(
            INSERT_CUSTOMER,
            &[
                &customer.name,
                &customer.email,
                &customer.address,
                &customer.phone,
            ],
        )
        .await?;
    Ok(row.get(0))
}

/// Read a single `bigint` column from every returned row.
pub async fn select_ids<C: GenericClient>(
    client: &C,
    sql: &str,
) -> Result<Vec<i64>, PostgreSQLStoreError> {
    let rows = client.query(sql, &[]).await?;
    Ok(rows.iter().map(|row| row.get(0)).collect())
}

/// Insert an order. `None` when the statement returned no row.
pub async fn insert_order<C: GenericClient>(
    client: &C,
    order: &NewOrder,
) -> Result<Option<i64>, PostgreSQLStoreError> {
    let row = client
        .query_opt(
            INSERT_ORDER,
            &[&order.customer_id, &order.order_date, &order.total_amount],
        )
        .await?;
    Ok(row.map(|row| row.get(0)))
}

pub async fn insert_shipment<C: GenericClient>(
    client: &C,
    shipment: &NewShipment,
) -> Result<u64, PostgreSQLStoreError> {
    Ok(client
        .execute(
            INSERT_SHIPMENT,
            &[
                &shipment.order_id,
                &shipment.warehouse_id,
                &shipment.shipment_date,
                &shipment.delivery_date,
                &shipment.total_amount,
                &shipment.city_id,
            ],
        )
        .await?)
}

pub async fn insert_transaction<C: GenericClient>(
    client: &C,
    transaction: &NewTransaction,
) -> Result<u64, PostgreSQLStoreError> {
    Ok(client
        .execute(
            INSERT_TRANSACTION,
            &[
                &transaction.order_id,
                &transaction.customer_id,
                &transaction.payment_method_id,
                &transaction.transaction_date,
                &transaction.amount,
            ],
        )
        .await?)
}
