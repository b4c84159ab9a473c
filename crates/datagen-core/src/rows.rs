//! Rows written by the generator.
//!
//! Identifiers are assigned by the stores, so none of the `New*` types
//! carry their own primary key.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// A warehouse to be created in the logistics store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWarehouse {
    pub location: String,
    pub capacity: i32,
}

/// A customer to be created in the retail store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

/// An order to be created in the retail store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub order_date: NaiveDateTime,
    pub total_amount: Decimal,
}

/// A shipment for an already inserted order, written to the logistics store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShipment {
    pub order_id: i64,
    pub warehouse_id: i64,
    pub city_id: i64,
    pub shipment_date: NaiveDateTime,
    pub delivery_date: NaiveDate,
    /// Copied from the order.
    pub total_amount: Decimal,
}

/// A payment for an already inserted order, written to the accounts store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub order_id: i64,
    pub customer_id: i64,
    pub payment_method_id: i64,
    /// Copied from the order.
    pub transaction_date: NaiveDateTime,
    /// Copied from the order.
    pub amount: Decimal,
}

impl NewTransaction {
    /// Build the transaction that pays for `order`, which was stored as `order_id`.
    pub fn for_order(order_id: i64, order: &NewOrder, payment_method_id: i64) -> Self {
        Self {
            order_id,
            customer_id: order.customer_id,
            payment_method_id,
            transaction_date: order.order_date,
            amount: order.total_amount,
        }
    }
}
