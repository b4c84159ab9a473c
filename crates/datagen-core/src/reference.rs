//! Fixed reference data and the identifier ranges bound to it.
//!
//! Shipments reference cities and transactions reference payment methods
//! by ordinal position in these lists. The ranges are derived from the
//! list lengths so that changing a list changes the range with it.

use std::ops::RangeInclusive;

/// Cities seeded into the logistics store.
pub const CITIES: [&str; 10] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
];

/// Payment methods seeded into the accounts store.
pub const PAYMENT_METHODS: [&str; 5] = [
    "Credit Card",
    "PayPal",
    "Bank Transfer",
    "Bitcoin",
    "Debit Card",
];

/// Valid `city_id` values for generated shipments.
pub fn city_id_range() -> RangeInclusive<i64> {
    1..=CITIES.len() as i64
}

/// Valid `payment_method_id` values for generated transactions.
pub fn payment_method_id_range() -> RangeInclusive<i64> {
    1..=PAYMENT_METHODS.len() as i64
}
