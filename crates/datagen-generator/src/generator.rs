//! Main data generator for producing pipeline rows.

use crate::generators::{contact, numeric, timestamp};
use chrono::NaiveDateTime;
use datagen_core::reference::{city_id_range, payment_method_id_range};
use datagen_core::{NewCustomer, NewOrder, NewShipment, NewTransaction, NewWarehouse};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Warehouse capacity bounds.
pub const WAREHOUSE_CAPACITY: RangeInclusive<i32> = 100..=10_000;

/// Order amount bounds in cents (20.00 to 1000.00).
pub const ORDER_AMOUNT_CENTS: RangeInclusive<i64> = 2_000..=100_000;

/// Days between today and a shipment's delivery date.
pub const DELIVERY_DAYS: RangeInclusive<u64> = 1..=30;

/// Maximum stored phone number length, in characters.
pub const PHONE_MAX_LEN: usize = 15;

/// Maximum number of emails drawn for one customer before giving up.
pub const MAX_EMAIL_ATTEMPTS: usize = 100;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Every email drawn for a customer was already used in this run.
    #[error("No unused email found after {attempts} attempts ({used} emails already used)")]
    EmailsExhausted { attempts: usize, used: usize },
}

/// Data generator that produces synthetic pipeline rows.
///
/// With a fixed seed the output only depends on the arguments passed in,
/// so tests can pin the clock and the identifier lists.
pub struct DataGenerator {
    /// Seeded random number generator for reproducibility
    rng: StdRng,
}

impl DataGenerator {
    /// Create a new data generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generate one warehouse.
    pub fn warehouse(&mut self) -> NewWarehouse {
        NewWarehouse {
            location: contact::generate_location(&mut self.rng),
            capacity: numeric::generate_int_range(&mut self.rng, WAREHOUSE_CAPACITY),
        }
    }

    /// Generate `count` warehouses.
    pub fn warehouses(&mut self, count: usize) -> Vec<NewWarehouse> {
        (0..count).map(|_| self.warehouse()).collect()
    }

    /// Generate one customer whose email is not in `used_emails`, and
    /// record the email there.
    ///
    /// Only emails generated in this run are checked; rows already in the
    /// store are not.
    pub fn customer(
        &mut self,
        used_emails: &mut HashSet<String>,
    ) -> Result<NewCustomer, GeneratorError> {
        let name = contact::generate_name(&mut self.rng);
        let email = self.unused_email(used_emails)?;
        let address = contact::generate_address(&mut self.rng);
        let phone = contact::generate_phone(&mut self.rng, PHONE_MAX_LEN);

        Ok(NewCustomer {
            name,
            email,
            address,
            phone,
        })
    }

    /// Generate `count` customers with pairwise distinct emails.
    pub fn customers(&mut self, count: usize) -> Result<Vec<NewCustomer>, GeneratorError> {
        let mut used_emails = HashSet::with_capacity(count);
        (0..count)
            .map(|_| self.customer(&mut used_emails))
            .collect()
    }

    fn unused_email(&mut self, used_emails: &mut HashSet<String>) -> Result<String, GeneratorError> {
        for _ in 0..MAX_EMAIL_ATTEMPTS {
            let email = contact::generate_email(&mut self.rng);
            if used_emails.insert(email.clone()) {
                return Ok(email);
            }
        }
        Err(GeneratorError::EmailsExhausted {
            attempts: MAX_EMAIL_ATTEMPTS,
            used: used_emails.len(),
        })
    }

    /// Pick one identifier uniformly at random.
    pub fn pick(&mut self, ids: &[i64]) -> Option<i64> {
        ids.choose(&mut self.rng).copied()
    }

    /// Generate an order for `customer_id`, dated within `now`'s year.
    pub fn order(&mut self, customer_id: i64, now: NaiveDateTime) -> NewOrder {
        NewOrder {
            customer_id,
            order_date: timestamp::generate_datetime_this_year(&mut self.rng, now),
            total_amount: numeric::generate_amount(&mut self.rng, ORDER_AMOUNT_CENTS),
        }
    }

    /// Generate the shipment of an order stored as `order_id`.
    pub fn shipment(
        &mut self,
        order_id: i64,
        order: &NewOrder,
        warehouse_id: i64,
        now: NaiveDateTime,
    ) -> NewShipment {
        let city_id = self.rng.random_range(city_id_range());
        let shipment_date = timestamp::generate_datetime_this_year(&mut self.rng, now);
        let delivery_date = timestamp::generate_future_date(&mut self.rng, now.date(), DELIVERY_DAYS);

        NewShipment {
            order_id,
            warehouse_id,
            city_id,
            shipment_date,
            delivery_date,
            total_amount: order.total_amount,
        }
    }

    /// Generate the payment of an order stored as `order_id`.
    pub fn transaction(&mut self, order_id: i64, order: &NewOrder) -> NewTransaction {
        let payment_method_id = self.rng.random_range(payment_method_id_range());
        NewTransaction::for_order(order_id, order, payment_method_id)
    }
}
