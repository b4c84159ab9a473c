//! Numeric value generators.

use rand::Rng;
use rust_decimal::Decimal;
use std::ops::RangeInclusive;

/// Generate a random integer in the given range (inclusive).
pub fn generate_int_range<R: Rng>(rng: &mut R, range: RangeInclusive<i32>) -> i32 {
    rng.random_range(range)
}

/// Generate a random amount with two decimal places.
///
/// The range is expressed in cents so that both bounds are reachable
/// and every result is exactly representable.
pub fn generate_amount<R: Rng>(rng: &mut R, cents: RangeInclusive<i64>) -> Decimal {
    Decimal::new(rng.random_range(cents), 2)
}
