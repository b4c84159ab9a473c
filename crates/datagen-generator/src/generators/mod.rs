//! Individual value generators.
//!
//! Each function takes the caller's RNG so that [`crate::DataGenerator`]
//! stays the single source of randomness.

pub mod contact;
pub mod numeric;
pub mod timestamp;
