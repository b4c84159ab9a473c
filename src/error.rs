//! Errors that end a run.
//!
//! Failures inside a single order iteration never show up here; the
//! order generator logs and counts them instead.

use datagen_core::{SettingsError, StoreError};
use datagen_generator::GeneratorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatagenError {
    /// A seed pass, identifier load or settings read failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A required setting is missing or malformed.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// A batch was requested but there is no customer to place orders for.
    #[error("No customers available to place orders")]
    NoCustomers,
}
