//! Loading the settings table.

use crate::error::DatagenError;
use datagen_core::{RetailStore, Settings};
use tracing::debug;

/// Read a fresh [`Settings`] snapshot from the retail store.
///
/// Called once at startup and again after every batch; nothing is cached
/// between calls.
pub async fn load_settings<R: RetailStore>(retail: &mut R) -> Result<Settings, DatagenError> {
    let rows = retail.load_settings().await?;
    debug!("Loaded {} settings: {:?}", rows.len(), rows);
    Ok(Settings::from_rows(rows))
}
