//! First-load seeding and identifier loading.
//!
//! On a first load the reference lists, warehouses and customers are
//! created and their identifiers kept for the order generator. Later runs
//! read the identifiers back from the stores instead.

use crate::error::DatagenError;
use datagen_core::{
    AccountsStore, LogisticsStore, RetailStore, Stores, CITIES, PAYMENT_METHODS,
};
use datagen_generator::DataGenerator;
use tracing::info;

/// Warehouses created by a first load.
pub const WAREHOUSE_COUNT: usize = 10;

/// Customers created by a first load.
pub const CUSTOMER_COUNT: usize = 1000;

/// Identifiers the order generator draws from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifiers {
    pub warehouse_ids: Vec<i64>,
    pub customer_ids: Vec<i64>,
}

/// Insert the fixed cities and payment methods that are not present yet.
pub async fn seed_reference_data<L, A>(
    logistics: &mut L,
    accounts: &mut A,
) -> Result<(), DatagenError>
where
    L: LogisticsStore,
    A: AccountsStore,
{
    let cities = logistics.insert_cities(&CITIES).await?;
    info!(
        "Cities table populated ({} new, {} total)",
        cities,
        CITIES.len()
    );

    let methods = accounts.insert_payment_methods(&PAYMENT_METHODS).await?;
    info!(
        "Payment methods table populated ({} new, {} total)",
        methods,
        PAYMENT_METHODS.len()
    );
    Ok(())
}

/// Create `count` warehouses and return their ids in creation order.
pub async fn seed_warehouses<L: LogisticsStore>(
    logistics: &mut L,
    generator: &mut DataGenerator,
    count: usize,
) -> Result<Vec<i64>, DatagenError> {
    let warehouses = generator.warehouses(count);
    let ids = logistics.insert_warehouses(&warehouses).await?;
    info!("Warehouses table populated ({} rows)", ids.len());
    Ok(ids)
}

/// Create `count` customers with distinct emails and return their ids in
/// creation order.
pub async fn seed_customers<R: RetailStore>(
    retail: &mut R,
    generator: &mut DataGenerator,
    count: usize,
) -> Result<Vec<i64>, DatagenError> {
    let customers = generator.customers(count)?;
    let ids = retail.insert_customers(&customers).await?;
    info!("{} customers inserted successfully", ids.len());
    Ok(ids)
}

/// Run the whole first load: reference data, then warehouses, then customers.
pub async fn seed_all<R, L, A>(
    stores: &mut Stores<R, L, A>,
    generator: &mut DataGenerator,
) -> Result<Identifiers, DatagenError>
where
    R: RetailStore,
    L: LogisticsStore,
    A: AccountsStore,
{
    seed_reference_data(&mut stores.logistics, &mut stores.accounts).await?;
    let warehouse_ids = seed_warehouses(&mut stores.logistics, generator, WAREHOUSE_COUNT).await?;
    let customer_ids = seed_customers(&mut stores.retail, generator, CUSTOMER_COUNT).await?;
    Ok(Identifiers {
        warehouse_ids,
        customer_ids,
    })
}

/// Read every existing warehouse and customer id.
pub async fn load_identifiers<R, L, A>(
    stores: &mut Stores<R, L, A>,
) -> Result<Identifiers, DatagenError>
where
    R: RetailStore,
    L: LogisticsStore,
    A: AccountsStore,
{
    let warehouse_ids = stores.logistics.warehouse_ids().await?;
    let customer_ids = stores.retail.customer_ids().await?;
    info!(
        "Loaded {} existing warehouses and {} existing customers",
        warehouse_ids.len(),
        customer_ids.len()
    );
    Ok(Identifiers {
        warehouse_ids,
        customer_ids,
    })
}
