//! First-load seeding tests.

use datagen_core::{CITIES, PAYMENT_METHODS};
use datagen_generator::{DataGenerator, PHONE_MAX_LEN};
use ecom_datagen::seed::{seed_all, seed_reference_data};
use ecom_datagen::testing::memory_stores;
use ecom_datagen::{CUSTOMER_COUNT, WAREHOUSE_COUNT};
use std::collections::HashSet;

#[tokio::test]
async fn test_reference_seeding_is_idempotent() {
    let mut stores = memory_stores();

    seed_reference_data(&mut stores.logistics, &mut stores.accounts)
        .await
        .unwrap();
    seed_reference_data(&mut stores.logistics, &mut stores.accounts)
        .await
        .unwrap();

    assert_eq!(stores.logistics.cities(), CITIES.map(String::from).as_slice());
    assert_eq!(
        stores.accounts.payment_methods(),
        PAYMENT_METHODS.map(String::from).as_slice()
    );
}

#[tokio::test]
async fn test_first_load_creates_entities() {
    let mut stores = memory_stores();
    let mut generator = DataGenerator::new(42);

    let ids = seed_all(&mut stores, &mut generator).await.unwrap();

    assert_eq!(ids.warehouse_ids.len(), WAREHOUSE_COUNT);
    assert_eq!(ids.customer_ids.len(), CUSTOMER_COUNT);
    assert_eq!(stores.logistics.warehouses().len(), 10);
    assert_eq!(stores.retail.customers().len(), 1000);

    // Ids come back in creation order.
    let stored: Vec<i64> = stores.retail.customers().iter().map(|(id, _)| *id).collect();
    assert_eq!(ids.customer_ids, stored);

    for (_, warehouse) in stores.logistics.warehouses() {
        assert!((100..=10_000).contains(&warehouse.capacity));
    }
}

#[tokio::test]
async fn test_customer_emails_distinct_and_phones_short() {
    let mut stores = memory_stores();
    let mut generator = DataGenerator::new(7);

    seed_all(&mut stores, &mut generator).await.unwrap();

    let customers = stores.retail.customers();
    let emails: HashSet<&str> = customers.iter().map(|(_, c)| c.email.as_str()).collect();
    assert_eq!(emails.len(), customers.len());
    assert!(customers
        .iter()
        .all(|(_, c)| c.phone.chars().count() <= PHONE_MAX_LEN));
}

#[tokio::test]
async fn test_reseeding_customers_clashes_with_existing_rows() {
    // The in-run email check does not see rows from earlier runs; the
    // store's unique constraint does, and the whole pass is rejected.
    let mut stores = memory_stores();
    seed_all(&mut stores, &mut DataGenerator::new(3)).await.unwrap();

    let result = seed_all(&mut stores, &mut DataGenerator::new(3)).await;

    assert!(result.is_err());
    assert_eq!(stores.retail.customers().len(), CUSTOMER_COUNT);
}
