//! PostgreSQL implementations of the store traits.

use crate::args::PostgreSQLConnectionArgs;
use crate::error::PostgreSQLStoreError;
use crate::insert;
use async_trait::async_trait;
use datagen_core::{
    AccountsStore, LogisticsStore, NewCustomer, NewOrder, NewShipment, NewTransaction,
    NewWarehouse, RetailStore, SettingRow, StoreError, StoreKind, Stores,
};
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, error, info};

/// One open connection.
///
/// tokio-postgres runs every statement in autocommit mode unless a
/// transaction is opened explicitly, which is the mode the generator
/// expects. Dropping the store closes the connection; [`Self::close`]
/// also waits for the connection task to finish.
pub struct PostgreSQLStore {
    kind: StoreKind,
    client: Client,
    connection: JoinHandle<()>,
}

impl PostgreSQLStore {
    /// Connect to one database and check that it answers.
    pub async fn connect(
        kind: StoreKind,
        connection_string: &str,
    ) -> Result<Self, PostgreSQLStoreError> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls)
            .await
            .map_err(|source| PostgreSQLStoreError::Connect { store: kind, source })?;

        // Spawn the connection task
        let connection = tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("PostgreSQL connection error ({}): {}", kind, e);
            }
        });

        // Test connection
        client
            .simple_query("SELECT 1")
            .await
            .map_err(|source| PostgreSQLStoreError::Connect { store: kind, source })?;

        info!("Connected to {} database (autocommit)", kind);

        Ok(Self {
            kind,
            client,
            connection,
        })
    }

    pub fn kind(&self) -> StoreKind {
        self.kind
    }

    /// Close the connection and wait for its task to exit.
    pub async fn close(self) {
        let Self {
            kind,
            client,
            connection,
        } = self;
        drop(client);
        if let Err(e) = connection.await {
            error!("PostgreSQL connection task ({}) failed: {}", kind, e);
        }
        debug!("Closed {} database connection", kind);
    }

    fn wrap(&self, e: PostgreSQLStoreError) -> StoreError {
        e.into_store_error(self.kind)
    }

    /// Run `insert_names` for every name inside one transaction.
    async fn insert_names_in_transaction(
        &mut self,
        sql: &str,
        names: &[&str],
    ) -> Result<u64, PostgreSQLStoreError> {
        let transaction = self.client.transaction().await?;
        let inserted = insert::insert_names(&transaction, sql, names).await?;
        transaction.commit().await?;
        Ok(inserted)
    }
}

/// Retail database: settings, customers, orders.
pub struct PostgreSQLRetail(pub PostgreSQLStore);

/// Logistics database: cities, warehouses, shipments.
pub struct PostgreSQLLogistics(pub PostgreSQLStore);

/// Accounts database: payment methods, transactions.
pub struct PostgreSQLAccounts(pub PostgreSQLStore);

/// The three PostgreSQL stores of one run.
pub type PostgreSQLStores = Stores<PostgreSQLRetail, PostgreSQLLogistics, PostgreSQLAccounts>;

/// Open the three connections, one after the other.
///
/// If a later connection fails, the ones already open are dropped and
/// therefore closed before the error is returned.
pub async fn connect_all(
    args: &PostgreSQLConnectionArgs,
) -> Result<PostgreSQLStores, PostgreSQLStoreError> {
    info!("Connecting to retail, logistics and accounts databases...");
    let retail = PostgreSQLStore::connect(StoreKind::Retail, &args.retail_connection_string).await?;
    let logistics =
        PostgreSQLStore::connect(StoreKind::Logistics, &args.logistics_connection_string).await?;
    let accounts =
        PostgreSQLStore::connect(StoreKind::Accounts, &args.accounts_connection_string).await?;

    Ok(Stores::new(
        PostgreSQLRetail(retail),
        PostgreSQLLogistics(logistics),
        PostgreSQLAccounts(accounts),
    ))
}

/// Close all three connections.
pub async fn close_all(stores: PostgreSQLStores) {
    let Stores {
        retail,
        logistics,
        accounts,
    } = stores;
    retail.0.close().await;
    logistics.0.close().await;
    accounts.0.close().await;
    info!("All database connections closed");
}

#[async_trait]
impl RetailStore for PostgreSQLRetail {
    async fn load_settings(&mut self) -> Result<Vec<SettingRow>, StoreError> {
        insert::select_settings(&self.0.client)
            .await
            .map_err(|e| self.0.wrap(e))
    }

    async fn insert_customers(
        &mut self,
        customers: &[NewCustomer],
    ) -> Result<Vec<i64>, StoreError> {
        let result: Result<Vec<i64>, PostgreSQLStoreError> = async {
            let transaction = self.0.client.transaction().await?;
            let mut ids = Vec::with_capacity(customers.len());
            for customer in customers {
                ids.push(insert::insert_customer(&transaction, customer).await?);
            }
            transaction.commit().await?;
            Ok(ids)
        }
        .await;
        result.map_err(|e| self.0.wrap(e))
    }

    async fn customer_ids(&mut self) -> Result<Vec<i64>, StoreError> {
        insert::select_ids(&self.0.client, insert::SELECT_CUSTOMER_IDS)
            .await
            .map_err(|e| self.0.wrap(e))
    }

    async fn insert_order(&mut self, order: &NewOrder) -> Result<Option<i64>, StoreError> {
        insert::insert_order(&self.0.client, order)
            .await
            .map_err(|e| self.0.wrap(e))
    }
}

#[async_trait]
impl LogisticsStore for PostgreSQLLogistics {
    async fn insert_cities(&mut self, names: &[&str]) -> Result<u64, StoreError> {
        let result = self
            .0
            .insert_names_in_transaction(insert::INSERT_CITY, names)
            .await;
        result.map_err(|e| self.0.wrap(e))
    }

    async fn insert_warehouses(
        &mut self,
        warehouses: &[NewWarehouse],
    ) -> Result<Vec<i64>, StoreError> {
        let result: Result<Vec<i64>, PostgreSQLStoreError> = async {
            let transaction = self.0.client.transaction().await?;
            let mut ids = Vec::with_capacity(warehouses.len());
            for warehouse in warehouses {
                ids.push(insert::insert_warehouse(&transaction, warehouse).await?);
            }
            transaction.commit().await?;
            Ok(ids)
        }
        .await;
        result.map_err(|e| self.0.wrap(e))
    }

    async fn warehouse_ids(&mut self) -> Result<Vec<i64>, StoreError> {
        insert::select_ids(&self.0.client, insert::SELECT_WAREHOUSE_IDS)
            .await
            .map_err(|e| self.0.wrap(e))
    }

    async fn insert_shipment(&mut self, shipment: &NewShipment) -> Result<(), StoreError> {
        insert::insert_shipment(&self.0.client, shipment)
            .await
            .map(|_| ())
            .map_err(|e| self.0.wrap(e))
    }
}

#[async_trait]
impl AccountsStore for PostgreSQLAccounts {
    async fn insert_payment_methods(&mut self, names: &[&str]) -> Result<u64, StoreError> {
        let result = self
            .0
            .insert_names_in_transaction(insert::INSERT_PAYMENT_METHOD, names)
            .await;
        result.map_err(|e| self.0.wrap(e))
    }

    async fn insert_transaction(
        &mut self,
        transaction: &NewTransaction,
    ) -> Result<(), StoreError> {
        insert::insert_transaction(&self.0.client, transaction)
            .await
            .map(|_| ())
            .map_err(|e| self.0.wrap(e))
    }
}
