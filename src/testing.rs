//! In-memory stores for tests.
//!
//! Each store keeps its rows in vectors, assigns ids starting at 1 and
//! can be told to fail or to drop the returned id on chosen calls. The
//! retail store replays a script of settings snapshots, one per
//! `load_settings` call, repeating the last one once the script runs out.

use async_trait::async_trait;
use datagen_core::{
    AccountsStore, LogisticsStore, NewCustomer, NewOrder, NewShipment, NewTransaction,
    NewWarehouse, RetailStore, SettingRow, StoreError, StoreKind, Stores,
};
use std::collections::{HashSet, VecDeque};

/// Three empty in-memory stores.
pub type MemoryStores = Stores<MemoryRetail, MemoryLogistics, MemoryAccounts>;

pub fn memory_stores() -> MemoryStores {
    Stores::new(
        MemoryRetail::new(),
        MemoryLogistics::new(),
        MemoryAccounts::new(),
    )
}

/// Build settings rows from string pairs.
pub fn settings_rows(pairs: &[(&str, &str)]) -> Vec<SettingRow> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

#[derive(Debug, Default)]
pub struct MemoryRetail {
    settings_script: VecDeque<Vec<SettingRow>>,
    current_settings: Vec<SettingRow>,
    settings_loads: usize,
    customers: Vec<(i64, NewCustomer)>,
    orders: Vec<(i64, NewOrder)>,
    next_id: i64,
    order_calls: u64,
    failing_order_calls: HashSet<u64>,
    missing_id_calls: HashSet<u64>,
    fail_customer_inserts: bool,
}

impl MemoryRetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the settings script with a single snapshot.
    pub fn with_settings(mut self, rows: Vec<SettingRow>) -> Self {
        self.settings_script.clear();
        self.settings_script.push_back(rows);
        self
    }

    /// Append a snapshot to the settings script.
    pub fn then_settings(mut self, rows: Vec<SettingRow>) -> Self {
        self.settings_script.push_back(rows);
        self
    }

    /// Pre-populate `count` customers, as left behind by an earlier run.
    pub fn with_existing_customers(mut self, count: usize) -> Self {
        for i in 0..count {
            let id = self.allocate_id();
            self.customers.push((
                id,
                NewCustomer {
                    name: format!("Existing Customer {i}"),
                    email: format!("existing{i}@example.com"),
                    address: "1 Main Street\nSpringfield, Ohio 45501".to_string(),
                    phone: "555-0100".to_string(),
                },
            ));
        }
        self
    }

    /// Fail the `call`-th `insert_order` (0-based).
    pub fn fail_order_call(mut self, call: u64) -> Self {
        self.failing_order_calls.insert(call);
        self
    }

    /// Return no id from the `call`-th `insert_order` (0-based).
    pub fn missing_order_id_call(mut self, call: u64) -> Self {
        self.missing_id_calls.insert(call);
        self
    }

    /// Reject every `insert_customers` call.
    pub fn fail_customer_inserts(mut self) -> Self {
        self.fail_customer_inserts = true;
        self
    }

    pub fn customers(&self) -> &[(i64, NewCustomer)] {
        &self.customers
    }

    pub fn orders(&self) -> &[(i64, NewOrder)] {
        &self.orders
    }

    pub fn settings_loads(&self) -> usize {
        self.settings_loads
    }

    pub fn order_calls(&self) -> u64 {
        self.order_calls
    }

    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[async_trait]
impl RetailStore for MemoryRetail {
    async fn load_settings(&mut self) -> Result<Vec<SettingRow>, StoreError> {
        self.settings_loads += 1;
        if let Some(next) = self.settings_script.pop_front() {
            self.current_settings = next;
        }
        Ok(self.current_settings.clone())
    }

    async fn insert_customers(
        &mut self,
        customers: &[NewCustomer],
    ) -> Result<Vec<i64>, StoreError> {
        if self.fail_customer_inserts {
            return Err(StoreError::rejected(StoreKind::Retail, "customer insert failed"));
        }

        // Unique email constraint; the whole batch is rejected on a clash.
        let mut emails: HashSet<&str> = self.customers.iter().map(|(_, c)| c.email.as_str()).collect();
        for customer in customers {
            if !emails.insert(customer.email.as_str()) {
                return Err(StoreError::rejected(
                    StoreKind::Retail,
                    format!("duplicate email {}", customer.email),
                ));
            }
        }

        let mut ids = Vec::with_capacity(customers.len());
        for customer in customers {
            let id = self.allocate_id();
            self.customers.push((id, customer.clone()));
            ids.push(id);
        }
        Ok(ids)
    }

    async fn customer_ids(&mut self) -> Result<Vec<i64>, StoreError> {
        Ok(self.customers.iter().map(|(id, _)| *id).collect())
    }

    async fn insert_order(&mut self, order: &NewOrder) -> Result<Option<i64>, StoreError> {
        let call = self.order_calls;
        self.order_calls += 1;

        if self.failing_order_calls.contains(&call) {
            return Err(StoreError::rejected(StoreKind::Retail, "order insert failed"));
        }
        if self.missing_id_calls.contains(&call) {
            return Ok(None);
        }

        let id = self.allocate_id();
        self.orders.push((id, order.clone()));
        Ok(Some(id))
    }
}

#[derive(Debug, Default)]
pub struct MemoryLogistics {
    cities: Vec<String>,
    warehouses: Vec<(i64, NewWarehouse)>,
    shipments: Vec<NewShipment>,
    next_id: i64,
    shipment_calls: u64,
    failing_shipment_calls: HashSet<u64>,
}

impl MemoryLogistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate `count` warehouses, as left behind by an earlier run.
    pub fn with_existing_warehouses(mut self, count: usize) -> Self {
        for i in 0..count {
            self.next_id += 1;
            self.warehouses.push((
                self.next_id,
                NewWarehouse {
                    location: format!("Depot {i}"),
                    capacity: 500,
                },
            ));
        }
        self
    }

    /// Fail the `call`-th `insert_shipment` (0-based).
    pub fn fail_shipment_call(mut self, call: u64) -> Self {
        self.failing_shipment_calls.insert(call);
        self
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn warehouses(&self) -> &[(i64, NewWarehouse)] {
        &self.warehouses
    }

    pub fn shipments(&self) -> &[NewShipment] {
        &self.shipments
    }
}

#[async_trait]
impl LogisticsStore for MemoryLogistics {
    async fn insert_cities(&mut self, names: &[&str]) -> Result<u64, StoreError> {
        Ok(insert_missing(&mut self.cities, names))
    }

    async fn insert_warehouses(
        &mut self,
        warehouses: &[NewWarehouse],
    ) -> Result<Vec<i64>, StoreError> {
        let mut ids = Vec::with_capacity(warehouses.len());
        for warehouse in warehouses {
            self.next_id += 1;
            self.warehouses.push((self.next_id, warehouse.clone()));
            ids.push(self.next_id);
        }
        Ok(ids)
    }

    async fn warehouse_ids(&mut self) -> Result<Vec<i64>, StoreError> {
        Ok(self.warehouses.iter().map(|(id, _)| *id).collect())
    }

    async fn insert_shipment(&mut self, shipment: &NewShipment) -> Result<(), StoreError> {
        let call = self.shipment_calls;
        self.shipment_calls += 1;

        if self.failing_shipment_calls.contains(&call) {
            return Err(StoreError::rejected(StoreKind::Logistics, "shipment insert failed"));
        }
        self.shipments.push(shipment.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryAccounts {
    payment_methods: Vec<String>,
    transactions: Vec<NewTransaction>,
    transaction_calls: u64,
    failing_transaction_calls: HashSet<u64>,
}

impl MemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `call`-th `insert_transaction` (0-based).
    pub fn fail_transaction_call(mut self, call: u64) -> Self {
        self.failing_transaction_calls.insert(call);
        self
    }

    pub fn payment_methods(&self) -> &[String] {
        &self.payment_methods
    }

    pub fn transactions(&self) -> &[NewTransaction] {
        &self.transactions
    }
}

#[async_trait]
impl AccountsStore for MemoryAccounts {
    async fn insert_payment_methods(&mut self, names: &[&str]) -> Result<u64, StoreError> {
        Ok(insert_missing(&mut self.payment_methods, names))
    }

    async fn insert_transaction(
        &mut self,
        transaction: &NewTransaction,
    ) -> Result<(), StoreError> {
        let call = self.transaction_calls;
        self.transaction_calls += 1;

        if self.failing_transaction_calls.contains(&call) {
            return Err(StoreError::rejected(StoreKind::Accounts, "transaction insert failed"));
        }
        self.transactions.push(transaction.clone());
        Ok(())
    }
}

/// `INSERT ... ON CONFLICT DO NOTHING` for a unique name column.
fn insert_missing(table: &mut Vec<String>, names: &[&str]) -> u64 {
    let mut inserted = 0;
    for name in names {
        if !table.iter().any(|existing| existing == name) {
            table.push(name.to_string());
            inserted += 1;
        }
    }
    inserted
}
