//! CLI argument definitions for the PostgreSQL stores.

use clap::Args;

/// Connection strings for the three databases.
#[derive(Args, Clone, Debug)]
pub struct PostgreSQLConnectionArgs {
    /// Retail database (settings, customers, orders)
    #[arg(
        long,
        env = "RETAIL_DATABASE_URL",
        default_value = "host=localhost port=5432 user=postgres dbname=retail"
    )]
    pub retail_connection_string: String,

    /// Logistics database (cities, warehouses, shipments)
    #[arg(
        long,
        env = "LOGISTICS_DATABASE_URL",
        default_value = "host=localhost port=5432 user=postgres dbname=logistics"
    )]
    pub logistics_connection_string: String,

    /// Accounts database (payment methods, transactions)
    #[arg(
        long,
        env = "ACCOUNTS_DATABASE_URL",
        default_value = "host=localhost port=5432 user=postgres dbname=accounts"
    )]
    pub accounts_connection_string: String,
}
