//! Client trait for executing rendered catalog SQL.

use crate::config::DatabaseConfig;
use crate::error::{CatalogError, CatalogResult};
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

/// The execution seam between rendered SQL and the backing store.
///
/// Handlers and schema objects only ever talk to the store through this
/// trait, so tests can substitute an in-memory implementation.
pub trait GenericClient: Send + Sync {
    /// Execute a query and return all rows.
    fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = CatalogResult<Vec<Row>>> + Send;

    /// Execute a statement and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = CatalogResult<u64>> + Send;
}

impl GenericClient for tokio_postgres::Client {
    async fn query(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> CatalogResult<Vec<Row>> {
        tokio_postgres::Client::query(self, sql, params)
            .await
            .map_err(CatalogError::from_db_error)
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> CatalogResult<u64> {
        tokio_postgres::Client::execute(self, sql, params)
            .await
            .map_err(CatalogError::from_db_error)
    }
}

/// Open a connection to the store described by `config`.
///
/// The connection future is driven on a spawned tokio task that ends when the
/// returned client is dropped, so the connection is released on every exit
/// path of the caller.
///
/// # Example
///
/// ```ignore
/// let config = catalog::DatabaseConfig::from_env()?;
/// let client = catalog::connect(&config).await?;
/// let brands = catalog::BrandHandler::new(&client).list().await;
/// ```
pub async fn connect(config: &DatabaseConfig) -> CatalogResult<tokio_postgres::Client> {
    let pg_config: tokio_postgres::Config = config
        .url()
        .parse()
        .map_err(|e: tokio_postgres::Error| CatalogError::Connection(e.to_string()))?;

    let (client, connection) = pg_config
        .connect(NoTls)
        .await
        .map_err(|e| CatalogError::Connection(e.to_string()))?;

    tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!(target: "catalog.sql", error = %e, "connection terminated");
        }
    });

    Ok(client)
}
