//! In-memory client used by unit tests.

use crate::client::GenericClient;
use crate::error::{CatalogError, CatalogResult};
use std::sync::Mutex;
use tokio_postgres::Row;
use tokio_postgres::types::ToSql;

/// Records every statement it is handed. Queries return no rows; statements
/// report `affected` rows. With `failing`, everything errors instead.
#[derive(Default)]
pub(crate) struct RecordingClient {
    failure: Option<String>,
    affected: u64,
    statements: Mutex<Vec<String>>,
}

impl RecordingClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn affecting(affected: u64) -> Self {
        Self {
            affected,
            ..Self::default()
        }
    }

    pub(crate) fn statements(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }

    fn record(&self, sql: &str) -> CatalogResult<()> {
        self.statements.lock().unwrap().push(sql.to_string());
        match &self.failure {
            Some(message) => Err(CatalogError::Other(message.clone())),
            None => Ok(()),
        }
    }
}

impl GenericClient for RecordingClient {
    async fn query(&self, sql: &str, _params: &[&(dyn ToSql + Sync)]) -> CatalogResult<Vec<Row>> {
        self.record(sql)?;
        Ok(Vec::new())
    }

    async fn execute(&self, sql: &str, _params: &[&(dyn ToSql + Sync)]) -> CatalogResult<u64> {
        self.record(sql)?;
        Ok(self.affected)
    }
}
