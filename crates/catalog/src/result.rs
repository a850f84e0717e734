//! Result envelopes returned by handlers.
//!
//! Handlers are the failure boundary of the crate: whatever goes wrong while
//! talking to the store is captured here as a [`Status`] instead of being
//! returned as an `Err`.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};

/// Outcome of one handler operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Status {
    #[default]
    Succeeded,
    Failed { message: String },
}

impl Status {
    /// Record `err` as the outcome.
    pub fn capture(&mut self, err: &CatalogError) {
        tracing::warn!(target: "catalog.sql", error = %err, "operation failed");
        *self = Status::Failed {
            message: err.to_string(),
        };
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Status::Succeeded)
    }

    /// Diagnostic message of a failed operation.
    pub fn message(&self) -> Option<&str> {
        match self {
            Status::Succeeded => None,
            Status::Failed { message } => Some(message),
        }
    }
}

/// Records fetched by a handler, paired with the operation's status.
///
/// A failed operation always carries an empty `data` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult<T> {
    pub status: Status,
    pub data: Vec<T>,
}

impl<T> QueryResult<T> {
    pub fn success(data: Vec<T>) -> Self {
        Self {
            status: Status::Succeeded,
            data,
        }
    }

    pub fn failure(err: &CatalogError) -> Self {
        let mut status = Status::Succeeded;
        status.capture(err);
        Self {
            status,
            data: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Keep at most the first record.
    pub fn first_only(mut self) -> Self {
        self.data.truncate(1);
        self
    }

    /// Back to a plain `Result`, for callers that prefer `?`.
    pub fn into_result(self) -> Result<Vec<T>, String> {
        match self.status {
            Status::Succeeded => Ok(self.data),
            Status::Failed { message } => Err(message),
        }
    }
}

impl<T> From<CatalogResult<Vec<T>>> for QueryResult<T> {
    fn from(result: CatalogResult<Vec<T>>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(&err),
        }
    }
}

/// Outcome of an INSERT or UPDATE issued by a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    pub status: Status,
    pub rows_affected: u64,
}

impl ExecResult {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl From<CatalogResult<u64>> for ExecResult {
    fn from(result: CatalogResult<u64>) -> Self {
        match result {
            Ok(rows_affected) => Self {
                status: Status::Succeeded,
                rows_affected,
            },
            Err(err) => {
                let mut status = Status::Succeeded;
                status.capture(&err);
                Self {
                    status,
                    rows_affected: 0,
                }
            }
        }
    }
}
