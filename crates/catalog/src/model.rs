//! Catalog records returned by handlers.

use crate::error::CatalogResult;
use crate::row::{FromRow, RowExt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// A row of `TB_BRAND`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl FromRow for Brand {
    fn from_row_at(row: &Row, offset: usize) -> CatalogResult<Self> {
        Ok(Self {
            id: row.try_get_at(offset)?,
            code: row.try_get_at(offset + 1)?,
            name: row.try_get_at(offset + 2)?,
        })
    }
}

/// A row of `TB_DEPARTMENT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

impl FromRow for Department {
    fn from_row_at(row: &Row, offset: usize) -> CatalogResult<Self> {
        Ok(Self {
            id: row.try_get_at(offset)?,
            name: row.try_get_at(offset + 1)?,
        })
    }
}

/// A row of `TB_PRODUCT`, optionally with its brand and department when
/// those tables were joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub brand_id: i32,
    pub department_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

impl FromRow for Product {
    fn from_row_at(row: &Row, offset: usize) -> CatalogResult<Self> {
        Ok(Self {
            id: row.try_get_at(offset)?,
            code: row.try_get_at(offset + 1)?,
            name: row.try_get_at(offset + 2)?,
            price: row.try_get_at(offset + 3)?,
            stock: row.try_get_at(offset + 4)?,
            brand_id: row.try_get_at(offset + 5)?,
            department_id: row.try_get_at(offset + 6)?,
            brand: None,
            department: None,
        })
    }
}
