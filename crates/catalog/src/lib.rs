//! # catalog
//!
//! Data-access layer for a small product catalog (products, brands,
//! departments) stored in PostgreSQL.
//!
//! ## Layers
//!
//! - [`qb`]: the query-construction engine. A [`QueryBuilder`] bound to a
//!   [`TableDef`] accumulates filter terms, value assignments and relation
//!   bindings in call order and renders SELECT / JOIN-SELECT / INSERT / UPDATE
//!   text with inline literals.
//! - [`entity`]: one schema object per table, with named per-column setters
//!   generated from a declarative column list.
//! - [`handler`]: operations that execute a schema object's SQL through a
//!   [`GenericClient`] and capture failures into a [`QueryResult`].
//!
//! ```ignore
//! use catalog::{DatabaseConfig, ProductHandler, connect};
//!
//! let client = connect(&DatabaseConfig::from_env()?).await?;
//! let result = ProductHandler::new(&client).get(5).await;
//! if let Some(message) = result.status.message() {
//!     eprintln!("lookup failed: {message}");
//! }
//! ```

pub mod client;
pub mod config;
pub mod entity;
pub mod error;
pub mod handler;
pub mod model;
pub mod qb;
pub mod result;
pub mod row;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{GenericClient, connect};
pub use config::DatabaseConfig;
pub use entity::{BrandEntity, DepartmentEntity, Entity, ProductEntity};
pub use error::{CatalogError, CatalogResult};
pub use handler::{BrandHandler, DepartmentHandler, ProductHandler};
pub use model::{Brand, Department, Product};
pub use qb::{Field, FieldValue, JoinKey, QueryBuilder, Relation, RelationMode, TableDef};
pub use result::{ExecResult, QueryResult, Status};
pub use row::{FromRow, RowExt};
