//! Query-construction engine.
//!
//! A [`QueryBuilder`] is bound to one [`TableDef`] and accumulates filter
//! terms, value assignments and [`Relation`] bindings, then renders them into
//! SQL text:
//!
//! - SELECT (no relation bound) / JOIN-SELECT (one or more relations bound)
//! - INSERT from the value list
//! - UPDATE from the value list, restricted by the filter list
//!
//! Values are inlined as literals; rendering never fails and is deterministic.
//!
//! # Usage
//!
//! ```ignore
//! use catalog::qb::{QueryBuilder, RelationMode};
//! use catalog::entity::{BRAND, PRODUCT};
//!
//! let mut qb = QueryBuilder::new(&PRODUCT);
//! qb.set_filter("PRD_ID", 5);
//! assert!(qb.to_sql().ends_with("FROM TB_PRODUCT WHERE PRD_ID=5"));
//!
//! qb.bind(&BRAND, RelationMode::Optional);
//! let rows = qb.fetch(&client).await?; // qb is empty again afterwards
//! ```

mod builder;
mod field;
mod relation;
mod table;

pub use builder::QueryBuilder;
pub use field::{ColumnType, Field, FieldKind, FieldValue};
pub use relation::{JoinKey, Relation, RelationMode};
pub use table::{Column, TableDef};
