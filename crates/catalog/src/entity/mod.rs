//! Schema objects: one per catalog table.
//!
//! Each schema object wraps a [`QueryBuilder`] bound to its table and exposes
//! named per-column setters generated from a declarative column list:
//!
//! ```ignore
//! let mut product = ProductEntity::new();
//! product.filters().brand_id(3).stock(0);
//! product.bind_referenced(&BrandEntity::new(), RelationMode::Mandatory);
//! let products = product.select(&client).await?;
//! ```

use crate::client::GenericClient;
use crate::error::CatalogResult;
use crate::qb::{QueryBuilder, Relation, RelationMode, TableDef};
use crate::row::FromRow;
use std::future::Future;
use tokio_postgres::Row;

/// Declare a catalog table and generate its schema object.
///
/// Expands to:
/// - a `static` [`TableDef`] holding the table name, primary key and columns,
/// - the schema object struct wrapping a [`QueryBuilder`],
/// - a filters handle and a values handle with one setter per column; each
///   setter appends one field to the builder's filter or value list.
macro_rules! entity {
    (
        $(#[$meta:meta])*
        pub struct $entity:ident {
            table: $table:ident = $table_name:literal,
            primary_key: $pk:literal,
            filters: $filters:ident,
            values: $values:ident,
            columns: {
                $( $method:ident => $column:literal : $ty:ty ),+ $(,)?
            }
        }
    ) => {
        #[doc = concat!("Declaration of `", $table_name, "`.")]
        pub static $table: $crate::qb::TableDef = $crate::qb::TableDef {
            name: $table_name,
            primary_key: $pk,
            columns: &[
                $(
                    $crate::qb::Column {
                        name: $column,
                        kind: <$ty as $crate::qb::ColumnType>::KIND,
                    },
                )+
            ],
        };

        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $entity {
            query: $crate::qb::QueryBuilder,
        }

        impl $entity {
            pub fn new() -> Self {
                Self {
                    query: $crate::qb::QueryBuilder::new(&$table),
                }
            }

            /// Setters that append WHERE terms.
            pub fn filters(&mut self) -> $filters<'_> {
                $filters {
                    query: &mut self.query,
                }
            }

            /// Setters that append INSERT/UPDATE assignments.
            pub fn values(&mut self) -> $values<'_> {
                $values {
                    query: &mut self.query,
                }
            }
        }

        impl Default for $entity {
            fn default() -> Self {
                Self::new()
            }
        }

        #[doc = concat!("Filter setters for `", $table_name, "`.")]
        pub struct $filters<'a> {
            query: &'a mut $crate::qb::QueryBuilder,
        }

        impl $filters<'_> {
            $(
                #[doc = concat!("Append `", $column, "=<value>` to the WHERE terms.")]
                pub fn $method(self, value: impl Into<$ty>) -> Self {
                    self.query.set_filter($column, value.into());
                    self
                }
            )+
        }

        #[doc = concat!("Value setters for `", $table_name, "`.")]
        pub struct $values<'a> {
            query: &'a mut $crate::qb::QueryBuilder,
        }

        impl $values<'_> {
            $(
                #[doc = concat!("Append `", $column, "=<value>` to the assignments.")]
                pub fn $method(self, value: impl Into<$ty>) -> Self {
                    self.query.set_value($column, value.into());
                    self
                }
            )+
        }
    };
}

mod brand;
mod department;
mod product;

pub use brand::{BRAND, BrandEntity, BrandFilters, BrandValues};
pub use department::{DEPARTMENT, DepartmentEntity, DepartmentFilters, DepartmentValues};
pub use product::{PRODUCT, ProductEntity, ProductFilters, ProductValues};

/// A schema object: a table declaration plus the query state accumulated on it.
pub trait Entity: Send {
    /// Row type produced by [`Entity::select`].
    type Model: FromRow + Send;

    fn query(&self) -> &QueryBuilder;

    fn query_mut(&mut self) -> &mut QueryBuilder;

    fn table(&self) -> &'static TableDef {
        self.query().table()
    }

    /// Map one result row. `relations` are the relations that were bound when
    /// the row was fetched, in binding order.
    fn map_row(row: &Row, relations: &[Relation]) -> CatalogResult<Self::Model> {
        let _ = relations;
        Self::Model::from_row(row)
    }

    /// Bind `related`'s table; it is expected to carry a column named after
    /// this table's primary key.
    fn bind<E: Entity>(&mut self, related: &E, mode: RelationMode) -> &mut Self
    where
        Self: Sized,
    {
        self.query_mut().bind(related.table(), mode);
        self
    }

    /// Bind `related`'s table through a column of this table named after the
    /// related primary key.
    fn bind_referenced<E: Entity>(&mut self, related: &E, mode: RelationMode) -> &mut Self
    where
        Self: Sized,
    {
        self.query_mut().bind_referenced(related.table(), mode);
        self
    }

    fn to_sql(&self) -> String {
        self.query().to_sql()
    }

    fn to_insert_sql(&self) -> String {
        self.query().to_insert_sql()
    }

    fn to_update_sql(&self) -> String {
        self.query().to_update_sql()
    }

    fn clear(&mut self) {
        self.query_mut().clear();
    }

    /// Render, run and map the SELECT form; the object is empty afterwards.
    fn select<C: GenericClient>(
        &mut self,
        client: &C,
    ) -> impl Future<Output = CatalogResult<Vec<Self::Model>>> + Send
    where
        Self: Sized,
    {
        async move {
            let relations = self.query().relations().to_vec();
            let rows = self.query_mut().fetch(client).await?;
            rows.iter()
                .map(|row| Self::map_row(row, &relations))
                .collect()
        }
    }

    /// Render and run the INSERT form; the object is empty afterwards.
    fn insert<C: GenericClient>(
        &mut self,
        client: &C,
    ) -> impl Future<Output = CatalogResult<u64>> + Send
    where
        Self: Sized,
    {
        self.query_mut().execute_insert(client)
    }

    /// Render and run the UPDATE form; the object is empty afterwards.
    fn update<C: GenericClient>(
        &mut self,
        client: &C,
    ) -> impl Future<Output = CatalogResult<u64>> + Send
    where
        Self: Sized,
    {
        self.query_mut().execute_update(client)
    }
}
