//! Row mapping traits and utilities

use crate::error::{CatalogError, CatalogResult};
use tokio_postgres::Row;
use tokio_postgres::types::{FromSql, Type};

/// Trait for converting a database row into a Rust struct.
///
/// Catalog rows are mapped by position: a schema object's own columns come
/// first, followed by the columns of each bound relation in binding order, so
/// implementations read their fields starting at `offset`.
pub trait FromRow: Sized {
    /// Convert a database row into Self, starting at the first column
    fn from_row(row: &Row) -> CatalogResult<Self> {
        Self::from_row_at(row, 0)
    }

    /// Convert the columns of `row` beginning at `offset` into Self
    fn from_row_at(row: &Row, offset: usize) -> CatalogResult<Self>;
}

/// Map an outer-joined block of columns.
///
/// A NULL in the block's first column (the related table's primary key)
/// means the join found no match, which maps to `None`.
pub fn optional_at<T: FromRow>(row: &Row, offset: usize) -> CatalogResult<Option<T>> {
    if row.is_null_at(offset)? {
        Ok(None)
    } else {
        T::from_row_at(row, offset).map(Some)
    }
}

/// Extension trait for Row to provide typed access
pub trait RowExt {
    /// Try to get a column value by position, returning CatalogError::Decode on failure
    fn try_get_at<T>(&self, idx: usize) -> CatalogResult<T>
    where
        T: for<'a> FromSql<'a>;

    /// Whether the value at `idx` is SQL NULL, whatever its type
    fn is_null_at(&self, idx: usize) -> CatalogResult<bool>;
}

impl RowExt for Row {
    fn try_get_at<T>(&self, idx: usize) -> CatalogResult<T>
    where
        T: for<'a> FromSql<'a>,
    {
        self.try_get(idx)
            .map_err(|e| CatalogError::decode(column_label(self, idx), e.to_string()))
    }

    fn is_null_at(&self, idx: usize) -> CatalogResult<bool> {
        self.try_get::<_, Option<AnyValue>>(idx)
            .map(|v| v.is_none())
            .map_err(|e| CatalogError::decode(column_label(self, idx), e.to_string()))
    }
}

fn column_label(row: &Row, idx: usize) -> String {
    row.columns()
        .get(idx)
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| format!("#{idx}"))
}

/// Accepts a value of any type without decoding it; only used to test for NULL.
struct AnyValue;

impl<'a> FromSql<'a> for AnyValue {
    fn from_sql(
        _ty: &Type,
        _raw: &'a [u8],
    ) -> Result<Self, Box<dyn std::error::Error + Sync + Send>> {
        Ok(AnyValue)
    }

    fn accepts(_ty: &Type) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::AnyValue;
    use tokio_postgres::types::{FromSql, Type};

    #[test]
    fn any_value_accepts_catalog_column_types() {
        for ty in [Type::INT4, Type::INT8, Type::TEXT, Type::VARCHAR, Type::NUMERIC] {
            assert!(<AnyValue as FromSql<'_>>::accepts(&ty));
        }
    }

    #[test]
    fn option_any_value_maps_null_to_none() {
        let null: Option<AnyValue> = FromSql::from_sql_null(&Type::INT4).unwrap();
        assert!(null.is_none());

        let raw: [u8; 4] = [0, 0, 0, 5];
        let present: Option<AnyValue> = FromSql::from_sql(&Type::INT4, &raw).unwrap();
        assert!(present.is_some());
    }
}
