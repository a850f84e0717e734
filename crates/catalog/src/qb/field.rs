//! Column name/value pairs accumulated by the query builder.

use rust_decimal::Decimal;
use std::fmt;

/// The declared kind of a catalog column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
    Decimal,
}

/// A value destined for a WHERE term or an INSERT/UPDATE assignment.
///
/// Values are rendered inline as SQL literals (see [`FieldValue::to_sql_literal`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    Decimal(Decimal),
}

impl FieldValue {
    /// Render as a SQL literal.
    ///
    /// Integers and decimals are emitted unquoted (decimals keep their full
    /// scale); text is single-quoted with embedded quotes doubled.
    pub fn to_sql_literal(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Decimal(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<Decimal> for FieldValue {
    fn from(v: Decimal) -> Self {
        FieldValue::Decimal(v)
    }
}

/// Rust types usable as catalog column types in a table declaration.
pub trait ColumnType: Into<FieldValue> {
    const KIND: FieldKind;
}

impl ColumnType for i32 {
    const KIND: FieldKind = FieldKind::Integer;
}

impl ColumnType for i64 {
    const KIND: FieldKind = FieldKind::Integer;
}

impl ColumnType for String {
    const KIND: FieldKind = FieldKind::Text;
}

impl ColumnType for Decimal {
    const KIND: FieldKind = FieldKind::Decimal;
}

/// One column assignment or filter term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: FieldValue,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// `NAME=literal`
    pub fn to_sql(&self) -> String {
        format!("{}={}", self.name, self.value)
    }

    /// `TABLE.NAME=literal`
    pub fn to_qualified_sql(&self, table: &str) -> String {
        format!("{}.{}={}", table, self.name, self.value)
    }
}
