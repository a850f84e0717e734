use super::field::FieldKind;

/// A declared column: name plus kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// Database table metadata.
///
/// Declared once per table (usually as a `static`) and shared by every schema
/// object bound to it. Name, primary key and columns never change after
/// declaration.
///
/// # Example
///
/// ```rust
/// use catalog::qb::{Column, FieldKind, TableDef};
///
/// static TAGS: TableDef = TableDef {
///     name: "TB_TAG",
///     primary_key: "TAG_ID",
///     columns: &[
///         Column { name: "TAG_ID", kind: FieldKind::Integer },
///         Column { name: "TAG_NAME", kind: FieldKind::Text },
///     ],
/// };
///
/// assert_eq!(TAGS.column_list(), "TAG_ID, TAG_NAME");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub primary_key: &'static str,
    pub columns: &'static [Column],
}

impl TableDef {
    /// Number of columns this table contributes to a projection.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// `A, B, C`
    pub fn column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `T.A, T.B, T.C`
    pub fn qualified_column_list(&self) -> String {
        self.columns
            .iter()
            .map(|c| format!("{}.{}", self.name, c.name))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
