//! Bindings between a schema object and a related table.

use super::table::TableDef;

/// How a bound relation is joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationMode {
    /// Inner join: only rows with a match on both sides.
    Mandatory,
    /// Left join: current rows are kept when the related table has no match.
    Optional,
}

impl RelationMode {
    pub fn join_keyword(&self) -> &'static str {
        match self {
            RelationMode::Mandatory => "JOIN",
            RelationMode::Optional => "LEFT JOIN",
        }
    }
}

/// Which side of the relation carries the foreign key column.
///
/// The key column is derived from a naming convention, never declared: a
/// foreign key column is named exactly like the primary key it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKey {
    /// The related table references the current one:
    /// `CURRENT.PK = RELATED.<current PK>`.
    Inbound,
    /// The current table references the related one:
    /// `CURRENT.<related PK> = RELATED.PK`.
    Outbound,
}

/// A related table bound to a schema object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    target: &'static TableDef,
    mode: RelationMode,
    key: JoinKey,
}

impl Relation {
    /// Bind `target` with the default [`JoinKey::Inbound`] key derivation.
    pub fn new(target: &'static TableDef, mode: RelationMode) -> Self {
        Self::with_key(target, mode, JoinKey::Inbound)
    }

    pub fn with_key(target: &'static TableDef, mode: RelationMode, key: JoinKey) -> Self {
        Self { target, mode, key }
    }

    pub fn target(&self) -> &'static TableDef {
        self.target
    }

    pub fn mode(&self) -> RelationMode {
        self.mode
    }

    pub fn key(&self) -> JoinKey {
        self.key
    }

    /// The ON predicate joining `owner` to this relation's target.
    pub fn predicate(&self, owner: &TableDef) -> String {
        let column = match self.key {
            JoinKey::Inbound => owner.primary_key,
            JoinKey::Outbound => self.target.primary_key,
        };
        format!("{}.{column} = {}.{column}", owner.name, self.target.name)
    }

    /// `JOIN RELATED ON <predicate>` or `LEFT JOIN RELATED ON <predicate>`.
    pub fn to_sql(&self, owner: &TableDef) -> String {
        let keyword = self.mode.join_keyword();
        let target = self.target.name;
        format!("{keyword} {target} ON {}", self.predicate(owner))
    }
}
