use super::field::{Field, FieldValue};
use super::relation::{JoinKey, Relation, RelationMode};
use super::table::TableDef;
use crate::client::GenericClient;
use crate::error::CatalogResult;
use tokio_postgres::Row;

/// Accumulated query state for one schema object.
///
/// Filters, values and relations are appended in call order and rendered in
/// that same order. Nothing is deduplicated: setting the same column twice
/// yields two terms. Names are not checked: an empty name renders as `=value`
/// and is left for the store to reject. The one-shot execution methods
/// ([`QueryBuilder::fetch`], [`QueryBuilder::execute_insert`],
/// [`QueryBuilder::execute_update`]) clear all three lists once the store has
/// answered, whatever the answer was.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    /// Table this builder is bound to
    table: &'static TableDef,
    /// WHERE terms
    filters: Vec<Field>,
    /// INSERT/UPDATE assignments
    values: Vec<Field>,
    /// JOIN bindings
    relations: Vec<Relation>,
}

impl QueryBuilder {
    /// Create an empty builder for `table`.
    pub fn new(table: &'static TableDef) -> Self {
        Self {
            table,
            filters: Vec::new(),
            values: Vec::new(),
            relations: Vec::new(),
        }
    }

    pub fn table(&self) -> &'static TableDef {
        self.table
    }

    // ==================== Accumulation ====================

    /// Append a WHERE term `name=value`.
    pub fn set_filter(&mut self, name: &str, value: impl Into<FieldValue>) -> &mut Self {
        self.filters.push(Field::new(name, value));
        self
    }

    /// Append an assignment `name=value` for INSERT/UPDATE.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) -> &mut Self {
        self.values.push(Field::new(name, value));
        self
    }

    /// Bind `target` using the default key derivation ([`JoinKey::Inbound`]).
    pub fn bind(&mut self, target: &'static TableDef, mode: RelationMode) -> &mut Self {
        self.bind_relation(Relation::new(target, mode))
    }

    /// Bind `target` through a foreign key held by this table ([`JoinKey::Outbound`]).
    pub fn bind_referenced(&mut self, target: &'static TableDef, mode: RelationMode) -> &mut Self {
        self.bind_relation(Relation::with_key(target, mode, JoinKey::Outbound))
    }

    pub fn bind_relation(&mut self, relation: Relation) -> &mut Self {
        self.relations.push(relation);
        self
    }

    pub fn filters(&self) -> &[Field] {
        &self.filters
    }

    pub fn values(&self) -> &[Field] {
        &self.values
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Whether at least one relation is bound.
    pub fn is_joined(&self) -> bool {
        !self.relations.is_empty()
    }

    /// Whether nothing has been accumulated since construction or the last clear.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.values.is_empty() && self.relations.is_empty()
    }

    /// Drop all accumulated filters, values and relations.
    pub fn clear(&mut self) {
        self.filters.clear();
        self.values.clear();
        self.relations.clear();
    }

    // ==================== Rendering ====================

    /// Render the SELECT form matching the current state: JOIN-SELECT when a
    /// relation is bound, plain SELECT otherwise.
    pub fn to_sql(&self) -> String {
        if self.is_joined() {
            self.to_join_sql()
        } else {
            self.to_select_sql()
        }
    }

    /// `SELECT <columns> FROM <table>[ WHERE ...]`
    ///
    /// Bound relations are ignored.
    pub fn to_select_sql(&self) -> String {
        let columns = self.table.column_list();
        let mut sql = format!("SELECT {columns} FROM {}", self.table.name);
        if !self.filters.is_empty() {
            let terms: Vec<String> = self.filters.iter().map(Field::to_sql).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&terms.join(" AND "));
        }
        sql
    }

    /// `SELECT <own columns>, <related columns...> FROM <table> <joins...>[ WHERE ...]`
    ///
    /// Columns and filter terms are qualified with their table name so that
    /// like-named key columns on both sides stay unambiguous.
    pub fn to_join_sql(&self) -> String {
        let mut projection = vec![self.table.qualified_column_list()];
        projection.extend(
            self.relations
                .iter()
                .map(|r| r.target().qualified_column_list()),
        );

        let mut sql = format!("SELECT {} FROM {}", projection.join(", "), self.table.name);
        for relation in &self.relations {
            sql.push(' ');
            sql.push_str(&relation.to_sql(self.table));
        }
        if !self.filters.is_empty() {
            let terms: Vec<String> = self
                .filters
                .iter()
                .map(|f| f.to_qualified_sql(self.table.name))
                .collect();
            sql.push_str(" WHERE ");
            sql.push_str(&terms.join(" AND "));
        }
        sql
    }

    /// `INSERT INTO <table> (<names>) VALUES (<literals>)`
    pub fn to_insert_sql(&self) -> String {
        let columns: Vec<&str> = self.values.iter().map(Field::name).collect();
        let literals: Vec<String> = self
            .values
            .iter()
            .map(|f| f.value().to_sql_literal())
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table.name,
            columns.join(","),
            literals.join(",")
        )
    }

    /// `UPDATE <table> SET <name=literal,...>[ WHERE ...]`
    pub fn to_update_sql(&self) -> String {
        let assignments: Vec<String> = self.values.iter().map(Field::to_sql).collect();
        let mut sql = format!("UPDATE {} SET {}", self.table.name, assignments.join(","));
        if !self.filters.is_empty() {
            let terms: Vec<String> = self.filters.iter().map(Field::to_sql).collect();
            sql.push_str(" WHERE ");
            sql.push_str(&terms.join(" AND "));
        }
        sql
    }

    // ==================== Execution ====================

    /// Render the SELECT form, run it, then clear the accumulated state.
    pub async fn fetch<C: GenericClient>(&mut self, client: &C) -> CatalogResult<Vec<Row>> {
        let sql = self.to_sql();
        tracing::debug!(
            target: "catalog.sql",
            table = self.table.name,
            joined = self.is_joined(),
            sql = %sql,
            "select"
        );
        let result = client.query(&sql, &[]).await;
        self.clear();
        result
    }

    /// Render the INSERT form, run it, then clear the accumulated state.
    pub async fn execute_insert<C: GenericClient>(&mut self, client: &C) -> CatalogResult<u64> {
        let sql = self.to_insert_sql();
        self.execute_statement(client, "insert", sql).await
    }

    /// Render the UPDATE form, run it, then clear the accumulated state.
    pub async fn execute_update<C: GenericClient>(&mut self, client: &C) -> CatalogResult<u64> {
        let sql = self.to_update_sql();
        self.execute_statement(client, "update", sql).await
    }

    async fn execute_statement<C: GenericClient>(
        &mut self,
        client: &C,
        kind: &'static str,
        sql: String,
    ) -> CatalogResult<u64> {
        tracing::debug!(
            target: "catalog.sql",
            table = self.table.name,
            statement = kind,
            sql = %sql,
            "execute"
        );
        let result = client.execute(&sql, &[]).await;
        self.clear();
        result
    }
}
