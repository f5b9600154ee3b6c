//! Table-definition and ad hoc DDL statement factories.

mod table;

pub use table::{
    ColumnDef, ColumnOptions, DataType, DefaultValue, ForeignKey, TableCreator, TableOptions,
};

use crate::error::QbResult;

/// Stateless factories for ad hoc DDL statements.
///
/// Apart from [`create_table`](SchemaBuilder::create_table), these are plain
/// string templates with no validation beyond their own interpolation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder;

impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Start a CREATE TABLE builder for `name`.
    pub fn create_table(&self, name: &str) -> QbResult<TableCreator> {
        TableCreator::new(name)
    }

    pub fn create_view(&self, name: &str, select_query: &str) -> String {
        format!("CREATE VIEW {name} AS {select_query}")
    }

    pub fn create_trigger(&self, name: &str, event: &str, table: &str, action: &str) -> String {
        format!("CREATE TRIGGER {name} {event} ON {table} FOR EACH ROW {action}")
    }

    pub fn create_index(&self, name: &str, table: &str, columns: &[&str], unique: bool) -> String {
        let unique_kw = if unique { "UNIQUE " } else { "" };
        format!(
            "CREATE {unique_kw}INDEX {name} ON {table} ({})",
            columns.join(", ")
        )
    }

    pub fn drop_table(&self, name: &str) -> String {
        format!("DROP TABLE {name}")
    }

    pub fn drop_view(&self, name: &str) -> String {
        format!("DROP VIEW {name}")
    }

    pub fn drop_trigger(&self, name: &str) -> String {
        format!("DROP TRIGGER {name}")
    }

    pub fn drop_index(&self, name: &str) -> String {
        format!("DROP INDEX {name}")
    }
}
