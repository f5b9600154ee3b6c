//! # liteqb
//!
//! A fluent, SQLite-flavored SQL query and schema builder.
//!
//! liteqb assembles parameterized SELECT/INSERT/UPDATE/DELETE statements and
//! CREATE TABLE DDL through chained calls, producing a query string with
//! positional `?` placeholders paired with the ordered parameter list.
//! Executing the pair is the caller's business: any connection can sit
//! behind the [`Database`] seam.
//!
//! ## Features
//!
//! - **Placeholder alignment**: parameters always travel out-of-band, in
//!   the exact order their placeholders appear in the rendered text
//! - **Fail-fast validation**: table and column names are checked against
//!   the identifier grammar at the introducing call, never at build time
//! - **Memoized builds**: each builder keeps one `(sql, params)` pair,
//!   invalidated by a dirty flag that every mutating call sets
//! - **Reusable builders**: `reset()` keeps the table binding so one
//!   instance can issue successive statements against the same table
//!
//! ## Example
//!
//! ```
//! use liteqb::{select, Op, QueryBuilder, WhereGroup};
//!
//! # fn main() -> liteqb::QbResult<()> {
//! let mut adults = WhereGroup::new();
//! adults.add_op("age", Op::Gt, 18)?;
//!
//! let mut qb = select("users")?;
//! qb.filter(adults).limit(10);
//!
//! let (sql, params) = qb.build()?;
//! assert_eq!(sql, "SELECT * FROM users WHERE age > ? LIMIT 10");
//! assert_eq!(params.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod clause;
pub mod condition;
pub mod db;
pub mod error;
pub mod ident;
pub mod params;
pub mod schema;
pub mod value;

pub use builder::{
    delete, insert, select, update, ConflictStrategy, Delete, Insert, JoinKind, QueryBuilder,
    QueryType, Select, Update,
};
pub use clause::{Clause, ClauseBuilder, Order};
pub use condition::{Logical, Op, Where, WhereGroup};
pub use db::Database;
pub use error::{QbError, QbResult};
pub use params::ParameterManager;
pub use schema::{
    ColumnOptions, DataType, DefaultValue, SchemaBuilder, TableCreator, TableOptions,
};
pub use value::Value;

/// Create a schema/DDL builder.
pub fn schema() -> SchemaBuilder {
    SchemaBuilder::new()
}

/// Create a CREATE TABLE builder for `name` with the default meta columns.
pub fn create_table(name: &str) -> QbResult<TableCreator> {
    TableCreator::new(name)
}
