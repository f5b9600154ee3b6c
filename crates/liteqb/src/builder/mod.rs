//! Statement builders and their factory functions.
//!
//! Each statement kind has a named constructor returning the concrete
//! builder type. A factory taking a table validates the identifier
//! immediately, so a bad name fails at the introducing call, never at build
//! time.
//!
//! # Usage
//!
//! ```ignore
//! use liteqb::{select, QueryBuilder, WhereGroup, Op};
//!
//! let mut adults = WhereGroup::new();
//! adults.add_op("age", Op::Gt, 18)?;
//!
//! let mut qb = select("users")?;
//! qb.filter(adults).limit(10);
//! let (sql, params) = qb.build()?;
//! ```

mod base;
mod delete;
mod insert;
mod select;
mod update;

pub use base::{BuilderCore, QueryBuilder, QueryType};
pub use delete::Delete;
pub use insert::{ConflictStrategy, Insert};
pub use select::{JoinKind, Select};
pub use update::Update;

use crate::error::QbResult;

/// Create a SELECT builder bound to `table`.
pub fn select(table: &str) -> QbResult<Select> {
    let mut qb = Select::new();
    qb.table(table)?;
    Ok(qb)
}

/// Create an INSERT builder bound to `table`.
pub fn insert(table: &str) -> QbResult<Insert> {
    let mut qb = Insert::new();
    qb.table(table)?;
    Ok(qb)
}

/// Create an UPDATE builder bound to `table`.
pub fn update(table: &str) -> QbResult<Update> {
    let mut qb = Update::new();
    qb.table(table)?;
    Ok(qb)
}

/// Create a DELETE builder bound to `table`.
pub fn delete(table: &str) -> QbResult<Delete> {
    let mut qb = Delete::new();
    qb.table(table)?;
    Ok(qb)
}
