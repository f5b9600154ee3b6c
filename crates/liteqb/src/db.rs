//! The execution seam toward a caller-owned database connection.

use crate::value::Value;

/// A synchronous connection able to execute a built `(sql, params)` pair.
///
/// The builder has no opinion on execution semantics: pooling, transactions,
/// retries, timeouts, and result mapping all live behind this trait. A
/// failure is handed back verbatim and surfaces from
/// [`QueryBuilder::execute`](crate::builder::QueryBuilder::execute) as
/// [`QbError::Database`](crate::error::QbError::Database).
pub trait Database {
    /// Successful execution result (rows, affected count, ...).
    type Output;
    /// Driver-side failure type.
    type Error: std::error::Error + Send + Sync + 'static;

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Self::Output, Self::Error>;
}
