//! INSERT statement builder.

use std::fmt;
use std::str::FromStr;

use crate::builder::base::{BuilderCore, QueryBuilder, QueryType};
use crate::error::{QbError, QbResult};
use crate::ident;
use crate::value::Value;

/// SQLite conflict resolution, applied as `INSERT OR <strategy>`.
///
/// See <https://www.sqlite.org/lang_conflict.html>.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictStrategy {
    Ignore,
    Replace,
    Rollback,
    Abort,
    Fail,
}

impl ConflictStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ConflictStrategy::Ignore => "IGNORE",
            ConflictStrategy::Replace => "REPLACE",
            ConflictStrategy::Rollback => "ROLLBACK",
            ConflictStrategy::Abort => "ABORT",
            ConflictStrategy::Fail => "FAIL",
        }
    }
}

impl fmt::Display for ConflictStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictStrategy {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "IGNORE" => Ok(ConflictStrategy::Ignore),
            "REPLACE" => Ok(ConflictStrategy::Replace),
            "ROLLBACK" => Ok(ConflictStrategy::Rollback),
            "ABORT" => Ok(ConflictStrategy::Abort),
            "FAIL" => Ok(ConflictStrategy::Fail),
            _ => Err(QbError::type_error(format!(
                "Invalid ON CONFLICT strategy: {s}"
            ))),
        }
    }
}

/// INSERT query builder.
#[derive(Debug, Clone)]
pub struct Insert {
    core: BuilderCore,
    on_conflict: Option<ConflictStrategy>,
}

impl Insert {
    pub fn new() -> Self {
        Self {
            core: BuilderCore::new(QueryType::Insert),
            on_conflict: None,
        }
    }

    /// Queue a column/value pair. Columns and parameters stay in matching
    /// order.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> QbResult<&mut Self> {
        ident::validate_identifier(column)?;
        self.core.columns_mut().push(column.to_string());
        self.core.params_mut().add_param(value);
        self.core.mark_dirty();
        Ok(self)
    }

    /// Set the conflict resolution strategy.
    pub fn on_conflict(&mut self, strategy: ConflictStrategy) -> &mut Self {
        self.on_conflict = Some(strategy);
        self.core.mark_dirty();
        self
    }

    /// Shortcut for `INSERT OR IGNORE`.
    pub fn on_conflict_ignore(&mut self) -> &mut Self {
        self.on_conflict(ConflictStrategy::Ignore)
    }
}

impl Default for Insert {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder for Insert {
    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn render(&self) -> QbResult<String> {
        let table = self.core.require_table()?;
        if self.core.columns().is_empty() {
            return Err(QbError::state("No columns to insert"));
        }
        let conflict = self
            .on_conflict
            .map(|strategy| format!(" OR {strategy}"))
            .unwrap_or_default();
        Ok(format!(
            "INSERT{} INTO {} ({}) VALUES ({})",
            conflict,
            table,
            self.core.columns().join(", "),
            self.core.params().generate_placeholders()
        ))
    }

    fn reset_statement(&mut self) {
        self.on_conflict = None;
    }
}
