//! SELECT statement builder.

use std::fmt;

use crate::builder::base::{BuilderCore, QueryBuilder, QueryType};
use crate::clause::{Clause, Order};
use crate::condition::WhereGroup;
use crate::error::QbResult;
use crate::ident;

/// JOIN flavor; INNER when unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    #[default]
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER",
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Full => "FULL OUTER",
        }
    }
}

impl fmt::Display for JoinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SELECT query builder.
///
/// The default projection is `*`. Join fragments are kept apart from the
/// clause assembler and appended after the clause fragment, in insertion
/// order.
#[derive(Debug, Clone)]
pub struct Select {
    core: BuilderCore,
    joins: Vec<String>,
}

impl Select {
    pub fn new() -> Self {
        Self {
            core: BuilderCore::new(QueryType::Select),
            joins: Vec::new(),
        }
    }

    /// Replace the projected columns. Projections may be arbitrary
    /// expressions (`COUNT(*)`, `price * qty`), so no grammar check applies.
    pub fn columns<I, S>(&mut self, cols: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cols = cols.into_iter().map(Into::into).collect();
        *self.core.columns_mut() = cols;
        self.core.mark_dirty();
        self
    }

    /// Attach a WHERE group; its parameters extend the ordered list.
    pub fn filter(&mut self, group: WhereGroup) -> &mut Self {
        self.core
            .params_mut()
            .extend(group.get_params().iter().cloned());
        self.core.clauses_mut().add(Clause::Where(group));
        self.core.mark_dirty();
        self
    }

    pub fn group_by<I, S>(&mut self, cols: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cols = cols.into_iter().map(Into::into).collect();
        self.core.clauses_mut().add(Clause::GroupBy(cols));
        self.core.mark_dirty();
        self
    }

    /// Attach a HAVING group; its parameters extend the ordered list.
    pub fn having(&mut self, group: WhereGroup) -> &mut Self {
        self.core
            .params_mut()
            .extend(group.get_params().iter().cloned());
        self.core.clauses_mut().add(Clause::Having(group));
        self.core.mark_dirty();
        self
    }

    pub fn order_by(&mut self, column: impl Into<String>, direction: Order) -> &mut Self {
        self.core
            .clauses_mut()
            .add(Clause::OrderBy(column.into(), direction));
        self.core.mark_dirty();
        self
    }

    pub fn limit(&mut self, limit: i64) -> &mut Self {
        self.core.clauses_mut().add(Clause::Limit(limit));
        self.core.mark_dirty();
        self
    }

    pub fn offset(&mut self, offset: i64) -> &mut Self {
        self.core.clauses_mut().add(Clause::Offset(offset));
        self.core.mark_dirty();
        self
    }

    /// Add an INNER JOIN.
    pub fn join(&mut self, table: &str, on: &str) -> QbResult<&mut Self> {
        self.join_as(JoinKind::Inner, table, on)
    }

    /// Add a JOIN with an explicit flavor.
    pub fn join_as(&mut self, kind: JoinKind, table: &str, on: &str) -> QbResult<&mut Self> {
        ident::validate_identifier(table)?;
        self.joins.push(format!("{kind} JOIN {table} ON {on}"));
        self.core.mark_dirty();
        Ok(self)
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder for Select {
    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn render(&self) -> QbResult<String> {
        let table = self.core.require_table()?;
        let cols = if self.core.columns().is_empty() {
            "*".to_string()
        } else {
            self.core.columns().join(", ")
        };

        let mut parts = vec![format!("SELECT {cols} FROM {table}")];
        let clauses = self.core.clauses().render();
        if !clauses.is_empty() {
            parts.push(clauses);
        }
        if !self.joins.is_empty() {
            parts.push(self.joins.join(" "));
        }
        Ok(parts.join(" "))
    }

    fn reset_statement(&mut self) {
        self.joins.clear();
    }
}
