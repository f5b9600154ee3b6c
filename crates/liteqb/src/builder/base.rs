//! Shared builder state and the build/execute/reset lifecycle.

use std::fmt;
use std::str::FromStr;

use crate::clause::ClauseBuilder;
use crate::db::Database;
use crate::error::{QbError, QbResult};
use crate::ident;
use crate::params::ParameterManager;
use crate::value::Value;

/// Statement kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Select,
    Insert,
    Update,
    Delete,
}

impl QueryType {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::Select => "SELECT",
            QueryType::Insert => "INSERT",
            QueryType::Update => "UPDATE",
            QueryType::Delete => "DELETE",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Ok(QueryType::Select),
            "INSERT" => Ok(QueryType::Insert),
            "UPDATE" => Ok(QueryType::Update),
            "DELETE" => Ok(QueryType::Delete),
            _ => Err(QbError::type_error(format!("Unknown query type: {s}"))),
        }
    }
}

/// State shared by every statement builder: table binding, kind tag,
/// column list, parameter manager, clause assembler, and the dirty flag
/// that gates the memo slot.
#[derive(Debug, Clone)]
pub struct BuilderCore {
    table: Option<String>,
    query_type: Option<QueryType>,
    columns: Vec<String>,
    params: ParameterManager,
    clauses: ClauseBuilder,
    state_changed: bool,
}

impl BuilderCore {
    pub(crate) fn new(query_type: QueryType) -> Self {
        Self {
            table: None,
            query_type: Some(query_type),
            columns: Vec::new(),
            params: ParameterManager::new(),
            clauses: ClauseBuilder::new(),
            state_changed: true,
        }
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// The bound table, or a state error when none is set.
    pub(crate) fn require_table(&self) -> QbResult<&str> {
        self.table
            .as_deref()
            .ok_or_else(|| QbError::state("No table specified"))
    }

    pub fn query_type(&self) -> Option<QueryType> {
        self.query_type
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<String> {
        &mut self.columns
    }

    pub fn params(&self) -> &ParameterManager {
        &self.params
    }

    pub(crate) fn params_mut(&mut self) -> &mut ParameterManager {
        &mut self.params
    }

    pub fn clauses(&self) -> &ClauseBuilder {
        &self.clauses
    }

    pub(crate) fn clauses_mut(&mut self) -> &mut ClauseBuilder {
        &mut self.clauses
    }

    /// Mark the builder state as changed since the last render.
    pub(crate) fn mark_dirty(&mut self) {
        self.state_changed = true;
    }
}

/// Fluent lifecycle shared by the statement builders.
///
/// Implementors provide their statement-specific [`render`](Self::render)
/// and state hooks; table binding, cache handling, execution handoff, and
/// reset come for free.
pub trait QueryBuilder {
    fn core(&self) -> &BuilderCore;

    fn core_mut(&mut self) -> &mut BuilderCore;

    /// Statement-specific rendering; called by [`build`](Self::build) on a
    /// cache miss. Must fail when required statement state is missing.
    fn render(&self) -> QbResult<String>;

    /// Statement-specific state cleared by [`reset`](Self::reset).
    fn reset_statement(&mut self) {}

    /// Bind the target table, validating the identifier.
    ///
    /// Rebinding the table alone does not mark the builder dirty: a
    /// previously memoized query stays valid until a clause or parameter
    /// mutation invalidates it.
    fn table(&mut self, name: &str) -> QbResult<&mut Self>
    where
        Self: Sized,
    {
        ident::validate_identifier(name)?;
        tracing::debug!(target: "liteqb.sql", table = name, "bound table");
        self.core_mut().table = Some(name.to_string());
        Ok(self)
    }

    /// Render the statement, or return the memoized pair when nothing
    /// changed since the last build.
    fn build(&mut self) -> QbResult<(String, Vec<Value>)> {
        if !self.core().state_changed {
            if let Some(cached) = self.core().params.get_cached() {
                return Ok(cached);
            }
        }

        self.core().require_table()?;

        let sql = self.render().map_err(QbError::build)?;

        let core = self.core_mut();
        core.params.cache(sql.as_str());
        core.state_changed = false;
        tracing::debug!(
            target: "liteqb.sql",
            query_type = ?core.query_type,
            sql = %sql,
            param_count = core.params.len(),
            "built query"
        );
        Ok((sql, core.params.params().to_vec()))
    }

    /// Build and hand the pair to the executing connection, returning its
    /// result verbatim.
    fn execute<D: Database>(&mut self, db: &mut D) -> QbResult<D::Output> {
        let (sql, params) = self.build()?;
        db.execute(&sql, &params)
            .map_err(|e| QbError::Database(Box::new(e)))
    }

    /// Clear the query-type tag, dirty flag, cache, parameters, and clause
    /// state. The table binding survives so the same builder can start a new
    /// statement against the same table.
    fn reset(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        {
            let core = self.core_mut();
            core.query_type = None;
            core.state_changed = false;
            core.columns.clear();
            core.params.clear();
            core.clauses.reset();
        }
        self.reset_statement();
        self
    }
}
