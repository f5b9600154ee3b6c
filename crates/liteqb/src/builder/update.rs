//! UPDATE statement builder.

use crate::builder::base::{BuilderCore, QueryBuilder, QueryType};
use crate::clause::Clause;
use crate::condition::WhereGroup;
use crate::error::{QbError, QbResult};
use crate::ident;
use crate::value::Value;

/// UPDATE query builder.
///
/// SET parameters bind before WHERE parameters; call `set` before `filter`
/// so the ordered list matches the rendered placeholders.
#[derive(Debug, Clone)]
pub struct Update {
    core: BuilderCore,
}

impl Update {
    pub fn new() -> Self {
        Self {
            core: BuilderCore::new(QueryType::Update),
        }
    }

    /// Queue a column/value pair for the SET clause.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> QbResult<&mut Self> {
        ident::validate_identifier(column)?;
        self.core.columns_mut().push(column.to_string());
        self.core.params_mut().add_param(value);
        self.core.mark_dirty();
        Ok(self)
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
}

impl Default for Update {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder for Update {
    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn render(&self) -> QbResult<String> {
        let table = self.core.require_table()?;
        if self.core.columns().is_empty() {
            return Err(QbError::state("No columns to update"));
        }
        let set_clause = self
            .core
            .columns()
            .iter()
            .map(|col| format!("{col} = ?"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut parts = vec![format!("UPDATE {table} SET {set_clause}")];
        let clauses = self.core.clauses().render();
        if !clauses.is_empty() {
            parts.push(clauses);
        }
        Ok(parts.join(" "))
    }
}
