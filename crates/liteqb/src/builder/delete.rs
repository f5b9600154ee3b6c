//! DELETE statement builder.

use crate::builder::base::{BuilderCore, QueryBuilder, QueryType};
use crate::clause::Clause;
use crate::condition::WhereGroup;
use crate::error::QbResult;

/// DELETE query builder.
///
/// An unfiltered DELETE renders as written and removes every row; attaching
/// a WHERE group is the caller's responsibility.
#[derive(Debug, Clone)]
pub struct Delete {
    core: BuilderCore,
}

impl Delete {
    pub fn new() -> Self {
        Self {
            core: BuilderCore::new(QueryType::Delete),
        }
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

impl Default for Delete {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder for Delete {
    fn core(&self) -> &BuilderCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut BuilderCore {
        &mut self.core
    }

    fn render(&self) -> QbResult<String> {
        let table = self.core.require_table()?;
        let mut parts = vec![format!("DELETE FROM {table}")];
        let clauses = self.core.clauses().render();
        if !clauses.is_empty() {
            parts.push(clauses);
        }
        Ok(parts.join(" "))
    }
}
