//! Clause accumulation and rendering in canonical order.
//!
//! The assembler owns everything between the statement head and the end of
//! the query: WHERE, GROUP BY/HAVING, ORDER BY, LIMIT, OFFSET. Rendering
//! order is fixed regardless of insertion order.

use std::fmt;
use std::str::FromStr;

use crate::condition::WhereGroup;
use crate::error::QbError;

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ASC") {
            Ok(Order::Asc)
        } else if s.eq_ignore_ascii_case("DESC") {
            Ok(Order::Desc)
        } else {
            Err(QbError::type_error(format!(
                "Sort direction must be ASC or DESC, got: {s}"
            )))
        }
    }
}

/// One clause fragment accepted by [`ClauseBuilder::add`].
#[derive(Debug, Clone)]
pub enum Clause {
    Where(WhereGroup),
    GroupBy(Vec<String>),
    Having(WhereGroup),
    OrderBy(String, Order),
    Limit(i64),
    Offset(i64),
}

/// Accumulates clause fragments and renders them canonically.
#[derive(Debug, Clone, Default)]
pub struct ClauseBuilder {
    where_groups: Vec<WhereGroup>,
    group_by: Vec<String>,
    having: Option<WhereGroup>,
    order_by: Vec<(String, Order)>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl ClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a clause fragment to its slot.
    pub fn add(&mut self, clause: Clause) {
        match clause {
            Clause::Where(group) => self.push_where(group),
            Clause::GroupBy(cols) => self.extend_group_by(cols),
            Clause::Having(group) => self.set_having(group),
            Clause::OrderBy(col, dir) => self.push_order_by(col, dir),
            Clause::Limit(n) => self.set_limit(n),
            Clause::Offset(n) => self.set_offset(n),
        }
    }

    pub fn push_where(&mut self, group: WhereGroup) {
        self.where_groups.push(group);
    }

    pub fn extend_group_by(&mut self, cols: impl IntoIterator<Item = String>) {
        self.group_by.extend(cols);
    }

    pub fn set_having(&mut self, group: WhereGroup) {
        self.having = Some(group);
    }

    pub fn push_order_by(&mut self, column: String, direction: Order) {
        self.order_by.push((column, direction));
    }

    pub fn set_limit(&mut self, limit: i64) {
        self.limit = Some(limit);
    }

    pub fn set_offset(&mut self, offset: i64) {
        self.offset = Some(offset);
    }

    pub fn has_conditions(&self) -> bool {
        self.where_groups.iter().any(|g| !g.is_empty())
    }

    /// Render accumulated clauses: `WHERE`, `GROUP BY [HAVING]`, `ORDER BY`,
    /// `LIMIT`, `OFFSET`. Each segment appears only when its state is
    /// non-empty; segments are joined by single spaces.
    pub fn render(&self) -> String {
        let mut clauses: Vec<String> = Vec::new();

        let groups: Vec<&WhereGroup> =
            self.where_groups.iter().filter(|g| !g.is_empty()).collect();
        if !groups.is_empty() {
            let mut out = String::from("WHERE ");
            // A lone group renders bare; siblings are joined by each
            // following group's combinator, parenthesized when a group has
            // more than one condition so precedence survives the join.
            let siblings = groups.len() > 1;
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                    out.push_str(group.combinator().as_str());
                    out.push(' ');
                }
                let body = group.build();
                if siblings && group.len() > 1 {
                    out.push('(');
                    out.push_str(&body);
                    out.push(')');
                } else {
                    out.push_str(&body);
                }
            }
            clauses.push(out);
        }

        if !self.group_by.is_empty() {
            let mut out = format!("GROUP BY {}", self.group_by.join(", "));
            if let Some(having) = &self.having {
                if !having.is_empty() {
                    out.push_str(" HAVING ");
                    out.push_str(&having.build());
                }
            }
            clauses.push(out);
        }

        if !self.order_by.is_empty() {
            let cols = self
                .order_by
                .iter()
                .map(|(col, dir)| format!("{col} {dir}"))
                .collect::<Vec<_>>()
                .join(", ");
            clauses.push(format!("ORDER BY {cols}"));
        }

        if let Some(limit) = self.limit {
            clauses.push(format!("LIMIT {limit}"));
        }

        if let Some(offset) = self.offset {
            clauses.push(format!("OFFSET {offset}"));
        }

        clauses.join(" ")
    }

    /// Clear all clause-level state. Table and query-type are owned by the
    /// builder, not by the assembler.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
