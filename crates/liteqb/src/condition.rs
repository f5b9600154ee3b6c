//! WHERE condition model.
//!
//! A [`Where`] is a single comparison; a [`WhereGroup`] is an ordered run of
//! comparisons plus the parameter values they bind, kept in lockstep. The
//! group's parameter list must always match, in count and order, the `?`
//! placeholders its own rendering emits; that alignment is the contract the
//! whole builder exists to preserve.

use std::fmt;
use std::str::FromStr;

use crate::error::{QbError, QbResult};
use crate::ident;
use crate::value::Value;

/// Comparison operator for a single condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Like,
    NotLike,
}

impl Op {
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Like => "LIKE",
            Op::NotLike => "NOT LIKE",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Op {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Op::Eq),
            "!=" | "<>" => Ok(Op::Ne),
            ">" => Ok(Op::Gt),
            ">=" => Ok(Op::Gte),
            "<" => Ok(Op::Lt),
            "<=" => Ok(Op::Lte),
            _ if s.eq_ignore_ascii_case("LIKE") => Ok(Op::Like),
            _ if s.eq_ignore_ascii_case("NOT LIKE") => Ok(Op::NotLike),
            _ => Err(QbError::type_error(format!("Unknown operator: {s}"))),
        }
    }
}

/// Logical combinator joining conditions and sibling groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Logical {
    #[default]
    And,
    Or,
}

impl Logical {
    pub fn as_str(self) -> &'static str {
        match self {
            Logical::And => "AND",
            Logical::Or => "OR",
        }
    }
}

impl fmt::Display for Logical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Logical {
    type Err = QbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(Logical::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(Logical::Or)
        } else {
            Err(QbError::type_error(format!(
                "Logical operator must be AND or OR, got: {s}"
            )))
        }
    }
}

/// A single WHERE comparison.
///
/// Rendering depends on what is present: an operator renders
/// `<logical> <column> <op> ?`; no operator and no parameter renders an
/// `IS NULL` test; no operator with a parameter renders equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    pub column: String,
    pub op: Option<Op>,
    pub param: Option<Value>,
    pub logical: Logical,
}

impl Where {
    /// Render the condition fragment, including its leading combinator.
    pub fn build(&self) -> String {
        if let Some(op) = self.op {
            format!("{} {} {} ?", self.logical, self.column, op)
        } else if self.param.is_none() {
            format!("{} {} IS NULL", self.logical, self.column)
        } else {
            format!("{} {} = ?", self.logical, self.column)
        }
    }
}

/// An ordered sequence of conditions with their bound parameters.
#[derive(Debug, Clone, Default)]
pub struct WhereGroup {
    conditions: Vec<Where>,
    params: Vec<Value>,
    combinator: Logical,
}

impl WhereGroup {
    /// Create an empty group that combines with siblings via AND.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group with an explicit sibling combinator.
    pub fn with_combinator(combinator: Logical) -> Self {
        Self {
            combinator,
            ..Self::default()
        }
    }

    /// Add a null test (`column IS NULL`), combined with AND.
    pub fn add(&mut self, column: &str) -> QbResult<&mut Self> {
        self.push(column, None, None, Logical::And)
    }

    /// Add an equality test against `value`, combined with AND.
    pub fn add_value(&mut self, column: &str, value: impl Into<Value>) -> QbResult<&mut Self> {
        self.push(column, None, Some(value.into()), Logical::And)
    }

    /// Add an explicit comparison, combined with AND.
    pub fn add_op(&mut self, column: &str, op: Op, value: impl Into<Value>) -> QbResult<&mut Self> {
        self.push(column, Some(op), Some(value.into()), Logical::And)
    }

    /// Add a null test combined with OR.
    pub fn or(&mut self, column: &str) -> QbResult<&mut Self> {
        self.push(column, None, None, Logical::Or)
    }

    /// Add an equality test combined with OR.
    pub fn or_value(&mut self, column: &str, value: impl Into<Value>) -> QbResult<&mut Self> {
        self.push(column, None, Some(value.into()), Logical::Or)
    }

    /// Add an explicit comparison combined with OR.
    pub fn or_op(&mut self, column: &str, op: Op, value: impl Into<Value>) -> QbResult<&mut Self> {
        self.push(column, Some(op), Some(value.into()), Logical::Or)
    }

    /// Parse a combined condition string such as `"age > 18"`.
    ///
    /// This is sugar over [`add_op`](Self::add_op): the expression is split
    /// on whitespace into column, operator, and parameter; the operator must
    /// be one [`Op`] token; surrounding quotes are stripped from the
    /// parameter, which then binds as text. Values that must bind with a
    /// non-text storage class go through the explicit constructors.
    pub fn add_str(&mut self, expr: &str) -> QbResult<&mut Self> {
        self.add_str_logical(expr, Logical::And)
    }

    /// [`add_str`](Self::add_str) with an explicit sibling combinator.
    pub fn add_str_logical(&mut self, expr: &str, logical: Logical) -> QbResult<&mut Self> {
        let mut parts = expr.splitn(3, char::is_whitespace);
        let column = parts.next().unwrap_or_default();
        match (parts.next(), parts.next()) {
            (None, _) => self.push(column, None, None, logical),
            (Some(op), Some(raw)) => {
                let op = Op::from_str(op)?;
                let param = raw
                    .trim()
                    .trim_matches('\'')
                    .trim_matches('"')
                    .to_string();
                self.push(column, Some(op), Some(Value::Text(param)), logical)
            }
            (Some(_), None) => Err(QbError::type_error(format!(
                "Condition is missing a parameter: {expr}"
            ))),
        }
    }

    fn push(
        &mut self,
        column: &str,
        op: Option<Op>,
        param: Option<Value>,
        logical: Logical,
    ) -> QbResult<&mut Self> {
        ident::validate_identifier(column)?;
        if let Some(param) = &param {
            self.params.push(param.clone());
        }
        self.conditions.push(Where {
            column: column.to_string(),
            op,
            param,
            logical,
        });
        Ok(self)
    }

    /// The parameters, in the order the rendered placeholders consume them.
    pub fn get_params(&self) -> &[Value] {
        &self.params
    }

    /// The combinator used when this group is joined to a sibling group.
    pub fn combinator(&self) -> Logical {
        self.combinator
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render the group: condition fragments joined by single spaces, with
    /// the first fragment's leading combinator stripped.
    pub fn build(&self) -> String {
        if self.conditions.is_empty() {
            return String::new();
        }
        let joined = self
            .conditions
            .iter()
            .map(Where::build)
            .collect::<Vec<_>>()
            .join(" ");
        match joined.split_once(' ') {
            Some((_, rest)) => rest.to_string(),
            None => joined,
        }
    }
}
