//! SQL identifier validation.
//!
//! Table and column names must match `[A-Za-z_][A-Za-z0-9_]*`. Column names
//! in DDL must additionally avoid the reserved keywords below,
//! case-insensitively. Nothing here quotes or escapes: a name either passes
//! the grammar or the call fails.

use crate::error::{QbError, QbResult};
use regex::Regex;
use std::sync::OnceLock;

/// Keywords a column definition may not shadow.
const RESERVED_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "ORDER", "BY", "LIMIT", "OFFSET", "GROUP",
    "HAVING", "INSERT", "INTO", "VALUES", "UPDATE", "SET", "DELETE", "JOIN",
    "ON", "AND", "OR", "NOT", "NULL", "IS", "LIKE", "BETWEEN", "IN",
    "CREATE", "DROP", "TABLE", "VIEW", "INDEX", "TRIGGER", "PRIMARY", "KEY",
    "UNIQUE", "FOREIGN", "REFERENCES", "DEFAULT", "TEMPORARY", "EXISTS",
];

fn ident_re() -> &'static Regex {
    static IDENT_RE: OnceLock<Regex> = OnceLock::new();
    IDENT_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("invalid built-in identifier regex")
    })
}

/// Validate a table or column name against the identifier grammar.
pub fn validate_identifier(name: &str) -> QbResult<()> {
    if ident_re().is_match(name) {
        Ok(())
    } else {
        Err(QbError::identifier(name))
    }
}

/// Whether `name` collides with a reserved SQL keyword, case-insensitively.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_KEYWORDS
        .iter()
        .any(|kw| kw.eq_ignore_ascii_case(name))
}

/// Validate a column name for DDL: grammar plus reserved-keyword collision.
pub fn validate_column_name(name: &str) -> QbResult<()> {
    validate_identifier(name)?;
    if is_reserved(name) {
        return Err(QbError::ReservedKeyword(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(validate_identifier("users").is_ok());
        assert!(validate_identifier("_private").is_ok());
        assert!(validate_identifier("table_2").is_ok());
    }

    #[test]
    fn rejects_bad_identifiers() {
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("bad name!").is_err());
        assert!(validate_identifier("1table").is_err());
        assert!(validate_identifier("a-b").is_err());
        assert!(validate_identifier("users; DROP TABLE x").is_err());
    }

    #[test]
    fn keyword_collision_is_case_insensitive() {
        assert!(is_reserved("select"));
        assert!(is_reserved("Values"));
        assert!(!is_reserved("username"));
    }

    #[test]
    fn column_name_rejects_keywords() {
        assert!(matches!(
            validate_column_name("where"),
            Err(QbError::ReservedKeyword(_))
        ));
        assert!(validate_column_name("created_at").is_ok());
    }
}
