//! Owned SQL parameter values.
//!
//! A [`Value`] is what gets bound to a `?` placeholder. The builder hands
//! values to the executing connection in placeholder order; string escaping
//! is the driver's concern, never the builder's.

use chrono::{DateTime, NaiveDateTime, Utc};

/// A value bound to a positional `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Storage-class name of the variant, as it reads in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Integer(_) => "INTEGER",
            Value::Real(_) => "REAL",
            Value::Text(_) => "TEXT",
            Value::Blob(_) => "BLOB",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render the value as a standalone SQL literal.
    ///
    /// Only DDL uses this (column defaults are baked into the statement
    /// text); query parameters always travel out-of-band via placeholders.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Real(r) => r.to_string(),
            Value::Text(s) => format!("'{}'", s.replace('\'', "''")),
            Value::Blob(bytes) => {
                let mut out = String::with_capacity(3 + bytes.len() * 2);
                out.push_str("X'");
                for b in bytes {
                    out.push_str(&format!("{b:02X}"));
                }
                out.push('\'');
                out
            }
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<f32> for Value {
    fn from(r: f32) -> Self {
        Value::Real(f64::from(r))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

// SQLite has no boolean storage class; booleans travel as 0/1.
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Integer(i64::from(b))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Blob(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Blob(bytes.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<NaiveDateTime> for Value {
    fn from(ts: NaiveDateTime) -> Self {
        Value::Text(ts.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(ts: DateTime<Utc>) -> Self {
        Value::Text(ts.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversions() {
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from(42u32), Value::Integer(42));
    }

    #[test]
    fn bool_as_integer() {
        assert_eq!(Value::from(true), Value::Integer(1));
        assert_eq!(Value::from(false), Value::Integer(0));
    }

    #[test]
    fn option_maps_none_to_null() {
        assert!(Value::from(Option::<i64>::None).is_null());
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn text_literal_escapes_quotes() {
        assert_eq!(
            Value::Text("it's".to_string()).to_sql_literal(),
            "'it''s'"
        );
    }

    #[test]
    fn blob_literal_is_hex() {
        assert_eq!(
            Value::Blob(vec![0xAB, 0x01]).to_sql_literal(),
            "X'AB01'"
        );
    }

    #[test]
    fn timestamp_renders_sqlite_datetime() {
        let ts = NaiveDateTime::parse_from_str("2024-05-01 12:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(
            Value::from(ts),
            Value::Text("2024-05-01 12:30:00".to_string())
        );
    }
}
