//! Column values of dictionary rows.

use std::fmt;

/// A single column value as the executor hands it over.
///
/// Dictionary views only return names, flags and counters, so numbers stay in
/// their textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Null,
    String(String),
    /// Decimal digits exactly as returned.
    Number(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Text of a non-NULL value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::String(s) | SqlValue::Number(s) => Some(s),
            SqlValue::Null => None,
        }
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::String(s.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::String(s)
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::Number(n.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("NULL"))
    }
}
