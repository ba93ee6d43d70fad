//! Per-adapter attribute store.
//!
//! Attributes are string key/value pairs the host sets once, before the
//! adapter is used. Boolean attributes are stored as `Y` / `N`.

use std::collections::BTreeMap;

/// Interpret `NUMBER(38)` columns as big numbers instead of integers.
pub const STRICT_BIGNUMBER_INTERPRETATION: &str = "STRICT_NUMBER_38_INTERPRETATION";

/// Map BOOLEAN columns to the dialect's native boolean type.
pub const SUPPORTS_BOOLEAN_DATA_TYPE: &str = "SUPPORTS_BOOLEAN_DATA_TYPE";

/// Map TIMESTAMP columns to a native timestamp type instead of DATE.
pub const SUPPORTS_TIMESTAMP_DATA_TYPE: &str = "SUPPORTS_TIMESTAMP_DATA_TYPE";

/// Key/value configuration owned by one adapter instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialectAttributes {
    properties: BTreeMap<String, String>,
}

impl DialectAttributes {
    /// Create an empty attribute store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a raw attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Get an attribute value, falling back to `default`.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Set a raw attribute value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Read a `Y`/`N` flag (case-insensitive); anything else is `false`.
    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.get_or(key, if default { "Y" } else { "N" })
            .eq_ignore_ascii_case("Y")
    }

    /// Store a flag as `Y` or `N`.
    pub fn set_flag(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, if value { "Y" } else { "N" });
    }

    /// Iterate over all attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set strict `NUMBER(38)` interpretation.
    pub fn with_strict_big_number_interpretation(mut self, strict: bool) -> Self {
        self.set_flag(STRICT_BIGNUMBER_INTERPRETATION, strict);
        self
    }

    /// Allow the native boolean type.
    pub fn with_boolean_data_type(mut self, supported: bool) -> Self {
        self.set_flag(SUPPORTS_BOOLEAN_DATA_TYPE, supported);
        self
    }

    /// Allow the native timestamp type.
    pub fn with_timestamp_data_type(mut self, supported: bool) -> Self {
        self.set_flag(SUPPORTS_TIMESTAMP_DATA_TYPE, supported);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for DialectAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
