//! Variable substitution for templated names such as tablespaces.
//!
//! Two reference forms are recognised: `${NAME}` and `%%NAME%%`. Unknown
//! references are left untouched.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Resolves variable references inside a string.
pub trait VariableSpace {
    /// Look up one variable.
    fn variable(&self, name: &str) -> Option<String>;

    /// Replace every resolvable reference in `text`.
    fn substitute(&self, text: &str) -> String {
        let text = substitute_delimited(text, "${", "}", |name| self.variable(name));
        substitute_delimited(&text, "%%", "%%", |name| self.variable(name))
    }
}

/// In-memory variable set.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    values: HashMap<String, String>,
}

impl Variables {
    /// Create an empty variable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the process environment.
    pub fn from_env() -> Self {
        std::env::vars().collect()
    }

    /// Load `KEY=VALUE` lines from a dotenv-style file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut vars = Self::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            vars.set(key, value);
        }
        Ok(vars)
    }

    /// Set a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`Variables::set`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl VariableSpace for Variables {
    fn variable(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

fn substitute_delimited<F>(text: &str, open: &str, close: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(open) {
        let after_open = &rest[start + open.len()..];
        let Some(end) = after_open.find(close) else {
            break;
        };
        let name = &after_open[..end];

        out.push_str(&rest[..start]);
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => {
                out.push_str(open);
                out.push_str(name);
                out.push_str(close);
            }
        }
        rest = &after_open[end + close.len()..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_both_forms() {
        let vars = Variables::new().with("TS", "USERS").with("ENV", "PROD");
        assert_eq!(vars.substitute("${TS}_DATA"), "USERS_DATA");
        assert_eq!(vars.substitute("%%ENV%%_${TS}"), "PROD_USERS");
    }

    #[test]
    fn test_unknown_and_unterminated_references_are_kept() {
        let vars = Variables::new().with("A", "1");
        assert_eq!(vars.substitute("${B}-${A}"), "${B}-1");
        assert_eq!(vars.substitute("x ${A"), "x ${A");
        assert_eq!(vars.substitute("plain"), "plain");
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("dialect-vars-{}.env", std::process::id()));
        std::fs::write(&path, "TABLESPACE=ETL_DATA\n# comment\nOWNER=etl\n").unwrap();

        let vars = Variables::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(vars.variable("TABLESPACE").as_deref(), Some("ETL_DATA"));
        assert_eq!(vars.substitute("${OWNER}.${TABLESPACE}"), "etl.ETL_DATA");
    }

    #[test]
    fn test_from_file_missing() {
        let result = Variables::from_file("/nonexistent/dialect/vars.env");
        assert!(matches!(result, Err(crate::Error::Variables(_))));
    }
}
