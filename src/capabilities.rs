//! Access modes and the fixed capability record of a dialect.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How the host reaches the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Vendor JDBC driver, addressed by host/port/database.
    Native,
    /// ODBC bridge, addressed by data source name only.
    Odbc,
    /// Connection looked up from a naming directory.
    Jndi,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Native => write!(f, "NATIVE"),
            AccessMode::Odbc => write!(f, "ODBC"),
            AccessMode::Jndi => write!(f, "JNDI"),
        }
    }
}

impl FromStr for AccessMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NATIVE" | "JDBC" => Ok(AccessMode::Native),
            "ODBC" => Ok(AccessMode::Odbc),
            "JNDI" => Ok(AccessMode::Jndi),
            other => Err(Error::invalid_input(format!("unknown access mode '{}'", other))),
        }
    }
}

/// Fixed facts about a dialect, read-only after construction.
///
/// Flags the host may toggle per connection (boolean/timestamp data types,
/// strict NUMBER(38) handling) live in [`DialectAttributes`](crate::DialectAttributes)
/// instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet {
    /// Access modes the dialect offers to the host.
    pub access_modes: &'static [AccessMode],
    /// Port used by native connections when none is configured.
    pub default_native_port: u16,
    pub supports_sequences: bool,
    pub supports_sequence_no_max_value_option: bool,
    pub supports_synonyms: bool,
    /// Whether the host may rely on auto-increment key columns.
    pub supports_auto_inc: bool,
    pub supports_options_in_url: bool,
    pub supports_prepared_statement_metadata_retrieval: bool,
    pub supports_error_handling_on_batch_updates: bool,
    pub supports_repository: bool,
    /// Native `DROP TABLE IF EXISTS`.
    pub supports_drop_table_if_exists: bool,
    pub releases_savepoints: bool,
    /// Table listings must be scoped by schema name.
    pub requires_schema_for_table_list: bool,
    pub requires_create_table_primary_key_append: bool,
    pub needs_to_lock_all_tables: bool,
    /// Widest bounded VARCHAR column.
    pub max_varchar_length: i32,
    /// Declared string length from which a large text type is always used.
    pub long_text_threshold: i32,
    pub max_columns_in_index: u32,
    /// SQLCODE raised when a dropped table does not exist.
    pub table_not_found_code: i32,
}

impl CapabilitySet {
    /// Whether `mode` is offered by the dialect.
    pub fn supports_access_mode(&self, mode: AccessMode) -> bool {
        self.access_modes.contains(&mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_mode_from_str() {
        assert_eq!("native".parse::<AccessMode>().unwrap(), AccessMode::Native);
        assert_eq!(" ODBC ".parse::<AccessMode>().unwrap(), AccessMode::Odbc);
        assert_eq!("Jndi".parse::<AccessMode>().unwrap(), AccessMode::Jndi);

        let err = "OCI".parse::<AccessMode>().unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_access_mode_display() {
        assert_eq!(AccessMode::Odbc.to_string(), "ODBC");
        assert_eq!(AccessMode::Native.to_string(), "NATIVE");
    }
}
