//! ShenTong (Oscar) dialect.
//!
//! Oscar speaks a PostgreSQL-flavoured type system (`TEXT`, `NUMERIC`,
//! `BIGSERIAL`, native `BOOLEAN`) on top of Oracle-style dictionary views.

use crate::capabilities::{AccessMode, CapabilitySet};
use crate::config::DialectAttributes;
use crate::registry::DialectKind;
use crate::url::PortPolicy;

use super::typemap::{TimestampType, TypeNames};
use super::DatabaseDialect;

/// Default listener port of an Oscar server.
pub const DEFAULT_PORT: u16 = 2003;

static CAPABILITIES: CapabilitySet = CapabilitySet {
    access_modes: &[AccessMode::Native, AccessMode::Jndi],
    default_native_port: DEFAULT_PORT,
    supports_sequences: true,
    supports_sequence_no_max_value_option: true,
    supports_synonyms: true,
    supports_auto_inc: false,
    supports_options_in_url: false,
    supports_prepared_statement_metadata_retrieval: false,
    supports_error_handling_on_batch_updates: false,
    supports_repository: true,
    supports_drop_table_if_exists: true,
    releases_savepoints: false,
    requires_schema_for_table_list: true,
    requires_create_table_primary_key_append: true,
    needs_to_lock_all_tables: false,
    max_varchar_length: 2000,
    long_text_threshold: 9_999_999,
    max_columns_in_index: 32,
    table_not_found_code: -942,
};

// DATE and TIMESTAMP both land on TIMESTAMP.
static TYPE_NAMES: TypeNames = TypeNames {
    date: "TIMESTAMP",
    timestamp: TimestampType::Native("TIMESTAMP"),
    boolean: Some("BOOLEAN"),
    single_char: "CHAR(1)",
    varchar: "VARCHAR",
    large_text: "TEXT",
    large_binary: "BLOB",
    decimal: "NUMERIC",
    small_int: "SMALLINT",
    int: "INT",
    big_int: "BIGINT",
    float: "FLOAT(53)",
    double: "DOUBLE PRECISION",
    auto_increment_key: Some("BIGSERIAL"),
};

const RESERVED_WORDS: &[&str] = &[
    "ALIAS", "AND", "AS", "AT", "BEGIN", "BETWEEN", "BIGINT", "BIT", "BY", "BOOLEAN", "BOTH",
    "CALL", "CASE", "CAST", "CHAR", "CHARACTER", "COMMIT", "CONSTANT", "CURSOR", "COALESCE",
    "CONTINUE", "CONVERT", "CURRENT_DATE", "CURRENT_TIMESTAMP", "CURRENT_USER", "DATE", "DEC",
    "DECIMAL", "DECLARE", "DEFAULT", "DECODE", "DELETE", "ELSE", "ELSIF", "END", "EXCEPTION",
    "EXECUTE", "EXIT", "EXTRACT", "FALSE", "FETCH", "FLOAT", "FOR", "FROM", "FUNCTION", "GOTO",
    "IF", "IN", "INT", "INTO", "IS", "INTEGER", "IMMEDIATE", "INDEX", "INOUT", "INSERT",
    "LEADING", "LIKE", "LIMIT", "LOCALTIME", "LOCALTIMESTAMP", "LOOP", "NCHAR", "NEXT",
    "NOCOPY", "NOT", "NULLIF", "NULL", "NUMBER", "NUMERIC", "OPTION", "OF", "OR", "OUT",
    "OVERLAY", "PERFORM", "POSITION", "PRAGMA", "PROCEDURE", "QUERY", "RAISE", "RECORD",
    "RENAME", "RETURN", "REVERSE", "ROLLBACK", "REAL", "SELECT", "SAVEPOINT", "SETOF",
    "SMALLINT", "SUBSTRING", "SQL", "SYSDATE", "SESSION_USER", "THEN", "TO", "TYPE", "TABLE",
    "TIME", "TIMESTAMP", "TINYINT", "TRAILING", "TREAT", "TRIM", "TRUE", "UID", "UPDATE",
    "USER", "USING", "VARCHAR", "VARCHAR2", "VALUES", "WITH", "WHEN", "WHILE", "LEVEL",
];

/// Oscar dialect adapter.
#[derive(Debug, Clone, Default)]
pub struct OscarDialect {
    attributes: DialectAttributes,
}

impl OscarDialect {
    /// Create an adapter with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter with preset attributes.
    pub fn with_attributes(attributes: DialectAttributes) -> Self {
        Self { attributes }
    }
}

impl DatabaseDialect for OscarDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Oscar
    }

    fn capabilities(&self) -> &CapabilitySet {
        &CAPABILITIES
    }

    fn type_names(&self) -> &TypeNames {
        &TYPE_NAMES
    }

    fn attributes(&self) -> &DialectAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut DialectAttributes {
        &mut self.attributes
    }

    fn reserved_words(&self) -> &'static [&'static str] {
        RESERVED_WORDS
    }

    fn native_driver_class(&self) -> &'static str {
        "com.oscar.Driver"
    }

    fn native_url_scheme(&self) -> &'static str {
        "jdbc:oscar://"
    }

    fn native_port_policy(&self) -> PortPolicy {
        PortPolicy::Omit
    }

    fn drop_column_clause(&self) -> &'static str {
        "DROP COLUMN"
    }

    fn procedures_query(&self) -> &'static str {
        "SELECT name FROM ORM_FUNCTIONS union SELECT name FROM ORM_PROCEDURES"
    }

    fn extra_options_help_url(&self) -> &'static str {
        "http://www.shentongdata.com/?bid=3&eid=249"
    }

    fn used_libraries(&self) -> &'static [&'static str] {
        &["oscarJDBC.jar", "oscarJDBC14.jar", "oscarJDBC16.jar"]
    }
}
