//! Dameng (DM) dialect.
//!
//! DM follows Oracle closely: `VARCHAR2`/`CLOB` strings, `NUMBER` decimals,
//! `USER_*` dictionary views, `DUAL`, and no `DROP TABLE IF EXISTS`.

use crate::capabilities::{AccessMode, CapabilitySet};
use crate::config::DialectAttributes;
use crate::registry::DialectKind;
use crate::url::PortPolicy;
use crate::variables::VariableSpace;

use super::typemap::{TimestampType, TypeNames};
use super::DatabaseDialect;

/// Default listener port of a DM server.
pub const DEFAULT_PORT: u16 = 12345;

/// VARCHAR2 limit for the default 4K page size.
///
/// Larger pages raise the limit: 8K → 3900, 16K → 8000, 32K → 8188.
pub const MAX_VARCHAR_LENGTH: i32 = 1900;

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
    supports_drop_table_if_exists: false,
    releases_savepoints: false,
    requires_schema_for_table_list: true,
    requires_create_table_primary_key_append: true,
    needs_to_lock_all_tables: false,
    max_varchar_length: MAX_VARCHAR_LENGTH,
    long_text_threshold: 9_999_999,
    max_columns_in_index: 32,
    table_not_found_code: -942,
};

static TYPE_NAMES: TypeNames = TypeNames {
    date: "DATE",
    timestamp: TimestampType::IfSupported("TIMESTAMP"),
    boolean: None,
    single_char: "CHAR(1)",
    varchar: "VARCHAR2",
    large_text: "CLOB",
    large_binary: "BLOB",
    decimal: "NUMBER",
    small_int: "SMALLINT",
    int: "INTEGER",
    big_int: "BIGINT",
    float: "FLOAT",
    double: "DOUBLE",
    auto_increment_key: None,
};

const RESERVED_WORDS: &[&str] = &[
    "ABSOLUTE", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AUDIT", "AUTHORIZATION", "AVG",
    "BEGIN", "BIGDATEDIFF", "BOTH", "CALL", "CASE", "CAST", "CHECK", "CLOSE", "CLUSTER",
    "COALESCE", "COLUMN", "COMMIT", "COMMITWORK", "CONNECT", "CONNECT_BY_ISLEAF",
    "CONNECT_BY_ISCYCLE", "CONNECT_BY_ROOT", "CONSTRAINT", "CONTAINS", "CONVERT", "COUNT",
    "CREATE", "CROSS", "CRYPTO", "CURSOR", "DATABASE", "DATEADD", "DATEDIFF", "DATEPART",
    "DECLARE", "DECODE", "DEFAULT", "DELETE", "DELETING", "DEREF", "DISTINCT", "DROP", "ELSE",
    "ELSEIF", "ELSIF", "END", "EXCEPTION", "EXEC", "EXECUTE", "EXISTS", "EXIT", "EXPLAIN",
    "EXTRACT", "EVENTINFO", "FALSE", "FETCH", "FIRST", "FOR", "FOREIGN", "FREQUENCE", "FROM",
    "FULL", "FUNCTION", "GOTO", "GRANT", "GROUP", "HAVING", "HEXTORAW", "IDENTITY", "IF",
    "IFNULL", "IMMEDIATE", "INCREASE", "INDEX", "INNER", "INSERT", "INSERTING", "INTERVAL",
    "INTO", "ISNULL", "JOIN", "LAST", "LEADING", "LEFT", "LEVEL", "LIMIT", "LINK", "LOGIN",
    "LOOP", "MAX", "MEMBER", "MIN", "NATURAL", "NEW", "NEXT", "NOAUDIT", "NOCYCLE", "NOT",
    "NOWAIT", "NULL", "NULLIF", "NVL", "OBJECT", "OLD", "ON", "ONLINE", "OPEN", "ORDER",
    "PACKAGE", "PENDANT", "PERCENT", "POLICY", "PRIMARY", "PRINT", "PRIOR", "PROCEDURE",
    "RAISE", "RANGE", "RAWTOHEX", "REF", "REFERENCES", "REFERENCING", "RELATIVE", "REPEAT",
    "REPLACE", "RETURN", "RETURNING", "REVERSE", "REVOKE", "RIGHT", "ROLE", "ROLLBACK", "ROW",
    "ROWNUM", "SAVEPOINT", "SCHEMA", "SELECT", "SEQUENCE", "SET", "SOME", "SQL", "SUBSTRING",
    "SUM", "SYS_CONNECT_BY_PATH", "SYNONYM", "TABLE", "TIMESTAMPADD", "TIMESTAMPDIFF", "TOP",
    "TRAILING", "TRIGGER", "TRIM", "TRUE", "TRUNCATE", "UNIQUE", "UNTIL", "UPDATE", "UPDATING",
    "USER", "USING", "VALUES", "VARIANCE", "VIEW", "VSIZE", "WHEN", "WHERE", "WHILE", "WITH",
];

/// Dameng dialect adapter.
#[derive(Debug, Clone, Default)]
pub struct DamengDialect {
    attributes: DialectAttributes,
}

impl DamengDialect {
    /// Create an adapter with default attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter with preset attributes.
    pub fn with_attributes(attributes: DialectAttributes) -> Self {
        Self { attributes }
    }
}

impl DatabaseDialect for DamengDialect {
    fn kind(&self) -> DialectKind {
        DialectKind::Dameng
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
        "dm.jdbc.driver.DmDriver"
    }

    fn native_url_scheme(&self) -> &'static str {
        "jdbc:dm://"
    }

    fn native_port_policy(&self) -> PortPolicy {
        PortPolicy::Default(DEFAULT_PORT)
    }

    fn drop_column_clause(&self) -> &'static str {
        "DROP"
    }

    fn procedures_query(&self) -> &'static str {
        "SELECT DISTINCT DECODE(package_name, NULL, '', package_name||'.') || object_name FROM user_arguments ORDER BY 1"
    }

    fn extra_options_help_url(&self) -> &'static str {
        "http://www.dameng.com"
    }

    fn used_libraries(&self) -> &'static [&'static str] {
        &["DmJdbcDriver.jar"]
    }

    fn tablespace_ddl(&self, variables: &dyn VariableSpace, tablespace: &str) -> String {
        if tablespace.is_empty() {
            return String::new();
        }
        format!(
            "TABLESPACE {}",
            self.quote_field(&variables.substitute(tablespace))
        )
    }
}
