//! The dialect adapter contract and its two implementations.
//!
//! [`DatabaseDialect`] carries the shared Oracle-family behaviour as provided
//! methods; [`DamengDialect`] and [`OscarDialect`] supply their vocabulary,
//! capabilities, reserved words and connection details.

pub mod dameng;
pub mod identifier;
pub mod oscar;
pub mod typemap;

pub use dameng::DamengDialect;
pub use oscar::OscarDialect;
pub use typemap::{TimestampType, TypeFlags, TypeNames, UNKNOWN_TYPE};

use std::fmt;

use crate::capabilities::{AccessMode, CapabilitySet};
use crate::config::{
    DialectAttributes, STRICT_BIGNUMBER_INTERPRETATION, SUPPORTS_BOOLEAN_DATA_TYPE,
    SUPPORTS_TIMESTAMP_DATA_TYPE,
};
use crate::error::{Error, Result};
use crate::registry::DialectKind;
use crate::types::{ColumnChange, ColumnSpec, LogicalType};
use crate::url::{self, ConnectParams, ODBC_BRIDGE_DRIVER};
use crate::variables::VariableSpace;

use self::identifier::{escape_literal, has_special_characters, is_quoted, temp_column_name};

/// Line terminator appended to generated statements.
pub const CR: &str = "\n";

/// SQL generation and capability queries for one database product.
///
/// Every generator is a pure function of its arguments and the adapter's
/// configuration. The attribute store is the only mutable state and is
/// changed through `&mut self`, so a configured adapter can be shared freely.
pub trait DatabaseDialect: fmt::Debug + Send + Sync {
    /// Which product this adapter targets.
    fn kind(&self) -> DialectKind;

    /// Fixed capabilities.
    fn capabilities(&self) -> &CapabilitySet;

    /// SQL type vocabulary.
    fn type_names(&self) -> &TypeNames;

    /// Attribute store.
    fn attributes(&self) -> &DialectAttributes;

    /// Mutable attribute store, for configuration before use.
    fn attributes_mut(&mut self) -> &mut DialectAttributes;

    /// Upper-case keywords that cannot be used as bare identifiers.
    fn reserved_words(&self) -> &'static [&'static str];

    /// Driver class for native connections.
    fn native_driver_class(&self) -> &'static str;

    /// URL scheme for native connections, including `//`.
    fn native_url_scheme(&self) -> &'static str;

    /// Port handling of native URLs.
    fn native_port_policy(&self) -> url::PortPolicy;

    /// Keyword sequence after `ALTER TABLE t` that drops a column.
    fn drop_column_clause(&self) -> &'static str;

    /// Query listing stored procedures and functions.
    fn procedures_query(&self) -> &'static str;

    /// Vendor page documenting extra connection options.
    fn extra_options_help_url(&self) -> &'static str;

    /// Driver archives the host must provide.
    fn used_libraries(&self) -> &'static [&'static str];

    /// `TABLESPACE` clause for CREATE statements; empty when unsupported.
    fn tablespace_ddl(&self, _variables: &dyn VariableSpace, _tablespace: &str) -> String {
        String::new()
    }

    /// Short product name.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    // ------------------------------------------------------------------
    // Attributes

    /// Whether `NUMBER(38)` columns are read as big numbers.
    fn strict_big_number_interpretation(&self) -> bool {
        self.attributes().flag(STRICT_BIGNUMBER_INTERPRETATION, false)
    }

    fn set_strict_big_number_interpretation(&mut self, strict: bool) {
        self.attributes_mut()
            .set_flag(STRICT_BIGNUMBER_INTERPRETATION, strict);
    }

    fn supports_boolean_data_type(&self) -> bool {
        self.attributes().flag(SUPPORTS_BOOLEAN_DATA_TYPE, false)
    }

    fn set_supports_boolean_data_type(&mut self, supported: bool) {
        self.attributes_mut()
            .set_flag(SUPPORTS_BOOLEAN_DATA_TYPE, supported);
    }

    fn supports_timestamp_data_type(&self) -> bool {
        self.attributes().flag(SUPPORTS_TIMESTAMP_DATA_TYPE, false)
    }

    fn set_supports_timestamp_data_type(&mut self, supported: bool) {
        self.attributes_mut()
            .set_flag(SUPPORTS_TIMESTAMP_DATA_TYPE, supported);
    }

    // ------------------------------------------------------------------
    // Connections

    /// Default port for `mode`, if the mode uses ports at all.
    fn default_port(&self, mode: AccessMode) -> Option<u16> {
        match mode {
            AccessMode::Native => Some(self.capabilities().default_native_port),
            _ => None,
        }
    }

    /// Driver class for `mode`.
    fn driver_class_name(&self, mode: AccessMode) -> &'static str {
        match mode {
            AccessMode::Odbc => ODBC_BRIDGE_DRIVER,
            _ => self.native_driver_class(),
        }
    }

    /// Build the connection URL.
    ///
    /// Native URLs default an empty host to `localhost` and require a
    /// database name. JNDI connections have no URL.
    fn build_url(&self, mode: AccessMode, host: &str, port: &str, database: &str) -> Result<String> {
        match mode {
            AccessMode::Odbc => Ok(url::odbc_url(database)),
            AccessMode::Native => url::native_url(
                self.native_url_scheme(),
                self.native_port_policy(),
                host,
                port,
                database,
            ),
            AccessMode::Jndi => Err(Error::UnsupportedAccessMode {
                dialect: self.name(),
                mode,
            }),
        }
    }

    /// [`DatabaseDialect::build_url`] from connection parameters.
    fn url_for(&self, params: &ConnectParams) -> Result<String> {
        self.build_url(params.access_mode, &params.host, &params.port, &params.database)
    }

    // ------------------------------------------------------------------
    // Types

    /// Attribute switches used by the type mapper.
    fn type_flags(&self) -> TypeFlags {
        TypeFlags {
            boolean_data_type: self.supports_boolean_data_type(),
            timestamp_data_type: self.supports_timestamp_data_type(),
        }
    }

    /// Column type, optionally prefixed with the column name and followed by
    /// a line break.
    ///
    /// `use_auto_increment` is accepted for interface compatibility; key
    /// columns get the auto-increment type whenever the dialect has one.
    #[allow(clippy::too_many_arguments)]
    fn field_definition(
        &self,
        column: &ColumnSpec,
        technical_key: Option<&str>,
        primary_key: Option<&str>,
        _use_auto_increment: bool,
        add_field_name: bool,
        add_cr: bool,
    ) -> String {
        let is_key = column.is_key_column(technical_key, primary_key);

        let mut definition = String::with_capacity(64);
        if add_field_name {
            definition.push_str(&column.sql_name());
            definition.push(' ');
        }
        definition.push_str(&typemap::sql_type(
            self.type_names(),
            self.capabilities(),
            self.type_flags(),
            column,
            is_key,
        ));
        if add_cr {
            definition.push_str(CR);
        }
        definition
    }

    /// Logical type of an introspected `NUMBER(precision, scale)` column.
    fn classify_number(&self, precision: i32, scale: i32) -> LogicalType {
        typemap::classify_number(precision, scale, self.strict_big_number_interpretation())
    }

    // ------------------------------------------------------------------
    // Column DDL

    /// `ALTER TABLE <table> ADD <name> <type>`.
    fn add_column_statement(&self, change: &ColumnChange<'_>) -> Result<String> {
        let table = require_name(change.table, "table name")?;
        let definition = self.field_definition(
            change.column,
            change.technical_key,
            change.primary_key,
            change.use_auto_increment,
            true,
            false,
        );
        Ok(format!(
            "ALTER TABLE {} ADD {}{}",
            table,
            definition,
            semicolon(change.semicolon)
        ))
    }

    /// `ALTER TABLE <table> DROP [COLUMN] <name>`, followed by a line break.
    fn drop_column_statement(&self, change: &ColumnChange<'_>) -> Result<String> {
        let table = require_name(change.table, "table name")?;
        let mut sql = drop_column_sql(self.drop_column_clause(), table, change.column);
        sql.push_str(semicolon(change.semicolon));
        sql.push_str(CR);
        Ok(sql)
    }

    /// Change a column's type by copying through a temporary column.
    ///
    /// Emits six statements, each on its own line: add temp, copy to temp,
    /// drop original, re-add original with the new type, copy back, drop temp.
    /// The first five always end in `;`. The semicolon flag applies to the
    /// final drop only. No RENAME is used. The statements are not atomic;
    /// wrap them in a transaction on the executing side if that matters.
    fn modify_column_statement(&self, change: &ColumnChange<'_>) -> Result<String> {
        let table = require_name(change.table, "table name")?;
        let original = change.column;
        let original_name = original.sql_name();
        let temp = original.renamed(temp_column_name(&original_name));
        let temp_name = temp.sql_name();

        let bare = change.semicolon(false);
        let clause = self.drop_column_clause();

        let steps = [
            self.add_column_statement(&bare.with_column(&temp))?,
            format!("UPDATE {} SET {}={}", table, temp_name, original_name),
            drop_column_sql(clause, table, original),
            self.add_column_statement(&bare)?,
            format!("UPDATE {} SET {}={}", table, original_name, temp_name),
        ];

        let mut sql = String::with_capacity(256);
        for step in &steps {
            sql.push_str(step);
            sql.push(';');
            sql.push_str(CR);
        }
        sql.push_str(&self.drop_column_statement(&change.with_column(&temp))?);
        Ok(sql)
    }

    // ------------------------------------------------------------------
    // Tables

    /// Drop a table, ignoring only "table does not exist".
    fn drop_table_if_exists_statement(&self, table: &str) -> Result<String> {
        let table = require_name(table, "table name")?;
        let caps = self.capabilities();
        if caps.supports_drop_table_if_exists {
            Ok(format!("DROP TABLE IF EXISTS {}", table))
        } else {
            Ok(format!(
                "BEGIN EXECUTE IMMEDIATE 'DROP TABLE {}'; EXCEPTION WHEN OTHERS THEN IF SQLCODE != {} THEN RAISE; END IF; END;",
                escape_literal(table),
                caps.table_not_found_code
            ))
        }
    }

    /// Query returning the layout of `table` without rows.
    fn query_fields_sql(&self, table: &str) -> String {
        format!("SELECT * FROM {} WHERE 1=0", table)
    }

    fn table_exists_query(&self, table: &str) -> String {
        self.query_fields_sql(table)
    }

    fn column_exists_query(&self, column: &str, table: &str) -> String {
        format!("SELECT {} FROM {} WHERE 1=0", column, table)
    }

    /// Row-limiting clause appended to a SELECT without WHERE.
    fn limit_clause(&self, rows: u64) -> String {
        format!(" WHERE ROWNUM <= {}", rows)
    }

    /// One exclusive lock statement per table.
    fn lock_tables_statement(&self, tables: &[&str]) -> String {
        let mut sql = String::with_capacity(tables.len() * 40);
        for table in tables {
            sql.push_str("LOCK TABLE ");
            sql.push_str(table);
            sql.push_str(" IN EXCLUSIVE MODE;");
            sql.push_str(CR);
        }
        sql
    }

    /// Locks are released by commit; there is no unlock statement.
    fn unlock_tables_statement(&self, _tables: &[&str]) -> Option<String> {
        None
    }

    // ------------------------------------------------------------------
    // Sequences

    /// Dictionary query that returns a row when the sequence exists.
    ///
    /// `SCHEMA.SEQ` is split on the first dot; anything after it, further
    /// dots included, is the sequence name.
    fn sequence_exists_query(&self, sequence: &str) -> Result<String> {
        let sequence = require_name(sequence, "sequence name")?;
        match sequence.split_once('.') {
            None => Ok(format!(
                "SELECT * FROM USER_SEQUENCES WHERE SEQUENCE_NAME = '{}'",
                escape_literal(&sequence.to_uppercase())
            )),
            Some((schema, name)) => Ok(format!(
                "SELECT * FROM ALL_SEQUENCES WHERE SEQUENCE_NAME = '{}' AND SEQUENCE_OWNER = '{}'",
                escape_literal(&name.to_uppercase()),
                escape_literal(&schema.to_uppercase())
            )),
        }
    }

    fn current_sequence_value_query(&self, sequence: &str) -> Result<String> {
        let sequence = require_name(sequence, "sequence name")?;
        Ok(format!("SELECT {}.currval FROM DUAL", sequence))
    }

    fn next_sequence_value_query(&self, sequence: &str) -> Result<String> {
        let sequence = require_name(sequence, "sequence name")?;
        Ok(format!("SELECT {}.nextval FROM DUAL", sequence))
    }

    fn sequences_query(&self) -> &'static str {
        "SELECT SEQUENCE_NAME FROM all_sequences"
    }

    // ------------------------------------------------------------------
    // Identifiers and literals

    /// Case-insensitive reserved word lookup.
    fn is_reserved_word(&self, word: &str) -> bool {
        let word = word.trim();
        self.reserved_words()
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(word))
    }

    /// Quote `name` when it is reserved or not a plain identifier.
    fn quote_field(&self, name: &str) -> String {
        if name.is_empty() || is_quoted(name) {
            return name.to_string();
        }
        if self.is_reserved_word(name) || has_special_characters(name) {
            format!("\"{}\"", name.replace('"', "\"\""))
        } else {
            name.to_string()
        }
    }

    /// Render `value` as a string literal; line breaks become `chr()` calls.
    fn quote_sql_string(&self, value: &str) -> String {
        let escaped = escape_literal(value)
            .replace('\r', "'||chr(13)||'")
            .replace('\n', "'||chr(10)||'");
        format!("'{}'", escaped)
    }

    // ------------------------------------------------------------------
    // Introspection

    /// Dictionary query listing the indexed columns of `table`.
    fn index_columns_query(&self, table: &str) -> String {
        format!(
            "SELECT * FROM USER_IND_COLUMNS WHERE TABLE_NAME = '{}'",
            escape_literal(table)
        )
    }
}

fn require_name<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(Error::invalid_input(format!("{} must not be empty", what)))
    } else {
        Ok(value)
    }
}

fn drop_column_sql(clause: &str, table: &str, column: &ColumnSpec) -> String {
    format!("ALTER TABLE {} {} {}", table, clause, column.sql_name())
}

fn semicolon(enabled: bool) -> &'static str {
    if enabled {
        ";"
    } else {
        ""
    }
}
