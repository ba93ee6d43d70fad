//! Database-agnostic column description.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Logical (engine-side) type of a column.
///
/// The last three variants exist on the host side but have no SQL mapping in
/// these dialects; they render as `UNKNOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    String,
    Integer,
    /// Floating point number.
    Number,
    /// Arbitrary precision decimal.
    BigNumber,
    Boolean,
    Date,
    Timestamp,
    Binary,
    Serializable,
    InetAddress,
    None,
}

impl LogicalType {
    /// Whether the type belongs to the numeric family.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            LogicalType::Integer | LogicalType::Number | LogicalType::BigNumber
        )
    }

    fn name(&self) -> &'static str {
        match self {
            LogicalType::String => "String",
            LogicalType::Integer => "Integer",
            LogicalType::Number => "Number",
            LogicalType::BigNumber => "BigNumber",
            LogicalType::Boolean => "Boolean",
            LogicalType::Date => "Date",
            LogicalType::Timestamp => "Timestamp",
            LogicalType::Binary => "Binary",
            LogicalType::Serializable => "Serializable",
            LogicalType::InetAddress => "Internet Address",
            LogicalType::None => "None",
        }
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogicalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_ascii_uppercase();
        match normalized.as_str() {
            "STRING" => Ok(LogicalType::String),
            "INTEGER" => Ok(LogicalType::Integer),
            "NUMBER" => Ok(LogicalType::Number),
            "BIGNUMBER" => Ok(LogicalType::BigNumber),
            "BOOLEAN" => Ok(LogicalType::Boolean),
            "DATE" => Ok(LogicalType::Date),
            "TIMESTAMP" => Ok(LogicalType::Timestamp),
            "BINARY" => Ok(LogicalType::Binary),
            "SERIALIZABLE" => Ok(LogicalType::Serializable),
            "INTERNETADDRESS" | "INET" => Ok(LogicalType::InetAddress),
            "NONE" => Ok(LogicalType::None),
            _ => Err(Error::invalid_input(format!("unknown logical type '{}'", s))),
        }
    }
}

/// One column as the host describes it.
///
/// `length` and `precision` are advisory: values `<= 0` mean "unknown" and a
/// dialect substitutes its own default width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Column name, possibly already wrapped in `"` delimiters.
    pub name: String,
    pub logical_type: LogicalType,
    pub length: i32,
    pub precision: i32,
    /// Emit the name as a quoted identifier.
    pub quoted: bool,
}

impl ColumnSpec {
    /// Create a column with unknown length and no precision.
    pub fn new(name: impl Into<String>, logical_type: LogicalType) -> Self {
        Self {
            name: name.into(),
            logical_type,
            length: -1,
            precision: -1,
            quoted: false,
        }
    }

    /// Set the declared length.
    pub fn with_length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    /// Set the declared precision.
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Set length and precision together.
    pub fn with_length_precision(self, length: i32, precision: i32) -> Self {
        self.with_length(length).with_precision(precision)
    }

    /// Mark the name as a quoted identifier.
    pub fn quoted(mut self) -> Self {
        self.quoted = true;
        self
    }

    /// A copy of this column under another name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Whether this column is the technical or primary key, ignoring case.
    pub fn is_key_column(&self, technical_key: Option<&str>, primary_key: Option<&str>) -> bool {
        technical_key
            .into_iter()
            .chain(primary_key)
            .any(|key| key.eq_ignore_ascii_case(&self.name))
    }

    /// The name as it appears in SQL text.
    ///
    /// Quoted columns get `"` delimiters unless the name already carries them.
    pub fn sql_name(&self) -> String {
        if self.quoted && !crate::dialect::identifier::is_quoted(&self.name) {
            format!("\"{}\"", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Arguments shared by the add/drop/modify column generators.
#[derive(Debug, Clone, Copy)]
pub struct ColumnChange<'a> {
    pub table: &'a str,
    pub column: &'a ColumnSpec,
    /// Name of the technical key column, if any.
    pub technical_key: Option<&'a str>,
    /// Name of the primary key column, if any.
    pub primary_key: Option<&'a str>,
    pub use_auto_increment: bool,
    /// Terminate each generated statement with `;`.
    pub semicolon: bool,
}

impl<'a> ColumnChange<'a> {
    /// Create a request for `column` on `table` with no key columns.
    pub fn new(table: &'a str, column: &'a ColumnSpec) -> Self {
        Self {
            table,
            column,
            technical_key: None,
            primary_key: None,
            use_auto_increment: false,
            semicolon: false,
        }
    }

    /// Set the technical key column name.
    pub fn technical_key(mut self, name: &'a str) -> Self {
        self.technical_key = Some(name);
        self
    }

    /// Set the primary key column name.
    pub fn primary_key(mut self, name: &'a str) -> Self {
        self.primary_key = Some(name);
        self
    }

    /// Request auto-increment for key columns.
    pub fn auto_increment(mut self, enabled: bool) -> Self {
        self.use_auto_increment = enabled;
        self
    }

    /// Terminate statements with `;`.
    pub fn semicolon(mut self, enabled: bool) -> Self {
        self.semicolon = enabled;
        self
    }

    /// The same request for another column.
    pub fn with_column(self, column: &'a ColumnSpec) -> Self {
        Self { column, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_type_from_str() {
        assert_eq!("String".parse::<LogicalType>().unwrap(), LogicalType::String);
        assert_eq!("big_number".parse::<LogicalType>().unwrap(), LogicalType::BigNumber);
        assert_eq!(
            "Internet Address".parse::<LogicalType>().unwrap(),
            LogicalType::InetAddress
        );
        assert!("Geometry".parse::<LogicalType>().is_err());
    }

    #[test]
    fn test_renamed_leaves_original_untouched() {
        let col = ColumnSpec::new("AMOUNT", LogicalType::Number).with_length_precision(12, 2);
        let tmp = col.renamed("AMOUNT_KTL");

        assert_eq!(col.name, "AMOUNT");
        assert_eq!(tmp.name, "AMOUNT_KTL");
        assert_eq!(tmp.length, 12);
        assert_eq!(tmp.precision, 2);
    }

    #[test]
    fn test_sql_name_quoting() {
        assert_eq!(ColumnSpec::new("id", LogicalType::Integer).sql_name(), "id");
        assert_eq!(
            ColumnSpec::new("order", LogicalType::Integer).quoted().sql_name(),
            "\"order\""
        );
        assert_eq!(
            ColumnSpec::new("\"order\"", LogicalType::Integer).quoted().sql_name(),
            "\"order\""
        );
    }

    #[test]
    fn test_is_key_column_ignores_case() {
        let col = ColumnSpec::new("Id", LogicalType::Integer);
        assert!(col.is_key_column(Some("ID"), None));
        assert!(col.is_key_column(None, Some("id")));
        assert!(col.is_key_column(Some("TK"), Some("ID")));
        assert!(!col.is_key_column(None, Some("CODE")));
        assert!(!col.is_key_column(None, None));
    }
}
