//! Logical type → dialect SQL type mapping.
//!
//! Both dialects run the same decision procedure; they differ only in the
//! type vocabulary ([`TypeNames`]) and the width limits of their
//! [`CapabilitySet`].

use tracing::warn;

use crate::capabilities::CapabilitySet;
use crate::types::{ColumnSpec, LogicalType};

/// Marker emitted for logical types without a SQL mapping.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// Declared length above which a zero-precision number is no longer an integer.
const MAX_INTEGER_DIGITS: i32 = 18;

/// How TIMESTAMP columns are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampType {
    /// Always this type.
    Native(&'static str),
    /// This type when the timestamp attribute is set, the DATE type otherwise.
    IfSupported(&'static str),
}

/// SQL type vocabulary of a dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeNames {
    pub date: &'static str,
    pub timestamp: TimestampType,
    /// Native boolean type, used only when the boolean attribute is set.
    pub boolean: Option<&'static str>,
    /// Fixed single-character type; also stands in for booleans.
    pub single_char: &'static str,
    /// Bounded variable-length string, rendered as `NAME(n)`.
    pub varchar: &'static str,
    pub large_text: &'static str,
    pub large_binary: &'static str,
    /// Fixed-point decimal, rendered as `NAME(p, s)`.
    pub decimal: &'static str,
    pub small_int: &'static str,
    pub int: &'static str,
    pub big_int: &'static str,
    pub float: &'static str,
    /// Widest floating type, used when no length is known.
    pub double: &'static str,
    /// Self-incrementing big integer for key columns.
    pub auto_increment_key: Option<&'static str>,
}

/// Attribute-driven switches consulted during mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeFlags {
    pub boolean_data_type: bool,
    pub timestamp_data_type: bool,
}

/// Map `column` to its SQL type.
///
/// `is_key` marks the technical or primary key column of the table.
pub fn sql_type(
    names: &TypeNames,
    caps: &CapabilitySet,
    flags: TypeFlags,
    column: &ColumnSpec,
    is_key: bool,
) -> String {
    let length = column.length;
    let precision = column.precision;

    match column.logical_type {
        LogicalType::Date => names.date.to_string(),
        LogicalType::Timestamp => match names.timestamp {
            TimestampType::Native(name) => name.to_string(),
            TimestampType::IfSupported(name) if flags.timestamp_data_type => name.to_string(),
            TimestampType::IfSupported(_) => names.date.to_string(),
        },
        LogicalType::Boolean => match names.boolean {
            Some(name) if flags.boolean_data_type => name.to_string(),
            _ => names.single_char.to_string(),
        },
        numeric if numeric.is_numeric() => {
            match names.auto_increment_key {
                Some(key_type) if is_key => key_type.to_string(),
                _ => numeric_type(names, length, precision),
            }
        }
        LogicalType::String => {
            if length <= 0 || length >= caps.long_text_threshold {
                names.large_text.to_string()
            } else if length == 1 {
                names.single_char.to_string()
            } else if length <= caps.max_varchar_length {
                format!("{}({})", names.varchar, length)
            } else {
                names.large_text.to_string()
            }
        }
        LogicalType::Binary => names.large_binary.to_string(),
        other => {
            warn!(
                column = %column.name,
                logical_type = %other,
                "no SQL type mapping, emitting {}",
                UNKNOWN_TYPE
            );
            UNKNOWN_TYPE.to_string()
        }
    }
}

fn numeric_type(names: &TypeNames, length: i32, precision: i32) -> String {
    if length <= 0 {
        return names.double.to_string();
    }

    if precision > 0 || length > MAX_INTEGER_DIGITS {
        let scale = precision.max(0);
        let width = i64::from(length) + i64::from(scale);
        format!("{}({}, {})", names.decimal, width, scale)
    } else if precision == 0 {
        if length > 9 {
            names.big_int.to_string()
        } else if length < 5 {
            names.small_int.to_string()
        } else {
            names.int.to_string()
        }
    } else {
        names.float.to_string()
    }
}

/// Logical type for a `NUMBER(precision, scale)` column read from the dictionary.
///
/// `NUMBER(38)` is how both dialects report an undeclared integer, so it maps
/// to [`LogicalType::Integer`] unless `strict` asks for a big number.
pub fn classify_number(precision: i32, scale: i32, strict: bool) -> LogicalType {
    match (precision, scale) {
        (p, 0) if p > 0 && p <= MAX_INTEGER_DIGITS => LogicalType::Integer,
        (38, 0) if !strict => LogicalType::Integer,
        (p, 0) if p > MAX_INTEGER_DIGITS => LogicalType::BigNumber,
        (p, s) if s > 0 && p > 15 => LogicalType::BigNumber,
        _ => LogicalType::Number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::AccessMode;

    fn names() -> TypeNames {
        TypeNames {
            date: "DATE",
            timestamp: TimestampType::IfSupported("TIMESTAMP"),
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
        }
    }

    fn caps() -> CapabilitySet {
        CapabilitySet {
            access_modes: &[AccessMode::Native],
            default_native_port: 1,
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
            max_varchar_length: 100,
            long_text_threshold: 1000,
            max_columns_in_index: 32,
            table_not_found_code: -942,
        }
    }

    fn map(column: &ColumnSpec) -> String {
        sql_type(&names(), &caps(), TypeFlags::default(), column, false)
    }

    #[test]
    fn test_string_thresholds() {
        let col = |len| ColumnSpec::new("S", LogicalType::String).with_length(len);
        assert_eq!(map(&col(-1)), "TEXT");
        assert_eq!(map(&col(0)), "TEXT");
        assert_eq!(map(&col(1)), "CHAR(1)");
        assert_eq!(map(&col(2)), "VARCHAR(2)");
        assert_eq!(map(&col(100)), "VARCHAR(100)");
        assert_eq!(map(&col(101)), "TEXT");
        assert_eq!(map(&col(1000)), "TEXT");
    }

    #[test]
    fn test_numeric_branches() {
        let num = |len, prec| ColumnSpec::new("N", LogicalType::Number).with_length_precision(len, prec);
        assert_eq!(map(&num(10, 2)), "NUMERIC(12, 2)");
        assert_eq!(map(&num(20, 0)), "NUMERIC(20, 0)");
        assert_eq!(map(&num(20, -1)), "NUMERIC(20, 0)");
        assert_eq!(map(&num(4, 0)), "SMALLINT");
        assert_eq!(map(&num(5, 0)), "INT");
        assert_eq!(map(&num(9, 0)), "INT");
        assert_eq!(map(&num(10, 0)), "BIGINT");
        assert_eq!(map(&num(8, -1)), "FLOAT(53)");
        assert_eq!(map(&num(-1, -1)), "DOUBLE PRECISION");
        assert_eq!(map(&num(0, 3)), "DOUBLE PRECISION");
    }

    #[test]
    fn test_decimal_width_does_not_overflow() {
        let col = ColumnSpec::new("N", LogicalType::BigNumber).with_length_precision(i32::MAX, 1);
        assert_eq!(map(&col), "NUMERIC(2147483648, 1)");

        let col = ColumnSpec::new("N", LogicalType::Number).with_length_precision(i32::MAX, i32::MAX);
        assert_eq!(map(&col), "NUMERIC(4294967294, 2147483647)");
    }

    #[test]
    fn test_key_column_uses_auto_increment_type() {
        let col = ColumnSpec::new("ID", LogicalType::BigNumber).with_length_precision(30, 4);
        let mapped = sql_type(&names(), &caps(), TypeFlags::default(), &col, true);
        assert_eq!(mapped, "BIGSERIAL");
    }

    #[test]
    fn test_boolean_and_timestamp_flags() {
        let flags = TypeFlags {
            boolean_data_type: true,
            timestamp_data_type: true,
        };
        let b = ColumnSpec::new("B", LogicalType::Boolean);
        let t = ColumnSpec::new("T", LogicalType::Timestamp);

        assert_eq!(map(&b), "CHAR(1)");
        assert_eq!(map(&t), "DATE");
        assert_eq!(sql_type(&names(), &caps(), flags, &b, false), "BOOLEAN");
        assert_eq!(sql_type(&names(), &caps(), flags, &t, false), "TIMESTAMP");
    }

    #[test]
    fn test_unmapped_type_is_unknown() {
        let col = ColumnSpec::new("BLOBBY", LogicalType::Serializable);
        assert_eq!(map(&col), UNKNOWN_TYPE);
    }

    #[test]
    fn test_classify_number() {
        assert_eq!(classify_number(10, 0, false), LogicalType::Integer);
        assert_eq!(classify_number(38, 0, false), LogicalType::Integer);
        assert_eq!(classify_number(38, 0, true), LogicalType::BigNumber);
        assert_eq!(classify_number(22, 0, false), LogicalType::BigNumber);
        assert_eq!(classify_number(10, 2, false), LogicalType::Number);
        assert_eq!(classify_number(20, 4, false), LogicalType::BigNumber);
        assert_eq!(classify_number(0, -127, true), LogicalType::Number);
    }
}
