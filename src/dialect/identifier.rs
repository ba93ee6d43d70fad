//! Identifier helpers shared by both dialects.

/// Delimiter for quoted identifiers.
pub const QUOTE: char = '"';

/// Characters kept from a column name when deriving a temporary column.
pub const TEMP_NAME_MAX_CHARS: usize = 30;

/// Suffix of temporary columns created while modifying a column.
pub const TEMP_COLUMN_SUFFIX: &str = "_KTL";

/// Whether `name` is wrapped in a matching pair of `"` delimiters.
pub fn is_quoted(name: &str) -> bool {
    name.len() >= 2 && name.starts_with(QUOTE) && name.ends_with(QUOTE)
}

/// Strip surrounding `"` delimiters, if present.
pub fn unquote(name: &str) -> &str {
    if is_quoted(name) {
        &name[1..name.len() - 1]
    } else {
        name
    }
}

/// Derive the temporary column name used by column modification.
///
/// The bare name is cut to [`TEMP_NAME_MAX_CHARS`] characters and suffixed
/// with [`TEMP_COLUMN_SUFFIX`], so the result stays within 35 characters.
/// Delimiters on the input are put back on the result. Two long names
/// sharing their first 30 characters collide.
pub fn temp_column_name(name: &str) -> String {
    let quoted = is_quoted(name);
    let core: String = unquote(name).chars().take(TEMP_NAME_MAX_CHARS).collect();

    if quoted {
        format!("{QUOTE}{core}{TEMP_COLUMN_SUFFIX}{QUOTE}")
    } else {
        format!("{core}{TEMP_COLUMN_SUFFIX}")
    }
}

/// Whether an unquoted identifier would be rejected by the parser.
///
/// Names must start with a letter and continue with letters, digits, `_`,
/// `$` or `#`.
pub fn has_special_characters(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => false,
        Some(first) if !first.is_alphabetic() => true,
        Some(_) => chars.any(|c| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '#'))),
    }
}

/// Escape a value for use inside a single-quoted SQL literal.
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}
