//! Row type handed back by the execution collaborator.

use std::sync::Arc;

use super::value::SqlValue;

/// Shared column names for all rows of one result set.
#[derive(Debug, Clone, Default)]
pub struct ColumnInfo {
    names: Vec<String>,
}

impl ColumnInfo {
    /// Create column info from column names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|c| c.eq_ignore_ascii_case(name))
    }
}

/// A row of query results.
#[derive(Debug, Clone)]
pub struct Row {
    values: Vec<SqlValue>,
    column_info: Arc<ColumnInfo>,
}

impl Row {
    /// Create a new row with values and shared column info.
    pub fn new(values: Vec<SqlValue>, column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values,
            column_info,
        }
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Get value by column name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&SqlValue> {
        self.column_info
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a column as text, or `default` when the column is missing or NULL.
    pub fn get_string(&self, name: &str, default: &str) -> String {
        match self.get_by_name(name) {
            Some(SqlValue::Null) | None => default.to_string(),
            Some(value) => value.to_string(),
        }
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_row(column: &str) -> Row {
        let info = Arc::new(ColumnInfo::new(["INDEX_NAME", "TABLE_NAME", "COLUMN_NAME"]));
        Row::new(
            vec![
                SqlValue::from("IDX_ORDERS_CUSTOMER"),
                SqlValue::from("ORDERS"),
                SqlValue::from(column),
            ],
            info,
        )
    }

    #[test]
    fn test_row_access() {
        let row = index_row("CUSTOMER_ID");

        assert_eq!(row.len(), 3);
        assert_eq!(row.get(1), Some(&SqlValue::from("ORDERS")));
        assert_eq!(row.get_by_name("column_name"), row.get_by_name("COLUMN_NAME"));
        assert_eq!(row.column_names(), vec!["INDEX_NAME", "TABLE_NAME", "COLUMN_NAME"]);
    }

    #[test]
    fn test_get_string_defaults() {
        let info = Arc::new(ColumnInfo::new(["COLUMN_NAME", "DESCEND"]));
        let row = Row::new(vec![SqlValue::from("ID"), SqlValue::Null], info);

        assert_eq!(row.get_string("COLUMN_NAME", ""), "ID");
        assert_eq!(row.get_string("DESCEND", "ASC"), "ASC");
        assert_eq!(row.get_string("MISSING", "?"), "?");
    }
}
