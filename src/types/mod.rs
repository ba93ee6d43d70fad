//! Column model and result-row types.

mod column;
mod row;
mod value;

pub use column::{ColumnChange, ColumnSpec, LogicalType};
pub use row::{ColumnInfo, Row};
pub use value::SqlValue;
