//! SQL dialect adapters for Dameng (DM) and ShenTong (Oscar)
//!
//! Each adapter turns a database-agnostic column description into
//! dialect-specific DDL, connection URLs and capability flags. Column type
//! changes are emulated through a temporary column because neither product
//! can alter a column's type in place.
//!
//! # Example
//!
//! ```
//! use dm_oscar_dialect::{
//!     AccessMode, ColumnChange, ColumnSpec, DialectAttributes, DialectKind, LogicalType, Result,
//! };
//!
//! fn main() -> Result<()> {
//!     let dialect = "DM".parse::<DialectKind>()?.create(DialectAttributes::new());
//!
//!     let url = dialect.build_url(AccessMode::Native, "db.local", "", "SALES")?;
//!     assert_eq!(url, "jdbc:dm://db.local:12345/SALES");
//!
//!     let amount = ColumnSpec::new("AMOUNT", LogicalType::Number).with_length_precision(12, 2);
//!     let sql = dialect.add_column_statement(&ColumnChange::new("ORDERS", &amount))?;
//!     assert_eq!(sql, "ALTER TABLE ORDERS ADD AMOUNT NUMBER(14, 2)");
//!
//!     Ok(())
//! }
//! ```

pub mod capabilities;
pub mod config;
pub mod cursor;
pub mod dialect;
pub mod error;
pub mod introspect;
pub mod registry;
pub mod types;
pub mod url;
pub mod variables;

// Re-export main types
pub use capabilities::{AccessMode, CapabilitySet};
pub use config::DialectAttributes;
pub use cursor::{Cursor, IdentifierQuoter, QueryExecutor, RowSet};
pub use dialect::{DamengDialect, DatabaseDialect, OscarDialect};
pub use error::{Error, Result};
pub use introspect::index_covers_fields;
pub use registry::{create_dialect, DialectKind};
pub use types::{ColumnChange, ColumnInfo, ColumnSpec, LogicalType, Row, SqlValue};
pub use url::ConnectParams;
pub use variables::{VariableSpace, Variables};
