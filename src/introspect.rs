//! Data dictionary probes that run through the host's query executor.

use tracing::debug;

use crate::cursor::{Cursor, QueryExecutor};
use crate::dialect::DatabaseDialect;
use crate::error::{Error, Result};

/// Column of `USER_IND_COLUMNS` holding the indexed column's name.
pub const INDEX_COLUMN_NAME: &str = "COLUMN_NAME";

/// Check whether every name in `fields` appears among the indexed columns of
/// `table`.
///
/// Names are compared exactly as the dictionary returns them. Returns
/// `Ok(false)` when the query produces no result set, and `Ok(true)` for an
/// empty `fields` list. Any executor failure is reported as
/// [`Error::Introspection`] naming the quoted table.
pub async fn index_covers_fields<E>(
    dialect: &dyn DatabaseDialect,
    executor: &mut E,
    schema: Option<&str>,
    table: &str,
    fields: &[&str],
) -> Result<bool>
where
    E: QueryExecutor,
{
    let label = executor.quoted_schema_table_name(schema, table);
    let sql = dialect.index_columns_query(table);
    debug!(dialect = dialect.name(), table = %label, sql = %sql, "probing index columns");

    let mut cursor = match executor.open_query(&sql).await {
        Ok(Some(cursor)) => cursor,
        Ok(None) => {
            debug!(table = %label, "index probe returned no result set");
            return Ok(false);
        }
        Err(e) => return Err(Error::introspection(label, e)),
    };

    let mut seen = vec![false; fields.len()];
    loop {
        match cursor.next().await {
            Ok(Some(row)) => {
                let column = row.get_string(INDEX_COLUMN_NAME, "");
                for (flag, field) in seen.iter_mut().zip(fields) {
                    if *field == column {
                        *flag = true;
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                if let Err(close_err) = cursor.close().await {
                    debug!(table = %label, error = %close_err, "closing cursor after failure");
                }
                return Err(Error::introspection(label, e));
            }
        }
    }
    if let Err(e) = cursor.close().await {
        return Err(Error::introspection(label, e));
    }

    let covered = seen.iter().all(|s| *s);
    debug!(table = %label, covered, "index probe finished");
    Ok(covered)
}
