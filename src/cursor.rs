//! The query-execution surface consumed by the index lookup.
//!
//! The host application owns connections and statement execution. It exposes
//! them here through [`QueryExecutor`], which opens a [`Cursor`] over the rows
//! of a dictionary query. [`RowSet`] is a cursor over rows already in memory,
//! for hosts that fetch eagerly.

use std::collections::VecDeque;
use std::future::Future;
use std::marker::PhantomData;

use crate::dialect::identifier::is_quoted;
use crate::types::Row;

/// Forward-only iteration over the rows of one query.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use dm_oscar_dialect::{Cursor, RowSet};
///
/// async fn count_rows<C: Cursor>(cursor: &mut C) -> Result<u64, C::Error> {
///     let mut count = 0;
///     while cursor.next().await?.is_some() {
///         count += 1;
///     }
///     cursor.close().await?;
///     Ok(count)
/// }
///
/// let mut rows = RowSet::<Infallible>::empty();
/// let total = tokio_test::block_on(count_rows(&mut rows)).unwrap();
/// assert_eq!(total, 0);
/// ```
pub trait Cursor {
    /// Error raised while fetching or closing.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get the next row.
    ///
    /// Returns `Ok(None)` when exhausted.
    fn next(&mut self) -> impl Future<Output = Result<Option<Row>, Self::Error>> + Send;

    /// Close the cursor and release its resources.
    fn close(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Cursor over rows held in memory.
///
/// `E` is the error type reported to callers; a row set never fails on its
/// own, so [`std::convert::Infallible`] is the usual choice.
#[derive(Debug)]
pub struct RowSet<E> {
    rows: VecDeque<Row>,
    closed: bool,
    _error: PhantomData<fn() -> E>,
}

impl<E> RowSet<E> {
    /// Create a cursor over `rows`.
    pub fn new(rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            rows: rows.into_iter().collect(),
            closed: false,
            _error: PhantomData,
        }
    }

    /// Create a cursor with no rows.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl<E> Cursor for RowSet<E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    async fn next(&mut self) -> Result<Option<Row>, E> {
        if self.closed {
            return Ok(None);
        }
        Ok(self.rows.pop_front())
    }

    async fn close(&mut self) -> Result<(), E> {
        self.rows.clear();
        self.closed = true;
        Ok(())
    }
}

/// Identifier quoting as performed by the host's database layer.
pub trait IdentifierQuoter {
    /// Quote a single identifier.
    fn quote_identifier(&self, name: &str) -> String {
        if is_quoted(name) {
            name.to_string()
        } else {
            format!("\"{}\"", name.replace('"', "\"\""))
        }
    }

    /// `schema.table` with both parts quoted, or just the table without a schema.
    fn quoted_schema_table_name(&self, schema: Option<&str>, table: &str) -> String {
        match schema.filter(|s| !s.is_empty()) {
            Some(schema) => format!(
                "{}.{}",
                self.quote_identifier(schema),
                self.quote_identifier(table)
            ),
            None => self.quote_identifier(table),
        }
    }
}

/// Executes dictionary queries on behalf of a dialect.
///
/// Timeouts, connection lifetime and transaction scope belong to the
/// implementor.
pub trait QueryExecutor: IdentifierQuoter {
    /// Error raised by query execution or row iteration.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Cursor over the rows of one query.
    type Cursor<'a>: Cursor<Error = Self::Error> + Send
    where
        Self: 'a;

    /// Run `sql`. `Ok(None)` means the statement produced no result set.
    fn open_query<'a>(
        &'a mut self,
        sql: &'a str,
    ) -> impl Future<Output = Result<Option<Self::Cursor<'a>>, Self::Error>> + Send;
}
