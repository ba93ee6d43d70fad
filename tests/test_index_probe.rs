//! Integration tests for the index-existence probe against a scripted executor.

use std::error::Error as _;
use std::sync::Arc;

use dm_oscar_dialect::{
    index_covers_fields, ColumnInfo, Cursor, DamengDialect, Error, IdentifierQuoter,
    OscarDialect, QueryExecutor, Row, RowSet, SqlValue,
};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
struct ScriptError(String);

/// What the scripted executor does with the next query.
#[derive(Clone)]
enum Script {
    Rows(Vec<&'static str>),
    NoResultSet,
    OpenFails,
    /// Yield the given rows, then fail.
    FailAfter(Vec<&'static str>),
}

struct ScriptedExecutor {
    script: Script,
    queries: Vec<String>,
    closed: Arc<std::sync::atomic::AtomicUsize>,
}

impl ScriptedExecutor {
    fn new(script: Script) -> Self {
        Self {
            script,
            queries: Vec::new(),
            closed: Arc::default(),
        }
    }

    fn close_count(&self) -> usize {
        self.closed.load(std::sync::atomic::Ordering::SeqCst)
    }
}

fn index_rows(names: &[&str]) -> Vec<Row> {
    let info = Arc::new(ColumnInfo::new(["INDEX_NAME", "COLUMN_NAME", "COLUMN_POSITION"]));
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Row::new(
                vec![
                    SqlValue::from("IDX_ORDERS"),
                    SqlValue::from(*name),
                    SqlValue::from(i as i64 + 1),
                ],
                info.clone(),
            )
        })
        .collect()
}

/// Cursor that hands out its rows and then raises an error.
struct ScriptedCursor {
    rows: RowSet<ScriptError>,
    fail_at_end: bool,
    closed: Arc<std::sync::atomic::AtomicUsize>,
}

impl Cursor for ScriptedCursor {
    type Error = ScriptError;

    async fn next(&mut self) -> Result<Option<Row>, ScriptError> {
        match self.rows.next().await? {
            Some(row) => Ok(Some(row)),
            None if self.fail_at_end => Err(ScriptError("connection reset".to_string())),
            None => Ok(None),
        }
    }

    async fn close(&mut self) -> Result<(), ScriptError> {
        self.closed.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.rows.close().await
    }
}

impl IdentifierQuoter for ScriptedExecutor {}

impl QueryExecutor for ScriptedExecutor {
    type Error = ScriptError;
    type Cursor<'a>
        = ScriptedCursor
    where
        Self: 'a;

    async fn open_query<'a>(
        &'a mut self,
        sql: &'a str,
    ) -> Result<Option<ScriptedCursor>, ScriptError> {
        self.queries.push(sql.to_string());
        let (names, fail_at_end) = match &self.script {
            Script::Rows(names) => (names.clone(), false),
            Script::FailAfter(names) => (names.clone(), true),
            Script::NoResultSet => return Ok(None),
            Script::OpenFails => return Err(ScriptError("ORA-00942".to_string())),
        };
        Ok(Some(ScriptedCursor {
            rows: RowSet::new(index_rows(&names)),
            fail_at_end,
            closed: self.closed.clone(),
        }))
    }
}

#[tokio::test]
async fn test_index_covers_all_fields() {
    let mut exec = ScriptedExecutor::new(Script::Rows(vec!["CUSTOMER_ID", "ORDER_DATE"]));

    let covered = index_covers_fields(
        &DamengDialect::new(),
        &mut exec,
        Some("APP"),
        "ORDERS",
        &["ORDER_DATE", "CUSTOMER_ID"],
    )
    .await
    .unwrap();

    assert!(covered);
    assert_eq!(
        exec.queries,
        vec!["SELECT * FROM USER_IND_COLUMNS WHERE TABLE_NAME = 'ORDERS'".to_string()]
    );
    assert_eq!(exec.close_count(), 1);
}

#[tokio::test]
async fn test_index_missing_one_field() {
    let mut exec = ScriptedExecutor::new(Script::Rows(vec!["CUSTOMER_ID"]));

    let covered = index_covers_fields(
        &OscarDialect::new(),
        &mut exec,
        None,
        "ORDERS",
        &["CUSTOMER_ID", "STATUS"],
    )
    .await
    .unwrap();

    assert!(!covered);
    assert_eq!(exec.close_count(), 1);
}

#[tokio::test]
async fn test_duplicate_rows_and_fields() {
    let mut exec = ScriptedExecutor::new(Script::Rows(vec!["ID", "ID", "NAME"]));

    let covered = index_covers_fields(
        &DamengDialect::new(),
        &mut exec,
        None,
        "ORDERS",
        &["ID", "ID"],
    )
    .await
    .unwrap();

    assert!(covered);
}

#[tokio::test]
async fn test_no_result_set_is_false() {
    let mut exec = ScriptedExecutor::new(Script::NoResultSet);

    let covered = index_covers_fields(&DamengDialect::new(), &mut exec, None, "ORDERS", &["ID"])
        .await
        .unwrap();

    assert!(!covered);
    assert_eq!(exec.close_count(), 0);
}

#[tokio::test]
async fn test_open_failure_is_introspection_error() {
    let mut exec = ScriptedExecutor::new(Script::OpenFails);

    let err = index_covers_fields(&DamengDialect::new(), &mut exec, Some("APP"), "ORDERS", &["ID"])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Introspection { .. }));
    assert_eq!(
        err.to_string(),
        "Unable to determine if indexes exist on table [\"APP\".\"ORDERS\"]"
    );
    assert_eq!(err.source().unwrap().to_string(), "ORA-00942");
}

#[tokio::test]
async fn test_iteration_failure_closes_cursor() {
    let mut exec = ScriptedExecutor::new(Script::FailAfter(vec!["ID"]));

    let err = index_covers_fields(&OscarDialect::new(), &mut exec, None, "ORDERS", &["ID"])
        .await
        .unwrap_err();

    match &err {
        Error::Introspection { table, .. } => assert_eq!(table, "\"ORDERS\""),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.source().unwrap().to_string(), "connection reset");
    assert_eq!(exec.close_count(), 1);
}
