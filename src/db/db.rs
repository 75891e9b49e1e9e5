//! Database file location and statement execution.
//!
//! `Db` resolves the database file once, materializes it from the bundled
//! template on first run and opens one fresh connection per statement. Every
//! connection is a scoped resource released on all exit paths, including
//! error paths, so a failed statement can never leak a handle.

use crate::libs::data_storage::DataStorage;
use crate::libs::due_date::{DueDate, DATE_FORMAT, NO_DUE_DATE};
use crate::libs::messages::Message;
use crate::msg_debug;
use chrono::NaiveDate;
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::{params_from_iter, Connection, Row, ToSql};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const DB_FILE_NAME: &str = "taskeasy.db";

/// Template database packaged with the binary, written out on first run.
const DB_TEMPLATE: &[u8] = include_bytes!("../../assets/taskeasy.db");

/// Storage-layer fault taxonomy. `Storage` and `Schema` are fatal at
/// startup; `Sql` is a per-statement fault the caller can report.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to prepare database storage: {0}")]
    Storage(String),
    #[error("schema initialization failed: {0}")]
    Schema(#[source] rusqlite::Error),
    #[error("database statement failed: {0}")]
    Sql(#[from] rusqlite::Error),
}

/// Positional statement parameter.
///
/// Calendar dates are always bound as `dd/MM/yyyy` text, never as a native
/// date type, so stored rows stay readable by every schema revision.
#[derive(Debug, Clone)]
pub enum Param {
    Text(String),
    Int(i64),
    Date(NaiveDate),
    Null,
}

impl ToSql for Param {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Param::Text(text) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(text.as_bytes()))),
            Param::Int(value) => Ok(ToSqlOutput::Owned(Value::Integer(*value))),
            Param::Date(date) => Ok(ToSqlOutput::Owned(Value::Text(date.format(DATE_FORMAT).to_string()))),
            Param::Null => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

impl From<&DueDate> for Param {
    fn from(due: &DueDate) -> Self {
        match due {
            DueDate::Unset => Param::Text(NO_DUE_DATE.to_string()),
            DueDate::On(date) => Param::Date(*date),
        }
    }
}

impl From<Option<i64>> for Param {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(value) => Param::Int(value),
            None => Param::Null,
        }
    }
}

#[derive(Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    /// Resolves the database file path, creating the data directory and
    /// seeding the file from the bundled template when absent.
    pub fn new() -> Result<Db, DbError> {
        let path = DataStorage::new()
            .get_path(DB_FILE_NAME)
            .map_err(|e| DbError::Storage(e.to_string()))?;

        if !path.exists() {
            fs::write(&path, DB_TEMPLATE).map_err(|e| DbError::Storage(e.to_string()))?;
            msg_debug!(Message::DatabaseCreated(path.display().to_string()));
        }

        Ok(Db { path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Opens a fresh connection. Callers own its lifetime; repository code
    /// goes through `execute` and `query` instead.
    pub fn open(&self) -> Result<Connection, DbError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Runs one parameterized mutating statement on its own connection and
    /// returns the number of affected rows. The connection is closed before
    /// returning, whatever the outcome.
    pub fn execute(&self, sql: &str, params: &[Param]) -> Result<usize, DbError> {
        let conn = self.open()?;
        let affected = conn.execute(sql, params_from_iter(params.iter()))?;
        Ok(affected)
    }

    /// Runs one parameterized query on its own connection, mapping every row
    /// through `map_row`. The statement and its rows live strictly inside
    /// this call, so the connection is released on every path, including a
    /// failed prepare.
    pub fn query<T, F>(&self, sql: &str, params: &[Param], map_row: F) -> Result<Vec<T>, DbError>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.open()?;
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), map_row)?.collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(rows)
    }
}
