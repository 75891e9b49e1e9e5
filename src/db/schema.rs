//! Idempotent schema initialization and non-destructive migration.
//!
//! `ensure_schema` converges the database to the current model shape from
//! any earlier revision: tables are created with `IF NOT EXISTS`, missing
//! `tareas` columns are discovered by inspecting the live column list and
//! added with defaults, and reference data is seeded only into an empty
//! table. Calling it any number of times produces the same final shape.

use super::db::{Db, DbError};
use crate::libs::messages::Message;
use crate::msg_info;
use rusqlite::{params, Connection};

const SCHEMA_TAREAS: &str = "CREATE TABLE IF NOT EXISTS tareas (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    titulo TEXT NOT NULL,
    descripcion TEXT,
    fecha TEXT,
    estado TEXT,
    usuario_id INTEGER DEFAULT 0,
    id_categoria INTEGER DEFAULT NULL
)";
const SCHEMA_CATEGORIAS: &str = "CREATE TABLE IF NOT EXISTS categorias (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL UNIQUE,
    color TEXT
)";
const SCHEMA_USUARIOS: &str = "CREATE TABLE IF NOT EXISTS usuarios (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT UNIQUE NOT NULL,
    email TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL
)";
const COUNT_CATEGORIAS: &str = "SELECT COUNT(*) FROM categorias";
const INSERT_CATEGORIA: &str = "INSERT INTO categorias (nombre) VALUES (?1)";

/// Category names seeded on first run, in insertion order.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Sin categoría", "Trabajo", "Personal", "Urgente"];

/// Columns the current model expects on `tareas`, with the statement used
/// to add each one to a database created by an earlier revision.
const TAREAS_MODEL_COLUMNS: [(&str, &str); 2] = [
    ("usuario_id", "ALTER TABLE tareas ADD COLUMN usuario_id INTEGER DEFAULT 0"),
    ("id_categoria", "ALTER TABLE tareas ADD COLUMN id_categoria INTEGER DEFAULT NULL"),
];

/// Brings the schema up to date. Any fault here is fatal for startup and is
/// surfaced as `DbError::Schema` rather than being swallowed.
pub fn ensure_schema(db: &Db) -> Result<(), DbError> {
    let conn = db.open()?;
    init_schema(&conn).map_err(DbError::Schema)
}

fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(SCHEMA_TAREAS, [])?;
    conn.execute(SCHEMA_CATEGORIAS, [])?;
    conn.execute(SCHEMA_USUARIOS, [])?;

    // Legacy databases predate some columns. The live column list decides
    // what is missing, not a stored version number.
    let existing = table_columns(conn, "tareas")?;
    for (column, add_column) in TAREAS_MODEL_COLUMNS {
        if !existing.iter().any(|name| name.eq_ignore_ascii_case(column)) {
            conn.execute(add_column, [])?;
            msg_info!(Message::ColumnAdded(column.to_string()));
        }
    }

    let total: i64 = conn.query_row(COUNT_CATEGORIAS, [], |row| row.get(0))?;
    if total == 0 {
        for name in DEFAULT_CATEGORIES {
            conn.execute(INSERT_CATEGORIA, params![name])?;
        }
        msg_info!(Message::CategoriesSeeded(DEFAULT_CATEGORIES.len()));
    }

    Ok(())
}

/// Live column names of a table, from `PRAGMA table_info`.
pub fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt.query_map([], |row| row.get::<_, String>(1))?.collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(columns)
}
