#[cfg(test)]
mod tests {
    use taskeasy::db::db::{Db, Param};
    use taskeasy::db::schema::{ensure_schema, table_columns};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_legacy_table_gains_missing_columns_without_data_loss(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();

        // Table shape from a revision that predates owners and categories
        db.execute(
            "CREATE TABLE tareas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                titulo TEXT NOT NULL,
                descripcion TEXT,
                fecha TEXT,
                estado TEXT
            )",
            &[],
        )
        .unwrap();
        db.execute(
            "INSERT INTO tareas (titulo, descripcion, fecha, estado) VALUES (?1, ?2, ?3, ?4)",
            &[
                Param::Text("Comprar pan".to_string()),
                Param::Text("panadería de la esquina".to_string()),
                Param::Text("01/02/2025".to_string()),
                Param::Text("Pendiente".to_string()),
            ],
        )
        .unwrap();

        ensure_schema(&db).unwrap();

        let conn = db.open().unwrap();
        let columns = table_columns(&conn, "tareas").unwrap();
        assert!(columns.iter().any(|c| c == "usuario_id"));
        assert!(columns.iter().any(|c| c == "id_categoria"));

        // The pre-existing row is intact and picked up the documented defaults
        let rows = db
            .query(
                "SELECT titulo, fecha, usuario_id, id_categoria FROM tareas",
                &[],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, i64>(2)?,
                        row.get::<_, Option<i64>>(3)?,
                    ))
                },
            )
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], ("Comprar pan".to_string(), "01/02/2025".to_string(), 0, None));
    }
}
