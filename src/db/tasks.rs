use super::db::{Db, Param};
use super::schema;
use crate::libs::due_date::DueDate;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskStatus};
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;

const INSERT_TASK: &str = "INSERT INTO tareas (titulo, descripcion, fecha, estado, id_categoria, usuario_id) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_TASK: &str = "UPDATE tareas SET titulo = ?1, descripcion = ?2, fecha = ?3, estado = ?4, id_categoria = ?5 WHERE id = ?6";
const DELETE_TASK: &str = "DELETE FROM tareas WHERE id = ?1";
const DELETE_TASKS: &str = "DELETE FROM tareas WHERE id IN";
const SELECT_TASKS: &str = "SELECT id, titulo, descripcion, fecha, estado, id_categoria FROM tareas";
const WHERE_OWNER: &str = "WHERE usuario_id = ?1 ORDER BY fecha ASC";
const WHERE_ID_AND_OWNER: &str = "WHERE id = ?1 AND usuario_id = ?2";

/// Owner-scoped task repository. Every read is restricted to one owner;
/// there is no cross-owner query surface.
pub struct Tasks {
    db: Db,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        schema::ensure_schema(&db)?;
        Ok(Tasks { db })
    }

    /// Inserts a task owned by `owner_id`. An empty title is rejected before
    /// any statement runs.
    pub fn create(&self, task: &Task, owner_id: i64) -> Result<()> {
        if task.title.trim().is_empty() {
            msg_bail_anyhow!(Message::TaskTitleRequired);
        }

        self.db.execute(
            INSERT_TASK,
            &[
                Param::Text(task.title.clone()),
                task.description.clone().map(Param::Text).unwrap_or(Param::Null),
                Param::from(&task.due_date),
                Param::Text(task.status.as_db_text().to_string()),
                Param::from(task.category_id),
                Param::Int(owner_id),
            ],
        )?;

        Ok(())
    }

    /// All tasks of one owner, ordered by the due date column ascending.
    /// Rows carrying the unset-date sentinel sort by their literal text.
    pub fn fetch_by_owner(&self, owner_id: i64) -> Result<Vec<Task>> {
        let tasks = self.db.query(&format!("{} {}", SELECT_TASKS, WHERE_OWNER), &[Param::Int(owner_id)], map_task)?;
        Ok(tasks)
    }

    pub fn get_by_id(&self, id: i64, owner_id: i64) -> Result<Option<Task>> {
        let mut tasks = self
            .db
            .query(&format!("{} {}", SELECT_TASKS, WHERE_ID_AND_OWNER), &[Param::Int(id), Param::Int(owner_id)], map_task)?;
        Ok(tasks.into_iter().next())
    }

    /// Full-row update by primary key.
    pub fn update(&self, task: &Task) -> Result<()> {
        if task.title.trim().is_empty() {
            return Err(msg_error_anyhow!(Message::TaskTitleRequired));
        }

        let id = task.id.unwrap_or(0);
        let affected = self.db.execute(
            UPDATE_TASK,
            &[
                Param::Text(task.title.clone()),
                task.description.clone().map(Param::Text).unwrap_or(Param::Null),
                Param::from(&task.due_date),
                Param::Text(task.status.as_db_text().to_string()),
                Param::from(task.category_id),
                Param::Int(id),
            ],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id)));
        }

        Ok(())
    }

    pub fn delete(&self, id: i64) -> Result<usize> {
        let deleted = self.db.execute(DELETE_TASK, &[Param::Int(id)])?;
        Ok(deleted)
    }

    /// Deletes every task in `ids` and returns the number of removed rows.
    pub fn delete_many(&self, ids: &[i64]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let params: Vec<Param> = ids.iter().map(|id| Param::Int(*id)).collect();
        let deleted = self.db.execute(&format!("{} ({})", DELETE_TASKS, placeholders), &params)?;
        Ok(deleted)
    }
}

fn map_task(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        due_date: row
            .get::<_, Option<String>>(3)?
            .map(|text| DueDate::from_db_text(&text))
            .unwrap_or(DueDate::Unset),
        status: row
            .get::<_, Option<String>>(4)?
            .map(|text| TaskStatus::from_db_text(&text))
            .unwrap_or(TaskStatus::Unset),
        category_id: row.get(5)?,
    })
}
