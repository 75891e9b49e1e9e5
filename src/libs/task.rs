use crate::libs::due_date::DueDate;
use std::fmt::{Display, Formatter};

/// Fixed status vocabulary for tasks. `Unset` is the default so a task can
/// be used as a plain note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Unset,
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Unset,
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Text stored in the `estado` column.
    pub fn as_db_text(&self) -> &'static str {
        match self {
            TaskStatus::Unset => "Sin estado definido",
            TaskStatus::Pending => "Pendiente",
            TaskStatus::InProgress => "En curso",
            TaskStatus::Completed => "Completada",
        }
    }

    /// Maps column text back to a status; unknown values fall back to `Unset`.
    pub fn from_db_text(text: &str) -> Self {
        match text {
            "Pendiente" => TaskStatus::Pending,
            "En curso" => TaskStatus::InProgress,
            "Completada" => TaskStatus::Completed,
            _ => TaskStatus::Unset,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_db_text())
    }
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: DueDate,
    pub status: TaskStatus,
    pub category_id: Option<i64>,
}

impl Task {
    pub fn new(title: &str, description: Option<&str>, due_date: DueDate, status: TaskStatus, category_id: Option<i64>) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.map(|d| d.to_string()),
            due_date,
            status,
            category_id,
        }
    }
}
