//! Display implementation for application messages.
//!
//! Single source of truth for all user-facing text. Keeping the wording in
//! one match arm per variant keeps the persistence layer free of string
//! formatting and leaves room for localization later.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated => "Task created successfully".to_string(),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskNotFound(id) => format!("Task with id {} not found", id),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s)", count),
            Message::TaskTitleRequired => "The task title is required".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoTasksSelected => "No tasks selected".to_string(),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} selected task(s)?", count),
            Message::SelectTaskToEdit => "Select a task to edit".to_string(),
            Message::SelectTasksToDelete => "Select tasks to delete".to_string(),
            Message::InvalidDateInput(input) => format!("'{}' is not a valid dd/MM/yyyy date", input),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskDueDate => "Due date dd/MM/yyyy (empty for none)".to_string(),
            Message::PromptTaskStatus => "Task status".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),

            // === CATEGORY MESSAGES ===
            Message::NoCategoriesFound => "No categories found".to_string(),
            Message::CategoriesSeeded(count) => format!("Inserted {} default categories", count),

            // === USER AND SESSION MESSAGES ===
            Message::UserRegistered(name) => format!("User '{}' registered successfully", name),
            Message::NameTaken(name) => format!("The name '{}' is already registered", name),
            Message::EmailTaken(email) => format!("The email '{}' is already registered", email),
            Message::FieldsRequired => "Name, email and password are all required".to_string(),
            Message::InvalidCredentials => "Invalid credentials".to_string(),
            Message::Welcome(name) => format!("Signed in as: {}", name),
            Message::LoggedOut => "Signed out".to_string(),
            Message::SessionMenu => "What do you want to do?".to_string(),
            Message::PromptUserName => "User name".to_string(),
            Message::PromptUserEmail => "Email".to_string(),
            Message::PromptUserPassword => "Password".to_string(),
            Message::PromptLoginIdentifier => "Name or email".to_string(),

            // === SCHEMA AND STORAGE MESSAGES ===
            Message::SchemaReady => "Database schema is up to date".to_string(),
            Message::ColumnAdded(column) => format!("Column '{}' added to table 'tareas'", column),
            Message::DatabaseCreated(path) => format!("Database created from template at {}", path),
            Message::StorageReady(path) => format!("Storage ready at {}", path),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", message)
    }
}
