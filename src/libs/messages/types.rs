#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated,
    TaskUpdated(String),
    TaskNotFound(i64),
    TasksDeletedCount(usize),
    TaskTitleRequired,
    NoTasksFound,
    NoTasksSelected,
    ConfirmDeleteTasks(usize),
    SelectTaskToEdit,
    SelectTasksToDelete,
    InvalidDateInput(String),
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskStatus,
    PromptTaskCategory,

    // === CATEGORY MESSAGES ===
    NoCategoriesFound,
    CategoriesSeeded(usize),

    // === USER AND SESSION MESSAGES ===
    UserRegistered(String),
    NameTaken(String),
    EmailTaken(String),
    FieldsRequired,
    InvalidCredentials,
    Welcome(String),
    LoggedOut,
    SessionMenu,
    PromptUserName,
    PromptUserEmail,
    PromptUserPassword,
    PromptLoginIdentifier,

    // === SCHEMA AND STORAGE MESSAGES ===
    SchemaReady,
    ColumnAdded(String),
    DatabaseCreated(String),
    StorageReady(String),

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
