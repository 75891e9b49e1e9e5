//! Sign-in command with an interactive task session.
//!
//! Authentication yields a `Session` value that scopes every repository
//! call made from the menu loop. The session lives for this process only
//! and ends on the explicit logout entry.

use crate::db::categories::{Categories, Category};
use crate::db::tasks::Tasks;
use crate::db::users::{AuthOutcome, Users};
use crate::libs::due_date::{DueDate, DATE_FORMAT};
use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::libs::task::{Task, TaskStatus};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Password, Select};

const MENU_ITEMS: [&str; 6] = ["List tasks", "Add task", "Edit task", "Delete tasks", "List categories", "Log out"];

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Name or email to sign in with
    #[arg(short, long)]
    identifier: Option<String>,
}

pub fn cmd(args: LoginArgs) -> Result<()> {
    let users = Users::new()?;

    let identifier = match args.identifier {
        Some(identifier) => identifier,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLoginIdentifier.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptUserPassword.to_string())
        .interact()?;

    let mut session = Session::new();
    match users.authenticate(&identifier, &password)? {
        AuthOutcome::Authenticated { user_id, name } => session.login(user_id, name),
        AuthOutcome::Rejected => {
            msg_error!(Message::InvalidCredentials);
            return Ok(());
        }
    }

    msg_success!(Message::Welcome(session.user_name().unwrap_or_default().to_string()));
    run_session(&mut session)
}

fn run_session(session: &mut Session) -> Result<()> {
    let tasks = Tasks::new()?;
    let categories = Categories::new()?;

    while let Some(owner_id) = session.user_id() {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SessionMenu.to_string())
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        match choice {
            0 => list_tasks(&tasks, &categories, owner_id)?,
            1 => add_task(&tasks, &categories, owner_id)?,
            2 => edit_task(&tasks, &categories, owner_id)?,
            3 => delete_tasks(&tasks, owner_id)?,
            4 => list_categories(&categories)?,
            _ => {
                session.logout();
                msg_info!(Message::LoggedOut);
            }
        }
    }

    Ok(())
}

fn list_tasks(tasks: &Tasks, categories: &Categories, owner_id: i64) -> Result<()> {
    let owned = tasks.fetch_by_owner(owner_id)?;
    if owned.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&owned, &categories.fetch_all()?)
}

fn add_task(tasks: &Tasks, categories: &Categories, owner_id: i64) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::TaskTitleRequired.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let description = if description.trim().is_empty() { None } else { Some(description) };

    let due_date = prompt_due_date(String::new())?;
    let status = prompt_status(TaskStatus::Unset)?;
    let category_id = prompt_category(&categories.fetch_all()?, None)?;

    let task = Task::new(&title, description.as_deref(), due_date, status, category_id);
    tasks.create(&task, owner_id)?;
    msg_success!(Message::TaskCreated);

    Ok(())
}

fn edit_task(tasks: &Tasks, categories: &Categories, owner_id: i64) -> Result<()> {
    let owned = tasks.fetch_by_owner(owner_id)?;
    if owned.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let labels: Vec<String> = owned.iter().map(task_label).collect();
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskToEdit.to_string())
        .items(&labels)
        .default(0)
        .interact()?;
    let mut task = owned[selected].clone();

    task.title = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(task.title.clone())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err(Message::TaskTitleRequired.to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    task.description = if description.trim().is_empty() { None } else { Some(description) };

    let current_date = task
        .due_date
        .date()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default();
    task.due_date = prompt_due_date(current_date)?;
    task.status = prompt_status(task.status)?;
    task.category_id = prompt_category(&categories.fetch_all()?, task.category_id)?;

    tasks.update(&task)?;
    msg_success!(Message::TaskUpdated(task.title.clone()));

    Ok(())
}

fn delete_tasks(tasks: &Tasks, owner_id: i64) -> Result<()> {
    let owned = tasks.fetch_by_owner(owner_id)?;
    if owned.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let labels: Vec<String> = owned.iter().map(task_label).collect();
    let selected = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTasksToDelete.to_string())
        .items(&labels)
        .interact()?;
    if selected.is_empty() {
        msg_info!(Message::NoTasksSelected);
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTasks(selected.len()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let ids: Vec<i64> = selected.iter().filter_map(|&index| owned[index].id).collect();
    let deleted = tasks.delete_many(&ids)?;
    msg_success!(Message::TasksDeletedCount(deleted));

    Ok(())
}

fn list_categories(categories: &Categories) -> Result<()> {
    let all = categories.fetch_all()?;
    if all.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    View::categories(&all)
}

fn prompt_due_date(initial: String) -> Result<DueDate> {
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            DueDate::parse_input(input)
                .map(|_| ())
                .map_err(|_| Message::InvalidDateInput(input.clone()).to_string())
        })
        .interact_text()?;

    Ok(DueDate::parse_input(&input).unwrap_or(DueDate::Unset))
}

fn prompt_status(current: TaskStatus) -> Result<TaskStatus> {
    let labels: Vec<&str> = TaskStatus::ALL.iter().map(|status| status.as_db_text()).collect();
    let default = TaskStatus::ALL.iter().position(|status| *status == current).unwrap_or(0);
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(TaskStatus::ALL[selected])
}

fn prompt_category(categories: &[Category], current: Option<i64>) -> Result<Option<i64>> {
    if categories.is_empty() {
        return Ok(None);
    }

    let mut labels: Vec<String> = vec!["(none)".to_string()];
    labels.extend(categories.iter().map(|category| category.name.clone()));
    let default = categories
        .iter()
        .position(|category| Some(category.id) == current)
        .map(|index| index + 1)
        .unwrap_or(0);

    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&labels)
        .default(default)
        .interact()?;

    if selected == 0 {
        Ok(None)
    } else {
        Ok(Some(categories[selected - 1].id))
    }
}

fn task_label(task: &Task) -> String {
    format!("{}: {}", task.id.unwrap_or(0), task.title)
}
