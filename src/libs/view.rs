use crate::db::categories::Category;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], categories: &[Category]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE DATE", "STATUS", "CATEGORY"]);
        for task in tasks {
            let category = task
                .category_id
                .and_then(|id| categories.iter().find(|c| c.id == id))
                .map(|c| c.name.as_str())
                .unwrap_or("Sin categoría");

            table.add_row(row![
                task.id.unwrap_or(0),
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.due_date,
                task.status,
                category
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn categories(categories: &[Category]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "COLOR"]);
        for category in categories {
            table.add_row(row![category.id, category.name, category.color.as_deref().unwrap_or("")]);
        }
        table.printstd();

        Ok(())
    }
}
