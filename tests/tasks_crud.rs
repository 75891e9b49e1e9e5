#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskeasy::db::db::{Db, Param};
    use taskeasy::db::tasks::Tasks;
    use taskeasy::libs::due_date::{DueDate, NO_DUE_DATE};
    use taskeasy::libs::task::{Task, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
        }
    }

    fn raw_fecha(title: &str, owner_id: i64) -> String {
        let db = Db::new().unwrap();
        let rows = db
            .query(
                "SELECT fecha FROM tareas WHERE titulo = ?1 AND usuario_id = ?2",
                &[Param::Text(title.to_string()), Param::Int(owner_id)],
                |row| row.get::<_, String>(0),
            )
            .unwrap();
        rows[0].clone()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_due_date_round_trip(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        let owner = 11;

        let date = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let dated = Task::new("Dated", None, DueDate::On(date), TaskStatus::Pending, None);
        tasks.create(&dated, owner).unwrap();

        // Stored column text is exactly dd/MM/yyyy, zero-padded
        assert_eq!(raw_fecha("Dated", owner), "05/03/2025");
        let fetched = tasks.fetch_by_owner(owner).unwrap();
        assert_eq!(fetched[0].due_date, DueDate::On(date));

        // A task without a due date stores the fixed sentinel, never NULL
        let undated = Task::new("Undated", None, DueDate::Unset, TaskStatus::Unset, None);
        tasks.create(&undated, owner).unwrap();
        assert_eq!(raw_fecha("Undated", owner), NO_DUE_DATE);
        let fetched = tasks.fetch_by_owner(owner).unwrap();
        let undated = fetched.iter().find(|t| t.title == "Undated").unwrap();
        assert_eq!(undated.due_date, DueDate::Unset);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tasks_are_owner_scoped(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        let (ana, luis) = (21, 22);

        for title in ["Informe", "Factura"] {
            let task = Task::new(title, None, DueDate::Unset, TaskStatus::Pending, None);
            tasks.create(&task, ana).unwrap();
        }
        let task = Task::new("Compra", None, DueDate::Unset, TaskStatus::Pending, None);
        tasks.create(&task, luis).unwrap();

        let anas = tasks.fetch_by_owner(ana).unwrap();
        assert_eq!(anas.len(), 2);
        assert!(anas.iter().all(|t| t.title != "Compra"));

        let luiss = tasks.fetch_by_owner(luis).unwrap();
        assert_eq!(luiss.len(), 1);
        assert_eq!(luiss[0].title, "Compra");

        // get_by_id never crosses owners either
        let id = anas[0].id.unwrap();
        assert!(tasks.get_by_id(id, luis).unwrap().is_none());
        assert!(tasks.get_by_id(id, ana).unwrap().is_some());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_orders_by_due_date_text(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        let owner = 31;

        for (title, day) in [("Later", 20), ("Sooner", 3)] {
            let date = NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
            let task = Task::new(title, None, DueDate::On(date), TaskStatus::Pending, None);
            tasks.create(&task, owner).unwrap();
        }
        // The sentinel sorts by its literal text, after zero-padded dates
        let task = Task::new("Someday", None, DueDate::Unset, TaskStatus::Unset, None);
        tasks.create(&task, owner).unwrap();

        let titles: Vec<String> = tasks.fetch_by_owner(owner).unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Sooner", "Later", "Someday"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        let owner = 41;

        let task = Task::new("Original", Some("first"), DueDate::Unset, TaskStatus::Pending, None);
        tasks.create(&task, owner).unwrap();
        let mut task = tasks.fetch_by_owner(owner).unwrap().remove(0);

        task.title = "Renamed".to_string();
        task.description = None;
        task.due_date = DueDate::On(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap());
        task.status = TaskStatus::Completed;
        tasks.update(&task).unwrap();

        let updated = tasks.get_by_id(task.id.unwrap(), owner).unwrap().unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, None);
        assert_eq!(updated.due_date, DueDate::On(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()));
        assert_eq!(updated.status, TaskStatus::Completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_title_is_rejected_before_insert(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        let owner = 51;

        let task = Task::new("   ", None, DueDate::Unset, TaskStatus::Unset, None);
        assert!(tasks.create(&task, owner).is_err());
        assert!(tasks.fetch_by_owner(owner).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_many_removes_exactly_the_given_rows(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        let owner = 61;

        for i in 1..=5 {
            let task = Task::new(&format!("Task {}", i), None, DueDate::Unset, TaskStatus::Pending, None);
            tasks.create(&task, owner).unwrap();
        }

        let all = tasks.fetch_by_owner(owner).unwrap();
        let ids: Vec<i64> = all.iter().filter_map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);

        let deleted = tasks.delete_many(&ids[..3]).unwrap();
        assert_eq!(deleted, 3);

        let remaining = tasks.fetch_by_owner(owner).unwrap();
        assert_eq!(remaining.len(), 2);
        let mut remaining_ids: Vec<i64> = remaining.iter().filter_map(|t| t.id).collect();
        remaining_ids.sort();
        let mut expected: Vec<i64> = ids[3..].to_vec();
        expected.sort();
        assert_eq!(remaining_ids, expected);

        // Empty input is a no-op
        assert_eq!(tasks.delete_many(&[]).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(_ctx: &mut TaskTestContext) {
        let tasks = Tasks::new().unwrap();
        let owner = 71;

        let task = Task::new("Solo", None, DueDate::Unset, TaskStatus::Pending, None);
        tasks.create(&task, owner).unwrap();
        let id = tasks.fetch_by_owner(owner).unwrap()[0].id.unwrap();

        assert_eq!(tasks.delete(id).unwrap(), 1);
        assert!(tasks.fetch_by_owner(owner).unwrap().is_empty());
    }
}
