#[cfg(test)]
mod tests {
    use taskeasy::db::categories::Categories;
    use taskeasy::db::schema::DEFAULT_CATEGORIES;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CategoryTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CategoryTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_default_categories_listed_in_id_order(_ctx: &mut CategoryTestContext) {
        let categories = Categories::new().unwrap().fetch_all().unwrap();

        assert_eq!(categories.len(), 4);
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, DEFAULT_CATEGORIES);
        assert!(categories.windows(2).all(|pair| pair[0].id < pair[1].id));
        assert!(categories.iter().all(|c| c.color.is_none()));
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_repeated_construction_does_not_duplicate_seed(_ctx: &mut CategoryTestContext) {
        // Every repository constructor re-runs schema initialization
        let first = Categories::new().unwrap().fetch_all().unwrap();
        let second = Categories::new().unwrap().fetch_all().unwrap();

        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 4);
    }
}
