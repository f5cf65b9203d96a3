#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use wout::data::exercises::Exercises;
    use wout::data::logs::{self, Logs, RecordMode};
    use wout::data::store::Store;

    struct ExerciseTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ExerciseTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            ExerciseTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_names_fold_to_lowercase(_ctx: &mut ExerciseTestContext) {
        let store = Store::new().unwrap();
        let exercises = Exercises::new(&store);

        exercises.add("Squats", "reps", 30.0).unwrap();

        // Lookups hit the same entry regardless of case
        let fetched = exercises.get("SQUATS").unwrap().unwrap();
        assert_eq!(fetched.unit, "reps");
        assert_eq!(fetched.daily_target, 30.0);
        assert!(exercises.list().unwrap().iter().any(|(name, _)| name == "squats"));
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_redefining_keeps_logged_history(_ctx: &mut ExerciseTestContext) {
        let store = Store::new().unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        Logs::new(&store).record(day, "pushups", 40.0, RecordMode::Add).unwrap();

        // Raising the target must not reset what was already done
        Exercises::new(&store).add("pushups", "reps", 120.0).unwrap();

        let data = store.load().unwrap();
        assert_eq!(logs::amount_for(&data, day, "pushups"), 40.0);
        assert_eq!(data.exercises["pushups"].daily_target, 120.0);
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_remove_reports_membership(_ctx: &mut ExerciseTestContext) {
        let store = Store::new().unwrap();
        let exercises = Exercises::new(&store);

        assert!(exercises.remove("running").unwrap());
        assert!(!exercises.remove("running").unwrap());
        assert!(exercises.get("running").unwrap().is_none());
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_remove_keeps_logged_history(_ctx: &mut ExerciseTestContext) {
        let store = Store::new().unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        Logs::new(&store).record(day, "running", 6.5, RecordMode::Add).unwrap();

        Exercises::new(&store).remove("running").unwrap();

        // The registry entry is gone, the history is not
        let data = store.load().unwrap();
        assert!(!data.exercises.contains_key("running"));
        assert_eq!(logs::amount_for(&data, day, "running"), 6.5);
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_list_is_ordered_by_name(_ctx: &mut ExerciseTestContext) {
        let store = Store::new().unwrap();
        let listing = Exercises::new(&store).list().unwrap();

        let names: Vec<&str> = listing.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["plank", "pullups", "pushups", "running"]);
    }
}
