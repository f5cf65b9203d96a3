#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use wout::data::logs::{self, Logs, RecordMode};
    use wout::data::model::{date_key, TemplateDay};
    use wout::data::store::Store;
    use wout::data::template::Weekly;

    struct WeeklyTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for WeeklyTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            WeeklyTestContext { _temp_dir: temp_dir }
        }
    }

    // 2026-03-02 is a Monday, 2026-03-01 a Sunday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test_context(WeeklyTestContext)]
    #[test]
    fn test_planning_requires_registered_exercise(_ctx: &mut WeeklyTestContext) {
        let store = Store::new().unwrap();
        let weekly = Weekly::new(&store);

        let result = weekly.add_or_update(TemplateDay::Monday, "rowing", 20);
        assert!(result.is_err());
        assert!(weekly.list(TemplateDay::Monday).unwrap().is_empty());
    }

    #[test_context(WeeklyTestContext)]
    #[test]
    fn test_replanning_updates_reps_in_place(_ctx: &mut WeeklyTestContext) {
        let store = Store::new().unwrap();
        let weekly = Weekly::new(&store);

        weekly.add_or_update(TemplateDay::Monday, "Pushups", 30).unwrap();
        weekly.add_or_update(TemplateDay::Monday, "pushups", 45).unwrap();

        let planned = weekly.list(TemplateDay::Monday).unwrap();
        assert_eq!(planned.len(), 1);
        assert_eq!(planned[0].exercise_name, "pushups");
        assert_eq!(planned[0].reps, 45);
    }

    #[test_context(WeeklyTestContext)]
    #[test]
    fn test_entries_keep_insertion_order(_ctx: &mut WeeklyTestContext) {
        let store = Store::new().unwrap();
        let weekly = Weekly::new(&store);

        weekly.add_or_update(TemplateDay::Tuesday, "pushups", 30).unwrap();
        weekly.add_or_update(TemplateDay::Tuesday, "plank", 5).unwrap();

        let planned = weekly.list(TemplateDay::Tuesday).unwrap();
        let names: Vec<&str> = planned.iter().map(|w| w.exercise_name.as_str()).collect();
        assert_eq!(names, vec!["pushups", "plank"]);
    }

    #[test_context(WeeklyTestContext)]
    #[test]
    fn test_remove_reports_membership(_ctx: &mut WeeklyTestContext) {
        let store = Store::new().unwrap();
        let weekly = Weekly::new(&store);

        weekly.add_or_update(TemplateDay::Friday, "plank", 5).unwrap();
        assert!(weekly.remove(TemplateDay::Friday, "plank").unwrap());
        assert!(!weekly.remove(TemplateDay::Friday, "plank").unwrap());
    }

    #[test_context(WeeklyTestContext)]
    #[test]
    fn test_clearing_one_day_spares_the_rest(_ctx: &mut WeeklyTestContext) {
        let store = Store::new().unwrap();
        let weekly = Weekly::new(&store);

        weekly.add_or_update(TemplateDay::Monday, "pushups", 30).unwrap();
        weekly.add_or_update(TemplateDay::Tuesday, "plank", 5).unwrap();

        weekly.clear_day(TemplateDay::Monday).unwrap();
        assert!(weekly.list(TemplateDay::Monday).unwrap().is_empty());
        assert_eq!(weekly.list(TemplateDay::Tuesday).unwrap().len(), 1);

        weekly.clear_all().unwrap();
        assert!(weekly.timetable().unwrap().is_empty());
    }

    #[test_context(WeeklyTestContext)]
    #[test]
    fn test_apply_seeds_only_missing_entries(_ctx: &mut WeeklyTestContext) {
        let store = Store::new().unwrap();
        let weekly = Weekly::new(&store);

        weekly.add_or_update(TemplateDay::Monday, "pushups", 30).unwrap();
        weekly.add_or_update(TemplateDay::Monday, "plank", 5).unwrap();
        Logs::new(&store).record(monday(), "pushups", 10.0, RecordMode::Add).unwrap();

        // Only plank is missing, pushups already has a value
        assert_eq!(weekly.apply_to_day(monday()).unwrap(), Some(1));

        let data = store.load().unwrap();
        assert_eq!(logs::amount_for(&data, monday(), "pushups"), 10.0);
        assert_eq!(data.logs[&date_key(monday())]["plank"], 0.0);

        // Reapplying changes nothing
        assert_eq!(weekly.apply_to_day(monday()).unwrap(), Some(0));
        let data = store.load().unwrap();
        assert_eq!(logs::amount_for(&data, monday(), "pushups"), 10.0);
    }

    #[test_context(WeeklyTestContext)]
    #[test]
    fn test_apply_on_sunday_is_a_rest_day(_ctx: &mut WeeklyTestContext) {
        let store = Store::new().unwrap();
        let weekly = Weekly::new(&store);
        weekly.add_or_update(TemplateDay::Monday, "pushups", 30).unwrap();

        let sunday = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(weekly.apply_to_day(sunday).unwrap(), None);

        let data = store.load().unwrap();
        assert!(!data.logs.contains_key(&date_key(sunday)));
    }

    #[test_context(WeeklyTestContext)]
    #[test]
    fn test_apply_with_empty_plan_creates_no_entry(_ctx: &mut WeeklyTestContext) {
        let store = Store::new().unwrap();

        assert_eq!(Weekly::new(&store).apply_to_day(monday()).unwrap(), Some(0));

        let data = store.load().unwrap();
        assert!(!data.logs.contains_key(&date_key(monday())));
    }
}
