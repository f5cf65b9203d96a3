#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use wout::data::logs::{self, DayStatus, Logs, RecordMode};
    use wout::data::model::date_key;
    use wout::data::store::Store;

    struct ProgressTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ProgressTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            ProgressTestContext { _temp_dir: temp_dir }
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_add_accumulates_within_a_day(_ctx: &mut ProgressTestContext) {
        let store = Store::new().unwrap();
        let progress = Logs::new(&store);

        assert_eq!(progress.record(day(), "running", 2.5, RecordMode::Add).unwrap(), 2.5);
        assert_eq!(progress.record(day(), "running", 3.0, RecordMode::Add).unwrap(), 5.5);

        let data = store.load().unwrap();
        assert_eq!(logs::amount_for(&data, day(), "running"), 5.5);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_set_overwrites_the_day(_ctx: &mut ProgressTestContext) {
        let store = Store::new().unwrap();
        let progress = Logs::new(&store);

        progress.record(day(), "pushups", 30.0, RecordMode::Add).unwrap();
        assert_eq!(progress.record(day(), "pushups", 4.0, RecordMode::Set).unwrap(), 4.0);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_unknown_exercise_writes_nothing(_ctx: &mut ProgressTestContext) {
        let store = Store::new().unwrap();

        let result = Logs::new(&store).record(day(), "rowing", 5.0, RecordMode::Add);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("rowing"));

        // The refused record left no phantom day entry behind
        let data = store.load().unwrap();
        assert!(!data.logs.contains_key(&date_key(day())));
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_amount_defaults_to_zero(_ctx: &mut ProgressTestContext) {
        let store = Store::new().unwrap();
        let data = store.load().unwrap();

        assert_eq!(logs::amount_for(&data, day(), "running"), 0.0);
    }

    #[test]
    fn test_completion_percentage_rounds() {
        assert_eq!(logs::completion_percentage(7.5, 10.0), 75);
        assert_eq!(logs::completion_percentage(1.0, 3.0), 33);
        assert_eq!(logs::completion_percentage(2.0, 3.0), 67);
        // Overachieving reports more than 100
        assert_eq!(logs::completion_percentage(12.0, 10.0), 120);
        // A target of zero can never be met
        assert_eq!(logs::completion_percentage(5.0, 0.0), 0);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_day_status_transitions(_ctx: &mut ProgressTestContext) {
        let store = Store::new().unwrap();
        let progress = Logs::new(&store);
        let today = day();

        // Nothing logged yet
        let data = store.load().unwrap();
        assert_eq!(logs::day_status(&data, today, today), DayStatus::None);

        // One of four targets met
        progress.record(today, "plank", 10.0, RecordMode::Set).unwrap();
        let data = store.load().unwrap();
        assert_eq!(logs::day_status(&data, today, today), DayStatus::Partial);

        // All four targets met
        progress.record(today, "running", 10.0, RecordMode::Set).unwrap();
        progress.record(today, "pushups", 100.0, RecordMode::Set).unwrap();
        progress.record(today, "pullups", 50.0, RecordMode::Set).unwrap();
        let data = store.load().unwrap();
        assert_eq!(logs::day_status(&data, today, today), DayStatus::Complete);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_day_status_below_target_is_none(_ctx: &mut ProgressTestContext) {
        let store = Store::new().unwrap();
        let today = day();

        // Progress without any met target does not count as partial
        Logs::new(&store).record(today, "running", 4.0, RecordMode::Set).unwrap();
        let data = store.load().unwrap();
        assert_eq!(logs::day_status(&data, today, today), DayStatus::None);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_day_status_with_empty_registry(_ctx: &mut ProgressTestContext) {
        let store = Store::new().unwrap();
        store
            .mutate(|data| {
                data.exercises.clear();
                Ok(())
            })
            .unwrap();

        // Nothing registered means nothing to meet
        let data = store.load().unwrap();
        let today = day();
        assert_eq!(logs::day_status(&data, today, today), DayStatus::None);
    }

    #[test_context(ProgressTestContext)]
    #[test]
    fn test_tomorrow_is_future(_ctx: &mut ProgressTestContext) {
        let store = Store::new().unwrap();
        let data = store.load().unwrap();
        let today = day();

        let tomorrow = today.succ_opt().unwrap();
        assert_eq!(logs::day_status(&data, tomorrow, today), DayStatus::Future);
    }
}
