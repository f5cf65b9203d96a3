#[cfg(test)]
mod tests {
    use chrono::Local;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use wout::commands::{add, config, list, push, set, status, weekly};
    use wout::data::logs;
    use wout::data::model::{date_key, TemplateDay};
    use wout::data::store::Store;

    struct CommandTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("USERPROFILE", temp_dir.path());
            CommandTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command_logs_todays_progress(_ctx: &mut CommandTestContext) {
        add::cmd(add::AddArgs {
            exercise: "Pushups".to_string(),
            amount: 25.0,
        })
        .unwrap();

        let store = Store::new().unwrap();
        let data = store.load().unwrap();
        let today = Local::now().date_naive();
        assert_eq!(logs::amount_for(&data, today, "pushups"), 25.0);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command_rejects_bad_amounts(_ctx: &mut CommandTestContext) {
        let zero = add::cmd(add::AddArgs {
            exercise: "pushups".to_string(),
            amount: 0.0,
        });
        assert!(zero.is_err());

        let negative = add::cmd(add::AddArgs {
            exercise: "pushups".to_string(),
            amount: -3.0,
        });
        assert!(negative.is_err());

        let not_a_number = add::cmd(add::AddArgs {
            exercise: "pushups".to_string(),
            amount: f64::NAN,
        });
        assert!(not_a_number.is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command_lists_alternatives_for_unknown_name(_ctx: &mut CommandTestContext) {
        let result = add::cmd(add::AddArgs {
            exercise: "rowing".to_string(),
            amount: 5.0,
        });

        let err = result.unwrap_err().to_string();
        assert!(err.contains("rowing"));
        assert!(err.contains("Available exercises"));
        assert!(err.contains("running"));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_set_command_overwrites_the_day(_ctx: &mut CommandTestContext) {
        add::cmd(add::AddArgs {
            exercise: "plank".to_string(),
            amount: 10.0,
        })
        .unwrap();
        set::cmd(set::SetArgs {
            exercise: "plank".to_string(),
            amount: 4.0,
        })
        .unwrap();

        let store = Store::new().unwrap();
        let data = store.load().unwrap();
        let today = Local::now().date_naive();
        assert_eq!(logs::amount_for(&data, today, "plank"), 4.0);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_set_command_accepts_zero(_ctx: &mut CommandTestContext) {
        set::cmd(set::SetArgs {
            exercise: "plank".to_string(),
            amount: 0.0,
        })
        .unwrap();

        let negative = set::cmd(set::SetArgs {
            exercise: "plank".to_string(),
            amount: -1.0,
        });
        assert!(negative.is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_config_add_and_remove(_ctx: &mut CommandTestContext) {
        config::cmd_add(config::ConfigAddArgs {
            name: "Rowing".to_string(),
            unit: "km".to_string(),
            target: 5.0,
        })
        .unwrap();

        let store = Store::new().unwrap();
        assert!(store.load().unwrap().exercises.contains_key("rowing"));

        config::cmd_remove(config::ConfigRemoveArgs {
            name: "rowing".to_string(),
            force: true,
        })
        .unwrap();
        assert!(!store.load().unwrap().exercises.contains_key("rowing"));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_config_add_validates_input(_ctx: &mut CommandTestContext) {
        let bad_target = config::cmd_add(config::ConfigAddArgs {
            name: "rowing".to_string(),
            unit: "km".to_string(),
            target: 0.0,
        });
        assert!(bad_target.is_err());

        let blank_unit = config::cmd_add(config::ConfigAddArgs {
            name: "rowing".to_string(),
            unit: "   ".to_string(),
            target: 5.0,
        });
        assert!(blank_unit.is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_config_remove_unknown_exercise(_ctx: &mut CommandTestContext) {
        let result = config::cmd_remove(config::ConfigRemoveArgs {
            name: "rowing".to_string(),
            force: true,
        });
        assert!(result.is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_weekly_add_then_apply_seeds_the_day(_ctx: &mut CommandTestContext) {
        weekly::cmd_add(weekly::WeeklyAddArgs {
            day: TemplateDay::Monday,
            exercise: "pushups".to_string(),
            reps: 30,
        })
        .unwrap();

        // 2026-08-24 is a Monday
        weekly::cmd_apply(weekly::WeeklyApplyArgs {
            date: "2026-08-24".to_string(),
        })
        .unwrap();

        let store = Store::new().unwrap();
        let data = store.load().unwrap();
        assert_eq!(data.logs["2026-08-24"]["pushups"], 0.0);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_weekly_add_rejects_zero_reps(_ctx: &mut CommandTestContext) {
        let result = weekly::cmd_add(weekly::WeeklyAddArgs {
            day: TemplateDay::Monday,
            exercise: "pushups".to_string(),
            reps: 0,
        });
        assert!(result.is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_weekly_apply_rejects_malformed_date(_ctx: &mut CommandTestContext) {
        let result = weekly::cmd_apply(weekly::WeeklyApplyArgs {
            date: "24.08.2026".to_string(),
        });
        assert!(result.is_err());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_weekly_apply_on_sunday(_ctx: &mut CommandTestContext) {
        weekly::cmd_add(weekly::WeeklyAddArgs {
            day: TemplateDay::Monday,
            exercise: "pushups".to_string(),
            reps: 30,
        })
        .unwrap();

        // 2026-08-23 is a Sunday; applying is a no-op, not an error
        weekly::cmd_apply(weekly::WeeklyApplyArgs {
            date: "2026-08-23".to_string(),
        })
        .unwrap();

        let store = Store::new().unwrap();
        let data = store.load().unwrap();
        assert!(!data.logs.contains_key("2026-08-23"));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_weekly_clear_all_with_force(_ctx: &mut CommandTestContext) {
        weekly::cmd_add(weekly::WeeklyAddArgs {
            day: TemplateDay::Tuesday,
            exercise: "plank".to_string(),
            reps: 5,
        })
        .unwrap();

        weekly::cmd_clear(weekly::WeeklyClearArgs { day: None, force: true }).unwrap();

        let store = Store::new().unwrap();
        let data = store.load().unwrap();
        assert!(data.weekly_template.unwrap().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_read_only_commands_render(_ctx: &mut CommandTestContext) {
        add::cmd(add::AddArgs {
            exercise: "running".to_string(),
            amount: 5.0,
        })
        .unwrap();

        status::cmd().unwrap();
        list::cmd().unwrap();
        weekly::cmd_list(weekly::WeeklyListArgs { day: None }).unwrap();
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_push_command_never_fails(_ctx: &mut CommandTestContext) {
        // Reports the outcome instead of propagating backup errors
        push::cmd().unwrap();
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_logged_amounts_key_by_date(_ctx: &mut CommandTestContext) {
        add::cmd(add::AddArgs {
            exercise: "running".to_string(),
            amount: 2.5,
        })
        .unwrap();

        let store = Store::new().unwrap();
        let data = store.load().unwrap();
        let key = date_key(Local::now().date_naive());
        assert!(data.logs.contains_key(&key));
    }
}
