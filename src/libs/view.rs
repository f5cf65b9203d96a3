use crate::data::logs;
use crate::data::model::{Exercise, PlannedWorkout, WorkoutData};
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};
use std::collections::BTreeMap;

const PROGRESS_BAR_WIDTH: usize = 20;
const DEFAULT_UNIT: &str = "reps";

pub struct View {}

impl View {
    pub fn exercises(exercises: &Vec<(String, Exercise)>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["NAME", "DAILY TARGET", "UNIT"]);
        for (name, exercise) in exercises {
            table.add_row(row![name, exercise.daily_target, exercise.unit]);
        }
        table.printstd();

        Ok(())
    }

    pub fn day_progress(data: &WorkoutData, date: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "EXERCISE", "PROGRESS", "BAR", "%"]);
        for (name, exercise) in &data.exercises {
            let current = logs::amount_for(data, date, name);
            let percent = logs::completion_percentage(current, exercise.daily_target);
            let icon = if current >= exercise.daily_target { "✓" } else { "○" };
            table.add_row(row![
                icon,
                name,
                format!("{}/{} {}", current, exercise.daily_target, exercise.unit),
                progress_bar(percent),
                format!("{}%", percent)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn weekly_day(entries: &[PlannedWorkout], exercises: &BTreeMap<String, Exercise>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EXERCISE", "REPS", "UNIT"]);
        for entry in entries {
            let unit = exercises
                .get(&entry.exercise_name)
                .map(|e| e.unit.as_str())
                .unwrap_or(DEFAULT_UNIT);
            table.add_row(row![entry.exercise_name, entry.reps, unit]);
        }
        table.printstd();

        Ok(())
    }
}

fn progress_bar(percent: i64) -> String {
    let capped = percent.clamp(0, 100) as usize;
    let filled = (capped * PROGRESS_BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(PROGRESS_BAR_WIDTH - filled))
}
