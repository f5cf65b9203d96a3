//! Manage the weekly workout timetable.
//!
//! The timetable plans exercises per weekday, Monday through Saturday.
//! Planning is separate from logging: a planned exercise only shows up in
//! a day's log once `weekly-apply` seeds it (with a zero amount) or an
//! amount is recorded directly.

use crate::data::exercises::Exercises;
use crate::data::model::{date_key, TemplateDay, WeeklyTemplate, WorkoutData};
use crate::data::store::Store;
use crate::data::template::Weekly;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Command-line arguments for the weekly-add command.
#[derive(Debug, Args)]
pub struct WeeklyAddArgs {
    /// Day of the week to plan
    #[arg(value_enum, ignore_case = true)]
    pub day: TemplateDay,

    /// Exercise name (case-insensitive)
    pub exercise: String,

    /// Planned repetitions
    pub reps: u32,
}

/// Command-line arguments for the weekly-remove command.
#[derive(Debug, Args)]
pub struct WeeklyRemoveArgs {
    /// Day of the week to unplan
    #[arg(value_enum, ignore_case = true)]
    pub day: TemplateDay,

    /// Exercise name (case-insensitive)
    pub exercise: String,
}

/// Command-line arguments for the weekly-list command.
#[derive(Debug, Args)]
pub struct WeeklyListArgs {
    /// Day to list; omit for the whole week
    #[arg(value_enum, ignore_case = true)]
    pub day: Option<TemplateDay>,
}

/// Command-line arguments for the weekly-clear command.
#[derive(Debug, Args)]
pub struct WeeklyClearArgs {
    /// Day to clear; omit to clear every day
    #[arg(value_enum, ignore_case = true)]
    pub day: Option<TemplateDay>,

    /// Skip the confirmation prompt
    #[arg(long, help = "Skip confirmation prompt")]
    pub force: bool,
}

/// Command-line arguments for the weekly-apply command.
#[derive(Debug, Args)]
pub struct WeeklyApplyArgs {
    /// Date to apply the plan to
    ///
    /// Accepts dates in 'YYYY-MM-DD' format or the special keyword 'today'.
    /// Applying seeds the day's log with zero entries for every planned
    /// exercise that has nothing recorded yet.
    #[arg(long, short, default_value = "today", help = "Date to apply the plan to (YYYY-MM-DD or 'today')")]
    pub date: String,
}

/// Plans an exercise for a day, or updates its reps when already planned.
pub fn cmd_add(args: WeeklyAddArgs) -> Result<()> {
    if args.reps == 0 {
        msg_bail_anyhow!(Message::RepsMustBePositive);
    }

    let store = Store::new()?;
    let exercises = Exercises::new(&store);
    if exercises.get(&args.exercise)?.is_none() {
        let available: Vec<String> = exercises.list()?.into_iter().map(|(name, _)| name).collect();
        msg_bail_anyhow!(Message::ExerciseNotFoundWithAvailable(args.exercise, available.join(", ")));
    }

    Weekly::new(&store).add_or_update(args.day, &args.exercise, args.reps)?;
    msg_success!(Message::WeeklyWorkoutAdded(args.exercise.to_lowercase(), args.reps, args.day));
    Ok(())
}

/// Unplans an exercise from a day.
pub fn cmd_remove(args: WeeklyRemoveArgs) -> Result<()> {
    let store = Store::new()?;
    let removed = Weekly::new(&store).remove(args.day, &args.exercise)?;

    if removed {
        msg_success!(Message::WeeklyWorkoutRemoved(args.exercise.to_lowercase(), args.day));
    } else {
        msg_info!(Message::WeeklyWorkoutNotPlanned(args.exercise.to_lowercase(), args.day));
    }
    Ok(())
}

/// Lists planned workouts for one day or the whole week.
pub fn cmd_list(args: WeeklyListArgs) -> Result<()> {
    let store = Store::new()?;
    let data = store.load()?;
    let timetable = data.weekly_template.clone().unwrap_or_default();

    match args.day {
        Some(day) => print_day(day, &timetable, &data)?,
        None => {
            msg_print!(Message::WeeklyHeader, true);
            for day in TemplateDay::ALL {
                print_day(day, &timetable, &data)?;
            }
        }
    }
    Ok(())
}

/// Clears one day or, after confirmation, the whole timetable.
pub fn cmd_clear(args: WeeklyClearArgs) -> Result<()> {
    let store = Store::new()?;
    let weekly = Weekly::new(&store);

    match args.day {
        Some(day) => {
            weekly.clear_day(day)?;
            msg_success!(Message::WeeklyDayCleared(day));
        }
        None => {
            if !args.force {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmClearWeekly.to_string())
                    .default(false)
                    .interact()?;

                if !confirmed {
                    msg_info!(Message::OperationCancelled);
                    return Ok(());
                }
            }
            weekly.clear_all()?;
            msg_success!(Message::WeeklyAllCleared);
        }
    }
    Ok(())
}

/// Seeds a day's log from the weekly plan.
pub fn cmd_apply(args: WeeklyApplyArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let store = Store::new()?;

    match Weekly::new(&store).apply_to_day(date)? {
        Some(seeded) => {
            msg_success!(Message::WeeklyApplied(date_key(date), seeded));
        }
        None => {
            msg_info!(Message::WeeklyApplySunday);
        }
    }
    Ok(())
}

fn print_day(day: TemplateDay, timetable: &WeeklyTemplate, data: &WorkoutData) -> Result<()> {
    msg_print!(Message::WeeklyDayHeader(day.title().to_string()));
    let entries = timetable.day(day);

    if entries.is_empty() {
        msg_info!(Message::NoWorkoutsScheduled);
        return Ok(());
    }
    View::weekly_day(entries, &data.exercises)
}

/// Parses a date string into a structured date value.
///
/// Accepts the special keyword 'today' (case-insensitive) or an explicit
/// ISO date such as `2025-08-25`.
fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.to_lowercase() == "today" {
        Ok(Local::now().date_naive())
    } else {
        Ok(NaiveDate::parse_from_str(date_str, "%Y-%m-%d")?)
    }
}
