//! Log exercise progress for today.
//!
//! Adds an amount on top of whatever is already recorded for the exercise
//! today, so progress accumulated across several sessions sums up. Use
//! `wout set` instead to overwrite the day's value.

use crate::data::exercises::Exercises;
use crate::data::logs::{completion_percentage, Logs, RecordMode};
use crate::data::store::Store;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Command-line arguments for the add command.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Exercise name (case-insensitive)
    ///
    /// Must match a registered exercise. Run `wout list` to see what is
    /// configured.
    pub exercise: String,

    /// Amount to add, in the exercise's unit
    ///
    /// Accepts fractional values, e.g. `2.5` for two and a half kilometers.
    pub amount: f64,
}

/// Executes the add command to accumulate progress for today.
///
/// The amount must be a positive number and the exercise must exist in the
/// registry. On success the day's running total is printed together with
/// the completion percentage against the daily target.
///
/// # Examples
///
/// ```bash
/// # Log a five kilometer run
/// wout add running 5
///
/// # A second run later the same day accumulates
/// wout add running 2.5
/// ```
pub fn cmd(args: AddArgs) -> Result<()> {
    if !args.amount.is_finite() || args.amount <= 0.0 {
        msg_bail_anyhow!(Message::AmountMustBePositive);
    }

    let store = Store::new()?;
    let exercises = Exercises::new(&store);
    let Some(exercise) = exercises.get(&args.exercise)? else {
        let available: Vec<String> = exercises.list()?.into_iter().map(|(name, _)| name).collect();
        msg_bail_anyhow!(Message::ExerciseNotFoundWithAvailable(args.exercise, available.join(", ")));
    };

    let today = Local::now().date_naive();
    let total = Logs::new(&store).record(today, &args.exercise, args.amount, RecordMode::Add)?;

    msg_success!(Message::ProgressAdded(args.amount, exercise.unit.clone(), args.exercise.to_lowercase()));
    msg_print!(Message::ProgressLine(
        total,
        exercise.daily_target,
        exercise.unit,
        completion_percentage(total, exercise.daily_target)
    ));

    Ok(())
}
