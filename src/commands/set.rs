//! Overwrite today's value for an exercise.
//!
//! Unlike `wout add`, this replaces the day's total outright. Setting zero
//! resets the day, e.g. after a mistaken entry.

use crate::data::exercises::Exercises;
use crate::data::logs::{completion_percentage, Logs, RecordMode};
use crate::data::store::Store;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::Args;

/// Command-line arguments for the set command.
#[derive(Debug, Args)]
pub struct SetArgs {
    /// Exercise name (case-insensitive)
    pub exercise: String,

    /// Exact value for today, in the exercise's unit
    pub amount: f64,
}

/// Executes the set command to replace today's value.
///
/// The amount must be zero or positive; the exercise must be registered.
pub fn cmd(args: SetArgs) -> Result<()> {
    if !args.amount.is_finite() || args.amount < 0.0 {
        msg_bail_anyhow!(Message::AmountMustBeNonNegative);
    }

    let store = Store::new()?;
    let exercises = Exercises::new(&store);
    let Some(exercise) = exercises.get(&args.exercise)? else {
        let available: Vec<String> = exercises.list()?.into_iter().map(|(name, _)| name).collect();
        msg_bail_anyhow!(Message::ExerciseNotFoundWithAvailable(args.exercise, available.join(", ")));
    };

    let today = Local::now().date_naive();
    let total = Logs::new(&store).record(today, &args.exercise, args.amount, RecordMode::Set)?;

    msg_success!(Message::ProgressSet(args.exercise.to_lowercase(), total, exercise.unit.clone()));
    msg_print!(Message::ProgressLine(
        total,
        exercise.daily_target,
        exercise.unit,
        completion_percentage(total, exercise.daily_target)
    ));

    Ok(())
}
