//! Manage the exercise registry.
//!
//! `config-add` registers a new exercise or redefines an existing one;
//! `config-remove` deletes a definition. Removal keeps logged history and
//! timetable entries for the name, so past days still render.

use crate::data::exercises::Exercises;
use crate::data::store::Store;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Command-line arguments for the config-add command.
#[derive(Debug, Args)]
pub struct ConfigAddArgs {
    /// Exercise name; stored lowercase
    pub name: String,

    /// Unit label, e.g. km, min or reps
    pub unit: String,

    /// Daily target in the given unit
    pub target: f64,
}

/// Command-line arguments for the config-remove command.
#[derive(Debug, Args)]
pub struct ConfigRemoveArgs {
    /// Exercise name to remove
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(long, help = "Skip confirmation prompt")]
    pub force: bool,
}

/// Registers an exercise, or redefines it when the name is already taken.
pub fn cmd_add(args: ConfigAddArgs) -> Result<()> {
    if !args.target.is_finite() || args.target <= 0.0 {
        msg_bail_anyhow!(Message::TargetMustBePositive);
    }
    let unit = args.unit.trim();
    if unit.is_empty() {
        msg_bail_anyhow!(Message::UnitMustNotBeEmpty);
    }

    let store = Store::new()?;
    Exercises::new(&store).add(&args.name, unit, args.target)?;

    msg_success!(Message::ExerciseAdded(args.name.to_lowercase(), args.target, unit.to_string()));
    Ok(())
}

/// Removes an exercise definition after confirmation.
pub fn cmd_remove(args: ConfigRemoveArgs) -> Result<()> {
    let store = Store::new()?;
    let exercises = Exercises::new(&store);

    if exercises.get(&args.name)?.is_none() {
        msg_bail_anyhow!(Message::ExerciseNotFound(args.name));
    }

    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveExercise(args.name.to_lowercase()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    exercises.remove(&args.name)?;
    msg_success!(Message::ExerciseRemoved(args.name.to_lowercase()));
    Ok(())
}
