//! List the configured exercises.

use crate::data::exercises::Exercises;
use crate::data::store::Store;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

/// Prints the exercise registry as a table.
pub fn cmd() -> Result<()> {
    let store = Store::new()?;
    let exercises = Exercises::new(&store).list()?;

    if exercises.is_empty() {
        msg_info!(Message::NoExercisesConfigured);
        return Ok(());
    }

    msg_print!(Message::ExercisesHeader, true);
    View::exercises(&exercises)
}
