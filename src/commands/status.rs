//! Display today's workout status.

use crate::data::store::Store;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Local;

/// Prints today's progress for every registered exercise.
pub fn cmd() -> Result<()> {
    let store = Store::new()?;
    let data = store.load()?;

    if data.exercises.is_empty() {
        msg_info!(Message::NoExercisesConfigured);
        return Ok(());
    }

    msg_print!(Message::StatusHeader, true);
    View::day_progress(&data, Local::now().date_naive())
}
