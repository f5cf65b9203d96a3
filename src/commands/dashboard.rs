//! Open the interactive workout dashboard.

use crate::data::store::Store;
use crate::tui::App;
use anyhow::Result;

/// Launches the full-screen dashboard session.
pub fn cmd() -> Result<()> {
    let store = Store::new()?;
    App::new(store)?.run()
}
