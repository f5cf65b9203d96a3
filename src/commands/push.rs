//! Commit and push workout data to the backup remote.

use crate::data::store::Store;
use crate::libs::git::{BackupPort, GitBackup};
use crate::libs::messages::Message;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;

/// Stages, commits and pushes the data directory.
///
/// Backup failures are reported but never fail the command; the data on
/// disk is already safe and a push can be retried once the remote is
/// reachable.
pub fn cmd() -> Result<()> {
    let store = Store::new()?;
    // Materializes the data directory so there is something to commit.
    store.load()?;
    let backup = GitBackup::new(store.data_dir());

    msg_print!(Message::GitPushing);
    let outcome = backup.push();

    if outcome.success {
        msg_success!(outcome.message);
    } else {
        msg_error!(outcome.message);
    }
    Ok(())
}
