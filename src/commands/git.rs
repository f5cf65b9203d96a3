//! Inspect and initialize the data directory's git repository.

use crate::data::store::Store;
use crate::libs::git::{BackupPort, GitBackup};
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print, msg_success};
use anyhow::Result;

/// Initializes a git repository in the data directory.
///
/// Loading the store first guarantees the directory and a data file exist,
/// so the fresh repository is never empty.
pub fn cmd_init() -> Result<()> {
    let store = Store::new()?;
    store.load()?;
    let backup = GitBackup::new(store.data_dir());

    if !backup.ensure_repo() {
        msg_bail_anyhow!(Message::GitInitFailed);
    }

    msg_success!(Message::GitRepoInitialized(store.data_dir().display().to_string()));
    msg_print!(Message::GitRemoteHint);
    Ok(())
}

/// Prints the short git status of the data directory.
pub fn cmd_status() -> Result<()> {
    let store = Store::new()?;
    let backup = GitBackup::new(store.data_dir());

    msg_print!(Message::GitStatusHeader);
    msg_print!(backup.status());
    Ok(())
}
