//! Git-based backup for the workout data directory.
//!
//! The data directory doubles as a git repository so that `data.json` can
//! be versioned and pushed to a personal remote. Everything shells out to
//! the system `git` binary; no libgit2 linkage. Push problems are reported
//! as a [`PushOutcome`] rather than an error, since a failed backup must
//! never take down the command that triggered it.

use crate::data::model::date_key;
use crate::libs::messages::Message;
use chrono::Local;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Result of a push attempt, shown verbatim to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct PushOutcome {
    pub success: bool,
    pub message: String,
}

/// Backup target for the workout data directory.
///
/// Abstracting the backup behind a trait keeps the commands and the
/// dashboard independent of git so tests can substitute a fake.
pub trait BackupPort {
    /// Ensures a repository exists at the data directory, creating one if
    /// needed. Returns `false` when creation failed.
    fn ensure_repo(&self) -> bool;

    /// Stages all changes, commits them with a date-stamped message and
    /// pushes to `origin main`. A clean tree is a successful no-op.
    fn push(&self) -> PushOutcome;

    /// Short human-readable state of the working tree.
    fn status(&self) -> String;
}

/// [`BackupPort`] implementation backed by the system `git` binary.
pub struct GitBackup {
    dir: PathBuf,
}

impl GitBackup {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    fn git(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new("git").args(args).current_dir(&self.dir).stdin(Stdio::null()).output()
    }

    fn git_ok(&self, args: &[&str]) -> bool {
        self.git(args).map(|out| out.status.success()).unwrap_or(false)
    }

    fn has_remote(&self) -> bool {
        self.git(&["remote", "-v"])
            .ok()
            .filter(|out| out.status.success())
            .map(|out| String::from_utf8_lossy(&out.stdout).contains("origin"))
            .unwrap_or(false)
    }
}

impl BackupPort for GitBackup {
    fn ensure_repo(&self) -> bool {
        self.git_ok(&["rev-parse", "--git-dir"]) || self.git_ok(&["init"])
    }

    fn push(&self) -> PushOutcome {
        self.ensure_repo();

        match self.git(&["add", "."]) {
            Ok(out) if out.status.success() => {}
            Ok(out) => return failed(command_failure(&out)),
            Err(err) => return failed(err.to_string()),
        }

        // diff --cached --quiet exits zero when nothing is staged
        if self.git_ok(&["diff", "--cached", "--quiet"]) {
            return PushOutcome {
                success: true,
                message: Message::BackupNoChanges.to_string(),
            };
        }

        let commit_message = format!("Workout update: {}", date_key(Local::now().date_naive()));
        match self.git(&["commit", "-m", &commit_message]) {
            Ok(out) if out.status.success() => {}
            Ok(out) => return failed(command_failure(&out)),
            Err(err) => return failed(err.to_string()),
        }

        if !self.has_remote() {
            return PushOutcome {
                success: false,
                message: Message::BackupNoRemote.to_string(),
            };
        }

        match self.git(&["push", "origin", "main"]) {
            Ok(out) if out.status.success() => PushOutcome {
                success: true,
                message: Message::BackupPushed.to_string(),
            },
            Ok(out) => failed(command_failure(&out)),
            Err(err) => failed(err.to_string()),
        }
    }

    fn status(&self) -> String {
        match self.git(&["status", "--short"]) {
            Ok(out) if out.status.success() => {
                let listing = String::from_utf8_lossy(&out.stdout).trim_end().to_string();
                if listing.is_empty() {
                    Message::BackupClean.to_string()
                } else {
                    listing
                }
            }
            _ => Message::BackupNotInitialized.to_string(),
        }
    }
}

fn failed<S: Into<String>>(detail: S) -> PushOutcome {
    PushOutcome {
        success: false,
        message: Message::BackupFailed(detail.into()).to_string(),
    }
}

fn command_failure(out: &Output) -> String {
    let stderr = String::from_utf8_lossy(&out.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        out.status.to_string()
    } else {
        stderr.to_string()
    }
}
