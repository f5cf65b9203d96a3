//! Core library modules for the wout application.
//!
//! Serves as the main entry point for the shared library components,
//! providing centralized access to infrastructure used across commands
//! and the dashboard.
//!
//! ## Features
//!
//! - **Storage**: per-user data directory resolution
//! - **Messaging**: the message catalogue and output macros
//! - **Presentation**: table rendering for command output
//! - **Backup**: git integration for the data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wout::libs::git::{BackupPort, GitBackup};
//! use wout::libs::storage::DataStorage;
//!
//! let backup = GitBackup::new(DataStorage::new().dir());
//! let outcome = backup.push();
//! println!("{}", outcome.message);
//! ```

pub mod git;
pub mod messages;
pub mod storage;
pub mod view;
