//! # Wout - Workout Tracking and Planning
//!
//! A command-line utility for logging daily workout progress against
//! per-exercise targets, planning a weekly timetable, and backing the
//! data up to a git repository.
//!
//! ## Features
//!
//! - **Progress Logging**: Add to or overwrite the amount done per exercise and day
//! - **Exercise Registry**: Configurable exercises with a unit and a daily target
//! - **Weekly Plan**: Monday through Saturday timetable seeded onto training days
//! - **Interactive Dashboard**: Terminal UI with a yearly activity strip and calendar
//! - **Git Backup**: Commit and push the data directory to a GitHub remote
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wout::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod data;
pub mod libs;
pub mod tui;
