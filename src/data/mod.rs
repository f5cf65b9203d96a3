//! Data layer for the wout application.
//!
//! Provides the persisted document model and the engines that operate on
//! it. All state lives in one JSON file under the user's data directory;
//! the [`store::Store`] owns that file and the engines borrow the store,
//! so a command wires up exactly the managers it needs.
//!
//! ## Layout
//!
//! - **Model**: document types and their serde mapping
//! - **Store**: load/save/mutate cycle over the data file
//! - **Engines**: exercise registry, daily logs, weekly timetable
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wout::data::exercises::Exercises;
//! use wout::data::logs::{Logs, RecordMode};
//! use wout::data::store::Store;
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = Store::new()?;
//! Exercises::new(&store).add("rowing", "km", 5.0)?;
//! let today = chrono::Local::now().date_naive();
//! Logs::new(&store).record(today, "rowing", 2.5, RecordMode::Add)?;
//! # Ok(())
//! # }
//! ```

/// Typed errors for data layer failures.
pub mod error;

/// Exercise registry management.
pub mod exercises;

/// Daily progress recording and day evaluation.
pub mod logs;

/// Document types and serde mapping.
pub mod model;

/// JSON document persistence.
pub mod store;

/// Weekly timetable management.
pub mod template;
