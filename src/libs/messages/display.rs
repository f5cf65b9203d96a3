//! Display implementation for wout application messages.
//!
//! This module provides the `Display` trait implementation for the `Message`
//! enum, converting structured message data into the human-readable text
//! shown in the terminal. It is the single source of truth for all
//! user-facing wording in the application.
//!
//! ## Message Categories
//!
//! - **Exercise Messages**: registry management and lookups
//! - **Progress Messages**: daily logging and status output
//! - **Weekly Plan Messages**: timetable management
//! - **Git Backup Messages**: repository state and push outcomes
//! - **Dashboard Messages**: banners shown inside the interactive session
//!
//! ## Text Formatting Standards
//!
//! Messages use sentence case, state the outcome directly, and include the
//! relevant parameter values. Error messages name the problem and, where a
//! concrete next step exists, spell it out.
//!
//! ## Parameter Interpolation
//!
//! ```rust
//! use wout::libs::messages::Message;
//!
//! let message = Message::ExerciseRemoved("plank".to_string());
//! assert_eq!(message.to_string(), "Removed exercise: plank");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === EXERCISE MESSAGES ===
            Message::ExerciseAdded(name, target, unit) => format!("Added exercise: {} ({} {}/day)", name, target, unit),
            Message::ExerciseRemoved(name) => format!("Removed exercise: {}", name),
            Message::ExerciseNotFound(name) => format!("Exercise \"{}\" not found", name),
            Message::ExerciseNotFoundWithAvailable(name, available) => {
                format!("Exercise \"{}\" not found. Available exercises: {}", name, available)
            }
            Message::ExercisesHeader => "Configured Exercises".to_string(),
            Message::NoExercisesConfigured => "No exercises configured. Add one with 'wout config-add <name> <unit> <target>'".to_string(),

            // === PROGRESS MESSAGES ===
            Message::ProgressAdded(amount, unit, name) => format!("Added {} {} to {}", amount, unit, name),
            Message::ProgressSet(name, amount, unit) => format!("Set {} to {} {}", name, amount, unit),
            Message::ProgressLine(current, target, unit, percent) => {
                format!("   Progress: {}/{} {} ({}%)", current, target, unit, percent)
            }
            Message::StatusHeader => "Today's Workout Status".to_string(),
            Message::AmountMustBePositive => "Amount must be a positive number".to_string(),
            Message::AmountMustBeNonNegative => "Amount must be zero or a positive number".to_string(),
            Message::TargetMustBePositive => "Daily target must be a positive number".to_string(),
            Message::UnitMustNotBeEmpty => "Unit must not be empty".to_string(),

            // === WEEKLY PLAN MESSAGES ===
            Message::WeeklyWorkoutAdded(name, reps, day) => format!("Added {} ({} reps) to {}'s schedule", name, reps, day),
            Message::WeeklyWorkoutRemoved(name, day) => format!("Removed {} from {}'s schedule", name, day),
            Message::WeeklyWorkoutNotPlanned(name, day) => format!("{} is not planned for {}", name, day),
            Message::WeeklyDayCleared(day) => format!("Cleared {}'s schedule", day),
            Message::WeeklyAllCleared => "Cleared the entire weekly timetable".to_string(),
            Message::WeeklyHeader => "Weekly Workout Timetable".to_string(),
            Message::WeeklyDayHeader(day) => format!("{}'s Workouts", day),
            Message::NoWorkoutsScheduled => "No workouts scheduled".to_string(),
            Message::RepsMustBePositive => "Reps must be a positive number".to_string(),
            Message::WeeklyApplied(date, count) => format!("Applied weekly plan to {}: {} exercise(s) initialized", date, count),
            Message::WeeklyApplySunday => "Sunday is a rest day; no weekly plan to apply".to_string(),

            // === GIT BACKUP MESSAGES ===
            Message::GitPushing => "Pushing to GitHub...".to_string(),
            Message::GitStatusHeader => "Git Status:".to_string(),
            Message::GitRepoInitialized(dir) => format!("Git repository initialized in {}", dir),
            Message::GitRemoteHint => "Add a remote with: cd ~/.workout && git remote add origin <your-repo-url>".to_string(),
            Message::GitInitFailed => "Failed to initialize git repository".to_string(),
            Message::BackupNoChanges => "No changes to commit".to_string(),
            Message::BackupPushed => "Successfully pushed to GitHub!".to_string(),
            Message::BackupNoRemote => "No remote configured. Run: cd ~/.workout && git remote add origin <your-repo-url>".to_string(),
            Message::BackupFailed(error) => format!("Push failed: {}", error),
            Message::BackupNotInitialized => "Git not initialized".to_string(),
            Message::BackupClean => "Clean - no changes".to_string(),

            // === DATA FILE MESSAGES ===
            Message::DataFileUnreadable(path, error) => {
                format!(
                    "Could not parse workout data at {}: {}. Continuing with defaults; the file was left untouched",
                    path, error
                )
            }

            // === DASHBOARD MESSAGES ===
            Message::CanOnlyLogToday => "Can only add exercises for today".to_string(),
            Message::JumpedToToday => "Jumped to today".to_string(),
            Message::AddedAmount(amount, name) => format!("Added {} to {}", amount, name),
            Message::ExerciseNameAndRepsRequired => "Exercise name and reps are required".to_string(),

            // === PROMPTS ===
            Message::ConfirmRemoveExercise(name) => format!("Remove exercise '{}'?", name),
            Message::ConfirmClearWeekly => "Clear the entire weekly timetable?".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
