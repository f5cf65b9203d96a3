//! Core data model for the workout tracker.
//!
//! The whole application state lives in a single [`WorkoutData`] document:
//! the exercise registry, the per-day logs, and the optional weekly
//! timetable. The document is serialized as JSON with camelCase keys so
//! that existing data files remain readable across versions.

use chrono::{NaiveDate, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Logged amounts for a single day, keyed by exercise name.
pub type DayLog = BTreeMap<String, f64>;

/// Definition of a trackable exercise.
///
/// The registry key is the exercise name, folded to lowercase; only the
/// unit label and the daily target live in the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unit label shown next to logged amounts, e.g. "km" or "reps".
    pub unit: String,
    /// Amount per day that counts as a completed exercise.
    pub daily_target: f64,
}

/// One planned entry in the weekly timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedWorkout {
    /// Registry key of the planned exercise, folded to lowercase.
    pub exercise_name: String,
    /// Planned repetition count for the day.
    pub reps: u32,
}

/// Weekly workout timetable covering Monday through Saturday.
///
/// Sunday is a rest day and has no slot. Each day holds an ordered list
/// of planned workouts; an empty list means nothing is scheduled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTemplate {
    #[serde(default)]
    pub monday: Vec<PlannedWorkout>,
    #[serde(default)]
    pub tuesday: Vec<PlannedWorkout>,
    #[serde(default)]
    pub wednesday: Vec<PlannedWorkout>,
    #[serde(default)]
    pub thursday: Vec<PlannedWorkout>,
    #[serde(default)]
    pub friday: Vec<PlannedWorkout>,
    #[serde(default)]
    pub saturday: Vec<PlannedWorkout>,
}

impl WeeklyTemplate {
    /// Returns the planned workouts for the given day.
    pub fn day(&self, day: TemplateDay) -> &[PlannedWorkout] {
        match day {
            TemplateDay::Monday => &self.monday,
            TemplateDay::Tuesday => &self.tuesday,
            TemplateDay::Wednesday => &self.wednesday,
            TemplateDay::Thursday => &self.thursday,
            TemplateDay::Friday => &self.friday,
            TemplateDay::Saturday => &self.saturday,
        }
    }

    /// Returns a mutable handle to the planned workouts for the given day.
    pub fn day_mut(&mut self, day: TemplateDay) -> &mut Vec<PlannedWorkout> {
        match day {
            TemplateDay::Monday => &mut self.monday,
            TemplateDay::Tuesday => &mut self.tuesday,
            TemplateDay::Wednesday => &mut self.wednesday,
            TemplateDay::Thursday => &mut self.thursday,
            TemplateDay::Friday => &mut self.friday,
            TemplateDay::Saturday => &mut self.saturday,
        }
    }

    /// Returns `true` when no day has any planned workout.
    pub fn is_empty(&self) -> bool {
        TemplateDay::ALL.iter().all(|day| self.day(*day).is_empty())
    }
}

/// A schedulable day of the weekly timetable.
///
/// Doubles as a CLI value so commands accept day names directly,
/// e.g. `wout weekly-add monday pushups 50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl TemplateDay {
    /// All schedulable days in week order.
    pub const ALL: [TemplateDay; 6] = [
        TemplateDay::Monday,
        TemplateDay::Tuesday,
        TemplateDay::Wednesday,
        TemplateDay::Thursday,
        TemplateDay::Friday,
        TemplateDay::Saturday,
    ];

    /// Lowercase day name, matching the timetable field names.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateDay::Monday => "monday",
            TemplateDay::Tuesday => "tuesday",
            TemplateDay::Wednesday => "wednesday",
            TemplateDay::Thursday => "thursday",
            TemplateDay::Friday => "friday",
            TemplateDay::Saturday => "saturday",
        }
    }

    /// Capitalized day name for headers and titles.
    pub fn title(&self) -> &'static str {
        match self {
            TemplateDay::Monday => "Monday",
            TemplateDay::Tuesday => "Tuesday",
            TemplateDay::Wednesday => "Wednesday",
            TemplateDay::Thursday => "Thursday",
            TemplateDay::Friday => "Friday",
            TemplateDay::Saturday => "Saturday",
        }
    }

    /// Maps a calendar weekday onto a timetable day.
    ///
    /// Returns `None` for Sunday, which has no timetable slot.
    pub fn from_weekday(weekday: Weekday) -> Option<TemplateDay> {
        match weekday {
            Weekday::Mon => Some(TemplateDay::Monday),
            Weekday::Tue => Some(TemplateDay::Tuesday),
            Weekday::Wed => Some(TemplateDay::Wednesday),
            Weekday::Thu => Some(TemplateDay::Thursday),
            Weekday::Fri => Some(TemplateDay::Friday),
            Weekday::Sat => Some(TemplateDay::Saturday),
            Weekday::Sun => None,
        }
    }
}

impl fmt::Display for TemplateDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The complete persisted state of the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutData {
    /// Exercise registry keyed by lowercase exercise name.
    #[serde(default)]
    pub exercises: BTreeMap<String, Exercise>,
    /// Daily logs keyed by `YYYY-MM-DD` date string.
    #[serde(default)]
    pub logs: BTreeMap<String, DayLog>,
    /// Weekly timetable; absent in data files written before it existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_template: Option<WeeklyTemplate>,
}

impl Default for WorkoutData {
    /// Starter registry for fresh installations.
    fn default() -> Self {
        let mut exercises = BTreeMap::new();
        exercises.insert(
            "running".to_string(),
            Exercise {
                unit: "km".to_string(),
                daily_target: 10.0,
            },
        );
        exercises.insert(
            "plank".to_string(),
            Exercise {
                unit: "min".to_string(),
                daily_target: 10.0,
            },
        );
        exercises.insert(
            "pushups".to_string(),
            Exercise {
                unit: "reps".to_string(),
                daily_target: 100.0,
            },
        );
        exercises.insert(
            "pullups".to_string(),
            Exercise {
                unit: "reps".to_string(),
                daily_target: 50.0,
            },
        );

        Self {
            exercises,
            logs: BTreeMap::new(),
            weekly_template: Some(WeeklyTemplate::default()),
        }
    }
}

/// Formats a date as the `YYYY-MM-DD` key used by the daily logs.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
