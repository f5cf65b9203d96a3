//! Daily progress log engine.
//!
//! Logged amounts are grouped per calendar day under a `YYYY-MM-DD` key.
//! Recording either accumulates onto the day's value or replaces it,
//! depending on [`RecordMode`]. The read-side helpers here are pure over a
//! loaded document so the dashboard can evaluate a whole calendar without
//! re-reading the file per day.

use crate::data::error::DataError;
use crate::data::model::{date_key, WorkoutData};
use crate::data::store::Store;
use chrono::NaiveDate;

/// How a recorded amount combines with the day's existing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    /// Accumulate onto whatever is already logged for the day.
    Add,
    /// Replace the day's value outright.
    Set,
}

/// Aggregate completion state of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// Every registered exercise met its daily target.
    Complete,
    /// At least one exercise met its target, but not all.
    Partial,
    /// No exercise met its target, or nothing is registered.
    None,
    /// The day is after today and cannot be judged yet.
    Future,
}

/// Manager for recording daily progress.
pub struct Logs<'a> {
    store: &'a Store,
}

impl<'a> Logs<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Records an amount for an exercise on the given day.
    ///
    /// The exercise must be registered; the name is folded to lowercase
    /// before the lookup. Returns the day's resulting value.
    pub fn record(&self, date: NaiveDate, name: &str, amount: f64, mode: RecordMode) -> Result<f64, DataError> {
        let key = name.to_lowercase();
        self.store.mutate(|data| {
            if !data.exercises.contains_key(&key) {
                return Err(DataError::UnknownExercise(name.to_string()));
            }
            let log = data.logs.entry(date_key(date)).or_default();
            let entry = log.entry(key.clone()).or_insert(0.0);
            match mode {
                RecordMode::Add => *entry += amount,
                RecordMode::Set => *entry = amount,
            }
            Ok(*entry)
        })
    }
}

/// Returns the logged amount for an exercise on a day, defaulting to zero.
pub fn amount_for(data: &WorkoutData, date: NaiveDate, name: &str) -> f64 {
    data.logs
        .get(&date_key(date))
        .and_then(|log| log.get(name))
        .copied()
        .unwrap_or(0.0)
}

/// Completion percentage of a target, rounded to the nearest whole percent.
///
/// Values above the target yield more than 100. A non-positive target
/// cannot be met and reports zero.
pub fn completion_percentage(current: f64, target: f64) -> i64 {
    if target <= 0.0 {
        return 0;
    }
    (current / target * 100.0).round() as i64
}

/// Judges a day against the registered exercises.
///
/// Days after `today` are [`DayStatus::Future`]. With an empty registry
/// there is nothing to meet, so the day reports [`DayStatus::None`].
pub fn day_status(data: &WorkoutData, date: NaiveDate, today: NaiveDate) -> DayStatus {
    if date > today {
        return DayStatus::Future;
    }
    if data.exercises.is_empty() {
        return DayStatus::None;
    }

    let log = data.logs.get(&date_key(date));
    let met = data
        .exercises
        .iter()
        .filter(|(name, exercise)| {
            let current = log.and_then(|l| l.get(name.as_str())).copied().unwrap_or(0.0);
            current >= exercise.daily_target
        })
        .count();

    if met == data.exercises.len() {
        DayStatus::Complete
    } else if met > 0 {
        DayStatus::Partial
    } else {
        DayStatus::None
    }
}
