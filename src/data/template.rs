//! Weekly timetable engine.
//!
//! The timetable holds planned workouts per weekday, Monday through
//! Saturday. Entries reference exercises by registry key and keep their
//! insertion order; re-adding an exercise to a day updates its planned
//! reps in place instead of appending a duplicate.

use crate::data::error::DataError;
use crate::data::model::{date_key, PlannedWorkout, TemplateDay, WeeklyTemplate};
use crate::data::store::Store;
use chrono::{Datelike, NaiveDate};

/// Manager for the weekly workout timetable.
pub struct Weekly<'a> {
    store: &'a Store,
}

impl<'a> Weekly<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Plans an exercise for a day, or updates its reps when already planned.
    ///
    /// The exercise must exist in the registry; an unknown name leaves the
    /// timetable untouched and nothing is written.
    pub fn add_or_update(&self, day: TemplateDay, name: &str, reps: u32) -> Result<(), DataError> {
        let key = name.to_lowercase();
        self.store.mutate(|data| {
            if !data.exercises.contains_key(&key) {
                return Err(DataError::UnknownExercise(name.to_string()));
            }
            let template = data.weekly_template.get_or_insert_with(WeeklyTemplate::default);
            let entries = template.day_mut(day);
            match entries.iter_mut().find(|w| w.exercise_name == key) {
                Some(entry) => entry.reps = reps,
                None => entries.push(PlannedWorkout {
                    exercise_name: key.clone(),
                    reps,
                }),
            }
            Ok(())
        })
    }

    /// Unplans an exercise from a day.
    ///
    /// Returns `false` when the exercise was not planned for that day.
    pub fn remove(&self, day: TemplateDay, name: &str) -> Result<bool, DataError> {
        let key = name.to_lowercase();
        self.store.mutate(|data| {
            let Some(template) = data.weekly_template.as_mut() else {
                return Ok(false);
            };
            let entries = template.day_mut(day);
            let before = entries.len();
            entries.retain(|w| w.exercise_name != key);
            Ok(entries.len() < before)
        })
    }

    /// Returns the planned workouts for one day.
    pub fn list(&self, day: TemplateDay) -> Result<Vec<PlannedWorkout>, DataError> {
        let data = self.store.load()?;
        Ok(data.weekly_template.map(|t| t.day(day).to_vec()).unwrap_or_default())
    }

    /// Returns the whole timetable, absent days included as empty lists.
    pub fn timetable(&self) -> Result<WeeklyTemplate, DataError> {
        Ok(self.store.load()?.weekly_template.unwrap_or_default())
    }

    /// Removes every planned workout for one day.
    pub fn clear_day(&self, day: TemplateDay) -> Result<(), DataError> {
        self.store.mutate(|data| {
            if let Some(template) = data.weekly_template.as_mut() {
                template.day_mut(day).clear();
            }
            Ok(())
        })
    }

    /// Removes every planned workout from all days.
    pub fn clear_all(&self) -> Result<(), DataError> {
        self.store.mutate(|data| {
            data.weekly_template = Some(WeeklyTemplate::default());
            Ok(())
        })
    }

    /// Seeds the day's log with zero entries for everything planned.
    ///
    /// Only exercises with no logged value for the date are seeded, so
    /// amounts already recorded are never reset. Sundays have no plan and
    /// return `None` without touching the file. Otherwise returns how many
    /// entries were seeded.
    pub fn apply_to_day(&self, date: NaiveDate) -> Result<Option<usize>, DataError> {
        let Some(day) = TemplateDay::from_weekday(date.weekday()) else {
            return Ok(None);
        };
        let seeded = self.store.mutate(|data| {
            let planned: Vec<String> = data
                .weekly_template
                .as_ref()
                .map(|t| t.day(day).iter().map(|w| w.exercise_name.clone()).collect())
                .unwrap_or_default();
            let mut seeded = 0;
            if !planned.is_empty() {
                let log = data.logs.entry(date_key(date)).or_default();
                for name in planned {
                    if !log.contains_key(&name) {
                        log.insert(name, 0.0);
                        seeded += 1;
                    }
                }
            }
            Ok(seeded)
        })?;
        Ok(Some(seeded))
    }
}
