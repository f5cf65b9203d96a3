//! Exercise registry operations.
//!
//! The registry maps lowercase exercise names to their unit and daily
//! target. All lookups fold the requested name to lowercase, so `Running`
//! and `running` address the same entry.

use crate::data::error::DataError;
use crate::data::model::Exercise;
use crate::data::store::Store;

/// Manager for the configured exercise registry.
pub struct Exercises<'a> {
    store: &'a Store,
}

impl<'a> Exercises<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Adds an exercise, or redefines it when the name is already taken.
    ///
    /// Redefining only replaces the unit and target; logged history for the
    /// name stays in place.
    pub fn add(&self, name: &str, unit: &str, daily_target: f64) -> Result<(), DataError> {
        let key = name.to_lowercase();
        self.store.mutate(|data| {
            data.exercises.insert(
                key.clone(),
                Exercise {
                    unit: unit.to_string(),
                    daily_target,
                },
            );
            Ok(())
        })
    }

    /// Removes an exercise from the registry.
    ///
    /// Logged amounts and timetable entries that reference the name are
    /// kept; views fall back to a default unit for them. Returns `false`
    /// when the name was not registered.
    pub fn remove(&self, name: &str) -> Result<bool, DataError> {
        let key = name.to_lowercase();
        self.store.mutate(|data| Ok(data.exercises.remove(&key).is_some()))
    }

    /// Looks up a single exercise definition.
    pub fn get(&self, name: &str) -> Result<Option<Exercise>, DataError> {
        let key = name.to_lowercase();
        Ok(self.store.load()?.exercises.get(&key).cloned())
    }

    /// Returns all registered exercises in name order.
    pub fn list(&self) -> Result<Vec<(String, Exercise)>, DataError> {
        Ok(self.store.load()?.exercises.into_iter().collect())
    }
}
