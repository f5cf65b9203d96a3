//! Persistence layer for the workout data document.
//!
//! All state lives in a single JSON file, `~/.workout/data.json`. The
//! [`Store`] owns the path resolution and every read or write of that file;
//! engines and commands never touch the filesystem directly. Writes go
//! through a temporary file followed by a rename so a crash mid-write
//! cannot leave a half-written document behind.

use crate::data::error::DataError;
use crate::data::model::WorkoutData;
use crate::libs::messages::Message;
use crate::libs::storage::{DataStorage, DATA_FILE_NAME};
use crate::msg_warning;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Emits the unreadable-file warning only once per process.
static CORRUPT_WARNED: OnceLock<()> = OnceLock::new();

/// Handle to the on-disk workout data document.
pub struct Store {
    storage: DataStorage,
}

impl Store {
    /// Creates a store rooted at the default data directory.
    pub fn new() -> Result<Self, DataError> {
        Ok(Self { storage: DataStorage::new() })
    }

    /// Creates a store rooted at an explicit directory.
    ///
    /// Primarily used by tests and callers that manage their own data
    /// location.
    pub fn at<P: Into<PathBuf>>(dir: P) -> Self {
        Self { storage: DataStorage::at(dir) }
    }

    /// The directory holding the data file.
    pub fn data_dir(&self) -> &Path {
        self.storage.dir()
    }

    /// Loads the current document from disk.
    ///
    /// A missing file is treated as a fresh installation: the default
    /// document is written out and returned. An unreadable file is left
    /// untouched on disk and the defaults are returned in memory, with a
    /// warning so the user can recover the file before the next write
    /// replaces it.
    pub fn load(&self) -> Result<WorkoutData, DataError> {
        let path = self.storage.get_path(DATA_FILE_NAME)?;
        if !path.exists() {
            let data = WorkoutData::default();
            self.save(&data)?;
            return Ok(data);
        }

        let raw = fs::read_to_string(&path)?;
        match serde_json::from_str(&raw) {
            Ok(data) => Ok(data),
            Err(err) => {
                if CORRUPT_WARNED.set(()).is_ok() {
                    msg_warning!(Message::DataFileUnreadable(path.display().to_string(), err.to_string()));
                }
                Ok(WorkoutData::default())
            }
        }
    }

    /// Writes the document to disk atomically.
    pub fn save(&self, data: &WorkoutData) -> Result<(), DataError> {
        let path = self.storage.get_path(DATA_FILE_NAME)?;
        let mut body = serde_json::to_string_pretty(data)?;
        body.push('\n');
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Runs a read-modify-write cycle as a single unit.
    ///
    /// The closure receives the freshly loaded document and may refuse the
    /// mutation by returning an error, in which case nothing is written
    /// back. On success the modified document replaces the file on disk.
    pub fn mutate<T, F>(&self, f: F) -> Result<T, DataError>
    where
        F: FnOnce(&mut WorkoutData) -> Result<T, DataError>,
    {
        let mut data = self.load()?;
        let out = f(&mut data)?;
        self.save(&data)?;
        Ok(out)
    }
}
