use thiserror::Error;

/// Errors produced by the workout data layer.
///
/// Validation of user input happens at the command boundary; these variants
/// cover failures the engines themselves can detect, plus the I/O and
/// deserialization errors that surface while reading or writing the data file.
#[derive(Debug, Error)]
pub enum DataError {
    /// A referenced exercise has no entry in the configured registry.
    #[error("Exercise \"{0}\" not found in configured exercises")]
    UnknownExercise(String),

    /// The data file or its directory could not be read or written.
    #[error("Could not access workout data: {0}")]
    Io(#[from] std::io::Error),

    /// The data file exists but could not be serialized or deserialized.
    #[error("Workout data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
