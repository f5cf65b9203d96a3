use crate::data::model::TemplateDay;

#[derive(Debug, Clone)]
pub enum Message {
    // === EXERCISE MESSAGES ===
    ExerciseAdded(String, f64, String), // name, target, unit
    ExerciseRemoved(String),
    ExerciseNotFound(String),
    ExerciseNotFoundWithAvailable(String, String), // name, available list
    ExercisesHeader,
    NoExercisesConfigured,

    // === PROGRESS MESSAGES ===
    ProgressAdded(f64, String, String),  // amount, unit, name
    ProgressSet(String, f64, String),    // name, amount, unit
    ProgressLine(f64, f64, String, i64), // current, target, unit, percent
    StatusHeader,
    AmountMustBePositive,
    AmountMustBeNonNegative,
    TargetMustBePositive,
    UnitMustNotBeEmpty,

    // === WEEKLY PLAN MESSAGES ===
    WeeklyWorkoutAdded(String, u32, TemplateDay),
    WeeklyWorkoutRemoved(String, TemplateDay),
    WeeklyWorkoutNotPlanned(String, TemplateDay),
    WeeklyDayCleared(TemplateDay),
    WeeklyAllCleared,
    WeeklyHeader,
    WeeklyDayHeader(String), // capitalized day name
    NoWorkoutsScheduled,
    RepsMustBePositive,
    WeeklyApplied(String, usize), // date, seeded count
    WeeklyApplySunday,

    // === GIT BACKUP MESSAGES ===
    GitPushing,
    GitStatusHeader,
    GitRepoInitialized(String), // directory
    GitRemoteHint,
    GitInitFailed,
    BackupNoChanges,
    BackupPushed,
    BackupNoRemote,
    BackupFailed(String), // git error output
    BackupNotInitialized,
    BackupClean,

    // === DATA FILE MESSAGES ===
    DataFileUnreadable(String, String), // path, parse error

    // === DASHBOARD MESSAGES ===
    CanOnlyLogToday,
    JumpedToToday,
    AddedAmount(f64, String), // amount, name
    ExerciseNameAndRepsRequired,

    // === PROMPTS ===
    ConfirmRemoveExercise(String),
    ConfirmClearWeekly,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
