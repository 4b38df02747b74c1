use thiserror::Error;

use crate::types::WorkoutId;

/// Structural or semantic validation failure on a record.
///
/// A record that fails validation is never persisted; the user has to fix
/// the input and try again.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Workout name is blank")]
    BlankWorkoutName,

    #[error("Workout has no exercises")]
    NoExercises,

    #[error("Exercise name is blank")]
    BlankExerciseName,

    #[error("Exercise '{exercise}' has no sets")]
    NoSets { exercise: String },

    #[error("Set {index} of '{exercise}': {problem}")]
    InvalidSet {
        exercise: String,
        index: usize,
        problem: SetProblem,
    },

    #[error("Workout volume is too large to record")]
    VolumeOutOfRange,

    #[error("Workout id {0} is already in use")]
    DuplicateId(WorkoutId),

    #[error("{field} must be a positive number")]
    NotPositive { field: &'static str },

    #[error("{field} is blank")]
    BlankField { field: &'static str },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// What is wrong with a single set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetProblem {
    #[error("reps are missing")]
    MissingReps,

    #[error("load is missing")]
    MissingLoad,

    #[error("reps are not a number")]
    NonNumericReps,

    #[error("load is not a number")]
    NonNumericLoad,

    #[error("reps are negative")]
    NegativeReps,

    #[error("load is negative")]
    NegativeLoad,
}
