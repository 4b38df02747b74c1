//! Workout records and their editable drafts.
//!
//! Committed records ([`Workout`], [`Exercise`], [`Set`]) are what the store
//! persists and what history views read.  Drafts are the mutable shapes the
//! UI fills in; they only become records through
//! [`schema::commit_workout`](crate::schema::commit_workout).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DISPLAY_NAME, DEFAULT_EMAIL, DEFAULT_HEIGHT_CM, DEFAULT_WEIGHT_KG};
use crate::error::SetProblem;
use crate::types::{ExerciseId, SetId, WorkoutId};

// ---------------------------------------------------------------------------
// Committed records
// ---------------------------------------------------------------------------

/// One set of an exercise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Set {
    pub id: SetId,
    pub reps: u32,
    /// Load in kilograms.
    pub load: f64,
    #[serde(default)]
    pub completed: bool,
}

/// An exercise within a workout.  Sets are kept in execution order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub sets: Vec<Set>,
}

/// A committed workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub id: WorkoutId,
    /// Creation timestamp.  Display strings are derived from it on demand.
    pub date: DateTime<Utc>,
    pub name: String,
    pub exercises: Vec<Exercise>,
    /// Sum of reps x load over every set.
    #[serde(default)]
    pub volume: f64,
}

impl Workout {
    /// Turn this record back into an editable draft carrying the same ids.
    pub fn to_draft(&self) -> WorkoutDraft {
        WorkoutDraft {
            id: Some(self.id.clone()),
            name: self.name.clone(),
            exercises: self
                .exercises
                .iter()
                .map(|exercise| ExerciseDraft {
                    id: Some(exercise.id),
                    name: exercise.name.clone(),
                    sets: exercise
                        .sets
                        .iter()
                        .map(|set| SetDraft {
                            id: Some(set.id),
                            reps: Some(i64::from(set.reps)),
                            load: Some(set.load),
                            completed: set.completed,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Iterate over every set together with its exercise.
    pub fn sets(&self) -> impl Iterator<Item = (&Exercise, &Set)> {
        self.exercises
            .iter()
            .flat_map(|exercise| exercise.sets.iter().map(move |set| (exercise, set)))
    }
}

// ---------------------------------------------------------------------------
// Drafts
// ---------------------------------------------------------------------------

/// A set as entered by the user.  Missing values stay `None` until
/// validation rejects them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SetDraft {
    pub id: Option<SetId>,
    pub reps: Option<i64>,
    pub load: Option<f64>,
    pub completed: bool,
}

impl SetDraft {
    pub fn new(reps: i64, load: f64) -> Self {
        Self {
            id: None,
            reps: Some(reps),
            load: Some(load),
            completed: false,
        }
    }

    pub fn completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Build a draft from raw text fields of the workout form.
    ///
    /// Blank fields become `None`.  A decimal comma is accepted for the
    /// load (`"62,5"`).
    pub fn from_form(reps: &str, load: &str, completed: bool) -> Result<Self, SetProblem> {
        let reps = match reps.trim() {
            "" => None,
            text => Some(text.parse::<i64>().map_err(|_| SetProblem::NonNumericReps)?),
        };

        let load = match load.trim() {
            "" => None,
            text => {
                let value = text
                    .replace(',', ".")
                    .parse::<f64>()
                    .map_err(|_| SetProblem::NonNumericLoad)?;
                Some(value)
            }
        };

        Ok(Self {
            id: None,
            reps,
            load,
            completed,
        })
    }
}

/// An exercise as entered by the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExerciseDraft {
    pub id: Option<ExerciseId>,
    pub name: String,
    pub sets: Vec<SetDraft>,
}

impl ExerciseDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            sets: Vec::new(),
        }
    }

    pub fn with_set(mut self, set: SetDraft) -> Self {
        self.sets.push(set);
        self
    }

    /// `count` identical sets, the "3 x 8 @ 60kg" shape of the quick form.
    pub fn uniform(name: impl Into<String>, count: usize, reps: i64, load: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            sets: (0..count).map(|_| SetDraft::new(reps, load)).collect(),
        }
    }
}

/// A workout being created or edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutDraft {
    /// Caller-chosen id.  Left empty, the repository allocates one.
    pub id: Option<WorkoutId>,
    pub name: String,
    pub exercises: Vec<ExerciseDraft>,
}

impl WorkoutDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            exercises: Vec::new(),
        }
    }

    pub fn with_exercise(mut self, exercise: ExerciseDraft) -> Self {
        self.exercises.push(exercise);
        self
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The device owner's profile.  Stored as discrete string fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub display_name: String,
    pub email: String,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.into(),
            email: DEFAULT_EMAIL.into(),
            weight_kg: DEFAULT_WEIGHT_KG,
            height_cm: DEFAULT_HEIGHT_CM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_blank_fields_are_missing() {
        let draft = SetDraft::from_form("  ", "", false).unwrap();
        assert_eq!(draft.reps, None);
        assert_eq!(draft.load, None);
    }

    #[test]
    fn form_accepts_decimal_comma() {
        let draft = SetDraft::from_form("8", "62,5", true).unwrap();
        assert_eq!(draft.reps, Some(8));
        assert_eq!(draft.load, Some(62.5));
        assert!(draft.completed);
    }

    #[test]
    fn form_rejects_text() {
        assert_eq!(
            SetDraft::from_form("eight", "60", false),
            Err(SetProblem::NonNumericReps)
        );
        assert_eq!(
            SetDraft::from_form("8", "heavy", false),
            Err(SetProblem::NonNumericLoad)
        );
    }

    #[test]
    fn uniform_builds_identical_sets() {
        let exercise = ExerciseDraft::uniform("Squat", 3, 5, 100.0);
        assert_eq!(exercise.sets.len(), 3);
        assert!(exercise.sets.iter().all(|s| *s == SetDraft::new(5, 100.0)));
    }

    #[test]
    fn workout_deserializes_without_volume() {
        let json = r#"{
            "id": "1",
            "date": "2025-05-24T10:00:00Z",
            "name": "Legs",
            "exercises": []
        }"#;
        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.volume, 0.0);
    }
}
