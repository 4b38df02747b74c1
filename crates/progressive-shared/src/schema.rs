//! Validation rules for workout records.
//!
//! Everything here is pure: no I/O, no clock, no randomness except the
//! UUIDs handed to sets and exercises that arrive without one.  Validation is
//! all-or-nothing per workout; the first problem found is reported.

use chrono::{DateTime, Utc};

use crate::error::{RecordError, SetProblem};
use crate::record::{Exercise, ExerciseDraft, Profile, Set, SetDraft, Workout, WorkoutDraft};
use crate::types::{ExerciseId, SetId, WorkoutId};

/// Check that a set has reps and a load, both numeric and non-negative.
pub fn validate_set(set: &SetDraft) -> Result<(), SetProblem> {
    validated_numbers(set).map(|_| ())
}

/// Check that an exercise is named and holds at least one valid set.
pub fn validate_exercise(exercise: &ExerciseDraft) -> Result<(), RecordError> {
    if exercise.name.trim().is_empty() {
        return Err(RecordError::BlankExerciseName);
    }
    if exercise.sets.is_empty() {
        return Err(RecordError::NoSets {
            exercise: exercise.name.clone(),
        });
    }
    for (index, set) in exercise.sets.iter().enumerate() {
        validate_set(set).map_err(|problem| RecordError::InvalidSet {
            exercise: exercise.name.clone(),
            index,
            problem,
        })?;
    }
    Ok(())
}

/// Check that a workout is named and holds at least one valid exercise.
///
/// Each load is finite on its own, but the summed volume must be too: a
/// non-finite volume cannot be stored.
pub fn validate_workout(workout: &WorkoutDraft) -> Result<(), RecordError> {
    if workout.name.trim().is_empty() {
        return Err(RecordError::BlankWorkoutName);
    }
    if workout.exercises.is_empty() {
        return Err(RecordError::NoExercises);
    }
    workout.exercises.iter().try_for_each(validate_exercise)?;

    let volume: f64 = workout
        .exercises
        .iter()
        .flat_map(|exercise| &exercise.sets)
        .filter_map(|set| validated_numbers(set).ok())
        .map(|(reps, load)| f64::from(reps) * load)
        .sum();
    if !volume.is_finite() {
        return Err(RecordError::VolumeOutOfRange);
    }
    Ok(())
}

/// Sum of reps x load across every set of every exercise.
///
/// An empty workout has volume 0.
pub fn compute_volume(workout: &Workout) -> f64 {
    workout
        .sets()
        .map(|(_, set)| f64::from(set.reps) * set.load)
        .sum()
}

/// Validate a draft and turn it into a committed record.
///
/// Names are trimmed, missing set/exercise ids are generated and the volume
/// is computed.  Nothing is produced unless the whole draft is valid.
pub fn commit_workout(
    draft: &WorkoutDraft,
    id: WorkoutId,
    date: DateTime<Utc>,
) -> Result<Workout, RecordError> {
    validate_workout(draft)?;

    let exercises = draft
        .exercises
        .iter()
        .map(|exercise| Exercise {
            id: exercise.id.unwrap_or_else(ExerciseId::new),
            name: exercise.name.trim().to_string(),
            sets: exercise
                .sets
                .iter()
                .filter_map(|set| {
                    // Already validated above, so this never drops a set.
                    let (reps, load) = validated_numbers(set).ok()?;
                    Some(Set {
                        id: set.id.unwrap_or_else(SetId::new),
                        reps,
                        load,
                        completed: set.completed,
                    })
                })
                .collect(),
        })
        .collect();

    let mut workout = Workout {
        id,
        date,
        name: draft.name.trim().to_string(),
        exercises,
        volume: 0.0,
    };
    workout.volume = compute_volume(&workout);
    Ok(workout)
}

/// Check profile fields before they are saved.
pub fn validate_profile(profile: &Profile) -> Result<(), RecordError> {
    if !(profile.weight_kg.is_finite() && profile.weight_kg > 0.0) {
        return Err(RecordError::NotPositive { field: "weight" });
    }
    if !(profile.height_cm.is_finite() && profile.height_cm > 0.0) {
        return Err(RecordError::NotPositive { field: "height" });
    }
    Ok(())
}

fn validated_numbers(set: &SetDraft) -> Result<(u32, f64), SetProblem> {
    let reps = set.reps.ok_or(SetProblem::MissingReps)?;
    let load = set.load.ok_or(SetProblem::MissingLoad)?;

    if reps < 0 {
        return Err(SetProblem::NegativeReps);
    }
    // Out-of-range rep counts cannot be represented, treat them as garbage.
    let reps = u32::try_from(reps).map_err(|_| SetProblem::NonNumericReps)?;

    if !load.is_finite() {
        return Err(SetProblem::NonNumericLoad);
    }
    if load < 0.0 {
        return Err(SetProblem::NegativeLoad);
    }

    Ok((reps, load))
}
