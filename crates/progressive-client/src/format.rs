//! Display strings derived from stored records.
//!
//! The store only ever holds structured workouts; anything human-readable is
//! produced here at render time.

use chrono::{DateTime, Utc};

use progressive_shared::{Exercise, Set, Workout};

/// Calendar date as shown in lists and detail headers, `dd/mm/yyyy`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Kilograms without a trailing `.0` for whole numbers: `60`, `62.5`.
pub fn format_load(load: f64) -> String {
    if load.fract() == 0.0 {
        format!("{load:.0}")
    } else {
        format!("{load}")
    }
}

/// Total volume with two decimals, `"960.00 kg"`.
pub fn format_volume(volume: f64) -> String {
    format!("{volume:.2} kg")
}

/// One line of the detail view, e.g. `"Set 1: 8 reps @ 60 kg"`.
pub fn format_set_line(position: usize, set: &Set) -> String {
    let mark = if set.completed { " ✓" } else { "" };
    format!(
        "Set {}: {} reps @ {} kg{}",
        position + 1,
        set.reps,
        format_load(set.load),
        mark
    )
}

/// One-line exercise summary used in history cards.
///
/// Uniform sets collapse to `"Bench: 3x8 (60kg)"`; mixed sets list each one,
/// `"Bench: 8x60kg, 6x80kg"`.
pub fn format_exercise_summary(exercise: &Exercise) -> String {
    let Some(first) = exercise.sets.first() else {
        return exercise.name.clone();
    };

    let uniform = exercise
        .sets
        .iter()
        .all(|s| s.reps == first.reps && s.load == first.load);

    if uniform {
        format!(
            "{}: {}x{} ({}kg)",
            exercise.name,
            exercise.sets.len(),
            first.reps,
            format_load(first.load)
        )
    } else {
        let sets: Vec<String> = exercise
            .sets
            .iter()
            .map(|s| format!("{}x{}kg", s.reps, format_load(s.load)))
            .collect();
        format!("{}: {}", exercise.name, sets.join(", "))
    }
}

/// Summary lines for every exercise of a workout, in order.
pub fn workout_details(workout: &Workout) -> Vec<String> {
    workout.exercises.iter().map(format_exercise_summary).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use progressive_shared::schema::commit_workout;
    use progressive_shared::{ExerciseDraft, SetDraft, WorkoutDraft, WorkoutId};

    fn sample() -> Workout {
        let draft = WorkoutDraft::new("Chest")
            .with_exercise(ExerciseDraft::uniform("Bench", 3, 8, 60.0))
            .with_exercise(
                ExerciseDraft::new("Fly")
                    .with_set(SetDraft::new(12, 15.0))
                    .with_set(SetDraft::new(10, 17.5).completed()),
            );
        let date = Utc.with_ymd_and_hms(2025, 5, 24, 18, 30, 0).unwrap();
        commit_workout(&draft, WorkoutId::new("1"), date).unwrap()
    }

    #[test]
    fn dates_are_day_first() {
        assert_eq!(format_date(&sample().date), "24/05/2025");
    }

    #[test]
    fn summaries() {
        assert_eq!(
            workout_details(&sample()),
            vec![
                "Bench: 3x8 (60kg)".to_string(),
                "Fly: 12x15kg, 10x17.5kg".to_string(),
            ]
        );
    }

    #[test]
    fn set_lines_mark_completion() {
        let workout = sample();
        let fly = &workout.exercises[1];
        assert_eq!(format_set_line(0, &fly.sets[0]), "Set 1: 12 reps @ 15 kg");
        assert_eq!(format_set_line(1, &fly.sets[1]), "Set 2: 10 reps @ 17.5 kg ✓");
    }

    #[test]
    fn volume_has_two_decimals() {
        assert_eq!(format_volume(960.0), "960.00 kg");
        assert_eq!(format_volume(sample().volume), "1795.00 kg");
    }
}
