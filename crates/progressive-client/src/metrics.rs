//! Derived statistics for the dashboard and progress views.
//!
//! All functions are pure and total over a workout slice ordered most
//! recent first (the order [`WorkoutRepository::list_workouts`] returns).
//! Nothing is cached; callers recompute on every query.
//!
//! [`WorkoutRepository::list_workouts`]: crate::repository::WorkoutRepository::list_workouts

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use progressive_shared::{Set, Workout, WorkoutId};

/// A quantity that can be compared between two periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Metric {
    /// Number of workouts.
    WorkoutCount,
    /// Sum of workout volumes, in kg.
    TotalVolume,
    /// Heaviest load lifted for the named exercise, 0 if never performed.
    MaxLoad(String),
}

/// The heaviest set ever recorded for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    pub exercise: String,
    pub set: Set,
    pub workout_id: WorkoutId,
    pub workout_date: DateTime<Utc>,
}

/// Numbers shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub completed: usize,
    pub total_volume: f64,
    pub most_recent: Option<Workout>,
}

/// Total volume of all workouts in one calendar month (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyVolume {
    pub year: i32,
    pub month: u32,
    pub volume: f64,
}

pub fn total_completed_count(workouts: &[Workout]) -> usize {
    workouts.len()
}

pub fn total_volume(workouts: &[Workout]) -> f64 {
    workouts.iter().map(|w| w.volume).sum()
}

pub fn most_recent(workouts: &[Workout]) -> Option<&Workout> {
    workouts.first()
}

/// Heaviest set of `exercise_name` (case-insensitive) across all workouts.
///
/// Equal loads resolve to the earliest workout, then to the earliest set
/// within that workout.
pub fn personal_record(workouts: &[Workout], exercise_name: &str) -> Option<PersonalRecord> {
    let wanted = normalize(exercise_name);
    let mut best: Option<PersonalRecord> = None;

    for workout in workouts {
        for (exercise, set) in workout.sets() {
            if normalize(&exercise.name) != wanted {
                continue;
            }
            let better = match &best {
                None => true,
                Some(current) => {
                    set.load > current.set.load
                        || (set.load == current.set.load && workout.date < current.workout_date)
                }
            };
            if better {
                best = Some(PersonalRecord {
                    exercise: exercise.name.clone(),
                    set: set.clone(),
                    workout_id: workout.id.clone(),
                    workout_date: workout.date,
                });
            }
        }
    }

    best
}

/// One record per distinct exercise, sorted by exercise name.
pub fn personal_records(workouts: &[Workout]) -> Vec<PersonalRecord> {
    let mut names: BTreeMap<String, &str> = BTreeMap::new();
    for workout in workouts {
        for exercise in &workout.exercises {
            names
                .entry(normalize(&exercise.name))
                .or_insert(exercise.name.as_str());
        }
    }

    names
        .values()
        .filter_map(|name| personal_record(workouts, name))
        .collect()
}

/// Value of `metric` over workouts dated in `[start, end)`.
pub fn metric_value(
    workouts: &[Workout],
    metric: &Metric,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> f64 {
    let in_period = workouts
        .iter()
        .filter(move |w| w.date >= start && w.date < end);

    match metric {
        Metric::WorkoutCount => in_period.count() as f64,
        Metric::TotalVolume => in_period.map(|w| w.volume).sum(),
        Metric::MaxLoad(name) => {
            let wanted = normalize(name);
            in_period
                .flat_map(|w| w.sets())
                .filter(|(exercise, _)| normalize(&exercise.name) == wanted)
                .map(|(_, set)| set.load)
                .fold(0.0, f64::max)
        }
    }
}

/// `metric` over `[start, end)` minus `metric` over the equally long period
/// right before it.  An empty or inverted period yields 0.
pub fn period_delta(
    workouts: &[Workout],
    metric: &Metric,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> f64 {
    let length = end - start;
    if length <= chrono::Duration::zero() {
        return 0.0;
    }
    let prior_start = start
        .checked_sub_signed(length)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    metric_value(workouts, metric, start, end) - metric_value(workouts, metric, prior_start, start)
}

pub fn dashboard_summary(workouts: &[Workout]) -> DashboardSummary {
    DashboardSummary {
        completed: total_completed_count(workouts),
        total_volume: total_volume(workouts),
        most_recent: most_recent(workouts).cloned(),
    }
}

/// Volume per calendar month, oldest month first.  Months without workouts
/// are omitted.
pub fn monthly_volume(workouts: &[Workout]) -> Vec<MonthlyVolume> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for workout in workouts {
        *buckets
            .entry((workout.date.year(), workout.date.month()))
            .or_insert(0.0) += workout.volume;
    }

    buckets
        .into_iter()
        .map(|((year, month), volume)| MonthlyVolume {
            year,
            month,
            volume,
        })
        .collect()
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use progressive_shared::schema::commit_workout;
    use progressive_shared::{ExerciseDraft, SetDraft, WorkoutDraft};

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, d, 12, 0, 0).unwrap()
    }

    fn workout(id: &str, date: DateTime<Utc>, exercise: &str, sets: &[(i64, f64)]) -> Workout {
        let mut ex = ExerciseDraft::new(exercise);
        for &(reps, load) in sets {
            ex = ex.with_set(SetDraft::new(reps, load));
        }
        let draft = WorkoutDraft::new(format!("Workout {id}")).with_exercise(ex);
        commit_workout(&draft, WorkoutId::new(id), date).unwrap()
    }

    fn history() -> Vec<Workout> {
        // most recent first
        vec![
            workout("3", day(20), "Squat", &[(5, 100.0)]),
            workout("2", day(10), "bench", &[(6, 80.0)]),
            workout("1", day(1), "Bench", &[(8, 60.0), (8, 60.0)]),
        ]
    }

    #[test]
    fn totals() {
        let ws = history();
        assert_eq!(total_completed_count(&ws), 3);
        assert_eq!(total_volume(&ws), 500.0 + 480.0 + 960.0);
        assert_eq!(most_recent(&ws).map(|w| w.id.as_str()), Some("3"));
        assert!(most_recent(&[]).is_none());
    }

    #[test]
    fn bench_record_is_the_heaviest_set() {
        let pr = personal_record(&history(), "Bench").unwrap();
        assert_eq!(pr.set.load, 80.0);
        assert_eq!(pr.workout_id.as_str(), "2");
    }

    #[test]
    fn record_ties_go_to_earliest_workout() {
        let ws = vec![
            workout("2", day(10), "Deadlift", &[(3, 140.0)]),
            workout("1", day(2), "Deadlift", &[(1, 140.0)]),
        ];
        let pr = personal_record(&ws, "deadlift").unwrap();
        assert_eq!(pr.workout_id.as_str(), "1");
        assert_eq!(pr.set.reps, 1);
    }

    #[test]
    fn unknown_exercise_has_no_record() {
        assert!(personal_record(&history(), "Curl").is_none());
        assert!(personal_record(&[], "Bench").is_none());
    }

    #[test]
    fn one_record_per_exercise() {
        let records = personal_records(&history());
        let summary: Vec<(String, f64)> = records
            .iter()
            .map(|r| (r.exercise.to_lowercase(), r.set.load))
            .collect();
        assert_eq!(
            summary,
            vec![("bench".to_string(), 80.0), ("squat".to_string(), 100.0)]
        );
    }

    #[test]
    fn volume_delta_against_prior_period() {
        let ws = history();
        // [May 11, May 21) vs [May 1, May 11)
        let delta = period_delta(&ws, &Metric::TotalVolume, day(11), day(21));
        assert_eq!(delta, 500.0 - (480.0 + 960.0));

        let count = period_delta(&ws, &Metric::WorkoutCount, day(11), day(21));
        assert_eq!(count, 1.0 - 2.0);
    }

    #[test]
    fn max_load_delta() {
        let ws = history();
        let delta = period_delta(&ws, &Metric::MaxLoad("BENCH".into()), day(6), day(11));
        // 80 this period, 60 in the prior one
        assert_eq!(delta, 20.0);
    }

    #[test]
    fn period_end_is_exclusive() {
        let ws = history();
        assert_eq!(
            metric_value(&ws, &Metric::WorkoutCount, day(1), day(10)),
            1.0
        );
    }

    #[test]
    fn prior_period_clamps_at_earliest_date() {
        let start = DateTime::<Utc>::MIN_UTC + chrono::Duration::days(1);
        let end = start + chrono::Duration::days(10);
        let ws = vec![
            workout("2", start + chrono::Duration::days(2), "Squat", &[(5, 100.0)]),
            workout("1", DateTime::<Utc>::MIN_UTC, "Squat", &[(5, 60.0)]),
        ];

        assert_eq!(period_delta(&ws, &Metric::WorkoutCount, start, end), 0.0);
        assert_eq!(period_delta(&ws, &Metric::TotalVolume, start, end), 200.0);
    }

    #[test]
    fn inverted_period_is_zero() {
        let ws = history();
        assert_eq!(period_delta(&ws, &Metric::TotalVolume, day(20), day(1)), 0.0);
        assert_eq!(period_delta(&ws, &Metric::TotalVolume, day(5), day(5)), 0.0);
    }

    #[test]
    fn dashboard_on_empty_history() {
        let summary = dashboard_summary(&[]);
        assert_eq!(summary.completed, 0);
        assert_eq!(summary.total_volume, 0.0);
        assert!(summary.most_recent.is_none());
    }

    #[test]
    fn months_are_bucketed_oldest_first() {
        let mut ws = history();
        ws.insert(
            0,
            workout("4", Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap(), "Row", &[(8, 50.0)]),
        );

        let months = monthly_volume(&ws);
        assert_eq!(
            months,
            vec![
                MonthlyVolume {
                    year: 2025,
                    month: 5,
                    volume: 1940.0
                },
                MonthlyVolume {
                    year: 2025,
                    month: 6,
                    volume: 400.0
                },
            ]
        );
    }
}
