use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Workout identity = creation time in Unix milliseconds, kept as a decimal
// string so stored collections stay readable and ids stay opaque to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Wrap an existing identifier (e.g. one handed back by the UI).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Allocate an id for a workout created at `now`.
    ///
    /// Ids are strictly increasing: when the clock has not moved past the
    /// newest existing id, the new id is that id plus one millisecond.
    pub fn next_after(now: DateTime<Utc>, newest: Option<&WorkoutId>) -> Self {
        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let floor = newest
            .and_then(WorkoutId::as_millis)
            .map_or(0, |ms| ms.saturating_add(1));
        Self(now_ms.max(floor).to_string())
    }

    /// Numeric value of the id, if it is a millisecond timestamp.
    pub fn as_millis(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ExerciseId(pub Uuid);

impl ExerciseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExerciseId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SetId(pub Uuid);

impl SetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SetId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_follows_clock() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let id = WorkoutId::next_after(now, None);
        assert_eq!(id.as_str(), "1700000000000");
    }

    #[test]
    fn id_bumps_past_newest_when_clock_stalls() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        let newest = WorkoutId::new("1700000000005");
        let id = WorkoutId::next_after(now, Some(&newest));
        assert_eq!(id.as_millis(), Some(1_700_000_000_006));
    }

    #[test]
    fn non_numeric_newest_is_ignored() {
        let now = Utc.timestamp_millis_opt(42).unwrap();
        let id = WorkoutId::next_after(now, Some(&WorkoutId::new("legacy")));
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&WorkoutId::new("17")).unwrap();
        assert_eq!(json, "\"17\"");
    }
}
