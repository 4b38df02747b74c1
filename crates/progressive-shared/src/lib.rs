//! # progressive-shared
//!
//! Record schema for the Progressive workout tracker: the workout, exercise
//! and set records, their drafts, the profile, and the pure validation rules
//! every record passes before it is stored.

pub mod constants;
pub mod error;
pub mod record;
pub mod schema;
pub mod types;

pub use error::{RecordError, SetProblem};
pub use record::*;
pub use types::{ExerciseId, SetId, WorkoutId};
