pub mod workout;
pub mod analysis;

pub use workout::{Exercise, Set, Workout};
pub use analysis::{
  OneRepMaxEntry, StrengthPoint, StrengthSeries, VolumeSummary, WarmupPlan, WarmupSet,
  WorkoutReport,
};
