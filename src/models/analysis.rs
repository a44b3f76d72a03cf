use serde::{Deserialize, Serialize};

/// Volume accumulated by one exercise within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSummary {
  pub exercise_name: String,
  pub total_volume: f64,
  pub set_count: u32,
  pub total_reps: u64,
}

/// One rung of a warm-up ladder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarmupSet {
  pub weight: f64,
  pub reps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxEntry {
  pub exercise_name: String,
  pub estimated_one_rep_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarmupPlan {
  pub exercise_name: String,
  pub working_weight: f64,
  pub sets: Vec<WarmupSet>,
}

/// Everything the progress view shows for a single workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutReport {
  pub workout_name: String,
  pub date: String,
  pub volume: Vec<VolumeSummary>,
  pub one_rep_maxes: Vec<OneRepMaxEntry>,
  pub warmups: Vec<WarmupPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthPoint {
  pub date: String,
  pub estimated_one_rep_max: f64,
}

/// Estimated 1RM over time for one exercise name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthSeries {
  pub exercise_name: String,
  pub points: Vec<StrengthPoint>,
}
