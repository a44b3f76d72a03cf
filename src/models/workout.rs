use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Slider bounds used when editing effort values
pub const RIR_RANGE: (f64, f64) = (0.0, 5.0);
pub const RPE_RANGE: (f64, f64) = (5.0, 10.0);

/// Calendar date format used in workout records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single logged set.
///
/// `weight`, `rir` and `rpe` are optional: an absent value is distinct from a
/// value that is present but zero, and the analytics eligibility rules depend
/// on that distinction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
  pub id: String,
  pub reps: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight: Option<f64>,
  /// Reps in reserve (0..5)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rir: Option<f64>,
  /// Rate of perceived exertion (5..10)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rpe: Option<f64>,
  #[serde(default)]
  pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
  pub id: String,
  #[serde(default)]
  pub name: String,
  /// Entry order; meaningful for display and for the 1RM tie-break
  #[serde(default)]
  pub sets: Vec<Set>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
  pub id: String,
  /// ISO-8601 calendar date (YYYY-MM-DD)
  pub date: String,
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub exercises: Vec<Exercise>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

/// ---------------------------------------------------------------------------
/// Set
/// ---------------------------------------------------------------------------

impl Set {
  /// Blank set as added from the exercise card: no load yet, moderate effort
  pub fn new() -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      reps: 0,
      weight: Some(0.0),
      rir: Some(2.0),
      rpe: Some(8.0),
      completed: false,
    }
  }

  /// Set reps in reserve and derive RPE so the pair stays on the 10-point scale
  pub fn with_rir(mut self, rir: f64) -> Self {
    let rir = snap_to_half(rir).clamp(RIR_RANGE.0, RIR_RANGE.1);
    self.rir = Some(rir);
    self.rpe = Some(10.0 - rir);
    self
  }

  /// Set RPE and derive reps in reserve
  pub fn with_rpe(mut self, rpe: f64) -> Self {
    let rpe = snap_to_half(rpe).clamp(RPE_RANGE.0, RPE_RANGE.1);
    self.rpe = Some(rpe);
    self.rir = Some(10.0 - rpe);
    self
  }

  pub fn toggle_completed(&mut self) {
    self.completed = !self.completed;
  }

  /// `rir + rpe == 10` when both are recorded. Imported data is not guaranteed
  /// to satisfy this, so callers should check rather than assume.
  pub fn effort_is_consistent(&self) -> bool {
    match (self.rir, self.rpe) {
      (Some(rir), Some(rpe)) => (rir + rpe - 10.0).abs() < f64::EPSILON,
      _ => true,
    }
  }
}

impl Default for Set {
  fn default() -> Self {
    Self::new()
  }
}

fn snap_to_half(value: f64) -> f64 {
  (value * 2.0).round() / 2.0
}

/// ---------------------------------------------------------------------------
/// Exercise
/// ---------------------------------------------------------------------------

impl Exercise {
  pub fn new() -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      name: String::new(),
      sets: Vec::new(),
      notes: Some(String::new()),
    }
  }

  pub fn add_set(&mut self, set: Set) {
    self.sets.push(set);
  }

  /// Replace the set with the same id; unknown ids are ignored
  pub fn update_set(&mut self, updated: Set) {
    if let Some(slot) = self.sets.iter_mut().find(|s| s.id == updated.id) {
      *slot = updated;
    }
  }

  pub fn remove_set(&mut self, set_id: &str) {
    self.sets.retain(|s| s.id != set_id);
  }
}

impl Default for Exercise {
  fn default() -> Self {
    Self::new()
  }
}

/// ---------------------------------------------------------------------------
/// Workout
/// ---------------------------------------------------------------------------

impl Workout {
  /// Empty workout dated today (local calendar)
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      id: Uuid::new_v4().to_string(),
      date: Local::now().date_naive().format(DATE_FORMAT).to_string(),
      name: name.into(),
      exercises: Vec::new(),
      notes: Some(String::new()),
    }
  }

  pub fn add_exercise(&mut self, exercise: Exercise) {
    self.exercises.push(exercise);
  }

  /// Replace the exercise with the same id; unknown ids are ignored
  pub fn update_exercise(&mut self, updated: Exercise) {
    if let Some(slot) = self.exercises.iter_mut().find(|e| e.id == updated.id) {
      *slot = updated;
    }
  }

  pub fn remove_exercise(&mut self, exercise_id: &str) {
    self.exercises.retain(|e| e.id != exercise_id);
  }

  pub fn calendar_date(&self) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
  }
}
