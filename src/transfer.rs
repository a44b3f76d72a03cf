//! Text/JSON import and export of workouts
//!
//! Import is the gate in front of the analysis layer: anything that fails to
//! parse or validate is rejected here, so callers only ever hand complete
//! `Workout` values to the engine.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::models::Workout;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
  #[error("Please enter workout data to import.")]
  Empty,

  #[error("The workout data is invalid or corrupted: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("Invalid workout date '{0}', expected YYYY-MM-DD")]
  InvalidDate(String),

  #[error("File error: {0}")]
  Io(#[from] std::io::Error),
}

impl Serialize for TransferError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Export
/// ---------------------------------------------------------------------------

/// Pretty-printed JSON, two-space indent
pub fn export_workout_to_text(workout: &Workout) -> Result<String, TransferError> {
  Ok(serde_json::to_string_pretty(workout)?)
}

/// `workout_<name>_<date>.txt` with whitespace runs in the name collapsed to `_`
pub fn export_filename(workout: &Workout) -> String {
  let mut name = String::with_capacity(workout.name.len());
  let mut in_whitespace = false;
  for c in workout.name.chars() {
    if c.is_whitespace() {
      if !in_whitespace {
        name.push('_');
      }
      in_whitespace = true;
    } else {
      name.push(c);
      in_whitespace = false;
    }
  }
  format!("workout_{}_{}.txt", name, workout.date)
}

/// Write the export into `dir`, returning the path written
pub fn write_workout_file(dir: &Path, workout: &Workout) -> Result<PathBuf, TransferError> {
  let text = export_workout_to_text(workout)?;
  fs::create_dir_all(dir)?;
  let path = dir.join(export_filename(workout));
  fs::write(&path, text)?;

  info!(path = %path.display(), workout = %workout.name, "Exported workout");
  Ok(path)
}

/// ---------------------------------------------------------------------------
/// Import
/// ---------------------------------------------------------------------------

pub fn import_workout_from_text(text: &str) -> Result<Workout, TransferError> {
  parse_workout(text).inspect_err(|e| warn!(error = %e, "Failed to parse workout data"))
}

fn parse_workout(text: &str) -> Result<Workout, TransferError> {
  if text.trim().is_empty() {
    return Err(TransferError::Empty);
  }

  let workout: Workout = serde_json::from_str(text)?;
  if workout.calendar_date().is_none() {
    return Err(TransferError::InvalidDate(workout.date));
  }

  debug!(
    workout = %workout.name,
    exercises = workout.exercises.len(),
    "Parsed workout"
  );
  Ok(workout)
}

pub fn read_workout_file(path: &Path) -> Result<Workout, TransferError> {
  let text = fs::read_to_string(path)
    .inspect_err(|e| warn!(path = %path.display(), error = %e, "Failed to read workout file"))?;
  import_workout_from_text(&text)
}
