//! Import/export commands

use std::path::Path;

use crate::config::AppConfig;
use crate::models::Workout;
use crate::transfer::{export_workout_to_text, read_workout_file, write_workout_file};

/// Re-export a workout file into the configured export directory
pub fn export(path: &Path, config: &AppConfig) -> Result<String, String> {
  let workout = read_workout_file(path)
    .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;

  let written = write_workout_file(&config.export_dir, &workout)
    .map_err(|e| format!("Failed to export workout: {}", e))?;

  Ok(format!("{}\n", written.display()))
}

/// Fresh, empty workout dated today, as export JSON
pub fn new_workout(name: &str) -> Result<String, String> {
  let workout = Workout::new(name);
  tracing::info!(id = %workout.id, date = %workout.date, "Created workout");
  export_workout_to_text(&workout)
    .map(|text| text + "\n")
    .map_err(|e| format!("Failed to encode workout: {}", e))
}
