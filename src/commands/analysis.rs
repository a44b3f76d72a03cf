//! Commands that render analytics for the terminal

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::analysis::{build_report, generate_warmup_ladder, strength_progress};
use crate::config::AppConfig;
use crate::models::{WarmupSet, Workout, WorkoutReport};
use crate::transfer::read_workout_file;

/// ---------------------------------------------------------------------------
/// Workout Report
/// ---------------------------------------------------------------------------

/// Volume, estimated maxes and warm-ups for a workout file
pub fn report(path: &Path, json: bool, config: &AppConfig) -> Result<String, String> {
  let workout = read_workout_file(path)
    .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;

  let report = build_report(&workout);
  tracing::debug!(
    workout = %report.workout_name,
    exercises = report.volume.len(),
    "Built workout report"
  );

  if json {
    serde_json::to_string_pretty(&report)
      .map(|text| text + "\n")
      .map_err(|e| format!("Failed to encode report: {}", e))
  } else {
    Ok(render_report(&workout, &report, &config.weight_unit))
  }
}

pub(crate) fn render_report(workout: &Workout, report: &WorkoutReport, unit: &str) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "{} ({})", report.workout_name, report.date);

  let _ = writeln!(out, "\nVolume Analysis");
  if report.volume.is_empty() {
    let _ = writeln!(out, "  Add exercises to your workout to see volume analysis.");
  }
  for item in &report.volume {
    let _ = writeln!(
      out,
      "  {}: {} {}  ({} sets × {} reps)",
      item.exercise_name,
      format_weight(item.total_volume),
      unit,
      item.set_count,
      item.total_reps
    );
  }

  let _ = writeln!(out, "\nEstimated One-Rep Max");
  if workout.exercises.is_empty() {
    let _ = writeln!(
      out,
      "  Add exercises with weight and reps to calculate your estimated 1RM."
    );
  }
  for entry in &report.one_rep_maxes {
    let _ = writeln!(
      out,
      "  {}: {:.1} {}",
      entry.exercise_name, entry.estimated_one_rep_max, unit
    );
  }

  if !report.warmups.is_empty() {
    let _ = writeln!(out, "\nWarm-up Sets");
    for plan in &report.warmups {
      let _ = writeln!(
        out,
        "  {} (working weight {} {})",
        plan.exercise_name,
        format_weight(plan.working_weight),
        unit
      );
      out.push_str(&render_ladder(&plan.sets, unit, "    "));
    }
  }

  out
}

/// ---------------------------------------------------------------------------
/// Warm-up Ladder
/// ---------------------------------------------------------------------------

pub fn warmup(working_weight: f64, config: &AppConfig) -> Result<String, String> {
  if !working_weight.is_finite() || working_weight < 0.0 {
    return Err(format!("Working weight must be a non-negative number, got {}", working_weight));
  }

  let ladder = generate_warmup_ladder(working_weight);
  let mut out = format!(
    "Warm-up for {} {}\n",
    format_weight(working_weight),
    config.weight_unit
  );
  out.push_str(&render_ladder(&ladder, &config.weight_unit, "  "));
  Ok(out)
}

fn render_ladder(sets: &[WarmupSet], unit: &str, indent: &str) -> String {
  sets
    .iter()
    .enumerate()
    .map(|(i, set)| {
      format!(
        "{}Set {}: {} {} × {}\n",
        indent,
        i + 1,
        format_weight(set.weight),
        unit,
        set.reps
      )
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Strength Progress
/// ---------------------------------------------------------------------------

/// Estimated 1RM over time across several workout files
pub fn progress(paths: &[PathBuf], json: bool, config: &AppConfig) -> Result<String, String> {
  let workouts = paths
    .iter()
    .map(|path| {
      read_workout_file(path).map_err(|e| format!("Failed to load {}: {}", path.display(), e))
    })
    .collect::<Result<Vec<_>, _>>()?;

  let series = strength_progress(&workouts);

  if json {
    return serde_json::to_string_pretty(&series)
      .map(|text| text + "\n")
      .map_err(|e| format!("Failed to encode progress: {}", e));
  }

  if series.is_empty() {
    return Ok("No sets with weight and reps to track yet.\n".to_string());
  }

  let mut out = String::new();
  for s in &series {
    let _ = writeln!(out, "{}", s.exercise_name);
    for point in &s.points {
      let _ = writeln!(
        out,
        "  {}  {:.1} {}",
        point.date, point.estimated_one_rep_max, config.weight_unit
      );
    }
  }
  Ok(out)
}

/// Whole numbers without a decimal, everything else to one place
pub(crate) fn format_weight(value: f64) -> String {
  if value.fract().abs() < f64::EPSILON {
    format!("{:.0}", value)
  } else {
    format!("{:.1}", value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{make_exercise, make_set, make_workout, UPPER_BODY_JSON};
  use crate::transfer::write_workout_file;
  use std::fs;

  #[test]
  fn test_format_weight() {
    assert_eq!(format_weight(100.0), "100");
    assert_eq!(format_weight(62.5), "62.5");
    assert_eq!(format_weight(0.0), "0");
  }

  #[test]
  fn test_warmup_command() {
    let out = warmup(112.0, &AppConfig::default()).unwrap();
    assert_eq!(
      out,
      "Warm-up for 112 kg\n  Set 1: 45 kg × 10\n  Set 2: 65 kg × 8\n  Set 3: 90 kg × 5\n  Set 4: 100 kg × 3\n"
    );
  }

  #[test]
  fn test_warmup_rejects_negative() {
    assert!(warmup(-5.0, &AppConfig::default()).is_err());
    assert!(warmup(f64::NAN, &AppConfig::default()).is_err());
  }

  #[test]
  fn test_report_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upper.json");
    fs::write(&path, UPPER_BODY_JSON).unwrap();

    let out = report(&path, false, &AppConfig::default()).unwrap();

    assert!(out.starts_with("Upper Body (2023-01-01)\n"));
    assert!(out.contains("  Bench Press: 1000 kg  (2 sets × 10 reps)"));
    assert!(out.contains("  Rows: 800 kg  (1 sets × 10 reps)"));
    // 100 x 5 -> 100 * 36 / 32
    assert!(out.contains("  Bench Press: 112.5 kg"));
    assert!(out.contains("  Bench Press (working weight 100 kg)"));
    assert!(out.contains("    Set 4: 90 kg × 3"));
  }

  #[test]
  fn test_report_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upper.json");
    fs::write(&path, UPPER_BODY_JSON).unwrap();

    let out = report(&path, true, &AppConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["volume"][0]["exerciseName"], "Bench Press");
    assert_eq!(value["volume"][0]["totalVolume"], 1000.0);
    assert_eq!(value["oneRepMaxes"][1]["estimatedOneRepMax"], 80.0 * (36.0 / 27.0));
  }

  #[test]
  fn test_report_empty_workout_hints() {
    let workout = make_workout("Rest Day", "2023-01-02", vec![]);
    let out = render_report(&workout, &build_report(&workout), "kg");
    assert!(out.contains("Add exercises to your workout to see volume analysis."));
    assert!(out.contains("Add exercises with weight and reps to calculate your estimated 1RM."));
    assert!(!out.contains("Warm-up Sets"));
  }

  #[test]
  fn test_report_missing_file() {
    let err = report(&PathBuf::from("/nonexistent/w.json"), false, &AppConfig::default())
      .unwrap_err();
    assert!(err.starts_with("Failed to load /nonexistent/w.json"));
  }

  #[test]
  fn test_progress_across_files() {
    let dir = tempfile::tempdir().unwrap();
    let first = make_workout(
      "A",
      "2025-04-10",
      vec![make_exercise("Squat", vec![make_set("s1", Some(100.0), 1)])],
    );
    let second = make_workout(
      "B",
      "2025-04-12",
      vec![make_exercise("Squat", vec![make_set("s2", Some(105.0), 1)])],
    );
    let paths = vec![
      write_workout_file(dir.path(), &second).unwrap(),
      write_workout_file(dir.path(), &first).unwrap(),
    ];

    let out = progress(&paths, false, &AppConfig::default()).unwrap();
    assert_eq!(out, "Squat\n  2025-04-10  100.0 kg\n  2025-04-12  105.0 kg\n");
  }

  #[test]
  fn test_progress_nothing_to_track() {
    let dir = tempfile::tempdir().unwrap();
    let workout = make_workout("Mobility", "2025-04-10", vec![make_exercise("Stretch", vec![])]);
    let paths = vec![write_workout_file(dir.path(), &workout).unwrap()];

    let out = progress(&paths, false, &AppConfig::default()).unwrap();
    assert_eq!(out, "No sets with weight and reps to track yet.\n");
  }
}
