//! Test utilities and helpers for unit testing
//!
//! Mock data factories and fixtures shared by the module tests.

use crate::models::{Exercise, Set, Workout};

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Completed set with the given load; no effort recorded
pub fn make_set(id: &str, weight: Option<f64>, reps: u32) -> Set {
  Set {
    id: id.to_string(),
    reps,
    weight,
    rir: None,
    rpe: None,
    completed: true,
  }
}

pub fn make_exercise(name: &str, sets: Vec<Set>) -> Exercise {
  Exercise {
    id: format!("ex_{}", name.to_lowercase().replace(' ', "_")),
    name: name.to_string(),
    sets,
    notes: None,
  }
}

pub fn make_workout(name: &str, date: &str, exercises: Vec<Exercise>) -> Workout {
  Workout {
    id: format!("w_{}", date),
    date: date.to_string(),
    name: name.to_string(),
    exercises,
    notes: None,
  }
}

/// A realistic upper-body session with effort data
pub fn mock_upper_body_workout() -> Workout {
  let mut bench_top = make_set("s2", Some(80.0), 5);
  bench_top.rir = Some(1.0);
  bench_top.rpe = Some(9.0);

  make_workout(
    "Upper Body",
    "2023-01-01",
    vec![
      make_exercise("Bench Press", vec![make_set("s1", Some(60.0), 8), bench_top]),
      make_exercise("Rows", vec![make_set("s3", Some(80.0), 10)]),
    ],
  )
}

/// ---------------------------------------------------------------------------
/// JSON Fixtures
/// ---------------------------------------------------------------------------

/// Exported upper-body session: two 100 x 5 bench sets (the second with
/// rir 2 / rpe 8) and one 80 x 10 row set left uncompleted
pub const UPPER_BODY_JSON: &str = r#"{
  "id": "w1",
  "date": "2023-01-01",
  "name": "Upper Body",
  "exercises": [
    {
      "id": "e1",
      "name": "Bench Press",
      "sets": [
        { "id": "s1", "reps": 5, "weight": 100, "completed": true },
        { "id": "s2", "reps": 5, "weight": 100, "rir": 2, "rpe": 8, "completed": true }
      ]
    },
    {
      "id": "e2",
      "name": "Rows",
      "sets": [
        { "id": "s3", "reps": 10, "weight": 80, "completed": false }
      ],
      "notes": "Pause at the top"
    }
  ],
  "notes": ""
}"#;
