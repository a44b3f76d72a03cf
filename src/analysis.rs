//! Deterministic analysis layer for strength training logs
//!
//! Pure functions over immutable workout snapshots. Nothing in here mutates,
//! stores or logs; absent data maps to `None`, zeros or empty collections.

use crate::models::{
  Exercise, OneRepMaxEntry, StrengthPoint, StrengthSeries, VolumeSummary, WarmupPlan, WarmupSet,
  Workout, WorkoutReport,
};

/// Label used wherever an exercise has no name
pub const UNNAMED_EXERCISE: &str = "Unnamed Exercise";

/// Reps above this are treated as exactly this many in the Brzycki formula
pub const BRZYCKI_MAX_REPS: u32 = 36;

/// Warm-up weights are rounded to the nearest multiple of this
pub const PLATE_INCREMENT: f64 = 5.0;

/// (fraction of working weight, reps) for each warm-up stage
pub const WARMUP_STAGES: [(f64, u32); 4] = [(0.4, 10), (0.6, 8), (0.8, 5), (0.9, 3)];

/// Display name with the unnamed fallback applied
pub fn exercise_display_name(exercise: &Exercise) -> &str {
  if exercise.name.is_empty() {
    UNNAMED_EXERCISE
  } else {
    &exercise.name
  }
}

/// ---------------------------------------------------------------------------
/// One-Rep-Max Estimation
/// ---------------------------------------------------------------------------

/// Estimate the 1RM for an exercise from its best logged set.
///
/// The best set is the one with the largest `weight × reps` among sets where
/// both are present and positive; the earliest set wins a tie. Brzycki is then
/// applied with reps capped at 36:
///
/// `1RM = weight × 36 / (37 − min(reps, 36))`
///
/// Returns `None` when no set qualifies. No rounding is applied.
pub fn estimate_one_rep_max(exercise: &Exercise) -> Option<f64> {
  let (weight, reps) = exercise
    .sets
    .iter()
    .filter_map(|set| match set.weight {
      Some(weight) if weight > 0.0 && set.reps > 0 => Some((weight, set.reps)),
      _ => None,
    })
    .fold(None, |best: Option<(f64, u32)>, (weight, reps)| match best {
      // Only a strict improvement replaces the current best
      Some((bw, br)) if weight * reps as f64 <= bw * br as f64 => best,
      _ => Some((weight, reps)),
    })?;

  let capped = reps.min(BRZYCKI_MAX_REPS) as f64;
  Some(weight * (36.0 / (37.0 - capped)))
}

/// ---------------------------------------------------------------------------
/// Volume Aggregation
/// ---------------------------------------------------------------------------

/// Per-exercise volume for a workout, one entry per exercise in order.
///
/// A set counts only when both weight and reps are present and non-zero;
/// anything else contributes to none of the totals.
pub fn summarize_volume(workout: &Workout) -> Vec<VolumeSummary> {
  workout
    .exercises
    .iter()
    .map(|exercise| {
      let mut summary = VolumeSummary {
        exercise_name: exercise_display_name(exercise).to_string(),
        total_volume: 0.0,
        set_count: 0,
        total_reps: 0,
      };

      for set in &exercise.sets {
        if let Some(weight) = set.weight {
          if weight != 0.0 && !weight.is_nan() && set.reps != 0 {
            summary.total_volume += weight * set.reps as f64;
            summary.total_reps += u64::from(set.reps);
            summary.set_count += 1;
          }
        }
      }

      summary
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Warm-up Ladder
/// ---------------------------------------------------------------------------

/// Four-stage ramp into `working_weight` (40/60/80/90% for 10/8/5/3 reps).
///
/// Weights are rounded to the nearest 5, halves rounding up. A zero working
/// weight still yields four (zero-weight) stages; hiding them is up to the
/// caller.
pub fn generate_warmup_ladder(working_weight: f64) -> [WarmupSet; 4] {
  WARMUP_STAGES.map(|(pct, reps)| WarmupSet {
    weight: round_to_increment(working_weight * pct),
    reps,
  })
}

fn round_to_increment(weight: f64) -> f64 {
  // floor(x + 0.5) rounds .5 upward for negative inputs too
  (weight / PLATE_INCREMENT + 0.5).floor() * PLATE_INCREMENT
}

/// Heaviest positive weight logged for an exercise, 0 when there is none
pub fn heaviest_weight(exercise: &Exercise) -> f64 {
  exercise
    .sets
    .iter()
    .filter_map(|set| set.weight)
    .fold(0.0, |max, weight| if weight > max { weight } else { max })
}

/// Warm-up ladder for an exercise's heaviest set, `None` when nothing has load
pub fn warmup_for_exercise(exercise: &Exercise) -> Option<[WarmupSet; 4]> {
  let working_weight = heaviest_weight(exercise);
  if working_weight > 0.0 {
    Some(generate_warmup_ladder(working_weight))
  } else {
    None
  }
}

/// ---------------------------------------------------------------------------
/// Derived Views
/// ---------------------------------------------------------------------------

/// Volume, estimated maxes and warm-up plans for one workout
pub fn build_report(workout: &Workout) -> WorkoutReport {
  let one_rep_maxes = workout
    .exercises
    .iter()
    .filter_map(|exercise| {
      estimate_one_rep_max(exercise).map(|one_rm| OneRepMaxEntry {
        exercise_name: exercise_display_name(exercise).to_string(),
        estimated_one_rep_max: one_rm,
      })
    })
    .collect();

  let warmups = workout
    .exercises
    .iter()
    .filter_map(|exercise| {
      warmup_for_exercise(exercise).map(|sets| WarmupPlan {
        exercise_name: exercise_display_name(exercise).to_string(),
        working_weight: heaviest_weight(exercise),
        sets: sets.to_vec(),
      })
    })
    .collect();

  WorkoutReport {
    workout_name: workout.name.clone(),
    date: workout.date.clone(),
    volume: summarize_volume(workout),
    one_rep_maxes,
    warmups,
  }
}

/// Estimated 1RM per exercise name across several workouts.
///
/// Series appear in order of first appearance; points are sorted by date with
/// ties kept in input order. An exercise repeated within one workout
/// contributes its best estimate.
pub fn strength_progress(workouts: &[Workout]) -> Vec<StrengthSeries> {
  let mut series: Vec<StrengthSeries> = Vec::new();

  for workout in workouts {
    let mut best_in_workout: Vec<(&str, f64)> = Vec::new();

    for exercise in &workout.exercises {
      let Some(one_rm) = estimate_one_rep_max(exercise) else {
        continue;
      };
      let name = exercise_display_name(exercise);
      match best_in_workout.iter_mut().find(|(n, _)| *n == name) {
        Some((_, best)) => *best = best.max(one_rm),
        None => best_in_workout.push((name, one_rm)),
      }
    }

    for (name, one_rm) in best_in_workout {
      let point = StrengthPoint {
        date: workout.date.clone(),
        estimated_one_rep_max: one_rm,
      };
      match series.iter_mut().find(|s| s.exercise_name == name) {
        Some(existing) => existing.points.push(point),
        None => series.push(StrengthSeries {
          exercise_name: name.to_string(),
          points: vec![point],
        }),
      }
    }
  }

  // ISO dates sort chronologically as strings; sort_by is stable
  for s in &mut series {
    s.points.sort_by(|a, b| a.date.cmp(&b.date));
  }

  series
}
