pub mod analysis;
pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod timer;
pub mod transfer;

#[cfg(test)]
mod test_utils;

pub use analysis::{
  build_report, estimate_one_rep_max, generate_warmup_ladder, heaviest_weight, strength_progress,
  summarize_volume, warmup_for_exercise,
};
pub use models::{Exercise, Set, Workout};
