use std::env;
use std::path::PathBuf;

use crate::timer::{RestTimer, DEFAULT_REST_SECONDS};

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const WEIGHT_UNIT_VAR: &str = "LIFT_LOG_WEIGHT_UNIT";
const REST_SECONDS_VAR: &str = "LIFT_LOG_REST_SECONDS";
const EXPORT_DIR_VAR: &str = "LIFT_LOG_EXPORT_DIR";

const DEFAULT_WEIGHT_UNIT: &str = "kg";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Invalid value for {key}: '{value}'")]
  Invalid { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  /// Unit label shown next to weights; values are never converted
  pub weight_unit: String,
  /// Initial rest timer duration, normalized to the timer's bounds
  pub rest_seconds: u32,
  pub export_dir: PathBuf,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      weight_unit: DEFAULT_WEIGHT_UNIT.to_string(),
      rest_seconds: DEFAULT_REST_SECONDS,
      export_dir: PathBuf::from("."),
    }
  }
}

impl AppConfig {
  /// Load from the process environment, reading `.env` first if present
  pub fn from_env() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_vars()
  }

  fn from_vars() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let weight_unit = match env::var(WEIGHT_UNIT_VAR) {
      Ok(unit) if unit.trim().is_empty() => {
        return Err(ConfigError::Invalid {
          key: WEIGHT_UNIT_VAR.into(),
          value: unit,
        })
      }
      Ok(unit) => unit.trim().to_string(),
      Err(_) => defaults.weight_unit,
    };

    let rest_seconds = match env::var(REST_SECONDS_VAR) {
      Ok(raw) => {
        let secs: u32 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
          key: REST_SECONDS_VAR.into(),
          value: raw.clone(),
        })?;
        RestTimer::new(secs).duration()
      }
      Err(_) => defaults.rest_seconds,
    };

    let export_dir = env::var(EXPORT_DIR_VAR)
      .map(PathBuf::from)
      .unwrap_or(defaults.export_dir);

    Ok(Self {
      weight_unit,
      rest_seconds,
      export_dir,
    })
  }
}
