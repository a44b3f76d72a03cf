//! Structured logging setup

use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Json,
  Pretty,
  Compact,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
  /// Log level (trace, debug, info, warn, error)
  pub level: String,
  pub format: LogFormat,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: "warn".into(),
      format: LogFormat::Compact,
    }
  }
}

impl LoggingConfig {
  /// `RUST_LOG` for the level, `LOG_FORMAT` for json/pretty/compact.
  /// Load `.env` before calling this so those settings take effect.
  pub fn from_env() -> Self {
    Self::from_vars()
  }

  fn from_vars() -> Self {
    let level = env::var("RUST_LOG").unwrap_or_else(|_| "warn".into());
    let format = parse_format(env::var("LOG_FORMAT").ok().as_deref());
    Self { level, format }
  }

  /// Force debug output for this crate, as with `--verbose`
  pub fn verbose(mut self) -> Self {
    self.level = "debug".into();
    self
  }

  fn filter(&self) -> EnvFilter {
    EnvFilter::new(&self.level).add_directive(
      format!("lift_log_lib={}", self.level)
        .parse()
        .unwrap_or_else(|_| tracing::Level::INFO.into()),
    )
  }

  /// Install the global subscriber. Logs go to stderr so command output on
  /// stdout stays machine readable.
  pub fn init(&self) -> Result<()> {
    let registry = tracing_subscriber::registry().with(self.filter());

    match self.format {
      LogFormat::Json => registry
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()?,
      LogFormat::Pretty => registry
        .with(
          fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr),
        )
        .try_init()?,
      LogFormat::Compact => registry
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .try_init()?,
    }

    Ok(())
  }
}

fn parse_format(raw: Option<&str>) -> LogFormat {
  match raw {
    Some("json") => LogFormat::Json,
    Some("pretty") => LogFormat::Pretty,
    _ => LogFormat::Compact,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;
  use std::fs;

  #[test]
  fn test_parse_format() {
    assert_eq!(parse_format(Some("json")), LogFormat::Json);
    assert_eq!(parse_format(Some("pretty")), LogFormat::Pretty);
    assert_eq!(parse_format(Some("xml")), LogFormat::Compact);
    assert_eq!(parse_format(None), LogFormat::Compact);
  }

  #[test]
  #[serial]
  fn test_reads_settings_loaded_from_dotenv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env");
    fs::write(&path, "RUST_LOG=info\nLOG_FORMAT=json\n").unwrap();

    temp_env::with_vars_unset(["RUST_LOG", "LOG_FORMAT"], || {
      dotenvy::from_path(&path).unwrap();
      let config = LoggingConfig::from_vars();
      assert_eq!(config.level, "info");
      assert_eq!(config.format, LogFormat::Json);
    });
  }

  #[test]
  #[serial]
  fn test_defaults_when_unset() {
    temp_env::with_vars_unset(["RUST_LOG", "LOG_FORMAT"], || {
      let config = LoggingConfig::from_vars();
      assert_eq!(config.level, "warn");
      assert_eq!(config.format, LogFormat::Compact);
    });
  }

  #[test]
  fn test_verbose_overrides_level() {
    let config = LoggingConfig::default().verbose();
    assert_eq!(config.level, "debug");
  }
}
