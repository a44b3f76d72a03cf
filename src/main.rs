//! lift-log command line
//!
//! ```bash
//! # Volume, estimated 1RM and warm-ups for a logged workout
//! lift-log report workout_Upper_Body_2023-01-01.txt
//!
//! # Warm-up ladder for a 112 kg working weight
//! lift-log warmup 112
//!
//! # Estimated 1RM over time
//! lift-log progress logs/*.txt
//!
//! # Rest between sets
//! lift-log timer --seconds 90
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lift_log_lib::commands;
use lift_log_lib::config::AppConfig;
use lift_log_lib::logging::LoggingConfig;

#[derive(Parser)]
#[command(
  name = "lift-log",
  version,
  about = "Workout logbook analytics",
  long_about = "Estimated one-rep max, training volume, warm-up ladders and rest timing for JSON workout logs."
)]
struct Cli {
  #[command(subcommand)]
  command: Command,

  /// Enable debug logging
  #[arg(long, short = 'v', global = true)]
  verbose: bool,
}

#[derive(Subcommand)]
enum Command {
  /// Volume, estimated one-rep max and warm-up sets for a workout
  Report {
    file: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
  },

  /// Warm-up ladder leading into a working weight
  Warmup { weight: f64 },

  /// Estimated one-rep max over time across workouts
  Progress {
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[arg(long)]
    json: bool,
  },

  /// Re-export a workout under its canonical file name
  Export { file: PathBuf },

  /// Print a new, empty workout dated today
  New { name: String },

  /// Rest timer countdown
  Timer {
    /// Duration in seconds (5-600, rounded to 5)
    #[arg(long, short = 's')]
    seconds: Option<u32>,
  },
}

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();

  // .env may carry RUST_LOG and LOG_FORMAT too
  dotenvy::dotenv().ok();

  let logging = if cli.verbose {
    LoggingConfig::from_env().verbose()
  } else {
    LoggingConfig::from_env()
  };
  if let Err(e) = logging.init() {
    eprintln!("Failed to initialize logging: {}", e);
  }

  let config = match AppConfig::from_env() {
    Ok(config) => config,
    Err(e) => {
      eprintln!("{}", e);
      return ExitCode::FAILURE;
    }
  };
  tracing::debug!(?config, "Loaded configuration");

  let result = match &cli.command {
    Command::Report { file, json } => commands::report(file, *json, &config),
    Command::Warmup { weight } => commands::warmup(*weight, &config),
    Command::Progress { files, json } => commands::progress(files, *json, &config),
    Command::Export { file } => commands::export(file, &config),
    Command::New { name } => commands::new_workout(name),
    Command::Timer { seconds } => commands::rest_timer(*seconds, &config).await,
  };

  match result {
    Ok(output) => {
      print!("{}", output);
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("{}", e);
      ExitCode::FAILURE
    }
  }
}
