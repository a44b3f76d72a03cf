//! Rest timer command

use std::io::Write;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::timer::{format_time, run_countdown, RestTimer, TimerEvent};

pub const COMPLETE_MESSAGE: &str = "Time to start your next set!";

/// Count down in the terminal, redrawing one line per second
pub async fn rest_timer(seconds: Option<u32>, config: &AppConfig) -> Result<String, String> {
  let mut stdout = std::io::stdout();
  run_with_output(seconds.unwrap_or(config.rest_seconds), &mut stdout).await
}

pub(crate) async fn run_with_output<W: Write>(seconds: u32, out: &mut W) -> Result<String, String> {
  let mut timer = RestTimer::new(seconds);
  timer.toggle();
  draw(out, timer.remaining())?;

  let (tx, mut rx) = mpsc::channel(8);
  let countdown = tokio::spawn(async move {
    run_countdown(&mut timer, tx).await;
    timer
  });

  while let Some(event) = rx.recv().await {
    match event {
      TimerEvent::Tick(remaining) => draw(out, remaining)?,
      TimerEvent::Completed => draw(out, 0)?,
    }
  }

  let timer = countdown
    .await
    .map_err(|e| format!("Timer task failed: {}", e))?;
  writeln!(out).map_err(|e| format!("Failed to write timer output: {}", e))?;

  if timer.remaining() == 0 {
    Ok(format!("{}\n", COMPLETE_MESSAGE))
  } else {
    Err(format!("Timer stopped with {} remaining", format_time(timer.remaining())))
  }
}

fn draw<W: Write>(out: &mut W, remaining: u32) -> Result<(), String> {
  write!(out, "\rRest Timer  {}", format_time(remaining))
    .and_then(|_| out.flush())
    .map_err(|e| format!("Failed to write timer output: {}", e))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test(start_paused = true)]
  async fn test_rest_timer_counts_down() {
    let mut out = Vec::new();

    let message = run_with_output(5, &mut out).await.unwrap();

    assert_eq!(message, "Time to start your next set!\n");
    let drawn = String::from_utf8(out).unwrap();
    assert!(drawn.starts_with("\rRest Timer  00:05"));
    assert!(drawn.contains("\rRest Timer  00:01"));
    assert!(drawn.ends_with("\rRest Timer  00:00\n"));
  }

  #[tokio::test(start_paused = true)]
  async fn test_rest_timer_normalizes_duration() {
    let mut out = Vec::new();
    run_with_output(3, &mut out).await.unwrap();
    // Below the minimum, so it runs for 5 seconds
    assert!(String::from_utf8(out).unwrap().starts_with("\rRest Timer  00:05"));
  }
}
