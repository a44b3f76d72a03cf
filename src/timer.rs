//! Rest timer between sets
//!
//! `RestTimer` is a plain state machine advanced one second at a time;
//! `run_countdown` drives it from the tokio clock and forwards events.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, info};

pub const DEFAULT_REST_SECONDS: u32 = 60;
pub const MIN_REST_SECONDS: u32 = 5;
pub const MAX_REST_SECONDS: u32 = 600;
pub const REST_STEP_SECONDS: u32 = 5;

/// Quick-pick durations offered next to the slider
pub const PRESET_TIMES: [u32; 6] = [30, 60, 90, 120, 180, 300];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerEvent {
  /// Seconds remaining after the tick
  Tick(u32),
  /// Countdown reached zero; time for the next set
  Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestTimer {
  duration: u32,
  remaining: u32,
  active: bool,
}

impl Default for RestTimer {
  fn default() -> Self {
    Self::new(DEFAULT_REST_SECONDS)
  }
}

impl RestTimer {
  pub fn new(duration: u32) -> Self {
    let duration = normalize_duration(duration);
    Self {
      duration,
      remaining: duration,
      active: false,
    }
  }

  pub fn duration(&self) -> u32 {
    self.duration
  }

  pub fn remaining(&self) -> u32 {
    self.remaining
  }

  pub fn is_active(&self) -> bool {
    self.active
  }

  /// Start or pause. A finished timer is reset before starting again.
  pub fn toggle(&mut self) {
    if self.remaining == 0 {
      self.reset();
    }
    self.active = !self.active;
  }

  pub fn reset(&mut self) {
    self.active = false;
    self.remaining = self.duration;
  }

  /// Change the duration; a running countdown keeps its current remaining time
  pub fn set_duration(&mut self, secs: u32) {
    self.duration = normalize_duration(secs);
    if !self.active {
      self.remaining = self.duration;
    }
  }

  /// Advance one second
  pub fn tick(&mut self) -> Option<TimerEvent> {
    if !self.active || self.remaining == 0 {
      return None;
    }

    self.remaining -= 1;
    if self.remaining == 0 {
      self.active = false;
      Some(TimerEvent::Completed)
    } else {
      Some(TimerEvent::Tick(self.remaining))
    }
  }
}

/// Clamp to the slider bounds and snap to the nearest step
fn normalize_duration(secs: u32) -> u32 {
  let snapped = secs.saturating_add(REST_STEP_SECONDS / 2) / REST_STEP_SECONDS * REST_STEP_SECONDS;
  snapped.clamp(MIN_REST_SECONDS, MAX_REST_SECONDS)
}

/// `MM:SS`, zero padded
pub fn format_time(secs: u32) -> String {
  format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Tick `timer` once per second until it completes, is paused, or the
/// receiving side goes away.
pub async fn run_countdown(timer: &mut RestTimer, events: mpsc::Sender<TimerEvent>) {
  if !timer.is_active() {
    return;
  }

  let mut interval = time::interval(Duration::from_secs(1));
  // The first tick of a tokio interval fires immediately
  interval.tick().await;

  loop {
    interval.tick().await;

    let Some(event) = timer.tick() else {
      break;
    };

    if events.send(event).await.is_err() {
      debug!(remaining = timer.remaining(), "Timer listener dropped, stopping countdown");
      break;
    }

    if event == TimerEvent::Completed {
      info!(duration = timer.duration(), "Rest timer complete");
      break;
    }
  }
}
