mod error;

pub use error::TimerError;

use crate::util::{Clock, MonotonicClock};

use log::{debug, warn};

use std::{
    fmt,
    time::{Duration, Instant},
};

pub type Result<T> = std::result::Result<T, TimerError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimerState {
    Idle,
    Running,
    Stopped,
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerState::Idle => write!(f, "idle"),
            TimerState::Running => write!(f, "running"),
            TimerState::Stopped => write!(f, "stopped"),
        }
    }
}

/// Measures a single start/stop interval.
///
/// Calls must follow `start` → `stop`, with `reset` returning to the initial
/// state from anywhere. `elapsed_time` is valid once started, and is frozen
/// after `stop`.
#[derive(Clone, Debug)]
pub struct Timer<C = MonotonicClock> {
    clock: C,
    start_time: Option<Instant>,
    end_time: Option<Instant>,
}

impl Timer {
    pub fn new() -> Timer {
        Timer::with_clock(MonotonicClock)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}

impl<C: Clock> Timer<C> {
    pub fn with_clock(clock: C) -> Timer<C> {
        Timer {
            clock,
            start_time: None,
            end_time: None,
        }
    }

    pub fn start(&mut self) -> Result<&mut Self> {
        if self.start_time.is_some() {
            return Err(misuse(TimerError::AlreadyStarted));
        }

        self.start_time = Some(self.clock.now());
        debug!("Timer started");
        Ok(self)
    }

    pub fn stop(&mut self) -> Result<&mut Self> {
        let start = match self.start_time {
            Some(v) => v,
            None => return Err(misuse(TimerError::NotStarted)),
        };
        if self.end_time.is_some() {
            return Err(misuse(TimerError::AlreadyStopped));
        }

        let end = self.clock.now();
        self.end_time = Some(end);
        debug!(
            "Timer stopped after {}ms",
            end.saturating_duration_since(start).as_secs_f64() * 1000.0
        );
        Ok(self)
    }

    pub fn reset(&mut self) -> &mut Self {
        self.start_time = None;
        self.end_time = None;
        debug!("Timer reset");
        self
    }

    /// Time between start and stop, or between start and now while still running.
    pub fn elapsed_time(&self) -> Result<Duration> {
        let start = match self.start_time {
            Some(v) => v,
            None => return Err(misuse(TimerError::NotProperlyStarted)),
        };

        let end = self.end_time.unwrap_or_else(|| self.clock.now());
        Ok(end.saturating_duration_since(start))
    }

    pub fn elapsed_millis(&self) -> Result<f64> {
        Ok(self.elapsed_time()?.as_secs_f64() * 1000.0)
    }

    pub fn state(&self) -> TimerState {
        match (self.start_time, self.end_time) {
            (None, _) => TimerState::Idle,
            (Some(_), None) => TimerState::Running,
            (Some(_), Some(_)) => TimerState::Stopped,
        }
    }
}

fn misuse(err: TimerError) -> TimerError {
    warn!("{}", err);
    err
}
