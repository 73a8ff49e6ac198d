//! Measure how long things take, with a terse reading.

use std::time::{Duration, Instant};

/// Wall-clock stopwatch.
///
/// ```
/// let t = anita::Timer::start();
/// let reading = t.read();
/// assert!(reading.starts_with('[') && reading.ends_with(" s]"));
/// ```
#[derive(Debug, Clone)]
pub struct Timer {
    started: Instant,
    frozen: Option<Duration>,
}

impl Timer {
    pub fn start() -> Self {
        Timer {
            started: Instant::now(),
            frozen: None,
        }
    }

    /// Freeze the reading at the current elapsed time.
    pub fn stop(&mut self) {
        self.frozen = Some(self.started.elapsed());
    }

    /// Restart from zero, discarding any frozen reading.
    pub fn reset(&mut self) {
        self.started = Instant::now();
        self.frozen = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.frozen.unwrap_or_else(|| self.started.elapsed())
    }

    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Reading in the form `[1.234 s]`.
    pub fn read(&self) -> String {
        format!("[{:.3} s]", self.seconds())
    }
}
