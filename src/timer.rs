use std::time::Instant;

/// Wall-clock stopwatch backed by a monotonic clock.
///
/// The baseline is captured on construction and moved forward by
/// [`reset`](Self::reset).
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTimer {
    start: Instant,
}

impl ElapsedTimer {
    /// Starts a new timer at the current instant.
    ///
    /// # Examples
    ///
    /// ```
    /// use stdset_bench::ElapsedTimer;
    ///
    /// let timer = ElapsedTimer::new();
    /// assert!(timer.elapsed() >= 0.);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Moves the baseline to the current instant.
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Returns the time elapsed since the baseline, in fractional
    /// milliseconds.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1e3
    }
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}
