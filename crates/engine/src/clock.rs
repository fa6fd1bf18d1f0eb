//! Fixed-period tick accounting.

/// Turns elapsed wall time into a number of due ticks.
///
/// The host measures time however it likes and feeds the elapsed milliseconds
/// in; leftover time carries over to the next call, so ticks do not drift when
/// frames arrive late. Once stopped, the clock never reports another tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickClock {
    interval_ms: u32,
    accumulator_ms: u32,
    stopped: bool,
}

impl TickClock {
    /// `interval_ms` is clamped to at least 1; configuration validation
    /// rejects zero before a clock is ever built.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
            stopped: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Add elapsed time and return how many ticks are now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.stopped {
            return 0;
        }
        let total = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = total / self.interval_ms;
        self.accumulator_ms = total % self.interval_ms;
        due
    }

    /// Milliseconds until the next tick falls due (0 when stopped).
    pub fn time_until_next_ms(&self) -> u32 {
        if self.stopped {
            return 0;
        }
        self.interval_ms - self.accumulator_ms
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.accumulator_ms = 0;
    }
}
