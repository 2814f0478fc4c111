//! Gravity timer - turns elapsed frame time into descent events.
//!
//! The control loop owns the clock and calls [`GravityTimer::advance`] once per
//! frame; the timer itself never runs on its own. Disarming drops any
//! accumulated time, so a superseded session can never receive a stale tick.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityTimer {
    interval_ms: Option<u32>,
    elapsed_ms: u32,
}

impl GravityTimer {
    /// A timer that is not armed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm with `interval_ms`, cancelling any previous arming.
    pub fn arm(&mut self, interval_ms: u32) {
        self.interval_ms = Some(interval_ms.max(1));
        self.elapsed_ms = 0;
    }

    pub fn disarm(&mut self) {
        self.interval_ms = None;
        self.elapsed_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.interval_ms.is_some()
    }

    pub fn interval_ms(&self) -> Option<u32> {
        self.interval_ms
    }

    /// Time accumulated toward the next fire.
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Advance by `elapsed_ms` and return how many intervals completed.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let Some(interval) = self.interval_ms else {
            return 0;
        };
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let fires = self.elapsed_ms / interval;
        self.elapsed_ms %= interval;
        fires
    }
}
