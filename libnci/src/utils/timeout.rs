// libnci/src/utils/timeout.rs
//! Deadline tracking for states that wait on the controller.

/// A relative deadline armed against a `Clock` reading. At most one is
/// active per engine; it is disarmed on every state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeout {
    started_at_ms: u64,
    duration_ms: u64,
    armed: bool,
}

impl Timeout {
    pub const fn disarmed() -> Self {
        Self {
            started_at_ms: 0,
            duration_ms: 0,
            armed: false,
        }
    }

    pub fn arm(&mut self, now_ms: u64, duration_ms: u64) {
        self.started_at_ms = now_ms;
        self.duration_ms = duration_ms;
        self.armed = true;
    }

    pub fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Armed and at least `duration_ms` elapsed since arming.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.is_armed() && now_ms.wrapping_sub(self.started_at_ms) >= self.duration_ms
    }

    /// Milliseconds left, `None` when disarmed.
    pub fn remaining(&self, now_ms: u64) -> Option<u64> {
        if !self.is_armed() {
            return None;
        }
        let elapsed = now_ms.wrapping_sub(self.started_at_ms);
        Some(self.duration_ms.saturating_sub(elapsed))
    }
}
