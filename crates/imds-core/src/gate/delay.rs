use time::OffsetDateTime;

/// Visibility window for interruption-style signals.
///
/// `remaining = configured - (now - started)`, in whole Unix seconds.
/// Signals are hidden while `remaining > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayGate {
    configured: i64,
    remaining: i64,
}

impl DelayGate {
    /// Evaluate the window for a request observed at `now`.
    pub fn evaluate(configured: i64, started_at: OffsetDateTime, now: OffsetDateTime) -> Self {
        let elapsed = now.unix_timestamp() - started_at.unix_timestamp();
        Self {
            configured,
            remaining: configured.saturating_sub(elapsed),
        }
    }

    /// Check if gated signals are visible.
    pub fn is_open(&self) -> bool {
        self.remaining <= 0
    }

    /// Configured delay in seconds.
    pub fn configured(&self) -> i64 {
        self.configured
    }

    /// Seconds left until signals become visible; zero or negative once open.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }
}
