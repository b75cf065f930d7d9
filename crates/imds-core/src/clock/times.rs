use imds_model::format_rfc3339_seconds;
use time::{Duration, OffsetDateTime};

use crate::{
    clock::Clock,
    error::{CoreError, CoreResult},
};

/// Instants fixed for the lifetime of the process.
///
/// Captured once before the listener starts and shared read-only by every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTimes {
    started_at: OffsetDateTime,
    spot_interruption_time: String,
}

impl ProcessTimes {
    /// Distance between startup and the simulated spot reclaim.
    pub const SPOT_INTERRUPTION_LEAD: Duration = Duration::minutes(2);

    /// Capture the instants from `clock`.
    pub fn capture<C: Clock + ?Sized>(clock: &C) -> CoreResult<Self> {
        Self::starting_at(clock.now())
    }

    /// Instants for a process started at `started_at`.
    pub fn starting_at(started_at: OffsetDateTime) -> CoreResult<Self> {
        let reclaim_at = started_at
            .checked_add(Self::SPOT_INTERRUPTION_LEAD)
            .ok_or_else(|| {
                CoreError::Model(imds_model::ModelError::TimeRange(
                    "spot interruption time overflows".into(),
                ))
            })?;
        Ok(Self {
            started_at,
            spot_interruption_time: format_rfc3339_seconds(reclaim_at)?,
        })
    }

    /// Process start time.
    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    /// RFC3339 reclaim instant reported by the spot interruption notice.
    pub fn spot_interruption_time(&self) -> &str {
        &self.spot_interruption_time
    }
}
