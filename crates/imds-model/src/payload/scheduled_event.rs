use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::{ModelError, ModelResult, format_event_time, metadata};

/// Single entry of the scheduled maintenance events listing.
///
/// Field names follow the IMDS wire format (`NotBefore`, `EventId`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduledEventDetail {
    pub not_before: String,
    pub code: String,
    pub description: String,
    pub event_id: String,
    pub not_after: String,
    pub state: String,
}

impl ScheduledEventDetail {
    /// Lead time between the request and the start of the window.
    pub const NOT_BEFORE_OFFSET: Duration = Duration::minutes(2);
    /// Lead time between the request and the end of the window.
    pub const NOT_AFTER_OFFSET: Duration = Duration::minutes(4);

    /// System reboot event whose window is anchored at `now`.
    pub fn system_reboot(now: OffsetDateTime, state: impl Into<String>) -> ModelResult<Self> {
        let not_before = now
            .checked_add(Self::NOT_BEFORE_OFFSET)
            .ok_or_else(|| ModelError::TimeRange("event window start overflows".into()))?;
        let not_after = now
            .checked_add(Self::NOT_AFTER_OFFSET)
            .ok_or_else(|| ModelError::TimeRange("event window end overflows".into()))?;

        Ok(Self {
            not_before: format_event_time(not_before)?,
            code: metadata::EVENT_CODE.to_string(),
            description: metadata::EVENT_DESCRIPTION.to_string(),
            event_id: metadata::EVENT_ID.to_string(),
            not_after: format_event_time(not_after)?,
            state: state.into(),
        })
    }
}
