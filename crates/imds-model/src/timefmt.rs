//! Wire formats for timestamps in metadata payloads.
use time::{
    OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339,
    macros::format_description,
};

use crate::ModelResult;

/// Formats an instant as RFC3339 in UTC with whole seconds, e.g. `2026-10-16T12:02:00Z`.
pub fn format_rfc3339_seconds(t: OffsetDateTime) -> ModelResult<String> {
    let utc = t.to_offset(UtcOffset::UTC).replace_nanosecond(0)?;
    Ok(utc.format(&Rfc3339)?)
}

/// Formats an instant in the scheduled-event style, always rendered in UTC.
pub fn format_event_time(t: OffsetDateTime) -> ModelResult<String> {
    // 02 Jan 2006 15:04:05 GMT
    let format =
        format_description!("[day] [month repr:short] [year] [hour]:[minute]:[second] GMT");
    Ok(t.to_offset(UtcOffset::UTC).format(format)?)
}
