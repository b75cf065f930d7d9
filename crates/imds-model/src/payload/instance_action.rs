use serde::{Deserialize, Serialize};

use crate::metadata;

/// Body of the spot interruption notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAction {
    /// RFC3339 instant at which the instance is reclaimed.
    pub time: String,
    pub action: String,
}

impl InstanceAction {
    /// Termination notice for the given instant.
    pub fn terminate(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            action: metadata::SPOT_ACTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_lowercase_keys() {
        let action = InstanceAction::terminate("2026-10-16T12:02:00Z");
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(
            json,
            r#"{"time":"2026-10-16T12:02:00Z","action":"terminate"}"#
        );
    }
}
