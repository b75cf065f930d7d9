use imds_model::{Flag, config_keys, parse_bool};
use tracing::{debug, info, warn};

use crate::{config::ConfigSource, gate::TokenMode};

/// Typed, defaulting view over a [`ConfigSource`].
///
/// Never fails: malformed values are logged and replaced.
pub struct Resolver<'a, S: ?Sized> {
    source: &'a S,
}

impl<'a, S> Resolver<'a, S>
where
    S: ConfigSource + ?Sized,
{
    /// Create a resolver over `source`.
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Value of `key` if present (even when empty), otherwise `default`.
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.source
            .lookup(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Enablement of a gated path.
    ///
    /// Unset or empty is enabled; an unparsable value is disabled.
    pub fn path_enabled(&self, flag: &str) -> Flag {
        let raw = self.get_or(flag, "");
        if raw.is_empty() {
            info!(flag, "flag is not set, defaulting path to enabled");
            return Flag::enabled();
        }
        match raw.parse::<Flag>() {
            Ok(parsed) => parsed,
            Err(_) => {
                info!(flag, value = %raw, "flag is not a valid boolean, treating as disabled");
                Flag::disabled()
            }
        }
    }

    /// Seconds to hide interruption signals after startup.
    pub fn interruption_delay(&self) -> i64 {
        let key = config_keys::INTERRUPTION_NOTICE_DELAY;
        let default = config_keys::INTERRUPTION_NOTICE_DELAY_DEFAULT;

        let Some(raw) = self.source.lookup(key) else {
            return default;
        };
        match raw.parse::<i64>() {
            Ok(secs) => secs,
            Err(_) => {
                warn!(key, value = %raw, default, "could not parse integer, using default");
                default
            }
        }
    }

    /// IMDSv2 mode. Anything but a valid `true` literal leaves v2 disabled.
    pub fn token_mode(&self) -> TokenMode {
        let raw = self.get_or(config_keys::ENABLE_IMDS_V2, "false");
        let enabled = parse_bool(&raw).unwrap_or(false);
        let mode = TokenMode::from(Flag::from(enabled));
        if mode.is_enabled() {
            debug!("IMDSv2 is enabled, v1 access to protected paths is rejected");
        } else {
            debug!("IMDSv2 is not enabled");
        }
        mode
    }

    /// `State` reported by scheduled maintenance events.
    pub fn scheduled_event_state(&self) -> String {
        self.get_or(
            config_keys::SCHEDULED_EVENT_STATUS,
            config_keys::SCHEDULED_EVENT_STATUS_DEFAULT,
        )
    }
}
