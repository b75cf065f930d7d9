//! Path dispatch for the metadata double.
//!
//! The router turns a request into an [`Outcome`]; turning that into bytes on
//! the wire is the HTTP layer's job. The three "not available" shapes
//! (hidden by delay, switched off, unknown path) are distinct variants and must
//! stay that way.
use imds_model::{InstanceAction, ScheduledEventDetail, config_keys, metadata, paths};
use time::OffsetDateTime;
use tracing::{debug, info, instrument};

use crate::{
    clock::ProcessTimes,
    config::{ConfigSource, Resolver},
    gate::{DelayGate, TokenMode, is_token_valid},
    service::MetadataRequest,
};

/// Paths answered with a fixed text body.
pub const STATIC_PATHS: [(&str, &str); 6] = [
    (paths::INSTANCE_ID, metadata::INSTANCE_ID),
    (paths::INSTANCE_TYPE, metadata::INSTANCE_TYPE),
    (paths::PUBLIC_HOSTNAME, metadata::PUBLIC_HOSTNAME),
    (paths::PUBLIC_IPV4, metadata::PUBLIC_IPV4),
    (paths::LOCAL_HOSTNAME, metadata::LOCAL_HOSTNAME),
    (paths::LOCAL_IPV4, metadata::LOCAL_IPV4),
];

/// Result of routing a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `PUT` on the token path with v2 enabled.
    TokenIssued,
    /// Any other method on the token path with v2 enabled.
    MethodNotAllowed,
    /// Gated path hidden by the interruption notice delay. Bare 404.
    NotYetVisible,
    /// Gated path switched off by its flag. 404 with an explanation.
    FeatureDisabled,
    /// Protected path without a valid token.
    Forbidden,
    InstanceAction(InstanceAction),
    ScheduledEvents(Vec<ScheduledEventDetail>),
    /// Fixed metadata value.
    Text(&'static str),
    /// Anything unmatched: 200 with `{}`.
    EmptyJson,
    /// Payload could not be built.
    Internal(String),
}

/// Routed outcome plus the per-request token mode, which decorates every response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub token_mode: TokenMode,
    pub outcome: Outcome,
}

/// Paths subject to the delay, flag and token checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatedPath {
    SpotInterruption,
    ScheduledMaintenance,
}

impl GatedPath {
    /// Look up the gated path for an exact request path.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            paths::SPOT_INSTANCE_ACTION => Some(Self::SpotInterruption),
            paths::SCHEDULED_MAINTENANCE_EVENTS => Some(Self::ScheduledMaintenance),
            _ => None,
        }
    }

    /// Configuration key switching this path on or off.
    pub fn flag_key(&self) -> &'static str {
        match self {
            Self::SpotInterruption => config_keys::ENABLE_SPOT_ITN,
            Self::ScheduledMaintenance => config_keys::ENABLE_SCHEDULED_MAINTENANCE_EVENTS,
        }
    }
}

/// Everything a single dispatch needs, sampled once per request.
pub(crate) struct Router<'a, S: ?Sized> {
    pub(crate) resolver: Resolver<'a, S>,
    pub(crate) times: &'a ProcessTimes,
    pub(crate) now: OffsetDateTime,
    pub(crate) delay: DelayGate,
    pub(crate) token_mode: TokenMode,
}

impl<S> Router<'_, S>
where
    S: ConfigSource + ?Sized,
{
    #[instrument(level = "debug", skip_all, fields(method = req.method, path = req.path))]
    pub(crate) fn dispatch(&self, req: &MetadataRequest<'_>) -> Outcome {
        if req.path == paths::TOKEN && self.token_mode.is_enabled() {
            return self.issue_token(req.method);
        }

        if let Some(gated) = GatedPath::from_path(req.path) {
            return self.gated(gated, req);
        }

        STATIC_PATHS
            .iter()
            .find(|(path, _)| *path == req.path)
            .map(|(_, value)| Outcome::Text(*value))
            .unwrap_or(Outcome::EmptyJson)
    }

    fn issue_token(&self, method: &str) -> Outcome {
        if method != "PUT" {
            debug!(method, "token path requires PUT");
            return Outcome::MethodNotAllowed;
        }
        info!("issued IMDSv2 token");
        Outcome::TokenIssued
    }

    /// Delay, then flag, then token, then payload. The order is observable.
    fn gated(&self, gated: GatedPath, req: &MetadataRequest<'_>) -> Outcome {
        if !self.delay.is_open() {
            info!(
                configured = self.delay.configured(),
                remaining = self.delay.remaining(),
                "interruption notice delay has not elapsed yet"
            );
            return Outcome::NotYetVisible;
        }

        if self.resolver.path_enabled(gated.flag_key()).is_disabled() {
            return Outcome::FeatureDisabled;
        }

        if self.token_mode.is_enabled() && !is_token_valid(req.token) {
            return Outcome::Forbidden;
        }

        match gated {
            GatedPath::SpotInterruption => {
                info!("serving spot instance action");
                Outcome::InstanceAction(InstanceAction::terminate(
                    self.times.spot_interruption_time(),
                ))
            }
            GatedPath::ScheduledMaintenance => {
                info!("serving scheduled maintenance events");
                let state = self.resolver.scheduled_event_state();
                match ScheduledEventDetail::system_reboot(self.now, state) {
                    Ok(event) => Outcome::ScheduledEvents(vec![event]),
                    Err(e) => Outcome::Internal(e.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
