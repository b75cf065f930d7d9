use tracing::info;

use crate::{
    clock::{Clock, ProcessTimes},
    config::{ConfigSource, Resolver},
    error::CoreResult,
    gate::DelayGate,
    router::{Reply, Router},
};

/// Transport-independent view of an inbound request.
#[derive(Debug, Clone, Copy)]
pub struct MetadataRequest<'a> {
    /// Upper-case HTTP method, e.g. `"GET"`.
    pub method: &'a str,
    pub path: &'a str,
    /// Value of the IMDSv2 token header, if sent.
    pub token: Option<&'a str>,
}

impl<'a> MetadataRequest<'a> {
    /// `GET` request without a token.
    pub fn get(path: &'a str) -> Self {
        Self {
            method: "GET",
            path,
            token: None,
        }
    }

    /// `PUT` request without a token.
    pub fn put(path: &'a str) -> Self {
        Self {
            method: "PUT",
            path,
            token: None,
        }
    }

    /// Attach an IMDSv2 token header value.
    pub fn with_token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }
}

/// Request handling seam used by the HTTP layer.
pub trait MetadataHandler: Send + Sync + 'static {
    fn handle(&self, req: &MetadataRequest<'_>) -> Reply;
}

/// The metadata double: configuration, clock and startup instants.
pub struct MetadataService<S, C> {
    source: S,
    clock: C,
    times: ProcessTimes,
}

impl<S, C> MetadataService<S, C>
where
    S: ConfigSource,
    C: Clock,
{
    /// Create a service around already captured startup instants.
    pub fn new(source: S, clock: C, times: ProcessTimes) -> Self {
        Self {
            source,
            clock,
            times,
        }
    }

    /// Captures the startup instants from `clock`.
    pub fn start(source: S, clock: C) -> CoreResult<Self> {
        let times = ProcessTimes::capture(&clock)?;
        info!(
            spot_interruption_time = times.spot_interruption_time(),
            "process times captured"
        );
        Ok(Self::new(source, clock, times))
    }
}

impl<S, C> MetadataHandler for MetadataService<S, C>
where
    S: ConfigSource + 'static,
    C: Clock + 'static,
{
    fn handle(&self, req: &MetadataRequest<'_>) -> Reply {
        let now = self.clock.now();
        let resolver = Resolver::new(&self.source);
        let delay = DelayGate::evaluate(resolver.interruption_delay(), self.times.started_at(), now);
        let token_mode = resolver.token_mode();

        let router = Router {
            resolver,
            times: &self.times,
            now,
            delay,
            token_mode,
        };
        Reply {
            token_mode,
            outcome: router.dispatch(req),
        }
    }
}
