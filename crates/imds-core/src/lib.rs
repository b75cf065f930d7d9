pub mod clock;
pub mod config;
pub mod error;
pub mod gate;
pub mod router;
pub mod service;

pub mod prelude {
    pub use crate::clock::{Clock, ProcessTimes, SystemClock};
    #[cfg(any(test, feature = "testing"))]
    pub use crate::clock::ManualClock;
    pub use crate::config::{ConfigSource, ProcessEnv, Resolver, ServerConfig};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::gate::{DelayGate, TokenMode};
    pub use crate::router::{GatedPath, Outcome, Reply};
    pub use crate::service::{MetadataHandler, MetadataRequest, MetadataService};
}
