mod domain;
pub use domain::{Env, Flag, KeyValue, parse_bool};
pub use domain::{config_keys, metadata, paths, token};

mod error;
pub use error::{ModelError, ModelResult};

mod payload;
pub use payload::{InstanceAction, ScheduledEventDetail};

mod timefmt;
pub use timefmt::{format_event_time, format_rfc3339_seconds};
