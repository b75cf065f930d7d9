//! Well-known strings of the simulated metadata service.
//!
//! Paths, canned instance values, header names and configuration keys live here
//! so the router, the HTTP layer and the tests share a single source of truth.

/// Request paths answered with something other than the `{}` fallback.
pub mod paths {
    /// IMDSv2 session token endpoint (`PUT` only while v2 is enabled).
    pub const TOKEN: &str = "/latest/api/token";
    /// Spot interruption notice.
    pub const SPOT_INSTANCE_ACTION: &str = "/latest/meta-data/spot/instance-action";
    /// Scheduled maintenance events.
    pub const SCHEDULED_MAINTENANCE_EVENTS: &str = "/latest/meta-data/events/maintenance/scheduled";

    pub const INSTANCE_ID: &str = "/latest/meta-data/instance-id";
    pub const INSTANCE_TYPE: &str = "/latest/meta-data/instance-type";
    pub const PUBLIC_HOSTNAME: &str = "/latest/meta-data/public-hostname";
    pub const PUBLIC_IPV4: &str = "/latest/meta-data/public-ipv4";
    pub const LOCAL_HOSTNAME: &str = "/latest/meta-data/local-hostname";
    pub const LOCAL_IPV4: &str = "/latest/meta-data/local-ipv4";
}

/// Canned instance metadata values.
pub mod metadata {
    pub const INSTANCE_ID: &str = "i-1234567890abcdef0";
    pub const INSTANCE_TYPE: &str = "m4.large";
    pub const PUBLIC_HOSTNAME: &str = "ec2-12-34-56-89.compute-1.amazonaws.com";
    pub const PUBLIC_IPV4: &str = "12.34.56.89";
    pub const LOCAL_HOSTNAME: &str = "ip-87-65-43-21.ec2.internal";
    pub const LOCAL_IPV4: &str = "87.65.43.21";

    /// Action reported by the spot interruption notice.
    pub const SPOT_ACTION: &str = "terminate";

    pub const EVENT_CODE: &str = "system-reboot";
    pub const EVENT_DESCRIPTION: &str = "scheduled reboot";
    pub const EVENT_ID: &str = "instance-event-0d59937288b749b32";

    /// Body returned when a gated path is switched off.
    pub const FEATURE_DISABLED_MESSAGE: &str = "ec2-metadata-test-proxy feature not enabled";
}

/// IMDSv2 token handshake constants.
pub mod token {
    /// The only token ever issued. Validation is equality against this value.
    pub const VALUE: &str = "token";
    /// Request header carrying the token on protected paths.
    pub const HEADER: &str = "X-aws-ec2-metadata-token";
    /// Response header advertising the token lifetime.
    pub const TTL_HEADER: &str = "X-aws-ec2-metadata-token-ttl-seconds";
    /// Advertised lifetime in seconds. Never enforced.
    pub const TTL_SECONDS: &str = "1000";
}

/// Configuration keys and their defaults.
pub mod config_keys {
    pub const PORT: &str = "PORT";
    pub const PORT_DEFAULT: &str = "1338";

    pub const INTERRUPTION_NOTICE_DELAY: &str = "INTERRUPTION_NOTICE_DELAY";
    pub const INTERRUPTION_NOTICE_DELAY_DEFAULT: i64 = 0;

    pub const ENABLE_SPOT_ITN: &str = "ENABLE_SPOT_ITN";
    pub const ENABLE_SCHEDULED_MAINTENANCE_EVENTS: &str = "ENABLE_SCHEDULED_MAINTENANCE_EVENTS";

    pub const SCHEDULED_EVENT_STATUS: &str = "SCHEDULED_EVENT_STATUS";
    pub const SCHEDULED_EVENT_STATUS_DEFAULT: &str = "active";

    pub const ENABLE_IMDS_V2: &str = "ENABLE_IMDS_V2";
}
