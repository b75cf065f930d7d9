use std::net::{Ipv4Addr, SocketAddr};

use imds_model::config_keys;

use crate::{
    config::{ConfigSource, Resolver},
    error::{CoreError, CoreResult},
};

/// Listener settings, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen: SocketAddr,
}

impl ServerConfig {
    /// All interfaces on `PORT` (default `1338`).
    pub fn from_source<S: ConfigSource + ?Sized>(source: &S) -> CoreResult<Self> {
        let raw = Resolver::new(source).get_or(config_keys::PORT, config_keys::PORT_DEFAULT);
        let port: u16 = raw.parse().map_err(|_| CoreError::InvalidPort(raw))?;
        Ok(Self {
            listen: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        })
    }
}
