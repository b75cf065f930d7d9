//! Configuration lookup.
//!
//! Values are read through [`ConfigSource`] on every request, so changes to the
//! backing store are picked up without a restart. [`ProcessEnv`] is the
//! production source; [`imds_model::Env`] is the deterministic one.
use std::sync::Arc;

use imds_model::Env;

mod resolver;
pub use resolver::Resolver;

mod server;
pub use server::ServerConfig;

/// Key/value lookup with no error path: a key is either present or not.
pub trait ConfigSource: Send + Sync {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Reads the process environment. Non-UTF-8 values count as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for Env {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_owned)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
