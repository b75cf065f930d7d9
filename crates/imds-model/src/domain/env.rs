use crate::KeyValue;

/// In-memory configuration overlay.
///
/// An ordered list of entries where later entries shadow earlier ones.
/// Used wherever a deterministic stand-in for the process environment is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env(Vec<KeyValue>);

impl Env {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Get the value for a key, returning the last matching entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|kv| kv.key() == key)
            .map(|kv| kv.value())
    }

    /// Append an entry; it shadows any earlier entry with the same key.
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.push(KeyValue::new(key, value));
    }

    /// Builder form of [`Env::push`].
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.push(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Env;

    #[test]
    fn empty_env_has_no_keys() {
        let env = Env::new();
        assert_eq!(env, Env::default());
        assert!(env.get("PORT").is_none());
    }

    #[test]
    fn last_entry_wins() {
        let env = Env::new()
            .with("ENABLE_IMDS_V2", "false")
            .with("PORT", "1338")
            .with("ENABLE_IMDS_V2", "true");

        assert_eq!(env.get("ENABLE_IMDS_V2"), Some("true"));
        assert_eq!(env.get("PORT"), Some("1338"));
    }

    #[test]
    fn empty_value_is_present() {
        let env = Env::new().with("SCHEDULED_EVENT_STATUS", "");
        assert_eq!(env.get("SCHEDULED_EVENT_STATUS"), Some(""));
    }

    #[test]
    fn push_shadows_earlier_entry() {
        let mut env = Env::new().with("ENABLE_SPOT_ITN", "true");
        env.push("ENABLE_SPOT_ITN", "false");
        assert_eq!(env.get("ENABLE_SPOT_ITN"), Some("false"));
    }
}
