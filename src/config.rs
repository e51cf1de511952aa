//! Shared configuration and the configuration-store collaborator.

use crate::error::Result;
use std::collections::BTreeMap;

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Integer value.
    Int(i64),
    /// Boolean value.
    Bool(bool),
    /// Composite value: nested key/value pairs.
    Map(BTreeMap<String, ParamValue>),
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Handle to the configuration store the orchestrator runs against.
///
/// `get` reads orchestrator-level settings; `set` writes a value into one
/// unit's private namespace, scoped away from every other unit's. The
/// handle is injected so the core never reaches into ambient global state
/// and tests can substitute an in-memory store.
pub trait ConfigStore {
    /// Read an orchestrator-level value.
    fn get(&self, key: &str) -> Option<ParamValue>;

    /// Write a value under `namespace`.
    ///
    /// An error here is fatal to assembly; see
    /// [`Error::ConfigStore`](crate::Error::ConfigStore).
    fn set(&mut self, namespace: &str, key: &str, value: ParamValue) -> Result<()>;
}

/// Orchestrator-level settings propagated into eligible units.
///
/// Collected once, before any unit is built, and immutable afterwards.
/// Each eligible unit receives a copy under its own namespace; everything
/// else ignores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedConfig {
    values: BTreeMap<String, ParamValue>,
}

impl SharedConfig {
    /// Buffering depth for downstream units.
    pub const QUEUE_SIZE: &'static str = "queue_size";
    /// Exact vs. approximate timestamp-synchronization policy for units
    /// consuming multiple timestamped inputs.
    pub const APPROXIMATE_SYNC: &'static str = "approximate_sync";

    /// Empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the shared settings from the orchestrator's own namespace.
    ///
    /// Only keys actually present in the store are carried; absent keys
    /// leave downstream units on their built-in defaults.
    pub fn gather(store: &dyn ConfigStore) -> Self {
        let mut config = Self::new();
        for key in [Self::QUEUE_SIZE, Self::APPROXIMATE_SYNC] {
            if let Some(value) = store.get(key) {
                config.values.insert(key.to_owned(), value);
            }
        }
        config
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Whether any shared settings were collected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Publish a copy of the configuration under `instance_name`.
    ///
    /// Performs no writes at all when the configuration is empty. Must run
    /// before the unit loads so the values are visible the moment it
    /// starts; a store error aborts the whole assembly.
    pub fn propagate_to(&self, store: &mut dyn ConfigStore, instance_name: &str) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        for (key, value) in &self.values {
            store.set(instance_name, key, value.clone())?;
        }
        tracing::debug!(
            instance = instance_name,
            keys = self.values.len(),
            "propagated shared configuration"
        );
        Ok(())
    }
}

/// In-memory configuration store.
///
/// The default store for embedding, and the substitute used in tests.
/// Namespaced writes can be read back with [`MemoryConfigStore::namespaced`].
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    root: BTreeMap<String, ParamValue>,
    scoped: BTreeMap<String, BTreeMap<String, ParamValue>>,
}

impl MemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an orchestrator-level value.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.root.insert(key.into(), value.into());
        self
    }

    /// Read back a value written into a unit's namespace.
    pub fn namespaced(&self, namespace: &str, key: &str) -> Option<&ParamValue> {
        self.scoped.get(namespace).and_then(|ns| ns.get(key))
    }

    /// Namespaces that have received at least one write.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.scoped.keys().map(String::as_str)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<ParamValue> {
        self.root.get(key).cloned()
    }

    fn set(&mut self, namespace: &str, key: &str, value: ParamValue) -> Result<()> {
        self.scoped
            .entry(namespace.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gather_carries_only_present_keys() {
        let store = MemoryConfigStore::new().with_value(SharedConfig::QUEUE_SIZE, 5i64);
        let config = SharedConfig::gather(&store);
        assert_eq!(config.get(SharedConfig::QUEUE_SIZE), Some(&ParamValue::Int(5)));
        assert_eq!(config.get(SharedConfig::APPROXIMATE_SYNC), None);
    }

    #[test]
    fn test_gather_from_empty_store_is_empty() {
        let store = MemoryConfigStore::new();
        assert!(SharedConfig::gather(&store).is_empty());
    }

    #[test]
    fn test_empty_config_propagates_nothing() {
        let mut store = MemoryConfigStore::new();
        let config = SharedConfig::new();
        config.propagate_to(&mut store, "stereo_point_cloud2").unwrap();
        assert_eq!(store.namespaces().count(), 0);
    }

    #[test]
    fn test_propagation_is_namespace_scoped() {
        let mut store = MemoryConfigStore::new();
        let mut config = SharedConfig::new();
        config.set(SharedConfig::QUEUE_SIZE, 5i64);
        config.set(SharedConfig::APPROXIMATE_SYNC, true);
        config.propagate_to(&mut store, "stereo").unwrap();

        assert_eq!(
            store.namespaced("stereo", SharedConfig::QUEUE_SIZE),
            Some(&ParamValue::Int(5))
        );
        assert_eq!(
            store.namespaced("stereo", SharedConfig::APPROXIMATE_SYNC),
            Some(&ParamValue::Bool(true))
        );
        assert_eq!(store.namespaced("other", SharedConfig::QUEUE_SIZE), None);
    }

    #[test]
    fn test_composite_values_round_trip() {
        let mut inner = BTreeMap::new();
        inner.insert("window".to_owned(), ParamValue::Int(3));
        let mut store = MemoryConfigStore::new();
        store.set("stereo", "sync", ParamValue::Map(inner.clone())).unwrap();
        assert_eq!(
            store.namespaced("stereo", "sync"),
            Some(&ParamValue::Map(inner))
        );
    }
}
