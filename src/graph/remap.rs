//! Remapping tables: logical port to concrete topic name.

use super::port::LogicalPort;
use super::role::UnitRole;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Mapping from logical port to fully qualified topic name.
///
/// Ordered, so the wire form handed to the loader is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapTable {
    entries: BTreeMap<LogicalPort, String>,
}

impl RemapTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table for a role.
    ///
    /// Monocular roles get every bound port prefixed with their side's
    /// namespace. Stereo-stage roles yield an empty table: they are loaded
    /// at the orchestrator's own name and resolve topics relative to it,
    /// so identity is the correct mapping.
    pub fn for_role(role: UnitRole) -> Result<Self> {
        let mut table = Self::new();
        if let Some(side) = role.side() {
            for &(port, target) in role.port_bindings() {
                table.insert(port, side.topic(target.as_str()));
            }
        }
        table.verify_for(role)?;
        Ok(table)
    }

    /// Map a logical port to a topic name.
    pub fn insert(&mut self, port: LogicalPort, topic: impl Into<String>) {
        self.entries.insert(port, topic.into());
    }

    /// Look up the topic a port is mapped to.
    pub fn get(&self, port: LogicalPort) -> Option<&str> {
        self.entries.get(&port).map(String::as_str)
    }

    /// Number of mapped ports.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(port, topic)` pairs in port order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalPort, &str)> {
        self.entries
            .iter()
            .map(|(port, topic)| (*port, topic.as_str()))
    }

    /// Check that every port the role binds maps to a non-empty topic.
    ///
    /// An absent or empty entry for a mandatory port is never treated as
    /// "use the default name"; the table fails closed before the unit is
    /// ever submitted to the loader.
    pub fn verify_for(&self, role: UnitRole) -> Result<()> {
        for &(port, _) in role.port_bindings() {
            match self.get(port) {
                Some(topic) if !topic.is_empty() => {}
                _ => {
                    return Err(Error::MissingPort {
                        unit: role.to_string(),
                        port,
                    });
                }
            }
        }
        Ok(())
    }

    /// Render the `logical name -> topic` map the loader consumes.
    pub fn to_wire(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(port, topic)| (port.as_str().to_owned(), topic.clone()))
            .collect()
    }
}
