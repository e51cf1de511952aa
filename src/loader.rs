//! Sequential unit loading through the external loader collaborator.

use crate::config::ConfigStore;
use crate::error::{Error, Result};
use crate::graph::ProcessingGraph;
use std::collections::BTreeMap;

/// Failure reported by a unit-loader backend.
///
/// The reason is collaborator-defined; the core only records and reports it.
#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct LoadError {
    /// Collaborator-defined failure reason.
    pub reason: String,
}

impl LoadError {
    /// Create a load error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// External collaborator that instantiates processing units.
///
/// Implementations resolve `unit_type` to an actual plugin, bring the unit
/// up under `instance_name` and connect its ports through `remappings`.
/// The call is synchronous and may block while the unit initializes; the
/// core treats it as opaque.
pub trait UnitLoader {
    /// Load one unit.
    fn load(
        &mut self,
        instance_name: &str,
        unit_type: &str,
        remappings: &BTreeMap<String, String>,
    ) -> std::result::Result<(), LoadError>;
}

/// Loads an assembled graph strictly in sequence.
///
/// Every unit's private parameters are published into its namespace before
/// the first unit loads, so a dead configuration store aborts the assembly
/// while nothing is running yet and no unit ever starts with partial
/// configuration. Loading then submits each descriptor in order; the first
/// failure abandons the remaining sequence. There is no partial-success
/// state and no retry: either all nine units come up or the whole startup
/// fails.
pub struct GraphLoader<'a> {
    loader: &'a mut dyn UnitLoader,
    store: &'a mut dyn ConfigStore,
}

impl<'a> GraphLoader<'a> {
    /// Create a graph loader over the two collaborators.
    pub fn new(loader: &'a mut dyn UnitLoader, store: &'a mut dyn ConfigStore) -> Self {
        Self { loader, store }
    }

    /// Propagate configuration, then load every unit in the graph, in order.
    pub fn load(&mut self, graph: &ProcessingGraph) -> Result<()> {
        for unit in graph.units() {
            unit.private_params()
                .propagate_to(self.store, unit.instance_name())?;
        }

        for unit in graph.units() {
            tracing::debug!(
                instance = unit.instance_name(),
                unit_type = unit.unit_type(),
                "loading unit"
            );
            self.loader
                .load(
                    unit.instance_name(),
                    unit.unit_type(),
                    &unit.remappings().to_wire(),
                )
                .map_err(|e| Error::UnitLoad {
                    instance: unit.instance_name().to_owned(),
                    reason: e.reason,
                })?;
        }

        tracing::info!(
            base = graph.base_name(),
            units = graph.len(),
            "processing graph loaded"
        );
        Ok(())
    }
}
