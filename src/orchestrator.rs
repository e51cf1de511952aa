//! Startup sequencing: preflight, gather, assemble, load.

use crate::config::{ConfigStore, SharedConfig};
use crate::error::Result;
use crate::graph::ProcessingGraph;
use crate::loader::{GraphLoader, UnitLoader};
use crate::preflight::{NamingContext, preflight};

/// One-shot startup driver for the stereo processing graph.
///
/// Runs the whole sequence on behalf of the hosting process: advisory
/// preflight checks, a single shared-configuration collection, graph
/// assembly, then sequential loading. Control returns to the host's event
/// loop afterwards; the external loader owns unit lifetime and the
/// returned graph is informational.
pub struct Orchestrator<'a> {
    naming: &'a dyn NamingContext,
    store: &'a mut dyn ConfigStore,
    loader: &'a mut dyn UnitLoader,
}

impl<'a> Orchestrator<'a> {
    /// Create an orchestrator over the three collaborators.
    pub fn new(
        naming: &'a dyn NamingContext,
        store: &'a mut dyn ConfigStore,
        loader: &'a mut dyn UnitLoader,
    ) -> Self {
        Self {
            naming,
            store,
            loader,
        }
    }

    /// Bring up the full processing graph.
    ///
    /// Preflight findings are advisory and never abort. Any store or load
    /// failure is fatal and propagates with the sequence abandoned: either
    /// all nine units come up or none are considered ready.
    pub fn start(&mut self) -> Result<ProcessingGraph> {
        preflight(self.naming);

        let shared = SharedConfig::gather(self.store);
        let graph = ProcessingGraph::assemble(self.naming.name(), &shared)?;
        GraphLoader::new(self.loader, self.store).load(&graph)?;

        Ok(graph)
    }
}
