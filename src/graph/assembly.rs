//! Assembly of the fixed nine-unit processing graph.

use super::descriptor::UnitDescriptor;
use super::role::UnitRole;
use crate::config::SharedConfig;
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// The ordered sequence of unit descriptors to be loaded.
///
/// Built once at startup from the shared configuration and the fixed
/// topology; never mutated after loading begins. Once loading completes
/// the graph can be dropped: the external loader owns unit lifetime from
/// then on.
#[derive(Debug, Clone)]
pub struct ProcessingGraph {
    base_name: String,
    units: Vec<UnitDescriptor>,
}

impl ProcessingGraph {
    /// Assemble descriptors for all nine units in load order.
    ///
    /// Fails if any remapping table is incomplete or two roles resolve to
    /// the same instance name. The allocator is injective by construction,
    /// so the uniqueness check guards the invariant rather than repairing
    /// anything; a collision would let one unit's configuration silently
    /// overwrite another's.
    pub fn assemble(base_name: &str, shared: &SharedConfig) -> Result<Self> {
        let mut units = Vec::with_capacity(UnitRole::LOAD_ORDER.len());
        let mut names = BTreeSet::new();
        for role in UnitRole::LOAD_ORDER {
            let unit = UnitDescriptor::for_role(role, base_name, shared)?;
            if !names.insert(unit.instance_name().to_owned()) {
                return Err(Error::DuplicateInstance(unit.instance_name().to_owned()));
            }
            units.push(unit);
        }
        tracing::debug!(
            base = base_name,
            units = units.len(),
            "assembled processing graph"
        );
        Ok(Self {
            base_name: base_name.to_owned(),
            units,
        })
    }

    /// Base name the graph was assembled under.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Descriptors in load order.
    pub fn units(&self) -> &[UnitDescriptor] {
        &self.units
    }

    /// Number of units in the graph.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the graph has no units.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_yields_nine_units_in_order() {
        let graph = ProcessingGraph::assemble("stereo", &SharedConfig::new()).unwrap();
        assert_eq!(graph.len(), 9);
        let roles: Vec<UnitRole> = graph.units().iter().map(|u| u.role()).collect();
        assert_eq!(roles, UnitRole::LOAD_ORDER);
    }

    #[test]
    fn test_assemble_instance_names() {
        let graph = ProcessingGraph::assemble("stereo", &SharedConfig::new()).unwrap();
        let names: Vec<&str> = graph.units().iter().map(|u| u.instance_name()).collect();
        assert_eq!(
            names,
            [
                "stereo_debayer_left",
                "stereo_rectify_mono_left",
                "stereo_rectify_color_left",
                "stereo_debayer_right",
                "stereo_rectify_mono_right",
                "stereo_rectify_color_right",
                "stereo",
                "stereo_point_cloud2",
                "stereo_point_cloud",
            ]
        );
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let shared = SharedConfig::new();
        let a = ProcessingGraph::assemble("cam", &shared).unwrap();
        let b = ProcessingGraph::assemble("cam", &shared).unwrap();
        for (x, y) in a.units().iter().zip(b.units()) {
            assert_eq!(x.instance_name(), y.instance_name());
            assert_eq!(x.remappings(), y.remappings());
        }
    }

    #[test]
    fn test_shared_config_reaches_only_eligible_descriptors() {
        let mut shared = SharedConfig::new();
        shared.set(SharedConfig::APPROXIMATE_SYNC, true);
        let graph = ProcessingGraph::assemble("stereo", &shared).unwrap();
        for unit in graph.units() {
            assert_eq!(
                unit.private_params().is_empty(),
                !unit.role().reads_shared_config(),
                "wrong private params for {}",
                unit.instance_name()
            );
        }
    }
}
