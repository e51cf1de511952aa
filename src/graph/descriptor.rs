//! Unit descriptors: the inert records handed to the loader.

use super::remap::RemapTable;
use super::role::UnitRole;
use crate::config::SharedConfig;
use crate::error::Result;

/// Everything needed to instantiate one processing unit.
///
/// Built once during assembly and never mutated afterwards. The
/// implementation identifier comes from the role; the instance name,
/// remapping table and private parameter set are derived from the role,
/// the orchestrator's base name and the shared configuration.
#[derive(Debug, Clone)]
pub struct UnitDescriptor {
    role: UnitRole,
    instance_name: String,
    remappings: RemapTable,
    private_params: SharedConfig,
}

impl UnitDescriptor {
    /// Build the descriptor for a role under the given base name.
    ///
    /// Roles that read shared configuration receive their own copy of it
    /// as their private parameter set, scoped to the instance name; the
    /// debayer roles get an empty set.
    pub fn for_role(role: UnitRole, base: &str, shared: &SharedConfig) -> Result<Self> {
        let private_params = if role.reads_shared_config() {
            shared.clone()
        } else {
            SharedConfig::new()
        };
        Ok(Self {
            role,
            instance_name: role.instance_name(base),
            remappings: RemapTable::for_role(role)?,
            private_params,
        })
    }

    /// The unit's role in the fixed topology.
    pub fn role(&self) -> UnitRole {
        self.role
    }

    /// Globally unique instance name.
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    /// Implementation identifier resolved by the external loader.
    pub fn unit_type(&self) -> &'static str {
        self.role.unit_type()
    }

    /// Port remappings for this instance.
    pub fn remappings(&self) -> &RemapTable {
        &self.remappings
    }

    /// Parameters published into this instance's namespace before it loads.
    pub fn private_params(&self) -> &SharedConfig {
        &self.private_params
    }
}
