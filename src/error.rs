//! Error types for stereograph.

use crate::graph::LogicalPort;
use thiserror::Error;

/// Result type alias using stereograph's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for graph assembly and loading.
///
/// Every variant is a startup-time failure; there is no retry anywhere in
/// the core. Advisory preflight findings are not errors and live in
/// [`crate::preflight::PreflightWarning`].
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration store refused a read or write.
    ///
    /// Fatal before any unit loads: units must never start with partial
    /// configuration.
    #[error("configuration store unavailable: {0}")]
    ConfigStore(String),

    /// A unit failed to load.
    ///
    /// The remaining sequence is abandoned; already-loaded units belong to
    /// the external host.
    #[error("unit '{instance}' failed to load: {reason}")]
    UnitLoad {
        /// Instance name of the unit that failed.
        instance: String,
        /// Collaborator-defined failure reason.
        reason: String,
    },

    /// A mandatory port has no usable remapping entry.
    ///
    /// Raised at table-build time, before the affected unit is ever
    /// submitted to the loader. An absent or empty entry never falls back
    /// to a default topic name.
    #[error("unit '{unit}' has no remapping for mandatory port '{port}'")]
    MissingPort {
        /// Role name of the affected unit.
        unit: String,
        /// The port that was left unmapped or mapped to an empty topic.
        port: LogicalPort,
    },

    /// Two units resolved to the same instance name.
    ///
    /// A collision would let one unit's configuration or remapping silently
    /// overwrite another's.
    #[error("duplicate instance name '{0}' in processing graph")]
    DuplicateInstance(String),
}
