//! Advisory startup checks run before any unit construction.
//!
//! Both checks catch common deployment mistakes rather than hard errors,
//! and historically users proceed past them, so they warn and let assembly
//! continue.

use std::fmt;

/// Reserved input alias users commonly try to remap.
///
/// Remapping it has no effect: the orchestrator derives all topic names
/// from the namespace it runs in, so it must be started inside the stereo
/// namespace instead.
pub const CAMERA_ALIAS: &str = "camera";

/// Naming collaborator: the orchestrator's resolved identity.
///
/// Exposes the resolved name used as the base for every instance name, the
/// enclosing namespace, and whether the caller remapped a given logical
/// input name.
pub trait NamingContext {
    /// The orchestrator's own resolved name.
    fn name(&self) -> &str;

    /// The namespace the orchestrator runs in (`"/"` when at the root).
    fn namespace(&self) -> &str;

    /// Target of a caller-supplied remapping of `alias`, if any.
    fn remapped(&self, alias: &str) -> Option<String>;
}

/// An advisory finding; assembly proceeds regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreflightWarning {
    /// The reserved `camera` alias was remapped by the caller.
    AliasRemapped {
        /// The alias that was remapped.
        alias: String,
        /// What the caller remapped it to.
        target: String,
    },
    /// The orchestrator runs at the root of the naming hierarchy.
    RootNamespace,
}

impl fmt::Display for PreflightWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreflightWarning::AliasRemapped { alias, target } => write!(
                f,
                "remapping '{alias}' to '{target}' has no effect; \
                 start the orchestrator inside the '{target}' namespace instead"
            ),
            PreflightWarning::RootNamespace => write!(
                f,
                "running at the root namespace; topic names will collide with \
                 any second instance. Start inside a stereo namespace"
            ),
        }
    }
}

/// Run the advisory checks and log each finding.
///
/// Returns the findings so hosts can surface them their own way. The
/// caller must still attempt assembly afterwards; nothing here aborts.
pub fn preflight(ctx: &dyn NamingContext) -> Vec<PreflightWarning> {
    let mut warnings = Vec::new();

    if let Some(target) = ctx.remapped(CAMERA_ALIAS) {
        warnings.push(PreflightWarning::AliasRemapped {
            alias: CAMERA_ALIAS.to_owned(),
            target,
        });
    }

    if ctx.namespace() == "/" {
        warnings.push(PreflightWarning::RootNamespace);
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    warnings
}
