//! # Stereograph
//!
//! Processing-graph assembly for a stereo vision pipeline.
//!
//! Stereograph decides which processing units exist, how their data ports
//! are wired, and which configuration each unit receives. It never computes
//! pixels: the units themselves (debayer, rectify, disparity, point cloud)
//! are opaque plugins instantiated through an injected loader, and the
//! transport that moves images between them belongs to the hosting
//! middleware.
//!
//! The topology is fixed: two structurally identical monocular sub-graphs
//! (left and right) converge into a disparity unit, which feeds two
//! point-cloud units. Assembly is a one-shot, synchronous startup action;
//! after loading, the external host owns all unit lifetime and concurrency.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stereograph::prelude::*;
//!
//! let mut store = MemoryConfigStore::new().with_value(SharedConfig::QUEUE_SIZE, 5i64);
//! let mut loader = MyUnitLoader::connect()?;
//! let naming = MyNamingContext::resolve()?;
//!
//! // Preflight, gather shared config, assemble and load all nine units.
//! let graph = Orchestrator::new(&naming, &mut store, &mut loader).start()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod orchestrator;
pub mod preflight;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigStore, MemoryConfigStore, ParamValue, SharedConfig};
    pub use crate::error::{Error, Result};
    pub use crate::graph::{
        CameraSide, LogicalPort, ProcessingGraph, RemapTable, UnitDescriptor, UnitRole,
    };
    pub use crate::loader::{GraphLoader, LoadError, UnitLoader};
    pub use crate::orchestrator::Orchestrator;
    pub use crate::preflight::{NamingContext, PreflightWarning, preflight};
}

pub use error::{Error, Result};
