//! Processing-graph construction.
//!
//! This module decides which units exist, what each one is called and how
//! its ports are wired. The topology is fixed:
//!
//! | Unit | Instance name | Inputs | Outputs |
//! |------|---------------|--------|---------|
//! | debayer (per side) | `<base>_debayer_<side>` | `<side>/image_raw` | `<side>/image_mono`, `<side>/image_color` |
//! | rectify-mono (per side) | `<base>_rectify_mono_<side>` | `<side>/image_mono`, `<side>/camera_info` | `<side>/image_rect` |
//! | rectify-color (per side) | `<base>_rectify_color_<side>` | `<side>/image_color`, `<side>/camera_info` | `<side>/image_rect_color` |
//! | disparity | `<base>` | both sides' `image_rect` and `camera_info` | `disparity` |
//! | point-cloud v2 | `<base>_point_cloud2` | `left/image_rect_color`, both `camera_info`, `disparity` | `points2` |
//! | point-cloud legacy | `<base>_point_cloud` | same as v2 | `points` |
//!
//! The disparity unit's bare instance name and the legacy point cloud's
//! suffix are frozen compatibility strings; see [`INSTANCE_SUFFIXES`].

mod assembly;
mod descriptor;
mod port;
mod remap;
mod role;
mod side;

pub use assembly::ProcessingGraph;
pub use descriptor::UnitDescriptor;
pub use port::LogicalPort;
pub use remap::RemapTable;
pub use role::{INSTANCE_SUFFIXES, UnitRole};
pub use side::CameraSide;
