//! The nine fixed unit roles and their naming contract.

use super::port::LogicalPort;
use super::side::CameraSide;
use std::fmt;

/// One of the nine fixed roles in the stereo processing graph.
///
/// The topology is part of the design, not computed: three monocular units
/// per side, then a disparity unit the two sides converge into, then two
/// point-cloud units fed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitRole {
    /// Left debayer: `image_raw` in, `image_mono` and `image_color` out.
    DebayerLeft,
    /// Right debayer.
    DebayerRight,
    /// Left mono rectifier: `image_mono` and `camera_info` in, `image_rect` out.
    RectifyMonoLeft,
    /// Right mono rectifier.
    RectifyMonoRight,
    /// Left color rectifier: `image_color` and `camera_info` in, `image_rect_color` out.
    RectifyColorLeft,
    /// Right color rectifier.
    RectifyColorRight,
    /// Disparity unit: both sides' rectified images and calibration in, `disparity` out.
    Disparity,
    /// Point-cloud unit: left rectified color, both calibrations and `disparity` in, `points2` out.
    PointCloud2,
    /// Legacy point-cloud unit: same inputs, `points` out.
    PointCloud,
}

/// Instance-name suffix for each role.
///
/// These strings are external API surface: other tools address a unit's
/// configuration namespace through the exact instance name built from them.
/// The disparity unit keeps the orchestrator's bare name and the legacy
/// point cloud keeps `point_cloud`; neither may be renamed.
pub const INSTANCE_SUFFIXES: [(UnitRole, Option<&str>); 9] = [
    (UnitRole::DebayerLeft, Some("debayer_left")),
    (UnitRole::DebayerRight, Some("debayer_right")),
    (UnitRole::RectifyMonoLeft, Some("rectify_mono_left")),
    (UnitRole::RectifyMonoRight, Some("rectify_mono_right")),
    (UnitRole::RectifyColorLeft, Some("rectify_color_left")),
    (UnitRole::RectifyColorRight, Some("rectify_color_right")),
    (UnitRole::Disparity, None),
    (UnitRole::PointCloud2, Some("point_cloud2")),
    (UnitRole::PointCloud, Some("point_cloud")),
];

impl UnitRole {
    /// The fixed load order.
    ///
    /// Debayer before rectify within a side, left side before right, then
    /// the stereo stage. A later unit may rely on an earlier unit's port
    /// names already being registered, so the sequence is never reordered.
    pub const LOAD_ORDER: [UnitRole; 9] = [
        UnitRole::DebayerLeft,
        UnitRole::RectifyMonoLeft,
        UnitRole::RectifyColorLeft,
        UnitRole::DebayerRight,
        UnitRole::RectifyMonoRight,
        UnitRole::RectifyColorRight,
        UnitRole::Disparity,
        UnitRole::PointCloud2,
        UnitRole::PointCloud,
    ];

    /// Implementation identifier handed to the unit loader.
    ///
    /// Opaque to the core; the loader resolves it to an actual plugin. Both
    /// rectify roles share one implementation, specialized per instance by
    /// its remapping table.
    pub fn unit_type(&self) -> &'static str {
        match self {
            UnitRole::DebayerLeft | UnitRole::DebayerRight => "image_proc/debayer",
            UnitRole::RectifyMonoLeft
            | UnitRole::RectifyMonoRight
            | UnitRole::RectifyColorLeft
            | UnitRole::RectifyColorRight => "image_proc/rectify",
            UnitRole::Disparity => "stereo_image_proc/disparity",
            UnitRole::PointCloud2 => "stereo_image_proc/point_cloud2",
            UnitRole::PointCloud => "stereo_image_proc/point_cloud",
        }
    }

    /// Camera side for monocular roles, `None` for the stereo stage.
    pub fn side(&self) -> Option<CameraSide> {
        match self {
            UnitRole::DebayerLeft | UnitRole::RectifyMonoLeft | UnitRole::RectifyColorLeft => {
                Some(CameraSide::Left)
            }
            UnitRole::DebayerRight | UnitRole::RectifyMonoRight | UnitRole::RectifyColorRight => {
                Some(CameraSide::Right)
            }
            UnitRole::Disparity | UnitRole::PointCloud2 | UnitRole::PointCloud => None,
        }
    }

    /// Instance-name suffix from [`INSTANCE_SUFFIXES`].
    pub fn instance_suffix(&self) -> Option<&'static str> {
        INSTANCE_SUFFIXES
            .iter()
            .find(|(role, _)| role == self)
            .and_then(|(_, suffix)| *suffix)
    }

    /// Derive this role's globally unique instance name.
    ///
    /// Deterministic and injective: no two roles share a suffix, so no two
    /// instance names can collide for a given base name.
    pub fn instance_name(&self, base: &str) -> String {
        match self.instance_suffix() {
            Some(suffix) => format!("{base}_{suffix}"),
            None => base.to_owned(),
        }
    }

    /// Whether this unit reads the orchestrator's shared configuration.
    ///
    /// The debayer units take no shared settings. Everything downstream
    /// buffers or synchronizes timestamped inputs and does.
    pub fn reads_shared_config(&self) -> bool {
        !matches!(self, UnitRole::DebayerLeft | UnitRole::DebayerRight)
    }

    /// Port bindings for monocular roles: `(unit port, target topic port)`.
    ///
    /// The color path reuses the rectify implementation by aliasing its
    /// mono ports onto the color topics. Stereo-stage roles have no
    /// bindings: they are loaded at the orchestrator's own name and resolve
    /// their topics relative to it.
    pub fn port_bindings(&self) -> &'static [(LogicalPort, LogicalPort)] {
        match self {
            UnitRole::DebayerLeft | UnitRole::DebayerRight => &[
                (LogicalPort::ImageRaw, LogicalPort::ImageRaw),
                (LogicalPort::ImageMono, LogicalPort::ImageMono),
                (LogicalPort::ImageColor, LogicalPort::ImageColor),
            ],
            UnitRole::RectifyMonoLeft | UnitRole::RectifyMonoRight => &[
                (LogicalPort::ImageMono, LogicalPort::ImageMono),
                (LogicalPort::CameraInfo, LogicalPort::CameraInfo),
                (LogicalPort::ImageRect, LogicalPort::ImageRect),
            ],
            UnitRole::RectifyColorLeft | UnitRole::RectifyColorRight => &[
                (LogicalPort::ImageMono, LogicalPort::ImageColor),
                (LogicalPort::CameraInfo, LogicalPort::CameraInfo),
                (LogicalPort::ImageRect, LogicalPort::ImageRectColor),
            ],
            UnitRole::Disparity | UnitRole::PointCloud2 | UnitRole::PointCloud => &[],
        }
    }
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instance_suffix() {
            Some(suffix) => f.write_str(suffix),
            None => f.write_str("disparity"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_instance_names_are_deterministic() {
        for role in UnitRole::LOAD_ORDER {
            assert_eq!(role.instance_name("stereo"), role.instance_name("stereo"));
        }
    }

    #[test]
    fn test_instance_names_are_injective() {
        let names: BTreeSet<String> = UnitRole::LOAD_ORDER
            .iter()
            .map(|role| role.instance_name("stereo"))
            .collect();
        assert_eq!(names.len(), UnitRole::LOAD_ORDER.len());
    }

    #[test]
    fn test_compat_names_are_exact() {
        // Historical exceptions other tools depend on.
        assert_eq!(UnitRole::Disparity.instance_name("stereo"), "stereo");
        assert_eq!(
            UnitRole::PointCloud.instance_name("stereo"),
            "stereo_point_cloud"
        );
        assert_eq!(
            UnitRole::PointCloud2.instance_name("stereo"),
            "stereo_point_cloud2"
        );
    }

    #[test]
    fn test_monocular_names_carry_side() {
        assert_eq!(
            UnitRole::DebayerLeft.instance_name("stereo"),
            "stereo_debayer_left"
        );
        assert_eq!(
            UnitRole::RectifyMonoRight.instance_name("stereo"),
            "stereo_rectify_mono_right"
        );
        assert_eq!(
            UnitRole::RectifyColorLeft.instance_name("stereo"),
            "stereo_rectify_color_left"
        );
    }

    #[test]
    fn test_suffix_table_covers_every_role() {
        for role in UnitRole::LOAD_ORDER {
            assert!(
                INSTANCE_SUFFIXES.iter().any(|(r, _)| *r == role),
                "role {role} missing from suffix table"
            );
        }
    }

    #[test]
    fn test_debayer_never_reads_shared_config() {
        assert!(!UnitRole::DebayerLeft.reads_shared_config());
        assert!(!UnitRole::DebayerRight.reads_shared_config());
        let eligible = UnitRole::LOAD_ORDER
            .iter()
            .filter(|role| role.reads_shared_config())
            .count();
        assert_eq!(eligible, 7);
    }

    #[test]
    fn test_stereo_stage_has_no_bindings() {
        assert!(UnitRole::Disparity.port_bindings().is_empty());
        assert!(UnitRole::PointCloud2.port_bindings().is_empty());
        assert!(UnitRole::PointCloud.port_bindings().is_empty());
    }

    #[test]
    fn test_rectify_types_are_shared() {
        assert_eq!(
            UnitRole::RectifyMonoLeft.unit_type(),
            UnitRole::RectifyColorRight.unit_type()
        );
    }
}
