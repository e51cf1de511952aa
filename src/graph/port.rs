//! Logical ports exposed by the processing units.

use std::fmt;

/// A logical port on a processing unit.
///
/// Ports are remapped to concrete topic names when a unit is instantiated.
/// Keeping the set closed makes an unmapped mandatory port a build-time
/// failure instead of a silent fallback to some default name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogicalPort {
    /// Raw Bayer-pattern camera image.
    ImageRaw,
    /// Monochrome image produced by debayering.
    ImageMono,
    /// Color image produced by debayering.
    ImageColor,
    /// Camera calibration metadata.
    CameraInfo,
    /// Rectified monochrome image.
    ImageRect,
    /// Rectified color image.
    ImageRectColor,
    /// Stereo disparity image.
    Disparity,
    /// Legacy point-cloud output.
    Points,
    /// Point-cloud output.
    Points2,
}

impl LogicalPort {
    /// Wire name of this port.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalPort::ImageRaw => "image_raw",
            LogicalPort::ImageMono => "image_mono",
            LogicalPort::ImageColor => "image_color",
            LogicalPort::CameraInfo => "camera_info",
            LogicalPort::ImageRect => "image_rect",
            LogicalPort::ImageRectColor => "image_rect_color",
            LogicalPort::Disparity => "disparity",
            LogicalPort::Points => "points",
            LogicalPort::Points2 => "points2",
        }
    }
}

impl fmt::Display for LogicalPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(LogicalPort::ImageRaw.as_str(), "image_raw");
        assert_eq!(LogicalPort::ImageRectColor.as_str(), "image_rect_color");
        assert_eq!(LogicalPort::Points2.as_str(), "points2");
    }

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(LogicalPort::CameraInfo.to_string(), "camera_info");
    }
}
