//! Camera side enumeration.
//!
//! The side drives topic-name prefixing (`left/...`, `right/...`) and
//! instance-name suffixing for the monocular sub-graphs.

use std::fmt;

/// One of the two symmetric monocular sub-pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraSide {
    /// Left camera.
    Left,
    /// Right camera.
    Right,
}

impl CameraSide {
    /// Both sides in load order (left before right).
    pub const BOTH: [CameraSide; 2] = [CameraSide::Left, CameraSide::Right];

    /// Topic namespace prefix for this side.
    pub fn prefix(&self) -> &'static str {
        match self {
            CameraSide::Left => "left",
            CameraSide::Right => "right",
        }
    }

    /// Fully qualify a topic name with this side's namespace.
    pub fn topic(&self, name: &str) -> String {
        format!("{}/{}", self.prefix(), name)
    }
}

impl fmt::Display for CameraSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}
