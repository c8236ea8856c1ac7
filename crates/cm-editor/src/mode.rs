//! What a pointer click does.

use crate::EditorError;

/// The editor's current tool.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditMode {
    /// Read-only viewing; clicks do nothing.
    Observe,
    /// Left clicks draw walkways between nodes, creating junctions as needed.
    AddPaths,
    /// Left clicks place building entrances connected to the selected node.
    #[default]
    AddBuildings,
    /// Right clicks place text labels.
    AddLabels,
}

impl EditMode {
    pub const ALL: [EditMode; 4] = [
        EditMode::Observe,
        EditMode::AddPaths,
        EditMode::AddBuildings,
        EditMode::AddLabels,
    ];

    /// `true` for the modes driven by left clicks.
    #[inline]
    pub fn accepts_left_click(self) -> bool {
        matches!(self, EditMode::AddPaths | EditMode::AddBuildings)
    }

    #[inline]
    pub fn is_editing(self) -> bool {
        !matches!(self, EditMode::Observe)
    }

    /// Stroke width, in screen pixels, for drawing walkways.
    pub fn path_width(self) -> u32 {
        if self.is_editing() { 7 } else { 3 }
    }

    /// Radius, in screen pixels, of node markers.
    pub fn marker_radius(self) -> u32 {
        if self.is_editing() { 5 } else { 2 }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EditMode::Observe      => "observe",
            EditMode::AddPaths     => "add-paths",
            EditMode::AddBuildings => "add-buildings",
            EditMode::AddLabels    => "add-labels",
        }
    }
}

impl std::fmt::Display for EditMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EditMode {
    type Err = EditorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| EditorError::UnknownMode(s.to_owned()))
    }
}
