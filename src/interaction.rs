//! Interaction state for the point editor.
//!
//! The editor is a single tagged union of interaction states rather than a
//! mode enum plus independent boolean flags, so combinations like
//! "tagging while defining an area" are unrepresentable. Entering any state
//! leaves the previous one through its normal exit actions (applied by the
//! session, which owns the surrounding point store).

use crate::constants::GRID_CORNERS;
use crate::model::{ToolId, WaypointId, corner_label};

/// What waypoint and canvas clicks currently mean.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// Clicks on waypoints select them for display; canvas clicks do nothing.
    #[default]
    Idle,
    /// Canvas clicks place a new custom waypoint.
    Adding,
    /// Clicks on waypoints remove them.
    Deleting,
    /// Clicks on waypoints pick the tagging target.
    Tagging(TaggingState),
    /// Clicks on waypoints collect the four corners of a new boundary.
    DefiningArea(AreaSelection),
}

impl InteractionState {
    pub fn is_tagging(&self) -> bool {
        matches!(self, InteractionState::Tagging(_))
    }

    pub fn is_defining_area(&self) -> bool {
        matches!(self, InteractionState::DefiningArea(_))
    }

    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Adding => "adding",
            InteractionState::Deleting => "deleting",
            InteractionState::Tagging(_) => "tagging",
            InteractionState::DefiningArea(_) => "defining-area",
        }
    }
}

/// Transient state while tagging mode is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaggingState {
    /// Waypoint the pending selection will be saved to.
    pub target: Option<WaypointId>,
    /// Tool ids ticked but not yet saved.
    pub pending: Vec<ToolId>,
}

impl TaggingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle one tool in the pending selection.
    pub fn toggle_pending(&mut self, tool: ToolId) {
        if let Some(pos) = self.pending.iter().position(|&t| t == tool) {
            self.pending.remove(pos);
        } else {
            self.pending.push(tool);
        }
    }
}

/// Ordered waypoint picks collected while defining a new area.
///
/// Click order defines the new corner labels: the first pick becomes corner
/// A, the second B, and so on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaSelection {
    ids: Vec<WaypointId>,
}

impl AreaSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pick unless already present. Returns whether it was added.
    pub fn push(&mut self, id: WaypointId) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn ids(&self) -> &[WaypointId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether enough corners are collected to redefine the boundary.
    pub fn is_complete(&self) -> bool {
        self.ids.len() == GRID_CORNERS
    }

    /// Label a picked waypoint by its click order (A for the first pick).
    pub fn label_for(&self, id: WaypointId) -> Option<char> {
        self.ids.iter().position(|&i| i == id).map(corner_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(InteractionState::default(), InteractionState::Idle);
    }

    #[test]
    fn test_toggle_pending() {
        let mut tagging = TaggingState::new();
        tagging.toggle_pending(1);
        tagging.toggle_pending(2);
        assert_eq!(tagging.pending, vec![1, 2]);

        tagging.toggle_pending(1);
        assert_eq!(tagging.pending, vec![2]);
    }

    #[test]
    fn test_area_selection_ignores_duplicates() {
        let mut selection = AreaSelection::new();
        assert!(selection.push(10));
        assert!(!selection.push(10));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_area_selection_completion_and_labels() {
        let mut selection = AreaSelection::new();
        for id in [40, 10, 50, 0] {
            selection.push(id);
        }
        assert!(selection.is_complete());
        assert_eq!(selection.label_for(40), Some('A'));
        assert_eq!(selection.label_for(10), Some('B'));
        assert_eq!(selection.label_for(0), Some('D'));
        assert_eq!(selection.label_for(99), None);
    }
}
