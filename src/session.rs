//! Grid session: the central point store and editor.
//!
//! A session owns the committed boundary, the in-progress manual picks, the
//! waypoint sequence, the tool assignments, and the interaction state, and
//! applies every mutation the hosting UI (or CLI) can request. All
//! operations are synchronous and complete before returning; failures leave
//! the session exactly as it was.

use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_MISSION_DESCRIPTION, DEFAULT_MISSION_NAME, GRID_CORNERS, MIN_BOUNDARY_CORNERS,
};
use crate::error::EngineError;
use crate::format::{FormatRegistry, MissionData, MissionWaypoint, parse_boundary};
use crate::geometry::{GridSpec, PreviewSurface, interpolate_grid};
use crate::interaction::{AreaSelection, InteractionState, TaggingState};
use crate::model::{
    Boundary, BoundarySource, GeoPoint, Tool, ToolAssignments, ToolId, Waypoint, WaypointId,
    default_tools,
};

/// How the boundary is being acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AcquisitionMethod {
    /// Boundary corners come from an uploaded GeoJSON file.
    #[default]
    File,
    /// Boundary corners are picked on the map one click at a time.
    Manual,
}

/// Operator-editable mission metadata carried into exports.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionSettings {
    pub name: String,
    pub description: String,
    pub area_id: u32,
    pub surface_id: u32,
}

impl Default for MissionSettings {
    fn default() -> Self {
        let defaults = MissionData::new(DEFAULT_MISSION_NAME, DEFAULT_MISSION_DESCRIPTION);
        Self {
            name: defaults.name,
            description: defaults.description,
            area_id: defaults.area_id,
            surface_id: defaults.surface_id,
        }
    }
}

/// The grid planning session.
pub struct GridSession {
    method: AcquisitionMethod,
    boundary: Boundary,
    manual_picks: Vec<GeoPoint>,
    selecting: bool,

    waypoints: Vec<Waypoint>,
    next_waypoint_id: WaypointId,

    interaction: InteractionState,
    selected: Option<WaypointId>,
    hovered: Option<WaypointId>,

    tools: Vec<Tool>,
    assignments: ToolAssignments,

    mission: MissionSettings,
    surface: PreviewSurface,
    registry: FormatRegistry,
}

impl Default for GridSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSession {
    pub fn new() -> Self {
        Self {
            method: AcquisitionMethod::default(),
            boundary: Boundary::new(),
            manual_picks: Vec::new(),
            selecting: false,
            waypoints: Vec::new(),
            next_waypoint_id: 1,
            interaction: InteractionState::Idle,
            selected: None,
            hovered: None,
            tools: default_tools(),
            assignments: ToolAssignments::new(),
            mission: MissionSettings::default(),
            surface: PreviewSurface::default(),
            registry: FormatRegistry::new(),
        }
    }

    /// Use a non-default preview surface (rendering collaborators with a
    /// different canvas size).
    pub fn with_surface(mut self, surface: PreviewSurface) -> Self {
        self.surface = surface;
        self
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn manual_picks(&self) -> &[GeoPoint] {
        &self.manual_picks
    }

    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    pub fn method(&self) -> AcquisitionMethod {
        self.method
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| w.id == id)
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn selected(&self) -> Option<WaypointId> {
        self.selected
    }

    pub fn hovered(&self) -> Option<WaypointId> {
        self.hovered
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn assignments(&self) -> &ToolAssignments {
        &self.assignments
    }

    pub fn mission(&self) -> &MissionSettings {
        &self.mission
    }

    pub fn mission_mut(&mut self) -> &mut MissionSettings {
        &mut self.mission
    }

    pub fn surface(&self) -> &PreviewSurface {
        &self.surface
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// The corner list currently driving projection: the committed boundary
    /// when non-empty, else the in-progress manual picks.
    pub fn active_source(&self) -> BoundarySource<'_> {
        if !self.boundary.is_empty() {
            BoundarySource::Committed(self.boundary.corners())
        } else if !self.manual_picks.is_empty() {
            BoundarySource::InProgress(&self.manual_picks)
        } else {
            BoundarySource::Empty
        }
    }

    // ------------------------------------------------------------------
    // Boundary acquisition
    // ------------------------------------------------------------------

    /// Switch acquisition method. Resets the whole session; entering manual
    /// mode starts pick selection immediately.
    pub fn set_method(&mut self, method: AcquisitionMethod) {
        self.method = method;
        self.reset();
        if method == AcquisitionMethod::Manual {
            self.selecting = true;
        }
        log::debug!("Acquisition method set to {:?}", method);
    }

    /// Import boundary corners from GeoJSON text.
    ///
    /// Accepts any count of at least three Point features. On success the
    /// committed boundary is replaced and the existing grid is discarded;
    /// on failure nothing changes.
    pub fn import_boundary_str(&mut self, text: &str) -> Result<usize, EngineError> {
        let corners = parse_boundary(text)?;
        let count = corners.len();

        self.boundary = Boundary::from_corners(corners);
        self.manual_picks.clear();
        self.clear_waypoints();

        log::info!("Imported boundary with {} corners", count);
        if !self.boundary.can_generate() {
            log::warn!(
                "Boundary has {} corners; grid generation needs exactly {}",
                count,
                GRID_CORNERS
            );
        }
        Ok(count)
    }

    /// Read and import a boundary file.
    pub fn import_boundary_file(&mut self, path: &Path) -> Result<usize, EngineError> {
        log::info!("Importing boundary from {:?}", path);
        let text = std::fs::read_to_string(path).map_err(crate::format::FormatError::Io)?;
        self.import_boundary_str(&text)
    }

    /// Turn manual pick selection on or off.
    pub fn set_selecting(&mut self, selecting: bool) {
        self.selecting = selecting;
    }

    /// Append a manual boundary pick. Ignored unless selection is active.
    pub fn add_manual_pick(&mut self, point: GeoPoint) {
        if !self.selecting {
            return;
        }
        self.manual_picks.push(point);
        log::debug!(
            "Picked boundary point {} at ({:.6}, {:.6})",
            self.manual_picks.len(),
            point.lat,
            point.lng
        );
    }

    /// Commit the manual picks as the boundary.
    ///
    /// Requires at least three picks. On success the picks move into the
    /// committed boundary, selection mode turns off, and the existing grid
    /// is discarded.
    pub fn commit_manual_boundary(&mut self) -> Result<(), EngineError> {
        if self.manual_picks.len() < MIN_BOUNDARY_CORNERS {
            return Err(EngineError::TooFewPicks {
                required: MIN_BOUNDARY_CORNERS,
                found: self.manual_picks.len(),
            });
        }

        self.boundary = Boundary::from_corners(std::mem::take(&mut self.manual_picks));
        self.selecting = false;
        self.clear_waypoints();

        log::info!("Committed manual boundary with {} corners", self.boundary.len());
        Ok(())
    }

    /// Clear boundary, picks, waypoints, selection, and all mode state.
    pub fn reset(&mut self) {
        self.boundary.clear();
        self.manual_picks.clear();
        self.waypoints.clear();
        self.selected = None;
        self.hovered = None;
        self.selecting = false;
        self.interaction = InteractionState::Idle;
        log::debug!("Session reset");
    }

    // ------------------------------------------------------------------
    // Grid generation
    // ------------------------------------------------------------------

    /// Generate the waypoint grid, replacing the current sequence.
    ///
    /// Fails unless the committed boundary has exactly four corners. A
    /// boundary imported with three or five corners stays valid state but
    /// is refused here until corrected.
    pub fn generate_grid(&mut self, spec: &GridSpec) -> Result<usize, EngineError> {
        let corners: [GeoPoint; 4] = self
            .boundary
            .corners()
            .try_into()
            .map_err(|_| EngineError::CornerCount {
                expected: GRID_CORNERS,
                found: self.boundary.len(),
            })?;

        let points = interpolate_grid(&corners, spec);
        let mut waypoints = Vec::with_capacity(points.len());
        for position in points {
            let id = self.take_waypoint_id();
            waypoints.push(Waypoint::new(id, position, false));
        }
        self.waypoints = waypoints;
        self.selected = None;

        log::info!(
            "Generated {} waypoints ({}x{}, start {}, {})",
            self.waypoints.len(),
            spec.columns,
            spec.rows,
            spec.start_corner.label(),
            spec.traversal.name()
        );
        Ok(self.waypoints.len())
    }

    /// Empty the waypoint sequence and selection.
    ///
    /// The boundary and tool assignments are untouched; assignments may go
    /// stale against the now-empty sequence, which is accepted.
    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
        self.selected = None;
    }

    fn take_waypoint_id(&mut self) -> WaypointId {
        let id = self.next_waypoint_id;
        self.next_waypoint_id += 1;
        id
    }

    // ------------------------------------------------------------------
    // Interaction state transitions
    // ------------------------------------------------------------------

    /// Enter one of the basic edit states (idle, adding, deleting).
    ///
    /// Leaving tagging mode through here applies its exit actions.
    pub fn set_interaction(&mut self, state: InteractionState) {
        if self.interaction.is_tagging() && !state.is_tagging() {
            self.selected = None;
        }
        log::debug!(
            "Interaction {} -> {}",
            self.interaction.name(),
            state.name()
        );
        self.interaction = state;
    }

    /// Toggle tagging mode.
    ///
    /// Turning tagging off resets the tagging target, the pending tool
    /// selection, and the display-only selected waypoint.
    pub fn toggle_tagging(&mut self) {
        if self.interaction.is_tagging() {
            self.set_interaction(InteractionState::Idle);
        } else {
            self.set_interaction(InteractionState::Tagging(TaggingState::new()));
        }
    }

    /// Begin redefining the boundary from four existing waypoints.
    pub fn begin_area_definition(&mut self) {
        self.set_interaction(InteractionState::DefiningArea(AreaSelection::new()));
    }

    /// Abort an in-progress area definition, dropping collected picks.
    pub fn cancel_area_definition(&mut self) {
        if self.interaction.is_defining_area() {
            self.set_interaction(InteractionState::Idle);
        }
    }

    // ------------------------------------------------------------------
    // Click dispatch
    // ------------------------------------------------------------------

    /// Handle a click on an existing waypoint.
    ///
    /// What the click means depends entirely on the interaction state:
    /// tagging captures the target, area definition collects a corner,
    /// deleting removes the waypoint, anything else selects it.
    pub fn click_waypoint(&mut self, id: WaypointId) {
        if self.waypoint(id).is_none() {
            log::warn!("Click on unknown waypoint {}", id);
            return;
        }

        match &mut self.interaction {
            InteractionState::Tagging(tagging) => {
                tagging.target = Some(id);
                tagging.pending = self.assignments.for_waypoint(id).to_vec();
                self.selected = Some(id);
                log::debug!("Tagging target set to waypoint {}", id);
            }
            InteractionState::DefiningArea(selection) => {
                if !selection.push(id) {
                    return;
                }
                log::debug!(
                    "Area corner {} picked: waypoint {}",
                    selection.len(),
                    id
                );
                if selection.is_complete() {
                    let ids: Vec<WaypointId> = selection.ids().to_vec();
                    self.redefine_area(&ids);
                }
            }
            InteractionState::Deleting => {
                self.waypoints.retain(|w| w.id != id);
                self.selected = None;
                log::debug!("Deleted waypoint {}", id);
            }
            InteractionState::Idle | InteractionState::Adding => {
                self.selected = Some(id);
            }
        }
    }

    /// Handle a click on the preview surface itself (not on a waypoint).
    ///
    /// Only meaningful in adding state: the click is unprojected and a
    /// custom waypoint appended. Without an active boundary source there is
    /// no frame of reference and the click is ignored.
    pub fn click_canvas(&mut self, x: f64, y: f64) {
        if self.interaction != InteractionState::Adding {
            return;
        }
        let Some(position) = self.surface.unproject(self.active_source(), x, y) else {
            return;
        };
        let id = self.take_waypoint_id();
        self.waypoints.push(Waypoint::new(id, position, true));
        log::debug!(
            "Added custom waypoint {} at ({:.6}, {:.6})",
            id,
            position.lat,
            position.lng
        );
    }

    /// Replace the boundary with four existing waypoints, in click order.
    ///
    /// Click order defines the new corner labels A-D and thus the traversal
    /// semantics of the next generation run. The old waypoint sequence is
    /// cleared along with the selection and the area-definition state.
    fn redefine_area(&mut self, ids: &[WaypointId]) {
        let corners: Vec<GeoPoint> = ids
            .iter()
            .filter_map(|&id| self.waypoint(id).map(|w| w.position))
            .collect();
        debug_assert_eq!(corners.len(), GRID_CORNERS);

        self.boundary = Boundary::from_corners(corners);
        self.manual_picks.clear();
        self.clear_waypoints();
        self.interaction = InteractionState::Idle;

        log::info!("Boundary redefined from {} waypoints", ids.len());
    }

    /// Update the render-only hovered waypoint.
    pub fn set_hovered(&mut self, id: Option<WaypointId>) {
        self.hovered = id;
    }

    // ------------------------------------------------------------------
    // Tagging operations
    // ------------------------------------------------------------------

    /// Toggle one tool in the pending selection. No-op outside tagging.
    pub fn toggle_pending_tool(&mut self, tool: ToolId) {
        if let InteractionState::Tagging(tagging) = &mut self.interaction {
            tagging.toggle_pending(tool);
        }
    }

    /// Replace the pending tool selection. No-op outside tagging.
    pub fn set_pending_tools(&mut self, tools: Vec<ToolId>) {
        if let InteractionState::Tagging(tagging) = &mut self.interaction {
            tagging.pending = tools;
        }
    }

    /// Commit the pending selection to the tagging target, then clear the
    /// target and the pending selection. No-op without a target.
    pub fn save_tags(&mut self) {
        if let InteractionState::Tagging(tagging) = &mut self.interaction {
            if let Some(target) = tagging.target.take() {
                let tools = std::mem::take(&mut tagging.pending);
                log::debug!("Saving tools {:?} to waypoint {}", tools, target);
                self.assignments.assign(target, tools);
            }
        }
    }

    /// Overwrite every waypoint's assignment with the pending selection.
    pub fn apply_tags_to_all(&mut self) {
        if let InteractionState::Tagging(tagging) = &self.interaction {
            let tools = tagging.pending.clone();
            log::debug!("Applying tools {:?} to all {} waypoints", tools, self.waypoints.len());
            for id in self.waypoints.iter().map(|w| w.id).collect::<Vec<_>>() {
                self.assignments.assign(id, tools.clone());
            }
        }
    }

    /// Set every waypoint's assignment to the empty set. Like the other
    /// tagging operations, only available while tagging is active.
    pub fn clear_all_tags(&mut self) {
        if !self.interaction.is_tagging() {
            return;
        }
        for id in self.waypoints.iter().map(|w| w.id).collect::<Vec<_>>() {
            self.assignments.assign(id, Vec::new());
        }
        log::debug!("Cleared tools on all waypoints");
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    /// Snapshot the current sequence, assignments, and mission metadata.
    pub fn mission_data(&self) -> MissionData {
        let mut data = MissionData::new(self.mission.name.clone(), self.mission.description.clone());
        data.area_id = self.mission.area_id;
        data.surface_id = self.mission.surface_id;
        data.waypoints = self
            .waypoints
            .iter()
            .map(|w| MissionWaypoint {
                position: w.position,
                custom: w.custom,
                tools: self.assignments.for_waypoint(w.id).to_vec(),
            })
            .collect();
        data
    }

    /// Serialize the current waypoints without touching the filesystem.
    pub fn export_to_string(&self, format_id: &str) -> Result<String, EngineError> {
        if self.waypoints.is_empty() {
            return Err(EngineError::NoWaypoints);
        }
        let format = self
            .registry
            .get(format_id)
            .ok_or_else(|| EngineError::UnknownFormat(format_id.to_string()))?;
        Ok(format.export_to_string(&self.mission_data())?)
    }

    /// Export the current waypoints to a file.
    ///
    /// `name` is user-supplied text; the format's canonical extension is
    /// appended when absent. Nothing is written when validation fails.
    pub fn export_to_file(
        &self,
        format_id: &str,
        name: &str,
    ) -> Result<crate::format::ExportResult, EngineError> {
        if self.waypoints.is_empty() {
            return Err(EngineError::NoWaypoints);
        }
        let format = self
            .registry
            .get(format_id)
            .ok_or_else(|| EngineError::UnknownFormat(format_id.to_string()))?;

        let path = resolve_filename(name, format.extensions());
        Ok(format.export(&self.mission_data(), &path)?)
    }
}

/// Append the canonical extension unless the name already carries one of
/// the format's extensions.
fn resolve_filename(name: &str, extensions: &[&'static str]) -> PathBuf {
    let trimmed = name.trim();
    let has_ext = extensions
        .iter()
        .any(|ext| trimmed.ends_with(&format!(".{ext}")));
    if has_ext {
        PathBuf::from(trimmed)
    } else {
        PathBuf::from(format!("{}.{}", trimmed, extensions[0]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Corner;

    fn square_geojson() -> String {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}, "properties": {}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 0.0]}, "properties": {}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}, "properties": {}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 1.0]}, "properties": {}}
            ]
        }"#
        .to_string()
    }

    fn session_with_grid(columns: u32, rows: u32) -> GridSession {
        let mut session = GridSession::new();
        session.import_boundary_str(&square_geojson()).unwrap();
        session.generate_grid(&GridSpec::new(columns, rows)).unwrap();
        session
    }

    #[test]
    fn test_generate_requires_four_corners() {
        let mut session = GridSession::new();
        let three = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [0.0, 0.0]}, "properties": {}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 0.0]}, "properties": {}},
                {"type": "Feature", "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}, "properties": {}}
            ]
        }"#;
        session.import_boundary_str(three).unwrap();

        // The 3-corner boundary is valid state, but generation refuses it.
        assert_eq!(session.boundary().len(), 3);
        match session.generate_grid(&GridSpec::new(2, 2)) {
            Err(EngineError::CornerCount { expected, found }) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected CornerCount, got {:?}", other),
        }
        assert!(session.waypoints().is_empty());
    }

    #[test]
    fn test_generate_replaces_sequence_and_clears_selection() {
        let mut session = session_with_grid(2, 2);
        assert_eq!(session.waypoints().len(), 4);
        assert!(session.waypoints().iter().all(|w| !w.custom));

        let first_id = session.waypoints()[0].id;
        session.click_waypoint(first_id);
        assert_eq!(session.selected(), Some(first_id));

        session.generate_grid(&GridSpec::new(3, 1)).unwrap();
        assert_eq!(session.waypoints().len(), 3);
        assert_eq!(session.selected(), None);
        // Fresh ids, never reused
        assert!(session.waypoints().iter().all(|w| w.id != first_id));
    }

    #[test]
    fn test_manual_pick_flow() {
        let mut session = GridSession::new();
        session.set_method(AcquisitionMethod::Manual);
        assert!(session.is_selecting());

        session.add_manual_pick(GeoPoint::new(0.0, 0.0));
        session.add_manual_pick(GeoPoint::new(0.0, 1.0));
        assert!(matches!(
            session.commit_manual_boundary(),
            Err(EngineError::TooFewPicks { found: 2, .. })
        ));
        assert_eq!(session.manual_picks().len(), 2, "failed commit keeps picks");

        session.add_manual_pick(GeoPoint::new(1.0, 1.0));
        session.add_manual_pick(GeoPoint::new(1.0, 0.0));
        session.commit_manual_boundary().unwrap();

        assert_eq!(session.boundary().len(), 4);
        assert!(session.manual_picks().is_empty());
        assert!(!session.is_selecting());
    }

    #[test]
    fn test_picks_ignored_when_not_selecting() {
        let mut session = GridSession::new();
        session.add_manual_pick(GeoPoint::new(0.0, 0.0));
        assert!(session.manual_picks().is_empty());
    }

    #[test]
    fn test_import_clears_existing_grid() {
        let mut session = session_with_grid(2, 2);
        assert!(!session.waypoints().is_empty());

        session.import_boundary_str(&square_geojson()).unwrap();
        assert!(session.waypoints().is_empty());
    }

    #[test]
    fn test_deletion_shifts_sequence_and_clears_selection() {
        let mut session = session_with_grid(3, 2);
        let before: Vec<WaypointId> = session.waypoints().iter().map(|w| w.id).collect();
        let victim = before[2];

        session.click_waypoint(before[1]);
        session.set_interaction(InteractionState::Deleting);
        session.click_waypoint(victim);

        let after: Vec<WaypointId> = session.waypoints().iter().map(|w| w.id).collect();
        let mut expected = before.clone();
        expected.remove(2);
        assert_eq!(after, expected);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_click_selects_outside_special_states() {
        let mut session = session_with_grid(2, 1);
        let id = session.waypoints()[1].id;

        session.click_waypoint(id);
        assert_eq!(session.selected(), Some(id));

        // Adding state still selects on waypoint clicks
        session.set_interaction(InteractionState::Adding);
        let other = session.waypoints()[0].id;
        session.click_waypoint(other);
        assert_eq!(session.selected(), Some(other));
    }

    #[test]
    fn test_canvas_click_adds_custom_waypoint_in_adding_state() {
        let mut session = session_with_grid(2, 1);
        let count = session.waypoints().len();

        // Ignored while idle
        session.click_canvas(300.0, 200.0);
        assert_eq!(session.waypoints().len(), count);

        session.set_interaction(InteractionState::Adding);
        session.click_canvas(300.0, 200.0);
        assert_eq!(session.waypoints().len(), count + 1);
        let added = session.waypoints().last().unwrap();
        assert!(added.custom);
        assert!(added.position.lat.is_finite());
    }

    #[test]
    fn test_canvas_click_noop_without_boundary_source() {
        let mut session = GridSession::new();
        session.set_interaction(InteractionState::Adding);
        session.click_canvas(300.0, 200.0);
        assert!(session.waypoints().is_empty());
    }

    #[test]
    fn test_area_redefinition_in_click_order() {
        let mut session = session_with_grid(3, 2);
        let ids: Vec<WaypointId> = session.waypoints().iter().map(|w| w.id).collect();
        let picks = [ids[4], ids[1], ids[5], ids[0]];
        let expected: Vec<GeoPoint> = picks
            .iter()
            .map(|&id| session.waypoint(id).unwrap().position)
            .collect();

        session.begin_area_definition();
        for id in picks {
            session.click_waypoint(id);
        }

        // New boundary corners follow click order (A, B, C, D)
        assert_eq!(session.boundary().corners(), expected.as_slice());
        assert!(session.waypoints().is_empty());
        assert_eq!(session.selected(), None);
        assert!(!session.interaction().is_defining_area());
    }

    #[test]
    fn test_area_selection_ignores_repeat_clicks() {
        let mut session = session_with_grid(3, 2);
        let ids: Vec<WaypointId> = session.waypoints().iter().map(|w| w.id).collect();

        session.begin_area_definition();
        session.click_waypoint(ids[0]);
        session.click_waypoint(ids[0]);
        session.click_waypoint(ids[1]);

        let InteractionState::DefiningArea(selection) = session.interaction() else {
            panic!("expected area definition in progress");
        };
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_tagging_flow() {
        let mut session = session_with_grid(2, 2);
        let ids: Vec<WaypointId> = session.waypoints().iter().map(|w| w.id).collect();

        session.toggle_tagging();
        session.click_waypoint(ids[0]);
        session.toggle_pending_tool(1);
        session.toggle_pending_tool(2);
        session.save_tags();

        assert_eq!(session.assignments().for_waypoint(ids[0]), &[1, 2]);

        // Saving clears the target; pending starts fresh on the next click,
        // loading the existing assignment.
        session.click_waypoint(ids[0]);
        let InteractionState::Tagging(tagging) = session.interaction() else {
            panic!("expected tagging state");
        };
        assert_eq!(tagging.pending, vec![1, 2]);

        session.set_pending_tools(vec![2]);
        session.apply_tags_to_all();
        for &id in &ids {
            assert_eq!(session.assignments().for_waypoint(id), &[2]);
        }

        session.clear_all_tags();
        for &id in &ids {
            assert!(session.assignments().for_waypoint(id).is_empty());
        }
    }

    #[test]
    fn test_leaving_tagging_resets_selection() {
        let mut session = session_with_grid(2, 1);
        let id = session.waypoints()[0].id;

        session.toggle_tagging();
        session.click_waypoint(id);
        assert_eq!(session.selected(), Some(id));

        session.toggle_tagging();
        assert_eq!(session.selected(), None);
        assert!(!session.interaction().is_tagging());
    }

    #[test]
    fn test_assignments_survive_clear_points() {
        let mut session = session_with_grid(2, 1);
        let id = session.waypoints()[0].id;

        session.toggle_tagging();
        session.click_waypoint(id);
        session.set_pending_tools(vec![1]);
        session.save_tags();

        session.clear_waypoints();
        assert!(session.waypoints().is_empty());
        // Stale assignment tolerated, not purged
        assert_eq!(session.assignments().for_waypoint(id), &[1]);
        assert!(!session.boundary().is_empty());
    }

    #[test]
    fn test_assignments_do_not_transfer_after_regeneration() {
        let mut session = session_with_grid(2, 1);
        let old_id = session.waypoints()[0].id;

        session.toggle_tagging();
        session.click_waypoint(old_id);
        session.set_pending_tools(vec![1]);
        session.save_tags();
        session.toggle_tagging();

        session.generate_grid(&GridSpec::new(2, 1)).unwrap();
        // Fresh waypoints carry fresh ids; the old tag does not re-attach.
        let data = session.mission_data();
        assert!(data.waypoints.iter().all(|w| w.tools.is_empty()));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = session_with_grid(2, 2);
        session.toggle_tagging();
        session.reset();

        assert!(session.boundary().is_empty());
        assert!(session.manual_picks().is_empty());
        assert!(session.waypoints().is_empty());
        assert_eq!(session.selected(), None);
        assert_eq!(*session.interaction(), InteractionState::Idle);
        assert!(!session.is_selecting());
    }

    #[test]
    fn test_export_refuses_empty_sequence() {
        let session = GridSession::new();
        assert!(matches!(
            session.export_to_string("geojson"),
            Err(EngineError::NoWaypoints)
        ));
        assert!(matches!(
            session.export_to_file("geojson", "out"),
            Err(EngineError::NoWaypoints)
        ));
    }

    #[test]
    fn test_export_unknown_format() {
        let session = session_with_grid(1, 1);
        assert!(matches!(
            session.export_to_string("kml"),
            Err(EngineError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_export_includes_assignments() {
        let mut session = session_with_grid(2, 1);
        let id = session.waypoints()[0].id;
        session.toggle_tagging();
        session.click_waypoint(id);
        session.set_pending_tools(vec![1]);
        session.save_tags();

        let text = session.export_to_string("mission").unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let waypoints = value["configuration"]["waypoints"].as_array().unwrap();
        assert_eq!(waypoints[0]["tool_type_id"][0], 1);
        assert!(waypoints[1]["tool_type_id"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_concrete_generation_scenario() {
        // Boundary A(0,0) B(0,1) C(1,1) D(1,0), X=2, Y=1, start A, CW.
        let mut session = session_with_grid(2, 1);
        let spec = GridSpec::new(2, 1).with_start(Corner::A);
        session.generate_grid(&spec).unwrap();

        let points: Vec<GeoPoint> = session.waypoints().iter().map(|w| w.position).collect();
        assert_eq!(points.len(), 2);
        assert!((points[0].lat - 0.5).abs() < 1e-12);
        assert!((points[0].lng - 1.0 / 3.0).abs() < 1e-12);
        assert!((points[1].lat - 0.5).abs() < 1e-12);
        assert!((points[1].lng - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_filename_appends_extension() {
        assert_eq!(
            resolve_filename("mygrid", &["geojson"]),
            PathBuf::from("mygrid.geojson")
        );
        assert_eq!(
            resolve_filename("mygrid.geojson", &["geojson"]),
            PathBuf::from("mygrid.geojson")
        );
        assert_eq!(
            resolve_filename("  padded ", &["csv"]),
            PathBuf::from("padded.csv")
        );
    }
}
