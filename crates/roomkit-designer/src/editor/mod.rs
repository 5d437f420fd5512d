//! Editing session controller.
//!
//! [`FloorPlanEditor`] owns the plan and every piece of transient session
//! state, and routes pointer and keyboard input to the shape builder, the
//! space editor and the wall-insertion resolver depending on the mode.
//! Every accepted change re-derives the walls and publishes a notice; every
//! rejection publishes [`EditorNotice::Rejected`] and leaves the session
//! unchanged.

mod input;
mod preview;
mod types;

pub use preview::DraftPreview;
pub use types::{
    DrawingMode, EditorKey, EditorOutcome, ParseModeError, PointerButton, PointerEvent,
    PointerKind, ViewMode,
};

use roomkit_core::{constants, EditorError, EditorNotice, NoticeDispatcher, NoticeReceiver};
use roomkit_settings::{ConfigError, EditorConfig};

use crate::model::{Bounds, Point, Space, SpaceId, SpaceKind};
use crate::selection_manager::SelectionManager;
use crate::shape_builder::{PolygonDraft, RectangleDraft};
use crate::snapping::Snapper;
use crate::space_editor::{SpaceEditor, VertexDrag};
use crate::space_store::SpaceStore;
use crate::wall_insertion::WallHit;
use crate::walls::{Wall, WallExtrusion, WallSet};

/// Floor-plan editing session.
#[derive(Debug)]
pub struct FloorPlanEditor {
    config: EditorConfig,
    snapper: Snapper,
    store: SpaceStore,
    walls: WallSet,
    selection: SelectionManager,
    space_editor: SpaceEditor,
    mode: DrawingMode,
    view: ViewMode,
    grid_enabled: bool,
    rectangle: Option<RectangleDraft>,
    polygon: PolygonDraft,
    cursor: Option<Point>,
    hovered_wall: Option<WallHit>,
    notices: NoticeDispatcher,
}

impl FloorPlanEditor {
    /// Session with the default configuration.
    pub fn new() -> Self {
        Self::build(EditorConfig::default())
    }

    /// Session with a custom configuration. The configuration is validated
    /// first.
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EditorConfig) -> Self {
        Self {
            snapper: Snapper::from_config(&config),
            store: SpaceStore::new(),
            walls: WallSet::new(),
            selection: SelectionManager::new(),
            space_editor: SpaceEditor::new(),
            mode: DrawingMode::Inactive,
            view: ViewMode::TopDown,
            grid_enabled: config.grid.enabled,
            rectangle: None,
            polygon: PolygonDraft::new(),
            cursor: None,
            hovered_wall: None,
            notices: NoticeDispatcher::default(),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Receive notices published from now on.
    pub fn subscribe(&self) -> NoticeReceiver {
        self.notices.subscribe()
    }

    pub fn notices(&self) -> &NoticeDispatcher {
        &self.notices
    }

    // Mode and view

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Switch drawing mode. Drafts, any vertex drag and the hovered wall are
    /// dropped; the selection is kept.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if mode != self.mode {
            tracing::debug!(from = %self.mode, to = %mode, "Drawing mode changed");
        }
        self.mode = mode;
        self.drop_transient();
    }

    /// Enter or leave the edit mode.
    pub fn set_edit_mode(&mut self, enabled: bool) {
        if enabled {
            self.set_mode(DrawingMode::Edit);
        } else if self.mode == DrawingMode::Edit {
            self.set_mode(DrawingMode::Inactive);
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// Switch view. Drafts, any vertex drag and the hovered wall are dropped.
    pub fn set_view_mode(&mut self, view: ViewMode) {
        if view != self.view {
            tracing::debug!(?view, "View changed");
            self.view = view;
            self.drop_transient();
        }
    }

    pub fn toggle_view_mode(&mut self) -> ViewMode {
        self.set_view_mode(self.view.toggled());
        self.view
    }

    pub fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    pub fn set_grid_enabled(&mut self, enabled: bool) {
        self.grid_enabled = enabled;
    }

    // Plan outputs

    /// All spaces in creation order.
    pub fn spaces(&self) -> &[Space] {
        self.store.as_slice()
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Space> {
        self.store.of_kind(SpaceKind::Room)
    }

    pub fn verandas(&self) -> impl Iterator<Item = &Space> {
        self.store.of_kind(SpaceKind::Veranda)
    }

    /// Box around every space, for fitting the view to the plan. Empty when
    /// the plan is.
    pub fn plan_bounds(&self) -> Bounds {
        self.store
            .iter()
            .fold(Bounds::empty(), |acc, s| acc.union(&s.bounds()))
    }

    pub fn space(&self, id: SpaceId) -> Option<&Space> {
        self.store.get(id)
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Boxes for the 3D view, one per structural wall.
    pub fn wall_extrusions(&self) -> Vec<WallExtrusion> {
        self.walls
            .extrusions(self.config.walls.height, self.config.walls.thickness)
    }

    /// Structural walls of the selected space, for highlighting.
    pub fn selected_walls(&self) -> Vec<&Wall> {
        match self.selection.selected_id() {
            Some(id) => self
                .walls
                .of_space(id)
                .filter(|w| w.is_structural())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn selected_space(&self) -> Option<&Space> {
        self.selection
            .selected_id()
            .and_then(|id| self.store.get(id))
    }

    pub fn selected_id(&self) -> Option<SpaceId> {
        self.selection.selected_id()
    }

    /// Where to place the name label of space `id`.
    pub fn label_anchor(&self, id: SpaceId) -> Option<Point> {
        let (width, depth) = constants::LABEL_SIZE;
        self.store.get(id).map(|s| s.label_anchor(width, depth))
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn hovered_wall(&self) -> Option<&WallHit> {
        self.hovered_wall.as_ref()
    }

    pub fn vertex_drag(&self) -> Option<&VertexDrag> {
        self.space_editor.drag()
    }

    pub fn rectangle_draft(&self) -> Option<&RectangleDraft> {
        self.rectangle.as_ref()
    }

    pub fn polygon_draft(&self) -> &PolygonDraft {
        &self.polygon
    }

    // Direct operations

    /// Finalize the polygon draft as a new space of the mode's kind.
    ///
    /// On rejection the draft is kept so more points can be added.
    pub fn complete_polygon(&mut self) -> Result<EditorOutcome, EditorError> {
        let result = self.try_complete_polygon();
        self.report(result)
    }

    fn try_complete_polygon(&mut self) -> Result<EditorOutcome, EditorError> {
        if !self.mode.is_polygon() {
            return Err(EditorError::ModeMismatch {
                expected: DrawingMode::Polygon.to_string(),
                actual: self.mode.to_string(),
            });
        }

        let drawing = &self.config.drawing;
        let points = self
            .polygon
            .close(drawing.closure_threshold, drawing.min_area)?;
        self.commit(self.mode.space_kind(), points)
    }

    pub fn select_space(&mut self, id: SpaceId) -> Result<EditorOutcome, EditorError> {
        let result = if self.store.contains(id) {
            self.set_selection(Some(id));
            Ok(EditorOutcome::SelectionChanged(Some(id)))
        } else {
            Err(EditorError::UnknownSpace { id })
        };
        self.report(result)
    }

    pub fn clear_selection(&mut self) -> EditorOutcome {
        self.set_selection(None);
        EditorOutcome::SelectionChanged(None)
    }

    pub fn remove_space(&mut self, id: SpaceId) -> Result<EditorOutcome, EditorError> {
        let result = self.store.remove(id);
        let removed = self.report(result)?;

        if self
            .space_editor
            .drag()
            .is_some_and(|d| d.participants().iter().any(|p| p.space == removed.id()))
        {
            self.space_editor.end_vertex_drag();
        }
        self.hovered_wall = None;
        self.rederive();
        self.notices.publish(EditorNotice::SpaceRemoved { id });
        if self.selection.is_selected(id) {
            self.set_selection(None);
        }
        Ok(EditorOutcome::SpaceRemoved(id))
    }

    /// Start over with an empty plan. Ids and names restart at 1.
    pub fn reset_session(&mut self) {
        tracing::debug!("Session reset");
        self.store.clear();
        self.walls = WallSet::new();
        self.set_selection(None);
        self.mode = DrawingMode::Inactive;
        self.view = ViewMode::TopDown;
        self.grid_enabled = self.config.grid.enabled;
        self.drop_transient();
        self.cursor = None;
    }

    // Internals shared with the input handlers

    fn commit(&mut self, kind: SpaceKind, points: Vec<Point>) -> Result<EditorOutcome, EditorError> {
        let id = self.store.add(kind, points, self.config.drawing.min_area)?;
        self.rederive();
        if let Some(space) = self.store.get(id) {
            self.notices.publish(EditorNotice::SpaceCreated {
                id,
                name: space.name().to_string(),
                area: space.area(),
            });
        }
        Ok(EditorOutcome::SpaceCreated(id))
    }

    fn set_selection(&mut self, id: Option<SpaceId>) {
        let changed = match id {
            Some(id) => self.selection.select(id),
            None => self.selection.clear(),
        };
        if changed {
            self.notices.publish(EditorNotice::SelectionChanged(id));
        }
    }

    fn rederive(&mut self) {
        self.walls = WallSet::derive(
            self.store.as_slice(),
            self.config.walls.veranda_grid_spacing,
        );
    }

    fn drop_transient(&mut self) {
        self.rectangle = None;
        self.polygon.clear();
        self.space_editor.end_vertex_drag();
        self.hovered_wall = None;
    }

    /// Publish a rejection notice for an error result and pass it through.
    fn report<T>(&self, result: Result<T, EditorError>) -> Result<T, EditorError> {
        if let Err(err) = &result {
            tracing::warn!(mode = %self.mode, "Rejected: {}", err);
            self.notices.publish(EditorNotice::Rejected(err.clone()));
        }
        result
    }
}

impl Default for FloorPlanEditor {
    fn default() -> Self {
        Self::new()
    }
}
