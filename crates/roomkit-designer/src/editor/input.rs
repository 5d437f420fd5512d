//! Pointer and keyboard dispatch.

use roomkit_core::{EditorError, EditorNotice};

use super::{
    DrawingMode, EditorKey, EditorOutcome, FloorPlanEditor, PointerButton, PointerEvent,
    PointerKind, ViewMode,
};
use crate::model::{Point, SpaceId};
use crate::shape_builder::RectangleDraft;
use crate::viewport::ScreenProjection;
use crate::wall_insertion;

impl FloorPlanEditor {
    /// Route a screen-space pointer event through `projection`.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        projection: &impl ScreenProjection,
    ) -> Result<EditorOutcome, EditorError> {
        let world = projection.screen_to_world(event.screen);
        match event.kind {
            PointerKind::Down => self.pointer_down(world, event.button),
            PointerKind::Move => self.pointer_move(world),
            PointerKind::Up => self.pointer_up(world),
        }
    }

    /// Pointer pressed at plan position `world`.
    ///
    /// Checked in order: secondary button completing a polygon, vertex
    /// insertion in add-point mode, vertex handle grab, polygon closing
    /// click, rectangle start, polygon point, body-click selection.
    pub fn pointer_down(
        &mut self,
        world: Point,
        button: PointerButton,
    ) -> Result<EditorOutcome, EditorError> {
        if self.view == ViewMode::ThreeD {
            return Ok(EditorOutcome::Ignored);
        }

        let position = self.resolve(world);
        self.cursor = Some(position);

        match button {
            PointerButton::Secondary if self.mode.is_polygon() => return self.complete_polygon(),
            PointerButton::Primary => {}
            _ => return Ok(EditorOutcome::Ignored),
        }

        if self.mode == DrawingMode::AddPoint {
            let result = self.insert_at(position);
            return self.report(result);
        }

        if self.mode.allows_vertex_drag() {
            if let Some((space, index)) = self.handle_at(world) {
                let result = self
                    .space_editor
                    .begin_vertex_drag(&self.store, space, index)
                    .map(|_| EditorOutcome::DragStarted { space, index });
                return self.report(result);
            }
        }

        if self.mode.is_polygon()
            && self
                .polygon
                .is_closing_click(position, self.config.drawing.close_click_radius)
        {
            return self.complete_polygon();
        }

        if self.mode.is_rectangle() {
            self.rectangle = Some(RectangleDraft::new(position));
            return Ok(EditorOutcome::DraftStarted);
        }

        if self.mode.is_polygon() {
            self.polygon.push(position);
            tracing::debug!(count = self.polygon.len(), %position, "Polygon point added");
            return Ok(EditorOutcome::PointAdded {
                count: self.polygon.len(),
            });
        }

        let before = self.selection.selected_id();
        let after = self.selection.select_at(&self.store, world);
        if before == after {
            return Ok(EditorOutcome::Ignored);
        }
        self.notices.publish(EditorNotice::SelectionChanged(after));
        Ok(EditorOutcome::SelectionChanged(after))
    }

    /// Pointer moved to plan position `world`.
    pub fn pointer_move(&mut self, world: Point) -> Result<EditorOutcome, EditorError> {
        if self.view == ViewMode::ThreeD {
            return Ok(EditorOutcome::Ignored);
        }

        if let Some(current) = self.space_editor.drag().map(|d| d.current()) {
            let target = self.snapper.resolve_position_excluding(
                world,
                self.store.as_slice(),
                self.grid_enabled,
                current,
            );
            self.cursor = Some(target);
            if target == current {
                return Ok(EditorOutcome::PreviewUpdated);
            }

            let result = self
                .space_editor
                .update_vertex_drag(&mut self.store, target);
            let affected = self.report(result)?;
            self.rederive();
            for id in &affected {
                self.notices.publish(EditorNotice::SpaceUpdated { id: *id });
            }
            return Ok(EditorOutcome::SpacesUpdated(affected.into_vec()));
        }

        let position = self.resolve(world);
        self.cursor = Some(position);

        if let Some(draft) = self.rectangle.as_mut() {
            draft.update(position);
        }

        self.hovered_wall = if self.mode == DrawingMode::AddPoint {
            wall_insertion::find_closest_wall(
                position,
                self.store.as_slice(),
                self.config.walls.insert_distance,
            )
        } else {
            None
        };

        Ok(EditorOutcome::PreviewUpdated)
    }

    /// Pointer released at plan position `world`.
    ///
    /// Ends a vertex drag, or finalizes the rectangle draft with its far
    /// corner at the resolved release position.
    pub fn pointer_up(&mut self, world: Point) -> Result<EditorOutcome, EditorError> {
        if self.view == ViewMode::ThreeD {
            return Ok(EditorOutcome::Ignored);
        }

        if self.space_editor.end_vertex_drag().is_some() {
            return Ok(EditorOutcome::DragEnded);
        }

        match self.rectangle.take() {
            Some(mut draft) if self.mode.is_rectangle() => {
                let position = self.resolve(world);
                self.cursor = Some(position);
                draft.update(position);
                tracing::trace!(%position, "Rectangle released");
                let result = draft
                    .finish(self.config.drawing.min_area)
                    .and_then(|points| self.commit(self.mode.space_kind(), points));
                self.report(result)
            }
            _ => Ok(EditorOutcome::Ignored),
        }
    }

    /// Keyboard input.
    ///
    /// Escape cancels one level per press: the polygon draft, then the
    /// rectangle draft, then the selection, then the drawing mode.
    /// Enter completes the polygon draft.
    pub fn key_down(&mut self, key: EditorKey) -> Result<EditorOutcome, EditorError> {
        match key {
            EditorKey::Escape => Ok(self.cancel()),
            EditorKey::Enter if self.mode.is_polygon() => self.complete_polygon(),
            EditorKey::Enter => Ok(EditorOutcome::Ignored),
        }
    }

    fn cancel(&mut self) -> EditorOutcome {
        if !self.polygon.is_empty() {
            self.polygon.clear();
            tracing::debug!("Polygon draft cancelled");
            EditorOutcome::DraftCancelled
        } else if self.rectangle.take().is_some() {
            tracing::debug!("Rectangle draft cancelled");
            EditorOutcome::DraftCancelled
        } else if self.selection.selected_id().is_some() {
            self.clear_selection()
        } else if self.mode != DrawingMode::Inactive {
            self.set_mode(DrawingMode::Inactive);
            EditorOutcome::ModeReset
        } else {
            EditorOutcome::Ignored
        }
    }

    fn resolve(&self, world: Point) -> Point {
        self.snapper
            .resolve_position(world, self.store.as_slice(), self.grid_enabled)
    }

    /// Vertex handle of the selected space under `world`, if any.
    fn handle_at(&self, world: Point) -> Option<(SpaceId, usize)> {
        let space = self.selected_space()?;
        let radius = self.config.drawing.handle_radius;
        space
            .points()
            .iter()
            .position(|p| p.distance_to(&world) < radius)
            .map(|index| (space.id(), index))
    }

    fn insert_at(&mut self, position: Point) -> Result<EditorOutcome, EditorError> {
        if self.selection.selected_id().is_none() {
            return Err(EditorError::NoSelection);
        }

        let hit = wall_insertion::find_closest_wall(
            position,
            self.store.as_slice(),
            self.config.walls.insert_distance,
        )
        .ok_or(EditorError::NoTargetWall)?;

        wall_insertion::insert_vertex(&mut self.store, hit.space, hit.insert_index, hit.position)?;
        self.hovered_wall = None;
        self.rederive();
        self.notices
            .publish(EditorNotice::SpaceUpdated { id: hit.space });
        Ok(EditorOutcome::VertexInserted {
            space: hit.space,
            index: hit.insert_index,
        })
    }
}
