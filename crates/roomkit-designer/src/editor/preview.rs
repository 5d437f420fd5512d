use serde::Serialize;

use super::FloorPlanEditor;
use crate::model::Point;
use crate::wall_insertion::WallHit;

/// Transient geometry for live feedback while drawing or editing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DraftPreview {
    /// Corners of the rectangle being dragged.
    pub rectangle: Option<[Point; 4]>,
    /// Polygon draft outline including the cursor and closing point.
    pub polygon: Vec<Point>,
    /// Segment from the last polygon point to the cursor.
    pub rubber_band: Option<(Point, Point)>,
    /// Wall that a click in add-point mode would split. Only shown while a
    /// space is selected.
    pub hovered_wall: Option<WallHit>,
    /// Draggable vertex handles of the selected space.
    pub vertex_handles: Vec<Point>,
    pub cursor: Option<Point>,
}

impl DraftPreview {
    pub fn is_empty(&self) -> bool {
        self.rectangle.is_none()
            && self.polygon.is_empty()
            && self.rubber_band.is_none()
            && self.hovered_wall.is_none()
            && self.vertex_handles.is_empty()
    }
}

impl FloorPlanEditor {
    /// Preview of the current drafts, hover and handles.
    pub fn preview(&self) -> DraftPreview {
        let polygon = if self.polygon.is_empty() {
            Vec::new()
        } else {
            self.polygon.preview(self.cursor)
        };

        let rubber_band = match (self.polygon.points().last(), self.cursor) {
            (Some(last), Some(cursor)) => Some((*last, cursor)),
            _ => None,
        };

        let vertex_handles = if self.mode.allows_vertex_drag() {
            self.selected_space()
                .map(|s| s.points().to_vec())
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        DraftPreview {
            rectangle: self.rectangle.and_then(|r| r.corners()),
            polygon,
            rubber_band,
            hovered_wall: self
                .hovered_wall
                .filter(|_| self.selection.selected_id().is_some()),
            vertex_handles,
            cursor: self.cursor,
        }
    }
}
