//! Locating the wall under the pointer and inserting vertices on it.

use roomkit_core::EditorError;
use serde::Serialize;

use crate::geometry;
use crate::model::{Point, Space, SpaceId};
use crate::space_store::SpaceStore;

/// Closest outline edge to a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallHit {
    pub space: SpaceId,
    /// Index at which a new vertex goes to split this edge.
    pub insert_index: usize,
    /// Projection of the pointer onto the edge.
    pub position: Point,
    pub distance: f64,
    pub start: Point,
    pub end: Point,
}

/// Find the outline edge closest to `position` across all spaces.
///
/// Only outline edges are considered, so veranda grid lines are never hit.
/// Ties keep the earliest edge. Returns `None` unless the best distance is
/// strictly below `max_distance`.
pub fn find_closest_wall(position: Point, spaces: &[Space], max_distance: f64) -> Option<WallHit> {
    let mut best: Option<WallHit> = None;

    for space in spaces {
        for (i, start, end) in space.edges() {
            let projected = geometry::closest_point_on_segment(position, start, end);
            let distance = position.distance_to(&projected);
            if best.is_some_and(|b| distance >= b.distance) {
                continue;
            }
            best = Some(WallHit {
                space: space.id(),
                insert_index: i + 1,
                position: projected,
                distance,
                start,
                end,
            });
        }
    }

    best.filter(|hit| hit.distance < max_distance)
}

/// Insert `point` into a space's outline at `insert_index`.
pub fn insert_vertex(
    store: &mut SpaceStore,
    space: SpaceId,
    insert_index: usize,
    point: Point,
) -> Result<(), EditorError> {
    store.insert_vertex(space, insert_index, point)?;
    tracing::debug!(space, insert_index, %point, "Vertex inserted");
    Ok(())
}
