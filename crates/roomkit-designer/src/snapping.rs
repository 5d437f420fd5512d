//! Pointer snapping: grid first, then existing vertices.

use roomkit_settings::EditorConfig;

use crate::geometry;
use crate::model::{Point, Space};

/// Resolves raw pointer positions to snapped plan positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapper {
    grid_size: f64,
    vertex_threshold: f64,
}

impl Snapper {
    pub fn new(grid_size: f64, vertex_threshold: f64) -> Self {
        Self {
            grid_size,
            vertex_threshold,
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.grid.size, config.snapping.vertex_threshold)
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    pub fn vertex_threshold(&self) -> f64 {
        self.vertex_threshold
    }

    /// Snap `raw` to the grid, then onto the first existing vertex closer
    /// than the vertex threshold. With the grid disabled `raw` is returned
    /// untouched.
    pub fn resolve_position(&self, raw: Point, spaces: &[Space], grid_enabled: bool) -> Point {
        self.resolve(raw, spaces, grid_enabled, None)
    }

    /// Like [`Snapper::resolve_position`], ignoring vertices equal to
    /// `exclude`. Used while dragging the vertex at `exclude`.
    pub fn resolve_position_excluding(
        &self,
        raw: Point,
        spaces: &[Space],
        grid_enabled: bool,
        exclude: Point,
    ) -> Point {
        self.resolve(raw, spaces, grid_enabled, Some(exclude))
    }

    fn resolve(
        &self,
        raw: Point,
        spaces: &[Space],
        grid_enabled: bool,
        exclude: Option<Point>,
    ) -> Point {
        if !grid_enabled {
            return raw;
        }

        let mut vertices = spaces
            .iter()
            .flat_map(|space| space.points().iter().copied())
            .filter(|v| Some(*v) != exclude);

        // An existing vertex resolves to itself, so every resolved position
        // is a fixed point even when the vertex lies off the grid.
        if vertices.clone().any(|v| v == raw) {
            return raw;
        }

        let snapped = geometry::snap_to_grid(raw, self.grid_size);

        vertices
            .find(|v| v.distance_to(&snapped) < self.vertex_threshold)
            .unwrap_or(snapped)
    }
}

impl Default for Snapper {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}
