//! Wall derivation.
//!
//! Walls are never edited directly. They are rebuilt from the full space
//! collection after every change: one wall per distinct outline edge, plus
//! a decorative grid over each veranda.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::{Point, Space, SpaceId, SpaceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WallKind {
    /// Outline edge of a room or veranda.
    Structural,
    /// Decorative veranda grid line. Never edited or targeted for insertion.
    VerandaGrid,
}

/// A wall segment. Endpoints are ordered by x, then z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wall {
    pub start: Point,
    pub end: Point,
    pub space: SpaceId,
    pub space_kind: SpaceKind,
    pub kind: WallKind,
    /// Position in derivation order.
    pub order: usize,
}

impl Wall {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Direction on the ground plane in radians, `atan2(dz, dx)`.
    pub fn angle(&self) -> f64 {
        (self.end.z - self.start.z).atan2(self.end.x - self.start.x)
    }

    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.z + self.end.z) / 2.0,
        )
    }

    pub fn is_structural(&self) -> bool {
        self.kind == WallKind::Structural
    }

    /// Box the 3D view draws for this wall.
    pub fn extrusion(&self, height: f64, thickness: f64) -> WallExtrusion {
        WallExtrusion {
            position: self.midpoint(),
            elevation: height / 2.0,
            length: self.length(),
            height,
            thickness,
            rotation: -self.angle(),
            space: self.space,
            space_kind: self.space_kind,
        }
    }
}

/// Flat description of an extruded wall box, centred on the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WallExtrusion {
    /// Centre of the box on the ground plane.
    pub position: Point,
    /// Height of the box centre above the ground plane.
    pub elevation: f64,
    pub length: f64,
    pub height: f64,
    pub thickness: f64,
    /// Rotation about the vertical axis in radians.
    pub rotation: f64,
    pub space: SpaceId,
    pub space_kind: SpaceKind,
}

fn normalize(a: Point, b: Point) -> (Point, Point) {
    if (a.x, a.z) <= (b.x, b.z) {
        (a, b)
    } else {
        (b, a)
    }
}

/// Derived walls of a plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallSet {
    walls: Vec<Wall>,
}

impl WallSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from scratch. Edges shared by two spaces produce one wall,
    /// owned by the space that comes first.
    pub fn derive(spaces: &[Space], veranda_grid_spacing: f64) -> Self {
        let mut seen: HashSet<((u64, u64), (u64, u64))> = HashSet::new();
        let mut walls = Vec::new();

        for space in spaces {
            for (_, a, b) in space.edges() {
                if a == b {
                    continue;
                }
                let (start, end) = normalize(a, b);
                if !seen.insert((start.key(), end.key())) {
                    continue;
                }
                walls.push(Wall {
                    start,
                    end,
                    space: space.id(),
                    space_kind: space.kind(),
                    kind: WallKind::Structural,
                    order: walls.len(),
                });
            }
        }

        for space in spaces.iter().filter(|s| s.is_veranda()) {
            for (start, end) in veranda_grid_lines(space, veranda_grid_spacing) {
                walls.push(Wall {
                    start,
                    end,
                    space: space.id(),
                    space_kind: space.kind(),
                    kind: WallKind::VerandaGrid,
                    order: walls.len(),
                });
            }
        }

        tracing::debug!(count = walls.len(), "Walls derived");
        Self { walls }
    }

    pub fn all(&self) -> &[Wall] {
        &self.walls
    }

    pub fn structural(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter().filter(|w| w.kind == WallKind::Structural)
    }

    pub fn decorative(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter().filter(|w| w.kind == WallKind::VerandaGrid)
    }

    pub fn of_space(&self, id: SpaceId) -> impl Iterator<Item = &Wall> {
        self.walls.iter().filter(move |w| w.space == id)
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Extrusions of the structural walls.
    pub fn extrusions(&self, height: f64, thickness: f64) -> Vec<WallExtrusion> {
        self.structural()
            .map(|w| w.extrusion(height, thickness))
            .collect()
    }
}

/// Lines across the veranda's bounds at `spacing`: constant-z lines first,
/// then constant-x lines, each starting at the minimum edge.
fn veranda_grid_lines(space: &Space, spacing: f64) -> Vec<(Point, Point)> {
    let b = space.bounds();
    if spacing <= 0.0 || b.is_empty() {
        return Vec::new();
    }

    // Integer steps keep the last line from drifting past the bound.
    let steps = |span: f64| (span / spacing + 1e-9).floor() as usize;
    let mut lines = Vec::new();

    for k in 0..=steps(b.depth()) {
        let z = b.min_z + k as f64 * spacing;
        lines.push((Point::new(b.min_x, z), Point::new(b.max_x, z)));
    }
    for k in 0..=steps(b.width()) {
        let x = b.min_x + k as f64 * spacing;
        lines.push((Point::new(x, b.min_z), Point::new(x, b.max_z)));
    }
    lines
}
