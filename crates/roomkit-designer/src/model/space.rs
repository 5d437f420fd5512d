use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use super::{Bounds, Point};
use crate::geometry;

/// Identifier of a space, unique within a session.
pub type SpaceId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Room,
    Veranda,
}

impl SpaceKind {
    /// Prefix used for generated names.
    pub fn label(&self) -> &'static str {
        match self {
            SpaceKind::Room => "Room",
            SpaceKind::Veranda => "Veranda",
        }
    }
}

impl std::fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A finalized room or veranda.
///
/// Area, center and bounds are derived from the points and recomputed by
/// every mutation, so they are always consistent with the outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Space {
    id: SpaceId,
    kind: SpaceKind,
    name: String,
    points: Vec<Point>,
    area: f64,
    center: Point,
    bounds: Bounds,
}

impl Space {
    pub(crate) fn new(id: SpaceId, kind: SpaceKind, name: String, points: Vec<Point>) -> Self {
        let mut space = Self {
            id,
            kind,
            name,
            points,
            area: 0.0,
            center: Point::origin(),
            bounds: Bounds::empty(),
        };
        space.recompute();
        space
    }

    pub fn id(&self) -> SpaceId {
        self.id
    }

    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outline vertices. May end with an explicit copy of the first vertex.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_veranda(&self) -> bool {
        self.kind == SpaceKind::Veranda
    }

    /// Consecutive vertex pairs including the wrap-around edge, with the
    /// index of the edge's first vertex.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (i, self.points[i], self.points[(i + 1) % n]))
    }

    /// Whether `p` lies inside the outline.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p) && geometry::point_in_polygon(p, &self.points)
    }

    /// Position for a label of the given footprint: the center, shifted so
    /// the label stays within the bounds where it fits.
    pub fn label_anchor(&self, width: f64, height: f64) -> Point {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        let mut x = self.center.x;
        let mut z = self.center.z;

        if x - half_w < self.bounds.min_x {
            x = self.bounds.min_x + half_w;
        }
        if x + half_w > self.bounds.max_x {
            x = self.bounds.max_x - half_w;
        }
        if z - half_h < self.bounds.min_z {
            z = self.bounds.min_z + half_h;
        }
        if z + half_h > self.bounds.max_z {
            z = self.bounds.max_z - half_h;
        }

        Point::new(x, z)
    }

    /// Closed outline path for fill rendering.
    pub fn outline_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut iter = self.points.iter();
        if let Some(first) = iter.next() {
            builder.begin(point(first.x as f32, first.z as f32));
            for p in iter {
                builder.line_to(point(p.x as f32, p.z as f32));
            }
            builder.close();
        }
        builder.build()
    }

    pub(crate) fn set_vertex(&mut self, index: usize, p: Point) -> bool {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = p;
                self.recompute();
                true
            }
            None => false,
        }
    }

    pub(crate) fn insert_vertex(&mut self, index: usize, p: Point) -> bool {
        if index > self.points.len() {
            return false;
        }
        self.points.insert(index, p);
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.area = geometry::area(&self.points);
        self.center = geometry::centroid(&self.points);
        self.bounds = geometry::bounds(&self.points);
    }
}
