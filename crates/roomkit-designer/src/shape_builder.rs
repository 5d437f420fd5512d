//! In-progress rectangle and polygon construction.
//!
//! Drafts only collect points. They become spaces once `finish`/`close`
//! accepts them and the space store assigns an id and a name.

use roomkit_core::EditorError;

use crate::geometry;
use crate::model::Point;

fn check_area(points: &[Point], min_area: f64) -> Result<(), EditorError> {
    let area = geometry::area(points);
    if area > min_area {
        Ok(())
    } else {
        Err(EditorError::DegenerateShape { area, min_area })
    }
}

/// Rectangle being dragged out from a start corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleDraft {
    start: Point,
    end: Option<Point>,
}

impl RectangleDraft {
    pub fn new(start: Point) -> Self {
        Self { start, end: None }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn update(&mut self, end: Point) {
        self.end = Some(end);
    }

    /// Corners in drawing order, or `None` before the first update.
    pub fn corners(&self) -> Option<[Point; 4]> {
        let end = self.end?;
        let start = self.start;
        Some([
            start,
            Point::new(end.x, start.z),
            end,
            Point::new(start.x, end.z),
        ])
    }

    /// Consume the draft and return its corners when it encloses more than
    /// `min_area`. A draft that was never updated is degenerate.
    pub fn finish(self, min_area: f64) -> Result<Vec<Point>, EditorError> {
        let corners = self.corners().ok_or(EditorError::DegenerateShape {
            area: 0.0,
            min_area,
        })?;
        check_area(&corners, min_area)?;
        Ok(corners.to_vec())
    }
}

/// Polygon collecting points one click at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonDraft {
    points: Vec<Point>,
}

impl PolygonDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Point) {
        self.points.push(p);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Whether a click at `p` should complete the polygon instead of adding
    /// a point.
    pub fn is_closing_click(&self, p: Point, radius: f64) -> bool {
        self.points.len() >= 2
            && self
                .first()
                .is_some_and(|first| first.distance_to(&p) < radius)
    }

    /// Finalized outline. The first point is repeated at the end when the
    /// last point is farther than `closure_threshold` from it.
    ///
    /// On error the draft is left as it was.
    pub fn close(&mut self, closure_threshold: f64, min_area: f64) -> Result<Vec<Point>, EditorError> {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() >= 3 => (*first, *last),
            _ => {
                return Err(EditorError::InsufficientVertices {
                    count: self.points.len(),
                })
            }
        };

        let mut outline = self.points.clone();
        if first.distance_to(&last) > closure_threshold {
            outline.push(first);
        }
        check_area(&outline, min_area)?;

        self.points.clear();
        Ok(outline)
    }

    /// Outline to draw while the pointer is at `cursor`: the collected
    /// points, the cursor, and the first point again once the draft could
    /// be closed.
    pub fn preview(&self, cursor: Option<Point>) -> Vec<Point> {
        let mut outline = self.points.clone();
        if let Some(c) = cursor {
            outline.push(c);
        }
        if self.points.len() >= 3 {
            if let Some(first) = self.first() {
                outline.push(first);
            }
        }
        outline
    }
}
