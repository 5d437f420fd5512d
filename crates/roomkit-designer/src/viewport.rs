//! Viewport and coordinate transformation for the top-down view.
//!
//! Handles conversion between pixel coordinates (screen space) and plan
//! coordinates on the ground plane. Manages zoom and pan operations with
//! proper coordinate mapping.

use std::fmt;

use roomkit_core::constants;
use roomkit_settings::EditorConfig;
use serde::{Deserialize, Serialize};

use crate::model::{Bounds, Point};

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 500.0;
const ZOOM_STEP: f64 = 1.2;

/// A position in screen pixels, origin at the top-left of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps screen positions onto the ground plane.
///
/// Implemented by whatever camera the host renders with. [`Viewport`] is
/// the orthographic top-down implementation.
pub trait ScreenProjection {
    fn screen_to_world(&self, screen: ScreenPoint) -> Point;
}

/// Represents the viewport transformation state (zoom and pan).
///
/// Screen +y points down and maps to plan +z, as seen by a camera looking
/// straight down at the ground plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport with the plan origin at the canvas centre.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self::with_zoom(canvas_width, canvas_height, constants::VIEW_ZOOM)
    }

    /// Like [`Viewport::new`] with an initial zoom in pixels per plan unit.
    pub fn with_zoom(canvas_width: f64, canvas_height: f64, zoom: f64) -> Self {
        let mut viewport = Self {
            zoom: constants::VIEW_ZOOM,
            pan_x: canvas_width / 2.0,
            pan_y: canvas_height / 2.0,
            canvas_width,
            canvas_height,
        };
        viewport.set_zoom(zoom);
        viewport
    }

    /// Viewport at the configured default zoom.
    pub fn from_config(canvas_width: f64, canvas_height: f64, config: &EditorConfig) -> Self {
        Self::with_zoom(canvas_width, canvas_height, config.view.zoom)
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom in pixels per plan unit.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level. Values outside (0.1, 500) are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    /// Zooms in by multiplying current zoom by 1.2.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    /// Zooms out by dividing current zoom by 1.2.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts pixel coordinates to plan coordinates.
    ///
    /// Formula:
    /// ```text
    /// world_x = (pixel_x - pan_x) / zoom
    /// world_z = (pixel_y - pan_y) / zoom
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(
            (pixel_x - self.pan_x) / self.zoom,
            (pixel_y - self.pan_y) / self.zoom,
        )
    }

    /// Converts plan coordinates to pixel coordinates.
    pub fn world_to_screen(&self, world: Point) -> ScreenPoint {
        ScreenPoint::new(
            world.x * self.zoom + self.pan_x,
            world.z * self.zoom + self.pan_y,
        )
    }

    /// Fits the given bounds into the viewport with padding.
    ///
    /// # Arguments
    /// * `bounds` - Plan-space box to show
    /// * `padding` - Fraction of the viewport reserved on each side (0.0 - 0.5)
    ///
    /// Centers the content and calculates appropriate zoom level. Empty or
    /// flat bounds leave the viewport unchanged.
    pub fn fit_to_bounds(&mut self, bounds: &Bounds, padding: f64) {
        if bounds.is_empty() || bounds.width() <= 0.0 || bounds.depth() <= 0.0 {
            return;
        }

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / bounds.width();
        let zoom_y = (self.canvas_height * padding_factor) / bounds.depth();

        // Use the smaller zoom to fit everything
        let new_zoom = zoom_x.min(zoom_y);
        if !(new_zoom > MIN_ZOOM && new_zoom < MAX_ZOOM) {
            return;
        }

        self.zoom = new_zoom;
        self.center_on(bounds.center());
    }

    /// Fits the viewport to show all content with the default padding.
    pub fn fit_to_view(&mut self, bounds: &Bounds) {
        self.fit_to_bounds(bounds, constants::VIEW_PADDING);
    }

    /// Centers the viewport on a plan coordinate.
    pub fn center_on(&mut self, world: Point) {
        self.pan_x = self.canvas_width / 2.0 - world.x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - world.z * self.zoom;
    }

    /// Resets viewport to default state (default zoom, origin centred).
    pub fn reset(&mut self) {
        self.zoom = constants::VIEW_ZOOM;
        self.center_on(Point::origin());
    }
}

impl ScreenProjection for Viewport {
    fn screen_to_world(&self, screen: ScreenPoint) -> Point {
        self.pixel_to_world(screen.x, screen.y)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}px/m | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1200.0, 800.0)
    }
}
