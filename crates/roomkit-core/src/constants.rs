//! Default editing constants.
//!
//! Plan units are metres on the ground plane.

/// Grid cell size used for snapping.
pub const GRID_SIZE: f64 = 0.5;

/// Maximum distance at which a position snaps onto an existing vertex.
pub const VERTEX_SNAP_THRESHOLD: f64 = 0.5;

/// Spaces must enclose strictly more than this area.
pub const MIN_SPACE_AREA: f64 = 0.1;

/// A polygon whose last point is farther than this from its first point is
/// closed by repeating the first point.
pub const POLYGON_CLOSURE_THRESHOLD: f64 = 0.5;

/// Clicking within this radius of the first polygon point completes it.
pub const POLYGON_CLOSE_CLICK_RADIUS: f64 = 1.0;

/// Pick radius of a vertex handle on the selected space.
pub const VERTEX_HANDLE_RADIUS: f64 = 0.2;

/// Maximum pointer distance from a wall for vertex insertion.
pub const WALL_INSERT_DISTANCE: f64 = 1.0;

/// Spacing of the decorative veranda grid.
pub const VERANDA_GRID_SPACING: f64 = 0.5;

/// Extruded wall height in the 3D view.
pub const WALL_HEIGHT: f64 = 2.5;

/// Extruded wall thickness in the 3D view.
pub const WALL_THICKNESS: f64 = 0.2;

/// Default top-down zoom in pixels per plan unit.
pub const VIEW_ZOOM: f64 = 50.0;

/// Padding reserved around content when fitting the view (fraction per side).
pub const VIEW_PADDING: f64 = 0.05;

/// Default label footprint (width, depth) in plan units.
pub const LABEL_SIZE: (f64, f64) = (1.5, 1.0);
