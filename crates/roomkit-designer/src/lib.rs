//! # RoomKit Designer
//!
//! This crate provides the floor-plan editing engine: drawing rooms and
//! verandas on the ground plane, editing their vertices, and deriving the
//! walls the host renders in its top-down and 3D views.
//!
//! ## Core Components
//!
//! ### Plan Elements
//! - **Spaces**: Rooms and verandas, closed outlines with derived area, center and bounds
//! - **Walls**: Deduplicated outline edges plus decorative veranda grids
//! - **Viewport**: Screen to plan projection for the top-down view
//!
//! ### Editing Operations
//! - **Snapping**: Grid snapping, then snapping onto existing vertices
//! - **Shape Builder**: Two-click rectangles and N-click polygons
//! - **Space Editor**: Vertex dragging that keeps adjoining spaces connected
//! - **Wall Insertion**: Splitting the wall under the pointer with a new vertex
//! - **Selection**: Single selection shared by rooms and verandas
//!
//! ## Architecture
//!
//! ```text
//! FloorPlanEditor (session state, input dispatch)
//!   ├── Snapper (pointer resolution)
//!   ├── RectangleDraft / PolygonDraft (construction)
//!   ├── SpaceEditor (vertex drags)
//!   ├── wall_insertion (vertex insertion)
//!   └── SpaceStore (finalized spaces)
//!         └── WallSet (re-derived after every change)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use roomkit_designer::{DrawingMode, FloorPlanEditor, Point, PointerButton};
//!
//! let mut editor = FloorPlanEditor::new();
//! editor.set_mode(DrawingMode::Rectangle);
//!
//! editor.pointer_down(Point::new(0.0, 0.0), PointerButton::Primary).unwrap();
//! editor.pointer_move(Point::new(2.0, 2.0)).unwrap();
//! editor.pointer_up(Point::new(2.0, 2.0)).unwrap();
//!
//! assert_eq!(editor.spaces()[0].name(), "Room 1");
//! assert_eq!(editor.walls().structural().count(), 4);
//! ```

pub mod editor;
pub mod geometry;
pub mod model;
pub mod selection_manager;
pub mod shape_builder;
pub mod snapping;
pub mod space_editor;
pub mod space_store;
pub mod viewport;
pub mod wall_insertion;
pub mod walls;

pub use editor::{
    DraftPreview, DrawingMode, EditorKey, EditorOutcome, FloorPlanEditor, ParseModeError,
    PointerButton, PointerEvent, PointerKind, ViewMode,
};
pub use model::{Bounds, Point, Space, SpaceId, SpaceKind};
pub use selection_manager::SelectionManager;
pub use shape_builder::{PolygonDraft, RectangleDraft};
pub use snapping::Snapper;
pub use space_editor::{Participant, SpaceEditor, VertexDrag};
pub use space_store::SpaceStore;
pub use viewport::{ScreenPoint, ScreenProjection, Viewport};
pub use wall_insertion::WallHit;
pub use walls::{Wall, WallExtrusion, WallKind, WallSet};
