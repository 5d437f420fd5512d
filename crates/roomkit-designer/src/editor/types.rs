//! Editor type definitions: DrawingMode, ViewMode, pointer and key input,
//! EditorOutcome.

use std::str::FromStr;

use thiserror::Error;

use crate::model::{SpaceId, SpaceKind};
use crate::viewport::ScreenPoint;

/// Drawing modes for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawingMode {
    #[default]
    Inactive,
    Rectangle,
    Polygon,
    VerandaRectangle,
    VerandaPolygon,
    AddPoint,
    Edit,
}

impl DrawingMode {
    pub fn is_rectangle(&self) -> bool {
        matches!(self, DrawingMode::Rectangle | DrawingMode::VerandaRectangle)
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, DrawingMode::Polygon | DrawingMode::VerandaPolygon)
    }

    /// Modes in which vertex handles of the selected space can be dragged.
    pub fn allows_vertex_drag(&self) -> bool {
        matches!(self, DrawingMode::Inactive | DrawingMode::Edit)
    }

    /// Kind of space produced by this mode's drafts.
    pub fn space_kind(&self) -> SpaceKind {
        match self {
            DrawingMode::VerandaRectangle | DrawingMode::VerandaPolygon => SpaceKind::Veranda,
            _ => SpaceKind::Room,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawingMode::Inactive => "",
            DrawingMode::Rectangle => "rectangle",
            DrawingMode::Polygon => "polygon",
            DrawingMode::VerandaRectangle => "veranda-rectangle",
            DrawingMode::VerandaPolygon => "veranda-polygon",
            DrawingMode::AddPoint => "addPoint",
            DrawingMode::Edit => "edit",
        }
    }
}

impl std::fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawingMode::Inactive => f.write_str("inactive"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Unrecognised drawing mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown drawing mode '{0}'")]
pub struct ParseModeError(pub String);

impl FromStr for DrawingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "inactive" => Ok(DrawingMode::Inactive),
            "rectangle" => Ok(DrawingMode::Rectangle),
            "polygon" => Ok(DrawingMode::Polygon),
            "veranda-rectangle" => Ok(DrawingMode::VerandaRectangle),
            "veranda-polygon" => Ok(DrawingMode::VerandaPolygon),
            "addPoint" | "add-point" => Ok(DrawingMode::AddPoint),
            "edit" => Ok(DrawingMode::Edit),
            other => {
                tracing::warn!("Unknown drawing mode '{}'", other);
                Err(ParseModeError(other.to_string()))
            }
        }
    }
}

/// Which view the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Top-down editing view.
    #[default]
    TopDown,
    /// Perspective view of the extruded walls. Pointer input is ignored.
    ThreeD,
}

impl ViewMode {
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::TopDown => ViewMode::ThreeD,
            ViewMode::ThreeD => ViewMode::TopDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Pointer event as delivered by the host, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub screen: ScreenPoint,
    pub button: PointerButton,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, screen: ScreenPoint, button: PointerButton) -> Self {
        Self {
            kind,
            screen,
            button,
        }
    }

    pub fn down(screen: ScreenPoint) -> Self {
        Self::new(PointerKind::Down, screen, PointerButton::Primary)
    }

    pub fn moved(screen: ScreenPoint) -> Self {
        Self::new(PointerKind::Move, screen, PointerButton::Primary)
    }

    pub fn up(screen: ScreenPoint) -> Self {
        Self::new(PointerKind::Up, screen, PointerButton::Primary)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Escape,
    Enter,
}

/// What an accepted input did.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOutcome {
    /// Nothing to do for this input in the current state.
    Ignored,
    /// Cursor, rectangle end or hovered wall changed.
    PreviewUpdated,
    /// A rectangle draft was started.
    DraftStarted,
    /// A point was appended to the polygon draft.
    PointAdded { count: usize },
    /// A draft became a new space.
    SpaceCreated(SpaceId),
    /// A vertex drag moved these spaces.
    SpacesUpdated(Vec<SpaceId>),
    /// A vertex was inserted on a wall.
    VertexInserted { space: SpaceId, index: usize },
    /// A vertex handle was grabbed.
    DragStarted { space: SpaceId, index: usize },
    DragEnded,
    SelectionChanged(Option<SpaceId>),
    /// A space was removed.
    SpaceRemoved(SpaceId),
    /// Escape dropped the active draft.
    DraftCancelled,
    /// Escape with nothing left to cancel returned to the inactive mode.
    ModeReset,
}
