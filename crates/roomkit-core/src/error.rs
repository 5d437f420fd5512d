//! Error handling for RoomKit
//!
//! Every editor operation that cannot be applied is rejected with an
//! [`EditorError`] and leaves the session state unchanged. None of these are
//! fatal: the presentation layer reports them to the user and carries on.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Rejected editor operation.
///
/// `Clone` so that a rejection can be both returned to the caller and
/// published as a notice.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// The finalized shape does not enclose enough area.
    #[error("Area is too small ({area:.3} <= {min_area:.3})")]
    DegenerateShape {
        /// The computed area of the candidate shape.
        area: f64,
        /// The configured minimum area.
        min_area: f64,
    },

    /// Polygon completion requested with fewer than three points.
    #[error("A polygon needs at least 3 points, got {count}")]
    InsufficientVertices {
        /// Number of points collected so far.
        count: usize,
    },

    /// No wall lies within the insertion distance of the pointer.
    #[error("No wall close enough to insert a point")]
    NoTargetWall,

    /// The operation needs a selected space or an active vertex drag.
    #[error("No space selected")]
    NoSelection,

    /// The referenced space does not exist.
    #[error("Unknown space {id}")]
    UnknownSpace {
        /// The missing space id.
        id: u64,
    },

    /// The referenced vertex index is out of range for the space.
    #[error("Space {id} has no vertex {index}")]
    InvalidVertex {
        /// The space id.
        id: u64,
        /// The requested vertex index.
        index: usize,
    },

    /// The operation is not available in the current drawing mode.
    #[error("Operation requires {expected} mode, current mode is {actual}")]
    ModeMismatch {
        /// The mode the operation needs.
        expected: String,
        /// The active mode.
        actual: String,
    },
}

impl EditorError {
    /// Whether the rejection came from shape validation (area or vertex count).
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            EditorError::DegenerateShape { .. } | EditorError::InsufficientVertices { .. }
        )
    }
}

/// Main error type for RoomKit
///
/// A unified error type for APIs that mix editor rejections with I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// Editor rejection
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this is an editor rejection
    pub fn is_editor_error(&self) -> bool {
        matches!(self, Error::Editor(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
