//! # RoomKit
//!
//! Interactive floor-plan editing core. Users draw rooms and verandas on the
//! ground plane as rectangles or polygons, edit their vertices, and the
//! engine derives the walls a host renders in a top-down and a 3D view.
//!
//! ## Architecture
//!
//! RoomKit is organized as a workspace with multiple crates:
//!
//! 1. **roomkit-core** - Constants, errors, editor notices
//! 2. **roomkit-settings** - Editor configuration, file load/save, validation
//! 3. **roomkit-designer** - Plan model, snapping, drafts, vertex editing, walls, session controller
//! 4. **roomkit** - Facade that re-exports the member crates
//!
//! ## Features
//!
//! - **Drawing**: Two-click rectangles and N-click polygons for rooms and verandas
//! - **Snapping**: Grid snapping followed by snapping onto existing vertices
//! - **Editing**: Vertex drags that keep adjoining spaces joined, vertex insertion on walls
//! - **Walls**: Deduplicated structural walls, veranda grids, 3D extrusion boxes

pub use roomkit_core::constants;
pub use roomkit_designer as designer;
pub use roomkit_settings as settings;

pub use roomkit_core::{
    EditorError, EditorNotice, Error, NoticeDispatcher, NoticeLevel, NoticeReceiver, Result,
};

pub use roomkit_designer::{
    Bounds, DraftPreview, DrawingMode, EditorKey, EditorOutcome, FloorPlanEditor, Point,
    PointerButton, PointerEvent, PointerKind, ScreenPoint, ScreenProjection, Space, SpaceId,
    SpaceKind, ViewMode, Viewport, Wall, WallExtrusion, WallKind, WallSet,
};

pub use roomkit_settings::{ConfigError, EditorConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, INFO otherwise
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
