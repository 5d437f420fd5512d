//! RoomKit Settings Crate
//!
//! Handles editor configuration: snapping and drawing thresholds, wall
//! dimensions, and view defaults, persisted as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    DrawingSettings, EditorConfig, GridSettings, SnapSettings, ViewSettings, WallSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
