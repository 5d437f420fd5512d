//! Configuration and settings management for RoomKit
//!
//! Provides configuration file handling and validation for the floor-plan
//! editor. Supports JSON and TOML file formats stored in the platform
//! configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Grid settings (cell size, initial snapping state)
//! - Vertex snapping
//! - Drawing thresholds (minimum area, polygon closing)
//! - Wall settings (insertion distance, extrusion size, veranda grid)
//! - View defaults

use roomkit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "roomkit";
const CONFIG_FILE_NAME: &str = "editor.toml";

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Grid cell size in plan units
    pub size: f64,
    /// Whether grid snapping is on when a session starts
    pub enabled: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: constants::GRID_SIZE,
            enabled: true,
        }
    }
}

/// Vertex snapping settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Distance below which a grid position snaps onto an existing vertex
    pub vertex_threshold: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            vertex_threshold: constants::VERTEX_SNAP_THRESHOLD,
        }
    }
}

/// Shape construction thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingSettings {
    /// Finalized spaces must enclose strictly more than this area
    pub min_area: f64,
    /// Last-to-first distance above which a polygon gets an explicit closing point
    pub closure_threshold: f64,
    /// Clicking this close to the first polygon point completes the polygon
    pub close_click_radius: f64,
    /// Pick radius of vertex handles
    pub handle_radius: f64,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            min_area: constants::MIN_SPACE_AREA,
            closure_threshold: constants::POLYGON_CLOSURE_THRESHOLD,
            close_click_radius: constants::POLYGON_CLOSE_CLICK_RADIUS,
            handle_radius: constants::VERTEX_HANDLE_RADIUS,
        }
    }
}

/// Wall settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallSettings {
    /// Maximum pointer distance for inserting a vertex on a wall
    pub insert_distance: f64,
    /// Extrusion height in the 3D view
    pub height: f64,
    /// Extrusion thickness in the 3D view
    pub thickness: f64,
    /// Spacing of the decorative veranda grid
    pub veranda_grid_spacing: f64,
}

impl Default for WallSettings {
    fn default() -> Self {
        Self {
            insert_distance: constants::WALL_INSERT_DISTANCE,
            height: constants::WALL_HEIGHT,
            thickness: constants::WALL_THICKNESS,
            veranda_grid_spacing: constants::VERANDA_GRID_SPACING,
        }
    }
}

/// View defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Initial top-down zoom in pixels per plan unit
    pub zoom: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            zoom: constants::VIEW_ZOOM,
        }
    }
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid settings
    pub grid: GridSettings,
    /// Vertex snapping
    pub snapping: SnapSettings,
    /// Drawing thresholds
    pub drawing: DrawingSettings,
    /// Wall settings
    pub walls: WallSettings,
    /// View defaults
    pub view: ViewSettings,
}

impl EditorConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the config file in the platform config directory.
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match config_format(path)? {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match config_format(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| SettingsError::SaveError(format!("{}: {}", parent.display(), e)))?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("grid.size", self.grid.size),
            ("snapping.vertex_threshold", self.snapping.vertex_threshold),
            ("drawing.closure_threshold", self.drawing.closure_threshold),
            ("drawing.close_click_radius", self.drawing.close_click_radius),
            ("drawing.handle_radius", self.drawing.handle_radius),
            ("walls.insert_distance", self.walls.insert_distance),
            ("walls.height", self.walls.height),
            ("walls.thickness", self.walls.thickness),
            ("walls.veranda_grid_spacing", self.walls.veranda_grid_spacing),
            ("view.zoom", self.view.zoom),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(out_of_range(key, value));
            }
        }

        if !self.drawing.min_area.is_finite() || self.drawing.min_area < 0.0 {
            return Err(out_of_range("drawing.min_area", self.drawing.min_area));
        }

        // Vertex snapping runs on grid positions; a larger radius would pull
        // neighbouring grid points onto the same vertex.
        if self.snapping.vertex_threshold > self.grid.size {
            return Err(out_of_range(
                "snapping.vertex_threshold",
                self.snapping.vertex_threshold,
            ));
        }

        // Each veranda gets one decorative line per step of the spacing.
        if self.walls.veranda_grid_spacing < self.grid.size / 10.0 {
            return Err(out_of_range(
                "walls.veranda_grid_spacing",
                self.walls.veranda_grid_spacing,
            ));
        }

        Ok(())
    }
}

enum ConfigFormat {
    Json,
    Toml,
}

fn config_format(path: &Path) -> Result<ConfigFormat, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
