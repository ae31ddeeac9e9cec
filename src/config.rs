//! Startup configuration (`--config <file>.toml` plus CLI overrides).
//!
//! Every section is optional. Grid values outside the limits of the selected
//! variant are clamped rather than rejected, the same way the panel sliders
//! would clamp them.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mesh::GridConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Which flavour of the demo runs: a static bumpy plane, or an animated
/// terrain with per-vertex undulation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Static,
    Animated,
}

/// Slider ranges for the grid controls.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLimits {
    pub extent: RangeInclusive<f32>,
    pub segments: RangeInclusive<u32>,
}

impl GridLimits {
    /// Clamps every field into range. Non-finite extents are replaced with
    /// the smallest allowed extent.
    pub fn clamp(&self, grid: GridConfig) -> GridConfig {
        GridConfig {
            width: self.clamp_extent(grid.width),
            height: self.clamp_extent(grid.height),
            width_segments: grid
                .width_segments
                .clamp(*self.segments.start(), *self.segments.end()),
            height_segments: grid
                .height_segments
                .clamp(*self.segments.start(), *self.segments.end()),
        }
    }

    fn clamp_extent(&self, extent: f32) -> f32 {
        if extent.is_finite() {
            extent.clamp(*self.extent.start(), *self.extent.end())
        } else {
            *self.extent.start()
        }
    }
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Static => "Static bumps",
            Variant::Animated => "Animated terrain",
        }
    }

    pub fn limits(self) -> GridLimits {
        match self {
            Variant::Static => GridLimits {
                extent: 1.0..=30.0,
                segments: 1..=30,
            },
            Variant::Animated => GridLimits {
                extent: 1.0..=500.0,
                segments: 1..=100,
            },
        }
    }

    pub fn default_grid(self) -> GridConfig {
        match self {
            Variant::Static => GridConfig {
                width: 24.0,
                height: 24.0,
                width_segments: 25,
                height_segments: 25,
            },
            Variant::Animated => GridConfig {
                width: 60.0,
                height: 60.0,
                width_segments: 50,
                height_segments: 50,
            },
        }
    }

    pub fn default_camera_distance(self) -> f32 {
        match self {
            Variant::Static => 5.0,
            Variant::Animated => 40.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: u32,
    #[serde(default = "default_window_height")]
    pub height: u32,
    #[serde(default = "default_true")]
    pub vsync: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Distance from the origin along +z. Falls back to a per-variant value.
    #[serde(default)]
    pub distance: Option<f32>,
}

/// `[grid]` as written in the file; missing fields fall back to the
/// variant's default grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub width_segments: Option<u32>,
    #[serde(default)]
    pub height_segments: Option<u32>,
}

impl GridSection {
    pub fn merge(self, defaults: GridConfig) -> GridConfig {
        GridConfig {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            width_segments: self.width_segments.unwrap_or(defaults.width_segments),
            height_segments: self.height_segments.unwrap_or(defaults.height_segments),
        }
    }
}

/// Raw file contents, before CLI overrides and clamping.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub grid: Option<GridSection>,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

fn default_title() -> String {
    "terrain3d".to_string()
}
fn default_window_width() -> u32 {
    1600
}
fn default_window_height() -> u32 {
    900
}
fn default_true() -> bool {
    true
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_window_width(),
            height: default_window_height(),
            vsync: default_true(),
        }
    }
}

impl Config {
    pub fn from_toml(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(path, &content)
    }

    /// Applies CLI overrides and clamps the grid to the variant's limits.
    pub fn resolve(mut self, variant: Option<Variant>, seed: Option<u64>) -> Settings {
        if let Some(variant) = variant {
            self.variant = variant;
        }
        let variant = self.variant;
        let requested = self
            .grid
            .unwrap_or_default()
            .merge(variant.default_grid());
        let grid = variant.limits().clamp(requested);
        if grid != requested {
            tracing::warn!(
                "Grid configuration {:?} is outside the {:?} limits, clamped to {:?}",
                requested,
                variant,
                grid
            );
        }

        Settings {
            variant,
            seed: seed.or(self.seed).unwrap_or_else(rand::random),
            grid,
            window: self.window,
            camera_distance: self
                .camera
                .distance
                .filter(|d| d.is_finite() && *d > 0.0)
                .unwrap_or_else(|| variant.default_camera_distance()),
        }
    }
}

/// Fully resolved settings the application starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub variant: Variant,
    pub seed: u64,
    pub grid: GridConfig,
    pub window: WindowConfig,
    pub camera_distance: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Config, ConfigError> {
        Config::from_toml(Path::new("test.toml"), content)
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());

        let settings = config.resolve(None, Some(7));
        assert_eq!(settings.variant, Variant::Static);
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.grid, Variant::Static.default_grid());
        assert_eq!(settings.window.title, "terrain3d");
        assert!(settings.window.vsync);
        assert!((settings.camera_distance - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_sections() {
        let config = parse(
            r#"
variant = "animated"
seed = 99

[window]
vsync = false
"#,
        )
        .unwrap();

        let settings = config.resolve(None, None);
        assert_eq!(settings.variant, Variant::Animated);
        assert_eq!(settings.seed, 99);
        assert_eq!(settings.grid, Variant::Animated.default_grid());
        assert!(!settings.window.vsync);
        assert_eq!(settings.window.width, 1600);
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = parse("variant = \"animated\"\nseed = 1\n").unwrap();
        let settings = config.resolve(Some(Variant::Static), Some(2));
        assert_eq!(settings.variant, Variant::Static);
        assert_eq!(settings.seed, 2);
    }

    #[test]
    fn test_grid_clamped_to_variant_limits() {
        let config = parse(
            r#"
[grid]
width = 100.0
height = 0.5
width_segments = 0
height_segments = 80
"#,
        )
        .unwrap();

        let settings = config.clone().resolve(Some(Variant::Static), Some(0));
        assert_eq!(
            settings.grid,
            GridConfig {
                width: 30.0,
                height: 1.0,
                width_segments: 1,
                height_segments: 30,
            }
        );

        let settings = config.resolve(Some(Variant::Animated), Some(0));
        assert_eq!(settings.grid.width, 100.0);
        assert_eq!(settings.grid.height_segments, 80);
    }

    #[test]
    fn test_non_finite_extent_is_replaced() {
        let config = parse(
            r#"
[grid]
width = nan
height = inf
width_segments = 10
height_segments = 10
"#,
        )
        .unwrap();

        let settings = config.resolve(Some(Variant::Static), Some(1));
        assert_eq!(settings.grid.width, 1.0);
        assert_eq!(settings.grid.height, 1.0);

        let grid = Variant::Animated.limits().clamp(GridConfig {
            width: f32::NEG_INFINITY,
            ..Variant::Animated.default_grid()
        });
        assert!(grid.width.is_finite() && grid.width > 0.0);
    }

    #[test]
    fn test_partial_grid_section_fills_from_variant_defaults() {
        let config = parse("[grid]\nwidth = 12.0\n").unwrap();

        let settings = config.clone().resolve(Some(Variant::Static), Some(0));
        assert_eq!(
            settings.grid,
            GridConfig {
                width: 12.0,
                ..Variant::Static.default_grid()
            }
        );

        let settings = config.resolve(Some(Variant::Animated), Some(0));
        assert_eq!(settings.grid.width, 12.0);
        assert_eq!(settings.grid.width_segments, 50);
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let err = parse("variant = \"wobbly\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_non_positive_camera_distance_falls_back() {
        let config = parse("[camera]\ndistance = -3.0\n").unwrap();
        let settings = config.resolve(None, Some(0));
        assert!((settings.camera_distance - 5.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
