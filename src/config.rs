//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HC4_SECTION__KEY`)

use std::path::Path;
use std::str::FromStr;

use figment::{Figment, providers::{Format, Toml, Env}};
use hypercube_core::{PlaneSet, Projection, RotationPlane, DEFAULT_ROTATION_ANGLE};
use serde::{Serialize, Deserialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub projection: ProjectionConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from the `config` directory and `HC4_*` variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional, gitignored
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HC4_ROTATION__ANGLE=0.02 -> rotation.angle = 0.02
        figment = figment.merge(Env::prefixed("HC4_").split("__"));

        Ok(figment.extract()?)
    }
}

/// Rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Rotation per tick in radians
    pub angle: f32,
    /// Plane names active at start-up ("XY", "ZW", ...)
    pub active_planes: Vec<String>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            angle: DEFAULT_ROTATION_ANGLE,
            active_planes: Vec::new(),
        }
    }
}

impl RotationConfig {
    /// Parse the active plane names; unknown names are logged and ignored
    pub fn planes(&self) -> PlaneSet {
        self.active_planes
            .iter()
            .filter_map(|name| match RotationPlane::from_str(name) {
                Ok(plane) => Some(plane),
                Err(e) => {
                    log::warn!("Ignoring rotation plane: {}", e);
                    None
                }
            })
            .collect()
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Distance of the projection pole from the origin
    pub distance: f32,
    /// Factor used when a point sits on the pole's hyperplane
    pub fallback_factor: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        let projection = Projection::default();
        Self {
            distance: projection.distance,
            fallback_factor: projection.fallback_factor,
        }
    }
}

impl ProjectionConfig {
    pub fn to_projection(&self) -> Projection {
        Projection::new(self.distance, self.fallback_factor)
    }
}

/// Animation driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Ticks the headless driver runs
    pub frames: u64,
    /// Log geometry every N frames (0 = never)
    pub log_every: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            log_every: 60,
        }
    }
}

/// Shape catalog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// RON catalog file; the builtin catalog is used when unset
    pub path: Option<String>,
    /// Entries to draw; entries flagged visible when unset
    pub show: Option<Vec<String>>,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[from] figment::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.rotation.angle, 0.01);
        assert!(config.rotation.active_planes.is_empty());
        assert_eq!(config.projection.distance, std::f32::consts::PI);
        assert_eq!(config.projection.fallback_factor, 1.0);
        assert_eq!(config.animation.frames, 600);
        assert_eq!(config.animation.log_every, 60);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[rotation]"));
        assert!(toml.contains("active_planes"));
        assert!(toml.contains("log_every"));
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: AppConfig = toml::from_str("[animation]\nframes = 5\n").unwrap();
        assert_eq!(config.animation.frames, 5);
        assert_eq!(config.animation.log_every, 60);
        assert_eq!(config.rotation.angle, 0.01);
    }

    #[test]
    fn test_planes_skips_unknown() {
        let rotation = RotationConfig {
            angle: 0.01,
            active_planes: vec!["xw".into(), "QQ".into(), "ZY".into()],
        };
        let planes = rotation.planes();
        assert_eq!(planes, PlaneSet::XW | PlaneSet::YZ);
    }

    #[test]
    fn test_to_projection() {
        let config = ProjectionConfig { distance: 2.0, fallback_factor: 0.5 };
        assert_eq!(config.to_projection(), Projection::new(2.0, 0.5));
    }
}
