//! Animation system
//!
//! Owns the shape world and its wireframe buffers, and advances both one
//! frame at a time:
//! - Rotation step for every live shape
//! - Buffer rebuild, flagging when the buffer size changed
//! - Periodic geometry logging

use hypercube_core::{Catalog, CatalogError, ShapeWorld, RotationState};
use hypercube_render::RenderableGeometry;

use crate::config::AppConfig;

/// Result of one animation frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationResult {
    /// Frames completed, this one included
    pub frame: u64,
    /// Whether the vertex buffer changed size and must be reallocated
    pub buffers_resized: bool,
}

/// Error setting up the animation from configuration
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("failed to load catalog '{path}': {source}")]
    Catalog {
        path: String,
        #[source]
        source: CatalogError,
    },
    #[error("no shapes to animate")]
    NothingToShow,
}

/// Drives the shape world frame by frame
pub struct AnimationSystem {
    world: ShapeWorld,
    geometry: RenderableGeometry,
    frame: u64,
    log_every: u64,
}

impl AnimationSystem {
    /// Create a system around an existing world
    pub fn new(world: ShapeWorld, log_every: u64) -> Self {
        Self {
            world,
            geometry: RenderableGeometry::new(),
            frame: 0,
            log_every,
        }
    }

    /// Build the world described by `config`.
    ///
    /// Loads the configured catalog (or the builtin one), applies the
    /// projection, instantiates the shown entries and switches on the
    /// configured rotation planes.
    pub fn from_config(config: &AppConfig) -> Result<Self, SetupError> {
        let mut catalog = match &config.catalog.path {
            Some(path) => Catalog::load(path).map_err(|source| SetupError::Catalog {
                path: path.clone(),
                source,
            })?,
            None => Catalog::builtin(),
        };
        catalog.apply_projection(config.projection.to_projection());

        let rotation = RotationState::new(config.rotation.angle).with_active(config.rotation.planes());
        let mut world = ShapeWorld::with_rotation(rotation);

        let shown: Vec<String> = match &config.catalog.show {
            Some(names) => names.clone(),
            None => catalog.visible_names().map(str::to_string).collect(),
        };
        world.instantiate(&catalog, shown.iter().map(String::as_str));
        if world.is_empty() {
            return Err(SetupError::NothingToShow);
        }

        log::info!(
            "Animating {} shapes, active planes: {:?}",
            world.len(),
            world.rotation().active()
        );
        Ok(Self::new(world, config.animation.log_every))
    }

    /// Run one frame
    pub fn update(&mut self) -> AnimationResult {
        self.world.tick();
        let buffers_resized = self.geometry.update_from_world(&self.world);
        self.frame += 1;

        if self.log_every > 0 && self.frame % self.log_every == 0 {
            log::info!(
                "Frame {}: {} vertices, {} segments in {} ranges",
                self.frame,
                self.geometry.vertex_count(),
                self.geometry.segment_count(),
                self.geometry.range_count()
            );
            for (_, live) in self.world.iter() {
                if let Some(first) = live.shape.geometry().points().first() {
                    log::debug!("  {}: first point {:?}", live.label, first);
                }
            }
        }

        AnimationResult {
            frame: self.frame,
            buffers_resized,
        }
    }

    /// Run `frames` frames, returning the number of buffer reallocations
    pub fn run(&mut self, frames: u64) -> usize {
        (0..frames).filter(|_| self.update().buffers_resized).count()
    }

    pub fn world(&self) -> &ShapeWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut ShapeWorld {
        &mut self.world
    }

    pub fn geometry(&self) -> &RenderableGeometry {
        &self.geometry
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypercube_core::RotationPlane;

    fn config_showing(names: &[&str]) -> AppConfig {
        let mut config = AppConfig::default();
        config.catalog.show = Some(names.iter().map(|n| n.to_string()).collect());
        config
    }

    #[test]
    fn test_from_default_config_shows_visible_entries() {
        let system = AnimationSystem::from_config(&AppConfig::default()).unwrap();
        assert_eq!(system.world().len(), 1);
        let (_, live) = system.world().iter().next().unwrap();
        assert_eq!(live.label, "centerCube");
    }

    #[test]
    fn test_configured_planes_are_active() {
        let mut config = config_showing(&["normTesseract"]);
        config.rotation.active_planes = vec!["XW".into(), "yz".into()];
        config.rotation.angle = 0.05;

        let system = AnimationSystem::from_config(&config).unwrap();
        let rotation = system.world().rotation();
        assert!(rotation.is_active(RotationPlane::XW));
        assert!(rotation.is_active(RotationPlane::YZ));
        assert!(!rotation.is_active(RotationPlane::XY));
        assert_eq!(rotation.angle(), 0.05);
    }

    #[test]
    fn test_nothing_to_show() {
        let config = config_showing(&["noSuchEntry"]);
        let result = AnimationSystem::from_config(&config);
        assert!(matches!(result, Err(SetupError::NothingToShow)));
    }

    #[test]
    fn test_missing_catalog_file() {
        let mut config = AppConfig::default();
        config.catalog.path = Some("/nonexistent/catalog.ron".into());
        let result = AnimationSystem::from_config(&config);
        assert!(matches!(result, Err(SetupError::Catalog { .. })));
    }

    #[test]
    fn test_update_counts_frames() {
        let mut system = AnimationSystem::from_config(&config_showing(&["normCube"])).unwrap();
        let first = system.update();
        assert_eq!(first, AnimationResult { frame: 1, buffers_resized: true });

        let second = system.update();
        assert_eq!(second.frame, 2);
        assert!(!second.buffers_resized);
        assert_eq!(system.geometry().vertex_count(), 17);
    }

    #[test]
    fn test_run_reallocates_once() {
        let mut system = AnimationSystem::from_config(&config_showing(&["multiCube"])).unwrap();
        assert_eq!(system.run(30), 1);
        assert_eq!(system.frame(), 30);
        assert_eq!(system.geometry().range_count(), 8);
    }

    #[test]
    fn test_plane_toggle_mid_run() {
        let mut system = AnimationSystem::from_config(&config_showing(&["normSquare"])).unwrap();
        system.run(5);
        let still = system.geometry().vertices.clone();

        system.world_mut().set_plane_active(RotationPlane::XY, true);
        system.run(5);
        assert_ne!(system.geometry().vertices, still);
    }
}
