//! Live shapes and the rotation state they share

use hypercube_math::RotationPlane;
use slotmap::{new_key_type, SlotMap};

use crate::{Catalog, RotationState, Shape};

new_key_type! {
    /// Key to a live shape in a [`ShapeWorld`]
    ///
    /// Keys of removed shapes stay invalid even if the slot is reused.
    pub struct ShapeKey;
}

/// A shape together with the catalog entry it came from
#[derive(Clone, Debug)]
pub struct LiveShape {
    /// Catalog entry name, or a caller-chosen label
    pub label: String,
    pub shape: Shape,
}

/// Every live shape plus the one rotation state they all follow
#[derive(Debug, Default)]
pub struct ShapeWorld {
    shapes: SlotMap<ShapeKey, LiveShape>,
    rotation: RotationState,
}

impl ShapeWorld {
    /// Create an empty world with the default rotation angle
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rotation(rotation: RotationState) -> Self {
        Self {
            shapes: SlotMap::with_key(),
            rotation,
        }
    }

    /// Add a shape, returning its key
    pub fn add(&mut self, label: impl Into<String>, shape: Shape) -> ShapeKey {
        self.shapes.insert(LiveShape { label: label.into(), shape })
    }

    /// Remove a shape and return it
    pub fn remove(&mut self, key: ShapeKey) -> Option<LiveShape> {
        self.shapes.remove(key)
    }

    /// Remove every shape carrying `label`, returning how many went
    pub fn remove_label(&mut self, label: &str) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|_, live| live.label != label);
        before - self.shapes.len()
    }

    pub fn get(&self, key: ShapeKey) -> Option<&LiveShape> {
        self.shapes.get(key)
    }

    pub fn get_mut(&mut self, key: ShapeKey) -> Option<&mut LiveShape> {
        self.shapes.get_mut(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ShapeKey, &LiveShape)> {
        self.shapes.iter()
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Switch a rotation plane on or off for every shape.
    ///
    /// Every live shape picks up the new transform at once and is back in its
    /// base pose before the next tick.
    pub fn set_plane_active(&mut self, plane: RotationPlane, active: bool) {
        self.rotation.set_active(plane, active);
        self.sync_shapes();
        log::info!(
            "Rotation {}: {}",
            plane,
            if active { "on" } else { "off" }
        );
    }

    /// Flip a rotation plane, returning its new state
    pub fn toggle_plane(&mut self, plane: RotationPlane) -> bool {
        let active = !self.rotation.is_active(plane);
        self.set_plane_active(plane, active);
        active
    }

    /// Change the per-tick angle; shapes restart from their base pose
    pub fn set_angle(&mut self, angle: f32) {
        self.rotation.set_angle(angle);
        self.sync_shapes();
    }

    fn sync_shapes(&mut self) {
        let rotation = &self.rotation;
        for live in self.shapes.values_mut() {
            live.shape.sync(rotation);
        }
    }

    /// Advance every shape by one rotation step
    pub fn tick(&mut self) {
        let rotation = &self.rotation;
        for live in self.shapes.values_mut() {
            live.shape.tick(rotation);
        }
    }

    /// Build the named catalog entries and add their shapes.
    ///
    /// Unknown names and entries that fail to build are logged and skipped.
    pub fn instantiate<'a>(
        &mut self,
        catalog: &Catalog,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Vec<ShapeKey> {
        let mut keys = Vec::new();
        for name in names {
            let Some(entry) = catalog.get(name) else {
                log::warn!("No catalog entry named '{}'", name);
                continue;
            };
            match entry.build() {
                Ok(shapes) => {
                    log::info!("Showing '{}' ({} shapes)", name, shapes.len());
                    keys.extend(shapes.into_iter().map(|shape| self.add(name, shape)));
                }
                Err(e) => log::warn!("Skipping '{}': {}", name, e),
            }
        }
        keys
    }
}
