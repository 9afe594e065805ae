//! Spatial bodies: sprite bounds plus collision hitbox

use crate::error::{PhysicsError, Result};
use glade_math::{Rect, Vec2};

/// Geometry owned by every entity in the world.
///
/// The hitbox is derived from the sprite bounds once, on creation, by a
/// fixed inset. After that it is only ever repositioned; the sprite bounds
/// follow the hitbox's center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialBody {
    bounds: Rect,
    hitbox: Rect,
}

impl SpatialBody {
    /// Create a body from sprite bounds, shrinking them by `inset` (total
    /// change in width and height, negative values shrink)
    pub fn new(bounds: Rect, inset: Vec2) -> Result<Self> {
        if !bounds.is_valid() {
            return Err(PhysicsError::EmptyBounds(bounds));
        }
        let hitbox = bounds.inflate(inset.x, inset.y);
        if !hitbox.is_valid() {
            return Err(PhysicsError::DegenerateHitbox { bounds, inset });
        }
        Ok(Self { bounds, hitbox })
    }

    /// Create a body whose hitbox is its whole sprite (weapon swings,
    /// spell effects, projectiles)
    pub fn from_hitbox(hitbox: Rect) -> Self {
        Self {
            bounds: hitbox,
            hitbox,
        }
    }

    /// Collision rectangle
    #[inline]
    pub fn hitbox(&self) -> &Rect {
        &self.hitbox
    }

    /// Visual sprite rectangle
    #[inline]
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Position of the entity (hitbox center)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.hitbox.center()
    }

    /// Teleport the entity so its hitbox is centered on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.hitbox.set_center(center);
        self.sync_bounds();
    }

    /// Check hitbox overlap with another rectangle
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.hitbox.intersects(other)
    }

    /// Re-center the sprite bounds on the hitbox
    pub(crate) fn sync_bounds(&mut self) {
        self.bounds.set_center(self.hitbox.center());
    }

    pub(crate) fn hitbox_mut(&mut self) -> &mut Rect {
        &mut self.hitbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_inset() {
        let body = SpatialBody::new(Rect::new(0.0, 0.0, 64.0, 64.0), Vec2::new(0.0, -26.0)).unwrap();
        assert_eq!(body.hitbox().height, 38.0);
        assert_eq!(body.hitbox().width, 64.0);
        assert_eq!(body.center(), Vec2::new(32.0, 32.0));
    }

    #[test]
    fn test_degenerate_hitbox() {
        let result = SpatialBody::new(Rect::new(0.0, 0.0, 64.0, 64.0), Vec2::new(0.0, -64.0));
        assert!(matches!(result, Err(PhysicsError::DegenerateHitbox { .. })));

        let result = SpatialBody::new(Rect::new(0.0, 0.0, 0.0, 64.0), Vec2::ZERO);
        assert!(matches!(result, Err(PhysicsError::EmptyBounds(_))));
    }

    #[test]
    fn test_set_center_moves_bounds() {
        let mut body = SpatialBody::new(Rect::new(0.0, 0.0, 64.0, 128.0), Vec2::new(0.0, -40.0)).unwrap();
        body.set_center(Vec2::new(100.0, 100.0));
        assert_eq!(body.bounds().center(), Vec2::new(100.0, 100.0));
        assert_eq!(body.hitbox().size(), Vec2::new(64.0, 88.0));
    }
}
