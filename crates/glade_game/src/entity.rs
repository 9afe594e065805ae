//! Movement and animation shared by the player and enemies

use glade_math::{Rect, Vec2};
use glade_physics::{CollisionResolver, MoveResult, SpatialBody};

/// Frame count used when the render layer has not said otherwise
pub const DEFAULT_FRAME_COUNT: usize = 4;

/// A body that walks around the map and plays looping animations
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEntity {
    body: SpatialBody,
    /// Desired movement this tick (any length, normalized when moving)
    pub direction: Vec2,
    frame: f32,
    animation_speed: f32,
    frame_count: usize,
}

impl ActionEntity {
    pub fn new(body: SpatialBody, animation_speed: f32) -> Self {
        Self {
            body,
            direction: Vec2::ZERO,
            frame: 0.0,
            animation_speed,
            frame_count: DEFAULT_FRAME_COUNT,
        }
    }

    #[inline]
    pub fn body(&self) -> &SpatialBody {
        &self.body
    }

    #[inline]
    pub fn hitbox(&self) -> &Rect {
        self.body.hitbox()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// Take one step through the obstacles
    pub fn move_step(&mut self, resolver: &CollisionResolver<'_>, speed: f32) -> MoveResult {
        resolver.move_body(&mut self.body, self.direction, speed)
    }

    /// Advance the frame timer, wrapping at the current frame count
    pub fn animate(&mut self) {
        self.frame += self.animation_speed;
        if self.frame >= self.frame_count as f32 {
            self.frame = 0.0;
        }
    }

    /// Index of the frame to draw
    pub fn frame_index(&self) -> usize {
        self.frame as usize
    }

    pub fn frame(&self) -> f32 {
        self.frame
    }

    pub fn reset_frame(&mut self) {
        self.frame = 0.0;
    }

    /// Switch to an animation with `count` frames (at least one)
    pub fn set_frame_count(&mut self, count: usize) {
        self.frame_count = count.max(1);
        if self.frame >= self.frame_count as f32 {
            self.frame = 0.0;
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entity() -> ActionEntity {
        let body = SpatialBody::new(Rect::new(0.0, 0.0, 64.0, 64.0), Vec2::new(0.0, -10.0)).unwrap();
        ActionEntity::new(body, 0.5)
    }

    #[test]
    fn test_animation_wraps() {
        let mut entity = entity();
        entity.set_frame_count(2);
        let frames: Vec<usize> = (0..5)
            .map(|_| {
                entity.animate();
                entity.frame_index()
            })
            .collect();
        assert_eq!(frames, vec![0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_shrinking_frame_count_restarts() {
        let mut entity = entity();
        for _ in 0..6 {
            entity.animate();
        }
        assert_eq!(entity.frame_index(), 3);
        entity.set_frame_count(2);
        assert_eq!(entity.frame_index(), 0);
    }

    #[test]
    fn test_move_step_uses_direction() {
        let mut entity = entity();
        entity.direction = Vec2::new(3.0, 4.0);
        let resolver = CollisionResolver::new(&[]);
        let result = entity.move_step(&resolver, 5.0);
        assert_relative_eq!(result.displacement.x, 3.0, epsilon = 1e-4);
        assert_relative_eq!(result.displacement.y, 4.0, epsilon = 1e-4);
    }
}
