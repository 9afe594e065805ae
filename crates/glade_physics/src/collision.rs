//! Axis-separated collision against static obstacles

use crate::body::SpatialBody;
use glade_math::{Rect, Vec2};

/// Movement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component of `v` along this axis
    #[inline]
    pub fn component(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }
}

/// Outcome of one movement step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveResult {
    /// Net hitbox displacement after resolution
    pub displacement: Vec2,
    /// Number of corrections applied on X
    pub blocked_x: usize,
    /// Number of corrections applied on Y
    pub blocked_y: usize,
}

impl MoveResult {
    /// Whether any obstacle stopped the body
    pub fn was_blocked(&self) -> bool {
        self.blocked_x > 0 || self.blocked_y > 0
    }
}

/// Resolves movement against a borrowed set of static obstacle hitboxes.
///
/// Built fresh each tick from the world's obstacle list; it holds no state
/// of its own.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver<'a> {
    obstacles: &'a [Rect],
}

impl<'a> CollisionResolver<'a> {
    pub fn new(obstacles: &'a [Rect]) -> Self {
        Self { obstacles }
    }

    pub fn obstacles(&self) -> &'a [Rect] {
        self.obstacles
    }

    /// Push `body` out of every obstacle it overlaps along `axis`.
    ///
    /// `direction` gives the sign of travel: positive snaps the body's
    /// leading edge to the obstacle's near edge, negative snaps its trailing
    /// edge to the obstacle's far edge, zero applies no correction.
    /// Returns the number of corrections made.
    pub fn resolve(&self, body: &mut SpatialBody, axis: Axis, direction: Vec2) -> usize {
        let sign = axis.component(direction);
        if sign == 0.0 {
            return 0;
        }

        let mut corrections = 0;
        for obstacle in self.obstacles {
            let hitbox = body.hitbox_mut();
            if !obstacle.intersects(hitbox) {
                continue;
            }
            match (axis, sign > 0.0) {
                (Axis::Horizontal, true) => hitbox.set_right(obstacle.left()),
                (Axis::Horizontal, false) => hitbox.set_left(obstacle.right()),
                (Axis::Vertical, true) => hitbox.set_bottom(obstacle.top()),
                (Axis::Vertical, false) => hitbox.set_top(obstacle.bottom()),
            }
            corrections += 1;
        }
        corrections
    }

    /// Move `body` one step along `direction` at `speed`.
    ///
    /// The direction is normalized first so diagonal steps cover the same
    /// distance as axial ones. X is applied and resolved before Y.
    pub fn move_body(&self, body: &mut SpatialBody, direction: Vec2, speed: f32) -> MoveResult {
        let direction = direction.normalize_or_zero();
        let start = body.center();

        body.hitbox_mut().x += direction.x * speed;
        let blocked_x = self.resolve(body, Axis::Horizontal, direction);
        body.hitbox_mut().y += direction.y * speed;
        let blocked_y = self.resolve(body, Axis::Vertical, direction);
        body.sync_bounds();

        if blocked_x + blocked_y > 0 {
            log::trace!("body at {:?} blocked (x: {}, y: {})", body.center(), blocked_x, blocked_y);
        }

        MoveResult {
            displacement: body.center() - start,
            blocked_x,
            blocked_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn body_at(x: f32, y: f32) -> SpatialBody {
        SpatialBody::new(Rect::new(x, y, 64.0, 64.0), Vec2::new(0.0, -26.0)).unwrap()
    }

    #[test]
    fn test_free_movement_is_normalized() {
        let resolver = CollisionResolver::new(&[]);
        for direction in [Vec2::new(1.0, 1.0), Vec2::new(-3.0, 0.5), Vec2::new(0.0, -9.0)] {
            let mut body = body_at(0.0, 0.0);
            let result = resolver.move_body(&mut body, direction, 5.0);
            assert_relative_eq!(result.displacement.length(), 5.0, epsilon = 1e-4);
            assert!(!result.was_blocked());
        }
    }

    #[test]
    fn test_zero_direction_does_not_move() {
        let resolver = CollisionResolver::new(&[]);
        let mut body = body_at(10.0, 10.0);
        let result = resolver.move_body(&mut body, Vec2::ZERO, 5.0);
        assert_eq!(result.displacement, Vec2::ZERO);
    }

    #[test]
    fn test_blocked_moving_right() {
        let wall = [Rect::new(66.0, 0.0, 64.0, 64.0)];
        let resolver = CollisionResolver::new(&wall);
        let mut body = body_at(0.0, 0.0);

        let result = resolver.move_body(&mut body, Vec2::X, 5.0);
        assert_eq!(result.blocked_x, 1);
        assert_eq!(body.hitbox().right(), 66.0);
        assert!(!body.overlaps(&wall[0]));
    }

    #[test]
    fn test_blocked_moving_left_and_up() {
        let walls = [Rect::new(-64.0, 0.0, 62.0, 64.0), Rect::new(0.0, -64.0, 64.0, 75.0)];
        let resolver = CollisionResolver::new(&walls);
        let mut body = body_at(0.0, 0.0);

        resolver.move_body(&mut body, Vec2::NEG_X, 5.0);
        assert_eq!(body.hitbox().left(), -2.0);

        resolver.move_body(&mut body, Vec2::NEG_Y, 5.0);
        assert_eq!(body.hitbox().top(), 11.0);
        for wall in &walls {
            assert!(!body.overlaps(wall));
        }
    }

    #[test]
    fn test_diagonal_slides_along_wall() {
        let floor = [Rect::new(-500.0, 52.0, 1000.0, 64.0)];
        let resolver = CollisionResolver::new(&floor);
        let mut body = body_at(0.0, 0.0);

        resolver.move_body(&mut body, Vec2::new(1.0, 1.0), 10.0);
        assert_eq!(body.hitbox().bottom(), 52.0);
        assert!(body.center().x > 32.0);
    }

    #[test]
    fn test_resolve_is_idempotent_without_overlap() {
        let walls = [Rect::new(200.0, 200.0, 64.0, 64.0)];
        let resolver = CollisionResolver::new(&walls);
        let mut body = body_at(0.0, 0.0);
        let before = body;
        assert_eq!(resolver.resolve(&mut body, Axis::Horizontal, Vec2::X), 0);
        assert_eq!(body, before);
    }

    #[test]
    fn test_thin_obstacle_tunnels() {
        // Not swept: a step longer than the obstacle is thick passes through
        let sliver = [Rect::new(70.0, 0.0, 2.0, 64.0)];
        let resolver = CollisionResolver::new(&sliver);
        let mut body = body_at(0.0, 0.0);
        resolver.move_body(&mut body, Vec2::X, 80.0);
        assert!(body.hitbox().left() > 72.0);
    }
}
