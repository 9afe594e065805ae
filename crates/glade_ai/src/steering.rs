//! Steering helpers

use glade_math::Vec2;

/// Unit direction from `from` toward `to` (zero when they coincide)
pub fn seek(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Knockback heading for an agent whose current heading is `direction`.
///
/// The heading is reversed and scaled by `resistance`. Movement normalizes
/// it again, so only the reversal survives into the step length.
pub fn knockback(direction: Vec2, resistance: f32) -> Vec2 {
    direction * -resistance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek() {
        assert_eq!(seek(Vec2::ZERO, Vec2::new(10.0, 0.0)), Vec2::X);
        assert_eq!(seek(Vec2::ZERO, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_knockback_reverses() {
        let away = knockback(Vec2::new(0.0, 1.0), 3.0);
        assert_eq!(away, Vec2::new(0.0, -3.0));
    }
}
