//! Error types for the physics system

use glade_math::{Rect, Vec2};
use thiserror::Error;

/// Physics system errors
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// The sprite bounds themselves have no area
    #[error("Sprite bounds have no area: {0:?}")]
    EmptyBounds(Rect),

    /// The hitbox inset collapses the hitbox
    #[error("Hitbox inset {inset:?} collapses bounds {bounds:?}")]
    DegenerateHitbox { bounds: Rect, inset: Vec2 },
}

/// Result type for physics operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
