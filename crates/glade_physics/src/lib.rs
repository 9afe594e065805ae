//! Glade Physics - rectangle bodies and static collision
//!
//! Every moving entity owns a [`SpatialBody`]: its visual sprite bounds plus a
//! narrower hitbox used for all collision and combat queries. Movement is
//! resolved against static obstacles one axis at a time:
//!
//! ```text
//!   move X ──► resolve X overlaps ──► move Y ──► resolve Y overlaps ──► recenter sprite
//! ```
//!
//! Resolution is positional, not swept. A body moving farther than an
//! obstacle's thickness in a single step can pass through it.
//!
//! # Example
//!
//! ```ignore
//! use glade_physics::prelude::*;
//!
//! let mut body = SpatialBody::new(Rect::new(0.0, 0.0, 64.0, 64.0), Vec2::new(0.0, -26.0))?;
//! let walls = [Rect::new(70.0, 0.0, 64.0, 64.0)];
//! CollisionResolver::new(&walls).move_body(&mut body, Vec2::X, 10.0);
//! ```

pub mod body;
pub mod collision;
pub mod error;

pub mod prelude {
    //! Common imports for physics functionality
    pub use crate::body::SpatialBody;
    pub use crate::collision::{Axis, CollisionResolver, MoveResult};
    pub use crate::error::{PhysicsError, Result};
    pub use glade_math::{Rect, Vec2};
}

pub use prelude::*;
