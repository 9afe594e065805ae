//! # glade_math - 2D math for a top-down world
//!
//! Screen-space convention: +X is right, +Y is down.

pub mod rect;
pub mod vector;

pub use rect::*;
pub use vector::*;

pub mod prelude {
    pub use crate::rect::Rect;
    pub use crate::vector::Vec2;
}
