//! # glade_core - Glade Core
//!
//! Zero-dependency primitives shared by every simulation crate:
//! - **Handles**: generational indices into the world's entity collections,
//!   so a handle to a destroyed entity can never alias a newer one
//! - **Time**: millisecond timestamps sampled once per tick and the
//!   `Cooldown` gate every timed rule in the game is built from

pub mod handle;
pub mod time;

pub use handle::*;
pub use time::*;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::handle::{Handle, HandleMap};
    pub use crate::time::{Cooldown, Millis, TickClock};
}
