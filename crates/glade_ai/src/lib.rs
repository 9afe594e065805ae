//! Glade AI - enemy decision making
//!
//! This crate provides the pieces an enemy's brain is assembled from.
//!
//! # Features
//!
//! - Prioritized finite state machine re-evaluated every tick
//! - Perception of a target (distance and unit direction)
//! - Steering helpers (seek, knockback)
//!
//! # Example
//!
//! ```ignore
//! use glade_ai::prelude::*;
//!
//! let mut fsm = StateMachine::new(Mood::Calm, Mood::Calm);
//! fsm.add_rule_priority(Mood::Angry, |ctx: &Ctx| ctx.poked, 10);
//! if let Some(entered) = fsm.evaluate(&ctx) {
//!     // on-enter side effects
//! }
//! ```

pub mod perception;
pub mod state_machine;
pub mod steering;

pub mod prelude {
    pub use crate::perception::{Perception, SenseRadii};
    pub use crate::state_machine::{State, StateMachine, Transition};
    pub use crate::steering::{knockback, seek};
}

pub use prelude::*;
