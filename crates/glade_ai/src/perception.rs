//! Perception of a single target

use glade_math::Vec2;
use serde::{Deserialize, Serialize};

/// What an agent knows about its target this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perception {
    /// Distance between the two centers
    pub distance: f32,
    /// Unit vector from the agent toward the target (zero when they coincide)
    pub direction: Vec2,
}

impl Perception {
    /// Perceive `target` from `agent`
    pub fn between(agent: Vec2, target: Vec2) -> Self {
        let offset = target - agent;
        let distance = offset.length();
        let direction = if distance > 0.0 { offset / distance } else { Vec2::ZERO };
        Self { distance, direction }
    }
}

/// Attack and notice ranges of an agent.
///
/// Both bounds are inclusive: a target exactly on the radius is inside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SenseRadii {
    pub attack: f32,
    pub notice: f32,
}

impl SenseRadii {
    pub fn new(attack: f32, notice: f32) -> Self {
        Self { attack, notice }
    }

    /// Radii are usable when non-negative and the attack range sits inside
    /// the notice range
    pub fn is_valid(&self) -> bool {
        self.attack >= 0.0 && self.notice >= 0.0 && self.attack <= self.notice
    }

    #[inline]
    pub fn in_attack_range(&self, perception: &Perception) -> bool {
        perception.distance <= self.attack
    }

    #[inline]
    pub fn in_notice_range(&self, perception: &Perception) -> bool {
        perception.distance <= self.notice
    }
}
