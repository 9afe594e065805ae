//! Per-tick input snapshot

use glade_math::Vec2;
use serde::{Deserialize, Serialize};

/// Logical keys held down during one tick.
///
/// The front end polls its devices and fills one of these per tick; the
/// simulation never looks at raw key codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Melee swing
    pub attack: bool,
    /// Cast the selected spell
    pub cast: bool,
    pub next_weapon: bool,
    pub next_spell: bool,
    /// Open or close the upgrade menu (acts on the press edge)
    pub menu: bool,
    /// Upgrade the highlighted stat while the menu is open
    pub confirm: bool,
}

impl InputSnapshot {
    /// Nothing held
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn with_up(mut self) -> Self {
        self.up = true;
        self
    }

    pub fn with_down(mut self) -> Self {
        self.down = true;
        self
    }

    pub fn with_left(mut self) -> Self {
        self.left = true;
        self
    }

    pub fn with_right(mut self) -> Self {
        self.right = true;
        self
    }

    pub fn with_attack(mut self) -> Self {
        self.attack = true;
        self
    }

    pub fn with_cast(mut self) -> Self {
        self.cast = true;
        self
    }

    pub fn with_next_weapon(mut self) -> Self {
        self.next_weapon = true;
        self
    }

    pub fn with_next_spell(mut self) -> Self {
        self.next_spell = true;
        self
    }

    pub fn with_menu(mut self) -> Self {
        self.menu = true;
        self
    }

    pub fn with_confirm(mut self) -> Self {
        self.confirm = true;
        self
    }

    /// Raw (unnormalized) movement direction.
    ///
    /// Left wins over right and up wins over down when both are held.
    pub fn direction(&self) -> Vec2 {
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}
