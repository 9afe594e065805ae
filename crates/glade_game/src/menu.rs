//! Upgrade menu shown while the game is paused

use crate::input::InputSnapshot;
use crate::player::Player;
use glade_combat::{SlotCycle, Stat};
use glade_core::Millis;

/// One row of the menu, as the HUD draws it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuEntry {
    pub stat: Stat,
    pub value: f32,
    pub cost: f32,
    pub cap: f32,
    pub selected: bool,
    /// Enough experience and not yet capped
    pub available: bool,
}

/// Stat selection cursor plus the confirm action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeMenu {
    cursor: SlotCycle,
}

impl UpgradeMenu {
    /// Create a menu whose navigation and confirm share one lock
    pub fn new(lock: Millis) -> Self {
        Self {
            cursor: SlotCycle::new(Stat::ALL.len(), lock),
        }
    }

    /// Highlighted stat
    pub fn selected(&self) -> Stat {
        Stat::ALL[self.cursor.index() % Stat::ALL.len()]
    }

    /// Apply one tick of menu input.
    ///
    /// Returns the stat upgraded this tick, if any.
    pub fn handle(&mut self, now: Millis, input: &InputSnapshot, player: &mut Player) -> Option<Stat> {
        if input.right {
            self.cursor.try_advance(now);
        } else if input.left {
            self.cursor.try_retreat(now);
        } else if input.confirm && self.cursor.can_switch(now) {
            self.cursor.lock(now);
            let stat = self.selected();
            if player.try_upgrade(stat) {
                return Some(stat);
            }
            log::debug!("cannot upgrade {} ({} exp)", stat, player.experience());
        }
        None
    }

    /// Rows for every stat in display order
    pub fn entries(&self, player: &Player) -> Vec<MenuEntry> {
        let ledger = player.ledger();
        Stat::ALL
            .iter()
            .map(|&stat| MenuEntry {
                stat,
                value: ledger.value(stat),
                cost: ledger.cost(stat),
                cap: ledger.cap(stat),
                selected: stat == self.selected(),
                available: ledger.can_upgrade(stat, player.experience()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::GameConfig;
    use glade_math::Vec2;
    use std::sync::Arc;

    fn player() -> Player {
        let config = GameConfig::default().with_starting_experience(300.0);
        Player::new(Vec2::ZERO, &config, Arc::new(Catalog::standard())).unwrap()
    }

    #[test]
    fn test_navigation_wraps_and_is_locked() {
        let mut menu = UpgradeMenu::new(400);
        let mut player = player();
        assert_eq!(menu.selected(), Stat::Health);

        menu.handle(0, &InputSnapshot::idle().with_left(), &mut player);
        assert_eq!(menu.selected(), Stat::Speed);

        menu.handle(100, &InputSnapshot::idle().with_right(), &mut player);
        assert_eq!(menu.selected(), Stat::Speed);

        menu.handle(400, &InputSnapshot::idle().with_right(), &mut player);
        assert_eq!(menu.selected(), Stat::Health);
    }

    #[test]
    fn test_confirm_upgrades_selected_stat() {
        let mut menu = UpgradeMenu::new(400);
        let mut player = player();
        let confirm = InputSnapshot::idle().with_confirm();

        menu.handle(0, &InputSnapshot::idle().with_right(), &mut player);
        assert_eq!(menu.handle(400, &confirm, &mut player), Some(Stat::Energy));
        assert_eq!(player.experience(), 200.0);

        // Held confirm waits for the lock
        assert_eq!(menu.handle(500, &confirm, &mut player), None);
        assert_eq!(menu.handle(800, &confirm, &mut player), Some(Stat::Energy));
        assert_eq!(player.experience(), 55.0);
        assert_eq!(menu.handle(1_200, &confirm, &mut player), None);
    }

    #[test]
    fn test_entries() {
        let menu = UpgradeMenu::new(400);
        let player = player();
        let entries = menu.entries(&player);
        assert_eq!(entries.len(), 5);
        assert!(entries[0].selected);
        assert_eq!(entries[2].stat, Stat::Attack);
        assert_eq!(entries[2].value, 10.0);
        assert!(entries.iter().all(|e| e.available));
    }
}
