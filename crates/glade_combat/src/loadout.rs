//! Cooldown-gated equipment slot cycling

use glade_core::{Cooldown, Millis};

/// Index into a fixed, ordered catalog that advances with wrap-around.
///
/// After every advance the slot is locked for a fixed interval, so a held
/// or repeated switch key cannot cycle faster than the lock allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotCycle {
    index: usize,
    len: usize,
    lock: Cooldown,
}

impl SlotCycle {
    /// Create a cycle over `len` entries, starting at 0
    pub fn new(len: usize, lock: Millis) -> Self {
        Self {
            index: 0,
            len,
            lock: Cooldown::new(lock),
        }
    }

    /// Currently selected entry
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of entries cycled over
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a switch would be accepted at `now`
    pub fn can_switch(&self, now: Millis) -> bool {
        self.len > 0 && self.lock.is_ready(now)
    }

    /// Whether the lock is currently engaged
    pub fn is_locked(&self, now: Millis) -> bool {
        self.lock.is_active(now)
    }

    /// Advance to the next entry if unlocked. Returns the new index.
    pub fn try_advance(&mut self, now: Millis) -> Option<usize> {
        if !self.can_switch(now) {
            return None;
        }
        self.index = (self.index + 1) % self.len;
        self.lock.start(now);
        Some(self.index)
    }

    /// Step backwards if unlocked. Returns the new index.
    pub fn try_retreat(&mut self, now: Millis) -> Option<usize> {
        if !self.can_switch(now) {
            return None;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.lock.start(now);
        Some(self.index)
    }

    /// Engage the lock without moving (e.g. after a confirm press)
    pub fn lock(&mut self, now: Millis) {
        self.lock.start(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_around() {
        let mut cycle = SlotCycle::new(3, 0);
        assert_eq!(cycle.try_advance(0), Some(1));
        assert_eq!(cycle.try_advance(0), Some(2));
        assert_eq!(cycle.try_advance(0), Some(0));
        assert_eq!(cycle.try_retreat(0), Some(2));
    }

    #[test]
    fn test_lock_limits_rate() {
        let mut cycle = SlotCycle::new(5, 350);
        assert_eq!(cycle.try_advance(1_000), Some(1));
        assert_eq!(cycle.try_advance(1_100), None);
        assert_eq!(cycle.try_advance(1_349), None);
        assert!(cycle.is_locked(1_349));
        assert_eq!(cycle.try_advance(1_350), Some(2));
    }

    #[test]
    fn test_empty_never_switches() {
        let mut cycle = SlotCycle::new(0, 0);
        assert_eq!(cycle.try_advance(10), None);
        assert_eq!(cycle.try_retreat(10), None);
    }
}
