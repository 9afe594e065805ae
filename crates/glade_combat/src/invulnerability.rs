//! Invulnerability windows after taking a hit

use glade_core::{Cooldown, Millis};

/// Timed immunity that opens every time damage is accepted.
///
/// The entity is vulnerable unless a window started at `hit_time` is still
/// running, i.e. until `now - hit_time >= duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invulnerability {
    window: Cooldown,
}

impl Invulnerability {
    /// Create with the window length in milliseconds
    pub fn new(duration: Millis) -> Self {
        Self {
            window: Cooldown::new(duration),
        }
    }

    /// Whether damage is accepted at `now`
    #[inline]
    pub fn is_vulnerable(&self, now: Millis) -> bool {
        self.window.is_ready(now)
    }

    /// Open the window at `now`
    pub fn trigger(&mut self, now: Millis) {
        self.window.start(now);
    }

    /// Accept a hit if vulnerable, opening the window.
    ///
    /// Returns false (and changes nothing) while a window is running.
    pub fn try_accept(&mut self, now: Millis) -> bool {
        if !self.is_vulnerable(now) {
            return false;
        }
        self.trigger(now);
        true
    }

    /// Close a window that has elapsed; true on the tick it closes
    pub fn refresh(&mut self, now: Millis) -> bool {
        self.window.expire(now)
    }

    /// Timestamp of the last accepted hit
    pub fn hit_time(&self) -> Option<Millis> {
        self.window.started_at()
    }

    /// Window length
    pub fn duration(&self) -> Millis {
        self.window.duration()
    }

    /// Sprite opacity for the damage flicker: fully visible while vulnerable,
    /// otherwise alternating on the sign of `sin(now)`
    pub fn flicker_alpha(&self, now: Millis) -> u8 {
        if self.is_vulnerable(now) || (now as f64).sin() >= 0.0 {
            255
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_once_per_window() {
        let mut inv = Invulnerability::new(300);
        assert!(inv.try_accept(1_000));
        assert!(!inv.try_accept(1_100));
        assert!(!inv.try_accept(1_299));
        assert!(inv.try_accept(1_300));
        assert_eq!(inv.hit_time(), Some(1_300));
    }

    #[test]
    fn test_refresh() {
        let mut inv = Invulnerability::new(500);
        inv.trigger(0);
        assert!(!inv.refresh(499));
        assert!(inv.refresh(500));
        assert!(inv.is_vulnerable(500));
        assert_eq!(inv.hit_time(), None);
    }

    #[test]
    fn test_flicker_only_while_invulnerable() {
        let mut inv = Invulnerability::new(500);
        assert_eq!(inv.flicker_alpha(123), 255);

        inv.trigger(0);
        let alphas: Vec<u8> = (1..20).map(|t| inv.flicker_alpha(t)).collect();
        assert!(alphas.contains(&0));
        assert!(alphas.contains(&255));
    }
}
