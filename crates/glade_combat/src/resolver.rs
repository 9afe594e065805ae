//! Attacker x target overlap scan with deferred removal
//!
//! The scan only reads hitboxes; it never touches the collections it was
//! built from. Callers dispatch each contact and mark entities for removal
//! in a [`RemovalSet`], then apply the removals once the pass is over.

use glade_math::Rect;
use std::collections::HashSet;
use std::hash::Hash;

/// One attacking body overlapping one damageable body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact<A, T> {
    pub attacker: A,
    pub target: T,
}

/// Every (attacker, target) pair whose hitboxes overlap, attacker-major order
pub fn scan_contacts<A: Copy, T: Copy>(attackers: &[(A, Rect)], targets: &[(T, Rect)]) -> Vec<Contact<A, T>> {
    let mut contacts = Vec::new();
    for (attacker, attack_box) in attackers {
        for (target, target_box) in targets {
            if attack_box.intersects(target_box) {
                contacts.push(Contact {
                    attacker: *attacker,
                    target: *target,
                });
            }
        }
    }
    contacts
}

/// Entities marked for destruction during a pass, in marking order
#[derive(Debug, Clone)]
pub struct RemovalSet<K: Copy + Eq + Hash> {
    order: Vec<K>,
    seen: HashSet<K>,
}

impl<K: Copy + Eq + Hash> RemovalSet<K> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Mark `key`. Returns false if it was already marked.
    pub fn mark(&mut self, key: K) -> bool {
        if !self.seen.insert(key) {
            return false;
        }
        self.order.push(key);
        true
    }

    pub fn is_marked(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Take the marked keys, leaving the set empty
    pub fn drain(&mut self) -> Vec<K> {
        self.seen.clear();
        std::mem::take(&mut self.order)
    }
}

impl<K: Copy + Eq + Hash> Default for RemovalSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_contacts() {
        let attackers = [(1u32, Rect::new(0.0, 0.0, 10.0, 10.0)), (2u32, Rect::new(100.0, 0.0, 10.0, 10.0))];
        let targets = [
            ('a', Rect::new(5.0, 5.0, 10.0, 10.0)),
            ('b', Rect::new(105.0, 5.0, 10.0, 10.0)),
            ('c', Rect::new(500.0, 500.0, 10.0, 10.0)),
        ];

        let contacts = scan_contacts(&attackers, &targets);
        assert_eq!(
            contacts,
            vec![Contact { attacker: 1, target: 'a' }, Contact { attacker: 2, target: 'b' }]
        );
    }

    #[test]
    fn test_removal_set_marks_once() {
        let mut removals = RemovalSet::new();
        assert!(removals.mark(7u32));
        assert!(removals.mark(3u32));
        assert!(!removals.mark(7u32));
        assert!(removals.is_marked(&3));

        assert_eq!(removals.drain(), vec![7, 3]);
        assert!(removals.is_empty());
        assert!(removals.mark(7u32));
    }
}
