//! Determinism utilities: stable ordering & insertion-ordered tallies.
//!
//! This module is **I/O-free**. It provides:
//! - A descending total order for `f64` keys (NaN ranks after every number)
//! - A stable, in-place descending sort helper
//! - `OrderedTally`, a counter that remembers first-insertion order

use core::cmp::Ordering;
use core::hash::Hash;
use std::collections::HashMap;

/* -------------------------------------------------------------------------- */
/*                               Stable Ordering                              */
/* -------------------------------------------------------------------------- */

/// Descending order on `f64`. NaN ranks after every number and equal to other
/// NaNs, which keeps the order total. `-0.0` and `0.0` compare equal.
#[inline]
pub fn cmp_f64_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// Sort **in place**, descending by `key`, preserving input order among equal keys.
#[inline]
pub fn sort_desc_stable_by<T, F>(xs: &mut [T], key: F)
where
    F: Fn(&T) -> f64,
{
    xs.sort_by(|a, b| cmp_f64_desc(key(a), key(b)));
}

/* -------------------------------------------------------------------------- */
/*                               Ordered tally                                */
/* -------------------------------------------------------------------------- */

/// Counter keyed by `K` that iterates in first-insertion order.
#[derive(Clone, Debug)]
pub struct OrderedTally<K> {
    entries: Vec<(K, u64)>,
    slots: HashMap<K, usize>,
}

impl<K> Default for OrderedTally<K> {
    fn default() -> Self {
        Self { entries: Vec::new(), slots: HashMap::new() }
    }
}

impl<K: Clone + Eq + Hash> OrderedTally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `key`, starting from 0 on first sight. Returns the new total.
    pub fn add(&mut self, key: &K, amount: u64) -> u64 {
        let idx = match self.slots.get(key) {
            Some(&i) => i,
            None => {
                self.entries.push((key.clone(), 0));
                let i = self.entries.len() - 1;
                self.slots.insert(key.clone(), i);
                i
            }
        };
        let slot = &mut self.entries[idx].1;
        *slot = slot.saturating_add(amount);
        *slot
    }

    pub fn get(&self, key: &K) -> Option<u64> {
        self.slots.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|(k, v)| (k, *v))
    }
}

/* ---------------------------------- Tests --------------------------------- */
