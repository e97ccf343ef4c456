//! Pin-aware column layout
//!
//! Derives the visible column order from the schema plus the user's pin
//! choices: left-pinned columns first (in pin order), then the remaining
//! columns in schema order, then right-pinned columns (in pin order).

use std::collections::{HashMap, HashSet};

use crate::schema::Column;

/// User-driven column pinning for one grid instance
///
/// The two sequences are always disjoint: pinning a key on one side removes
/// it from the other, and a key is never inserted twice on the same side.
/// Both invariants are enforced here rather than at the call sites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinState {
    left: Vec<String>,
    right: Vec<String>,
}

impl PinState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a column to the left edge, after any existing left pins
    pub fn pin_left(&mut self, key: &str) {
        self.right.retain(|k| k != key);
        if !self.left.iter().any(|k| k == key) {
            self.left.push(key.to_string());
        }
    }

    /// Pin a column to the right edge, before any existing right pins
    pub fn pin_right(&mut self, key: &str) {
        self.left.retain(|k| k != key);
        if !self.right.iter().any(|k| k == key) {
            self.right.insert(0, key.to_string());
        }
    }

    /// Remove all pins
    pub fn clear(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    /// Left-pinned keys in pin order
    pub fn left(&self) -> &[String] {
        &self.left
    }

    /// Right-pinned keys in pin order
    pub fn right(&self) -> &[String] {
        &self.right
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

/// Build the visible column order for `schema` under `pin`
///
/// Pure: the same inputs always produce the same layout, and the result is
/// a permutation of the schema. Pinned keys that no longer exist in the
/// schema are skipped; the schema is the source of truth.
pub fn build_layout<'a>(schema: &'a [Column], pin: &PinState) -> Vec<&'a Column> {
    let by_key: HashMap<&str, &Column> = schema.iter().map(|c| (c.key.as_str(), c)).collect();
    let pinned: HashSet<&str> = pin
        .left()
        .iter()
        .chain(pin.right().iter())
        .map(String::as_str)
        .collect();

    let mut layout = Vec::with_capacity(schema.len());
    push_pinned(&mut layout, pin.left(), &by_key);
    layout.extend(schema.iter().filter(|c| !pinned.contains(c.key.as_str())));
    push_pinned(&mut layout, pin.right(), &by_key);
    layout
}

fn push_pinned<'a>(
    layout: &mut Vec<&'a Column>,
    keys: &[String],
    by_key: &HashMap<&str, &'a Column>,
) {
    for key in keys {
        match by_key.get(key.as_str()) {
            Some(col) => layout.push(col),
            None => {
                tracing::debug!(column = %key, "pinned column no longer in schema, dropped from layout");
            }
        }
    }
}

/// Frozen-column hints for the host engine: `(left, right)` counts
///
/// The left count includes the index column the host renders before the
/// data columns. Stale pin keys do not count.
pub fn frozen_counts(schema: &[Column], pin: &PinState) -> (usize, usize) {
    let exists = |key: &&String| schema.iter().any(|c| &c.key == *key);
    let left = pin.left().iter().filter(exists).count();
    let right = pin.right().iter().filter(exists).count();
    (1 + left, right)
}
