use std::collections::HashSet;

use crate::types::Rect;

/// Remembers accepted crop rectangles and refuses exact repeats
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    seen: HashSet<Rect>,
    accepted: Vec<Rect>,
    duplicates: usize,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when an identical rectangle was already accepted
    pub fn insert(&mut self, rect: Rect) -> bool {
        if self.seen.insert(rect) {
            self.accepted.push(rect);
            true
        } else {
            self.duplicates += 1;
            false
        }
    }

    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn accepted(&self) -> &[Rect] {
        &self.accepted
    }

    pub fn into_accepted(self) -> Vec<Rect> {
        self.accepted
    }
}
