use serde::{Deserialize, Serialize};

use super::category::{Category, CATEGORY_COUNT};

/// What a decrement does to the category's timestamp log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecrementPolicy {
    /// Only the count changes; the log stays an append-only record of increments.
    #[default]
    KeepLog,
    /// Also drop the most recent log entry when the count actually went down.
    PopLatest,
}

/// Per-category counts plus the video times at which each increment happened.
///
/// Counts never go below zero. A category's log length may differ from its
/// count (see [`DecrementPolicy`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    counts: [u32; CATEGORY_COUNT],
    timestamps: [Vec<f64>; CATEGORY_COUNT],
}

impl Tally {
    pub fn from_parts(counts: [u32; CATEGORY_COUNT], timestamps: [Vec<f64>; CATEGORY_COUNT]) -> Self {
        Self { counts, timestamps }
    }

    pub fn counts(&self) -> [u32; CATEGORY_COUNT] {
        self.counts
    }

    pub fn count(&self, category: Category) -> u32 {
        self.counts[category.index()]
    }

    pub fn timestamps(&self, category: Category) -> &[f64] {
        &self.timestamps[category.index()]
    }

    /// Most recently logged time for a category, in action order.
    pub fn latest(&self, category: Category) -> Option<f64> {
        self.timestamps(category).last().copied()
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn logged_total(&self) -> usize {
        self.timestamps.iter().map(Vec::len).sum()
    }

    /// Count one occurrence at `position` seconds of video time.
    pub fn increment(&mut self, category: Category, position: f64) {
        let index = category.index();
        self.counts[index] = self.counts[index].saturating_add(1);
        self.timestamps[index].push(position);
    }

    /// Remove one occurrence, clamping at zero. Returns whether the count changed.
    pub fn decrement(&mut self, category: Category, policy: DecrementPolicy) -> bool {
        let index = category.index();
        if self.counts[index] == 0 {
            return false;
        }
        self.counts[index] -= 1;
        if policy == DecrementPolicy::PopLatest {
            self.timestamps[index].pop();
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
