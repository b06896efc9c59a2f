//! Node-expansion statistics, kept per evaluation heuristic

use std::sync::atomic::{AtomicU64, Ordering};

use crate::evaluate::Evaluator;

/// Counts search nodes expanded with each [`Evaluator`]
///
/// The counter is owned by the caller and handed to every search. Increments
/// are atomic, so one counter can be shared between threads behind an `Arc`.
/// Counts only ever grow: take a [`snapshot`](NodeCounter::snapshot) before and
/// after a search to measure it.
#[derive(Debug, Default)]
pub struct NodeCounter {
    counts: [AtomicU64; 2],
}

impl NodeCounter {
    pub const fn new() -> Self {
        Self {
            counts: [AtomicU64::new(0), AtomicU64::new(0)],
        }
    }

    /// Records one node visited while searching with `evaluator`
    pub fn record(&self, evaluator: Evaluator) {
        self.counts[evaluator.index()].fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self, evaluator: Evaluator) -> u64 {
        self.counts[evaluator.index()].load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> NodeCounts {
        NodeCounts {
            counts: [
                self.get(Evaluator::Basic),
                self.get(Evaluator::Advanced),
            ],
        }
    }
}

/// A point-in-time copy of a [`NodeCounter`]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct NodeCounts {
    counts: [u64; 2],
}

impl NodeCounts {
    pub fn get(&self, evaluator: Evaluator) -> u64 {
        self.counts[evaluator.index()]
    }

    /// Nodes expanded between `earlier` and this snapshot
    pub fn since(&self, earlier: &NodeCounts) -> NodeCounts {
        NodeCounts {
            counts: [
                self.counts[0].saturating_sub(earlier.counts[0]),
                self.counts[1].saturating_sub(earlier.counts[1]),
            ],
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl std::ops::Add for NodeCounts {
    type Output = NodeCounts;

    fn add(self, other: NodeCounts) -> NodeCounts {
        NodeCounts {
            counts: [
                self.counts[0] + other.counts[0],
                self.counts[1] + other.counts[1],
            ],
        }
    }
}
