//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::buffer::policy::ReplacementPolicy;
use crate::common::PageId;

/// Evicts pages in the order they entered the pool.
///
/// Re-accessing a page does not move it; only its first appearance counts.
/// Pages the policy has never seen lose to any queued candidate; if no
/// candidate is queued, the first candidate is returned.
pub struct FifoPolicy {
    /// Page ids in insertion order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageId>,
}

impl FifoPolicy {
    /// Create a new FIFO policy.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            in_queue: HashSet::new(),
        }
    }

    fn enqueue_if_absent(&mut self, page_id: PageId) {
        if self.in_queue.insert(page_id) {
            self.queue.push_back(page_id);
        }
    }

    /// Number of pages currently tracked.
    pub fn tracked(&self) -> usize {
        self.in_queue.len()
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn select_victim(&mut self, candidates: &[PageId]) -> Option<PageId> {
        let eligible: HashSet<PageId> = candidates.iter().copied().collect();

        // Oldest queued candidate wins. Removed entries linger in the
        // queue (on_remove only drops the set entry, keeping removal O(1));
        // skip them here.
        let queued = self
            .queue
            .iter()
            .find(|id| self.in_queue.contains(id) && eligible.contains(id))
            .copied();

        queued.or_else(|| candidates.first().copied())
    }

    fn on_access(&mut self, page_id: PageId) {
        // FIFO: accesses never reorder, but an access to a page the policy
        // forgot (e.g. after a policy swap) re-registers it.
        self.enqueue_if_absent(page_id);
    }

    fn on_add(&mut self, page_id: PageId) {
        self.enqueue_if_absent(page_id);
    }

    fn on_remove(&mut self, page_id: PageId) {
        self.in_queue.remove(&page_id);
    }
}

impl Default for FifoPolicy {
    fn default() -> Self {
        Self::new()
    }
}
