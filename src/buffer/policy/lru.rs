//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::buffer::policy::ReplacementPolicy;
use crate::common::PageId;

/// Evicts the page whose last access is furthest in the past.
///
/// Recency is tracked with a logical clock: every access stamps the page
/// with the next tick, and the victim is the candidate with the smallest
/// stamp. Candidates the policy has never seen lose to any tracked page;
/// if no candidate is tracked at all, the first candidate is returned.
pub struct LruPolicy {
    /// Tick of the most recent access per page.
    last_access: HashMap<PageId, u64>,

    /// Logical clock, bumped on every access.
    tick: u64,
}

impl LruPolicy {
    /// Create a new LRU policy.
    pub fn new() -> Self {
        Self {
            last_access: HashMap::new(),
            tick: 0,
        }
    }

    fn touch(&mut self, page_id: PageId) {
        self.tick += 1;
        self.last_access.insert(page_id, self.tick);
    }

    /// Number of pages currently tracked.
    pub fn tracked(&self) -> usize {
        self.last_access.len()
    }
}

impl ReplacementPolicy for LruPolicy {
    fn name(&self) -> &'static str {
        "lru"
    }

    fn select_victim(&mut self, candidates: &[PageId]) -> Option<PageId> {
        let tracked = candidates
            .iter()
            .filter_map(|&id| self.last_access.get(&id).map(|&tick| (tick, id)))
            .min_by_key(|&(tick, _)| tick)
            .map(|(_, id)| id);

        tracked.or_else(|| candidates.first().copied())
    }

    fn on_access(&mut self, page_id: PageId) {
        self.touch(page_id);
    }

    fn on_add(&mut self, page_id: PageId) {
        // Adding counts as the first access.
        self.touch(page_id);
    }

    fn on_remove(&mut self, page_id: PageId) {
        self.last_access.remove(&page_id);
    }
}

impl Default for LruPolicy {
    fn default() -> Self {
        Self::new()
    }
}
