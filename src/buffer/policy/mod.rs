//! Eviction policy implementations.
//!
//! A [`ReplacementPolicy`] decides which resident page the pool evicts when
//! it needs room. Policies only ever *rank* pages; the pool decides which
//! pages are eligible (unpinned) and performs the eviction itself.
//!
//! Implemented policies:
//! - [`LruPolicy`] - Least Recently Used (the default)
//! - [`FifoPolicy`] - First-In-First-Out

mod fifo;
mod lru;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

use crate::common::PageId;

/// Strategy for choosing an eviction victim.
///
/// The pool notifies the policy of every page lifecycle event; the policy
/// keeps whatever bookkeeping it needs to answer
/// [`select_victim`](ReplacementPolicy::select_victim).
///
/// Policies are runtime-swappable via
/// [`PagePool::set_policy`](crate::buffer::PagePool::set_policy).
pub trait ReplacementPolicy {
    /// Human-readable policy name for diagnostics.
    fn name(&self) -> &'static str;

    /// Choose a victim among `candidates` (the pool's unpinned pages).
    ///
    /// Returns `None` only when `candidates` is empty. If the policy has no
    /// recorded ranking for any candidate, it falls back to an arbitrary
    /// one rather than refusing.
    fn select_victim(&mut self, candidates: &[PageId]) -> Option<PageId>;

    /// Record that a page was accessed.
    fn on_access(&mut self, page_id: PageId);

    /// Record that a page entered the pool.
    fn on_add(&mut self, page_id: PageId);

    /// Record that a page left the pool.
    fn on_remove(&mut self, page_id: PageId);
}
