//! Property tests for the core structures.
//!
//! Universally quantified checks: for arbitrary key sets and operation
//! mixes, the structures agree with their obvious reference models.

use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;

use memdb::buffer::PagePool;
use memdb::index::{BTree, HashTable};

proptest! {
    /// Membership, size, ordering, and extremes all match a sorted-set
    /// model for any collection of distinct keys.
    #[test]
    fn prop_btree_matches_sorted_set(keys in prop::collection::hash_set(any::<i32>(), 0..200)) {
        let mut tree: BTree<i32> = BTree::new();
        for &k in &keys {
            prop_assert!(tree.insert(k));
        }

        let model: BTreeSet<i32> = keys.iter().copied().collect();

        prop_assert_eq!(tree.len(), model.len());
        for &k in &model {
            prop_assert!(tree.contains(&k));
            // Duplicates are rejected without changing the size.
            prop_assert!(!tree.insert(k));
        }
        prop_assert_eq!(tree.len(), model.len());

        let mut traversed = Vec::new();
        tree.traverse(|k| traversed.push(*k));
        let expected: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(&traversed, &expected);

        prop_assert_eq!(tree.min(), model.first());
        prop_assert_eq!(tree.max(), model.last());
    }

    /// Removing any prefix of the key set leaves exactly the survivors,
    /// still ordered, and removed keys report absent.
    #[test]
    fn prop_btree_remove_preserves_survivors(
        keys in prop::collection::hash_set(any::<i32>(), 1..150),
        remove_count in 0usize..150,
    ) {
        let mut tree: BTree<i32> = BTree::new();
        for &k in &keys {
            tree.insert(k);
        }

        let ordered: Vec<i32> = keys.iter().copied().collect();
        let (to_remove, to_keep) = ordered.split_at(remove_count.min(ordered.len()));

        for k in to_remove {
            prop_assert!(tree.remove(k));
            prop_assert!(!tree.remove(k), "second removal of {} succeeded", k);
            prop_assert!(!tree.contains(k));
        }

        prop_assert_eq!(tree.len(), to_keep.len());
        for k in to_keep {
            prop_assert!(tree.contains(k), "lost key {}", k);
        }

        let mut traversed = Vec::new();
        tree.traverse(|k| traversed.push(*k));
        let mut expected: Vec<i32> = to_keep.to_vec();
        expected.sort_unstable();
        prop_assert_eq!(traversed, expected);
    }

    /// Even tree orders go through the same split/borrow/merge machinery.
    #[test]
    fn prop_btree_even_order_round_trip(keys in prop::collection::hash_set(any::<i16>(), 1..120)) {
        let mut tree: BTree<i16, 4> = BTree::new();
        for &k in &keys {
            prop_assert!(tree.insert(k));
        }
        for &k in &keys {
            prop_assert!(tree.remove(&k));
        }
        prop_assert!(tree.is_empty());
    }

    /// The hash table agrees with std's HashMap under first-wins inserts,
    /// across growth.
    #[test]
    fn prop_hash_table_matches_map(pairs in prop::collection::vec((any::<i16>(), any::<i32>()), 0..300)) {
        let mut table: HashTable<i16, i32> = HashTable::with_buckets(4);
        let mut model: HashMap<i16, i32> = HashMap::new();

        for &(k, v) in &pairs {
            let fresh = table.insert(k, v);
            prop_assert_eq!(fresh, !model.contains_key(&k));
            model.entry(k).or_insert(v);
        }

        prop_assert_eq!(table.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.find(k), Some(v));
        }

        // Iteration yields exactly the live pairs.
        let mut seen: Vec<(i16, i32)> = table.iter().map(|(k, v)| (*k, *v)).collect();
        seen.sort_unstable();
        let mut expected: Vec<(i16, i32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);

        // Removing every key empties the table.
        for (k, v) in &model {
            prop_assert_eq!(table.remove(k), Some(*v));
        }
        prop_assert!(table.is_empty());
    }

    /// Residency never exceeds capacity and ids strictly increase, no
    /// matter how much the pool churns.
    #[test]
    fn prop_pool_bounds_hold(capacity in 1usize..8, churn in 1usize..50) {
        let mut pool = PagePool::new(64, capacity);
        let mut last_id = 0u64;

        for _ in 0..churn {
            let id = pool.allocate_page().unwrap();
            prop_assert!(id.0 > last_id, "id {} did not increase past {}", id.0, last_id);
            last_id = id.0;
            prop_assert!(pool.resident_pages() <= capacity);
        }

        let stats = pool.stats();
        prop_assert_eq!(stats.allocations, churn as u64);
        prop_assert_eq!(stats.evictions, churn.saturating_sub(capacity) as u64);
    }
}
