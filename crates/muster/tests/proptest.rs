//! Property-based tests for collection index semantics.

use proptest::prelude::*;

use muster::Collection;

proptest! {
    #[test]
    fn insert_indices_strictly_increase(items in prop::collection::vec(any::<u32>(), 0..20)) {
        let mut collection = Collection::new();
        let mut last: Option<usize> = None;
        for item in items {
            let index = collection.insert(item);
            if let Some(previous) = last {
                prop_assert!(index > previous);
            }
            last = Some(index);
        }
    }

    #[test]
    fn removal_below_the_max_never_recycles_indices(
        items in prop::collection::vec(any::<u32>(), 2..20),
        victim in 0usize..20,
    ) {
        let mut collection: Collection<u32> = items.iter().copied().collect();
        // Keep the highest index in place; allocation is max + 1, so only
        // removing the max entry can ever surrender its index.
        let victim = victim % (collection.len() - 1);
        let high_water = collection.next_index();
        collection.remove_at(victim);
        prop_assert!(collection.insert(0) >= high_water);
    }

    #[test]
    fn normalize_is_dense_and_order_preserving(
        items in prop::collection::vec(any::<u32>(), 0..20),
        removals in prop::collection::vec(0usize..20, 0..5),
    ) {
        let mut collection: Collection<u32> = items.iter().copied().collect();
        for r in removals {
            if !collection.is_empty() {
                let victims: Vec<usize> = collection.indices().collect();
                collection.remove_at(victims[r % victims.len()]);
            }
        }
        let before: Vec<u32> = collection.values().copied().collect();

        collection.normalize();

        let indices: Vec<usize> = collection.indices().collect();
        let expected: Vec<usize> = (0..collection.len()).collect();
        prop_assert_eq!(indices, expected);
        let after: Vec<u32> = collection.values().copied().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn extend_matches_repeated_insert(items in prop::collection::vec(any::<u32>(), 0..20)) {
        let mut by_extend = Collection::new();
        by_extend.extend(items.clone());

        let mut by_insert = Collection::new();
        for item in items {
            by_insert.insert(item);
        }
        prop_assert_eq!(by_extend, by_insert);
    }
}
