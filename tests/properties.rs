//! Property-based tests for the miner against a brute-force oracle.

use freqsets::{Apriori, Itemset, MinerConfig, TransactionStore};
use proptest::prelude::*;

/// Up to 6 distinct items so every subset can be enumerated.
fn rows() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec((0u8..6).prop_map(|item| format!("i{}", item)), 0..5),
        0..20,
    )
}

fn all_itemsets(store: &TransactionStore) -> Vec<Itemset> {
    let n = store.inventory().len();
    (1..(1usize << n))
        .map(|mask| Itemset::new((0..n).filter(|bit| mask & (1 << bit) != 0).collect()))
        .collect()
}

proptest! {
    /// Every subset one item smaller of a frequent itemset is frequent.
    #[test]
    fn anti_monotone(rows in rows(), min_support in 1u32..5) {
        let store = TransactionStore::from_rows(rows);
        let mining = Apriori::new(MinerConfig::new(min_support)).mine(&store).unwrap();

        for (&size, counts) in mining.levels() {
            for itemset in counts.keys() {
                prop_assert_eq!(itemset.len(), size);
                for subset in itemset.subsets_one_smaller().filter(|subset| !subset.is_empty()) {
                    prop_assert!(mining.support(&subset).is_some(), "{} missing", subset);
                }
            }
        }
    }

    /// Reported supports are exact, meet the threshold, and nothing frequent is missed.
    #[test]
    fn matches_brute_force(rows in rows(), min_support in 1u32..5) {
        let store = TransactionStore::from_rows(rows);
        let mining = Apriori::new(MinerConfig::new(min_support)).mine(&store).unwrap();

        let mut expected = 0;
        for itemset in all_itemsets(&store) {
            let support = store.support(&itemset);
            if support >= min_support {
                expected += 1;
                prop_assert_eq!(mining.support(&itemset), Some(support));
            } else {
                prop_assert_eq!(mining.support(&itemset), None);
            }
        }
        prop_assert_eq!(mining.len(), expected);
    }

    /// Maximal itemsets have no frequent superset and cover every frequent itemset.
    #[test]
    fn maximal_covers_frequent(rows in rows(), min_support in 1u32..4) {
        let store = TransactionStore::from_rows(rows);
        let mining = Apriori::new(MinerConfig::new(min_support)).mine(&store).unwrap();
        let inventory = store.inventory();

        let frequent: Vec<Itemset> = mining
            .frequent()
            .iter()
            .map(|itemset| inventory.itemset(&itemset.items[..]).unwrap())
            .collect();
        let maximal: Vec<Itemset> = mining
            .maximal()
            .iter()
            .map(|itemset| inventory.itemset(&itemset.items[..]).unwrap())
            .collect();

        for m in &maximal {
            prop_assert!(frequent.iter().all(|f| !m.is_proper_subset(f)));
        }
        for f in &frequent {
            prop_assert!(maximal.iter().any(|m| f.is_subset(m)));
        }
    }

    /// Mining twice gives the same result, sequentially or in parallel.
    #[test]
    fn idempotent(rows in rows(), min_support in 1u32..4) {
        let store = TransactionStore::from_rows(rows);
        let first = Apriori::new(MinerConfig::new(min_support)).mine(&store).unwrap();
        let second = Apriori::new(MinerConfig::new(min_support)).mine(&store).unwrap();
        let parallel = Apriori::new(MinerConfig::new(min_support).with_parallel(true))
            .mine(&store)
            .unwrap();

        prop_assert_eq!(first.levels(), second.levels());
        prop_assert_eq!(first.levels(), parallel.levels());
    }

    /// Raising the threshold never adds itemsets.
    #[test]
    fn threshold_monotone(rows in rows(), min_support in 1u32..4) {
        let store = TransactionStore::from_rows(rows);
        let low = Apriori::new(MinerConfig::new(min_support)).mine(&store).unwrap();
        let high = Apriori::new(MinerConfig::new(min_support + 1)).mine(&store).unwrap();

        prop_assert!(high.len() <= low.len());
        for counts in high.levels().values() {
            for itemset in counts.keys() {
                prop_assert!(low.support(itemset).is_some());
            }
        }
    }
}
