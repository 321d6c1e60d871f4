use std::collections::HashSet;

use itertools::Itertools;
use tracing::trace;

use crate::{
    itemset::Itemset,
    types::{ItemsetCounts, ItemsetLength},
};

/// Candidates of `size` from the frequent itemsets one level below.
///
/// Every pair is joined and kept if its union spans exactly `size` items,
/// then pruned by [`has_infrequent_subset`]. Returned sorted so that
/// downstream counting visits candidates in a stable order.
pub fn generate_candidates(prev: &ItemsetCounts, size: ItemsetLength) -> Vec<Itemset> {
    let mut itemsets: Vec<&Itemset> = prev.keys().collect();
    itemsets.sort_unstable();

    let mut candidates: Vec<Itemset> = join_step(&itemsets, size)
        .into_iter()
        .filter(|candidate| {
            let infrequent = has_infrequent_subset(candidate, prev);
            if infrequent {
                trace!(%candidate, "pruned candidate with infrequent subset");
            }
            !infrequent
        })
        .collect();
    candidates.sort_unstable();

    candidates
}

/// Pairwise union of `itemsets`, keeping the unions of exactly `size` items.
///
/// A `size`-itemset is reachable from several pairs of its subsets; the set
/// collapses those duplicates.
pub fn join_step(itemsets: &[&Itemset], size: ItemsetLength) -> HashSet<Itemset> {
    itemsets
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.union(b))
        .filter(|union| union.len() == size)
        .collect()
}

/// Whether any subset of `candidate` one item smaller is missing from `prev`.
pub fn has_infrequent_subset(candidate: &Itemset, prev: &ItemsetCounts) -> bool {
    candidate
        .subsets_one_smaller()
        .any(|subset| !prev.contains_key(&subset))
}
