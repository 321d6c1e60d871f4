use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    combi::generate_candidates,
    config::MinerConfig,
    itemset::Itemset,
    transaction::{Transaction, TransactionStore},
    types::{FrequentItemsets, ItemCounts, ItemsetCounts, ItemsetLength, SupportCount},
};

/// Generate frequent itemsets from a store of transactions, level by level.
///
/// Level k's survivors seed level k+1's candidates; the loop ends at the
/// first level with no frequent itemsets, which is not recorded. The
/// configuration is assumed valid.
pub fn generate_frequent_itemsets(
    store: &TransactionStore,
    config: &MinerConfig,
) -> FrequentItemsets {
    let mut all_frequent_itemsets = FrequentItemsets::new();
    let min_support = config.min_support;

    let mut size: ItemsetLength = 1;
    let mut frequent_itemset_counts = frequent_1_itemsets(store, min_support);

    while !frequent_itemset_counts.is_empty() {
        debug!(size, frequent = frequent_itemset_counts.len(), "level done");
        all_frequent_itemsets.insert(size, frequent_itemset_counts);

        size += 1;
        if !config.allows_level(size) {
            debug!(max_len = size - 1, "stopping at level budget");
            break;
        }

        let candidates = generate_candidates(&all_frequent_itemsets[&(size - 1)], size);
        debug!(size, candidates = candidates.len(), "generated candidates");

        frequent_itemset_counts =
            count_support(store, candidates, size, min_support, config.parallel);
    }

    info!(
        levels = all_frequent_itemsets.len(),
        itemsets = all_frequent_itemsets.values().map(|counts| counts.len()).sum::<usize>(),
        "mining finished"
    );

    all_frequent_itemsets
}

/// Frequent 1-itemsets, counted in one pass.
pub fn frequent_1_itemsets(store: &TransactionStore, min_support: SupportCount) -> ItemsetCounts {
    let mut item_counts: ItemCounts = ItemCounts::with_capacity(store.inventory().len());

    for transaction in store.transactions() {
        for &item in transaction.items() {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }

    // Prune
    item_counts.retain(|_, &mut support_count| support_count >= min_support);

    convert_to_itemset_counts(item_counts)
}

/// Count every candidate of `size` in one pass over the store and keep those
/// meeting `min_support`.
///
/// With `parallel` the pass is split across the rayon pool; each worker
/// tallies into its own counters, which are summed at the end.
pub fn count_support(
    store: &TransactionStore,
    candidates: Vec<Itemset>,
    size: ItemsetLength,
    min_support: SupportCount,
    parallel: bool,
) -> ItemsetCounts {
    if candidates.is_empty() {
        return ItemsetCounts::new();
    }

    let transactions = store.transactions();
    let counts: Vec<SupportCount> = if parallel {
        transactions
            .par_iter()
            .filter(|transaction| transaction.len() >= size)
            .fold(
                || vec![0; candidates.len()],
                |mut counts, transaction| {
                    tally(&mut counts, &candidates, transaction);
                    counts
                },
            )
            .reduce(
                || vec![0; candidates.len()],
                |mut total, partial| {
                    total
                        .iter_mut()
                        .zip(partial)
                        .for_each(|(count, extra)| *count += extra);
                    total
                },
            )
    } else {
        let mut counts = vec![0; candidates.len()];
        transactions
            .iter()
            .filter(|transaction| transaction.len() >= size)
            .for_each(|transaction| tally(&mut counts, &candidates, transaction));
        counts
    };

    candidates
        .into_iter()
        .zip(counts)
        .filter(|&(_, count)| count >= min_support)
        .collect()
}

fn tally(counts: &mut [SupportCount], candidates: &[Itemset], transaction: &Transaction) {
    counts
        .iter_mut()
        .zip(candidates)
        .filter(|(_, candidate)| transaction.contains_all(candidate))
        .for_each(|(count, _)| *count += 1);
}

fn convert_to_itemset_counts(item_counts: ItemCounts) -> ItemsetCounts {
    item_counts
        .into_iter()
        .map(|(k, v)| (Itemset::singleton(k), v))
        .collect()
}
