pub mod count;
pub mod maximal;

pub use count::{count_support, frequent_1_itemsets, generate_frequent_itemsets};
pub use maximal::maximal_itemsets;

use crate::{
    itemset::Itemset,
    types::{FrequentItemsets, SupportCount},
};

/// All levels flattened into presentation order: size, then items.
pub fn sorted_itemsets(frequent_itemsets: &FrequentItemsets) -> Vec<(Itemset, SupportCount)> {
    let mut itemsets: Vec<(Itemset, SupportCount)> = frequent_itemsets
        .values()
        .flat_map(|counts| counts.iter().map(|(itemset, &count)| (itemset.clone(), count)))
        .collect();
    itemsets.sort_by(|(a, _), (b, _)| a.presentation_cmp(b));
    itemsets
}
