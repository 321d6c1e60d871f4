use crate::{
    itemset::Itemset,
    types::{FrequentItemsets, SupportCount},
};

/// Frequent itemsets not contained in any other frequent itemset.
///
/// Levels are visited largest first. Anything visited later is no larger
/// than what has been accepted, so it only has to be checked against the
/// accepted list. The result is in presentation order.
pub fn maximal_itemsets(frequent_itemsets: &FrequentItemsets) -> Vec<(Itemset, SupportCount)> {
    let mut maximal: Vec<(&Itemset, SupportCount)> = Vec::new();

    for itemset_counts in frequent_itemsets.values().rev() {
        let mut level: Vec<(&Itemset, &SupportCount)> = itemset_counts.iter().collect();
        level.sort_unstable();

        for (itemset, &count) in level {
            if !maximal.iter().any(|(accepted, _)| itemset.is_subset(accepted)) {
                maximal.push((itemset, count));
            }
        }
    }

    let mut maximal: Vec<(Itemset, SupportCount)> = maximal
        .into_iter()
        .map(|(itemset, count)| (itemset.clone(), count))
        .collect();
    maximal.sort_by(|(a, _), (b, _)| a.presentation_cmp(b));
    maximal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemsetCounts;
    use maplit::hashmap;

    fn frequent(levels: Vec<(usize, Vec<(Vec<usize>, SupportCount)>)>) -> FrequentItemsets {
        levels
            .into_iter()
            .map(|(size, itemsets)| {
                let counts: ItemsetCounts = itemsets
                    .into_iter()
                    .map(|(items, count)| (Itemset::new(items), count))
                    .collect();
                (size, counts)
            })
            .collect()
    }

    #[test]
    fn pair_absorbs_its_singletons() {
        let frequent_itemsets = frequent(vec![
            (1, vec![(vec![0], 3), (vec![1], 2)]),
            (2, vec![(vec![0, 1], 2)]),
        ]);

        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            vec![(Itemset::new(vec![0, 1]), 2)]
        );
    }

    #[test]
    fn disjoint_singletons_are_all_maximal() {
        let frequent_itemsets = frequent(vec![(1, vec![(vec![2], 1), (vec![0], 1), (vec![1], 1)])]);

        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            vec![
                (Itemset::new(vec![0]), 1),
                (Itemset::new(vec![1]), 1),
                (Itemset::new(vec![2]), 1),
            ]
        );
    }

    #[test]
    fn mixed_sizes_sorted_for_presentation() {
        let frequent_itemsets = frequent(vec![
            (1, vec![(vec![0], 4), (vec![1], 3), (vec![2], 3), (vec![3], 2), (vec![4], 2)]),
            (2, vec![(vec![0, 1], 3), (vec![0, 2], 2), (vec![1, 2], 2), (vec![3, 4], 2)]),
            (3, vec![(vec![0, 1, 2], 2)]),
        ]);

        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            vec![
                (Itemset::new(vec![3, 4]), 2),
                (Itemset::new(vec![0, 1, 2]), 2),
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(maximal_itemsets(&FrequentItemsets::new()).is_empty());
    }

    #[test]
    fn single_level_map_literal() {
        let frequent_itemsets: FrequentItemsets = vec![(
            1,
            hashmap! { Itemset::singleton(7) => 5 },
        )]
        .into_iter()
        .collect();

        assert_eq!(
            maximal_itemsets(&frequent_itemsets),
            vec![(Itemset::singleton(7), 5)]
        );
    }
}
