use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

use itertools::Itertools;

use crate::types::ItemId;

/// An immutable set of items, stored as a sorted vector of ids.
///
/// Equality and hashing are structural over the sorted ids, so two itemsets
/// built from the same items in any order are the same map key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Itemset(Vec<ItemId>);

impl Itemset {
    pub fn new(mut items: Vec<ItemId>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: ItemId) -> Self {
        Self(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    /// Set union. Both inputs are sorted, so a merge keeps the result sorted.
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.iter().merge(other.0.iter()).dedup().copied().collect())
    }

    pub fn is_subset(&self, other: &Self) -> bool {
        self.is_subset_of_sorted(&other.0)
    }

    /// Subset test against any sorted, deduplicated slice of ids.
    pub fn is_subset_of_sorted(&self, items: &[ItemId]) -> bool {
        if self.len() > items.len() {
            return false;
        }

        let mut theirs = items.iter();
        'ours: for item in self.0.iter() {
            for candidate in theirs.by_ref() {
                match candidate.cmp(item) {
                    Ordering::Less => continue,
                    Ordering::Equal => continue 'ours,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.len() < other.len() && self.is_subset(other)
    }

    /// Every subset with exactly one item removed.
    pub fn subsets_one_smaller(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.0.len()).map(move |skip| {
            Self(
                self.0
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &item)| item)
                    .collect(),
            )
        })
    }

    /// Presentation order: size ascending, then items ascending.
    pub fn presentation_cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl From<Vec<ItemId>> for Itemset {
    fn from(items: Vec<ItemId>) -> Self {
        Self::new(items)
    }
}

impl Display for Itemset {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{{{}}}", self.0.iter().join(","))
    }
}
