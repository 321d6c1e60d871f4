use std::collections::{BTreeMap, HashMap};

use crate::itemset::Itemset;

pub type ItemId = usize;
pub type ItemName<'l> = &'l str;
pub type SupportCount = u32;

pub type ItemCounts = HashMap<ItemId, SupportCount>;
pub type ItemsetCounts = HashMap<Itemset, SupportCount>;

pub type ItemsetLength = usize;
/// Frequent itemsets keyed by level, ascending.
pub type FrequentItemsets = BTreeMap<ItemsetLength, ItemsetCounts>;
