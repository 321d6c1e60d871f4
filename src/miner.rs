use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::{
    config::MinerConfig,
    error::Result,
    itemset::Itemset,
    itemsets::{generate_frequent_itemsets, maximal_itemsets, sorted_itemsets},
    transaction::{Inventory, TransactionStore},
    types::{FrequentItemsets, SupportCount},
};

/// A frequent itemset named by its item labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FrequentItemset {
    pub items: Vec<String>,
    pub support: SupportCount,
}

/// Level-wise frequent itemset miner.
///
/// ```
/// use freqsets::{Apriori, MinerConfig, TransactionStore};
///
/// let store = TransactionStore::from_rows(vec![vec!["A", "B"], vec!["A", "B"], vec!["A", "C"]]);
/// let mining = Apriori::new(MinerConfig::new(2)).mine(&store).unwrap();
///
/// assert_eq!(mining.len(), 3);
/// assert_eq!(mining.maximal()[0].items, vec!["A", "B"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Apriori {
    config: MinerConfig,
}

impl Apriori {
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Validates the configuration, then mines `store`.
    pub fn mine<'s>(&self, store: &'s TransactionStore) -> Result<Mining<'s>> {
        self.config.validate()?;

        let start = Instant::now();
        let levels = generate_frequent_itemsets(store, &self.config);
        let elapsed = start.elapsed();

        info!(
            transactions = store.len(),
            min_support = self.config.min_support,
            elapsed_ms = elapsed.as_millis() as u64,
            "mined frequent itemsets"
        );

        Ok(Mining {
            inventory: store.inventory(),
            min_support: self.config.min_support,
            levels,
            elapsed,
        })
    }
}

/// The outcome of one mining run over a store.
#[derive(Debug, Clone)]
pub struct Mining<'s> {
    inventory: &'s Inventory,
    min_support: SupportCount,
    levels: FrequentItemsets,
    elapsed: Duration,
}

impl<'s> Mining<'s> {
    pub fn levels(&self) -> &FrequentItemsets {
        &self.levels
    }

    pub fn inventory(&self) -> &'s Inventory {
        self.inventory
    }

    pub fn min_support(&self) -> SupportCount {
        self.min_support
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Total number of frequent itemsets across all levels.
    pub fn len(&self) -> usize {
        self.levels.values().map(|counts| counts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Support of `itemset` if it is frequent.
    pub fn support(&self, itemset: &Itemset) -> Option<SupportCount> {
        self.levels
            .get(&itemset.len())
            .and_then(|counts| counts.get(itemset))
            .copied()
    }

    /// Every frequent itemset, sorted by size then items.
    pub fn frequent(&self) -> Vec<FrequentItemset> {
        self.named(sorted_itemsets(&self.levels))
    }

    /// Frequent itemsets with no frequent proper superset, sorted by size
    /// then items.
    pub fn maximal(&self) -> Vec<FrequentItemset> {
        self.named(maximal_itemsets(&self.levels))
    }

    fn named(&self, itemsets: Vec<(Itemset, SupportCount)>) -> Vec<FrequentItemset> {
        itemsets
            .into_iter()
            .map(|(itemset, support)| FrequentItemset {
                items: self.inventory.names(&itemset),
                support,
            })
            .collect()
    }
}
