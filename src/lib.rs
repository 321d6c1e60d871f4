//! Frequent itemset mining with the level-wise Apriori algorithm.
//!
//! Transactions are loaded into a [`TransactionStore`], mined with
//! [`Apriori`], and the resulting [`Mining`] lists every frequent itemset or
//! only the maximal ones.

pub mod combi;
pub mod config;
pub mod error;
pub mod format;
pub mod itemset;
pub mod itemsets;
pub mod miner;
pub mod transaction;
pub mod types;

#[cfg(feature = "python")]
mod wrapper;

pub use config::MinerConfig;
pub use error::{Error, Result};
pub use itemset::Itemset;
pub use miner::{Apriori, FrequentItemset, Mining};
pub use transaction::{parse_rows, Inventory, Transaction, TransactionStore};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn freqsets(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wrapper::apriori, m)?)?;
    m.add_function(wrap_pyfunction!(wrapper::maximal_itemsets, m)?)?;
    Ok(())
}
