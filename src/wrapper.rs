//! Python bindings, built with the `python` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};

use crate::{Apriori, Error, MinerConfig, TransactionStore};

macro_rules! pyfrozenset {
    ($py:expr,$x:expr) => {{
        let set: Py<PyFrozenSet> = PyFrozenSet::new($py, $x.as_slice())?.into();
        set
    }};
}

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn config(min_support: u32, max_len: Option<usize>) -> MinerConfig {
    MinerConfig {
        min_support,
        max_len,
        ..MinerConfig::default()
    }
}

/// Frequent itemsets of `transactions` as a dict of frozenset to support.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, max_len = None))]
pub fn apriori(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: u32,
    max_len: Option<usize>,
) -> PyResult<Py<PyDict>> {
    let store = TransactionStore::from_rows(transactions);
    let mining = Apriori::new(config(min_support, max_len)).mine(&store)?;

    let dict = PyDict::new(py);
    for itemset in mining.frequent() {
        dict.set_item(pyfrozenset![py, itemset.items], itemset.support)?;
    }
    Ok(dict.into())
}

/// Maximal frequent itemsets of `transactions`, sorted by size then items.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, max_len = None))]
pub fn maximal_itemsets(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: u32,
    max_len: Option<usize>,
) -> PyResult<Vec<Py<PyFrozenSet>>> {
    let store = TransactionStore::from_rows(transactions);
    let mining = Apriori::new(config(min_support, max_len)).mine(&store)?;

    mining
        .maximal()
        .into_iter()
        .map(|itemset| -> PyResult<Py<PyFrozenSet>> { Ok(pyfrozenset![py, itemset.items]) })
        .collect()
}
