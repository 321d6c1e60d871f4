//! The transaction store and its row-oriented text loader.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::itemset::Itemset;
use crate::types::{ItemId, ItemName};

/// Bidirectional mapping between item labels and dense ids.
///
/// Ids are handed out in ascending label order, so sorting by id sorts by
/// label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    names: Vec<String>,
    reverse_lookup: HashMap<String, ItemId>,
}

impl Inventory {
    fn from_sorted(names: BTreeSet<String>) -> Self {
        let names: Vec<String> = names.into_iter().collect();
        let reverse_lookup = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self {
            names,
            reverse_lookup,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, id: ItemId) -> Option<ItemName> {
        self.names.get(id).map(String::as_str)
    }

    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.reverse_lookup.get(name).copied()
    }

    /// Labels of an itemset, in label order.
    pub fn names(&self, itemset: &Itemset) -> Vec<String> {
        itemset
            .items()
            .iter()
            .filter_map(|&id| self.name(id))
            .map(str::to_owned)
            .collect()
    }

    /// Builds an itemset from labels. `None` if any label is unknown.
    pub fn itemset<S: AsRef<str>>(&self, names: &[S]) -> Option<Itemset> {
        names
            .iter()
            .map(|name| self.id(name.as_ref()))
            .collect::<Option<Vec<ItemId>>>()
            .map(Itemset::new)
    }
}

/// One row of input: its distinct items, sorted by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    items: Vec<ItemId>,
}

impl Transaction {
    fn new(mut items: Vec<ItemId>) -> Self {
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }

    /// Whether every item of `itemset` occurs in this transaction.
    pub fn contains_all(&self, itemset: &Itemset) -> bool {
        itemset.is_subset_of_sorted(&self.items)
    }
}

/// An ordered, read-only collection of transactions over one inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionStore {
    inventory: Inventory,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Builds a store from rows of labels. Duplicate labels within a row
    /// collapse; empty rows become empty transactions.
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw_transactions: Vec<BTreeSet<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|item| item.as_ref().to_owned()).collect())
            .collect();

        let names: BTreeSet<String> = raw_transactions.iter().flatten().cloned().collect();
        let inventory = Inventory::from_sorted(names);

        let transactions = raw_transactions
            .iter()
            .map(|raw_transaction| {
                let items = raw_transaction
                    .iter()
                    .filter_map(|name| inventory.id(name))
                    .collect();
                Transaction::new(items)
            })
            .collect();

        Self {
            inventory,
            transactions,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rows = parse_rows(reader)?;
        let store = Self::from_rows(rows);
        debug!(
            transactions = store.len(),
            items = store.inventory.len(),
            "loaded transactions"
        );
        Ok(store)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions containing `itemset`.
    pub fn support(&self, itemset: &Itemset) -> u32 {
        self.transactions
            .iter()
            .filter(|transaction| transaction.contains_all(itemset))
            .count() as u32
    }
}

/// Splits comma-separated text into rows of item labels.
///
/// Fields are kept verbatim. A field wrapped in double quotes may contain
/// commas and line breaks, and `""` inside it stands for one quote. Empty
/// fields are dropped, so a blank line yields an empty row. Both `\n` and
/// `\r\n` end a row.
pub fn parse_rows<R: Read>(mut reader: R) -> Result<Vec<Vec<String>>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut chars = text.chars().peekable();
    let mut line = 1;
    // Line on which the open quoted field started
    let mut quoted_since: Option<usize> = None;
    let mut pending = false;

    while let Some(c) = chars.next() {
        pending = true;
        match (c, quoted_since) {
            ('"', Some(_)) if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            ('"', Some(_)) => quoted_since = None,
            ('"', None) if field.is_empty() => quoted_since = Some(line),
            (',', None) => row.push(std::mem::take(&mut field)),
            ('\r', None) if chars.peek() == Some(&'\n') => {}
            ('\n', None) => {
                line += 1;
                row.push(std::mem::take(&mut field));
                rows.push(finish_row(std::mem::take(&mut row)));
                pending = false;
            }
            ('\n', Some(_)) => {
                line += 1;
                field.push('\n');
            }
            (c, _) => field.push(c),
        }
    }

    if let Some(line) = quoted_since {
        return Err(Error::Parse {
            line,
            reason: "unterminated quoted field".to_owned(),
        });
    }
    if pending {
        row.push(field);
        rows.push(finish_row(row));
    }

    Ok(rows)
}

fn finish_row(mut fields: Vec<String>) -> Vec<String> {
    fields.retain(|field| !field.is_empty());
    fields
}
