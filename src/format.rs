//! Rendering of mining results for people and for other programs.

use std::fmt::Write;

use clap::ValueEnum;
use serde::Serialize;

use crate::{
    error::Result,
    miner::{FrequentItemset, Mining},
    types::SupportCount,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `{a,b}{c}` grouping followed by a summary line
    #[default]
    Braces,
    /// Structured JSON document
    Json,
}

/// Which itemsets the brace grouping lists. JSON always carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Frequent,
    Maximal,
}

#[derive(Debug, Serialize)]
struct Report {
    min_support: SupportCount,
    elapsed_ms: f64,
    frequent: Vec<FrequentItemset>,
    maximal: Vec<FrequentItemset>,
}

/// Brace-delimited grouping, e.g. `{bread,milk}{eggs}`. Itemsets are written
/// in the order given.
pub fn braces(itemsets: &[FrequentItemset]) -> String {
    itemsets.iter().fold(String::new(), |mut out, itemset| {
        out.push('{');
        out.push_str(&itemset.items.join(","));
        out.push('}');
        out
    })
}

pub fn render(mining: &Mining, selection: Selection, format: OutputFormat) -> Result<String> {
    let elapsed_ms = mining.elapsed().as_secs_f64() * 1000.0;

    match format {
        OutputFormat::Braces => {
            let (label, itemsets) = match selection {
                Selection::Frequent => ("frequent", mining.frequent()),
                Selection::Maximal => ("maximal", mining.maximal()),
            };
            let mut out = braces(&itemsets);
            out.push('\n');
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "# {} {} itemsets, min support {}, {:.3} ms",
                itemsets.len(),
                label,
                mining.min_support(),
                elapsed_ms
            );
            Ok(out)
        }
        OutputFormat::Json => {
            let report = Report {
                min_support: mining.min_support(),
                elapsed_ms,
                frequent: mining.frequent(),
                maximal: mining.maximal(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
