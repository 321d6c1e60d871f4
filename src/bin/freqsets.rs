use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::EnvFilter;

use freqsets::format::{render, OutputFormat, Selection};
use freqsets::{Apriori, MinerConfig, TransactionStore};

fn init_tracing(verbosity: i8) {
    // Map -q/-v to tracing levels; default WARN
    let level = match verbosity {
        i8::MIN..=-1 => Level::ERROR,
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .finish();

    let _ = set_global_default(subscriber);
}

/// Net verbosity from repeated -v and -q flags, saturating at the i8 range.
fn verbosity(verbose: u8, quiet: u8) -> i8 {
    let verbose = i8::try_from(verbose).unwrap_or(i8::MAX);
    let quiet = i8::try_from(quiet).unwrap_or(i8::MAX);
    verbose.saturating_sub(quiet)
}

fn main() {
    let opts = Opts::parse();
    init_tracing(verbosity(opts.verbose, opts.quiet));
    if let Err(e) = run(opts) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> anyhow::Result<()> {
    let store = TransactionStore::from_path(&opts.file)
        .with_context(|| format!("failed to load transactions from {}", opts.file.display()))?;

    let config = MinerConfig {
        min_support: opts.min_support,
        max_len: opts.max_len,
        parallel: opts.parallel,
    };
    let mining = Apriori::new(config).mine(&store)?;

    let selection = if opts.maximal {
        Selection::Maximal
    } else {
        Selection::Frequent
    };
    print!("{}", render(&mining, selection, opts.format)?);
    if opts.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "Mine frequent itemsets from comma-separated transactions")]
pub struct Opts {
    /// File with one transaction per line, items separated by commas
    pub file: PathBuf,
    /// Minimum number of transactions an itemset must appear in
    #[arg(short = 's', long)]
    pub min_support: u32,
    /// Largest itemset size to mine
    #[arg(short = 'k', long)]
    pub max_len: Option<usize>,
    /// List only maximal frequent itemsets (JSON always carries both)
    #[arg(short, long)]
    pub maximal: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Braces)]
    pub format: OutputFormat,
    /// Count support on all cores
    #[arg(long)]
    pub parallel: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Decrease verbosity (-q)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_nets_flags() {
        assert_eq!(verbosity(0, 0), 0);
        assert_eq!(verbosity(2, 0), 2);
        assert_eq!(verbosity(1, 3), -2);
    }

    #[test]
    fn verbosity_saturates_on_many_flags() {
        assert_eq!(verbosity(200, 0), i8::MAX);
        assert_eq!(verbosity(0, 200), -i8::MAX);
        assert_eq!(verbosity(255, 255), 0);
    }

    #[test]
    fn parses_flags() {
        let opts = Opts::try_parse_from(["freqsets", "data.csv", "-s", "2", "-vvv", "-q"]).unwrap();
        assert_eq!(opts.min_support, 2);
        assert_eq!(verbosity(opts.verbose, opts.quiet), 2);
        assert_eq!(opts.format, OutputFormat::Braces);
    }
}
