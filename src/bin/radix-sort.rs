use anyhow::Context;
use clap::Parser;
use kira_radix_sort::input::parse_values;
use kira_radix_sort::*;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sort non-negative integers with LSD radix sort, showing every pass.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Values to sort (omit for an interactive session)
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,

    /// Read `count v1 v2 ...` from a file
    #[arg(short, long, conflicts_with = "values")]
    input: Option<PathBuf>,

    /// Do not print per-pass snapshots
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut data = if let Some(path) = &args.input {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        read_sequence(BufReader::new(file))
            .with_context(|| format!("reading {}", path.display()))?
    } else if !args.values.is_empty() {
        parse_values(&args.values)?
    } else {
        let stdin = io::stdin();
        prompt_sequence(stdin.lock(), &mut out)?
    };

    let report = sort_and_report(&mut data, &mut out, args.quiet)?;
    tracing::info!(len = data.len(), passes = report.passes, "sorted");

    Ok(())
}
