// File: crates/demo/src/main.rs
// Summary: Demo loads waterfall entries from CSV (or a built-in sample), computes bar ranges and prints them.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};
use waterfall_core::{compute, final_total, load_entries_csv, try_compute, RawEntry, ValueExtent, WaterfallDatum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "waterfall-demo", about = "Compute waterfall bar ranges from signed contributions")]
struct Cli {
    /// CSV with `name,value[,is_total]` columns; omit to use the built-in sample
    input: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,
    /// Reject NaN/infinite values instead of passing them through
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let entries = match &cli.input {
        Some(path) => load_entries_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            info!("no input given, using built-in sample");
            sample_entries()
        }
    };
    info!(entries = entries.len(), strict = cli.strict, "computing waterfall ranges");

    if entries.is_empty() {
        warn!("no entries loaded; output will be empty");
    }

    let data = if cli.strict {
        try_compute(&entries).context("strict validation failed")?
    } else {
        compute(&entries)
    };

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&data).context("serialize ranges")?;
            println!("{json}");
        }
        Format::Table => print_table(&data, final_total(&entries)),
    }
    Ok(())
}

fn print_table(data: &[WaterfallDatum], total: f64) {
    let width = data.iter().map(|d| d.name.len()).max().unwrap_or(4).max(4);
    println!("{:<width$}  {:<8}  {:>12}  {:>12}  {:>12}", "name", "kind", "value", "bottom", "top");
    for d in data {
        println!(
            "{:<width$}  {:<8}  {:>12.2}  {:>12.2}  {:>12.2}",
            d.name,
            d.kind().as_str(),
            d.value,
            d.bottom(),
            d.top()
        );
    }
    let ext = ValueExtent::from_data(data);
    println!();
    println!("Running total: {total:.2}");
    println!("Value extent: [{:.2}, {:.2}]", ext.min, ext.max);
}

/// Profit-and-loss sample shipped with the docs example.
fn sample_entries() -> Vec<RawEntry> {
    vec![
        RawEntry::new("Revenue", 420.0),
        RawEntry::new("Services", 210.0),
        RawEntry::new("Fixed costs", -170.0),
        RawEntry::new("Variable costs", -120.0),
        RawEntry::new("Taxes", -60.0),
        RawEntry::total("Profit", 280.0),
    ]
}
