//! nelta CLI - load a CSV file and print a slice of it

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use nelta::ingestion::{LoadOptions, LoadRequest, LogObserver};
use nelta::{LabeledTable, TableSelection, Value};

#[derive(Parser)]
#[command(name = "nelta")]
#[command(author, version, about = "Load a CSV file into a labeled table and print it")]
struct Cli {
    /// Input CSV file (first line is the header)
    input: PathBuf,

    /// Print the first N rows
    #[arg(long, default_value = "5", conflicts_with = "tail")]
    head: usize,

    /// Print the last N rows instead
    #[arg(long)]
    tail: Option<usize>,

    /// Select column(s) by label before printing (repeatable)
    #[arg(short, long = "column")]
    columns: Vec<String>,

    /// Field delimiter (default: comma)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(if cli.verbose {
        "debug"
    } else {
        "warn"
    }))
    .init();

    if !cli.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", cli.delimiter);
    }

    let request = LoadRequest {
        path: cli.input.clone(),
        options: LoadOptions {
            delimiter: cli.delimiter as u8,
            observer: Some(Arc::new(LogObserver)),
            ..Default::default()
        },
    };
    let table = request
        .run()
        .with_context(|| format!("failed to load {}", cli.input.display()))?;

    let (rows, cols) = table.shape();
    println!("shape: {rows} rows x {cols} columns");

    let table = project(table, &cli.columns)?;
    match cli.tail {
        Some(n) => print!("{}", table.tail(n)),
        None => print!("{}", table.head(cli.head)),
    }

    Ok(())
}

/// Narrow to the requested columns, keeping a table shape for printing.
fn project(table: LabeledTable, columns: &[String]) -> Result<LabeledTable> {
    match columns {
        [] => Ok(table),
        [single] => match table.select(single.as_str()).context("column selection failed")? {
            TableSelection::Table(t) => Ok(t),
            TableSelection::Sequence(seq) => {
                let rows = seq.values().iter().map(|v| vec![v.clone()]).collect();
                Ok(LabeledTable::with_labels(
                    rows,
                    seq.index().to_vec(),
                    vec![Value::from(single.as_str())],
                )?)
            }
        },
        many => {
            let selected = table
                .select(many.to_vec())
                .context("column selection failed")?;
            selected
                .into_table()
                .context("column list selection did not produce a table")
        }
    }
}
