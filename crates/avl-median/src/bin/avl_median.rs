//! `avl-median` — build AVL trees and check their medians.
//!
//! Usage:
//!   avl-median build <values>...
//!   avl-median fuzz [--tests N] [--len L] [--seed S]
//!
//! Every run prints the rotated tree, the ascending row, the tree median and
//! the sorted reference median. `--json` emits one JSON report per line
//! instead. Logs go to stderr; `RUST_LOG` overrides `--verbose`.

use std::collections::HashSet;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use avl_median::fuzzer::Fuzzer;
use avl_median::scenario::{run_random, run_scenario, ScenarioReport};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

const RULE: &str =
    "#########################################################################";

/// Spaces of indentation per tree level in the rotated view.
const INDENT: usize = 7;

#[derive(Parser)]
#[command(name = "avl-median")]
#[command(about = "AVL tree builder with single-pass median", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print reports as JSON lines
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree from the given values (duplicates are removed)
    Build {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i32>,
    },

    /// Build trees from random distinct values
    Fuzz {
        /// Number of runs
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        tests: u32,

        /// Values per run
        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
        len: u32,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let reports = match cli.command {
        Commands::Build { values } => {
            let mut seen = HashSet::new();
            let values: Vec<i32> = values.into_iter().filter(|v| seen.insert(*v)).collect();
            vec![run_scenario(&values).context("building tree from input values")?]
        }
        Commands::Fuzz { tests, len, seed } => {
            let mut fuzzer = Fuzzer::new(seed);
            run_random(&mut fuzzer, tests as usize, len as usize)
                .with_context(|| format!("random run with seed {}", fuzzer.seed))?
        }
    };

    let mut out = io::stdout().lock();
    for (i, report) in reports.iter().enumerate() {
        if cli.json {
            serde_json::to_writer(&mut out, report)?;
            writeln!(out)?;
        } else {
            write_report(&mut out, i + 1, report)?;
        }
    }
    out.flush()?;

    let failed = reports.iter().filter(|r| !r.succeeded()).count();
    if failed > 0 {
        bail!("{failed} of {} runs disagreed with the reference median", reports.len());
    }
    Ok(())
}

fn write_report(out: &mut impl Write, n: usize, report: &ScenarioReport) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, " Run {n}")?;
    writeln!(out, "{RULE}")?;

    let input: Vec<String> = report.input.iter().map(i32::to_string).collect();
    writeln!(out, "Adding the following elements: {}", input.join(" "))?;
    writeln!(out)?;

    writeln!(out, "Display as tree (rotated):")?;
    for row in &report.tree.rows {
        writeln!(out, "{}{}", " ".repeat(row.depth * INDENT), row.value)?;
    }
    writeln!(out)?;

    let row: Vec<String> = report.tree.values.iter().map(i32::to_string).collect();
    writeln!(out, "Display as array:")?;
    writeln!(out, "{}", row.join(" "))?;
    writeln!(out)?;

    writeln!(out, "Calculated  median: {}", report.median)?;
    writeln!(out, "Groundtruth median: {}", report.reference)?;
    writeln!(out)?;
    if report.succeeded() {
        writeln!(out, "Status [SUCCEEDED]")?;
    } else {
        writeln!(out, "Status [FAILED]")?;
    }
    writeln!(out, "{RULE}")?;
    writeln!(out)
}
