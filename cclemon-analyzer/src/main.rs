use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use cclemon_stats::{Aggregate, WeightSuggestion, aggregate, load_reports, suggest_weights};

#[derive(Debug, Parser)]
#[command(name = "cclemon-analyzer", version)]
#[command(about = "Aggregate CC Lemon match reports and suggest CPU action weights")]
struct Args {
    /// Match report JSON files, aggregated in the order given
    #[arg(value_name = "REPORT")]
    reports: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.reports.is_empty() {
        print_usage();
        std::process::exit(1);
    }

    let paths = resolve_paths(&args.reports)?;
    let reports = load_reports(&paths)?;
    let agg = aggregate(&reports);
    let suggestion = suggest_weights(&agg);
    log::info!(
        "analyzed {} reports covering {} rounds",
        reports.len(),
        agg.total_rounds
    );

    let mut out = BufWriter::new(stdout());
    write_summary(&mut out, &agg, &suggestion)?;
    out.flush()?;
    Ok(())
}

fn print_usage() {
    eprintln!(
        "{} at least one report file is required",
        "error:".red().bold()
    );
    eprintln!();
    eprintln!("{}", Args::command().render_usage());
}

fn resolve_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    paths
        .iter()
        .map(PathBuf::as_path)
        .map(absolute_path)
        .collect()
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_context(|| format!("failed to resolve {}", path.display()))
}

fn write_summary(
    out: &mut impl Write,
    agg: &Aggregate,
    suggestion: &WeightSuggestion,
) -> Result<()> {
    writeln!(out, "Aggregated stats:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(agg)?)?;
    writeln!(out)?;
    writeln!(out, "Suggested CPU weights (charge/gun/guard):")?;
    writeln!(out, "{}", serde_json::to_string_pretty(suggestion)?)?;
    Ok(())
}
