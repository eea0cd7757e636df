//! Run projections for a whole members file
//!
//! Usage: run_batch <members.csv> [summary.csv] [--assumptions <dir>]

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use pension_system::{load_members, report::write_batch_summary_csv, ScenarioRunner};

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Project every member in a CSV file")]
struct Args {
    /// Members CSV (MemberID, CurrentAge, CurrentMonthlySalary, ...)
    members: PathBuf,

    /// Summary output path
    #[arg(default_value = "batch_projection_output.csv")]
    output: PathBuf,

    /// Directory holding parameters.csv
    #[arg(long)]
    assumptions: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let members = load_members(&args.members)
        .with_context(|| format!("loading members from {}", args.members.display()))?;
    info!("loaded {} members in {:?}", members.len(), start.elapsed());

    let runner = match &args.assumptions {
        Some(dir) => ScenarioRunner::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => ScenarioRunner::new(),
    };

    let proj_start = Instant::now();
    let outcomes = runner.run_batch(&members);
    info!("projections complete in {:?}", proj_start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_batch_summary_csv(file, &outcomes)?;

    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    println!(
        "{} members projected, {} rejected; summary written to {}",
        outcomes.len() - rejected,
        rejected,
        args.output.display()
    );
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
