//! Pension projection CLI
//!
//! Runs a single projection, a retirement-age sweep, or the HTTP service.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::fs::File;
use std::path::PathBuf;

use pension_system::{
    api,
    report::{format_summary, write_schedule_csv},
    Assumptions, PensionCalculatorInput, ProjectionConfig, ProjectionEngine, ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(name = "pension_system", version, about = "Multi-tier pension benefit projection")]
struct Cli {
    /// Directory holding parameters.csv; built-in defaults are used when omitted
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project one member and print the benefit summary
    Project {
        #[command(flatten)]
        input: InputArgs,

        /// Write the year-by-year schedule to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the full result as JSON instead of the summary
        #[arg(long)]
        json: bool,

        /// Keep full precision in JSON output
        #[arg(long, requires = "json")]
        full_precision: bool,
    },
    /// Compare outcomes across several retirement ages
    Sweep {
        #[command(flatten)]
        input: InputArgs,

        /// Candidate retirement ages
        #[arg(long, value_delimiter = ',', default_values_t = vec![55, 60, 65])]
        ages: Vec<u32>,
    },
    /// Serve POST /pension-projection over HTTP
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[derive(Debug, Args)]
struct InputArgs {
    #[arg(long, default_value_t = 30)]
    current_age: u32,
    #[arg(long, default_value_t = 5000.0)]
    salary: f64,
    #[arg(long, default_value_t = 0)]
    months_contributed: u32,
    /// Annual salary growth, percent
    #[arg(long, default_value_t = 3.0)]
    salary_growth: f64,
    /// Tier 2 contribution, percent of salary
    #[arg(long, default_value_t = 8.0)]
    tier2_contribution: f64,
    /// Tier 3 contribution, percent of salary
    #[arg(long, default_value_t = 5.0)]
    tier3_contribution: f64,
    #[arg(long, default_value_t = 10.0)]
    tier2_growth: f64,
    #[arg(long, default_value_t = 12.0)]
    tier3_growth: f64,
    #[arg(long, default_value_t = 60)]
    retirement_age: u32,
}

impl From<InputArgs> for PensionCalculatorInput {
    fn from(args: InputArgs) -> Self {
        Self {
            current_age: args.current_age,
            current_monthly_salary: args.salary,
            months_contributed: args.months_contributed,
            annual_salary_growth_rate: args.salary_growth,
            tier2_contribution_percent: args.tier2_contribution,
            tier3_contribution_percent: args.tier3_contribution,
            tier2_investment_growth_rate: args.tier2_growth,
            tier3_investment_growth_rate: args.tier3_growth,
            retirement_age: args.retirement_age,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_ssnit(),
    };
    info!("using assumptions {:?}", assumptions);
    let engine = ProjectionEngine::new(assumptions, ProjectionConfig::default());

    match cli.command {
        Command::Project {
            input,
            csv,
            json,
            full_precision,
        } => {
            let result = engine.project(&input.into())?;

            if json {
                let shown = if full_precision { result.clone() } else { result.rounded() };
                println!("{}", serde_json::to_string_pretty(&shown)?);
            } else {
                print!("{}", format_summary(&result));
            }

            if let Some(path) = csv {
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                write_schedule_csv(file, &result)?;
                info!("schedule written to {}", path.display());
            }
        }
        Command::Sweep { input, ages } => {
            let runner = ScenarioRunner::with_assumptions(
                engine.assumptions().clone(),
                engine.config().clone(),
            );
            let input: PensionCalculatorInput = input.into();

            println!(
                "{:>4} {:>14} {:>14} {:>14} {:>10}  {}",
                "Age", "Tier1/mo", "Tier2 fund", "Tier3 fund", "Ratio %", "Readiness"
            );
            for point in runner.sweep_retirement_ages(&input, &ages) {
                match point.result {
                    Ok(result) => {
                        let e = result.rounded().benefit_estimate;
                        println!(
                            "{:>4} {:>14.0} {:>14.0} {:>14.0} {:>10.1}  {}",
                            point.retirement_age,
                            e.tier1_monthly_pension,
                            e.tier2_total_fund_value,
                            e.tier3_total_fund_value,
                            e.replacement_ratio_percent,
                            e.readiness_label,
                        );
                    }
                    Err(err) => println!("{:>4} skipped: {}", point.retirement_age, err),
                }
            }
        }
        Command::Serve { port } => {
            api::run_http_server(port, engine).await?;
        }
    }

    Ok(())
}
