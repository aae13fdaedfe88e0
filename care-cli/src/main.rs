use std::io;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use care_cli::app::{EstimateRequest, run_estimate};
use care_cli::{csv_loader, prompt};
use care_core::{BenefitType, CareGrade, CostTable, HomeService, ReductionTier};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Long-term-care cost calculator.
///
/// With `--grade`, `--benefit` and `--reduction` the estimate is computed
/// once and printed. Without them an interactive four-step wizard starts.
#[derive(Debug, Parser)]
struct Cli {
    /// Benefit year for the cost table.
    #[arg(long, default_value = "2025")]
    year: i32,

    /// CSV file overriding the built-in grade rates.
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Care grade: 1-5 or `cognitive`.
    #[arg(long)]
    grade: Option<String>,

    /// Benefit type: `home` or `facility`.
    #[arg(long)]
    benefit: Option<String>,

    /// Home-care sub-service (repeatable), e.g. `visiting-care`.
    #[arg(long = "home-service")]
    home_services: Vec<String>,

    /// Copay reduction tier: 0, 40, 60 or 100.
    #[arg(long)]
    reduction: Option<String>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── argument parsing helpers ────────────────────────────────────────────────

fn build_table(cli: &Cli) -> anyhow::Result<CostTable> {
    match &cli.rates {
        Some(path) => {
            debug!("loading grade rates from {}", path.display());
            let rates = csv_loader::load_from_file(path)
                .with_context(|| format!("failed to load rates from {}", path.display()))?;
            Ok(CostTable::from_rates(cli.year, rates))
        }
        None if cli.year == 2025 => Ok(CostTable::benefit_year_2025()),
        None => bail!(
            "no built-in cost table for {}; pass --rates with that year's CSV",
            cli.year
        ),
    }
}

fn parse_request(cli: &Cli) -> anyhow::Result<Option<EstimateRequest>> {
    let (Some(grade), Some(benefit), Some(reduction)) =
        (&cli.grade, &cli.benefit, &cli.reduction)
    else {
        if cli.grade.is_some() || cli.benefit.is_some() || cli.reduction.is_some() {
            bail!("one-shot mode needs all of --grade, --benefit and --reduction");
        }
        return Ok(None);
    };

    let grade =
        CareGrade::parse(grade).with_context(|| format!("unrecognised care grade '{grade}'"))?;
    let benefit_type = BenefitType::parse(benefit)
        .with_context(|| format!("unrecognised benefit type '{benefit}'"))?;
    let reduction_tier = ReductionTier::parse(reduction)
        .with_context(|| format!("unrecognised reduction tier '{reduction}'"))?;

    let home_services = cli
        .home_services
        .iter()
        .map(|s| {
            HomeService::parse(s).with_context(|| format!("unrecognised home service '{s}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Some(EstimateRequest {
        grade,
        benefit_type,
        home_services,
        reduction_tier,
    }))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let table = build_table(&cli)?;

    match parse_request(&cli)? {
        Some(request) => {
            let report = run_estimate(&table, &request)?;
            info!("{}", report);
        }
        None => {
            let stdin = io::stdin();
            prompt::run(stdin.lock(), io::stdout().lock(), &table)?;
        }
    }

    Ok(())
}
