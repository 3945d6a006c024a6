use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use u_hillclimb::hc::HcConfig;
use u_hillclimb::io::{load_cities, write_route_csv, write_trace_csv};
use u_hillclimb::report::{leg_lengths, Summary};
use u_hillclimb::tsp::solve;

#[derive(Parser)]
#[command(name = "u-hillclimb")]
#[command(about = "Hill climbing route optimization over CSV city tables")]
#[command(version)]
struct Cli {
    /// CSV file with a header row and `name,x,y` records
    #[arg(default_value = "cities.csv")]
    input: PathBuf,

    /// Maximum number of accepted improvements
    #[arg(short = 'n', long, default_value_t = 1000)]
    max_iterations: usize,

    /// Seed for the initial route (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the final route as CSV
    #[arg(long)]
    route_out: Option<PathBuf>,

    /// Write the convergence trace as CSV
    #[arg(long)]
    trace_out: Option<PathBuf>,

    /// Print every leg of the final route
    #[arg(long)]
    legs: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let table = load_cities(&cli.input)?;
    info!(cities = table.len(), path = %cli.input.display(), "cities loaded");

    let mut config = HcConfig::default().with_max_iterations(cli.max_iterations);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let result = solve(&table.cities, &config);
    println!("{}", Summary::new(&result).with_names(&table.names));

    if cli.legs {
        for leg in leg_lengths(&result.best, &table.cities) {
            let from = table.name(leg.from).unwrap_or_default();
            let to = table.name(leg.to).unwrap_or_default();
            println!("  {from} -> {to}: {:.2}", leg.length);
        }
    }

    if let Some(path) = &cli.route_out {
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_route_csv(BufWriter::new(file), &table, &result.best)
            .with_context(|| format!("failed to write route to {}", path.display()))?;
        info!(path = %path.display(), "route written");
    }

    if let Some(path) = &cli.trace_out {
        if result.trace.is_empty() {
            warn!("no improvement recorded; trace not written");
        } else {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_trace_csv(BufWriter::new(file), &result.trace)
                .with_context(|| format!("failed to write trace to {}", path.display()))?;
            info!(path = %path.display(), "trace written");
        }
    }

    Ok(())
}
