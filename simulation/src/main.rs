use anyhow::Context as _;
use clap::Parser;
use pnyx_simulation::{ScenarioConfig, ScenarioRunner};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pnyx-sim")]
#[command(about = "Replay an exchange scenario and check it is deterministic")]
struct Args {
    /// Path to scenario configuration file
    #[arg(short, long, default_value = "scenarios/basic.toml")]
    config: String,

    /// Override the number of independent replays
    #[arg(short, long)]
    runs: Option<u32>,

    /// Print the final exported genesis as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = ScenarioConfig::load(&args.config)
        .with_context(|| format!("loading scenario {}", args.config))?;
    let runs = args.runs.unwrap_or(config.runs);
    if runs == 0 {
        anyhow::bail!("--runs must be at least 1");
    }

    info!(scenario = %config.name, txs = config.transactions.len(), "loaded scenario");

    let runner = ScenarioRunner::new(config)?;
    let summary = runner.run(runs)?;

    for outcome in &summary.report.outcomes {
        match &outcome.error {
            None => info!(index = outcome.index, height = outcome.height, events = outcome.events, "committed"),
            Some(err) => warn!(index = outcome.index, height = outcome.height, error = %err, "rejected (expected)"),
        }
    }
    for event in &summary.report.events {
        info!(event = event.name(), attributes = ?event.attributes(), "event");
    }

    println!("scenario:  {}", summary.name);
    println!("runs:      {}", summary.runs);
    println!("committed: {}", summary.committed());
    println!("rejected:  {}", summary.rejected());
    println!("digest:    {}", summary.report.state_digest);

    if args.json {
        let json = serde_json::to_string_pretty(&summary.report.final_state)
            .context("serializing final state")?;
        println!("{}", json);
    }

    Ok(())
}
