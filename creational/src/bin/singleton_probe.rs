//! Hammers fresh holders with concurrent first-time callers and reports
//! how many distinct instances each strategy hands out.

use anyhow::{bail, Result};
use clap::Parser;

use creational::demo::{run_probe, Strategy};

/// Concurrent first-access probe for the singleton holders
#[derive(Parser, Debug)]
#[command(name = "singleton-probe")]
#[command(about = "Concurrent first-access probe for the singleton holders")]
struct Cli {
    /// Concurrent callers per trial
    #[arg(short, long, default_value_t = 100)]
    threads: usize,

    /// Trials per strategy, each on a fresh holder
    #[arg(long, default_value_t = 1)]
    trials: usize,

    /// Strategies to probe (repeatable)
    #[arg(short, long, value_enum, default_values_t = [Strategy::Once])]
    strategy: Vec<Strategy>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    creational::logging::init(cli.verbose);

    let mut defective = Vec::new();
    for strategy in cli.strategy {
        let summary = run_probe(strategy, cli.threads, cli.trials)?;
        println!("{summary}");
        if !summary.passed() {
            defective.push(strategy.to_string());
        }
    }

    if !defective.is_empty() {
        bail!("duplicate instances observed for: {}", defective.join(", "));
    }
    Ok(())
}
