//! Session bot - plays a spinhall session from the command line
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]
//!
//! Options:
//!   -s, --seed       Seed for the session and the bot (default: 42)
//!   -a, --actions    Actions to play before exiting (default: 50)
//!   -t, --tick-ms    Delay between actions in ms, real and simulated (default: 500)
//!   -l, --log-level  Log level (default: info)
//!   -c, --config     YAML config file overriding the flags above

use anyhow::Result;
use clap::Parser;
use spinhall_spinbot::{Config, Spinbot};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scripted bot for spinhall sessions")]
struct Args {
    #[arg(short, long, default_value = "42")]
    seed: u64,

    #[arg(short, long, default_value = "50")]
    actions: u64,

    #[arg(short, long, default_value = "500")]
    tick_ms: u64,

    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config: Config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_yaml::from_str(&raw)?
        }
        None => Config {
            seed: args.seed,
            actions: args.actions,
            tick_ms: args.tick_ms,
            log_level: args.log_level.clone(),
        },
    };

    // Setup logging
    let level = tracing::Level::from_str(&config.log_level)?;
    tracing_subscriber::fmt().with_max_level(level).init();

    info!(
        seed = config.seed,
        actions = config.actions,
        tick_ms = config.tick_ms,
        "starting spinbot"
    );

    let mut bot = Spinbot::new(&config);
    for _ in 0..config.actions {
        bot.tick();
        if config.tick_ms > 0 {
            tokio::time::sleep(Duration::from_millis(config.tick_ms)).await;
        }
    }
    let summary = bot.finish();
    let snapshot = bot.snapshot();

    info!("=== SPINBOT RESULTS ===");
    info!(
        ticks = summary.ticks,
        spins = summary.spins,
        batches = summary.batches,
        reveals = summary.reveals,
        claims = summary.claims,
        payouts = summary.payouts,
        rejects = summary.rejects,
        level_ups = summary.level_ups,
        "run summary"
    );
    info!(
        coins = snapshot.economy.coins,
        gems = snapshot.economy.gems,
        vip_level = snapshot.economy.vip.level,
        coins_won = snapshot.stats.coins_won,
        "closing balances"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
