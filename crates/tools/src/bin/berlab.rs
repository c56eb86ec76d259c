//! berlab - BER sweep tool for coded BPSK links

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use berlab_sim::sweep::sweep_ber;
use berlab_tools::{report, OutputFormat, SweepArgs};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().init();

    let args = SweepArgs::parse();
    let config = args.to_sweep_config();
    info!(
        start_db = config.start_db,
        end_db = config.end_db,
        step_db = config.step_db,
        channel = ?config.channel_type,
        code = ?config.code_type,
        trials = config.trial_size,
        seed = config.seed,
        "running BER sweep"
    );

    let points = sweep_ber(&config).context("BER sweep failed")?;

    let rendered = match args.format {
        OutputFormat::Table => report::to_table(&points),
        OutputFormat::Csv => report::to_csv(&points),
        OutputFormat::Json => report::to_json(&points)?,
    };
    print!("{rendered}");

    Ok(())
}
