//! CLI configuration for the berlab sweep tool

use clap::{Parser, ValueEnum};

use berlab_channel::model::ChannelType;
use berlab_fec::scheme::CodeType;
use berlab_sim::ber::DEFAULT_TRIAL_SIZE;
use berlab_sim::sweep::SweepConfig;

/// BER-vs-SNR sweep over a coded BPSK link
#[derive(Debug, Clone, Parser)]
#[command(name = "berlab", version, about)]
pub struct SweepArgs {
    /// First Eb/N0 point in dB (inclusive)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub start: i32,

    /// Last Eb/N0 point in dB (inclusive)
    #[arg(long, default_value_t = 15, allow_hyphen_values = true)]
    pub end: i32,

    /// Eb/N0 step in dB
    #[arg(long, default_value_t = 2)]
    pub step: i32,

    /// Channel noise model
    #[arg(long, value_enum, default_value = "awgn")]
    pub channel: ChannelArg,

    /// FEC scheme
    #[arg(long, value_enum, default_value = "none")]
    pub code: CodeArg,

    /// Message bits per SNR point
    #[arg(long, default_value_t = DEFAULT_TRIAL_SIZE)]
    pub trials: usize,

    /// Base RNG seed; omit for a random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl SweepArgs {
    /// Build the simulation config, drawing a fresh seed when none is given.
    pub fn to_sweep_config(&self) -> SweepConfig {
        SweepConfig {
            start_db: self.start,
            end_db: self.end,
            step_db: self.step,
            channel_type: self.channel.into(),
            code_type: self.code.into(),
            trial_size: self.trials,
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }
}

/// Channel selector on the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChannelArg {
    Awgn,
    Rayleigh,
}

impl From<ChannelArg> for ChannelType {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::Awgn => ChannelType::Awgn,
            ChannelArg::Rayleigh => ChannelType::Rayleigh,
        }
    }
}

/// Code selector on the CLI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodeArg {
    None,
    Rep3,
    Rep5,
    Hamming74,
    Hamming1511,
}

impl From<CodeArg> for CodeType {
    fn from(arg: CodeArg) -> Self {
        match arg {
            CodeArg::None => CodeType::None,
            CodeArg::Rep3 => CodeType::Rep3,
            CodeArg::Rep5 => CodeType::Rep5,
            CodeArg::Hamming74 => CodeType::Hamming74,
            CodeArg::Hamming1511 => CodeType::Hamming1511,
        }
    }
}

/// Sweep output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}
