//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::{GemmTimeStrategy, OutputFormat, ScalingPolicy};

/// Estimar: float8 linear-layer speedup estimator
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "estimar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(
    about = "Estimate the e2e latency benefit of converting a linear layer's gemms to float8"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Sweep a powers-of-two grid of (M, K, N) shapes and write a result table
    Sweep(SweepArgs),

    /// Estimate a single (M, K, N) layer shape
    Estimate(EstimateArgs),
}

/// Cost-model options shared by all commands
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ModelArgs {
    /// Gemm timing strategy (benchmarks, roofline)
    #[arg(long, default_value = "benchmarks")]
    pub strategy: GemmTimeStrategy,

    /// Path to a precomputed gemm benchmark table (required for the
    /// benchmarks strategy)
    #[arg(long)]
    pub gemm_benchmarks_file: Option<PathBuf>,

    /// Model the extra cast traffic caused by current compiler fusion
    /// limitations
    #[arg(long)]
    pub model_compile_limitations: bool,

    /// Scaling policy for the activation input (dynamic, delayed)
    #[arg(long, default_value = "dynamic")]
    pub scaling_input: ScalingPolicy,

    /// Scaling policy for the weight (dynamic, delayed)
    #[arg(long, default_value = "dynamic")]
    pub scaling_weight: ScalingPolicy,

    /// Scaling policy for the output gradient (dynamic, delayed)
    #[arg(long, default_value = "dynamic")]
    pub scaling_grad_output: ScalingPolicy,
}

/// Arguments for the sweep command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SweepArgs {
    /// Path to write the result table to
    #[arg(value_name = "OUTFILE")]
    pub outfile: PathBuf,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Smallest swept value per dimension, as a power of two (2^N)
    #[arg(long, default_value_t = 9)]
    pub pow2_min: u32,

    /// Largest swept value per dimension, as a power of two (2^N), inclusive
    #[arg(long, default_value_t = 15)]
    pub pow2_max: u32,
}

/// Arguments for the estimate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct EstimateArgs {
    /// M dimension (batch x sequence length)
    #[arg(value_name = "M", value_parser = clap::value_parser!(u64).range(1..))]
    pub m: u64,

    /// K dimension (input features)
    #[arg(value_name = "K", value_parser = clap::value_parser!(u64).range(1..))]
    pub k: u64,

    /// N dimension (output features)
    #[arg(value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub n: u64,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
