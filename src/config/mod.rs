//! CLI argument parsing and validation
//!
//! # Usage
//!
//! ```bash
//! estimar sweep out.csv --gemm-benchmarks-file gemm_times.csv
//! estimar sweep out.csv --strategy roofline --scaling-weight delayed
//! estimar estimate 4096 4096 16384 --strategy roofline
//! ```

mod core;
mod error;
mod types;

pub use core::{parse_args, Cli, Command, EstimateArgs, ModelArgs, SweepArgs};
pub use error::ConfigError;
pub use types::{GemmTimeStrategy, OutputFormat, ScalingPolicy};
