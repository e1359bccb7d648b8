//! Estimar CLI
//!
//! Single-pass estimator for the end-to-end latency benefit of converting a
//! linear layer's bf16 gemms to float8, including the memory overhead of
//! casting tensors to and from the float8 format.
//!
//! # Usage
//!
//! ```bash
//! # Sweep a powers-of-two shape grid using measured gemm times
//! estimar sweep out.csv --gemm-benchmarks-file gemm_times.csv
//!
//! # Sweep with the closed-form H100 roofline model
//! estimar sweep out.csv --strategy roofline
//!
//! # Estimate a single layer shape
//! estimar estimate 4096 4096 16384 --strategy roofline --format json
//! ```

use clap::Parser;
use estimar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
