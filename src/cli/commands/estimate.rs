//! Estimate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{EstimateArgs, OutputFormat};
use crate::roofline::{float8_mem_time_expr, Float8MemParams, GemmTimeSource};
use crate::sweep::estimate_row;

pub fn run_estimate(args: EstimateArgs, level: LogLevel) -> Result<(), String> {
    let source = GemmTimeSource::resolve(
        args.model.strategy,
        args.model.gemm_benchmarks_file.as_deref(),
    )
    .map_err(|e| e.to_string())?;

    let mem_time = float8_mem_time_expr(Float8MemParams {
        scaling_input: args.model.scaling_input,
        scaling_weight: args.model.scaling_weight,
        scaling_grad_output: args.model.scaling_grad_output,
        model_compile_limitations: args.model.model_compile_limitations,
    });

    let row = estimate_row(&source, &mem_time, args.m, args.k, args.n)
        .map_err(|e| e.to_string())?;

    if args.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&row).map_err(|e| e.to_string())?;
        println!("{json}");
    } else {
        log(
            level,
            LogLevel::Normal,
            &format!("Shape (M, K, N): ({}, {}, {})", row.m, row.k, row.n),
        );
        log(level, LogLevel::Verbose, &format!("  fp8_mem_time_s = {mem_time}"));
        log(
            level,
            LogLevel::Normal,
            &format!("  bf16_time_s:     {:.6e}", row.bf16_time_s),
        );
        log(
            level,
            LogLevel::Normal,
            &format!("  fp8_gemm_time_s: {:.6e}", row.fp8_gemm_time_s),
        );
        log(
            level,
            LogLevel::Normal,
            &format!("  fp8_mem_time_s:  {:.6e}", row.fp8_mem_time_s),
        );
        log(
            level,
            LogLevel::Normal,
            &format!("  fp8_time_s:      {:.6e}", row.fp8_time_s),
        );
        log(
            level,
            LogLevel::Normal,
            &format!("  speedup:         {:.4}x", row.speedup),
        );
    }

    Ok(())
}
