//! Sweep command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::SweepArgs;
use crate::roofline::{float8_mem_time_expr, Float8MemParams, GemmTimeSource};
use crate::sweep::{pow2_grid, render_table, write_csv};

pub fn run_sweep(args: SweepArgs, level: LogLevel) -> Result<(), String> {
    let grid = pow2_grid(args.pow2_min, args.pow2_max).map_err(|e| e.to_string())?;

    // validate the strategy/table combination before building any formula
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

    log(level, LogLevel::Normal, &format!("fp8_mem_time_s = {mem_time}"));
    if let GemmTimeSource::Roofline { bf16, fp8 } = &source {
        log(level, LogLevel::Normal, &format!("bf16_gemm_time_s = {bf16}"));
        log(level, LogLevel::Normal, &format!("fp8_gemm_time_s = {fp8}"));
    }

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Sweeping {n} x {n} x {n} = {total} shape combinations",
            n = grid.len(),
            total = grid.len().pow(3)
        ),
    );

    let rows = crate::sweep::run_sweep(&source, &mem_time, &grid).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, &render_table(&rows));
    write_csv(&args.outfile, &rows)
        .map_err(|e| format!("Failed to write {}: {e}", args.outfile.display()))?;
    log(
        level,
        LogLevel::Normal,
        &format!("Wrote {} rows to {}", rows.len(), args.outfile.display()),
    );

    Ok(())
}
