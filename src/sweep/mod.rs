//! Shape-grid sweep over the cost model
//!
//! Iterates the full cross-product of a powers-of-two grid over M, K and N,
//! producing one derived [`ResultRow`] per combination. The sweep is
//! fail-fast: the first lookup miss aborts with no partial rows.

mod report;

pub use report::{render_table, write_csv};

use serde::Serialize;

use crate::config::ConfigError;
use crate::roofline::{CostExpr, GemmTimeSource, ModelError};

/// One derived result per swept (M, K, N) combination; never mutated after
/// creation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRow {
    pub m: u64,
    pub k: u64,
    pub n: u64,
    pub bf16_time_s: f64,
    pub fp8_gemm_time_s: f64,
    pub fp8_mem_time_s: f64,
    pub fp8_time_s: f64,
    pub speedup: f64,
}

/// Column order of the persisted result table
pub const RESULT_HEADERS: [&str; 8] = [
    "M",
    "K",
    "N",
    "bf16_time_s",
    "fp8_gemm_time_s",
    "fp8_mem_time_s",
    "fp8_time_s",
    "speedup",
];

/// Powers of two from 2^pow2_min to 2^pow2_max inclusive
pub fn pow2_grid(pow2_min: u32, pow2_max: u32) -> Result<Vec<u64>, ConfigError> {
    if pow2_min > pow2_max {
        return Err(ConfigError::InvalidGridBounds(pow2_min, pow2_max));
    }
    if pow2_max >= u64::BITS {
        return Err(ConfigError::GridBoundTooLarge(pow2_max));
    }
    Ok((pow2_min..=pow2_max).map(|x| 1u64 << x).collect())
}

/// Estimate one layer shape
pub fn estimate_row(
    source: &GemmTimeSource,
    mem_time: &CostExpr,
    m: u64,
    k: u64,
    n: u64,
) -> Result<ResultRow, ModelError> {
    let gemm = source.times(m, k, n)?;
    let fp8_mem_time_s = mem_time.eval(m, k, n);
    let fp8_time_s = gemm.fp8_s + fp8_mem_time_s;
    Ok(ResultRow {
        m,
        k,
        n,
        bf16_time_s: gemm.bf16_s,
        fp8_gemm_time_s: gemm.fp8_s,
        fp8_mem_time_s,
        fp8_time_s,
        speedup: gemm.bf16_s / fp8_time_s,
    })
}

/// Run the full cross-product sweep over the grid, one row per combination
pub fn run_sweep(
    source: &GemmTimeSource,
    mem_time: &CostExpr,
    grid: &[u64],
) -> Result<Vec<ResultRow>, ModelError> {
    let mut rows = Vec::with_capacity(grid.len().pow(3));
    for &m in grid {
        for &k in grid {
            for &n in grid {
                rows.push(estimate_row(source, mem_time, m, k, n)?);
            }
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GemmTimeStrategy, ScalingPolicy};
    use crate::roofline::{float8_mem_time_expr, Float8MemParams};
    use std::collections::HashSet;

    fn roofline_source() -> GemmTimeSource {
        GemmTimeSource::resolve(GemmTimeStrategy::Roofline, None).unwrap()
    }

    fn all_dynamic_mem() -> CostExpr {
        float8_mem_time_expr(Float8MemParams {
            scaling_input: ScalingPolicy::Dynamic,
            scaling_weight: ScalingPolicy::Dynamic,
            scaling_grad_output: ScalingPolicy::Dynamic,
            model_compile_limitations: false,
        })
    }

    #[test]
    fn test_pow2_grid_values() {
        assert_eq!(pow2_grid(9, 11).unwrap(), vec![512, 1024, 2048]);
        assert_eq!(pow2_grid(9, 9).unwrap(), vec![512]);
    }

    #[test]
    fn test_pow2_grid_rejects_inverted_bounds() {
        assert!(matches!(
            pow2_grid(12, 9).unwrap_err(),
            ConfigError::InvalidGridBounds(12, 9)
        ));
    }

    #[test]
    fn test_pow2_grid_rejects_oversized_bound() {
        assert!(matches!(
            pow2_grid(9, 64).unwrap_err(),
            ConfigError::GridBoundTooLarge(64)
        ));
    }

    #[test]
    fn test_sweep_visits_every_combination_once() {
        let grid = pow2_grid(9, 12).unwrap();
        let rows = run_sweep(&roofline_source(), &all_dynamic_mem(), &grid).unwrap();
        assert_eq!(rows.len(), grid.len().pow(3));
        let unique: HashSet<(u64, u64, u64)> = rows.iter().map(|r| (r.m, r.k, r.n)).collect();
        assert_eq!(unique.len(), rows.len());
    }

    #[test]
    fn test_row_totals_are_consistent() {
        let rows = run_sweep(&roofline_source(), &all_dynamic_mem(), &[512, 1024]).unwrap();
        for row in rows {
            assert_eq!(row.fp8_time_s, row.fp8_gemm_time_s + row.fp8_mem_time_s);
            assert_eq!(row.speedup, row.bf16_time_s / row.fp8_time_s);
            assert!(row.speedup > 0.0);
        }
    }

    #[test]
    fn test_sweep_is_deterministic() {
        let grid = pow2_grid(9, 10).unwrap();
        let a = run_sweep(&roofline_source(), &all_dynamic_mem(), &grid).unwrap();
        let b = run_sweep(&roofline_source(), &all_dynamic_mem(), &grid).unwrap();
        assert_eq!(a, b);
    }
}
