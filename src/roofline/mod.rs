//! Roofline cost model for float8 linear-layer conversion
//!
//! Combines three pieces:
//! - a closed-form gemm time estimate per precision ([`gemm_time_expr`]),
//!   or measured gemm times from a benchmark table ([`GemmTimeTable`]);
//! - a memory-traffic model for the float8 cast overhead
//!   ([`float8_mem_time_expr`]);
//! - the H100 peak figures both are derated against ([`hardware`]).

mod expr;
mod gemm;
mod mem;
mod table;

pub mod hardware;

pub use expr::CostExpr;
pub use gemm::{gemm_time_expr, GemmPrecision};
pub use mem::{float8_mem_time_expr, Float8MemParams};
pub use table::{GemmTimeTable, TableError};

use std::path::Path;

use thiserror::Error;

use crate::config::{ConfigError, GemmTimeStrategy};

/// Total fwd+bwd gemm time for one layer shape, per precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GemmTimes {
    pub bf16_s: f64,
    pub fp8_s: f64,
}

/// Errors from resolving or querying a gemm timing source
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),
}

/// Resolved source of gemm timings for a swept shape
#[derive(Debug)]
pub enum GemmTimeSource {
    /// Measured timings from a precomputed benchmark table
    Table(GemmTimeTable),
    /// Closed-form roofline estimates, one expression per precision
    Roofline { bf16: CostExpr, fp8: CostExpr },
}

impl GemmTimeSource {
    /// Resolve a timing source from the configured strategy.
    ///
    /// The benchmarks strategy requires a table path; its absence is a
    /// validation error raised before any file access.
    pub fn resolve(
        strategy: GemmTimeStrategy,
        table_path: Option<&Path>,
    ) -> Result<Self, ModelError> {
        match strategy {
            GemmTimeStrategy::Benchmarks => {
                let path = table_path.ok_or(ConfigError::MissingBenchmarksFile)?;
                Ok(GemmTimeSource::Table(GemmTimeTable::load(path)?))
            }
            GemmTimeStrategy::Roofline => Ok(GemmTimeSource::Roofline {
                bf16: gemm_time_expr(GemmPrecision::Bf16),
                fp8: gemm_time_expr(GemmPrecision::Float8),
            }),
        }
    }

    /// Total fwd+bwd gemm time for a layer shape, per precision.
    ///
    /// Fails fast on a missing table entry.
    pub fn times(&self, m: u64, k: u64, n: u64) -> Result<GemmTimes, ModelError> {
        match self {
            GemmTimeSource::Table(table) => Ok(table.linear_layer_times(m, k, n)?),
            GemmTimeSource::Roofline { bf16, fp8 } => Ok(GemmTimes {
                bf16_s: bf16.eval(m, k, n),
                fp8_s: fp8.eval(m, k, n),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_benchmarks_without_path_fails_before_any_file_access() {
        let err = GemmTimeSource::resolve(GemmTimeStrategy::Benchmarks, None).unwrap_err();
        assert!(matches!(
            err,
            ModelError::Config(ConfigError::MissingBenchmarksFile)
        ));
    }

    #[test]
    fn test_roofline_resolves_without_a_table() {
        let source = GemmTimeSource::resolve(GemmTimeStrategy::Roofline, None).unwrap();
        let times = source.times(4096, 4096, 4096).unwrap();
        assert!(times.bf16_s > 0.0);
        assert!(times.fp8_s > 0.0);
        assert!(times.fp8_s < times.bf16_s);
    }

    #[test]
    fn test_roofline_ignores_a_provided_table_path() {
        // roofline never opens the file, so a bogus path must not error
        let source = GemmTimeSource::resolve(
            GemmTimeStrategy::Roofline,
            Some(Path::new("/nonexistent/gemm_times.csv")),
        );
        assert!(source.is_ok());
    }
}
