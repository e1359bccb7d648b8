//! Configuration validation errors
//!
//! Raised before any model computation or file access.

use thiserror::Error;

/// Validation error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--gemm-benchmarks-file is required when the gemm time strategy is 'benchmarks'")]
    MissingBenchmarksFile,

    #[error("Invalid grid bounds: --pow2-min {0} is greater than --pow2-max {1}")]
    InvalidGridBounds(u32, u32),

    #[error("Grid bound too large: 2^{0} does not fit a 64-bit dimension")]
    GridBoundTooLarge(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingBenchmarksFile;
        assert!(format!("{}", err).contains("--gemm-benchmarks-file is required"));

        let err = ConfigError::InvalidGridBounds(12, 9);
        assert!(format!("{}", err).contains("12"));
        assert!(format!("{}", err).contains("9"));
    }
}
