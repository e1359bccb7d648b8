//! Precomputed gemm benchmark tables
//!
//! Parses the comma-delimited output of a gemm sweep benchmark into a
//! lookup keyed by (M, K, N, fast_accum) and answers the three-orientation
//! query for a linear layer's fwd+bwd gemms.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::GemmTimes;

/// Errors from loading or querying a gemm benchmark table
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to read benchmark table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed benchmark table row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("No benchmark entry for shape ({m}, {k}, {n}) with fast_accum={fast_accum}")]
    MissingEntry {
        m: u64,
        k: u64,
        n: u64,
        fast_accum: bool,
    },
}

/// Measured (bf16_time_s, fp8_time_s) pairs keyed by (M, K, N, fast_accum)
#[derive(Debug, Clone, Default)]
pub struct GemmTimeTable {
    entries: HashMap<(u64, u64, u64, bool), (f64, f64)>,
}

impl GemmTimeTable {
    /// Load a table from a comma-delimited benchmark file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let text = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse table text.
    ///
    /// The first line is a header and is skipped. Data rows have the layout
    /// `index,fast_accum,name,M,K,N,bf16_time_s,fp8_time_s,speedup`, where
    /// `fast_accum` is textual (`True` means true, anything else false) and
    /// `name` and `speedup` are ignored.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut entries = HashMap::new();
        for (idx, row) in text.lines().enumerate() {
            if idx == 0 || row.trim().is_empty() {
                continue;
            }
            let line = idx + 1;
            let fields: Vec<&str> = row.split(',').collect();
            if fields.len() != 9 {
                return Err(TableError::MalformedRow {
                    line,
                    reason: format!("expected 9 fields, found {}", fields.len()),
                });
            }
            let fast_accum = fields[1].trim() == "True";
            let m = parse_field::<u64>(fields[3], "M", line)?;
            let k = parse_field::<u64>(fields[4], "K", line)?;
            let n = parse_field::<u64>(fields[5], "N", line)?;
            let bf16_s = parse_field::<f64>(fields[6], "bf16_time_s", line)?;
            let fp8_s = parse_field::<f64>(fields[7], "fp8_time_s", line)?;
            entries.insert((m, k, n, fast_accum), (bf16_s, fp8_s));
        }
        Ok(GemmTimeTable { entries })
    }

    /// Number of keyed entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Timing pair for one gemm orientation
    fn lookup(&self, m: u64, k: u64, n: u64, fast_accum: bool) -> Result<(f64, f64), TableError> {
        self.entries
            .get(&(m, k, n, fast_accum))
            .copied()
            .ok_or(TableError::MissingEntry {
                m,
                k,
                n,
                fast_accum,
            })
    }

    /// Total fwd+bwd gemm times for a linear layer shape.
    ///
    /// Sums three orientations: forward `(M, K, N)` with fast accumulation,
    /// grad_input `(M, N, K)` and grad_weight `(K, M, N)` without.
    pub fn linear_layer_times(&self, m: u64, k: u64, n: u64) -> Result<GemmTimes, TableError> {
        let fwd = self.lookup(m, k, n, true)?;
        let grad_input = self.lookup(m, n, k, false)?;
        let grad_weight = self.lookup(k, m, n, false)?;
        Ok(GemmTimes {
            bf16_s: fwd.0 + grad_input.0 + grad_weight.0,
            fp8_s: fwd.1 + grad_input.1 + grad_weight.1,
        })
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str, line: usize) -> Result<T, TableError> {
    raw.trim().parse().map_err(|_| TableError::MalformedRow {
        line,
        reason: format!("invalid {name} value '{}'", raw.trim()),
    })
}
