//! Result-table rendering and persistence

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use super::{ResultRow, RESULT_HEADERS};

/// Render the result table for console output, with a leading row index and
/// right-aligned columns
pub fn render_table(rows: &[ResultRow]) -> String {
    let cells: Vec<[String; 8]> = rows
        .iter()
        .map(|r| {
            [
                r.m.to_string(),
                r.k.to_string(),
                r.n.to_string(),
                format!("{:.6e}", r.bf16_time_s),
                format!("{:.6e}", r.fp8_gemm_time_s),
                format!("{:.6e}", r.fp8_mem_time_s),
                format!("{:.6e}", r.fp8_time_s),
                format!("{:.4}", r.speedup),
            ]
        })
        .collect();

    let idx_width = rows.len().saturating_sub(1).to_string().len();
    let mut widths: Vec<usize> = RESULT_HEADERS.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let _ = write!(out, "{:>width$}", "", width = idx_width);
    for (header, width) in RESULT_HEADERS.iter().zip(widths.iter().copied()) {
        let _ = write!(out, "  {header:>width$}");
    }
    out.push('\n');
    for (idx, row) in cells.iter().enumerate() {
        let _ = write!(out, "{idx:>width$}", width = idx_width);
        for (cell, width) in row.iter().zip(widths.iter().copied()) {
            let _ = write!(out, "  {cell:>width$}");
        }
        out.push('\n');
    }
    out
}

/// Persist rows as a comma-delimited table with a leading, unnamed row
/// index column
pub fn write_csv(path: &Path, rows: &[ResultRow]) -> io::Result<()> {
    let mut out = String::new();
    out.push(',');
    out.push_str(&RESULT_HEADERS.join(","));
    out.push('\n');
    for (idx, r) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{idx},{},{},{},{},{},{},{},{}",
            r.m,
            r.k,
            r.n,
            r.bf16_time_s,
            r.fp8_gemm_time_s,
            r.fp8_mem_time_s,
            r.fp8_time_s,
            r.speedup
        );
    }
    fs::write(path, out)
}
