//! Roofline gemm time estimates
//!
//! A linear layer's training step runs three gemms, each performing
//! 2*M*K*N multiply-accumulate ops:
//!
//! ```text
//! input   @ weight_t    = output       MxK @ KxN => MxN
//! grad_output @ weight  = grad_input   MxN @ NxK => MxK
//! input_t @ grad_output = grad_weight  KxM @ MxN => KxN
//! ```

use super::expr::CostExpr;
use super::hardware::{H100_BF16_PEAK_OPS_SEC, H100_FP8_PEAK_OPS_SEC, PCT_ACHIEVABLE_GEMM_OPS};

/// Gemm operand precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GemmPrecision {
    Bf16,
    Float8,
}

impl GemmPrecision {
    fn peak_ops_sec(self) -> f64 {
        match self {
            GemmPrecision::Bf16 => H100_BF16_PEAK_OPS_SEC,
            GemmPrecision::Float8 => H100_FP8_PEAK_OPS_SEC,
        }
    }
}

/// Closed-form total time of the three fwd+bwd gemms of a linear layer.
///
/// Total work is 6*M*K*N ops, derated to the achievable fraction of peak
/// tensor-core throughput.
pub fn gemm_time_expr(precision: GemmPrecision) -> CostExpr {
    CostExpr::mkn(6.0 / (precision.peak_ops_sec() * PCT_ACHIEVABLE_GEMM_OPS))
}
