//! estimar: float8 linear-layer speedup estimation
//!
//! Estimates the latency benefit of replacing the bf16 gemms in the forward
//! and backward passes of a linear layer with float8 gemms, accounting for
//! the memory traffic of converting tensors to and from float8.
//!
//! Gemm times come either from a precomputed benchmark table or from a
//! roofline model of an NVIDIA H100. Conversion overhead is modeled by
//! counting the memory reads and writes each scaling policy requires and
//! charging them against the achievable fraction of peak bandwidth.
//!
//! The three gemms of a linear layer's training step, with their shapes:
//!
//! ```text
//! input   @ weight_t    = output       MxK @ KxN => MxN
//! grad_output @ weight  = grad_input   MxN @ NxK => MxK
//! input_t @ grad_output = grad_weight  KxM @ MxN => KxN
//! ```

pub mod cli;
pub mod config;
pub mod roofline;
pub mod sweep;
