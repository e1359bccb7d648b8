//! Hardware model constants for an NVIDIA H100 SXM
//!
//! The roofline gemm estimates and the float8 conversion overhead model are
//! parameterized by the figures below. Tensor-core throughputs are the
//! dense (no sparsity) datasheet numbers; the achievable fractions come
//! from measured large-shape gemm and pointwise-kernel utilization.

/// Peak dense bf16 tensor-core throughput, ops per second
pub const H100_BF16_PEAK_OPS_SEC: f64 = 989e12;

/// Peak dense float8 tensor-core throughput, ops per second
pub const H100_FP8_PEAK_OPS_SEC: f64 = 1979e12;

/// Peak HBM bandwidth, bytes per second
pub const H100_PEAK_MEM_BW_BYTES_SEC: f64 = 2.4e12;

/// Fraction of peak gemm throughput achievable on large shapes
pub const PCT_ACHIEVABLE_GEMM_OPS: f64 = 0.6;

/// Fraction of peak memory bandwidth achievable by pointwise cast kernels
/// with large inputs
pub const PCT_ACHIEVABLE_MEM_BW: f64 = 0.92;

/// GPU time of a kernel that reads and writes O(1) elements, in seconds
pub const KERNEL_LAUNCH_OVERHEAD_SEC: f64 = 2e-6;

/// Bytes per bf16 element
pub const BYTES_PER_EL_BF16: f64 = 2.0;

/// Bytes per float8 element
pub const BYTES_PER_EL_FLOAT8: f64 = 1.0;
