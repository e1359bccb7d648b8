//! Float8 conversion memory-traffic model
//!
//! Counts the bytes read and written by the kernels that cast linear-layer
//! tensors to float8 under each scaling policy, and converts the total to
//! time at the achievable fraction of peak memory bandwidth. Kernels that
//! touch O(1) elements (second-stage max-abs reductions, scale reciprocals)
//! are charged a fixed launch overhead instead of bandwidth.

use super::expr::CostExpr;
use super::hardware::{
    BYTES_PER_EL_BF16, BYTES_PER_EL_FLOAT8, H100_PEAK_MEM_BW_BYTES_SEC,
    KERNEL_LAUNCH_OVERHEAD_SEC, PCT_ACHIEVABLE_MEM_BW,
};
use crate::config::ScalingPolicy;

/// Scaling and fusion choices for the three tensors a linear layer casts
/// to float8
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Float8MemParams {
    pub scaling_input: ScalingPolicy,
    pub scaling_weight: ScalingPolicy,
    pub scaling_grad_output: ScalingPolicy,
    /// Model the extra unfused dual-layout cast pass of current compilers
    pub model_compile_limitations: bool,
}

/// Byte traffic per element for casting one bf16 tensor to float8.
///
/// The caller attaches the coefficient to the tensor's shape term
/// (M*K, K*N or M*N).
fn cast_traffic_bytes_per_el(
    scaling: ScalingPolicy,
    fuse_with_prev: bool,
    model_compile_limitations: bool,
) -> f64 {
    // unfused second cast pass: read and write the float8 tensor once more
    let extra_pass = if model_compile_limitations {
        2.0 * BYTES_PER_EL_FLOAT8
    } else {
        0.0
    };
    match scaling {
        ScalingPolicy::Dynamic => {
            // max-abs pass reads the bf16 tensor unless fused with the
            // producing op; the reduction output is negligible
            let max_abs_read = if fuse_with_prev { 0.0 } else { BYTES_PER_EL_BF16 };
            // cast kernel reads bf16 once and writes float8 twice
            // (row-major and col-major layouts)
            let cast_rw = BYTES_PER_EL_BF16 + 2.0 * BYTES_PER_EL_FLOAT8;
            max_abs_read + cast_rw + extra_pass
        }
        ScalingPolicy::Delayed => {
            // the max-abs pass and the cast share one kernel; it reads bf16
            // once unless fused, and writes float8 twice
            let read = if fuse_with_prev { 0.0 } else { BYTES_PER_EL_BF16 };
            let write = 2.0 * BYTES_PER_EL_FLOAT8;
            read + write + extra_pass
        }
    }
}

/// Number of O(1)-element kernels launched per casted tensor
fn small_kernel_count(scaling: ScalingPolicy) -> u32 {
    match scaling {
        // second stage of the max-abs reduction
        ScalingPolicy::Dynamic => 1,
        // second reduction stage plus the scale reciprocal
        ScalingPolicy::Delayed => 2,
    }
}

/// Closed-form time of the float8 conversion overhead for one training step.
///
/// Casted tensors: input (M x K, fused with the previous op), weight
/// (K x N, unfused), grad_output (M x N, fused). The weight read for
/// grad_input and the input_t / grad_output reads for grad_weight reuse the
/// already-casted float8 tensors and add no traffic.
pub fn float8_mem_time_expr(params: Float8MemParams) -> CostExpr {
    let eff_bw = H100_PEAK_MEM_BW_BYTES_SEC * PCT_ACHIEVABLE_MEM_BW;

    let input = cast_traffic_bytes_per_el(
        params.scaling_input,
        true,
        params.model_compile_limitations,
    );
    let weight = cast_traffic_bytes_per_el(
        params.scaling_weight,
        false,
        params.model_compile_limitations,
    );
    let grad_output = cast_traffic_bytes_per_el(
        params.scaling_grad_output,
        true,
        params.model_compile_limitations,
    );

    let launches = small_kernel_count(params.scaling_input)
        + small_kernel_count(params.scaling_weight)
        + small_kernel_count(params.scaling_grad_output);

    CostExpr::mk(input / eff_bw)
        + CostExpr::kn(weight / eff_bw)
        + CostExpr::mn(grad_output / eff_bw)
        + CostExpr::constant(f64::from(launches) * KERNEL_LAUNCH_OVERHEAD_SEC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn all_dynamic() -> Float8MemParams {
        Float8MemParams {
            scaling_input: ScalingPolicy::Dynamic,
            scaling_weight: ScalingPolicy::Dynamic,
            scaling_grad_output: ScalingPolicy::Dynamic,
            model_compile_limitations: false,
        }
    }

    #[test]
    fn test_per_tensor_traffic() {
        // dynamic, fused: bf16 read + 2 fp8 writes = 4 bytes/el
        assert_relative_eq!(
            cast_traffic_bytes_per_el(ScalingPolicy::Dynamic, true, false),
            4.0
        );
        // dynamic, unfused: extra bf16 max-abs read = 6 bytes/el
        assert_relative_eq!(
            cast_traffic_bytes_per_el(ScalingPolicy::Dynamic, false, false),
            6.0
        );
        // delayed, fused: 2 fp8 writes = 2 bytes/el
        assert_relative_eq!(
            cast_traffic_bytes_per_el(ScalingPolicy::Delayed, true, false),
            2.0
        );
        // delayed, unfused: bf16 read + 2 fp8 writes = 4 bytes/el
        assert_relative_eq!(
            cast_traffic_bytes_per_el(ScalingPolicy::Delayed, false, false),
            4.0
        );
    }

    #[test]
    fn test_compile_limitations_add_one_fp8_pass() {
        for scaling in [ScalingPolicy::Dynamic, ScalingPolicy::Delayed] {
            for fused in [true, false] {
                let base = cast_traffic_bytes_per_el(scaling, fused, false);
                let limited = cast_traffic_bytes_per_el(scaling, fused, true);
                assert_relative_eq!(limited - base, 2.0);
            }
        }
    }

    #[test]
    fn test_all_dynamic_coefficients() {
        let expr = float8_mem_time_expr(all_dynamic());
        let eff_bw = H100_PEAK_MEM_BW_BYTES_SEC * PCT_ACHIEVABLE_MEM_BW;
        assert_relative_eq!(expr.mk, 4.0 / eff_bw);
        assert_relative_eq!(expr.kn, 6.0 / eff_bw);
        assert_relative_eq!(expr.mn, 4.0 / eff_bw);
        // 3 dynamic tensors -> 3 small kernels
        assert_relative_eq!(expr.constant, 3.0 * KERNEL_LAUNCH_OVERHEAD_SEC);
        assert_eq!(expr.mkn, 0.0);
    }

    #[test]
    fn test_delayed_weight_changes_only_kn_and_constant() {
        let dynamic = float8_mem_time_expr(all_dynamic());
        let delayed = float8_mem_time_expr(Float8MemParams {
            scaling_weight: ScalingPolicy::Delayed,
            ..all_dynamic()
        });
        assert_eq!(dynamic.mk, delayed.mk);
        assert_eq!(dynamic.mn, delayed.mn);
        // delayed saves the separate max-abs read on the weight
        assert!(delayed.kn < dynamic.kn);
        // but launches one extra small kernel for the scale reciprocal
        assert_relative_eq!(
            delayed.constant - dynamic.constant,
            KERNEL_LAUNCH_OVERHEAD_SEC
        );
    }

    #[test]
    fn test_limitations_never_decrease_time() {
        for si in [ScalingPolicy::Dynamic, ScalingPolicy::Delayed] {
            for sw in [ScalingPolicy::Dynamic, ScalingPolicy::Delayed] {
                let base = float8_mem_time_expr(Float8MemParams {
                    scaling_input: si,
                    scaling_weight: sw,
                    scaling_grad_output: ScalingPolicy::Dynamic,
                    model_compile_limitations: false,
                });
                let limited = float8_mem_time_expr(Float8MemParams {
                    scaling_input: si,
                    scaling_weight: sw,
                    scaling_grad_output: ScalingPolicy::Dynamic,
                    model_compile_limitations: true,
                });
                assert!(limited.eval(512, 512, 512) >= base.eval(512, 512, 512));
            }
        }
    }
}
