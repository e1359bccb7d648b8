//! Closed-form cost expressions over gemm shape symbols
//!
//! The roofline and memory-overhead models produce time formulas over the
//! symbolic dimensions M, K and N. `CostExpr` holds such a formula as a
//! polynomial with one coefficient per shape term, supports addition and
//! scalar scaling, prints in symbolic form, and evaluates by substituting
//! concrete dimensions.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Polynomial over the shape symbols M, K and N.
///
/// Terms are limited to those the linear-layer cost model produces: the
/// cubic gemm-work term M*K*N, the three tensor-size terms M*K, K*N and
/// M*N, and a shape-independent constant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostExpr {
    pub mkn: f64,
    pub mk: f64,
    pub kn: f64,
    pub mn: f64,
    pub constant: f64,
}

impl CostExpr {
    /// The zero expression
    pub const ZERO: CostExpr = CostExpr {
        mkn: 0.0,
        mk: 0.0,
        kn: 0.0,
        mn: 0.0,
        constant: 0.0,
    };

    /// A single M*K*N term
    pub fn mkn(coeff: f64) -> Self {
        CostExpr {
            mkn: coeff,
            ..Self::ZERO
        }
    }

    /// A single M*K term
    pub fn mk(coeff: f64) -> Self {
        CostExpr {
            mk: coeff,
            ..Self::ZERO
        }
    }

    /// A single K*N term
    pub fn kn(coeff: f64) -> Self {
        CostExpr {
            kn: coeff,
            ..Self::ZERO
        }
    }

    /// A single M*N term
    pub fn mn(coeff: f64) -> Self {
        CostExpr {
            mn: coeff,
            ..Self::ZERO
        }
    }

    /// A shape-independent constant term
    pub fn constant(value: f64) -> Self {
        CostExpr {
            constant: value,
            ..Self::ZERO
        }
    }

    /// Scale every coefficient by `factor`
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        CostExpr {
            mkn: self.mkn * factor,
            mk: self.mk * factor,
            kn: self.kn * factor,
            mn: self.mn * factor,
            constant: self.constant * factor,
        }
    }

    /// Substitute concrete dimensions and evaluate
    pub fn eval(&self, m: u64, k: u64, n: u64) -> f64 {
        let (m, k, n) = (m as f64, k as f64, n as f64);
        self.mkn * m * k * n + self.mk * m * k + self.kn * k * n + self.mn * m * n + self.constant
    }
}

impl Add for CostExpr {
    type Output = CostExpr;

    fn add(self, rhs: CostExpr) -> CostExpr {
        CostExpr {
            mkn: self.mkn + rhs.mkn,
            mk: self.mk + rhs.mk,
            kn: self.kn + rhs.kn,
            mn: self.mn + rhs.mn,
            constant: self.constant + rhs.constant,
        }
    }
}

impl AddAssign for CostExpr {
    fn add_assign(&mut self, rhs: CostExpr) {
        *self = *self + rhs;
    }
}

impl fmt::Display for CostExpr {
    /// Prints in symbolic form, skipping zero terms, e.g.
    /// `1.0101e-14*M*K*N + 1.8116e-12*K*N + 6.0000e-6`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut terms: Vec<String> = Vec::new();
        if self.mkn != 0.0 {
            terms.push(format!("{:.4e}*M*K*N", self.mkn));
        }
        if self.mk != 0.0 {
            terms.push(format!("{:.4e}*M*K", self.mk));
        }
        if self.kn != 0.0 {
            terms.push(format!("{:.4e}*K*N", self.kn));
        }
        if self.mn != 0.0 {
            terms.push(format!("{:.4e}*M*N", self.mn));
        }
        if self.constant != 0.0 {
            terms.push(format!("{:.4e}", self.constant));
        }
        if terms.is_empty() {
            return write!(f, "0");
        }
        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eval_single_terms() {
        assert_relative_eq!(CostExpr::mkn(2.0).eval(3, 5, 7), 210.0);
        assert_relative_eq!(CostExpr::mk(2.0).eval(3, 5, 7), 30.0);
        assert_relative_eq!(CostExpr::kn(2.0).eval(3, 5, 7), 70.0);
        assert_relative_eq!(CostExpr::mn(2.0).eval(3, 5, 7), 42.0);
        assert_relative_eq!(CostExpr::constant(2.0).eval(3, 5, 7), 2.0);
    }

    #[test]
    fn test_eval_polynomial() {
        let expr = CostExpr::mk(1.5) + CostExpr::kn(0.5) + CostExpr::constant(10.0);
        // 1.5*4*6 + 0.5*6*8 + 10
        assert_relative_eq!(expr.eval(4, 6, 8), 36.0 + 24.0 + 10.0);
    }

    #[test]
    fn test_add_merges_coefficients() {
        let a = CostExpr::mk(1.0) + CostExpr::constant(2.0);
        let b = CostExpr::mk(3.0) + CostExpr::mn(4.0);
        let sum = a + b;
        assert_relative_eq!(sum.mk, 4.0);
        assert_relative_eq!(sum.mn, 4.0);
        assert_relative_eq!(sum.constant, 2.0);
    }

    #[test]
    fn test_scale() {
        let expr = (CostExpr::mk(2.0) + CostExpr::constant(4.0)).scale(0.5);
        assert_relative_eq!(expr.mk, 1.0);
        assert_relative_eq!(expr.constant, 2.0);
    }

    #[test]
    fn test_display_skips_zero_terms() {
        let expr = CostExpr::mk(2.5e-12) + CostExpr::constant(6e-6);
        let s = expr.to_string();
        assert!(s.contains("M*K"));
        assert!(!s.contains("K*N"));
        assert!(!s.contains("M*K*N"));
        assert_eq!(CostExpr::ZERO.to_string(), "0");
    }

    #[test]
    fn test_eval_is_deterministic() {
        let expr = CostExpr::mkn(1.0101e-14) + CostExpr::mk(4.5e-13) + CostExpr::constant(6e-6);
        let a = expr.eval(4096, 4096, 16384);
        let b = expr.eval(4096, 4096, 16384);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
