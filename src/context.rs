//! Arbitrary-precision numeric environment
//!
//! A [`PrecisionContext`] owns the working precision and the high-precision
//! constants (pi, 2*pi, log 2) every evaluator reads. It is constructed once
//! per precision configuration and passed by reference; after construction it
//! is read-only and therefore safe to share across worker threads without
//! locking. Dropping the context releases its MPFR state.
//!
//! Constructing the context is the only place constants are computed; a new
//! precision means a new context, so several precisions can coexist (the
//! convergence tests rely on this).

use crate::error::{Error, Result};
use rug::float::Constant;
use rug::Float;

/// Smallest supported working precision in bits
pub const MIN_PRECISION: u32 = 128;

/// Largest supported working precision in bits
pub const MAX_PRECISION: u32 = 1024;

/// Working precision must be a multiple of this step
pub const PRECISION_STEP: u32 = 64;

/// Default working precision in bits
pub const DEFAULT_PRECISION: u32 = 256;

/// Working precision plus the cached constants pi, 2*pi and log 2
#[derive(Debug, Clone)]
pub struct PrecisionContext {
    prec: u32,
    pi: Float,
    two_pi: Float,
    ln_2: Float,
}

impl PrecisionContext {
    /// Create a context at `bits` of working precision.
    ///
    /// The range and step are validated before any constant is computed, so
    /// an out-of-range request fails without touching the MPFR layer.
    pub fn new(bits: u32) -> Result<Self> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&bits) || bits % PRECISION_STEP != 0 {
            return Err(Error::PrecisionOutOfRange { bits });
        }
        let pi = Float::with_val(bits, Constant::Pi);
        let two_pi = Float::with_val(bits, &pi * 2u32);
        let ln_2 = Float::with_val(bits, Constant::Log2);
        Ok(Self {
            prec: bits,
            pi,
            two_pi,
            ln_2,
        })
    }

    /// Working precision in bits
    pub fn prec(&self) -> u32 {
        self.prec
    }

    /// pi at working precision
    pub fn pi(&self) -> &Float {
        &self.pi
    }

    /// 2*pi at working precision
    pub fn two_pi(&self) -> &Float {
        &self.two_pi
    }

    /// log 2 at working precision
    pub fn ln_2(&self) -> &Float {
        &self.ln_2
    }

    /// A zero-valued float at working precision
    pub fn new_float(&self) -> Float {
        Float::new(self.prec)
    }

    /// Parse a decimal string into a float at working precision.
    ///
    /// Strings are the only accepted source for t and the increment; going
    /// through a native float first would throw away digits at 20-digit
    /// magnitudes.
    pub fn float_from_str(&self, arg: &'static str, s: &str) -> Result<Float> {
        let parsed =
            Float::parse(s).map_err(|e| Error::invalid_argument(arg, e.to_string()))?;
        Ok(Float::with_val(self.prec, parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_supported_precisions() {
        for bits in (MIN_PRECISION..=MAX_PRECISION).step_by(PRECISION_STEP as usize) {
            let ctx = PrecisionContext::new(bits).unwrap();
            assert_eq!(ctx.prec(), bits);
        }
    }

    #[test]
    fn test_rejects_unsupported_precisions() {
        for bits in [0, 64, 127, 200, 250, 1025, 1088, 2048] {
            assert!(matches!(
                PrecisionContext::new(bits),
                Err(Error::PrecisionOutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_constants_are_consistent() {
        let ctx = PrecisionContext::new(256).unwrap();
        let double = Float::with_val(256, ctx.pi() * 2u32);
        assert_eq!(&double, ctx.two_pi());
        assert!((ctx.pi().to_f64() - std::f64::consts::PI).abs() < 1e-15);
        assert!((ctx.ln_2().to_f64() - std::f64::consts::LN_2).abs() < 1e-15);
    }

    #[test]
    fn test_float_from_str_rejects_garbage() {
        let ctx = PrecisionContext::new(128).unwrap();
        assert!(ctx.float_from_str("t", "not a number").is_err());
        assert!(ctx.float_from_str("t", "100").is_ok());
    }
}
