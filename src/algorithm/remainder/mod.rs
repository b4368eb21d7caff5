//! The asymptotic remainder term of the Riemann-Siegel formula
//!
//! All three evaluators share one structure:
//!
//! 1. Factor = (-1)^(N-1) * tFraction, with tFraction = [t/(2 pi)]^(-1/4)
//!    precomputed by the caller
//! 2. AdjP = 1 - 2P, with its powers cached up to the table degree
//! 3. Cj = sum_i coeff[j][i] * AdjP^(2i + j mod 2)
//! 4. Result = Factor * sum_j Cj * tFraction^(2j)
//!
//! They differ in the arithmetic carrying the coefficient sum and in the
//! table feeding it; see [`RemainderTier`]. The tier is explicit
//! configuration, not control flow scattered through the caller.

pub mod coefficients;
pub mod gabcke_coefficients;

mod fast;
mod gabcke;
mod quad;

pub use gabcke::GabckeTable;
pub use quad::QUAD_PRECISION;

use crate::context::PrecisionContext;
use rug::Float;

/// Strategy for evaluating the remainder term.
///
/// A closed set of variants trading precision for speed. Within its own
/// accuracy each tier is a valid remainder; the default is the tier that
/// matches the working precision exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemainderTier {
    /// Native f64 arithmetic throughout; fastest, least precise
    /// (the Haselgrove table rounded to 53 bits).
    Fast64,

    /// 128-bit arithmetic for the coefficient sum, converted into the
    /// working-precision result at the end; same Haselgrove table at full
    /// published accuracy.
    Quad128,

    /// Every step at full working precision with the 44-coefficient Gabcke
    /// table (about 70 decimal digits); slowest, matches the working
    /// precision exactly.
    #[default]
    Gabcke,
}

impl RemainderTier {
    /// Evaluate the remainder for a point with main-sum length `n`,
    /// precomputed `t_fraction` = [t/(2 pi)]^(-1/4) and fractional part `p`.
    pub fn evaluate(
        self,
        ctx: &PrecisionContext,
        n: u32,
        t_fraction: &Float,
        p: &Float,
    ) -> Float {
        match self {
            Self::Fast64 => fast::evaluate(ctx, n, t_fraction, p),
            Self::Quad128 => quad::evaluate(ctx, n, t_fraction, p),
            Self::Gabcke => gabcke::evaluate(ctx, n, t_fraction, p),
        }
    }
}

/// Factor = (-1)^(N-1) * tFraction, at working precision.
fn signed_factor(ctx: &PrecisionContext, n: u32, t_fraction: &Float) -> Float {
    let factor = Float::with_val(ctx.prec(), t_fraction);
    if n % 2 == 0 { -factor } else { factor }
}
