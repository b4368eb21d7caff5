//! The Riemann-Siegel phase theta(t)
//!
//! Asymptotic expansion:
//!
//! ```text
//! theta(t) = (t/2) * log(t/(2 pi)) - pi/8 - t/2 + 1/(48 t) + 7/(5760 t^3)
//! ```
//!
//! computed in the rearranged form
//!
//! ```text
//! theta(t) = (t/2) * [log(t/(2 pi)) - 1] + 1/(48 t) - pi/8 + 7/(5760 t^3)
//! ```
//!
//! so the two large nearly-equal leading terms never meet in a subtraction.
//! The dominant product goes through [`split_multiply`], which only preserves
//! the result mod 2*pi; every consumer feeds theta into a cosine, so that is
//! enough.

use crate::context::PrecisionContext;
use rug::ops::Pow;
use rug::Float;

/// Above this t the cubic correction term is below working precision and is
/// skipped.
pub const CUBIC_TERM_CUTOFF: f64 = 1.1e12;

/// Compute theta(t) for t > 0. The result is meaningful mod 2*pi only.
pub fn theta(ctx: &PrecisionContext, t: &Float) -> Float {
    let prec = ctx.prec();

    let t_over_2 = Float::with_val(prec, t / 2u32);
    let log_t_over_2pi = Float::with_val(prec, &t_over_2 / ctx.pi()).ln();

    // minor terms: 1/(48 t) - pi/8 [+ 7/(5760 t^3)]
    let mut minor = Float::with_val(prec, t * 48u32);
    minor.recip_mut();
    minor -= Float::with_val(prec, ctx.pi() / 8u32);
    if *t < CUBIC_TERM_CUTOFF {
        let cubic = Float::with_val(prec, t.pow(-3i32)) * 7u32 / 5760u32;
        minor += cubic;
    }

    let small = log_t_over_2pi - 1u32;
    let major = split_multiply(ctx, &t_over_2, &small);
    major + minor
}

/// Multiply a large operand by a small one, preserving the product mod 2*pi.
///
/// `big` is on the order of t while `small` stays near 1, so the plain
/// product would cost the leading digits of the working precision just to
/// carry an integer number of whole turns. Instead:
///
/// ```text
/// (big mod 2 pi) * trunc(small) + big * fract(small)
/// ```
///
/// which equals `big * small` up to an integer multiple of 2*pi while every
/// intermediate stays well below t in magnitude.
pub fn split_multiply(ctx: &PrecisionContext, big: &Float, small: &Float) -> Float {
    let prec = ctx.prec();
    let big_mod_2pi = Float::with_val(prec, big % ctx.two_pi());
    let int_small = Float::with_val(prec, small.trunc_ref());
    let frac_small = Float::with_val(prec, small.fract_ref());
    let high = big_mod_2pi * int_small;
    let low = Float::with_val(prec, big * &frac_small);
    high + low
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_multiply_matches_plain_product_mod_2pi() {
        let ctx = PrecisionContext::new(256).unwrap();
        for (big, small) in [(50.0, 1.7672), (500000.0, 12.31), (7.0, -0.189)] {
            let b = Float::with_val(256, big);
            let s = Float::with_val(256, small);
            let split = split_multiply(&ctx, &b, &s);
            let plain = Float::with_val(256, &b * &s);
            let diff = Float::with_val(256, &plain - &split);
            let turns = Float::with_val(256, &diff / ctx.two_pi());
            let frac = Float::with_val(256, turns.fract_ref()).abs();
            // the two products differ by a whole number of turns
            assert!(
                frac < 1e-50 || frac > 1.0 - 1e-50,
                "split multiply drifted off the 2 pi lattice: frac = {}",
                frac
            );
        }
    }
}
