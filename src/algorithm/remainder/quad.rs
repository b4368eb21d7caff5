//! 128-bit remainder tier
//!
//! The coefficient sum runs at a fixed 128 bits of precision and each Cj is
//! widened into the working precision only when it meets tFraction^(2j).
//! The table is the same
//! Haselgrove data as the fast tier, but parsed from the decimal strings so
//! all 20 published digits survive.

use super::coefficients::{CJ_COEFF_COUNT, CJ_COEFF_STR, POWERS_OF_P};
use super::signed_factor;
use crate::context::PrecisionContext;
use lazy_static::lazy_static;
use rug::ops::Pow;
use rug::Float;

/// Fixed precision of the coefficient sum in this tier
pub const QUAD_PRECISION: u32 = 128;

lazy_static! {
    // Parsed once per process; read-only afterwards.
    static ref QUAD_TABLE: Vec<Vec<Float>> = CJ_COEFF_STR
        .iter()
        .map(|row| {
            row.iter()
                .map(|s| {
                    let parsed =
                        Float::parse(s).expect("static coefficient literals are well-formed");
                    Float::with_val(QUAD_PRECISION, parsed)
                })
                .collect()
        })
        .collect();
}

pub(super) fn evaluate(ctx: &PrecisionContext, n: u32, t_fraction: &Float, p: &Float) -> Float {
    let prec = ctx.prec();
    let factor = signed_factor(ctx, n, t_fraction);

    let p_128 = Float::with_val(QUAD_PRECISION, p);
    let two_p = Float::with_val(QUAD_PRECISION, &p_128 * 2u32);
    let adj_p = Float::with_val(QUAD_PRECISION, 1u32 - &two_p);

    let mut powers = Vec::with_capacity(POWERS_OF_P);
    powers.push(Float::with_val(QUAD_PRECISION, 1u32));
    for k in 1..POWERS_OF_P {
        powers.push(Float::with_val(QUAD_PRECISION, &powers[k - 1] * &adj_p));
    }

    let mut total = ctx.new_float();
    for (j, row) in QUAD_TABLE.iter().enumerate() {
        let parity = j % 2;
        let mut cj = Float::new(QUAD_PRECISION);
        for (i, coeff) in row.iter().take(CJ_COEFF_COUNT[j]).enumerate() {
            cj += Float::with_val(QUAD_PRECISION, coeff * &powers[2 * i + parity]);
        }
        let tf_pow = Float::with_val(prec, t_fraction.pow(2 * j as u32));
        total += tf_pow * Float::with_val(prec, &cj);
    }

    total * factor
}
