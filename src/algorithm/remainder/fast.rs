//! Fast remainder tier: native f64 arithmetic throughout
//!
//! The whole computation runs on doubles and only the final product is
//! widened into the working-precision result type. Good to roughly 15
//! significant digits, which is plenty when the remainder is being inspected
//! rather than trusted.

use super::coefficients::{CJ_COEFF, CJ_COEFF_COUNT, POWERS_OF_P};
use crate::context::PrecisionContext;
use rug::Float;

pub(super) fn evaluate(ctx: &PrecisionContext, n: u32, t_fraction: &Float, p: &Float) -> Float {
    let t_fraction = t_fraction.to_f64();
    let sign = if n % 2 == 0 { -1.0 } else { 1.0 };
    let factor = sign * t_fraction;

    let adj_p = 1.0 - 2.0 * p.to_f64();
    let mut powers = [0.0f64; POWERS_OF_P];
    powers[0] = 1.0;
    for k in 1..POWERS_OF_P {
        powers[k] = powers[k - 1] * adj_p;
    }

    let mut total = 0.0f64;
    for (j, row) in CJ_COEFF.iter().enumerate() {
        let parity = j % 2;
        let mut cj = 0.0f64;
        for (i, coeff) in row.iter().take(CJ_COEFF_COUNT[j]).enumerate() {
            cj += coeff * powers[2 * i + parity];
        }
        total += t_fraction.powi(2 * j as i32) * cj;
    }

    Float::with_val(ctx.prec(), factor * total)
}
