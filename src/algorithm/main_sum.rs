//! The oscillatory main sum of the Riemann-Siegel formula
//!
//! ```text
//! 2 * sum_{n=1}^{N} n^(-1/2) cos(theta(t) - t log n)
//! ```
//!
//! The n = 1 term is cos(theta) with no log, and n = 2 is computed before the
//! loop to seed the incremental recurrence for the cosine argument:
//!
//! ```text
//! CosArg(n) = CosArg(n-1) + t * (log(n-1) - log n)
//! ```
//!
//! One log per n either way, but the difference of neighboring logs lets the
//! multiplication by t cancel error instead of amplifying it. The direct
//! recompute of theta - t log n survives as a numerically independent
//! validation path ([`crate::eval::EvalOptions::incremental_recurrence`]).
//!
//! Accumulation is strictly ascending in n; reordering would change the
//! rounding and break run-to-run determinism.

use crate::context::PrecisionContext;
use crate::eval::EvalOptions;
use rug::Float;

/// Compute the main sum for `n_terms` terms. `theta` is the precomputed
/// phase for this t. `n_terms` = 0 yields an exact zero.
pub fn main_sum(
    ctx: &PrecisionContext,
    t: &Float,
    n_terms: u32,
    theta: &Float,
    opts: &EvalOptions,
) -> Float {
    let prec = ctx.prec();
    if n_terms < 1 {
        return ctx.new_float();
    }

    // n = 1: the cosine argument is theta itself
    let mut main = Float::with_val(prec, theta.cos_ref());
    if n_terms < 2 {
        return main * 2u32;
    }

    // n = 2, outside the loop: seeds CosArg and log(n-1) for the recurrence
    let t_log_2 = Float::with_val(prec, t * ctx.ln_2());
    let mut cos_arg = Float::with_val(prec, theta - &t_log_2);
    if opts.reduce_mod_2pi {
        cos_arg = Float::with_val(prec, &cos_arg % ctx.two_pi());
    }
    let recip_sqrt_2 = Float::with_val(prec, 0.5f64).sqrt();
    main += recip_sqrt_2 * Float::with_val(prec, cos_arg.cos_ref());
    let mut log_prev = ctx.ln_2().clone();

    for n in 3..=n_terms {
        let n_float = Float::with_val(prec, n);
        let recip_sqrt_n = Float::with_val(prec, n_float.recip_ref()).sqrt();
        let log_n = Float::with_val(prec, n_float.ln_ref());

        if opts.incremental_recurrence {
            let mut step = Float::with_val(prec, &log_prev - &log_n);
            step *= t;
            cos_arg += step;
        } else {
            let t_log_n = Float::with_val(prec, t * &log_n);
            cos_arg = Float::with_val(prec, theta - &t_log_n);
        }
        log_prev = log_n;

        if opts.reduce_mod_2pi {
            cos_arg = Float::with_val(prec, &cos_arg % ctx.two_pi());
        }

        main += recip_sqrt_n * Float::with_val(prec, cos_arg.cos_ref());
    }

    main * 2u32
}
