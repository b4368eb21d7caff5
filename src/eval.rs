//! The Z evaluator: one point through the whole pipeline
//!
//! A linear pipeline with no branching back: derive (N, P) from t, evaluate
//! the remainder correction, evaluate theta and the main sum, and combine.
//! No partial results are exposed mid-pipeline; callers get the final
//! [`ZResult`] or an error.
//!
//! t values above about 1.15e20 would push N past the 32-bit range the main
//! sum is indexed by. That is detected before any evaluation starts and
//! surfaced as [`Error::MagnitudeOverflow`] - a hard failure, never a
//! silent zero.

use crate::algorithm::main_sum::main_sum;
use crate::algorithm::remainder::RemainderTier;
use crate::algorithm::theta::theta;
use crate::context::PrecisionContext;
use crate::error::{Error, Result};
use rug::Float;

/// Largest supported t; beyond this N no longer fits u32
pub const MAX_T: f64 = 1.15e20;

/// Named evaluation toggles.
///
/// One explicit option per debugging behavior, each independently settable.
/// Defaults are the production path.
#[derive(Debug, Clone, Copy)]
pub struct EvalOptions {
    /// Remainder evaluation strategy
    pub tier: RemainderTier,
    /// Reduce the cosine argument mod 2*pi before each cosine (cosine is
    /// periodic either way; kept selectable for precision debugging)
    pub reduce_mod_2pi: bool,
    /// Use the incremental cosine-argument recurrence; `false` recomputes
    /// theta - t log n from scratch each term (numerically independent
    /// validation path)
    pub incremental_recurrence: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            tier: RemainderTier::default(),
            reduce_mod_2pi: true,
            incremental_recurrence: true,
        }
    }
}

/// N and P derived from an evaluation point t
#[derive(Debug, Clone)]
pub struct EvaluationPoint {
    /// floor(sqrt(t/(2 pi))): the main-sum term count
    pub n: u32,
    /// Fractional part of sqrt(t/(2 pi)), in [0, 1)
    pub p: Float,
}

impl EvaluationPoint {
    /// Derive (N, P) for `t`, failing on nonpositive or oversized t.
    pub fn resolve(ctx: &PrecisionContext, t: &Float) -> Result<Self> {
        if !(*t > 0u32) {
            return Err(Error::invalid_argument("t", "t must be positive"));
        }
        if *t > MAX_T {
            return Err(Error::magnitude_overflow(t));
        }
        let prec = ctx.prec();
        let root = Float::with_val(prec, t / ctx.two_pi()).sqrt();
        let n_floor = Float::with_val(prec, root.trunc_ref());
        let p = Float::with_val(prec, root.fract_ref());
        let n = n_floor
            .to_integer()
            .and_then(|i| i.to_u32())
            .ok_or_else(|| Error::magnitude_overflow(t))?;
        Ok(Self { n, p })
    }
}

/// One evaluated point: t paired with Z(t)
#[derive(Debug, Clone, PartialEq)]
pub struct ZResult {
    /// The evaluation point
    pub t: Float,
    /// The computed Hardy Z value
    pub z: Float,
}

/// Evaluate Z(t) at the context's working precision.
pub fn evaluate(ctx: &PrecisionContext, t: &Float, opts: &EvalOptions) -> Result<ZResult> {
    let prec = ctx.prec();
    let point = EvaluationPoint::resolve(ctx, t)?;

    // tFraction = [t/(2 pi)]^(-1/4): reciprocal, then two square roots
    let mut t_fraction = Float::with_val(prec, t / ctx.two_pi());
    t_fraction.recip_mut();
    t_fraction.sqrt_mut();
    t_fraction.sqrt_mut();

    let remainder = opts.tier.evaluate(ctx, point.n, &t_fraction, &point.p);
    let phase = theta(ctx, t);
    let main = main_sum(ctx, t, point.n, &phase, opts);

    tracing::debug!(
        n = point.n,
        "t = {:.6}, remainder = {:.20e}, main = {:.20e}",
        t,
        remainder,
        main
    );

    let z = main + remainder;
    Ok(ZResult { t: t.clone(), z })
}
