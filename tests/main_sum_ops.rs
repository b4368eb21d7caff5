//! Integration tests for the oscillatory main sum
//!
//! Covers the N = 0 and N = 1 special cases, agreement between the
//! incremental cosine-argument recurrence and the direct recompute path,
//! and reference values computed independently at 130 decimal digits.

use rug::Float;
use siegelz::algorithm::main_sum::main_sum;
use siegelz::algorithm::theta::theta;
use siegelz::{EvalOptions, EvaluationPoint, PrecisionContext};

fn ctx256() -> PrecisionContext {
    PrecisionContext::new(256).unwrap()
}

fn float(ctx: &PrecisionContext, s: &str) -> Float {
    ctx.float_from_str("t", s).unwrap()
}

fn sum_for(ctx: &PrecisionContext, t: &str, opts: &EvalOptions) -> Float {
    let t = float(ctx, t);
    let point = EvaluationPoint::resolve(ctx, &t).unwrap();
    let phase = theta(ctx, &t);
    main_sum(ctx, &t, point.n, &phase, opts)
}

fn assert_close(actual: &Float, expected: &str, tol: f64) {
    let prec = actual.prec();
    let expected = Float::with_val(prec, Float::parse(expected).unwrap());
    let diff = Float::with_val(prec, actual - &expected).abs();
    assert!(
        diff < tol,
        "actual = {}, expected = {}, diff = {}",
        actual,
        expected,
        diff
    );
}

// ============================================================================
// Special Cases
// ============================================================================

#[test]
fn test_zero_terms_yields_exact_zero() {
    // t = 2.5 has N = 0: the sum must be a valid zero, not an error
    let ctx = ctx256();
    let value = sum_for(&ctx, "2.5", &EvalOptions::default());
    assert!(value.is_zero(), "N = 0 main sum should be exactly zero");
}

#[test]
fn test_single_term_is_twice_cos_theta() {
    // t = 14.134725 has N = 1: no log term enters at all
    let ctx = ctx256();
    let t = float(&ctx, "14.134725");
    let point = EvaluationPoint::resolve(&ctx, &t).unwrap();
    assert_eq!(point.n, 1);

    let phase = theta(&ctx, &t);
    let value = main_sum(&ctx, &t, 1, &phase, &EvalOptions::default());
    let expected = Float::with_val(ctx.prec(), phase.cos_ref()) * 2u32;
    assert_eq!(value, expected);
}

// ============================================================================
// Reference Values
// ============================================================================

#[test]
fn test_main_sum_reference_values() {
    let ctx = ctx256();
    let cases = [
        (
            "40",
            "-1.06716588497629850363817526289185344082146325370168271487863",
        ),
        (
            "100",
            "2.23945108212144350669155204051851320647948057874363786441257",
        ),
        (
            "1000",
            "1.11210501671921553437586478639651200560819236099291019696798",
        ),
        (
            "1000000",
            "-2.76638767177219704272867538196890345676232272717934347634761",
        ),
    ];
    for (t, expected) in cases {
        let value = sum_for(&ctx, t, &EvalOptions::default());
        assert_close(&value, expected, 1e-40);
    }
}

// ============================================================================
// Algorithm Variants
// ============================================================================

#[test]
fn test_recurrence_matches_direct_recompute() {
    let ctx = ctx256();
    let direct = EvalOptions {
        incremental_recurrence: false,
        ..EvalOptions::default()
    };
    for t in ["100", "1000", "1000000"] {
        let a = sum_for(&ctx, t, &EvalOptions::default());
        let b = sum_for(&ctx, t, &direct);
        let diff = Float::with_val(ctx.prec(), &a - &b).abs();
        assert!(
            diff < 1e-60,
            "recurrence and direct paths disagree for t = {}: diff = {}",
            t,
            diff
        );
    }
}

#[test]
fn test_mod_2pi_reduction_does_not_change_the_sum() {
    let ctx = ctx256();
    let unreduced = EvalOptions {
        reduce_mod_2pi: false,
        ..EvalOptions::default()
    };
    for t in ["100", "1000"] {
        let a = sum_for(&ctx, t, &EvalOptions::default());
        let b = sum_for(&ctx, t, &unreduced);
        let diff = Float::with_val(ctx.prec(), &a - &b).abs();
        assert!(
            diff < 1e-60,
            "mod-2pi reduction changed the sum for t = {}: diff = {}",
            t,
            diff
        );
    }
}
