//! Integration tests for the Riemann-Siegel phase theta(t)
//!
//! Reference values were computed independently at 130 decimal digits with
//! the same expansion (including the split multiply, whose result is only
//! meaningful mod 2*pi, and the 1.1e12 cubic-term cutoff).

use rug::Float;
use siegelz::algorithm::theta::theta;
use siegelz::PrecisionContext;

fn ctx256() -> PrecisionContext {
    PrecisionContext::new(256).unwrap()
}

fn float(ctx: &PrecisionContext, s: &str) -> Float {
    ctx.float_from_str("t", s).unwrap()
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
// Reference Values
// ============================================================================

#[test]
fn test_theta_reference_values() {
    let ctx = ctx256();
    let cases = [
        (
            "100",
            "43.9898680815300758415924451501627896457964948440366977114577",
        ),
        (
            "1000",
            "49.0598709692822819945701080764840219782301638364983952601646",
        ),
        (
            "14.134725",
            "-1.72867030480127146076667340405307015513100600948355601395132",
        ),
        (
            "2.5",
            "-2.78627088875660106666813463810285700975440222301990756381368",
        ),
        (
            "40",
            "16.6278695247151408421392051839908145311726011376635560562969",
        ),
        (
            "1000000",
            "488845.981184103914139987704141003163799994592832015786191252",
        ),
    ];
    for (t, expected) in cases {
        let value = theta(&ctx, &float(&ctx, t));
        assert_close(&value, expected, 1e-45);
    }
}

// ============================================================================
// Precision Behavior
// ============================================================================

#[test]
fn test_theta_agrees_across_precisions() {
    let ctx_lo = ctx256();
    let ctx_hi = PrecisionContext::new(512).unwrap();
    for t in ["100", "1000", "14.134725"] {
        let lo = theta(&ctx_lo, &float(&ctx_lo, t));
        let hi = theta(&ctx_hi, &float(&ctx_hi, t));
        let diff = Float::with_val(512, &hi - &lo).abs();
        assert!(
            diff < 1e-60,
            "theta at 256 and 512 bits disagree for t = {}: diff = {}",
            t,
            diff
        );
    }
}
