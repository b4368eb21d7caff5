//! Integration tests for the batch driver
//!
//! Concurrency must not change values or ordering, and a magnitude overflow
//! mid-batch aborts the run after the in-order prefix of its round.

use rug::Float;
use siegelz::{batch, BatchOptions, Error, EvalOptions, PrecisionContext};

fn ctx256() -> PrecisionContext {
    PrecisionContext::new(256).unwrap()
}

fn float(ctx: &PrecisionContext, s: &str) -> Float {
    ctx.float_from_str("t", s).unwrap()
}

fn collect(
    ctx: &PrecisionContext,
    start: &str,
    incr: &str,
    opts: &BatchOptions,
) -> siegelz::Result<Vec<(usize, Float, Float)>> {
    let mut rows = Vec::new();
    batch::run(
        ctx,
        &float(ctx, start),
        &float(ctx, incr),
        opts,
        |index, result| rows.push((index, result.t.clone(), result.z.clone())),
    )
    .map(|()| rows)
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
// Determinism Across Thread Counts
// ============================================================================

#[test]
fn test_threaded_run_matches_serial_run() {
    let ctx = ctx256();
    let serial = BatchOptions {
        count: 5,
        threads: 1,
        eval: EvalOptions::default(),
    };
    let threaded = BatchOptions {
        count: 5,
        threads: 4,
        ..serial.clone()
    };

    let a = collect(&ctx, "100", "1", &serial).unwrap();
    let b = collect(&ctx, "100", "1", &threaded).unwrap();

    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 5);
    for (i, ((ia, ta, za), (ib, tb, zb))) in a.iter().zip(b.iter()).enumerate() {
        assert_eq!(ia, ib);
        assert_eq!(*ia, i, "results must arrive in index order");
        assert_eq!(ta, tb, "t values diverged at index {}", i);
        assert_eq!(za, zb, "Z values diverged at index {}", i);
    }
}

#[test]
fn test_end_to_end_three_points() {
    let ctx = ctx256();
    let opts = BatchOptions {
        count: 3,
        threads: 2,
        eval: EvalOptions::default(),
    };
    let rows = collect(&ctx, "100", "1", &opts).unwrap();
    let expected = [
        "2.69269701939165095319102172574868704086072411700067904311136",
        "1.00176629756058588737699742789728743419535682866996624011103",
        "-1.75458655293113513735205387806597994230488596362166150226216",
    ];
    assert_eq!(rows.len(), 3);
    for (i, (index, _, z)) in rows.iter().enumerate() {
        assert_eq!(*index, i);
        assert_close(z, expected[i], 1e-40);
    }
}

// ============================================================================
// Clamping and Validation
// ============================================================================

#[test]
fn test_thread_count_clamped_to_point_count() {
    let ctx = ctx256();
    let opts = BatchOptions {
        count: 2,
        threads: 8,
        eval: EvalOptions::default(),
    };
    let rows = collect(&ctx, "100", "1", &opts).unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_zero_count_is_rejected() {
    let ctx = ctx256();
    let opts = BatchOptions {
        count: 0,
        threads: 1,
        eval: EvalOptions::default(),
    };
    assert!(matches!(
        collect(&ctx, "100", "1", &opts),
        Err(Error::InvalidArgument { .. })
    ));
}

// ============================================================================
// Overflow Policy
// ============================================================================

#[test]
fn test_overflow_mid_batch_aborts_after_ordered_prefix() {
    // second point lands beyond the 1.15e20 magnitude bound; the round's
    // in-order prefix is still reported, then the run fails
    let ctx = ctx256();
    let opts = BatchOptions {
        count: 3,
        threads: 2,
        eval: EvalOptions::default(),
    };
    let mut reported = Vec::new();
    let err = batch::run(
        &ctx,
        &float(&ctx, "100"),
        &float(&ctx, "200000000000000000000"),
        &opts,
        |index, result| reported.push((index, result.t.clone())),
    )
    .unwrap_err();

    assert!(matches!(err, Error::MagnitudeOverflow { .. }));
    assert_eq!(reported.len(), 1, "only the pre-overflow prefix is reported");
    assert_eq!(reported[0].0, 0);
    assert_eq!(reported[0].1, float(&ctx, "100"));
}
