//! Batch driver: rounds of independent evaluations
//!
//! Iterates t over `count` steps of `incr`, dispatching up to `threads`
//! concurrent evaluations per round. Threads are spawned and joined every
//! round (no persistent pool); each worker owns its scratch for the duration
//! of its point, and the shared [`PrecisionContext`] is read-only.
//!
//! Ordering is a hard guarantee: a round's results are buffered and reported
//! in index order only after the whole round has joined, so output order is
//! deterministic regardless of completion order inside a round.
//!
//! Error policy: the first failing point aborts the whole run. Results of
//! the affected round that precede the failure are still reported, in
//! order; nothing after the failure is.

use crate::context::PrecisionContext;
use crate::error::{Error, Result};
use crate::eval::{evaluate, EvalOptions, ZResult};
use rug::Float;
use std::thread;

/// Hard cap on worker threads per round
pub const MAX_THREADS: usize = 8;

/// Batch iteration parameters
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Number of t values to evaluate
    pub count: u32,
    /// Requested worker threads; clamped to [`MAX_THREADS`] and to the
    /// number of remaining points in each round
    pub threads: usize,
    /// Per-point evaluation options
    pub eval: EvalOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: 1,
            threads: 1,
            eval: EvalOptions::default(),
        }
    }
}

/// Evaluate `count` points t0, t0+incr, t0+2*incr, ... and report each
/// result through `report` in index order.
pub fn run<F>(
    ctx: &PrecisionContext,
    start: &Float,
    incr: &Float,
    opts: &BatchOptions,
    mut report: F,
) -> Result<()>
where
    F: FnMut(usize, &ZResult),
{
    let count = opts.count as usize;
    if count == 0 {
        return Err(Error::invalid_argument("count", "must be at least 1"));
    }
    let threads = opts.threads.clamp(1, MAX_THREADS).min(count);
    tracing::debug!(count, threads, "starting batch");

    let mut t = start.clone();
    let mut index = 0usize;
    while index < count {
        let round = threads.min(count - index);
        let mut points = Vec::with_capacity(round);
        for _ in 0..round {
            points.push(t.clone());
            t += incr;
        }

        let results: Vec<Result<ZResult>> = if round == 1 {
            vec![evaluate(ctx, &points[0], &opts.eval)]
        } else {
            thread::scope(|scope| {
                let handles: Vec<_> = points
                    .iter()
                    .map(|point| scope.spawn(move || evaluate(ctx, point, &opts.eval)))
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| {
                        handle.join().unwrap_or_else(|_| {
                            Err(Error::Internal("worker thread panicked".into()))
                        })
                    })
                    .collect()
            })
        };

        for result in results {
            let z = result?;
            report(index, &z);
            index += 1;
        }
    }
    Ok(())
}
