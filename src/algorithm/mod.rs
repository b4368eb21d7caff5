//! Numerical kernels of the Riemann-Siegel evaluation pipeline
//!
//! Z(t) is assembled from three pieces, each with its own module:
//!
//! - [`theta`] - the Riemann-Siegel phase theta(t), via an asymptotic
//!   expansion with a precision-preserving split multiply
//! - [`main_sum`] - the oscillatory sum over n = 1..N of
//!   n^(-1/2) cos(theta(t) - t log n)
//! - [`remainder`] - the asymptotic correction term, with three
//!   interchangeable precision tiers and their coefficient tables
//!
//! All kernels take a [`crate::context::PrecisionContext`] by reference and
//! return `rug::Float` values at its working precision. None of them hold
//! state between calls; per-point scratch (the power-series cache of the
//! remainder, the cosine-argument recurrence of the main sum) lives on the
//! stack of the call, so concurrent evaluations of different points never
//! alias.

pub mod main_sum;
pub mod remainder;
pub mod theta;

pub use remainder::RemainderTier;
