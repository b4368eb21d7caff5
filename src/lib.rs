//! # siegelz
//!
//! **Hardy Z function evaluation via the Riemann-Siegel formula at
//! arbitrary precision.**
//!
//! Z(t) is the real-valued rotation of zeta on the critical line; its zeros
//! are the nontrivial zeta zeros. This crate evaluates it through the
//! Riemann-Siegel asymptotic formula: the phase theta(t), the oscillatory
//! main sum of N = floor(sqrt(t/2 pi)) terms, and the asymptotic remainder
//! correction from tabulated Cj coefficients, all carried in MPFR floats at
//! a caller-chosen working precision of 128 to 1024 bits.
//!
//! ## Quick start
//!
//! ```
//! use siegelz::{evaluate, EvalOptions, PrecisionContext};
//!
//! let ctx = PrecisionContext::new(256)?;
//! let t = ctx.float_from_str("t", "100")?;
//! let result = evaluate(&ctx, &t, &EvalOptions::default())?;
//! assert!((result.z.to_f64() - 2.692697).abs() < 1e-5);
//! # Ok::<(), siegelz::Error>(())
//! ```
//!
//! ## Structure
//!
//! - [`context`] - working precision and cached constants (pi, 2*pi, log 2)
//! - [`algorithm`] - theta, the main sum, and the three-tier remainder
//! - [`eval`] - the per-point pipeline producing (t, Z(t))
//! - [`batch`] - rounds of independent evaluations across scoped threads,
//!   reported in deterministic order
//! - [`input`] - decimal-string validation for the CLI surface
//!
//! ## Accuracy
//!
//! The remainder tier bounds the achievable accuracy: the default
//! [`RemainderTier::Gabcke`] tier matches the working precision up to the
//! intrinsic truncation error of the five-term Riemann-Siegel expansion,
//! which shrinks like (t/2 pi)^(-11/4). The faster tiers trade that for
//! native-float or 128-bit coefficient arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod batch;
pub mod context;
pub mod error;
pub mod eval;
pub mod input;

pub use algorithm::remainder::RemainderTier;
pub use batch::{BatchOptions, MAX_THREADS};
pub use context::{PrecisionContext, DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};
pub use error::{Error, Result};
pub use eval::{evaluate, EvalOptions, EvaluationPoint, ZResult, MAX_T};
