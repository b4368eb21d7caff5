//! Full-precision remainder tier (Gabcke table)
//!
//! Every step runs at the context's working precision against the
//! 44-coefficient Gabcke table. The table strings are parsed at most once
//! per precision and shared read-only afterwards, so concurrent evaluations
//! at the same precision reuse one parse.

use super::gabcke_coefficients::{GABCKE_COEFF_PER_CJ, GABCKE_COEFF_STR, GABCKE_POWERS_OF_P};
use super::signed_factor;
use crate::context::PrecisionContext;
use lazy_static::lazy_static;
use rug::ops::Pow;
use rug::Float;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

lazy_static! {
    static ref TABLES: Mutex<HashMap<u32, Arc<GabckeTable>>> = Mutex::new(HashMap::new());
}

/// The Gabcke coefficient table parsed at one working precision.
#[derive(Debug)]
pub struct GabckeTable {
    coeff: Vec<Vec<Float>>,
}

impl GabckeTable {
    /// Fetch (or build on first use) the table parsed at `prec` bits.
    ///
    /// Idempotent: repeated calls for the same precision return the same
    /// shared parse.
    pub fn for_precision(prec: u32) -> Arc<Self> {
        let mut cache = TABLES.lock().unwrap();
        cache
            .entry(prec)
            .or_insert_with(|| Arc::new(Self::parse(prec)))
            .clone()
    }

    fn parse(prec: u32) -> Self {
        let coeff = GABCKE_COEFF_STR
            .iter()
            .map(|row| {
                row.iter()
                    .map(|s| {
                        let parsed =
                            Float::parse(s).expect("static coefficient literals are well-formed");
                        Float::with_val(prec, parsed)
                    })
                    .collect()
            })
            .collect();
        Self { coeff }
    }

    /// Coefficient i of Cj
    pub fn coeff(&self, j: usize, i: usize) -> &Float {
        &self.coeff[j][i]
    }
}

pub(super) fn evaluate(ctx: &PrecisionContext, n: u32, t_fraction: &Float, p: &Float) -> Float {
    let prec = ctx.prec();
    let table = GabckeTable::for_precision(prec);
    let factor = signed_factor(ctx, n, t_fraction);

    let two_p = Float::with_val(prec, p * 2u32);
    let adj_p = Float::with_val(prec, 1u32 - &two_p);

    let mut powers = Vec::with_capacity(GABCKE_POWERS_OF_P);
    powers.push(Float::with_val(prec, 1u32));
    for k in 1..GABCKE_POWERS_OF_P {
        powers.push(Float::with_val(prec, &powers[k - 1] * &adj_p));
    }

    let mut total = ctx.new_float();
    for j in 0..5 {
        let parity = j % 2;
        let mut cj = ctx.new_float();
        for i in 0..GABCKE_COEFF_PER_CJ {
            cj += Float::with_val(prec, table.coeff(j, i) * &powers[2 * i + parity]);
        }
        let tf_pow = Float::with_val(prec, t_fraction.pow(2 * j as u32));
        total += tf_pow * cj;
    }

    total * factor
}
