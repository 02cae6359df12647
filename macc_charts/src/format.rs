// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const MINUS: char = '\u{2212}';

/// Formats a tick as its raw numeric value (shortest round-trip form, no grouping).
///
/// `-0` is written as `0`.
pub fn format_raw(v: f64) -> String {
    if v == 0.0 {
        return String::from("0");
    }
    format!("{v}")
}

/// Formats a tick with as many decimals as the tick step needs.
///
/// The integer part is grouped by thousands and negative values use the typographic minus sign.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    let decimals = decimals_for_step(step);
    let body = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (body.as_str(), None),
    };

    let mut out = String::with_capacity(body.len() + 4);
    let is_zero = body.bytes().all(|b| b == b'0' || b == b'.');
    if v < 0.0 && !is_zero {
        out.push(MINUS);
    }
    let len = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 {
        return 0;
    }
    let d = (-exponent).min(20.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "d is a whole number in 1..=20"
    )]
    {
        d as usize
    }
}
