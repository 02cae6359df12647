// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scales and tick generation.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const SQRT_50: f64 = 7.0710678118654755;
const SQRT_10: f64 = 3.1622776601683795;
const SQRT_2: f64 = core::f64::consts::SQRT_2;

/// A linear mapping from a continuous domain to a continuous range.
///
/// With rounding enabled, mapped values are rounded to the nearest integer, which keeps bar edges
/// on whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
    round: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            round: false,
        }
    }

    /// Enables or disables rounding of mapped values.
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-span domain maps every value to the start of the range, as does a domain whose
    /// span overflows `f64`.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 || !denom.is_finite() {
            return r0;
        }
        let t = (x - d0) / denom;
        let v = r0 + t * (r1 - r0);
        if self.round { v.round() } else { v }
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice" tick values inside the domain.
    pub fn ticks(&self, count: f64) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Returns the spacing between ticks produced by [`ScaleLinear::ticks`].
    pub fn tick_step(&self, count: f64) -> f64 {
        tick_step(self.domain.0, self.domain.1, count)
    }
}

/// Chooses an increment for roughly `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself; negative results are the negated inverse step, which
/// keeps fractional ticks exact when computed as `i / -inc`.
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= SQRT_2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -(10_f64.powf(-power)) / factor
    }
}

fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let (lo, hi) = if start <= stop {
        (start, stop)
    } else {
        (stop, start)
    };
    if !(count > 0.0) || lo == hi || !lo.is_finite() || !hi.is_finite() {
        return 0.0;
    }
    let inc = tick_increment(lo, hi, count);
    if inc < 0.0 { -1.0 / inc } else { inc }
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return alloc::vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };

    let mut count = count;
    let (i1, i2, inc) = loop {
        let inc = tick_increment(lo, hi, count);
        if !inc.is_finite() || inc == 0.0 {
            return Vec::new();
        }
        let (mut i1, mut i2);
        if inc < 0.0 {
            let inv = -inc;
            i1 = (lo * inv).round();
            i2 = (hi * inv).round();
            if i1 / inv < lo {
                i1 += 1.0;
            }
            if i2 / inv > hi {
                i2 -= 1.0;
            }
        } else {
            i1 = (lo / inc).round();
            i2 = (hi / inc).round();
            if i1 * inc < lo {
                i1 += 1.0;
            }
            if i2 * inc > hi {
                i2 -= 1.0;
            }
        }
        // Very small counts can produce an empty interval; retry with a finer step.
        if i2 < i1 && (0.5..2.0).contains(&count) {
            count *= 2.0;
            continue;
        }
        break (i1, i2, inc);
    };

    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0).min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "n is a small positive whole number, capped at 10k"
    )]
    let n = n as usize;

    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}
