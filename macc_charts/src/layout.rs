// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar layout.
//!
//! Bars are stacked left to right in ascending cost order with no gaps: each bar starts where the
//! previous one ended. Bar width encodes capacity. Vertically, bars diverge from the zero cost
//! line: non-negative costs rise above it and negative costs hang below it.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;

use crate::config::ChartConfig;
use crate::prepare::PreparedData;
use crate::scale::ScaleLinear;
use crate::scene::{TextAnchor, TextBaseline};

/// A width/height pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Geometry of one bar.
#[derive(Clone, Debug)]
pub struct BarGeometry {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width (mapped capacity).
    pub width: f64,
    /// Height (mapped distance between the cost and zero).
    pub height: f64,
    /// Category fill; `None` if the category has no assigned color.
    pub fill: Option<Color>,
    /// Source category.
    pub category: String,
    /// Source cost.
    pub cost: f64,
    /// Source capacity.
    pub capacity: f64,
}

impl BarGeometry {
    /// Returns the right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Geometry of one bar label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelGeometry {
    /// Anchor point.
    pub pos: Point,
    /// Horizontal anchor (always start).
    pub anchor: TextAnchor,
    /// Vertical alignment (always middle).
    pub baseline: TextBaseline,
    /// Label text.
    pub text: String,
}

/// A bar and its label.
#[derive(Clone, Debug)]
pub struct BarLayout {
    /// The bar.
    pub bar: BarGeometry,
    /// The bar's label.
    pub label: LabelGeometry,
}

/// Lays out one bar and one label per prepared record, in sorted order.
pub fn layout_bars(
    prepared: &PreparedData,
    x: &ScaleLinear,
    y: &ScaleLinear,
    config: &ChartConfig,
) -> Vec<BarLayout> {
    let y_zero = y.map(0.0);
    let mut offset = 0.0;
    let mut out = Vec::with_capacity(prepared.sorted.len());

    for record in &prepared.sorted {
        let cost = record.marginal_abatement_cost;
        let bar_x = config.bar_origin_x + offset;
        let width = x.map(record.abatement_capacity);
        offset += width;

        let y_top = y.map(cost.max(0.0));
        let height = (y.map(cost) - y_zero).abs();

        // Labels hang below negative bars and sit above non-negative ones.
        let label_y = if cost < 0.0 {
            y_top + height + config.label_below_dy
        } else {
            y_top + config.label_above_dy
        };

        out.push(BarLayout {
            bar: BarGeometry {
                x: bar_x,
                y: config.bar_top_offset + y_top,
                width,
                height,
                fill: prepared.color_of(&record.category),
                category: record.category.clone(),
                cost,
                capacity: record.abatement_capacity,
            },
            label: LabelGeometry {
                pos: Point::new(bar_x + config.label_dx, label_y),
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                text: record.abatement_alternative.clone(),
            },
        });
    }

    out
}
