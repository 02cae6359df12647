// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend layout.
//!
//! A bordered box in the top-left of the plot with one swatch + label row per category, in the
//! order categories were first seen.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::config::LegendConfig;
use crate::prepare::CategoryColor;

/// One legend row.
#[derive(Clone, Debug)]
pub struct LegendEntry {
    /// Swatch rectangle.
    pub swatch: Rect,
    /// Swatch fill.
    pub fill: Color,
    /// Label anchor point (start-anchored, vertically centered).
    pub label_pos: Point,
    /// Label text (the category).
    pub label: String,
}

/// A laid-out legend.
#[derive(Clone, Debug)]
pub struct LegendGeometry {
    /// Border rectangle; its height grows with the number of entries.
    pub frame: Rect,
    /// Rows in display order.
    pub entries: Vec<LegendEntry>,
}

/// Lays out the legend for `categories`.
pub fn layout_legend(categories: &[CategoryColor], config: &LegendConfig) -> LegendGeometry {
    let n = categories.len() as f64;
    let frame = Rect::new(
        config.x,
        config.y,
        config.x + config.width,
        config.y + n * config.frame_row_height,
    );

    let entries = categories
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let row = i as f64 * config.row_pitch;
            let x0 = config.x + config.swatch_dx;
            let y0 = config.y + config.swatch_dy + row;
            LegendEntry {
                swatch: Rect::new(x0, y0, x0 + config.swatch_width, y0 + config.swatch_height),
                fill: c.color,
                label_pos: Point::new(config.x + config.label_dx, config.y + config.label_dy + row),
                label: c.category.clone(),
            }
        })
        .collect();

    LegendGeometry { frame, entries }
}
