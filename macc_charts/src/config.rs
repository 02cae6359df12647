// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.
//!
//! Every pixel constant used by layout lives here. [`ChartConfig::default`] reproduces the
//! reference chart; callers override individual values with the `with_*` builders or, with the
//! `serde` feature, by deserializing a partial configuration.

extern crate alloc;

use alloc::string::String;

use peniko::Color;
use peniko::color::palette::css;

use crate::palette::{Palette, rgb_hex};

/// Outer margins around the plot, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margin {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 15.0,
            right: 30.0,
            bottom: 50.0,
            left: 40.0,
        }
    }
}

/// Legend box metrics, in pixels.
///
/// Swatch and label offsets are relative to the legend origin (`x`, `y`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LegendConfig {
    /// Frame left edge.
    pub x: f64,
    /// Frame top edge.
    pub y: f64,
    /// Frame width.
    pub width: f64,
    /// Frame height per legend entry.
    pub frame_row_height: f64,
    /// Vertical distance between consecutive entries.
    pub row_pitch: f64,
    /// Swatch left edge offset.
    pub swatch_dx: f64,
    /// Swatch top edge offset for the first entry.
    pub swatch_dy: f64,
    /// Swatch width.
    pub swatch_width: f64,
    /// Swatch height.
    pub swatch_height: f64,
    /// Label x offset.
    pub label_dx: f64,
    /// Label y offset for the first entry.
    pub label_dy: f64,
    /// Frame stroke width.
    pub frame_stroke_width: f64,
    /// Frame stroke color.
    #[cfg_attr(feature = "serde", serde(skip, default = "default_frame_stroke"))]
    pub frame_stroke: Color,
}

fn default_frame_stroke() -> Color {
    rgb_hex(0xDFDFDF)
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            x: 65.0,
            y: 15.0,
            width: 80.0,
            frame_row_height: 12.5,
            row_pitch: 12.0,
            swatch_dx: 5.0,
            swatch_dy: 3.0,
            swatch_width: 20.0,
            swatch_height: 7.0,
            label_dx: 30.0,
            label_dy: 8.0,
            frame_stroke_width: 0.5,
            frame_stroke: default_frame_stroke(),
        }
    }
}

/// Full chart configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartConfig {
    /// Outer margins; the inner plot size is the outer size minus these.
    pub margin: Margin,
    /// Pixels reserved at the right end of the capacity scale range.
    pub x_range_reserve: f64,
    /// Pixels reserved at the bottom of the cost scale range.
    pub y_range_reserve: f64,
    /// Padding added below the minimum and above the maximum cost, in cost units.
    pub y_domain_padding: f64,
    /// X position of the first bar.
    pub bar_origin_x: f64,
    /// Vertical offset applied to every bar top.
    pub bar_top_offset: f64,
    /// Horizontal offset of a bar label from its bar's left edge.
    pub label_dx: f64,
    /// Offset of a non-negative bar's label from the mapped cost position.
    pub label_above_dy: f64,
    /// Offset of a negative bar's label below the mapped bar bottom.
    pub label_below_dy: f64,
    /// Left axis x offset from the left margin.
    pub left_axis_dx: f64,
    /// Approximate number of left axis ticks.
    pub left_tick_count: f64,
    /// Left axis tick length.
    pub left_tick_size: f64,
    /// Bottom axis x position.
    pub bottom_axis_x: f64,
    /// Bottom axis distance above the inner plot bottom.
    pub bottom_axis_rise: f64,
    /// Inner width per bottom axis tick.
    pub bottom_tick_spacing: f64,
    /// Bottom axis tick length (inner and outer).
    pub bottom_tick_size: f64,
    /// Gap between a tick and its label.
    pub tick_padding: f64,
    /// Font size for bar labels, tick labels and legend labels.
    pub font_size: f64,
    /// Font size for axis titles.
    pub title_font_size: f64,
    /// CSS font weight for all text.
    pub font_weight: u16,
    /// Axis line stroke width.
    pub axis_stroke_width: f64,
    /// Outline width applied to axis tick labels.
    pub axis_label_stroke_width: f64,
    /// Title under the capacity axis.
    pub x_title: String,
    /// Distance of the capacity axis title baseline from the outer bottom edge.
    pub x_title_rise: f64,
    /// Title along the cost axis.
    pub y_title: String,
    /// X position of the rotated cost axis title.
    pub y_title_x: f64,
    /// Legend metrics.
    pub legend: LegendConfig,
    /// Fill for all text.
    #[cfg_attr(feature = "serde", serde(skip, default = "default_text_fill"))]
    pub text_fill: Color,
    /// Category palette.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub palette: Palette,
}

fn default_text_fill() -> Color {
    css::BLACK
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            x_range_reserve: 50.0,
            y_range_reserve: 65.0,
            y_domain_padding: 40.0,
            bar_origin_x: 60.0,
            bar_top_offset: 15.0,
            label_dx: 3.0,
            label_above_dy: 5.0,
            label_below_dy: 25.0,
            left_axis_dx: 20.0,
            left_tick_count: 10.0,
            left_tick_size: 6.0,
            bottom_axis_x: 60.0,
            bottom_axis_rise: 50.0,
            bottom_tick_spacing: 100.0,
            bottom_tick_size: 5.0,
            tick_padding: 3.0,
            font_size: 10.0,
            title_font_size: 11.0,
            font_weight: 500,
            axis_stroke_width: 1.0,
            axis_label_stroke_width: 0.3,
            x_title: String::from("Annual GHG emissions abatement (MtCO\u{2082}e)"),
            x_title_rise: 68.0,
            y_title: String::from("Cost per GHG emissions reduction (USD/CO\u{2082}e)"),
            y_title_x: 12.0,
            legend: LegendConfig::default(),
            text_fill: default_text_fill(),
            palette: Palette::default(),
        }
    }
}

impl ChartConfig {
    /// Sets the outer margins.
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the category palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets both axis titles.
    pub fn with_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    /// Sets the cost padding applied on both sides of the cost domain.
    pub fn with_y_domain_padding(mut self, padding: f64) -> Self {
        self.y_domain_padding = padding;
        self
    }

    /// Sets the legend metrics.
    pub fn with_legend(mut self, legend: LegendConfig) -> Self {
        self.legend = legend;
        self
    }

    /// Sets the font size used by labels.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}
