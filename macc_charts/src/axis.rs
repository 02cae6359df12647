// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis generation.
//!
//! An [`AxisSpec`] pairs a scale with placement and tick options. [`AxisSpec::geometry`]
//! resolves it into an [`AxisGeometry`]: tick positions and formatted labels relative to the
//! axis origin, plus helpers that return absolute coordinates for renderers.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Color;
use peniko::color::palette::css;

use crate::format::{format_raw, format_tick_with_step};
use crate::scale::ScaleLinear;
use crate::scene::{StrokeStyle, TextAnchor, TextBaseline, TextItem, TextRole};

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A vertical axis with ticks and labels on its left.
    Left,
    /// A horizontal axis with ticks and labels below it.
    Bottom,
}

/// Axis styling.
#[derive(Clone, Copy, Debug)]
pub struct AxisStyle {
    /// Style for the domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill for tick labels.
    pub label_fill: Color,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// CSS font weight for tick labels.
    pub label_font_weight: u16,
    /// Outline width drawn around tick label glyphs; `0` disables it.
    pub label_stroke_width: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            rule: StrokeStyle::solid(css::BLACK, 1.0),
            label_fill: css::BLACK,
            label_font_size: 10.0,
            label_font_weight: 400,
            label_stroke_width: 0.0,
        }
    }
}

/// A single resolved tick.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Tick value in domain units.
    pub value: f64,
    /// Position along the axis, relative to the axis origin.
    pub offset: f64,
    /// Formatted label.
    pub label: String,
}

/// A resolved axis, ready to draw.
#[derive(Clone, Debug)]
pub struct AxisGeometry {
    /// Axis orientation.
    pub orient: AxisOrient,
    /// Translation applied to all axis coordinates.
    pub origin: Point,
    /// Scale range covered by the domain line, relative to `origin`.
    pub range: (f64, f64),
    /// Length of the tick marks.
    pub tick_size_inner: f64,
    /// Length of the end caps of the domain line.
    pub tick_size_outer: f64,
    /// Gap between tick marks and labels.
    pub tick_padding: f64,
    /// Label shift perpendicular to the axis, in ems.
    pub label_dy_em: f64,
    /// Styling.
    pub style: AxisStyle,
    /// Ticks in value order.
    pub ticks: Vec<AxisTick>,
}

impl AxisGeometry {
    /// Returns the domain line (with end caps) in absolute coordinates.
    pub fn domain_path(&self) -> BezPath {
        let (r0, r1) = self.range;
        let o = self.origin;
        let outer = self.tick_size_outer;
        let mut p = BezPath::new();
        match self.orient {
            AxisOrient::Left => {
                p.move_to((o.x - outer, o.y + r0));
                p.line_to((o.x, o.y + r0));
                p.line_to((o.x, o.y + r1));
                p.line_to((o.x - outer, o.y + r1));
            }
            AxisOrient::Bottom => {
                p.move_to((o.x + r0, o.y + outer));
                p.line_to((o.x + r0, o.y));
                p.line_to((o.x + r1, o.y));
                p.line_to((o.x + r1, o.y + outer));
            }
        }
        p
    }

    /// Returns the tick mark endpoints in absolute coordinates.
    pub fn tick_line(&self, tick: &AxisTick) -> (Point, Point) {
        let o = self.origin;
        match self.orient {
            AxisOrient::Left => {
                let y = o.y + tick.offset;
                (Point::new(o.x, y), Point::new(o.x - self.tick_size_inner, y))
            }
            AxisOrient::Bottom => {
                let x = o.x + tick.offset;
                (Point::new(x, o.y), Point::new(x, o.y + self.tick_size_inner))
            }
        }
    }

    /// Returns the label anchor point in absolute coordinates, including the em shift.
    pub fn label_pos(&self, tick: &AxisTick) -> Point {
        let o = self.origin;
        let gap = self.tick_size_inner.max(0.0) + self.tick_padding;
        let dy = self.label_dy_em * self.style.label_font_size;
        match self.orient {
            AxisOrient::Left => Point::new(o.x - gap, o.y + tick.offset + dy),
            AxisOrient::Bottom => Point::new(o.x + tick.offset, o.y + gap + dy),
        }
    }

    /// Returns the horizontal anchor used for tick labels.
    pub fn label_anchor(&self) -> TextAnchor {
        match self.orient {
            AxisOrient::Left => TextAnchor::End,
            AxisOrient::Bottom => TextAnchor::Middle,
        }
    }

    /// Returns the styled label for `tick`, ready to draw.
    pub fn label_item(&self, tick: &AxisTick) -> TextItem {
        TextItem::new(TextRole::TickLabel, self.label_pos(tick), tick.label.clone())
            .with_font(self.style.label_font_size, self.style.label_font_weight)
            .with_anchor(self.label_anchor())
            .with_baseline(TextBaseline::Middle)
            .with_fill(self.style.label_fill)
    }
}

/// Tick label formatter: `(value, tick step) -> label`.
pub type TickFormatter = Arc<dyn Fn(f64, f64) -> String + Send + Sync>;

/// An axis specification.
#[derive(Clone)]
pub struct AxisSpec {
    /// Scale shared with the marks this axis describes.
    pub scale: ScaleLinear,
    /// Axis placement.
    pub orient: AxisOrient,
    /// Translation applied to the scale range.
    pub origin: Point,
    /// Approximate number of ticks (may be fractional).
    pub tick_count: f64,
    /// Tick mark length.
    pub tick_size_inner: f64,
    /// Domain end cap length.
    pub tick_size_outer: f64,
    /// Gap between tick marks and labels.
    pub tick_padding: f64,
    /// Label shift perpendicular to the axis, in ems.
    pub label_dy_em: f64,
    /// Styling.
    pub style: AxisStyle,
    /// Optional tick label formatter.
    ///
    /// When unset, labels use [`format_tick_with_step`].
    pub tick_formatter: Option<TickFormatter>,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("origin", &self.origin)
            .field("tick_count", &self.tick_count)
            .field("tick_size_inner", &self.tick_size_inner)
            .field("tick_size_outer", &self.tick_size_outer)
            .field("tick_padding", &self.tick_padding)
            .field("label_dy_em", &self.label_dy_em)
            .field("style", &self.style)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates an axis with ten ticks, 6px ticks and 3px padding.
    pub fn new(scale: ScaleLinear, orient: AxisOrient) -> Self {
        let label_dy_em = match orient {
            AxisOrient::Left => 0.32,
            AxisOrient::Bottom => 0.71,
        };
        Self {
            scale,
            orient,
            origin: Point::ZERO,
            tick_count: 10.0,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            label_dy_em,
            style: AxisStyle::default(),
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(scale: ScaleLinear) -> Self {
        Self::new(scale, AxisOrient::Left)
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(scale: ScaleLinear) -> Self {
        Self::new(scale, AxisOrient::Bottom)
    }

    /// Sets the axis origin.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: f64) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets both the tick length and the domain end cap length.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size_inner = tick_size;
        self.tick_size_outer = tick_size;
        self
    }

    /// Sets the domain end cap length.
    pub fn with_tick_size_outer(mut self, tick_size: f64) -> Self {
        self.tick_size_outer = tick_size;
        self
    }

    /// Sets the gap between ticks and labels.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Sets the perpendicular label shift, in ems.
    pub fn with_label_dy_em(mut self, label_dy_em: f64) -> Self {
        self.label_dy_em = label_dy_em;
        self
    }

    /// Sets the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets a custom tick label formatter.
    pub fn with_tick_formatter(
        mut self,
        f: impl Fn(f64, f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Labels ticks with their raw numeric value.
    pub fn with_raw_labels(self) -> Self {
        self.with_tick_formatter(|v, _step| format_raw(v))
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick_with_step(v, step),
        }
    }

    /// Resolves ticks and labels.
    pub fn geometry(&self) -> AxisGeometry {
        let step = self.scale.tick_step(self.tick_count);
        let ticks = self
            .scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| AxisTick {
                value,
                offset: self.scale.map(value),
                label: self.format_tick(value, step),
            })
            .collect();
        AxisGeometry {
            orient: self.orient,
            origin: self.origin,
            range: self.scale.range(),
            tick_size_inner: self.tick_size_inner,
            tick_size_outer: self.tick_size_outer,
            tick_padding: self.tick_padding,
            label_dy_em: self.label_dy_em,
            style: self.style,
            ticks,
        }
    }
}
