// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic scene description.
//!
//! Layout produces a [`Scene`]: plain data listing what to draw, in paint order. A
//! [`Renderer`] consumes it. [`Scene::render_to`] always clears the renderer first, so a
//! surface never accumulates geometry from an earlier pass.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::axis::AxisGeometry;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor point is on the vertical middle of the text.
    Middle,
    /// The anchor point is on the alphabetic baseline.
    Alphabetic,
    /// The anchor point is at the top of the text.
    Hanging,
}

/// A paint + width pair for outlines.
#[derive(Clone, Copy, Debug)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// What a text item labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Axis title.
    AxisTitle,
    /// Label next to a bar.
    BarLabel,
    /// Axis tick label.
    TickLabel,
    /// Legend entry label.
    LegendLabel,
}

/// What a rectangle item represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RectRole {
    /// A data bar.
    Bar,
    /// The legend border.
    LegendFrame,
    /// A legend color swatch.
    LegendSwatch,
}

/// A positioned text run (unshaped).
#[derive(Clone, Debug)]
pub struct TextItem {
    /// What this text labels.
    pub role: TextRole,
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// CSS font weight.
    pub font_weight: u16,
    /// Rotation in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Fill color.
    pub fill: Color,
}

impl TextItem {
    /// Creates a start-anchored, middle-aligned, unrotated black text item.
    pub fn new(role: TextRole, pos: Point, text: impl Into<String>) -> Self {
        Self {
            role,
            pos,
            text: text.into(),
            font_size: 10.0,
            font_weight: 400,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: peniko::color::palette::css::BLACK,
        }
    }

    /// Sets font size and weight.
    pub fn with_font(mut self, font_size: f64, font_weight: u16) -> Self {
        self.font_size = font_size;
        self.font_weight = font_weight;
        self
    }

    /// Sets the rotation angle in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical alignment.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill color.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }
}

/// An axis-aligned rectangle.
///
/// Position and size are stored as computed (not as corner points) so repeated layouts compare
/// bit-for-bit.
#[derive(Clone, Debug)]
pub struct RectItem {
    /// What this rectangle represents.
    pub role: RectRole,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
    /// Fill; `None` leaves the rectangle unfilled.
    pub fill: Option<Color>,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
}

impl RectItem {
    /// Returns the rectangle as a `kurbo` rect.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// One thing to draw.
#[derive(Clone, Debug)]
pub enum DrawItem {
    /// A text run.
    Text(TextItem),
    /// A rectangle.
    Rect(RectItem),
    /// An axis (domain line, ticks and tick labels).
    Axis(AxisGeometry),
}

/// Host styling values carried through to renderers.
///
/// Layout never reads these.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneStyle {
    /// Host "bold text" toggle.
    pub bold_text: bool,
    /// Host header font size, if any.
    pub header_font_size: Option<f64>,
}

/// A complete, immutable chart description in paint order.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Drawing surface width.
    pub width: f64,
    /// Drawing surface height.
    pub height: f64,
    /// Host styling passthrough.
    pub style: SceneStyle,
    /// Items in paint order.
    pub items: Vec<DrawItem>,
}

impl Scene {
    /// Clears `renderer` and draws every item in order.
    pub fn render_to(&self, renderer: &mut impl Renderer) {
        renderer.clear();
        renderer.begin(self.width, self.height, &self.style);
        for item in &self.items {
            renderer.draw(item);
        }
    }

    /// Returns rectangles with the given role, in paint order.
    pub fn rects(&self, role: RectRole) -> impl Iterator<Item = &RectItem> {
        self.items.iter().filter_map(move |item| match item {
            DrawItem::Rect(r) if r.role == role => Some(r),
            _ => None,
        })
    }

    /// Returns the data bars, in paint order.
    pub fn bars(&self) -> impl Iterator<Item = &RectItem> {
        self.rects(RectRole::Bar)
    }

    /// Returns text items with the given role, in paint order.
    pub fn texts(&self, role: TextRole) -> impl Iterator<Item = &TextItem> {
        self.items.iter().filter_map(move |item| match item {
            DrawItem::Text(t) if t.role == role => Some(t),
            _ => None,
        })
    }

    /// Returns the axes, in paint order.
    pub fn axes(&self) -> impl Iterator<Item = &AxisGeometry> {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Axis(a) => Some(a),
            _ => None,
        })
    }
}

/// A drawing backend.
///
/// Implementations own their surface. `clear` must drop everything drawn so far.
pub trait Renderer {
    /// Removes all previously drawn content.
    fn clear(&mut self);

    /// Called once per pass after `clear`, before any item.
    fn begin(&mut self, width: f64, height: f64, style: &SceneStyle) {
        let _ = (width, height, style);
    }

    /// Draws one item.
    fn draw(&mut self, item: &DrawItem);
}
