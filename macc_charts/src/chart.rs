// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition.
//!
//! [`MaccChart`] runs the whole pipeline for one render: validate the input, prepare records,
//! build scales, lay out bars, labels, axes and legend, and assemble a [`Scene`]. Nothing is
//! cached between calls; the same input always yields the same scene.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;

use crate::axis::{AxisGeometry, AxisSpec, AxisStyle};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::layout::{BarLayout, Size, layout_bars};
use crate::legend::{LegendGeometry, layout_legend};
use crate::prepare::PreparedData;
use crate::record::Record;
use crate::scale::ScaleLinear;
use crate::scene::{
    DrawItem, RectItem, RectRole, Scene, SceneStyle, StrokeStyle, TextAnchor, TextBaseline,
    TextItem, TextRole,
};

/// Everything a host hands over for one render.
#[derive(Clone, Copy, Debug)]
pub struct ChartProps<'a> {
    /// Input rows, in any order.
    pub records: &'a [Record],
    /// Drawing surface width in pixels.
    pub width: f64,
    /// Drawing surface height in pixels.
    pub height: f64,
    /// Host styling toggle, passed through to the scene.
    pub bold_text: bool,
    /// Host header font size, passed through to the scene.
    pub header_font_size: Option<f64>,
}

impl<'a> ChartProps<'a> {
    /// Creates props with default passthrough styling.
    pub fn new(records: &'a [Record], width: f64, height: f64) -> Self {
        Self {
            records,
            width,
            height,
            bold_text: false,
            header_font_size: None,
        }
    }
}

/// The capacity and cost scales for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    /// Inner plot size (outer size minus margins).
    pub inner: Size,
    /// Capacity to horizontal pixels.
    pub x: ScaleLinear,
    /// Cost to vertical pixels (inverted, rounded).
    pub y: ScaleLinear,
}

impl ChartScales {
    /// Builds both scales from prepared data and the outer surface size.
    pub fn build(prepared: &PreparedData, size: Size, config: &ChartConfig) -> Self {
        let m = config.margin;
        let inner = Size::new(
            size.width - m.left - m.right,
            size.height - m.top - m.bottom,
        );

        let x = ScaleLinear::new(
            (0.0, prepared.total_capacity),
            (0.0, inner.width - config.x_range_reserve),
        );

        let (min, max) = prepared.cost_extent().unwrap_or((0.0, 0.0));
        let pad = config.y_domain_padding;
        let y = ScaleLinear::new(
            (min - pad, max + pad),
            (inner.height - config.y_range_reserve, 0.0),
        )
        .with_round(true);

        Self { inner, x, y }
    }
}

/// The full geometry of one render, before it is flattened into a [`Scene`].
#[derive(Clone, Debug)]
pub struct ChartLayout {
    /// Outer surface size.
    pub size: Size,
    /// Prepared (sorted, colored) data.
    pub prepared: PreparedData,
    /// Scales used for every position below.
    pub scales: ChartScales,
    /// Left cost axis.
    pub axis_left: AxisGeometry,
    /// Bottom capacity axis.
    pub axis_bottom: AxisGeometry,
    /// One entry per record, in sorted order.
    pub bars: Vec<BarLayout>,
    /// Category legend.
    pub legend: LegendGeometry,
}

/// A marginal abatement cost chart.
#[derive(Clone, Debug, Default)]
pub struct MaccChart {
    config: ChartConfig,
}

impl MaccChart {
    /// Creates a chart with the given configuration.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Computes all chart geometry for `records` on a surface of `size`.
    ///
    /// Fails without producing any geometry if the size is not positive and finite, or if any
    /// record has a non-finite cost or capacity.
    pub fn layout(&self, records: &[Record], size: Size) -> Result<ChartLayout, ChartError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(size.width) || !valid(size.height) {
            return Err(ChartError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        for (index, record) in records.iter().enumerate() {
            record.validate(index)?;
        }

        let config = &self.config;
        let prepared = PreparedData::new(records, &config.palette);
        let scales = ChartScales::build(&prepared, size, config);

        let axis_left = AxisSpec::left(scales.y)
            .with_origin(Point::new(
                config.margin.left + config.left_axis_dx,
                config.margin.top,
            ))
            .with_tick_count(config.left_tick_count)
            .with_tick_size(config.left_tick_size)
            .with_tick_padding(config.tick_padding)
            .with_style(self.axis_style())
            .geometry();

        let axis_bottom = AxisSpec::bottom(scales.x)
            .with_origin(Point::new(
                config.bottom_axis_x,
                scales.inner.height - config.bottom_axis_rise,
            ))
            .with_tick_count(scales.inner.width / config.bottom_tick_spacing)
            .with_tick_size(config.bottom_tick_size)
            .with_tick_padding(config.tick_padding)
            .with_label_dy_em(1.0)
            .with_style(self.axis_style())
            .with_raw_labels()
            .geometry();

        let bars = layout_bars(&prepared, &scales.x, &scales.y, config);
        let legend = layout_legend(&prepared.categories, &config.legend);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            records = prepared.sorted.len(),
            categories = prepared.categories.len(),
            total_capacity = prepared.total_capacity,
            width = size.width,
            height = size.height,
            "macc chart laid out"
        );

        Ok(ChartLayout {
            size,
            prepared,
            scales,
            axis_left,
            axis_bottom,
            bars,
            legend,
        })
    }

    /// Lays out the chart and flattens it into draw items.
    ///
    /// Paint order: axis titles, left axis, bars, bar labels, bottom axis, legend frame,
    /// legend swatches, legend labels.
    pub fn scene(&self, props: ChartProps<'_>) -> Result<Scene, ChartError> {
        let size = Size::new(props.width, props.height);
        let layout = self.layout(props.records, size)?;
        let config = &self.config;
        let n = layout.bars.len();
        let mut items = Vec::with_capacity(6 + 4 * n);

        items.push(DrawItem::Text(
            self.text(
                TextRole::AxisTitle,
                Point::new(size.width / 2.0, size.height - config.x_title_rise),
                &config.x_title,
            )
            .with_font(config.title_font_size, config.font_weight)
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Alphabetic),
        ));
        items.push(DrawItem::Text(
            self.text(
                TextRole::AxisTitle,
                Point::new(config.y_title_x, layout.scales.inner.height / 2.0),
                &config.y_title,
            )
            .with_font(config.title_font_size, config.font_weight)
            .with_anchor(TextAnchor::Middle)
            .with_baseline(TextBaseline::Alphabetic)
            .with_angle(-90.0),
        ));

        items.push(DrawItem::Axis(layout.axis_left));

        items.extend(layout.bars.iter().map(|b| {
            DrawItem::Rect(RectItem {
                role: RectRole::Bar,
                x: b.bar.x,
                y: b.bar.y,
                width: b.bar.width,
                height: b.bar.height,
                fill: b.bar.fill,
                stroke: None,
            })
        }));
        items.extend(layout.bars.into_iter().map(|b| {
            DrawItem::Text(
                self.text(TextRole::BarLabel, b.label.pos, b.label.text)
                    .with_anchor(b.label.anchor)
                    .with_baseline(b.label.baseline),
            )
        }));

        items.push(DrawItem::Axis(layout.axis_bottom));

        let legend = layout.legend;
        items.push(DrawItem::Rect(RectItem {
            role: RectRole::LegendFrame,
            x: legend.frame.x0,
            y: legend.frame.y0,
            width: legend.frame.width(),
            height: legend.frame.height(),
            fill: None,
            stroke: Some(StrokeStyle::solid(
                config.legend.frame_stroke,
                config.legend.frame_stroke_width,
            )),
        }));
        items.extend(legend.entries.iter().map(|e| {
            DrawItem::Rect(RectItem {
                role: RectRole::LegendSwatch,
                x: e.swatch.x0,
                y: e.swatch.y0,
                width: e.swatch.width(),
                height: e.swatch.height(),
                fill: Some(e.fill),
                stroke: None,
            })
        }));
        items.extend(legend.entries.into_iter().map(|e| {
            DrawItem::Text(self.text(TextRole::LegendLabel, e.label_pos, e.label))
        }));

        Ok(Scene {
            width: size.width,
            height: size.height,
            style: SceneStyle {
                bold_text: props.bold_text,
                header_font_size: props.header_font_size,
            },
            items,
        })
    }

    fn text(
        &self,
        role: TextRole,
        pos: Point,
        text: impl Into<alloc::string::String>,
    ) -> TextItem {
        TextItem::new(role, pos, text)
            .with_font(self.config.font_size, self.config.font_weight)
            .with_fill(self.config.text_fill)
    }

    fn axis_style(&self) -> AxisStyle {
        let c = &self.config;
        AxisStyle {
            rule: StrokeStyle::solid(c.text_fill, c.axis_stroke_width),
            label_fill: c.text_fill,
            label_font_size: c.font_size,
            label_font_weight: c.font_weight,
            label_stroke_width: c.axis_label_stroke_width,
        }
    }
}
