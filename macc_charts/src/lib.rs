// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marginal abatement cost (MACC) charts.
//!
//! A MACC chart draws one bar per abatement option, sorted by cost per unit of abated
//! emissions. Bars sit side by side with no gaps; a bar's width is its abatement capacity and
//! its height is its cost, above the zero line for costs and below it for savings.
//!
//! The crate is split into small stages:
//! - **Records** are validated and converted from host rows ([`RawRecord`]).
//! - **Preparation** sorts records and assigns category colors from a [`Palette`].
//! - **Scales** map capacity and cost into pixels, and produce axis ticks.
//! - **Layout** computes bars, labels, axes and the legend.
//! - A [`Scene`] lists everything to draw, in paint order, for any [`Renderer`].
//!
//! Text shaping is out of scope; text items store unshaped strings with an anchor point.
//!
//! ```
//! use macc_charts::{ChartProps, MaccChart, Record};
//!
//! let records = [
//!     Record::new("Wind", 5.0, 50.0, "Onshore wind"),
//!     Record::new("Solar", -10.0, 100.0, "Solar PV"),
//! ];
//! let scene = MaccChart::default()
//!     .scene(ChartProps::new(&records, 600.0, 400.0))
//!     .unwrap();
//! assert_eq!(scene.bars().count(), 2);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
mod chart;
#[cfg(test)]
mod chart_tests;
mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod legend;
mod palette;
mod prepare;
mod record;
mod scale;
mod scene;

pub use axis::{AxisGeometry, AxisOrient, AxisSpec, AxisStyle, AxisTick, TickFormatter};
pub use chart::{ChartLayout, ChartProps, ChartScales, MaccChart};
pub use config::{ChartConfig, LegendConfig, Margin};
pub use error::{ChartError, FieldProblem, RecordField};
pub use format::{format_raw, format_tick_with_step};
pub use layout::{BarGeometry, BarLayout, LabelGeometry, Size, layout_bars};
pub use legend::{LegendEntry, LegendGeometry, layout_legend};
pub use palette::{DEFAULT_PALETTE_HEX, NEUTRAL_GRAY, Palette, PaletteExhaustion, rgb_hex};
pub use prepare::{CategoryColor, PreparedData};
pub use record::{RawRecord, Record, records_from_raw};
pub use scale::ScaleLinear;
pub use scene::{
    DrawItem, RectItem, RectRole, Renderer, Scene, SceneStyle, StrokeStyle, TextAnchor,
    TextBaseline, TextItem, TextRole,
};
