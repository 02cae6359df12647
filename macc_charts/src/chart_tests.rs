// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use proptest::prelude::*;

use crate::{
    AxisOrient, ChartConfig, ChartError, ChartProps, DrawItem, FieldProblem, MaccChart,
    Record, RecordField, RectRole, Renderer, Scene, SceneStyle, Size, TextAnchor, TextRole,
};

fn rgba(c: Color) -> (u8, u8, u8, u8) {
    let c = c.to_rgba8();
    (c.r, c.g, c.b, c.a)
}

fn sample() -> Vec<Record> {
    vec![
        Record::new("Wind", 5.0, 50.0, "Onshore wind"),
        Record::new("Solar", -10.0, 100.0, "Solar PV"),
    ]
}

fn scene_for(records: &[Record], width: f64, height: f64) -> Scene {
    MaccChart::default()
        .scene(ChartProps::new(records, width, height))
        .expect("valid input")
}

fn kinds(scene: &Scene) -> Vec<&'static str> {
    scene
        .items
        .iter()
        .map(|item| match item {
            DrawItem::Text(t) => match t.role {
                TextRole::AxisTitle => "title",
                TextRole::BarLabel => "label",
                TextRole::TickLabel => "tick-label",
                TextRole::LegendLabel => "legend-label",
            },
            DrawItem::Rect(r) => match r.role {
                RectRole::Bar => "bar",
                RectRole::LegendFrame => "frame",
                RectRole::LegendSwatch => "swatch",
            },
            DrawItem::Axis(a) => match a.orient {
                AxisOrient::Left => "axis-left",
                AxisOrient::Bottom => "axis-bottom",
            },
        })
        .collect()
}

#[test]
fn two_record_chart_matches_reference_geometry() {
    let scene = scene_for(&sample(), 600.0, 400.0);

    assert_eq!(
        kinds(&scene),
        [
            "title",
            "title",
            "axis-left",
            "bar",
            "bar",
            "label",
            "label",
            "axis-bottom",
            "frame",
            "swatch",
            "swatch",
            "legend-label",
            "legend-label",
        ]
    );

    // x: [0, 150] -> [0, 480]; y: [-50, 45] -> [270, 0], rounded.
    let bars: Vec<_> = scene.bars().collect();
    assert_eq!(
        (bars[0].x, bars[0].y, bars[0].width, bars[0].height),
        (60.0, 143.0, 320.0, 28.0)
    );
    assert_eq!(
        (bars[1].x, bars[1].y, bars[1].width, bars[1].height),
        (380.0, 129.0, 160.0, 14.0)
    );
    assert_eq!(bars[1].x + bars[1].width, 540.0);
    assert_eq!(rgba(bars[0].fill.expect("solar fill")), (0xFD, 0xA3, 0x39, 0xFF));
    assert_eq!(rgba(bars[1].fill.expect("wind fill")), (0x94, 0xA5, 0x59, 0xFF));

    let labels: Vec<_> = scene.texts(TextRole::BarLabel).collect();
    assert_eq!(labels[0].text, "Solar PV");
    assert_eq!(labels[0].pos, Point::new(63.0, 181.0));
    assert_eq!(labels[1].text, "Onshore wind");
    assert_eq!(labels[1].pos, Point::new(383.0, 119.0));
    assert!(labels.iter().all(|l| l.anchor == TextAnchor::Start));

    let frame = scene
        .rects(RectRole::LegendFrame)
        .next()
        .expect("legend frame");
    assert_eq!(
        (frame.x, frame.y, frame.width, frame.height),
        (65.0, 15.0, 80.0, 25.0)
    );
    assert!(frame.fill.is_none());
    let stroke = frame.stroke.expect("frame stroke");
    assert_eq!(stroke.width, 0.5);
    assert_eq!(rgba(stroke.color), (0xDF, 0xDF, 0xDF, 0xFF));

    let legend: Vec<_> = scene.texts(TextRole::LegendLabel).collect();
    assert_eq!(legend[0].text, "Solar");
    assert_eq!(legend[0].pos, Point::new(95.0, 23.0));
    assert_eq!(legend[1].text, "Wind");
    assert_eq!(legend[1].pos, Point::new(95.0, 35.0));
}

#[test]
fn axes_are_placed_and_labelled() {
    let scene = scene_for(&sample(), 600.0, 400.0);
    let axes: Vec<_> = scene.axes().collect();
    assert_eq!(axes.len(), 2);

    let left = axes[0];
    assert_eq!(left.origin, Point::new(60.0, 15.0));
    assert_eq!(left.range, (270.0, 0.0));
    let left_labels: Vec<&str> = left.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        left_labels,
        [
            "\u{2212}50",
            "\u{2212}40",
            "\u{2212}30",
            "\u{2212}20",
            "\u{2212}10",
            "0",
            "10",
            "20",
            "30",
            "40"
        ]
    );
    assert_eq!(left.style.label_stroke_width, 0.3);

    let bottom = axes[1];
    assert_eq!(bottom.origin, Point::new(60.0, 285.0));
    assert_eq!(bottom.tick_size_inner, 5.0);
    let bottom_labels: Vec<&str> = bottom.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(
        bottom_labels,
        ["0", "20", "40", "60", "80", "100", "120", "140"]
    );
    assert_eq!(bottom.label_anchor(), TextAnchor::Middle);
}

#[test]
fn axis_titles_come_first() {
    let scene = scene_for(&sample(), 600.0, 400.0);
    let titles: Vec<_> = scene.texts(TextRole::AxisTitle).collect();
    assert_eq!(titles.len(), 2);
    assert_eq!(titles[0].pos, Point::new(300.0, 332.0));
    assert_eq!(titles[0].angle, 0.0);
    assert_eq!(titles[0].font_size, 11.0);
    assert_eq!(titles[0].font_weight, 500);
    assert_eq!(titles[1].angle, -90.0);
    assert_eq!(titles[1].pos, Point::new(12.0, 167.5));
    assert!(titles[1].text.starts_with("Cost per GHG"));
}

#[test]
fn custom_titles_are_used() {
    let chart = MaccChart::new(ChartConfig::default().with_titles("Capacity", "Cost"));
    let scene = chart
        .scene(ChartProps::new(&sample(), 600.0, 400.0))
        .expect("valid input");
    let titles: Vec<&str> = scene
        .texts(TextRole::AxisTitle)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(titles, ["Capacity", "Cost"]);
}

#[test]
fn empty_input_draws_axes_and_a_flat_legend() {
    let chart = MaccChart::default();
    let layout = chart
        .layout(&[], Size::new(600.0, 400.0))
        .expect("empty input is valid");
    assert_eq!(layout.scales.y.domain(), (-40.0, 40.0));
    assert_eq!(layout.scales.x.domain(), (0.0, 0.0));

    let scene = scene_for(&[], 600.0, 400.0);
    assert_eq!(
        kinds(&scene),
        ["title", "title", "axis-left", "axis-bottom", "frame"]
    );
    let frame = scene
        .rects(RectRole::LegendFrame)
        .next()
        .expect("legend frame");
    assert_eq!(frame.height, 0.0);
}

#[test]
fn zero_total_capacity_collapses_bars_without_nan() {
    let records = vec![
        Record::new("A", 1.0, 0.0, "a"),
        Record::new("B", 2.0, 0.0, "b"),
    ];
    let scene = scene_for(&records, 600.0, 400.0);
    for bar in scene.bars() {
        assert_eq!(bar.x, 60.0);
        assert_eq!(bar.width, 0.0);
        assert!(bar.y.is_finite() && bar.height.is_finite());
    }
}

fn assert_scene_is_finite(scene: &Scene) {
    for item in &scene.items {
        match item {
            DrawItem::Rect(r) => {
                assert!(
                    [r.x, r.y, r.width, r.height].iter().all(|v| v.is_finite()),
                    "{r:?}"
                );
            }
            DrawItem::Text(t) => assert!(t.pos.x.is_finite() && t.pos.y.is_finite(), "{t:?}"),
            DrawItem::Axis(a) => assert!(a.ticks.iter().all(|t| t.offset.is_finite()), "{a:?}"),
        }
    }
}

#[test]
fn overflowing_extents_stay_finite() {
    let records = vec![
        Record::new("A", -1e308, 1e308, "low"),
        Record::new("B", 1e308, 1e308, "high"),
    ];
    let layout = MaccChart::default()
        .layout(&records, Size::new(600.0, 400.0))
        .expect("finite inputs are valid");
    assert_eq!(layout.prepared.total_capacity, f64::INFINITY);
    for b in &layout.bars {
        assert_eq!((b.bar.x, b.bar.width), (60.0, 0.0));
        assert_eq!((b.bar.y, b.bar.height), (285.0, 0.0));
    }
    assert_scene_is_finite(&scene_for(&records, 600.0, 400.0));
}

#[test]
fn equal_costs_without_padding_collapse_the_y_domain() {
    let records = vec![
        Record::new("A", 5.0, 10.0, "first"),
        Record::new("B", 5.0, 20.0, "second"),
    ];
    let chart = MaccChart::new(ChartConfig::default().with_y_domain_padding(0.0));
    let layout = chart
        .layout(&records, Size::new(600.0, 400.0))
        .expect("valid input");
    assert_eq!(layout.scales.y.domain(), (5.0, 5.0));
    for b in &layout.bars {
        assert_eq!((b.bar.y, b.bar.height), (285.0, 0.0));
        assert!(b.label.pos.y.is_finite());
        assert!(b.label.pos.y < b.bar.bottom());
    }
    let ticks: Vec<&str> = layout
        .axis_left
        .ticks
        .iter()
        .map(|t| t.label.as_str())
        .collect();
    assert_eq!(ticks, ["5"]);

    let scene = chart
        .scene(ChartProps::new(&records, 600.0, 400.0))
        .expect("valid input");
    assert_scene_is_finite(&scene);
}

#[test]
fn signed_zero_costs_keep_input_order_in_the_chart() {
    let records = vec![
        Record::new("A", 0.0, 10.0, "0"),
        Record::new("B", -0.0, 10.0, "1"),
    ];
    let layout = MaccChart::default()
        .layout(&records, Size::new(600.0, 400.0))
        .expect("valid input");
    let order: Vec<&str> = layout.bars.iter().map(|b| b.label.text.as_str()).collect();
    assert_eq!(order, ["0", "1"]);
}

#[test]
fn malformed_record_fails_without_output() {
    let records = vec![
        Record::new("A", 1.0, 1.0, "a"),
        Record::new("B", f64::NAN, 1.0, "b"),
    ];
    let err = MaccChart::default()
        .scene(ChartProps::new(&records, 600.0, 400.0))
        .expect_err("NaN cost");
    assert_eq!(
        err,
        ChartError::MalformedRecord {
            index: 1,
            field: RecordField::MarginalAbatementCost,
            problem: FieldProblem::NonFinite,
        }
    );
}

#[test]
fn invalid_surface_size_is_rejected() {
    let chart = MaccChart::default();
    for (w, h) in [(0.0, 400.0), (600.0, -1.0), (f64::NAN, 400.0), (600.0, f64::INFINITY)] {
        let err = chart
            .scene(ChartProps::new(&sample(), w, h))
            .expect_err("bad size");
        assert!(matches!(err, ChartError::InvalidSize { .. }), "{w}x{h}");
    }
}

#[test]
fn palette_cycles_past_fifty_five_categories() {
    let records: Vec<Record> = (0_i32..60)
        .map(|i| Record::new(format!("cat{i}"), f64::from(i), 1.0, format!("alt{i}")))
        .collect();
    let scene = scene_for(&records, 600.0, 400.0);
    let fills: Vec<_> = scene
        .bars()
        .map(|b| rgba(b.fill.expect("every category has a color")))
        .collect();
    assert_eq!(fills.len(), 60);
    assert_eq!(fills[55], fills[0]);
    assert_eq!(fills[59], fills[4]);
    assert_ne!(fills[54], fills[0]);
}

#[test]
fn style_passes_through_to_the_scene() {
    let records = sample();
    let props = ChartProps {
        bold_text: true,
        header_font_size: Some(18.0),
        ..ChartProps::new(&records, 600.0, 400.0)
    };
    let scene = MaccChart::default().scene(props).expect("valid input");
    assert_eq!(
        scene.style,
        SceneStyle {
            bold_text: true,
            header_font_size: Some(18.0),
        }
    );
}

#[derive(Default)]
struct CountingRenderer {
    drawn: usize,
    passes: usize,
}

impl Renderer for CountingRenderer {
    fn clear(&mut self) {
        self.drawn = 0;
    }

    fn begin(&mut self, _width: f64, _height: f64, _style: &SceneStyle) {
        self.passes += 1;
    }

    fn draw(&mut self, _item: &DrawItem) {
        self.drawn += 1;
    }
}

#[test]
fn rerendering_does_not_accumulate() {
    let scene = scene_for(&sample(), 600.0, 400.0);
    let mut r = CountingRenderer::default();
    scene.render_to(&mut r);
    scene.render_to(&mut r);
    assert_eq!(r.passes, 2);
    assert_eq!(r.drawn, scene.items.len());
}

fn fingerprint(scene: &Scene) -> Vec<u64> {
    let mut out = Vec::new();
    for item in &scene.items {
        match item {
            DrawItem::Rect(r) => {
                out.extend([r.x, r.y, r.width, r.height].map(f64::to_bits));
            }
            DrawItem::Text(t) => {
                out.extend([t.pos.x, t.pos.y, t.angle].map(f64::to_bits));
            }
            DrawItem::Axis(a) => {
                out.extend(a.ticks.iter().map(|t| t.offset.to_bits()));
            }
        }
    }
    out
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0_u8..6, -200.0_f64..200.0, 0.0_f64..80.0), 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (cat, cost, capacity))| {
                // Coarse costs produce plenty of ties.
                let cost = (cost / 25.0).trunc() * 25.0;
                Record::new(format!("cat{cat}"), cost, capacity, format!("{i}"))
            })
            .collect()
    })
}

fn input_position(label: &str) -> usize {
    label.parse().unwrap_or(usize::MAX)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bars_tile_the_x_range(records in arb_records(), width in 300.0_f64..1200.0) {
        let chart = MaccChart::default();
        let layout = chart.layout(&records, Size::new(width, 400.0)).unwrap();
        let mut edge = 60.0;
        for b in &layout.bars {
            prop_assert!((b.bar.x - edge).abs() < 1e-9);
            edge = b.bar.right();
        }
        if layout.prepared.total_capacity > 0.0 {
            let expected = 60.0 + layout.scales.x.map(layout.prepared.total_capacity);
            prop_assert!((edge - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn bars_are_sorted_and_ties_keep_input_order(records in arb_records()) {
        let layout = MaccChart::default()
            .layout(&records, Size::new(600.0, 400.0))
            .unwrap();
        for pair in layout.bars.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.bar.cost <= b.bar.cost);
            if a.bar.cost == b.bar.cost {
                prop_assert!(input_position(&a.label.text) < input_position(&b.label.text));
            }
        }
    }

    #[test]
    fn labels_sit_on_the_side_given_by_cost_sign(records in arb_records()) {
        let layout = MaccChart::default()
            .layout(&records, Size::new(600.0, 400.0))
            .unwrap();
        for b in &layout.bars {
            if b.bar.cost < 0.0 {
                prop_assert!(b.label.pos.y > b.bar.bottom());
            } else {
                prop_assert!(b.label.pos.y < b.bar.bottom());
            }
            prop_assert_eq!(b.label.pos.x, b.bar.x + 3.0);
        }
    }

    #[test]
    fn a_category_has_one_color_everywhere(records in arb_records()) {
        let scene = scene_for(&records, 600.0, 400.0);
        let layout = MaccChart::default()
            .layout(&records, Size::new(600.0, 400.0))
            .unwrap();
        let legend: Vec<(String, (u8, u8, u8, u8))> = layout
            .legend
            .entries
            .iter()
            .map(|e| (e.label.clone(), rgba(e.fill)))
            .collect();
        for (bar, b) in scene.bars().zip(&layout.bars) {
            let fill = rgba(bar.fill.unwrap());
            let entry = legend.iter().find(|(name, _)| *name == b.bar.category).unwrap();
            prop_assert_eq!(fill, entry.1);
        }
        let swatches: Vec<_> = scene
            .rects(RectRole::LegendSwatch)
            .map(|r| rgba(r.fill.unwrap()))
            .collect();
        let expected: Vec<_> = legend.iter().map(|(_, c)| *c).collect();
        prop_assert_eq!(swatches, expected);
    }

    #[test]
    fn repeated_scenes_are_bit_identical(records in arb_records()) {
        let a = scene_for(&records, 640.0, 480.0);
        let b = scene_for(&records, 640.0, 480.0);
        prop_assert_eq!(kinds(&a), kinds(&b));
        prop_assert_eq!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn input_order_does_not_change_the_chart_when_costs_differ(
        costs in prop::collection::btree_set(-500_i32..500, 1..16),
    ) {
        let records: Vec<Record> = costs
            .iter()
            .map(|&c| Record::new(format!("c{}", c.rem_euclid(4)), f64::from(c), 3.0, format!("{c}")))
            .collect();
        let mut reversed = records.clone();
        reversed.reverse();
        let a = scene_for(&records, 600.0, 400.0);
        let b = scene_for(&reversed, 600.0, 400.0);
        let bars_a: Vec<_> = a.bars().map(|r| (r.x.to_bits(), r.height.to_bits())).collect();
        let bars_b: Vec<_> = b.bars().map(|r| (r.x.to_bits(), r.height.to_bits())).collect();
        prop_assert_eq!(bars_a, bars_b);
    }
}
