// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `macc_charts` scenes.

use std::fmt::Write as _;

use macc_charts::{
    AxisGeometry, DrawItem, RectItem, Renderer, SceneStyle, TextAnchor, TextBaseline, TextItem,
    TextRole,
};
use peniko::Color;

/// A [`Renderer`] that accumulates an SVG document in memory.
#[derive(Debug, Default)]
pub(crate) struct SvgSurface {
    out: String,
    style: SceneStyle,
}

impl SvgSurface {
    /// Returns the finished document.
    pub(crate) fn to_svg_string(&self) -> String {
        let mut s = self.out.clone();
        s.push_str("</svg>\n");
        s
    }

    fn text(&mut self, t: &TextItem) {
        let font_size = match (t.role, self.style.header_font_size) {
            (TextRole::AxisTitle, Some(size)) => size,
            _ => t.font_size,
        };
        self.text_with(t, font_size, 0.0);
    }

    fn text_with(&mut self, t: &TextItem, font_size: f64, stroke_width: f64) {
        let weight = if self.style.bold_text {
            String::from("bold")
        } else {
            t.font_weight.to_string()
        };
        let _ = write!(
            self.out,
            r#"<text x="{}" y="{}" font-size="{}" font-weight="{}" dominant-baseline="{}" text-anchor="{}""#,
            t.pos.x,
            t.pos.y,
            font_size,
            weight,
            baseline_attr(t.baseline),
            anchor_attr(t.anchor),
        );
        if t.angle != 0.0 {
            let _ = write!(
                self.out,
                r#" transform="rotate({} {} {})""#,
                t.angle, t.pos.x, t.pos.y
            );
        }
        write_paint_attr(&mut self.out, "fill", Some(t.fill));
        if stroke_width > 0.0 {
            write_paint_attr(&mut self.out, "stroke", Some(t.fill));
            let _ = write!(self.out, r#" stroke-width="{stroke_width}""#);
        }
        self.out.push('>');
        self.out.push_str(&escape_xml(&t.text));
        self.out.push_str("</text>\n");
    }

    fn rect(&mut self, r: &RectItem) {
        let _ = write!(
            self.out,
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            r.x, r.y, r.width, r.height
        );
        write_paint_attr(&mut self.out, "fill", r.fill);
        if let Some(stroke) = r.stroke {
            write_paint_attr(&mut self.out, "stroke", Some(stroke.color));
            let _ = write!(self.out, r#" stroke-width="{}""#, stroke.width);
        }
        self.out.push_str("/>\n");
    }

    fn axis(&mut self, a: &AxisGeometry) {
        self.out.push_str("<g class=\"axis\">\n");
        let rule = a.style.rule;
        let _ = write!(self.out, r#"<path d="{}" fill="none""#, a.domain_path().to_svg());
        write_paint_attr(&mut self.out, "stroke", Some(rule.color));
        let _ = writeln!(self.out, r#" stroke-width="{}"/>"#, rule.width);

        for tick in &a.ticks {
            let (p0, p1) = a.tick_line(tick);
            let _ = write!(
                self.out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                p0.x, p0.y, p1.x, p1.y
            );
            write_paint_attr(&mut self.out, "stroke", Some(rule.color));
            let _ = writeln!(self.out, r#" stroke-width="{}"/>"#, rule.width);
        }
        for tick in &a.ticks {
            let label = a.label_item(tick);
            self.text_with(&label, label.font_size, a.style.label_stroke_width);
        }
        self.out.push_str("</g>\n");
    }
}

impl Renderer for SvgSurface {
    fn clear(&mut self) {
        self.out.clear();
        self.style = SceneStyle::default();
    }

    fn begin(&mut self, width: f64, height: f64, style: &SceneStyle) {
        self.style = *style;
        let _ = writeln!(
            self.out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" font-family="sans-serif">"#
        );
    }

    fn draw(&mut self, item: &DrawItem) {
        match item {
            DrawItem::Text(t) => self.text(t),
            DrawItem::Rect(r) => self.rect(r),
            DrawItem::Axis(a) => self.axis(a),
        }
    }
}

fn baseline_attr(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Hanging => "hanging",
    }
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn svg_paint(color: Option<Color>) -> (String, Option<f64>) {
    match color {
        Some(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, opacity)
        }
        None => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, color: Option<Color>) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
