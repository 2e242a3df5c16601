//! SVG generation from scene snapshots

use crate::geometry::{corners, Point, Square};
use crate::scene::{Renderer, Scene};
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, x: f64, y: f64, w: f64, h: f64, class: &str, styles: &str) {
        self.elements.push(format!(
            r#"{}<rect class="{}{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            self.prefix(),
            class,
            fmt_num(x),
            fmt_num(y),
            fmt_num(w),
            fmt_num(h),
            styles
        ));
    }

    /// Add a line element
    pub fn add_line(&mut self, from: Point, to: Point, styles: &str) {
        self.elements.push(format!(
            r#"{}<line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
            self.indent_str(),
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            styles
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, center: Point, r: f64, class: Option<&str>, styles: &str) {
        let class_attr = class
            .map(|c| format!(r#" class="{}{}""#, self.prefix(), c))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<circle{} cx="{}" cy="{}" r="{}"{}/>"#,
            self.indent_str(),
            class_attr,
            fmt_num(center.x),
            fmt_num(center.y),
            fmt_num(r),
            styles
        ));
    }

    /// Add a polygon element
    pub fn add_polygon(&mut self, points: &[Point], styles: &str) {
        let points_str: String = points
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<polygon points="{}"{}/>"#,
            self.indent_str(),
            points_str,
            styles
        ));
    }

    /// Open a group for one drawing layer
    pub fn start_group(&mut self, class: &str, opacity: Option<f64>) {
        let opacity_attr = opacity
            .map(|o| format!(r#" opacity="{}""#, fmt_num(o)))
            .unwrap_or_default();
        self.elements.push(format!(
            r#"{}<g class="{}{}"{}>"#,
            self.indent_str(),
            self.prefix(),
            class,
            opacity_attr
        ));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
            fmt_num(self.config.width),
            fmt_num(self.config.height),
            fmt_num(self.config.width),
            fmt_num(self.config.height)
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render one scene snapshot to an SVG string
///
/// Layers, bottom to top: background and grid, past poses, target, the live
/// square with its corner markers, the ghost preview, and the guide circles
/// around the pivot.
pub fn render_scene_svg(scene: &Scene<'_>, config: &SvgConfig, stylesheet: &Stylesheet) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    let color = |token: &str| stylesheet.resolve_or_default(token);

    builder.add_rect(
        0.0,
        0.0,
        config.width,
        config.height,
        "background",
        &format!(r#" fill="{}""#, color("background")),
    );
    render_grid(&mut builder, config, &color("grid"));

    if !scene.history.is_empty() {
        builder.start_group("history", Some(config.history_opacity));
        let outline = outline_style(&color("history"));
        for past in scene.history {
            builder.add_polygon(&corners(past), &outline);
        }
        builder.end_group();
    }

    if let Some(target) = scene.target {
        builder.start_group("target", Some(config.overlay_opacity));
        builder.add_polygon(&corners(&target.as_square()), &outline_style(&color("target")));
        builder.end_group();
    }

    builder.start_group("square", None);
    render_square_body(
        &mut builder,
        scene.square,
        &color("square"),
        config.corner_radius,
        |index| {
            if scene.pivot.pivot_index() == Some(index) {
                color("pivot")
            } else {
                color("corner")
            }
        },
    );
    builder.end_group();

    if let Some(ghost) = &scene.ghost {
        builder.start_group("ghost", Some(config.overlay_opacity));
        render_square_body(&mut builder, ghost, &color("ghost"), config.corner_radius, |_| {
            color("corner")
        });
        builder.end_group();
    }

    if let (Some(armed), Some(radii)) = (scene.pivot.armed(), scene.guide_radii) {
        builder.start_group("guides", None);
        let styles = format!(r#" fill="none" stroke="{}""#, color("guide"));
        for r in radii {
            builder.add_circle(armed.pivot, r, None, &styles);
        }
        builder.end_group();
    }

    builder.build()
}

fn render_grid(builder: &mut SvgBuilder, config: &SvgConfig, stroke: &str) {
    if config.grid_spacing <= 0.0 {
        return;
    }

    builder.start_group("grid", None);
    let styles = format!(r#" stroke="{}""#, stroke);

    let mut x = 0.0;
    while x < config.width {
        builder.add_line(Point::new(x, 0.0), Point::new(x, config.height), &styles);
        x += config.grid_spacing;
    }

    let mut y = 0.0;
    while y < config.height {
        builder.add_line(Point::new(0.0, y), Point::new(config.width, y), &styles);
        y += config.grid_spacing;
    }
    builder.end_group();
}

fn render_square_body(
    builder: &mut SvgBuilder,
    square: &Square,
    fill: &str,
    marker_radius: f64,
    marker_color: impl Fn(usize) -> String,
) {
    let points = corners(square);
    builder.add_polygon(&points, &format!(r#" fill="{}""#, fill));
    for (index, corner) in points.iter().enumerate() {
        builder.add_circle(
            *corner,
            marker_radius,
            Some("corner"),
            &format!(r#" fill="{}""#, marker_color(index)),
        );
    }
}

fn outline_style(stroke: &str) -> String {
    format!(r#" fill="none" stroke="{}" stroke-width="2""#, stroke)
}

/// Format a coordinate with at most two decimals, without trailing zeros
fn fmt_num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// A [`Renderer`] that keeps the most recent frame as SVG
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    config: SvgConfig,
    stylesheet: Stylesheet,
    frames: usize,
    last_frame: Option<String>,
}

impl SvgRenderer {
    pub fn new(config: SvgConfig, stylesheet: Stylesheet) -> Self {
        Self {
            config,
            stylesheet,
            frames: 0,
            last_frame: None,
        }
    }

    /// Number of frames rendered so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }

    pub fn into_last_frame(self) -> Option<String> {
        self.last_frame
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(SvgConfig::default(), Stylesheet::default())
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, scene: &Scene<'_>) {
        self.frames += 1;
        self.last_frame = Some(render_scene_svg(scene, &self.config, &self.stylesheet));
    }
}
