//! SVG visualization of canvas geometry.
//!
//! Draws two annotated panels: the screen (screen bounds, outer region,
//! visible empty regions, the inner region and its clipped part) and the
//! source frame with the subset that gets blitted.
//!
//! # Example
//!
//! ```
//! use zencanvas::{CanvasConfig, FrameInfo, Region, svg::render_canvas_svg};
//!
//! let screen = Region::new(0, 0, 800, 600);
//! let frame = FrameInfo::new(1280, 720);
//! let layout = CanvasConfig::new(Region::new(-100, 0, 900, 600))
//!     .keep_aspect_ratio(true)
//!     .compute_inner(&frame);
//! let clipped = layout.clip(screen, &frame);
//!
//! let svg = render_canvas_svg(&layout, &clipped, screen, &frame);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::clip::ClippedCanvas;
use crate::inner::{FrameInfo, InnerLayout};
use crate::region::Region;

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels, including the annotation line.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// One annotated panel.
struct Panel {
    label: String,
    annotation: String,
    /// Area the panel covers, in the coordinate space of its shapes.
    bounds: Region,
    /// Drawn in order, later shapes on top.
    shapes: Vec<Shape>,
}

struct Shape {
    region: Region,
    class: &'static str,
}

impl Shape {
    fn new(region: Region, class: &'static str) -> Self {
        Self { region, class }
    }
}

/// Render a complete SVG document for one computed canvas.
///
/// `layout` and `clipped` are the two stage results for `screen` and
/// `frame`.
pub fn render_canvas_svg(
    layout: &InnerLayout,
    clipped: &ClippedCanvas,
    screen: Region,
    frame: &FrameInfo,
) -> String {
    let panels = build_panels(layout, clipped, screen, frame);
    render_panels(&panels)
}

fn build_panels(
    layout: &InnerLayout,
    clipped: &ClippedCanvas,
    screen: Region,
    frame: &FrameInfo,
) -> [Panel; 2] {
    let outer = layout.outer_region;
    let inner = layout.inner_region;

    let mut shapes = vec![Shape::new(screen, "screen"), Shape::new(outer, "outer")];
    shapes.extend(
        clipped
            .visible_empty_regions()
            .map(|(_, region)| Shape::new(region, "empty")),
    );
    if inner != clipped.clipped_inner_region && !inner.is_empty() {
        shapes.push(Shape::new(inner, "offscreen"));
    }
    if clipped.is_inner_visible() {
        shapes.push(Shape::new(clipped.clipped_inner_region, "inner"));
    }

    let screen_panel = Panel {
        label: format!("Screen  {}×{}", screen.width, screen.height),
        annotation: format!(
            "outer {}×{} at ({}, {}), inner {}×{} at ({}, {}), visibility {:#04x}",
            outer.width,
            outer.height,
            outer.x,
            outer.y,
            inner.width,
            inner.height,
            inner.x,
            inner.y,
            clipped.visibility_mask()
        ),
        bounds: bounding_box(screen, outer),
        shapes,
    };

    let subset = clipped.source_subset;
    let full = Region::from_size(frame.size());
    let mut source_shapes = vec![Shape::new(full, "frame")];
    if !subset.is_empty() {
        source_shapes.push(Shape::new(
            Region::new(subset.x as i32, subset.y as i32, subset.width, subset.height),
            "subset",
        ));
    }

    let source_panel = Panel {
        label: format!("Source  {}×{}", frame.width, frame.height),
        annotation: format!(
            "subset {}×{} at ({}, {}), {}",
            subset.width, subset.height, subset.x, subset.y, layout.rotation
        ),
        bounds: full,
        shapes: source_shapes,
    };

    [screen_panel, source_panel]
}

/// Smallest region covering both `a` and `b`.
fn bounding_box(a: Region, b: Region) -> Region {
    Region::from_edges(
        a.left().min(b.left()),
        a.top().min(b.top()),
        a.right().max(b.right()),
        a.bottom().max(b.bottom()),
    )
}

/// Scale a region's size to fit within MAX_PANEL_W × MAX_PANEL_H,
/// preserving aspect ratio.
fn scale_to_fit(bounds: Region) -> (f64, f64, f64) {
    let w = bounds.width as f64;
    let h = bounds.height as f64;
    if w == 0.0 || h == 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

fn render_panels(panels: &[Panel]) -> String {
    let n = panels.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + n * (LABEL_H + MAX_PANEL_H) + (n - 1.0).max(0.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Light/dark mode via prefers-color-scheme
    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .screen { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .outer { fill: none; stroke: #d08a2c; stroke-width: 1.5; stroke-dasharray: 4,2; }
  .empty { fill: #444; fill-opacity: 0.35; stroke: #222; stroke-width: 0.5; }
  .offscreen { fill: none; stroke: #2c6faa; stroke-width: 1; stroke-dasharray: 2,2; }
  .inner { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .frame { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .subset { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .screen, .frame { fill: #2d2d2d; stroke: #555; }
    .outer { stroke: #e0a050; }
    .empty { fill: #111; stroke: #000; }
    .offscreen { stroke: #5a9fd4; }
    .inner, .subset { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    let mut y = MARGIN_TOP;
    let center_x = total_w / 2.0;

    for panel in panels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&panel.label)
        ));
        svg.push('\n');
        y += LABEL_H;

        let (pw, ph, scale) = scale_to_fit(panel.bounds);
        let panel_x = center_x - pw / 2.0;
        let panel_y = y;

        for shape in &panel.shapes {
            let r = shape.region;
            let sx = panel_x + (r.left() - panel.bounds.left()) as f64 * scale;
            let sy = panel_y + (r.top() - panel.bounds.top()) as f64 * scale;
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
                sx,
                sy,
                r.width as f64 * scale,
                r.height as f64 * scale,
                shape.class
            ));
            svg.push('\n');
        }

        if !panel.annotation.is_empty() {
            svg.push_str(&format!(
                r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
                center_x,
                panel_y + ph + 14.0,
                escape_xml(&panel.annotation)
            ));
            svg.push('\n');
        }

        y += MAX_PANEL_H + PANEL_GAP;
    }

    svg.push_str("</svg>\n");
    svg
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
