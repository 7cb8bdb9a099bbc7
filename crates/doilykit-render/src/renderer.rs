//! Doily rasteriser built on tiny-skia.
//!
//! Layer order, later layers occluding earlier ones: background fill,
//! concentric guide rings, drawn lines (oldest first, each replicated across
//! all sectors), sector separators.

use doilykit_core::geometry::{self, Point, SurfaceSize, RING_COUNT};
use doilykit_core::{Color, DoilyState, Line, RenderError};
use image::{Rgba, RgbaImage};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::paths;

fn background_color() -> tiny_skia::Color {
    to_skia_color(Color::BLACK)
}
fn ring_color() -> tiny_skia::Color {
    to_skia_color(Color::DARK_GRAY)
}
fn separator_color() -> tiny_skia::Color {
    to_skia_color(Color::WHITE)
}

pub(crate) fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn hairline() -> Stroke {
    Stroke {
        width: 1.0,
        ..Stroke::default()
    }
}

/// Renders a doily state onto a fresh surface of the requested size.
///
/// The surface always matches the requested dimensions exactly. A surface too
/// small to hold a doily (usable radius of zero) gets the background fill and
/// nothing else rather than degenerate geometry.
pub fn render(state: &DoilyState, width: u32, height: u32) -> Result<Pixmap, RenderError> {
    let mut pixmap =
        Pixmap::new(width, height).ok_or(RenderError::EmptySurface { width, height })?;
    pixmap.fill(background_color());

    let size = SurfaceSize::new(width, height);
    if geometry::usable_radius(size) < 1.0 {
        return Ok(pixmap);
    }

    draw_rings(&mut pixmap, state, size);
    for line in state.lines() {
        draw_line(&mut pixmap, state, line, size);
    }
    draw_separators(&mut pixmap, state, size);
    Ok(pixmap)
}

/// Renders to an `image` buffer, for hosts exporting files or thumbnails.
pub fn render_image(state: &DoilyState, width: u32, height: u32) -> Result<RgbaImage, RenderError> {
    let pixmap = render(state, width, height)?;
    let data = pixmap.data();
    // All drawn content is opaque, so the premultiplied pixmap bytes are
    // valid straight RGBA as-is.
    Ok(RgbaImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgba([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]])
    }))
}

/// Draws the concentric guide rings.
fn draw_rings(pixmap: &mut Pixmap, state: &DoilyState, size: SurfaceSize) {
    if !state.settings.show_rings() {
        return;
    }
    let c = geometry::center(size);
    let radius = geometry::usable_radius(size);

    let mut paint = Paint::default();
    paint.set_color(ring_color());
    paint.anti_alias = state.settings.anti_alias();

    for i in 1..=RING_COUNT {
        let ring_radius = f64::from(i) * radius / f64::from(RING_COUNT);
        if let Some(path) = PathBuilder::from_circle(c.x as f32, c.y as f32, ring_radius as f32) {
            pixmap.stroke_path(&path, &paint, &hairline(), Transform::identity(), None);
        }
    }
}

/// Draws one line into every sector, mirrored as well when it reflects.
pub(crate) fn draw_line(pixmap: &mut Pixmap, state: &DoilyState, line: &Line, size: SurfaceSize) {
    if line.is_empty() {
        return;
    }
    let c = geometry::center(size);
    let radius = geometry::usable_radius(size);
    let sectors = state.settings.sectors();
    let sector_step = 360.0 / sectors as f32;

    let mut paint = Paint::default();
    paint.set_color(to_skia_color(line.color()));
    paint.anti_alias = state.settings.anti_alias();
    let stroke = Stroke {
        width: geometry::pen_width(line.pen_scale(), radius).max(1.0) as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };

    let (normal, reflected) = paths::line_polylines(line, size, sectors);
    let normal = build_path(&normal);
    let reflected = reflected.as_deref().and_then(build_path);

    // Each sector gets its own rotation about the center; transforms are
    // never accumulated across sectors, so repeated frames cannot drift.
    for sector in 0..sectors {
        let transform =
            Transform::from_rotate_at(sector as f32 * sector_step, c.x as f32, c.y as f32);
        if let Some(path) = normal.as_ref() {
            pixmap.stroke_path(path, &paint, &stroke, transform, None);
        }
        if let Some(path) = reflected.as_ref() {
            pixmap.stroke_path(path, &paint, &stroke, transform, None);
        }
    }
}

/// Draws the radial sector separators. With a single sector there is no
/// boundary to mark.
pub(crate) fn draw_separators(pixmap: &mut Pixmap, state: &DoilyState, size: SurfaceSize) {
    let sectors = state.settings.sectors();
    if !state.settings.show_separators() || sectors == 1 {
        return;
    }
    let c = geometry::center(size);
    let radius = geometry::usable_radius(size);
    let sector_step = 360.0 / sectors as f32;

    let mut paint = Paint::default();
    paint.set_color(separator_color());
    paint.anti_alias = state.settings.anti_alias();

    let mut pb = PathBuilder::new();
    pb.move_to(c.x as f32, c.y as f32);
    pb.line_to(c.x as f32, (c.y - radius) as f32);
    let Some(path) = pb.finish() else {
        return;
    };

    for sector in 0..sectors {
        let transform =
            Transform::from_rotate_at(sector as f32 * sector_step, c.x as f32, c.y as f32);
        pixmap.stroke_path(&path, &paint, &hairline(), transform, None);
    }
}

/// Builds a stroke path through the polyline. `None` for fewer than two
/// points; a press without a drag has no extent to stroke.
fn build_path(points: &[Point]) -> Option<tiny_skia::Path> {
    let mut iter = points.iter();
    let first = iter.next()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for p in iter {
        pb.line_to(p.x as f32, p.y as f32);
    }
    pb.finish()
}
