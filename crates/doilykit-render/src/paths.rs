//! Polyline reconstruction for drawn lines.

use doilykit_core::geometry::{self, Point, SurfaceSize};
use doilykit_core::Line;

/// Reconstructs the on-surface polyline for one line: absolute offsets
/// snapped to whole pixels and translated to the surface center.
///
/// The second polyline is the mirror across the vertical sector axis and is
/// present only when the line reflects; its x-offsets are the exact negation
/// of the normal path's, point for point.
pub fn line_polylines(
    line: &Line,
    size: SurfaceSize,
    sectors: u32,
) -> (Vec<Point>, Option<Vec<Point>>) {
    let c = geometry::center(size);
    let radius = geometry::usable_radius(size);
    let sector_angle = geometry::sector_angle(sectors);

    let mut normal = Vec::with_capacity(line.len());
    let mut reflected = if line.reflect() {
        Some(Vec::with_capacity(line.len()))
    } else {
        None
    };
    for point in line.points() {
        let offset = point.absolute_position(radius, sector_angle);
        let (dx, dy) = (offset.x.round(), offset.y.round());
        normal.push(Point::new(c.x + dx, c.y + dy));
        if let Some(reflected) = reflected.as_mut() {
            reflected.push(Point::new(c.x - dx, c.y + dy));
        }
    }
    (normal, reflected)
}
