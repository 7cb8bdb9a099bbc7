//! An ordered run of scaled points sharing one set of pen attributes.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{self, Point, SurfaceSize};
use crate::point::ScaledPoint;
use crate::settings::DoilySettings;

/// Side length of the notional square plane interpolation happens in. A
/// fixed plane makes the number of inserted points a function of angular and
/// radial distance, not of the on-screen panel size.
const INTERPOLATION_PLANE: u32 = 100_000;

/// Scaled separation (orbit or clockwise) above which a midpoint is inserted.
const INTERPOLATION_THRESHOLD: f64 = 0.05;

/// Hard stop for midpoint recursion. Each level halves the remaining gap, so
/// this bounds the work even for pathological floating-point input.
const MAX_INTERPOLATION_DEPTH: u32 = 32;

/// One drawn stroke: pen attributes fixed at creation plus an append-only
/// sequence of scaled points in drawing order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pen_scale: u32,
    color: Color,
    reflect: bool,
    points: Vec<ScaledPoint>,
}

impl Line {
    /// Creates an empty line with pen attributes captured from the settings.
    /// Later settings changes do not alter this line.
    pub fn from_settings(settings: &DoilySettings) -> Self {
        Self {
            pen_scale: settings.pen_scale(),
            color: settings.pen_color(),
            reflect: settings.reflect(),
            points: Vec::new(),
        }
    }

    /// Gets the pen scale the line was drawn with.
    pub fn pen_scale(&self) -> u32 {
        self.pen_scale
    }

    /// Gets the line color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the line is mirrored across the vertical sector axis.
    pub fn reflect(&self) -> bool {
        self.reflect
    }

    /// The captured points in drawing order.
    pub fn points(&self) -> &[ScaledPoint] {
        &self.points
    }

    /// Number of captured points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no point has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a center-relative pixel position as a scaled point, inserting
    /// interpolated midpoints first when smoothing is enabled.
    ///
    /// A position that fails capture (out of domain, outside the circle
    /// bound) is dropped without disturbing the line.
    pub fn add_point(&mut self, centered: Point, size: SurfaceSize, settings: &DoilySettings) {
        let Some(point) =
            ScaledPoint::capture(centered, size, settings, self.points.last().copied())
        else {
            tracing::trace!(
                "Discarded out-of-domain point at ({}, {})",
                centered.x,
                centered.y
            );
            return;
        };
        if settings.interpolate() {
            self.fill_gap(point, settings, 0);
        }
        self.points.push(point);
    }

    /// Recursively fills the start half of the gap towards `end` with
    /// midpoints; `end` itself is pushed by the caller. Works in the fixed
    /// interpolation plane so output resolution does not change the inserted
    /// point count.
    fn fill_gap(&mut self, end: ScaledPoint, settings: &DoilySettings, depth: u32) {
        if depth >= MAX_INTERPOLATION_DEPTH {
            return;
        }
        let Some(start) = self.points.last().copied() else {
            return;
        };

        let plane = SurfaceSize::new(INTERPOLATION_PLANE, INTERPOLATION_PLANE);
        let radius = geometry::usable_radius(plane);
        let sector_angle = geometry::sector_angle(settings.sectors());
        let a = start.absolute_position(radius, sector_angle);
        let b = end.absolute_position(radius, sector_angle);
        let mid = Point::new(a.x + (b.x - a.x) / 2.0, a.y + (b.y - a.y) / 2.0);

        let Some(mid) = ScaledPoint::capture(mid, plane, settings, Some(start)) else {
            return;
        };
        let wide = (mid.orbit_scale - start.orbit_scale).abs() > INTERPOLATION_THRESHOLD
            || (mid.clockwise_scale - start.clockwise_scale).abs() > INTERPOLATION_THRESHOLD;
        if wide {
            // Subdivide up to the midpoint, then commit it; the list tail is
            // still `start` until the recursion below has finished.
            self.fill_gap(mid, settings, depth + 1);
            self.points.push(mid);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(sectors: u32, interpolate: bool) -> DoilySettings {
        let mut settings = DoilySettings::new();
        settings.set_sectors(sectors);
        settings.set_interpolate(interpolate);
        settings.set_circle_bounded(false);
        settings
    }

    /// Pixel position for a clockwise fraction of a single-sector doily on a
    /// 1000x1000 surface.
    fn pixel_at(orbit: f64, clockwise: f64) -> Point {
        let radius = geometry::usable_radius(SurfaceSize::new(1000, 1000));
        ScaledPoint::new(orbit, clockwise).absolute_position(radius, geometry::sector_angle(1))
    }

    #[test]
    fn test_attributes_fixed_at_creation() {
        let mut s = DoilySettings::new();
        s.set_pen_scale(25);
        s.set_reflect(true);
        s.set_pen_color(Color::opaque(10, 20, 30));

        let line = Line::from_settings(&s);
        s.set_pen_scale(90);
        s.set_reflect(false);
        s.set_pen_color(Color::WHITE);

        assert_eq!(line.pen_scale(), 25);
        assert!(line.reflect());
        assert_eq!(line.color(), Color::opaque(10, 20, 30));
    }

    #[test]
    fn test_no_interpolation_keeps_raw_samples() {
        let size = SurfaceSize::new(1000, 1000);
        let s = settings(1, false);
        let mut line = Line::from_settings(&s);
        line.add_point(pixel_at(0.5, 0.05), size, &s);
        line.add_point(pixel_at(0.5, 0.45), size, &s);
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn test_interpolation_fills_wide_angular_jump() {
        let size = SurfaceSize::new(1000, 1000);
        let s = settings(1, true);
        let mut line = Line::from_settings(&s);
        line.add_point(pixel_at(0.5, 0.05), size, &s);
        line.add_point(pixel_at(0.5, 0.45), size, &s);

        // A 0.4-of-a-revolution jump is far above the threshold; midpoints
        // must have been inserted between the two raw samples.
        assert!(line.len() > 2, "expected inserted midpoints, got {}", line.len());
        let points = line.points();
        for pair in points.windows(2) {
            assert!(
                pair[1].clockwise_scale >= pair[0].clockwise_scale - 1e-9,
                "inserted points must keep drawing order"
            );
        }
        assert!((points[0].clockwise_scale - 0.05).abs() < 1e-6);
        assert!((points[points.len() - 1].clockwise_scale - 0.45).abs() < 1e-6);
    }

    #[test]
    fn test_interpolation_inserts_nothing_for_close_samples() {
        let size = SurfaceSize::new(1000, 1000);
        let s = settings(1, true);
        let mut line = Line::from_settings(&s);
        line.add_point(pixel_at(0.5, 0.100), size, &s);
        line.add_point(pixel_at(0.5, 0.102), size, &s);
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn test_rejected_point_leaves_line_untouched() {
        let size = SurfaceSize::new(1000, 1000);
        let mut s = settings(8, true);
        s.set_circle_bounded(true);
        let mut line = Line::from_settings(&s);
        line.add_point(Point::new(0.0, -100.0), size, &s);
        line.add_point(Point::new(0.0, -10_000.0), size, &s);
        assert_eq!(line.len(), 1);
    }
}
