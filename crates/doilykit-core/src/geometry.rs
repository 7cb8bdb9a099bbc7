//! Pure conversions between pixel space and the doily's polar/sector space.
//!
//! Everything here is stateless and deterministic. Surface sizes arrive as
//! whole pixels; positions and scale factors are `f64` so capture and
//! rendering share the same math at any output resolution.

use serde::{Deserialize, Serialize};

/// Fraction of the shorter surface edge available to the drawing. The
/// remaining margin keeps strokes clear of the surface boundary.
pub const USABLE_AREA: f64 = 0.95;

/// One pen-scale unit expressed as a fraction of the radius.
pub const PEN_UNIT: f64 = 0.001;

/// Number of concentric guide rings.
pub const RING_COUNT: u32 = 10;

/// Width and height of a render or capture target, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Creates a new surface size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Length of the shorter edge.
    pub fn min_extent(&self) -> u32 {
        self.width.min(self.height)
    }
}

/// A position or offset in pixel coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Radius of the largest doily that fits the surface with the standard margin.
///
/// The result is floored to a whole pixel count; a surface smaller than a few
/// pixels yields zero, which capture and rendering treat as "draw nothing".
pub fn usable_radius(size: SurfaceSize) -> f64 {
    (f64::from(size.min_extent()) * USABLE_AREA / 2.0).floor()
}

/// Angular width of one sector, in radians.
pub fn sector_angle(sectors: u32) -> f64 {
    debug_assert!(sectors >= 1, "sector count must be at least 1, got {sectors}");
    std::f64::consts::TAU / f64::from(sectors)
}

/// Center of the surface.
pub fn center(size: SurfaceSize) -> Point {
    Point::new(f64::from(size.width) / 2.0, f64::from(size.height) / 2.0)
}

/// Re-expresses a surface position as an offset from the surface center.
pub fn centered(p: Point, size: SurfaceSize) -> Point {
    let c = center(size);
    Point::new(p.x - c.x, p.y - c.y)
}

/// Absolute stroke width for a pen scale at a given radius.
///
/// Pen width scales with output resolution, so an on-screen preview and a
/// large export differ only in absolute pixel count, not in proportion.
pub fn pen_width(pen_scale: u32, radius: f64) -> f64 {
    (f64::from(pen_scale) * radius * PEN_UNIT).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_radius_leaves_margin() {
        assert_eq!(usable_radius(SurfaceSize::new(200, 200)), 94.0);
        assert_eq!(usable_radius(SurfaceSize::new(1000, 1000)), 475.0);
        // Shorter edge wins.
        assert_eq!(
            usable_radius(SurfaceSize::new(1000, 200)),
            usable_radius(SurfaceSize::new(200, 200))
        );
    }

    #[test]
    fn test_usable_radius_degenerate_surface() {
        assert_eq!(usable_radius(SurfaceSize::new(0, 0)), 0.0);
        assert_eq!(usable_radius(SurfaceSize::new(2, 2)), 0.0);
    }

    #[test]
    fn test_pen_width_scales_with_radius() {
        // 200x200 surface: radius 94, pen scale 10 -> 1px stroke.
        assert_eq!(pen_width(10, 94.0), 1.0);
        // Same pen scale at export resolution stays proportional.
        assert_eq!(pen_width(10, 475.0), 5.0);
        assert_eq!(pen_width(100, 475.0), 48.0);
    }

    #[test]
    fn test_sector_angle() {
        assert!((sector_angle(4) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((sector_angle(1) - std::f64::consts::TAU).abs() < 1e-12);
    }

    #[test]
    fn test_centered_is_offset_from_center() {
        let size = SurfaceSize::new(200, 100);
        assert_eq!(center(size), Point::new(100.0, 50.0));
        let p = centered(Point::new(120.0, 30.0), size);
        assert_eq!(p, Point::new(20.0, -20.0));
    }
}
