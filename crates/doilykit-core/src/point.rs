//! The resolution-independent representation of one captured point.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::geometry::{self, Point, SurfaceSize};
use crate::settings::DoilySettings;

/// A captured point, scaled so it can be reconstructed at any resolution.
///
/// `orbit_scale` is the distance from center as a fraction of the usable
/// radius (values above 1 only occur in unbounded mode). `clockwise_scale`
/// is the angular position as a fraction of one sector's arc, measured
/// clockwise from straight up, and deliberately left unwrapped: consecutive
/// points of one line carry whole-revolution offsets (multiples of the sector
/// count) so a drag across the sector seam stays continuous instead of
/// snapping back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaledPoint {
    pub orbit_scale: f64,
    pub clockwise_scale: f64,
}

impl ScaledPoint {
    /// Creates a scaled point from raw scale values.
    pub fn new(orbit_scale: f64, clockwise_scale: f64) -> Self {
        Self {
            orbit_scale,
            clockwise_scale,
        }
    }

    /// Converts a center-relative pixel position into a scaled point.
    ///
    /// Returns `None` when the position is non-finite, when the surface is
    /// too small to have a radius, when a floating-point artifact at an exact
    /// sector boundary leaves the angle outside every bucket, or when circle
    /// bounding is on and the point would not keep the full stroke width
    /// inside the doily circle.
    ///
    /// `prev` is the immediately preceding point of the same line; when
    /// present, the clockwise scale is shifted by whole revolutions so that
    /// `|new - prev|` is minimal.
    pub fn capture(
        centered: Point,
        size: SurfaceSize,
        settings: &DoilySettings,
        prev: Option<ScaledPoint>,
    ) -> Option<ScaledPoint> {
        if !centered.is_finite() {
            return None;
        }
        let radius = geometry::usable_radius(size);
        if radius <= 0.0 {
            return None;
        }
        let sectors = settings.sectors();
        let sector_angle = geometry::sector_angle(sectors);

        let distance = centered.x.hypot(centered.y);
        // The 2.5pi offset moves the zero reference from the positive x-axis
        // to straight up and flips the atan2 convention to clockwise.
        let angle = (centered.y.atan2(centered.x) + 2.5 * PI).rem_euclid(TAU);

        // Half-open sector buckets: an exact-boundary artifact that lands
        // outside every bucket rejects the point rather than panicking.
        let sector = (angle / sector_angle).floor();
        if !(0.0..f64::from(sectors)).contains(&sector) {
            return None;
        }

        if settings.circle_bounded() {
            let max_distance =
                radius - geometry::pen_width(settings.pen_scale(), radius) / 2.0;
            if distance >= max_distance {
                return None;
            }
        }

        let orbit_scale = distance / radius;
        let raw = angle / sector_angle;
        let clockwise_scale = match prev {
            Some(prev) => {
                let wraps = ((prev.clockwise_scale - raw) / f64::from(sectors)).round();
                raw + f64::from(sectors) * wraps
            }
            None => raw,
        };
        Some(ScaledPoint::new(orbit_scale, clockwise_scale))
    }

    /// Reconstructs the absolute offset from center for a given radius and
    /// sector angle.
    ///
    /// The result is unrounded; snapping to pixel centres is the renderer's
    /// job, so capture/reconstruct round trips stay exact.
    pub fn absolute_position(&self, radius: f64, sector_angle: f64) -> Point {
        let angle = self.clockwise_scale * sector_angle;
        let orbit = self.orbit_scale * radius;
        Point::new(angle.sin() * orbit, -(angle.cos()) * orbit)
    }
}
