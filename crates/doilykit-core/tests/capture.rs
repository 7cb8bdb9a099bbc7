//! Property tests for point capture and reconstruction.

use doilykit_core::geometry::{self, SurfaceSize};
use doilykit_core::{DoilySettings, ScaledPoint};
use proptest::prelude::*;

fn unbounded(sectors: u32) -> DoilySettings {
    let mut settings = DoilySettings::new();
    settings.set_sectors(sectors);
    settings.set_circle_bounded(false);
    settings
}

proptest! {
    /// A scaled point reconstructed to pixels and captured again comes back
    /// with the same scales, for any sector count and in-range orbit.
    #[test]
    fn test_capture_round_trips_reconstruction(
        orbit in 0.05f64..0.9,
        fraction in 0.001f64..0.999,
        sectors in 1u32..=100,
    ) {
        let size = SurfaceSize::new(1000, 1000);
        let radius = geometry::usable_radius(size);
        let sector_angle = geometry::sector_angle(sectors);

        let original = ScaledPoint::new(orbit, fraction * f64::from(sectors));
        let pixel = original.absolute_position(radius, sector_angle);
        let captured = ScaledPoint::capture(pixel, size, &unbounded(sectors), None)
            .expect("in-range point must capture");

        prop_assert!((captured.orbit_scale - original.orbit_scale).abs() < 1e-6);
        prop_assert!(
            (captured.clockwise_scale - original.clockwise_scale).abs() < 1e-6,
            "clockwise {} vs {}", captured.clockwise_scale, original.clockwise_scale
        );
    }

    /// Capture with a previous point picks the revolution count that keeps
    /// the clockwise scale within half a revolution of the previous value.
    #[test]
    fn test_capture_unwraps_to_nearest_revolution(
        previous in -50.0f64..50.0,
        fraction in 0.0f64..1.0,
        sectors in 1u32..=100,
    ) {
        let size = SurfaceSize::new(1000, 1000);
        let radius = geometry::usable_radius(size);
        let sector_angle = geometry::sector_angle(sectors);

        let pixel = ScaledPoint::new(0.5, fraction * f64::from(sectors))
            .absolute_position(radius, sector_angle);
        let prev = ScaledPoint::new(0.5, previous);
        let captured = ScaledPoint::capture(pixel, size, &unbounded(sectors), Some(prev))
            .expect("in-range point must capture");

        prop_assert!(
            (captured.clockwise_scale - previous).abs() <= f64::from(sectors) / 2.0 + 1e-9,
            "unwrapped {} is not the closest revolution to {}",
            captured.clockwise_scale,
            previous
        );
    }

    /// The raw angle of a captured point always lands in its half-open
    /// sector bucket, never on the far edge.
    #[test]
    fn test_capture_without_history_stays_in_first_revolution(
        fraction in 0.0f64..1.0,
        sectors in 1u32..=100,
    ) {
        let size = SurfaceSize::new(1000, 1000);
        let radius = geometry::usable_radius(size);
        let sector_angle = geometry::sector_angle(sectors);

        let pixel = ScaledPoint::new(0.5, fraction * f64::from(sectors))
            .absolute_position(radius, sector_angle);
        let captured = ScaledPoint::capture(pixel, size, &unbounded(sectors), None)
            .expect("in-range point must capture");

        prop_assert!(captured.clockwise_scale >= 0.0);
        prop_assert!(captured.clockwise_scale < f64::from(sectors));
    }
}
