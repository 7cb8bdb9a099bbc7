//! Doily capture and display settings with validated mutation.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Smallest allowed sector count.
pub const MIN_SECTORS: u32 = 1;
/// Largest allowed sector count.
pub const MAX_SECTORS: u32 = 100;
/// Smallest allowed pen scale.
pub const MIN_PEN_SCALE: u32 = 1;
/// Largest allowed pen scale.
pub const MAX_PEN_SCALE: u32 = 100;

const DEFAULT_SECTORS: u32 = 20;
const DEFAULT_PEN_SCALE: u32 = 10;

/// Settings for capturing and displaying a doily.
///
/// Bounded values are clamped at the setter, so downstream geometry can rely
/// on `1 <= sectors <= 100` and `1 <= pen_scale <= 100` without re-checking;
/// in particular a zero sector count (and its division by zero) is
/// structurally impossible.
///
/// Pen attributes (`pen_scale`, `pen_color`, `reflect`) only affect lines
/// started after the change; existing lines keep the attributes they were
/// drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoilySettings {
    sectors: u32,
    pen_scale: u32,
    pen_color: Color,
    reflect: bool,
    circle_bounded: bool,
    interpolate: bool,
    show_rings: bool,
    show_separators: bool,
    raster_cache: bool,
    anti_alias: bool,
}

impl DoilySettings {
    /// Creates settings with the default values.
    pub fn new() -> Self {
        Self {
            sectors: DEFAULT_SECTORS,
            pen_scale: DEFAULT_PEN_SCALE,
            pen_color: Color::WHITE,
            reflect: false,
            circle_bounded: true,
            interpolate: true,
            show_rings: true,
            show_separators: true,
            raster_cache: false,
            anti_alias: false,
        }
    }

    /// Gets the number of sectors.
    pub fn sectors(&self) -> u32 {
        self.sectors
    }

    /// Sets the number of sectors, clamped to `[MIN_SECTORS, MAX_SECTORS]`.
    pub fn set_sectors(&mut self, sectors: u32) {
        let clamped = sectors.clamp(MIN_SECTORS, MAX_SECTORS);
        if clamped != sectors {
            tracing::warn!("Sector count {} out of range, clamped to {}", sectors, clamped);
        }
        self.sectors = clamped;
    }

    /// Gets the pen scale.
    pub fn pen_scale(&self) -> u32 {
        self.pen_scale
    }

    /// Sets the pen scale, clamped to `[MIN_PEN_SCALE, MAX_PEN_SCALE]`.
    pub fn set_pen_scale(&mut self, pen_scale: u32) {
        let clamped = pen_scale.clamp(MIN_PEN_SCALE, MAX_PEN_SCALE);
        if clamped != pen_scale {
            tracing::warn!("Pen scale {} out of range, clamped to {}", pen_scale, clamped);
        }
        self.pen_scale = clamped;
    }

    /// Gets the pen color for new lines.
    pub fn pen_color(&self) -> Color {
        self.pen_color
    }

    /// Sets the pen color for new lines.
    pub fn set_pen_color(&mut self, pen_color: Color) {
        self.pen_color = pen_color;
    }

    /// Whether new lines are mirrored across the vertical sector axis.
    pub fn reflect(&self) -> bool {
        self.reflect
    }

    /// Sets whether new lines are mirrored.
    pub fn set_reflect(&mut self, reflect: bool) {
        self.reflect = reflect;
    }

    /// Whether captured points must stay inside the doily circle.
    pub fn circle_bounded(&self) -> bool {
        self.circle_bounded
    }

    /// Sets whether captured points must stay inside the doily circle.
    pub fn set_circle_bounded(&mut self, circle_bounded: bool) {
        self.circle_bounded = circle_bounded;
    }

    /// Whether coarse input samples are smoothed by midpoint interpolation.
    pub fn interpolate(&self) -> bool {
        self.interpolate
    }

    /// Sets whether input samples are smoothed by midpoint interpolation.
    pub fn set_interpolate(&mut self, interpolate: bool) {
        self.interpolate = interpolate;
    }

    /// Whether concentric guide rings are drawn.
    pub fn show_rings(&self) -> bool {
        self.show_rings
    }

    /// Sets whether concentric guide rings are drawn.
    pub fn set_show_rings(&mut self, show_rings: bool) {
        self.show_rings = show_rings;
    }

    /// Whether sector boundary separators are drawn.
    pub fn show_separators(&self) -> bool {
        self.show_separators
    }

    /// Sets whether sector boundary separators are drawn.
    pub fn set_show_separators(&mut self, show_separators: bool) {
        self.show_separators = show_separators;
    }

    /// Whether hosts should paint through the cached incremental renderer.
    pub fn raster_cache(&self) -> bool {
        self.raster_cache
    }

    /// Sets whether hosts should paint through the cached incremental renderer.
    pub fn set_raster_cache(&mut self, raster_cache: bool) {
        self.raster_cache = raster_cache;
    }

    /// Whether rendering is anti-aliased.
    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    /// Sets whether rendering is anti-aliased.
    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.anti_alias = anti_alias;
    }
}

impl Default for DoilySettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sectors_clamped_at_setter() {
        let mut settings = DoilySettings::new();
        settings.set_sectors(0);
        assert_eq!(settings.sectors(), MIN_SECTORS);
        settings.set_sectors(101);
        assert_eq!(settings.sectors(), MAX_SECTORS);
        settings.set_sectors(42);
        assert_eq!(settings.sectors(), 42);
    }

    #[test]
    fn test_pen_scale_clamped_at_setter() {
        let mut settings = DoilySettings::new();
        settings.set_pen_scale(0);
        assert_eq!(settings.pen_scale(), MIN_PEN_SCALE);
        settings.set_pen_scale(500);
        assert_eq!(settings.pen_scale(), MAX_PEN_SCALE);
    }
}
