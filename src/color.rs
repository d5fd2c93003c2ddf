//! HsvColor type — the public color representation for floem-hsv.
//!
//! Stores the hue as a fraction of a full turn and saturation/value as 0–255
//! integers, matching what the picker widgets manipulate. All constructors
//! clamp out-of-range input instead of failing.

use crate::math;

/// HSV color: fractional hue plus 0–255 saturation and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    h: f64,
    s: u8,
    v: u8,
}

impl Default for HsvColor {
    fn default() -> Self {
        Self { h: 0.0, s: 255, v: 255 }
    }
}

impl HsvColor {
    /// Create from a hue fraction (clamped to 0.0–1.0) and 0–255 components.
    pub fn new(h: f64, s: u8, v: u8) -> Self {
        Self {
            h: h.clamp(0.0, 1.0),
            s,
            v,
        }
    }

    /// Create from hue degrees and 0–255 components; everything is clamped.
    pub fn from_degrees(deg: i32, s: i32, v: i32) -> Self {
        Self {
            h: deg.clamp(0, 360) as f64 / 360.0,
            s: s.clamp(0, 255) as u8,
            v: v.clamp(0, 255) as u8,
        }
    }

    /// Hue fraction (0.0–1.0).
    pub fn h(&self) -> f64 {
        self.h
    }
    /// Saturation (0–255).
    pub fn s(&self) -> u8 {
        self.s
    }
    /// Value (0–255).
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Hue in degrees (0–360).
    pub fn hue_degrees(&self) -> u16 {
        (self.h * 360.0).round() as u16
    }

    /// Convert to 0–255 RGB.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        math::hsv8_to_rgb8(self.h, self.s, self.v)
    }

    /// Convert to f64 RGB (all 0.0–1.0), for feeding style colors.
    pub fn to_rgbf(&self) -> (f64, f64, f64) {
        math::hsv_to_rgb(self.h, self.s as f64 / 255.0, self.v as f64 / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full_red() {
        let c = HsvColor::default();
        assert_eq!(c.to_rgb(), (255, 0, 0));
    }

    #[test]
    fn constructors_clamp() {
        assert_eq!(HsvColor::new(1.7, 10, 20).h(), 1.0);
        assert_eq!(HsvColor::new(-0.3, 10, 20).h(), 0.0);
        let c = HsvColor::from_degrees(500, -4, 300);
        assert_eq!(c.hue_degrees(), 360);
        assert_eq!((c.s(), c.v()), (0, 255));
    }

    #[test]
    fn degree_round_trip() {
        assert_eq!(HsvColor::new(0.25, 255, 255).hue_degrees(), 90);
        assert_eq!(HsvColor::from_degrees(120, 128, 191).hue_degrees(), 120);
    }

    #[test]
    fn rgb_conversion() {
        assert_eq!(HsvColor::from_degrees(120, 255, 255).to_rgb(), (0, 255, 0));
        assert_eq!(HsvColor::from_degrees(0, 0, 255).to_rgb(), (255, 255, 255));
    }
}
