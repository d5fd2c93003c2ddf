//! 2-D saturation/value plane mapping: pixel position ⇄ (s, v).
//!
//! [`SvPlane`] is the pure state behind the SV square widget. Saturation and
//! value are canonical; the pointer position is derived from them plus the
//! border inset. The hue is supplied externally and only selects which plane
//! raster is shown — changing it never moves the pointer.

use crate::color::HsvColor;

/// Geometry of a saturation/value plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneConfig {
    /// Border inset on each side, in pixels.
    pub inset: i32,
    /// Component range: saturation and value run 0..=range.
    pub range: i32,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self { inset: 2, range: 255 }
    }
}

/// Saturation/value selection within a square plane for an external hue.
#[derive(Debug, Clone)]
pub struct SvPlane {
    cfg: PlaneConfig,
    hue: f64,
    s: i32,
    v: i32,
}

impl SvPlane {
    /// Starts at full saturation and value (top-right corner), hue 0.
    pub fn new(cfg: PlaneConfig) -> Self {
        Self {
            cfg,
            hue: 0.0,
            s: cfg.range,
            v: cfg.range,
        }
    }

    pub fn cfg(&self) -> PlaneConfig {
        self.cfg
    }

    /// Move the pointer to a widget-space position. Both axes are clamped to
    /// the square before conversion, so (s, v) always land in range.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let min = self.cfg.inset;
        let max = self.cfg.inset + self.cfg.range;
        let x = x.clamp(min, max);
        let y = y.clamp(min, max);
        self.s = (x - min).clamp(0, self.cfg.range);
        self.v = (self.cfg.range - (y - min)).clamp(0, self.cfg.range);
    }

    /// Programmatic set; clamps and stores.
    pub fn set_sv(&mut self, s: i32, v: i32) {
        self.s = s.clamp(0, self.cfg.range);
        self.v = v.clamp(0, self.cfg.range);
    }

    /// Update the external hue. Returns true when it changed, i.e. the plane
    /// raster is stale. Saturation, value and the pointer stay put.
    pub fn set_hue(&mut self, hue: f64) -> bool {
        let hue = hue.clamp(0.0, 1.0);
        let changed = hue.to_bits() != self.hue.to_bits();
        self.hue = hue;
        changed
    }

    /// Hue fraction (0.0–1.0).
    pub fn hue(&self) -> f64 {
        self.hue
    }
    /// Saturation (0..=range).
    pub fn s(&self) -> i32 {
        self.s
    }
    /// Value (0..=range).
    pub fn v(&self) -> i32 {
        self.v
    }

    /// Widget-space pointer position derived from (s, v), clamped into the
    /// square. Value grows upward, pixels grow downward.
    pub fn pointer(&self) -> (i32, i32) {
        let min = self.cfg.inset;
        let max = self.cfg.inset + self.cfg.range;
        let x = (min + self.s).clamp(min, max);
        let y = (min + self.cfg.range - self.v).clamp(min, max);
        (x, y)
    }

    /// The full color this plane currently selects.
    pub fn color(&self) -> HsvColor {
        HsvColor::new(
            self.hue,
            self.s.clamp(0, 255) as u8,
            self.v.clamp(0, 255) as u8,
        )
    }
}
