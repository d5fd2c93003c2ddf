//! 1-D hue track mapping: pixel offset ⇄ hue fraction.
//!
//! [`HueTrack`] is the pure state behind the hue slider widget. The stored
//! pixel offset is canonical; the hue fraction is always derived from it, so
//! the two can never disagree. All inputs are clamped, never rejected.

use crate::color::HsvColor;

/// Geometry of a hue track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackConfig {
    /// Border inset on each side, in pixels. Widget-space x coordinates are
    /// measured from the widget edge; track offsets exclude the inset.
    pub inset: i32,
    /// Hue quantization steps for the gradient raster.
    pub steps: u32,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self { inset: 2, steps: 360 }
    }
}

/// Pointer state along a horizontal hue track.
#[derive(Debug, Clone)]
pub struct HueTrack {
    cfg: TrackConfig,
    len: i32,
    offset: i32,
}

impl HueTrack {
    pub fn new(cfg: TrackConfig) -> Self {
        Self { cfg, len: 1, offset: 0 }
    }

    pub fn cfg(&self) -> TrackConfig {
        self.cfg
    }

    /// Usable track length in pixels; offsets run 0..=len.
    pub fn len(&self) -> i32 {
        self.len
    }

    /// Update the track length after a layout change. Returns true when the
    /// length actually changed, i.e. the gradient raster is stale.
    ///
    /// The stored pointer offset is deliberately left untouched: shrinking
    /// the track does not rescale or clamp it, the offset only saturates at
    /// the new right edge on the next read. Moving the pointer afterwards
    /// re-clamps it for good.
    pub fn resize(&mut self, len: i32) -> bool {
        let len = len.max(1);
        let changed = len != self.len;
        self.len = len;
        changed
    }

    /// Move the pointer to a widget-space x coordinate.
    pub fn move_to(&mut self, x: i32) {
        self.offset = (x - self.cfg.inset).clamp(0, self.len);
    }

    /// Step the pointer by a signed pixel amount (scroll wheel).
    pub fn nudge(&mut self, delta: i32) {
        self.offset = (self.clamped_offset() + delta).clamp(0, self.len);
    }

    /// Programmatic set from a hue fraction; the offset is quantized to the
    /// nearest pixel.
    pub fn set_hue(&mut self, hue: f64) {
        let hue = hue.clamp(0.0, 1.0);
        self.offset = (hue * self.len as f64).round() as i32;
    }

    /// Raw stored offset. May exceed the track length right after a shrink.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Offset saturated into 0..=len, the position used for painting.
    pub fn clamped_offset(&self) -> i32 {
        self.offset.clamp(0, self.len)
    }

    /// Current hue fraction, derived from the clamped offset.
    pub fn hue(&self) -> f64 {
        self.clamped_offset() as f64 / self.len as f64
    }

    /// Widget-space x of the pointer indicator.
    pub fn pointer_x(&self) -> i32 {
        self.cfg.inset + self.clamped_offset()
    }

    /// The color the track emits: current hue at full saturation and value.
    pub fn color(&self) -> HsvColor {
        HsvColor::new(self.hue(), 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_track(len: i32) -> HueTrack {
        let mut t = HueTrack::new(TrackConfig { inset: 0, steps: 360 });
        t.resize(len);
        t
    }

    #[test]
    fn in_range_moves_are_identity() {
        let mut t = bare_track(360);
        for x in [0, 1, 90, 359, 360] {
            t.move_to(x);
            assert_eq!(t.offset(), x);
        }
    }

    #[test]
    fn out_of_range_moves_clamp() {
        let mut t = bare_track(360);
        t.move_to(-5);
        assert_eq!(t.offset(), 0);
        t.move_to(4000);
        assert_eq!(t.offset(), 360);
    }

    #[test]
    fn hue_follows_offset() {
        let mut t = bare_track(200);
        for x in [-3, 0, 17, 50, 200, 250] {
            t.move_to(x);
            assert_eq!(t.hue(), t.clamped_offset() as f64 / 200.0);
        }
        t.nudge(10);
        assert_eq!(t.hue(), t.clamped_offset() as f64 / 200.0);
    }

    #[test]
    fn quarter_turn() {
        let mut t = bare_track(360);
        t.move_to(90);
        assert_eq!(t.hue(), 0.25);
        let c = t.color();
        assert_eq!(c.hue_degrees(), 90);
        assert_eq!((c.s(), c.v()), (255, 255));
    }

    #[test]
    fn set_hue_round_trips_within_one_pixel() {
        let mut t = bare_track(360);
        for f in [0.0, 0.1, 0.25, 0.333, 0.5, 0.777, 1.0] {
            t.set_hue(f);
            assert!((t.hue() - f).abs() <= 1.0 / 360.0, "f={f}");
        }
    }

    #[test]
    fn set_hue_clamps() {
        let mut t = bare_track(100);
        t.set_hue(2.5);
        assert_eq!(t.offset(), 100);
        t.set_hue(-1.0);
        assert_eq!(t.offset(), 0);
    }

    #[test]
    fn wheel_steps() {
        let mut t = bare_track(360);
        t.move_to(50);
        t.nudge(10);
        assert_eq!(t.offset(), 60);
        t.nudge(-1);
        assert_eq!(t.offset(), 59);
        t.nudge(-100);
        assert_eq!(t.offset(), 0);
    }

    #[test]
    fn resize_preserves_raw_offset() {
        let mut t = bare_track(360);
        t.move_to(250);
        assert!(t.resize(100));
        assert_eq!(t.offset(), 250);
        assert_eq!(t.clamped_offset(), 100);
        assert_eq!(t.hue(), 1.0);
        assert!(!t.resize(100));
        // moving again re-clamps the stored offset
        t.nudge(-1);
        assert_eq!(t.offset(), 99);
    }

    #[test]
    fn border_inset_maps_widget_coordinates() {
        let mut t = HueTrack::new(TrackConfig::default());
        t.resize(360);
        t.move_to(92);
        assert_eq!(t.offset(), 90);
        assert_eq!(t.pointer_x(), 92);
        t.move_to(0);
        assert_eq!(t.offset(), 0);
        assert_eq!(t.pointer_x(), 2);
    }
}
