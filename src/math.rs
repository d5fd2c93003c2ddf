//! Color math — direct conversions without external dependencies.
//! All functions use normalized f64 in 0.0–1.0 for internal use.

/// HSV → RGB. All values 0.0–1.0. A hue of exactly 1.0 wraps to red.
pub(crate) fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// HSV with a fractional hue and 0–255 saturation/value, to 0–255 RGB.
pub(crate) fn hsv8_to_rgb8(h: f64, s: u8, v: u8) -> (u8, u8, u8) {
    let (r, g, b) = hsv_to_rgb(h, s as f64 / 255.0, v as f64 / 255.0);
    (
        (r * 255.0 + 0.5) as u8,
        (g * 255.0 + 0.5) as u8,
        (b * 255.0 + 0.5) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_rgb(actual: (f64, f64, f64), expected: (f64, f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < EPSILON
                && (actual.1 - expected.1).abs() < EPSILON
                && (actual.2 - expected.2).abs() < EPSILON,
            "{actual:?} vs {expected:?}"
        );
    }

    #[test]
    fn primaries() {
        assert_rgb(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_rgb(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_rgb(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn full_turn_wraps_to_red() {
        assert_rgb(hsv_to_rgb(1.0, 1.0, 1.0), (1.0, 0.0, 0.0));
    }

    #[test]
    fn zero_saturation_is_gray() {
        assert_rgb(hsv_to_rgb(0.37, 0.0, 0.5), (0.5, 0.5, 0.5));
    }

    #[test]
    fn byte_range_conversion() {
        assert_eq!(hsv8_to_rgb8(0.5, 255, 255), (0, 255, 255));
        assert_eq!(hsv8_to_rgb8(0.0, 0, 128), (128, 128, 128));
        assert_eq!(hsv8_to_rgb8(0.0, 255, 0), (0, 0, 0));
    }
}
