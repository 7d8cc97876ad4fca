#![forbid(unsafe_code)]

//! WCAG-style contrast ratios measured in tone (L*) space.
//!
//! Contrast ratio is defined on relative luminance Y: `(lighter + 5) / (darker + 5)`.
//! Tones are L* values, which map to Y through the Lab transfer function, so a
//! pair of tones always produces the same ratio no matter which hue or chroma
//! carries them.
//!
//! # Example
//! ```
//! use tonelab_hct::contrast;
//!
//! let ratio = contrast::ratio_of_tones(10.0, 90.0);
//! assert!(ratio > 5.8 && ratio < 6.0);
//! ```

use crate::argb::{lstar_from_y, y_from_lstar};

/// The lowest possible contrast ratio, a color against itself.
pub const RATIO_MIN: f64 = 1.0;
/// The highest possible contrast ratio, black against white.
pub const RATIO_MAX: f64 = 21.0;
pub const RATIO_30: f64 = 3.0;
pub const RATIO_45: f64 = 4.5;
pub const RATIO_70: f64 = 7.0;

// Tolerance for numerical error in ratios produced by the tone round trip.
// A requested ratio may come back up to this much lower and still count.
const CONTRAST_RATIO_EPSILON: f64 = 0.04;

// Tones returned by `lighter`/`darker` are nudged by this amount so that the
// eventual sRGB quantization cannot land just short of the requested ratio.
const LUMINANCE_GAMUT_MAP_TOLERANCE: f64 = 0.4;

/// Contrast ratio of two relative luminance values, in `[1, 21]`.
#[must_use]
pub fn ratio_of_ys(y1: f64, y2: f64) -> f64 {
    let lighter = y1.max(y2);
    let darker = if lighter == y2 { y1 } else { y2 };
    (lighter + 5.0) / (darker + 5.0)
}

/// Contrast ratio of two tones, in `[1, 21]`. Tones outside `[0, 100]` are clamped.
#[must_use]
pub fn ratio_of_tones(tone_a: f64, tone_b: f64) -> f64 {
    let tone_a = tone_a.clamp(0.0, 100.0);
    let tone_b = tone_b.clamp(0.0, 100.0);
    ratio_of_ys(y_from_lstar(tone_a), y_from_lstar(tone_b))
}

/// The lightest tone with `ratio` contrast against `tone`, if one exists.
///
/// Returns `None` when `tone` is out of range or no tone in `[0, 100]`
/// reaches the ratio.
#[must_use]
pub fn lighter(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }
    let dark_y = y_from_lstar(tone);
    let light_y = ratio.mul_add(dark_y + 5.0, -5.0);
    if !(0.0..=100.0).contains(&light_y) {
        return None;
    }
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return None;
    }
    let value = lstar_from_y(light_y) + LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// The darkest tone with `ratio` contrast against `tone`, if one exists.
#[must_use]
pub fn darker(tone: f64, ratio: f64) -> Option<f64> {
    if !(0.0..=100.0).contains(&tone) {
        return None;
    }
    let light_y = y_from_lstar(tone);
    let dark_y = ((light_y + 5.0) / ratio) - 5.0;
    if !(0.0..=100.0).contains(&dark_y) {
        return None;
    }
    let real_contrast = ratio_of_ys(light_y, dark_y);
    let delta = (real_contrast - ratio).abs();
    if real_contrast < ratio && delta > CONTRAST_RATIO_EPSILON {
        return None;
    }
    let value = lstar_from_y(dark_y) - LUMINANCE_GAMUT_MAP_TOLERANCE;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// Like [`lighter`], but falls back to tone 100 when the ratio is unreachable.
#[must_use]
pub fn lighter_unsafe(tone: f64, ratio: f64) -> f64 {
    lighter(tone, ratio).unwrap_or(100.0)
}

/// Like [`darker`], but falls back to tone 0 when the ratio is unreachable.
#[must_use]
pub fn darker_unsafe(tone: f64, ratio: f64) -> f64 {
    darker(tone, ratio).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_tones_extremes() {
        assert!((ratio_of_tones(0.0, 100.0) - 21.0).abs() < 1e-6);
        assert!((ratio_of_tones(100.0, 0.0) - 21.0).abs() < 1e-6);
        assert!((ratio_of_tones(50.0, 50.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ratio_clamps_out_of_range_tones() {
        assert!((ratio_of_tones(-10.0, 110.0) - 21.0).abs() < 1e-6);
    }

    #[test]
    fn lighter_reaches_requested_ratio() {
        let result = lighter(30.0, 3.0).unwrap();
        assert!(ratio_of_tones(30.0, result) >= 3.0 - 0.04);
    }

    #[test]
    fn lighter_impossible_returns_none() {
        assert_eq!(lighter(95.0, 21.0), None);
        assert_eq!(lighter(-1.0, 3.0), None);
    }

    #[test]
    fn darker_reaches_requested_ratio() {
        let result = darker(70.0, 3.0).unwrap();
        assert!(ratio_of_tones(70.0, result) >= 3.0 - 0.04);
    }

    #[test]
    fn darker_impossible_returns_none() {
        assert_eq!(darker(5.0, 21.0), None);
        assert_eq!(darker(101.0, 3.0), None);
    }

    #[test]
    fn unsafe_variants_clamp_to_extremes() {
        assert_eq!(lighter_unsafe(95.0, 21.0), 100.0);
        assert_eq!(darker_unsafe(5.0, 21.0), 0.0);
    }
}
