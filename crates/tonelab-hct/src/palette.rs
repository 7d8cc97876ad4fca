#![forbid(unsafe_code)]

//! Tonal palettes: colors constant in hue and chroma, varying only in tone.
//!
//! # Example
//! ```
//! use tonelab_hct::palette::TonalPalette;
//!
//! let palette = TonalPalette::from_hue_and_chroma(280.0, 40.0);
//! let t40 = palette.get_hct(40.0);
//! assert!((t40.tone() - 40.0).abs() < 0.5);
//! ```

use crate::argb::Argb;
use crate::hct::{Hct, is_yellow_hue};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// A palette of tones sharing one hue and chroma.
///
/// Integer tones are cached. Zero is never a valid opaque ARGB value, so an
/// empty cache slot is encoded as zero.
#[derive(Debug)]
pub struct TonalPalette {
    /// HCT hue, in `[0, 360)`.
    pub hue: f64,
    /// HCT chroma, 0 to roughly 130 inside the sRGB gamut.
    pub chroma: f64,
    /// The first tone from T50 outward that carries the palette's chroma.
    pub key_color: Hct,
    cache: Arc<[AtomicU32; 101]>,
}

impl Clone for TonalPalette {
    fn clone(&self) -> Self {
        Self {
            hue: self.hue,
            chroma: self.chroma,
            key_color: self.key_color,
            cache: self.cache.clone(),
        }
    }
}

impl PartialEq for TonalPalette {
    fn eq(&self, other: &Self) -> bool {
        self.key_color == other.key_color
    }
}

impl TonalPalette {
    fn new(hue: f64, chroma: f64, key_color: Hct) -> Self {
        Self {
            hue,
            chroma,
            key_color,
            cache: Arc::new(std::array::from_fn(|_| AtomicU32::new(0))),
        }
    }

    /// A palette matching the hue and chroma of a color.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_hct(Hct::from_argb(argb))
    }

    /// A palette matching the hue and chroma of an HCT color.
    #[must_use]
    pub fn from_hct(hct: Hct) -> Self {
        Self::new(hct.hue(), hct.chroma(), hct)
    }

    /// A palette from explicit hue and chroma; derives the key color.
    #[must_use]
    pub fn from_hue_and_chroma(hue: f64, chroma: f64) -> Self {
        let key_color = KeyColor::new(hue, chroma).create();
        Self::new(hue, chroma, key_color)
    }

    /// The ARGB color at an integer tone.
    ///
    /// Tones outside `[0, 100]` are solved directly without caching. Tone 99
    /// of a yellow palette is smoothed to the average of tones 98 and 100,
    /// which otherwise sit on opposite sides of a gamut discontinuity.
    #[must_use]
    pub fn tone(&self, tone: i32) -> Argb {
        if !(0..=100).contains(&tone) {
            return Hct::from(self.hue, self.chroma, f64::from(tone)).to_argb();
        }

        let index = tone as usize;
        let cached = self.cache[index].load(Ordering::Relaxed);
        if cached != 0 {
            return Argb(cached);
        }

        let color = if tone == 99 && is_yellow_hue(self.hue) {
            average_argb(self.tone(98), self.tone(100))
        } else {
            Hct::from(self.hue, self.chroma, f64::from(tone)).to_argb()
        };

        self.cache[index].store(color.0, Ordering::Relaxed);
        color
    }

    /// The HCT color at a fractional tone. Bypasses the integer cache.
    #[must_use]
    pub fn get_hct(&self, tone: f64) -> Hct {
        Hct::from(self.hue, self.chroma, tone)
    }
}

fn average_argb(argb1: Argb, argb2: Argb) -> Argb {
    let red = f32::midpoint(f32::from(argb1.red()), f32::from(argb2.red())).round() as u8;
    let green = f32::midpoint(f32::from(argb1.green()), f32::from(argb2.green())).round() as u8;
    let blue = f32::midpoint(f32::from(argb1.blue()), f32::from(argb2.blue())).round() as u8;
    Argb::from_rgb(red, green, blue)
}

/// Finds the representative color for a hue and chroma request.
struct KeyColor {
    hue: f64,
    requested_chroma: f64,
}

impl KeyColor {
    const MAX_CHROMA_VALUE: f64 = 200.0;

    const fn new(hue: f64, requested_chroma: f64) -> Self {
        Self {
            hue,
            requested_chroma,
        }
    }

    /// The first tone, searching outward from T50, whose maximum chroma
    /// covers the request.
    fn create(&self) -> Hct {
        // T50 has the most chroma available on average, so pivot there.
        let pivot_tone = 50;
        let tone_step_size = 1;
        // Accept values very slightly below the requested chroma.
        let epsilon = 0.01;

        let mut lower_tone = 0;
        let mut upper_tone = 100;
        while lower_tone < upper_tone {
            let mid_tone = i32::midpoint(lower_tone, upper_tone);
            let is_ascending =
                self.max_chroma(mid_tone) < self.max_chroma(mid_tone + tone_step_size);
            let sufficient_chroma = self.max_chroma(mid_tone) >= self.requested_chroma - epsilon;
            if sufficient_chroma {
                // Both halves may hold an answer; narrow toward the pivot.
                if (lower_tone - pivot_tone).abs() < (upper_tone - pivot_tone).abs() {
                    upper_tone = mid_tone;
                } else {
                    if lower_tone == mid_tone {
                        return Hct::from(self.hue, self.requested_chroma, f64::from(lower_tone));
                    }
                    lower_tone = mid_tone;
                }
            } else if is_ascending {
                lower_tone = mid_tone + tone_step_size;
            } else {
                // Keep mid_tone, it may sit on the chroma peak.
                upper_tone = mid_tone;
            }
        }
        Hct::from(self.hue, self.requested_chroma, f64::from(lower_tone))
    }

    fn max_chroma(&self, tone: i32) -> f64 {
        Hct::from(self.hue, Self::MAX_CHROMA_VALUE, f64::from(tone)).chroma()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_from_blue() {
        let palette = TonalPalette::from_argb(Argb(0xFF0000FF));
        assert!((palette.hue - 282.12).abs() < 1.0);
        assert!(palette.chroma > 80.0);
    }

    #[test]
    fn tones_are_cached() {
        let palette = TonalPalette::from_hue_and_chroma(120.0, 40.0);
        let first = palette.tone(50);
        assert_eq!(first, palette.tone(50));
        assert_eq!(palette.cache[50].load(Ordering::Relaxed), first.0);
    }

    #[test]
    fn clones_share_the_cache() {
        let palette = TonalPalette::from_hue_and_chroma(120.0, 40.0);
        let clone = palette.clone();
        let color = palette.tone(42);
        assert_eq!(clone.cache[42].load(Ordering::Relaxed), color.0);
    }

    #[test]
    fn yellow_tone_99_is_smoothed() {
        let palette = TonalPalette::from_hue_and_chroma(110.0, 40.0);
        let expected = average_argb(palette.tone(98), palette.tone(100));
        assert_eq!(palette.tone(99), expected);
    }

    #[test]
    fn key_color_matches_request() {
        let palette = TonalPalette::from_hue_and_chroma(200.0, 30.0);
        assert!((palette.key_color.hue() - 200.0).abs() < 1.0);
        assert!((palette.key_color.chroma() - 30.0).abs() < 1.0);
    }

    #[test]
    fn out_of_bounds_tone_does_not_panic() {
        let palette = TonalPalette::from_hue_and_chroma(120.0, 40.0);
        assert_ne!(palette.tone(150).0, 0);
        assert_ne!(palette.tone(-10).0, 0);
    }
}
