#![forbid(unsafe_code)]

//! Detection and repair of universally disliked colors.
//!
//! Color preference studies (Palmer and Schloss, 2010) show a universal
//! distaste for dark yellow-greens, correlated with biological waste and
//! rotting food.

use crate::hct::Hct;

/// Whether a color is a dark, chromatic yellow-green.
#[must_use]
pub fn is_disliked(hct: &Hct) -> bool {
    let hue_passes = hct.hue().round() >= 90.0 && hct.hue().round() <= 111.0;
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;
    hue_passes && chroma_passes && tone_passes
}

/// Lightens a disliked color to tone 70; returns others unchanged.
#[must_use]
pub fn fix_if_disliked(hct: Hct) -> Hct {
    if is_disliked(&hct) {
        crate::debug!(
            hue = hct.hue(),
            chroma = hct.chroma(),
            "lightening disliked color"
        );
        Hct::from(hct.hue(), hct.chroma(), 70.0)
    } else {
        hct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_yellow_green_is_disliked() {
        assert!(is_disliked(&Hct::from(100.0, 50.0, 50.0)));
        assert!(!is_disliked(&Hct::from(250.0, 50.0, 50.0)));
        assert!(!is_disliked(&Hct::from(100.0, 50.0, 80.0)));
    }

    #[test]
    fn fix_lightens_to_tone_70() {
        let fixed = fix_if_disliked(Hct::from(100.0, 50.0, 50.0));
        assert!(!is_disliked(&fixed));
        assert!((fixed.tone() - 70.0).abs() < 1.0);
    }
}
