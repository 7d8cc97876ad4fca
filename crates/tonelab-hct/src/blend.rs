#![forbid(unsafe_code)]

//! Blending colors in HCT and CAM16-UCS.
//!
//! Harmonization nudges a design color's hue toward a theme color while
//! keeping it recognizable. The lower-level blends interpolate in CAM16-UCS,
//! the uniform space where perceptual distance is Euclidean.

use crate::argb::Argb;
use crate::cam16::Cam16;
use crate::hct::Hct;
use crate::math;

/// Shifts `design_color`'s hue toward `source_color`'s, by half the hue
/// difference capped at 15 degrees. Chroma and tone are unchanged.
#[must_use]
pub fn harmonize(design_color: Argb, source_color: Argb) -> Argb {
    let from_hct = Hct::from_argb(design_color);
    let to_hct = Hct::from_argb(source_color);
    let difference_degrees = math::difference_degrees(from_hct.hue(), to_hct.hue());
    let rotation_degrees = (difference_degrees * 0.5).min(15.0);
    let output_hue = math::sanitize_degrees(
        from_hct.hue()
            + rotation_degrees * math::rotation_direction(from_hct.hue(), to_hct.hue()),
    );
    Hct::from(output_hue, from_hct.chroma(), from_hct.tone()).to_argb()
}

/// Blends `from`'s hue toward `to`'s by `amount` in `[0, 1]`, keeping
/// `from`'s chroma and tone.
#[must_use]
pub fn hct_hue(from: Argb, to: Argb, amount: f64) -> Argb {
    let ucs = cam16_ucs(from, to, amount);
    let ucs_cam = Cam16::from_argb(ucs);
    let from_cam = Cam16::from_argb(from);
    Hct::from(ucs_cam.hue, from_cam.chroma, from.lstar()).to_argb()
}

/// Blends `from` toward `to` by `amount` in `[0, 1]` in CAM16-UCS. Hue,
/// chroma, and tone all change.
#[must_use]
pub fn cam16_ucs(from: Argb, to: Argb, amount: f64) -> Argb {
    let from_cam = Cam16::from_argb(from);
    let to_cam = Cam16::from_argb(to);
    let jstar = math::lerp(from_cam.jstar, to_cam.jstar, amount);
    let astar = math::lerp(from_cam.astar, to_cam.astar, amount);
    let bstar = math::lerp(from_cam.bstar, to_cam.bstar, amount);
    Cam16::from_ucs(jstar, astar, bstar).to_argb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harmonize_rotates_toward_the_source() {
        let red = Argb::from_rgb(255, 0, 0);
        let blue = Argb::from_rgb(0, 0, 255);
        let harmonized = harmonize(red, blue);

        let from = Hct::from_argb(red);
        let result = Hct::from_argb(harmonized);
        let rotation = math::difference_degrees(from.hue(), result.hue());
        assert!(rotation > 0.0);
        assert!(rotation <= 15.0 + 1e-6);
        assert!((result.tone() - from.tone()).abs() < 1.0);
    }

    #[test]
    fn harmonize_with_itself_is_a_fixed_point() {
        let teal = Argb::from_rgb(0, 128, 128);
        assert_eq!(harmonize(teal, teal), teal);
    }

    #[test]
    fn hct_hue_keeps_tone() {
        let red = Argb::from_rgb(255, 0, 0);
        let green = Argb::from_rgb(0, 255, 0);
        let blended = hct_hue(red, green, 0.5);

        let from = Hct::from_argb(red);
        let result = Hct::from_argb(blended);
        assert!(math::difference_degrees(from.hue(), result.hue()) > 0.0);
        assert!((result.tone() - from.tone()).abs() < 1.0);
    }

    #[test]
    fn cam16_ucs_lands_between_endpoints() {
        let red = Argb::from_rgb(255, 0, 0);
        let green = Argb::from_rgb(0, 255, 0);
        let blended = cam16_ucs(red, green, 0.5);

        let from = Cam16::from_argb(red);
        let to = Cam16::from_argb(green);
        let result = Cam16::from_argb(blended);
        assert!(result.jstar > from.jstar.min(to.jstar));
        assert!(result.jstar < from.jstar.max(to.jstar));
    }
}
