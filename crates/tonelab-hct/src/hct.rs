#![forbid(unsafe_code)]

//! HCT: hue, chroma, and tone.
//!
//! A color system built from CAM16 hue and chroma plus L* from L*a*b*. Using
//! L* as the third axis ties the system directly to contrast: a difference of
//! 40 in tone guarantees a contrast ratio of at least 3.0, and a difference
//! of 50 guarantees at least 4.5.
//!
//! # Example
//! ```
//! use tonelab_hct::hct::Hct;
//!
//! let color = Hct::from(280.0, 40.0, 50.0);
//! assert!((color.tone() - 50.0).abs() < 0.5);
//! ```

use crate::argb::{Argb, lstar_from_y};
use crate::cam16::Cam16;
use crate::solver;
use crate::viewing::ViewingConditions;
use std::fmt;

/// An immutable HCT color. The stored ARGB is always the gamut-mapped answer
/// for the requested coordinates, and the stored coordinates always describe
/// that ARGB exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    hue: f64,
    chroma: f64,
    tone: f64,
    argb: Argb,
}

impl Hct {
    fn new_internal(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb);
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: argb.lstar(),
            argb,
        }
    }

    /// Builds an HCT color from hue, chroma, and tone.
    ///
    /// Invalid hue and tone values are corrected; the returned chroma may be
    /// lower than requested since chroma has a different maximum for every
    /// hue and tone.
    #[must_use]
    pub fn from(hue: f64, chroma: f64, tone: f64) -> Self {
        Self::new_internal(solver::solve_to_argb(hue, chroma, tone))
    }

    /// Measures an ARGB color in default viewing conditions.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        Self::new_internal(argb)
    }

    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hue
    }

    #[must_use]
    pub const fn chroma(&self) -> f64 {
        self.chroma
    }

    #[must_use]
    pub const fn tone(&self) -> f64 {
        self.tone
    }

    #[must_use]
    pub const fn to_argb(&self) -> Argb {
        self.argb
    }

    /// A copy with a new hue. Chroma may decrease.
    #[must_use]
    pub fn with_hue(&self, new_hue: f64) -> Self {
        Self::new_internal(solver::solve_to_argb(new_hue, self.chroma, self.tone))
    }

    /// A copy with a new chroma. The result may carry less chroma than asked.
    #[must_use]
    pub fn with_chroma(&self, new_chroma: f64) -> Self {
        Self::new_internal(solver::solve_to_argb(self.hue, new_chroma, self.tone))
    }

    /// A copy with a new tone. Chroma may decrease.
    #[must_use]
    pub fn with_tone(&self, new_tone: f64) -> Self {
        Self::new_internal(solver::solve_to_argb(self.hue, self.chroma, new_tone))
    }

    /// This color as it would appear under different viewing conditions,
    /// re-measured back into the default frame.
    #[must_use]
    pub fn in_viewing_conditions(&self, frame: &ViewingConditions) -> Self {
        let cam = Cam16::from_argb(self.argb);
        let viewed = cam.xyz_in_viewing_conditions(frame);
        let recast = Cam16::from_xyz_in_viewing_conditions(
            viewed.x,
            viewed.y,
            viewed.z,
            &ViewingConditions::default(),
        );
        Self::from(recast.hue, recast.chroma, lstar_from_y(viewed.y))
    }

    /// Whether the hue reads as blue, `[250, 270)`.
    #[must_use]
    pub fn is_blue(&self) -> bool {
        is_blue_hue(self.hue)
    }

    /// Whether the hue reads as yellow, `[105, 125)`.
    #[must_use]
    pub fn is_yellow(&self) -> bool {
        is_yellow_hue(self.hue)
    }

    /// Whether the hue reads as cyan, `[170, 207)`.
    #[must_use]
    pub fn is_cyan(&self) -> bool {
        is_cyan_hue(self.hue)
    }
}

/// Whether a hue angle reads as blue, `[250, 270)`.
#[must_use]
pub fn is_blue_hue(hue: f64) -> bool {
    (250.0..270.0).contains(&hue)
}

/// Whether a hue angle reads as yellow, `[105, 125)`.
#[must_use]
pub fn is_yellow_hue(hue: f64) -> bool {
    (105.0..125.0).contains(&hue)
}

/// Whether a hue angle reads as cyan, `[170, 207)`.
#[must_use]
pub fn is_cyan_hue(hue: f64) -> bool {
    (170.0..207.0).contains(&hue)
}

impl From<Argb> for Hct {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Hct> for Argb {
    fn from(hct: Hct) -> Self {
        hct.to_argb()
    }
}

impl fmt::Display for Hct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HCT({}, {}, {})",
            self.hue.round(),
            self.chroma.round(),
            self.tone.round()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_reachable_coordinates() {
        let color = Hct::from(67.0, 20.0, 52.0);
        assert_eq!(color.to_argb(), Argb(0xFF96_7655));
        assert_eq!(color.hue().round() as i32, 67);
        assert_eq!(color.chroma().round() as i32, 20);
        assert_eq!(color.tone().round() as i32, 52);
    }

    #[test]
    fn gamut_maps_excessive_chroma() {
        let color = Hct::from(67.0, 300.0, 52.0);
        assert_eq!(color.to_argb(), Argb(0xFFB2_6C00));
        assert_eq!(color.hue().round() as i32, 67);
        assert_eq!(color.chroma().round() as i32, 91);
        assert_eq!(color.tone().round() as i32, 52);
    }

    #[test]
    fn with_tone_keeps_hue() {
        let color = Hct::from(280.0, 40.0, 50.0);
        let lighter = color.with_tone(80.0);
        assert!((lighter.tone() - 80.0).abs() < 1.0);
        assert!((lighter.hue() - color.hue()).abs() < 3.0);
    }

    #[test]
    fn hue_family_predicates() {
        assert!(Hct::from(260.0, 60.0, 50.0).is_blue());
        assert!(!Hct::from(240.0, 60.0, 50.0).is_blue());
        assert!(Hct::from(110.0, 60.0, 70.0).is_yellow());
        assert!(Hct::from(190.0, 40.0, 50.0).is_cyan());
    }

    #[test]
    fn display_rounds() {
        let color = Hct::from(280.0, 40.0, 50.0);
        let shown = color.to_string();
        assert!(shown.starts_with("HCT("));
    }
}
