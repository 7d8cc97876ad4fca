#![forbid(unsafe_code)]

//! ARGB pixel values and conversions between sRGB, XYZ, and L*a*b*.
//!
//! # Example
//! ```
//! use tonelab_hct::argb::Argb;
//!
//! let red = Argb::from_rgb(255, 0, 0);
//! assert_eq!(red.red(), 255);
//! assert!(red.is_opaque());
//! ```

use crate::math;
use std::fmt;

/// A color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Argb(#{:02X}{:02X}{:02X})",
            self.red(),
            self.green(),
            self.blue()
        )
    }
}

/// A color in the L*a*b* color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// A color in the CIE XYZ color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41233895, 0.35762064, 0.18051042],
    [0.2126, 0.7152, 0.0722],
    [0.01932141, 0.11916382, 0.95034478],
];

const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [
        3.2413774792388685,
        -1.5376652402851851,
        -0.49885366846268053,
    ],
    [-0.9691452513005321, 1.8758853451067872, 0.04156585616912061],
    [
        0.05562093689691305,
        -0.20395524564742123,
        1.0571799111220335,
    ],
];

/// The D65 standard white point.
pub const WHITE_POINT_D65: [f64; 3] = [95.047, 100.0, 108.883];

impl Argb {
    /// Packs opaque RGB components into an ARGB value.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(0xFF000000 | ((red as u32) << 16) | ((green as u32) << 8) | (blue as u32))
    }

    /// Packs a linear-RGB triple (components in 0-100) into an ARGB value.
    #[must_use]
    pub fn from_linrgb(linrgb: [f64; 3]) -> Self {
        let r = delinearized(linrgb[0]);
        let g = delinearized(linrgb[1]);
        let b = delinearized(linrgb[2]);
        Self::from_rgb(r, g, b)
    }

    #[must_use]
    pub const fn alpha(&self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    #[must_use]
    pub const fn red(&self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[must_use]
    pub const fn green(&self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[must_use]
    pub const fn blue(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[must_use]
    pub const fn is_opaque(&self) -> bool {
        self.alpha() == 255
    }

    /// Converts from XYZ to ARGB.
    #[must_use]
    pub fn from_xyz(xyz: Xyz) -> Self {
        let linear = math::matrix_multiply([xyz.x, xyz.y, xyz.z], XYZ_TO_SRGB);
        Self::from_linrgb(linear)
    }

    /// Converts from ARGB to XYZ.
    #[must_use]
    pub fn to_xyz(&self) -> Xyz {
        let r = linearized(self.red());
        let g = linearized(self.green());
        let b = linearized(self.blue());
        let result = math::matrix_multiply([r, g, b], SRGB_TO_XYZ);
        Xyz {
            x: result[0],
            y: result[1],
            z: result[2],
        }
    }

    /// Converts from L*a*b* to ARGB.
    #[must_use]
    pub fn from_lab(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = lab.a / 500.0 + fy;
        let fz = fy - lab.b / 200.0;
        let x = lab_invf(fx) * WHITE_POINT_D65[0];
        let y = lab_invf(fy) * WHITE_POINT_D65[1];
        let z = lab_invf(fz) * WHITE_POINT_D65[2];
        Self::from_xyz(Xyz { x, y, z })
    }

    /// Converts from ARGB to L*a*b*.
    #[must_use]
    pub fn to_lab(&self) -> Lab {
        let xyz = self.to_xyz();
        let fx = lab_f(xyz.x / WHITE_POINT_D65[0]);
        let fy = lab_f(xyz.y / WHITE_POINT_D65[1]);
        let fz = lab_f(xyz.z / WHITE_POINT_D65[2]);
        let l = 116.0f64.mul_add(fy, -16.0);
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);
        Lab { l, a, b }
    }

    /// The gray with the given L* value.
    #[must_use]
    pub fn from_lstar(lstar: f64) -> Self {
        let component = delinearized(y_from_lstar(lstar));
        Self::from_rgb(component, component, component)
    }

    /// The L* (perceptual luminance) of this color.
    #[must_use]
    pub fn lstar(&self) -> f64 {
        116.0f64.mul_add(lab_f(self.to_xyz().y / 100.0), -16.0)
    }
}

/// Linearizes an sRGB component (0-255) to linear RGB (0-100).
#[must_use]
pub fn linearized(rgb_component: u8) -> f64 {
    let normalized = f64::from(rgb_component) / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Delinearizes a linear RGB component (0-100) to sRGB (0-255).
#[must_use]
pub fn delinearized(rgb_component: f64) -> u8 {
    let normalized = rgb_component / 100.0;
    let delinearized: f64 = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055f64.mul_add(normalized.powf(1.0 / 2.4), -0.055)
    };
    (delinearized * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Converts an L* value to relative luminance Y.
#[must_use]
pub fn y_from_lstar(lstar: f64) -> f64 {
    100.0 * lab_invf((lstar + 16.0) / 116.0)
}

/// Converts a relative luminance Y to an L* value.
#[must_use]
pub fn lstar_from_y(y: f64) -> f64 {
    lab_f(y / 100.0) * 116.0 - 16.0
}

#[must_use]
pub fn lab_f(t: f64) -> f64 {
    let e = 216.0 / 24389.0;
    let kappa = 24389.0 / 27.0;
    if t > e {
        t.cbrt()
    } else {
        (kappa * t + 16.0) / 116.0
    }
}

#[must_use]
pub fn lab_invf(ft: f64) -> f64 {
    let e = 216.0 / 24389.0;
    let kappa = 24389.0 / 27.0;
    let ft3 = ft * ft * ft;
    if ft3 > e {
        ft3
    } else {
        116.0f64.mul_add(ft, -16.0) / kappa
    }
}

impl From<Argb> for Xyz {
    fn from(argb: Argb) -> Self {
        argb.to_xyz()
    }
}

impl From<Xyz> for Argb {
    fn from(xyz: Xyz) -> Self {
        Self::from_xyz(xyz)
    }
}

impl From<Argb> for Lab {
    fn from(argb: Argb) -> Self {
        argb.to_lab()
    }
}

impl From<Lab> for Argb {
    fn from(lab: Lab) -> Self {
        Self::from_lab(lab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_round_trip() {
        let color = Argb::from_rgb(10, 20, 30);
        assert_eq!(color.red(), 10);
        assert_eq!(color.green(), 20);
        assert_eq!(color.blue(), 30);
        assert_eq!(color.alpha(), 255);
        assert!(color.is_opaque());
        assert!(!Argb(0x00112233).is_opaque());
    }

    #[test]
    fn linearization_round_trip() {
        for i in 0..=255 {
            assert_eq!(i, delinearized(linearized(i)));
        }
    }

    #[test]
    fn lstar_round_trip() {
        for i in 0..=100 {
            let lstar = f64::from(i);
            let back = lstar_from_y(y_from_lstar(lstar));
            assert!((lstar - back).abs() < 1e-10);
        }
    }

    #[test]
    fn xyz_round_trip() {
        let color = Argb::from_rgb(123, 45, 67);
        assert_eq!(color, Argb::from_xyz(color.to_xyz()));
    }

    #[test]
    fn lab_round_trip() {
        let color = Argb::from_rgb(123, 45, 67);
        assert_eq!(color, Argb::from_lab(color.to_lab()));
    }

    #[test]
    fn gray_from_lstar_is_achromatic() {
        let color = Argb::from_rgb(123, 45, 67);
        let gray = Argb::from_lstar(color.lstar());
        assert_eq!(gray.red(), gray.green());
        assert_eq!(gray.green(), gray.blue());
        assert!((color.lstar() - gray.lstar()).abs() < 0.1);
    }
}
