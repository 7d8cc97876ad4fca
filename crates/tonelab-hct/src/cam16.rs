#![forbid(unsafe_code)]

//! CAM16 color appearance model.
//!
//! A CAM16 color is a measurement of a stimulus under particular
//! [`ViewingConditions`], not just a hex code. Instances also carry CAM16-UCS
//! coordinates (`jstar`, `astar`, `bstar`), the uniform space used for
//! measuring distances between colors.

use crate::argb::{Argb, Xyz, linearized};
use crate::math;
use crate::viewing::ViewingConditions;

/// Transforms XYZ coordinates to cone responses.
pub const XYZ_TO_CAM16RGB: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

/// Transforms cone responses to XYZ coordinates.
pub const CAM16RGB_TO_XYZ: [[f64; 3]; 3] = [
    [1.8620678, -1.0112547, 0.14918678],
    [0.38752654, 0.62144744, -0.00897398],
    [-0.0158415, -0.03412294, 1.0499644],
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cam16 {
    /// Hue angle in degrees.
    pub hue: f64,
    /// Chroma, colorfulness relative to white.
    pub chroma: f64,
    /// Lightness.
    pub j: f64,
    /// Brightness. Absolute: white paper is brighter in sunlight than indoors,
    /// yet equally light. Prefer `j`.
    pub q: f64,
    /// Colorfulness. Absolute counterpart of chroma. Prefer `chroma`.
    pub m: f64,
    /// Saturation, colorfulness in proportion to the color's own brightness.
    pub s: f64,
    /// Lightness coordinate in CAM16-UCS.
    pub jstar: f64,
    /// a* coordinate in CAM16-UCS.
    pub astar: f64,
    /// b* coordinate in CAM16-UCS.
    pub bstar: f64,
}

impl Cam16 {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        hue: f64,
        chroma: f64,
        j: f64,
        q: f64,
        m: f64,
        s: f64,
        jstar: f64,
        astar: f64,
        bstar: f64,
    ) -> Self {
        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar,
            bstar,
        }
    }

    /// Distance in CAM16-UCS, the perceptually uniform measure.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let d_j = self.jstar - other.jstar;
        let d_a = self.astar - other.astar;
        let d_b = self.bstar - other.bstar;
        let d_e_prime = d_b.mul_add(d_b, d_j.mul_add(d_j, d_a * d_a)).sqrt();
        1.41 * d_e_prime.powf(0.63)
    }

    /// ARGB of this color under default viewing conditions.
    #[must_use]
    pub fn to_argb(&self) -> Argb {
        self.viewed(&ViewingConditions::default())
    }

    /// ARGB of this color under the given viewing conditions.
    #[must_use]
    pub fn viewed(&self, frame: &ViewingConditions) -> Argb {
        Argb::from_xyz(self.xyz_in_viewing_conditions(frame))
    }

    /// Inverse model: XYZ of this color under the given viewing conditions.
    #[must_use]
    pub fn xyz_in_viewing_conditions(&self, frame: &ViewingConditions) -> Xyz {
        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };
        let t = (alpha / (1.64 - 0.29_f64.powf(frame.n)).powf(0.73)).powf(1.0 / 0.9);
        let h_rad = self.hue.to_radians();
        let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let ac = frame.aw * (self.j / 100.0).powf(1.0 / frame.c / frame.z);
        let p1 = e_hue * (50000.0 / 13.0) * frame.nc * frame.ncb;
        let p2 = ac / frame.nbb;
        let h_sin = h_rad.sin();
        let h_cos = h_rad.cos();
        let gamma = 23.0 * (p2 + 0.305) * t
            / (108.0 * t).mul_add(h_sin, 23.0f64.mul_add(p1, 11.0 * t * h_cos));
        let a = gamma * h_cos;
        let b = gamma * h_sin;
        let r_a = 288.0f64.mul_add(b, 460.0f64.mul_add(p2, 451.0 * a)) / 1403.0;
        let g_a = 261.0f64.mul_add(-b, 460.0f64.mul_add(p2, -(891.0 * a))) / 1403.0;
        let b_a = 6300.0f64.mul_add(-b, 460.0f64.mul_add(p2, -(220.0 * a))) / 1403.0;
        let r_c_base = (27.13 * r_a.abs() / (400.0 - r_a.abs())).max(0.0);
        let r_c = r_a.signum() * (100.0 / frame.fl) * r_c_base.powf(1.0 / 0.42);
        let g_c_base = (27.13 * g_a.abs() / (400.0 - g_a.abs())).max(0.0);
        let g_c = g_a.signum() * (100.0 / frame.fl) * g_c_base.powf(1.0 / 0.42);
        let b_c_base = (27.13 * b_a.abs() / (400.0 - b_a.abs())).max(0.0);
        let b_c = b_a.signum() * (100.0 / frame.fl) * b_c_base.powf(1.0 / 0.42);
        let r_f = r_c / frame.rgb_d[0];
        let g_f = g_c / frame.rgb_d[1];
        let b_f = b_c / frame.rgb_d[2];
        let [x, y, z] = math::matrix_multiply([r_f, g_f, b_f], CAM16RGB_TO_XYZ);
        Xyz { x, y, z }
    }

    /// Measures a color under default viewing conditions.
    #[must_use]
    pub fn from_argb(argb: Argb) -> Self {
        Self::from_argb_in_viewing_conditions(argb, &ViewingConditions::default())
    }

    /// Measures a color under the given viewing conditions.
    #[must_use]
    pub fn from_argb_in_viewing_conditions(argb: Argb, frame: &ViewingConditions) -> Self {
        let red_l = linearized(argb.red());
        let green_l = linearized(argb.green());
        let blue_l = linearized(argb.blue());
        let x = 0.18051042f64.mul_add(blue_l, 0.41233895f64.mul_add(red_l, 0.35762064 * green_l));
        let y = 0.0722f64.mul_add(blue_l, 0.2126f64.mul_add(red_l, 0.7152 * green_l));
        let z = 0.95034478f64.mul_add(blue_l, 0.01932141f64.mul_add(red_l, 0.11916382 * green_l));
        Self::from_xyz_in_viewing_conditions(x, y, z, frame)
    }

    /// Forward model from XYZ coordinates.
    #[must_use]
    pub fn from_xyz_in_viewing_conditions(x: f64, y: f64, z: f64, frame: &ViewingConditions) -> Self {
        let [r_t, g_t, b_t] = math::matrix_multiply([x, y, z], XYZ_TO_CAM16RGB);

        // Chromatic adaptation.
        let r_d = frame.rgb_d[0] * r_t;
        let g_d = frame.rgb_d[1] * g_t;
        let b_d = frame.rgb_d[2] * b_t;

        let r_af = (frame.fl * r_d.abs() / 100.0).powf(0.42);
        let g_af = (frame.fl * g_d.abs() / 100.0).powf(0.42);
        let b_af = (frame.fl * b_d.abs() / 100.0).powf(0.42);
        let r_a = r_d.signum() * 400.0 * r_af / (r_af + 27.13);
        let g_a = g_d.signum() * 400.0 * g_af / (g_af + 27.13);
        let b_a = b_d.signum() * 400.0 * b_af / (b_af + 27.13);

        // Redness-greenness and yellowness-blueness.
        let a = (11.0f64.mul_add(r_a, -(12.0 * g_a)) + b_a) / 11.0;
        let b = 2.0f64.mul_add(-b_a, r_a + g_a) / 9.0;

        let u = 21.0f64.mul_add(b_a, 20.0f64.mul_add(r_a, 20.0 * g_a)) / 20.0;
        let p2 = (40.0f64.mul_add(r_a, 20.0 * g_a) + b_a) / 20.0;

        let hue = math::sanitize_degrees(b.atan2(a).to_degrees());
        let hue_radians = hue.to_radians();

        let ac = p2 * frame.nbb;

        let j = 100.0 * (ac / frame.aw).powf(frame.c * frame.z);
        let q = 4.0 / frame.c * (j / 100.0).sqrt() * (frame.aw + 4.0) * frame.fl_root;

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * frame.nc * frame.ncb;
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29_f64.powf(frame.n)).powf(0.73) * t.powf(0.9);
        let c = alpha * (j / 100.0).sqrt();
        let m = c * frame.fl_root;
        let s = 50.0 * (alpha * frame.c / (frame.aw + 4.0)).sqrt();

        let jstar = 100.0f64.mul_add(0.007, 1.0) * j / 0.007f64.mul_add(j, 1.0);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        let astar = mstar * hue_radians.cos();
        let bstar = mstar * hue_radians.sin();

        Self::new(hue, c, j, q, m, s, jstar, astar, bstar)
    }

    /// Builds a color from lightness, chroma, and hue under default conditions.
    #[must_use]
    pub fn from_jch(j: f64, c: f64, h: f64) -> Self {
        Self::from_jch_in_viewing_conditions(j, c, h, &ViewingConditions::default())
    }

    #[must_use]
    pub fn from_jch_in_viewing_conditions(
        j: f64,
        c: f64,
        h: f64,
        frame: &ViewingConditions,
    ) -> Self {
        let q = 4.0 / frame.c * (j / 100.0).sqrt() * (frame.aw + 4.0) * frame.fl_root;
        let m = c * frame.fl_root;
        let alpha = c / (j / 100.0).sqrt();
        let s = 50.0 * (alpha * frame.c / (frame.aw + 4.0)).sqrt();
        let hue_radians = h.to_radians();
        let jstar = 100.0f64.mul_add(0.007, 1.0) * j / 0.007f64.mul_add(j, 1.0);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();
        let astar = mstar * hue_radians.cos();
        let bstar = mstar * hue_radians.sin();
        Self::new(h, c, j, q, m, s, jstar, astar, bstar)
    }

    /// Builds a color from CAM16-UCS coordinates under default conditions.
    #[must_use]
    pub fn from_ucs(jstar: f64, astar: f64, bstar: f64) -> Self {
        Self::from_ucs_in_viewing_conditions(jstar, astar, bstar, &ViewingConditions::default())
    }

    #[must_use]
    pub fn from_ucs_in_viewing_conditions(
        jstar: f64,
        astar: f64,
        bstar: f64,
        frame: &ViewingConditions,
    ) -> Self {
        let m = astar.hypot(bstar);
        let m2 = (m * 0.0228).exp_m1() / 0.0228;
        let c = m2 / frame.fl_root;
        let mut h = bstar.atan2(astar).to_degrees();
        if h < 0.0 {
            h += 360.0;
        }
        let j = jstar / (jstar - 100.0).mul_add(-0.007, 1.0);
        Self::from_jch_in_viewing_conditions(j, c, h, frame)
    }
}

impl From<Argb> for Cam16 {
    fn from(argb: Argb) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Cam16> for Argb {
    fn from(cam16: Cam16) -> Self {
        cam16.to_argb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_round_trips_within_one_step() {
        let argb = Argb::from_rgb(255, 0, 0);
        let back = Cam16::from_argb(argb).to_argb();
        assert!((i16::from(argb.red()) - i16::from(back.red())).abs() <= 1);
        assert!((i16::from(argb.green()) - i16::from(back.green())).abs() <= 1);
        assert!((i16::from(argb.blue()) - i16::from(back.blue())).abs() <= 1);
    }

    #[test]
    fn blue_hue() {
        let cam = Cam16::from_argb(Argb::from_rgb(0, 0, 255));
        assert!((cam.hue - 282.78).abs() < 0.1);
    }

    #[test]
    fn ucs_distance_red_to_blue() {
        let red = Cam16::from_argb(Argb::from_rgb(255, 0, 0));
        let blue = Cam16::from_argb(Argb::from_rgb(0, 0, 255));
        assert!((red.distance(&blue) - 21.42).abs() < 0.1);
    }
}
