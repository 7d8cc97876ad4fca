#![forbid(unsafe_code)]

//! Viewing conditions for the CAM16 appearance model.
//!
//! Appearance models need to know the environment a color is seen in, not just
//! the color itself. This struct precomputes every CAM16 intermediate that
//! depends only on that environment so repeated conversions stay cheap.

use crate::argb::{WHITE_POINT_D65, y_from_lstar};
use crate::cam16::XYZ_TO_CAM16RGB;
use crate::math;
use std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewingConditions {
    pub n: f64,
    pub aw: f64,
    pub nbb: f64,
    pub ncb: f64,
    pub c: f64,
    pub nc: f64,
    pub rgb_d: [f64; 3],
    pub fl: f64,
    pub fl_root: f64,
    pub z: f64,
}

impl ViewingConditions {
    /// Builds viewing conditions from physically meaningful parameters.
    ///
    /// * `white_point`: white point in XYZ, normally D65.
    /// * `adapting_luminance`: luminance of the adapting field. Roughly
    ///   lux times 0.0586; the default corresponds to 200 lux.
    /// * `background_lstar`: L* of the area surrounding the color.
    /// * `surround`: 0.0 pitch dark to 2.0 uniform lighting.
    /// * `discounting_illuminant`: whether the eye discounts the tint of the
    ///   ambient light. False for self-luminous displays.
    #[must_use]
    pub fn make(
        white_point: [f64; 3],
        adapting_luminance: f64,
        background_lstar: f64,
        surround: f64,
        discounting_illuminant: bool,
    ) -> Self {
        // A pure black background is non-physical and produces infinities.
        let background_lstar = background_lstar.max(0.1);

        let matrix = XYZ_TO_CAM16RGB;
        let [r_w, g_w, b_w] = math::matrix_multiply(white_point, matrix);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            math::lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            math::lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };
        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = d.clamp(0.0, 1.0);
        let nc = f;
        let rgb_d = [
            d * (100.0 / r_w) + 1.0 - d,
            d * (100.0 / g_w) + 1.0 - d,
            d * (100.0 / b_w) + 1.0 - d,
        ];
        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4_f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4_f * k4_f * (5.0 * adapting_luminance).cbrt();
        let n = y_from_lstar(background_lstar) / white_point[1];
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;
        let rgb_a_factors = [
            (fl * rgb_d[0] * r_w / 100.0).powf(0.42),
            (fl * rgb_d[1] * g_w / 100.0).powf(0.42),
            (fl * rgb_d[2] * b_w / 100.0).powf(0.42),
        ];
        let rgb_a = [
            400.0 * rgb_a_factors[0] / (rgb_a_factors[0] + 27.13),
            400.0 * rgb_a_factors[1] / (rgb_a_factors[1] + 27.13),
            400.0 * rgb_a_factors[2] / (rgb_a_factors[2] + 27.13),
        ];
        let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;
        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// sRGB-like viewing conditions over a background of the given L*.
    #[must_use]
    pub fn with_background_lstar(lstar: f64) -> Self {
        Self::make(
            WHITE_POINT_D65,
            200.0 / PI * y_from_lstar(50.0) / 100.0,
            lstar,
            2.0,
            false,
        )
    }
}

impl Default for ViewingConditions {
    /// Standard sRGB frame: D65, 200 lux, midgray background.
    fn default() -> Self {
        Self::with_background_lstar(50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_constants() {
        let vc = ViewingConditions::default();
        assert!((vc.n - 0.18418).abs() < 0.0001);
        assert!((vc.aw - 29.981).abs() < 0.001);
        assert!((vc.nbb - 1.0169).abs() < 0.001);
    }

    #[test]
    fn black_background_is_clamped() {
        let vc = ViewingConditions::with_background_lstar(0.0);
        assert!(vc.n.is_finite());
        assert!(vc.nbb.is_finite());
    }
}
