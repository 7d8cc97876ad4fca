#![forbid(unsafe_code)]

//! Contrast requirements as a function of the user's contrast level.

use tonelab_hct::math::lerp;

/// A contrast requirement anchored at four contrast levels.
///
/// Anchors sit at contrast level -1 (`low`), 0 (`normal`), 0.5 (`medium`),
/// and 1 (`high`); values between anchors interpolate linearly.
///
/// # Example
/// ```
/// use tonelab_scheme::contrast_curve::ContrastCurve;
///
/// let curve = ContrastCurve::new(1.5, 1.5, 3.0, 5.5);
/// assert_eq!(curve.get(1.0), 5.5);
/// assert_eq!(curve.get(0.0), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCurve {
    /// Contrast ratio at level -1, the lowest legible contrast.
    pub low: f64,
    /// Contrast ratio at level 0, the baseline.
    pub normal: f64,
    /// Contrast ratio at level 0.5.
    pub medium: f64,
    /// Contrast ratio at level 1, the highest contrast.
    pub high: f64,
}

impl ContrastCurve {
    #[must_use]
    pub const fn new(low: f64, normal: f64, medium: f64, high: f64) -> Self {
        Self {
            low,
            normal,
            medium,
            high,
        }
    }

    /// The required contrast ratio at `contrast_level` in `[-1, 1]`.
    /// Values outside the range clamp to the end anchors.
    #[must_use]
    pub fn get(&self, contrast_level: f64) -> f64 {
        if contrast_level <= -1.0 {
            self.low
        } else if contrast_level < 0.0 {
            lerp(self.low, self.normal, (contrast_level - (-1.0)) / 1.0)
        } else if contrast_level < 0.5 {
            lerp(self.normal, self.medium, (contrast_level - 0.0) / 0.5)
        } else if contrast_level < 1.0 {
            lerp(self.medium, self.high, (contrast_level - 0.5) / 0.5)
        } else {
            self.high
        }
    }
}

/// The curve conventionally paired with a default contrast requirement.
///
/// Unlisted defaults keep their value through medium contrast and climb to
/// the maximum at high contrast.
#[must_use]
pub fn curve_for_default_contrast(default_contrast: f64) -> ContrastCurve {
    let matches_level = |level: f64| (default_contrast - level).abs() < 1e-5;
    if matches_level(1.5) {
        ContrastCurve::new(1.5, 1.5, 3.0, 5.5)
    } else if matches_level(3.0) {
        ContrastCurve::new(3.0, 3.0, 4.5, 7.0)
    } else if matches_level(4.5) {
        ContrastCurve::new(4.5, 4.5, 7.0, 11.0)
    } else if matches_level(6.0) {
        ContrastCurve::new(6.0, 6.0, 7.0, 11.0)
    } else if matches_level(7.0) {
        ContrastCurve::new(7.0, 7.0, 11.0, 21.0)
    } else if matches_level(9.0) {
        ContrastCurve::new(9.0, 9.0, 11.0, 21.0)
    } else if matches_level(11.0) {
        ContrastCurve::new(11.0, 11.0, 21.0, 21.0)
    } else if matches_level(21.0) {
        ContrastCurve::new(21.0, 21.0, 21.0, 21.0)
    } else {
        ContrastCurve::new(default_contrast, default_contrast, 7.0, 21.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_exact() {
        let curve = ContrastCurve::new(1.5, 1.5, 3.0, 5.5);
        assert_eq!(curve.get(-1.0), 1.5);
        assert_eq!(curve.get(0.0), 1.5);
        assert_eq!(curve.get(0.5), 3.0);
        assert_eq!(curve.get(1.0), 5.5);
    }

    #[test]
    fn interpolates_between_anchors() {
        let curve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);
        assert!((curve.get(-0.5) - 3.75).abs() < 1e-9);
        assert!((curve.get(0.25) - 5.75).abs() < 1e-9);
        assert!((curve.get(0.75) - 9.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_outside_range() {
        let curve = ContrastCurve::new(3.0, 4.5, 7.0, 11.0);
        assert_eq!(curve.get(-2.0), 3.0);
        assert_eq!(curve.get(2.0), 11.0);
    }

    #[test]
    fn default_contrast_table() {
        assert_eq!(
            curve_for_default_contrast(1.5),
            ContrastCurve::new(1.5, 1.5, 3.0, 5.5)
        );
        assert_eq!(
            curve_for_default_contrast(4.5),
            ContrastCurve::new(4.5, 4.5, 7.0, 11.0)
        );
        assert_eq!(
            curve_for_default_contrast(21.0),
            ContrastCurve::new(21.0, 21.0, 21.0, 21.0)
        );
        assert_eq!(
            curve_for_default_contrast(5.0),
            ContrastCurve::new(5.0, 5.0, 7.0, 21.0)
        );
    }
}
