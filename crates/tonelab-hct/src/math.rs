#![forbid(unsafe_code)]

//! Angle and interpolation helpers shared across the color models.

/// Linear interpolation: returns `start` at `amount == 0.0` and `stop` at `amount == 1.0`.
#[must_use]
#[inline]
pub fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (stop - start).mul_add(amount, start)
}

/// Sanitizes an integer degree measure to the range `[0, 360)`.
#[must_use]
pub const fn sanitize_degrees_int(degrees: i32) -> i32 {
    let degrees = degrees % 360;
    if degrees < 0 { degrees + 360 } else { degrees }
}

/// Sanitizes a floating-point degree measure to the range `[0, 360)`.
#[must_use]
pub fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 { degrees + 360.0 } else { degrees }
}

/// Sign of the shortest rotation from `from` to `to`, in degrees.
///
/// `1.0` when the increasing direction is shortest (or the angles are
/// antipodal), `-1.0` otherwise.
#[must_use]
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing_difference = sanitize_degrees(to - from);
    if increasing_difference <= 180.0 { 1.0 } else { -1.0 }
}

/// Distance between two angles on a circle, in degrees, in `[0, 180]`.
#[must_use]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Multiplies a row vector by a 3x3 matrix.
#[must_use]
pub fn matrix_multiply(row: [f64; 3], matrix: [[f64; 3]; 3]) -> [f64; 3] {
    let a = matrix[0][2].mul_add(row[2], matrix[0][0].mul_add(row[0], matrix[0][1] * row[1]));
    let b = matrix[1][2].mul_add(row[2], matrix[1][0].mul_add(row[0], matrix[1][1] * row[1]));
    let c = matrix[2][2].mul_add(row[2], matrix[2][0].mul_add(row[0], matrix[2][1] * row[1]));
    [a, b, c]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_wraps_negative_angles() {
        assert_eq!(sanitize_degrees_int(-30), 330);
        assert_eq!(sanitize_degrees_int(730), 10);
        assert!((sanitize_degrees(-0.5) - 359.5).abs() < 1e-12);
        assert!((sanitize_degrees(360.0)).abs() < 1e-12);
    }

    #[test]
    fn difference_is_symmetric_and_bounded() {
        assert!((difference_degrees(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((difference_degrees(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((difference_degrees(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_prefers_shorter_arc() {
        assert_eq!(rotation_direction(10.0, 40.0), 1.0);
        assert_eq!(rotation_direction(40.0, 10.0), -1.0);
        assert_eq!(rotation_direction(350.0, 10.0), 1.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
    }
}
