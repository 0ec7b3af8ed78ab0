//! Math utilities for noise evaluation.

/// Floor a coordinate to the containing lattice index.
///
/// `v as i64` truncates toward zero, so negative values with a fractional part
/// are corrected down by one. Values outside the `i64` range saturate.
#[inline]
#[must_use]
pub fn floor(v: f64) -> i64 {
    let i = v as i64;
    if v < i as f64 { i.saturating_sub(1) } else { i }
}

/// Dot product of an integer gradient row and a real-valued offset.
#[inline]
#[must_use]
pub fn dot<const N: usize>(gradient: &[i8], delta: &[f64; N]) -> f64 {
    let mut sum = 0.0;
    for (g, d) in gradient.iter().zip(delta) {
        sum += f64::from(*g) * d;
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(floor(0.0), 0);
        assert_eq!(floor(0.999), 0);
        assert_eq!(floor(1.0), 1);
        assert_eq!(floor(-0.001), -1);
        assert_eq!(floor(-1.0), -1);
        assert_eq!(floor(-1.5), -2);
        assert_eq!(floor(123_456.75), 123_456);
        assert_eq!(floor(3.0e9 + 0.8), 3_000_000_000);
        assert_eq!(floor(-5.0e9 - 0.41), -5_000_000_001);
    }

    #[test]
    fn floor_saturates_instead_of_panicking() {
        assert_eq!(floor(1.0e300), i64::MAX);
        assert_eq!(floor(-1.0e300), i64::MIN);
        assert_eq!(floor(f64::NEG_INFINITY), i64::MIN);
        assert_eq!(floor(f64::NAN), 0);
    }

    #[test]
    #[allow(clippy::float_cmp, reason = "small integer products are exact")]
    fn dot_uses_every_component() {
        assert_eq!(dot(&[3, -1], &[2.0, 4.0]), 2.0);
        assert_eq!(dot(&[1, 1, 1, 3], &[1.0, 1.0, 1.0, 1.0]), 6.0);
    }
}
