//! Cosine similarity and its angle view
//!
//! All functions are pure. Length checks and degenerate-vector checks are
//! performed here so that callers never observe a NaN similarity.

use crate::error::{Result, SimilarityError};
use crate::kernels;

#[inline]
fn check_dims(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Dot product of two equal-length vectors
#[inline]
pub fn dot_product(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dims(a, b)?;
    Ok(kernels::dot(a, b))
}

/// Euclidean length of a vector. Non-finite components give NaN.
#[inline]
#[must_use]
pub fn magnitude(v: &[f64]) -> f64 {
    match kernels::max_abs(v) {
        Some(scale) => kernels::scaled_norm(v, scale),
        None => f64::NAN,
    }
}

/// Largest absolute component of `v`, or `DegenerateVector` when `v` is all
/// zeros or holds a NaN or infinite component.
#[inline]
fn non_degenerate_scale(v: &[f64]) -> Result<f64> {
    match kernels::max_abs(v) {
        Some(scale) if scale > 0.0 => Ok(scale),
        _ => Err(SimilarityError::DegenerateVector),
    }
}

/// Returns the magnitude of `v`, or `DegenerateVector` when it is all zeros
/// or has a non-finite component.
///
/// Any finite nonzero vector passes, however large or small its components.
/// The returned magnitude itself may round to infinity for components near
/// `f64::MAX`.
#[inline]
pub fn check_non_degenerate(v: &[f64]) -> Result<f64> {
    let scale = non_degenerate_scale(v)?;
    Ok(kernels::scaled_norm(v, scale))
}

/// Cosine similarity in `[-1, 1]`
///
/// # Errors
/// * `DimensionMismatch` if the slices differ in length (`expected` is `a.len()`)
/// * `DegenerateVector` if either side is all zeros or has a non-finite component
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    check_dims(a, b)?;
    let scale_a = non_degenerate_scale(a)?;
    let scale_b = non_degenerate_scale(b)?;
    let sim = kernels::scaled_cosine(a, scale_a, b, scale_b);
    Ok(sim.clamp(-1.0, 1.0))
}

/// Converts a cosine similarity into the angle between the vectors, in degrees.
///
/// Input is clamped to `[-1, 1]` first, so overshoot such as `1.0000000002`
/// maps to `0.0` instead of NaN.
#[inline]
#[must_use]
pub fn similarity_to_angle_degrees(sim: f64) -> f64 {
    sim.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthogonal() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert_eq!(sim, 0.0);
        assert!((similarity_to_angle_degrees(sim) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_parallel_and_opposite() {
        let same = cosine_similarity(&[2.0, 0.0], &[5.0, 0.0]).unwrap();
        assert!((same - 1.0).abs() < 1e-12);

        let opposite = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
        assert!((opposite + 1.0).abs() < 1e-12);
        assert!((similarity_to_angle_degrees(opposite) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_diagonal() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.5, 0.5]).unwrap();
        assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert!((similarity_to_angle_degrees(sim) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            SimilarityError::DimensionMismatch { expected: 2, actual: 3 }
        );
        assert!(dot_product(&[1.0], &[]).is_err());
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(
            cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]),
            Err(SimilarityError::DegenerateVector)
        );
        assert_eq!(
            cosine_similarity(&[1.0, 0.0], &[0.0, 0.0]),
            Err(SimilarityError::DegenerateVector)
        );
        assert_eq!(
            check_non_degenerate(&[f64::NAN, 1.0]),
            Err(SimilarityError::DegenerateVector)
        );
        assert_eq!(
            check_non_degenerate(&[f64::INFINITY]),
            Err(SimilarityError::DegenerateVector)
        );
    }

    #[test]
    fn test_angle_clamps_out_of_range() {
        assert_eq!(similarity_to_angle_degrees(1.5), 0.0);
        assert!((similarity_to_angle_degrees(-2.0) - 180.0).abs() < 1e-9);
        assert!((similarity_to_angle_degrees(0.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_large_components() {
        let sim = cosine_similarity(&[1e200, 0.0], &[1e200, 1e200]).unwrap();
        assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert!(check_non_degenerate(&[1e200, 0.0]).is_ok());

        let near_max = cosine_similarity(&[f64::MAX, f64::MAX], &[1.0, 1.0]).unwrap();
        assert!((near_max - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_components() {
        let sim = cosine_similarity(&[1e-200, 0.0], &[1e-200, 1e-200]).unwrap();
        assert!((sim - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);

        let subnormal = f64::MIN_POSITIVE / 4.0;
        assert!(check_non_degenerate(&[subnormal, 0.0]).is_ok());
        let self_sim = cosine_similarity(&[subnormal, subnormal], &[subnormal, subnormal]).unwrap();
        assert!((self_sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(&[3.0, 4.0]), 5.0);
        assert_eq!(magnitude(&[]), 0.0);
        assert!((magnitude(&[3e-300, 4e-300]) / 5e-300 - 1.0).abs() < 1e-12);
        assert!(magnitude(&[f64::NAN]).is_nan());
    }
}
