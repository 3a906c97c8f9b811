// Range-safe kernels for dense f64 vectors
//
// Components are divided by the vector's largest absolute value before being
// squared, so magnitudes near f64::MAX or f64::MIN_POSITIVE neither overflow to
// inf nor underflow to zero.

/// Plain dot product over equal-length slices.
/// Callers are responsible for the length check.
#[inline]
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Largest absolute component, or `None` if any component is NaN or infinite.
#[inline]
pub(crate) fn max_abs(v: &[f64]) -> Option<f64> {
    v.iter().try_fold(0.0f64, |acc, &x| x.is_finite().then(|| acc.max(x.abs())))
}

/// Euclidean norm of `v` given its largest absolute component `scale`
#[inline]
pub(crate) fn scaled_norm(v: &[f64], scale: f64) -> f64 {
    if scale == 0.0 {
        return 0.0;
    }
    let sum: f64 = v.iter().map(|&x| (x / scale) * (x / scale)).sum();
    scale * sum.sqrt()
}

/// Cosine of the angle between `a` and `b`, each pre-divided by its own scale.
/// Both scales must be finite and nonzero.
#[inline]
pub(crate) fn scaled_cosine(a: &[f64], scale_a: f64, b: &[f64], scale_b: f64) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x / scale_a, y / scale_b);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
