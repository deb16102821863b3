//! Small vector-algebra helpers for the perceptron.
//!
//! The weight-update rule only needs dot product, addition, scaling and bias
//! augmentation, so these are plain free functions over slices rather than a
//! vector type with operator overloading.

use super::{PerceptronError, Result};
use num_traits::Float;

/// Calculates the dot product of two vectors.
///
/// Returns [`PerceptronError::DimensionMismatch`] if the vectors differ in
/// length; the result would be meaningless otherwise.
pub fn dot<F: Float + std::iter::Sum>(a: &[F], b: &[F]) -> Result<F> {
    if a.len() != b.len() {
        return Err(PerceptronError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum())
}

/// Component-wise sum of two vectors of equal length.
pub fn add<F: Float>(a: &[F], b: &[F]) -> Result<Vec<F>> {
    if a.len() != b.len() {
        return Err(PerceptronError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x + y).collect())
}

/// Multiplies every component of `v` by the scalar `c`, returning a new vector.
pub fn scale<F: Float>(v: &[F], c: F) -> Vec<F> {
    v.iter().map(|&x| x * c).collect()
}

/// Returns a new vector with a constant `1` prepended to `features`.
///
/// This absorbs the bias term into the weight vector: a hyperplane
/// `w · x + b = 0` over raw features becomes `w' · x' = 0` over augmented
/// vectors. Callers must augment each vector exactly once, both at training
/// and at prediction time.
pub fn augment<F: Float>(features: &[F]) -> Vec<F> {
    let mut augmented = Vec::with_capacity(features.len() + 1);
    augmented.push(F::one());
    augmented.extend_from_slice(features);
    augmented
}

// --- Unit tests for the vector helpers ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, -5.0, 6.0];
        assert_eq!(dot(&a, &b).unwrap(), 4.0 - 10.0 + 18.0);
    }

    #[test]
    fn test_dot_product_empty_vectors() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(dot(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn test_dot_product_dimension_mismatch() {
        let a = vec![1.0, 2.0];
        let b = vec![1.0];
        assert_eq!(
            dot(&a, &b),
            Err(PerceptronError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_add_and_scale() {
        let a = vec![1.0, -2.0];
        let b = vec![0.5, 2.0];
        assert_eq!(add(&a, &b).unwrap(), vec![1.5, 0.0]);
        assert_eq!(scale(&a, -1.0), vec![-1.0, 2.0]);
    }

    #[test]
    fn test_add_dimension_mismatch() {
        let a = vec![1.0, -2.0];
        let b = vec![0.5];
        assert!(matches!(
            add(&a, &b),
            Err(PerceptronError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_augment_prepends_one() {
        let features = vec![2.0, 3.0];
        assert_eq!(augment(&features), vec![1.0, 2.0, 3.0]);
        // The input is untouched; augment allocates a new vector.
        assert_eq!(features, vec![2.0, 3.0]);
    }

    #[test]
    fn test_augment_empty_vector() {
        let features: Vec<f32> = Vec::new();
        assert_eq!(augment(&features), vec![1.0_f32]);
    }
}
