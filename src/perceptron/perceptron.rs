//! Core perceptron training loop and trained-hypothesis representation.

use crate::common_types::DataPoint;

use super::vector_ops::{add, augment, dot, scale};
use super::{PerceptronError, Result};
use log::{debug, trace};
use num_traits::Float;
use std::fmt::Debug;

/// Evaluates a hypothesis on an already-augmented feature vector.
///
/// Returns `true` when `weights · augmented >= 0`, i.e. the vector lies on
/// the positive side of (or exactly on) the hyperplane. The comparison is
/// exact; no epsilon tolerance is applied at the boundary.
///
/// Returns [`PerceptronError::DimensionMismatch`] if the two vectors differ
/// in length.
pub fn evaluate<F>(weights: &[F], augmented: &[F]) -> Result<bool>
where
    F: Float + std::iter::Sum,
{
    Ok(dot(weights, augmented)? >= F::zero())
}

/// A trained perceptron hypothesis.
///
/// Conceptually this is the classifying function returned by training; it is
/// immutable once produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hypothesis<F> {
    /// Degenerate hypothesis that ignores its input entirely. Produced for an
    /// empty dataset (always `true`) and for zero-dimensional datasets (the
    /// first example's label).
    Constant(bool),
    /// Augmented weight vector of dimension `n + 1`; classification is
    /// `w · augment(x) >= 0`.
    Linear(Vec<F>),
}

impl<F> Hypothesis<F>
where
    F: Float + std::iter::Sum,
{
    /// Classifies a raw (non-augmented) feature vector.
    ///
    /// A `Constant` hypothesis never inspects its argument and therefore
    /// never errors, whatever the input dimension. A `Linear` hypothesis
    /// augments the input exactly once and evaluates it against the stored
    /// weights, so a vector of the wrong dimension yields
    /// [`PerceptronError::DimensionMismatch`].
    pub fn classify(&self, features: &[F]) -> Result<bool> {
        match self {
            Hypothesis::Constant(label) => Ok(*label),
            Hypothesis::Linear(weights) => evaluate(weights, &augment(features)),
        }
    }
}

/// Trains a perceptron on an ordered dataset and returns the final hypothesis.
///
/// Edge cases, checked in this order:
/// 1. Empty dataset: returns `Hypothesis::Constant(true)`.
/// 2. Zero-dimensional feature vectors: returns the label of the *first*
///    example, ignoring all later ones. A zero-dimensional perceptron cannot
///    use its input and degenerates to remembering one label; note this quirk
///    when feeding it datasets with empty feature vectors.
/// 3. Otherwise the mistake-driven update loop below.
///
/// The general case augments every example once, starts from the zero weight
/// vector, and repeatedly corrects against the *first* misclassified example
/// in original dataset order (`w' = w + x` for a `true` label, `w' = w - x`
/// for a `false` one) until every example is classified correctly. The input
/// dataset is never reordered or discarded; each pass re-scans it against the
/// current weights.
///
/// Termination is guaranteed only for linearly separable data. With
/// `max_iterations = None` the loop runs forever on non-separable data; that
/// is the documented default behavior, not a defect. Passing `Some(limit)`
/// bounds the number of corrections and yields
/// [`PerceptronError::MaxIterationsExceeded`] when the cap is hit.
///
/// Returns [`PerceptronError::DimensionMismatch`] if the dataset's feature
/// vectors do not all share one dimension.
pub fn train<F>(
    training_data: &[DataPoint<F, bool>],
    max_iterations: Option<usize>,
) -> Result<Hypothesis<F>>
where
    F: Float + std::iter::Sum + Debug,
{
    let Some(first) = training_data.first() else {
        return Ok(Hypothesis::Constant(true));
    };
    let n_dimensions = first.features.len();
    for point in training_data {
        if point.features.len() != n_dimensions {
            return Err(PerceptronError::DimensionMismatch {
                expected: n_dimensions,
                found: point.features.len(),
            });
        }
    }
    if n_dimensions == 0 {
        return Ok(Hypothesis::Constant(first.label));
    }

    // Augment once up front; this list is fixed for the whole run.
    let augmented: Vec<(Vec<F>, bool)> = training_data
        .iter()
        .map(|point| (augment(&point.features), point.label))
        .collect();

    let mut weights = vec![F::zero(); n_dimensions + 1];
    let mut corrections: usize = 0;
    loop {
        // Lazy single pass: only the first misclassified example is needed,
        // so the full misclassified set is never materialized.
        let mut first_misclassified = None;
        for (x, y) in &augmented {
            if evaluate(&weights, x)? != *y {
                first_misclassified = Some((x, *y));
                break;
            }
        }
        let Some((x, y)) = first_misclassified else {
            debug!(
                "perceptron converged after {} corrections (dimension {})",
                corrections, n_dimensions
            );
            return Ok(Hypothesis::Linear(weights));
        };
        if let Some(limit) = max_iterations {
            if corrections >= limit {
                return Err(PerceptronError::MaxIterationsExceeded { limit });
            }
        }
        let sign = if y { F::one() } else { -F::one() };
        // Rebind rather than mutate; each iteration owns a fresh weight vector.
        weights = add(&weights, &scale(x, sign))?;
        corrections += 1;
        trace!("correction {}: weights = {:?}", corrections, weights);
    }
}

/// Binary linear classifier trained with the Perceptron Learning Algorithm.
///
/// Labels are `bool`; `true` maps to the positive side of the learned
/// hyperplane. Training is unbounded by default and therefore only terminates
/// on linearly separable data; use [`with_max_iterations`] to bound it.
///
/// [`with_max_iterations`]: PerceptronClassifier::with_max_iterations
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerceptronClassifier<F> {
    max_iterations: Option<usize>,
    hypothesis: Option<Hypothesis<F>>,
}

impl<F> PerceptronClassifier<F>
where
    F: Float + std::iter::Sum + Debug,
{
    /// Creates an unfitted classifier with unbounded training.
    pub fn new() -> Self {
        PerceptronClassifier {
            max_iterations: None,
            hypothesis: None,
        }
    }

    /// Caps training at `limit` weight corrections. When the cap is reached
    /// before convergence, `fit` fails with
    /// [`PerceptronError::MaxIterationsExceeded`]. Default semantics (no cap)
    /// are unchanged unless this is called.
    pub fn with_max_iterations(mut self, limit: usize) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    /// Trains the classifier. See [`train`] for the algorithm, edge cases and
    /// termination behavior. Any previously fitted hypothesis is replaced; a
    /// failed fit leaves the classifier unfitted rather than serving the old
    /// hypothesis.
    pub fn fit(&mut self, training_data: &[DataPoint<F, bool>]) -> Result<()> {
        // Drop the previous hypothesis first so an error below cannot leave
        // stale state behind.
        self.hypothesis = None;
        self.hypothesis = Some(train(training_data, self.max_iterations)?);
        Ok(())
    }

    /// Classifies a single raw feature vector.
    pub fn predict_single(&self, features: &[F]) -> Result<bool> {
        self.hypothesis
            .as_ref()
            .ok_or(PerceptronError::NotFitted)?
            .classify(features)
    }

    /// Classifies a batch of raw feature vectors, in order.
    pub fn predict(&self, test_data: &[Vec<F>]) -> Result<Vec<bool>> {
        test_data
            .iter()
            .map(|features| self.predict_single(features))
            .collect()
    }

    /// Returns the trained hypothesis, if `fit` has succeeded.
    pub fn hypothesis(&self) -> Option<&Hypothesis<F>> {
        self.hypothesis.as_ref()
    }

    /// Returns the augmented weight vector of a linear hypothesis. `None`
    /// before `fit` and for the degenerate constant hypotheses.
    pub fn weights(&self) -> Option<&[F]> {
        match &self.hypothesis {
            Some(Hypothesis::Linear(weights)) => Some(weights),
            _ => None,
        }
    }
}

impl<F> Default for PerceptronClassifier<F>
where
    F: Float + std::iter::Sum + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
