//! Perceptron Learning Algorithm (PLA) for binary linear classification.
//!
//! The perceptron finds a separating hyperplane for a linearly separable
//! dataset by repeatedly correcting the weight vector against the first
//! misclassified training example. The bias term is absorbed into the weight
//! vector by prepending a constant `1` to every feature vector (see
//! [`vector_ops::augment`]).

use thiserror::Error;

/// Errors reported by the perceptron classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PerceptronError {
    /// Two vectors that must share a dimension do not, e.g. the evaluator was
    /// given weight and feature vectors of different lengths, or the training
    /// data is ragged.
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// The opt-in iteration cap was reached before the training data was
    /// fully classified. Only produced when a cap was configured; the default
    /// training loop runs unbounded.
    #[error("no separating hyperplane found within {limit} corrections")]
    MaxIterationsExceeded { limit: usize },
    /// `predict` was called before `fit`.
    #[error("classifier has not been fitted; call fit() first")]
    NotFitted,
}

/// Convenience alias for `std::result::Result<T, PerceptronError>`.
pub type Result<T> = std::result::Result<T, PerceptronError>;

pub mod perceptron;
pub mod vector_ops;
