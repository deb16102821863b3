//! This module contains common data structures used across various machine learning algorithms.

/// Represents a single data point, with features and a label.
///
/// - `F`: The type of the features (e.g., `f64`, `f32`).
/// - `L`: The type of the label (e.g., `bool` for binary classifiers, `String`, an enum).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint<F, L> {
    pub features: Vec<F>,
    pub label: L,
}

// Optional: A constructor for convenience, though direct struct initialization also works.
impl<F, L> DataPoint<F, L> {
    pub fn new(features: Vec<F>, label: L) -> Self {
        DataPoint { features, label }
    }
}
