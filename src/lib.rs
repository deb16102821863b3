//! Perceptron Learning Algorithm library.
//!
//! The core lives in [`perceptron::perceptron`]; the optional `python`
//! feature additionally exposes the classifier as a Python extension module.

// Declare your algorithm modules
pub mod common_types;
pub mod perceptron;

#[cfg(feature = "python")]
use common_types::DataPoint;
#[cfg(feature = "python")]
use perceptron::PerceptronError;
#[cfg(feature = "python")]
use perceptron::perceptron::{PerceptronClassifier, evaluate};
#[cfg(feature = "python")]
use perceptron::vector_ops;
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::{PyDict, PyList};

/// Maps a core error onto the Python exception type callers expect.
#[cfg(feature = "python")]
fn to_py_err(err: PerceptronError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// Evaluates `weights · augmented_vector >= 0` for already-augmented vectors.
#[cfg(feature = "python")]
#[pyfunction]
fn evaluate_py(weights: Vec<f64>, augmented_vector: Vec<f64>) -> PyResult<bool> {
    evaluate(&weights, &augmented_vector).map_err(to_py_err)
}

/// Returns a new vector with the bias component `1.0` prepended.
#[cfg(feature = "python")]
#[pyfunction]
fn augment_py(features: Vec<f64>) -> PyResult<Vec<f64>> {
    Ok(vector_ops::augment(&features))
}

#[cfg(feature = "python")]
#[pyclass(name = "PerceptronClassifier")]
struct PyPerceptronClassifier {
    classifier: PerceptronClassifier<f64>,
}

#[cfg(feature = "python")]
#[pymethods]
impl PyPerceptronClassifier {
    #[new]
    #[pyo3(signature = (max_iterations = None))]
    fn new(max_iterations: Option<usize>) -> Self {
        let mut classifier = PerceptronClassifier::new();
        if let Some(limit) = max_iterations {
            classifier = classifier.with_max_iterations(limit);
        }
        PyPerceptronClassifier { classifier }
    }

    fn fit(&mut self, training_data_py: &Bound<'_, PyList>) -> PyResult<()> {
        let mut training_data_rust: Vec<DataPoint<f64, bool>> = Vec::new();

        for item_py in training_data_py {
            // Expecting each item to be a dictionary like {'features': [1.0, 2.0], 'label': True}
            // or a tuple like ([1.0, 2.0], True)
            if let Ok(dict) = item_py.downcast::<PyDict>() {
                let features_item_any = dict
                    .get_item("features")?
                    .ok_or_else(|| {
                        PyErr::new::<pyo3::exceptions::PyValueError, _>("Missing 'features' key")
                    })?;
                let features_py = features_item_any.downcast::<PyList>()?;

                let label_item_any = dict.get_item("label")?.ok_or_else(|| {
                    PyErr::new::<pyo3::exceptions::PyValueError, _>("Missing 'label' key")
                })?;
                let label_py = label_item_any.extract::<bool>()?;

                let features_rust: Vec<f64> = features_py.extract()?;
                training_data_rust.push(DataPoint {
                    features: features_rust,
                    label: label_py,
                });
            } else if let Ok(tuple) = item_py.extract::<(Vec<f64>, bool)>() {
                training_data_rust.push(DataPoint {
                    features: tuple.0,
                    label: tuple.1,
                });
            } else {
                return Err(PyErr::new::<pyo3::exceptions::PyTypeError, _>(
                    "Training data items must be dictionaries {'features': [...], 'label': bool} or tuples ([...], bool)",
                ));
            }
        }

        self.classifier.fit(&training_data_rust).map_err(to_py_err)
    }

    fn predict_single(&self, test_sample_features: Vec<f64>) -> PyResult<bool> {
        self.classifier
            .predict_single(&test_sample_features)
            .map_err(to_py_err)
    }

    fn predict(&self, test_data: Vec<Vec<f64>>) -> PyResult<Vec<bool>> {
        self.classifier.predict(&test_data).map_err(to_py_err)
    }

    /// The augmented weight vector, or None before fit / for the degenerate
    /// constant hypotheses.
    #[getter]
    fn weights(&self) -> PyResult<Option<Vec<f64>>> {
        Ok(self.classifier.weights().map(|w| w.to_vec()))
    }
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` in `Cargo.toml`.
#[cfg(feature = "python")]
#[pymodule]
fn perceptron_learning_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(evaluate_py, m)?)?;
    m.add_function(wrap_pyfunction!(augment_py, m)?)?;
    m.add_class::<PyPerceptronClassifier>()?;
    Ok(())
}
