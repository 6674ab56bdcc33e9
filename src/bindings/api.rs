// API Functions - PyO3-exposed functions for Python
//
// Thin wrappers over the global classifier. `None` is accepted wherever the
// Rust API accepts an absent type and classifies as false.

use super::PyClassification;
use crate::classifier::Classifier;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Whether a v1 type is part of the maintained surface and may be migrated
///
/// Args:
///     fully_qualified_name (str | None): v1 type name
#[pyfunction]
#[pyo3(signature = (fully_qualified_name))]
pub fn is_supported_v1_type(fully_qualified_name: Option<&str>) -> bool {
    Classifier::global().is_supported_v1_type(&fully_qualified_name)
}

#[pyfunction]
#[pyo3(signature = (fully_qualified_name))]
pub fn is_eligible_for_builder_conversion(fully_qualified_name: Option<&str>) -> bool {
    Classifier::global().is_eligible_for_builder_conversion(&fully_qualified_name)
}

#[pyfunction]
#[pyo3(signature = (fully_qualified_name))]
pub fn is_eligible_for_static_factory(fully_qualified_name: Option<&str>) -> bool {
    Classifier::global().is_eligible_for_static_factory(&fully_qualified_name)
}

/// Builder type name for an eligible v2 type
///
/// Raises:
///     ValueError: If the type cannot be converted to a builder
#[pyfunction]
pub fn derive_builder_identifier(fully_qualified_name: &str) -> PyResult<String> {
    Classifier::global()
        .derive_builder_identifier(fully_qualified_name)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Client type name for a v2 client builder or the transfer manager
///
/// Raises:
///     ValueError: If the type is not a client builder
#[pyfunction]
pub fn derive_client_from_builder(fully_qualified_name: &str) -> PyResult<String> {
    Classifier::global()
        .derive_client_from_builder(fully_qualified_name)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
pub fn classify(fully_qualified_name: &str) -> PyClassification {
    PyClassification::from_classification(Classifier::global().classify(fully_qualified_name))
}

/// Classify many names in parallel, releasing the GIL
///
/// Returns:
///     list[Classification]: Results in the same order as the input
#[pyfunction]
pub fn classify_batch(py: Python<'_>, fully_qualified_names: Vec<String>) -> Vec<PyClassification> {
    let reports = py.detach(move || Classifier::global().classify_batch(&fully_qualified_names));

    reports
        .into_iter()
        .map(PyClassification::from_classification)
        .collect()
}
