// PyClassification - PyO3 wrapper for a Classification record

use crate::report::Classification;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Python-accessible classification of one type name
#[pyclass(name = "Classification")]
pub struct PyClassification {
    inner: Classification,
}

impl PyClassification {
    pub fn from_classification(classification: Classification) -> Self {
        PyClassification {
            inner: classification,
        }
    }
}

#[pymethods]
impl PyClassification {
    #[getter]
    fn identifier(&self) -> String {
        self.inner.identifier.clone()
    }

    #[getter]
    fn category(&self) -> String {
        // Same spelling as the JSON form
        serde_json::to_value(self.inner.category)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    #[getter]
    fn skipped(&self) -> bool {
        self.inner.skipped
    }

    #[getter]
    fn third_party_extension(&self) -> bool {
        self.inner.third_party_extension
    }

    #[getter]
    fn supported_v1(&self) -> bool {
        self.inner.supported_v1
    }

    #[getter]
    fn builder(&self) -> Option<String> {
        self.inner.builder.clone()
    }

    #[getter]
    fn client(&self) -> Option<String> {
        self.inner.client.clone()
    }

    #[getter]
    fn static_factory_arity(&self) -> Option<u8> {
        self.inner.static_factory_arity
    }

    /// Serialize to a JSON string
    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyValueError::new_err(format!("Serialization failed: {}", e)))
    }

    fn __repr__(&self) -> String {
        format!(
            "Classification(identifier='{}', category='{}')",
            self.inner.identifier,
            self.category()
        )
    }
}
