// SDK Migration Types - classification core of the AWS SDK for Java v1 -> v2 migration
//
// Decides whether a fully-qualified type name belongs to the migratable v1
// surface, which structural category it falls into on either surface, and what
// its v2 builder or client counterpart is called. Parsing and rewriting source
// code happen in the host layer; this crate only answers questions about names.

pub mod classifier;
pub mod error;
pub mod knowledge;
pub mod patterns;
pub mod registry;
pub mod report;
pub mod type_kinds;
pub mod types;

// PyO3 bindings layer (optional)
#[cfg(feature = "python")]
pub mod bindings;

pub use classifier::Classifier;
pub use error::{ClassifierError, Result};
pub use knowledge::{KnowledgeBase, KnowledgeBaseBuilder};
pub use report::{Classification, TypeCategory};
pub use types::{JavaType, TypeRef};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// SDK migration types Python module
#[cfg(feature = "python")]
#[pymodule]
fn sdk_migration_types(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    m.add_function(wrap_pyfunction!(bindings::is_supported_v1_type, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::is_eligible_for_builder_conversion, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::is_eligible_for_static_factory, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::derive_builder_identifier, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::derive_client_from_builder, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::classify, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::classify_batch, m)?)?;

    m.add_class::<bindings::PyClassification>()?;

    Ok(())
}
