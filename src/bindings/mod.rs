// PyO3 Bindings Module
//
// Exposes the classifier to a Python-hosted rewrite layer. Only compiled with
// the `python` feature.

mod api;
mod classification;

pub use api::{
    classify, classify_batch, derive_builder_identifier, derive_client_from_builder,
    is_eligible_for_builder_conversion, is_eligible_for_static_factory, is_supported_v1_type,
};
pub use classification::PyClassification;
