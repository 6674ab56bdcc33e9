//! Classifier - the decision protocol over patterns and knowledge-base tables
//!
//! The order of the guard clauses below is part of the contract: skip rules
//! override everything, service-root membership is only consulted inside the
//! v1 services namespace, and builder shapes are tested before the broader
//! model-class shape.

use crate::error::{ClassifierError, Result};
use crate::knowledge::KnowledgeBase;
use crate::patterns;
use crate::registry::{root_package, SkipReason, V1_SERVICES_PREFIX};
use crate::types::TypeRef;
use tracing::{debug, info};

/// Answers every classification and derivation query against one knowledge base
///
/// Cheap to copy; holds only a shared reference to immutable tables.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'kb> {
    kb: &'kb KnowledgeBase,
}

impl Classifier<'static> {
    /// Classifier over the built-in tables
    pub fn global() -> Self {
        Self::new(KnowledgeBase::global())
    }
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::global()
    }
}

impl<'kb> Classifier<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &'kb KnowledgeBase {
        self.kb
    }

    /// Whether the name must never be migrated. Absent names are skipped.
    pub fn should_skip<T: TypeRef + ?Sized>(&self, ty: &T) -> bool {
        ty.name().map_or(true, |name| self.kb.skip.should_skip(name))
    }

    /// Whether the name sits under `com.amazonaws.services.` in a root package
    /// that is not a maintained service
    pub fn is_third_party_extension<T: TypeRef + ?Sized>(&self, ty: &T) -> bool {
        ty.name()
            .is_some_and(|name| self.kb.services.is_third_party_extension(name))
    }

    /// Whether a v1 type is part of the maintained surface and may be migrated
    pub fn is_supported_v1_type<T: TypeRef + ?Sized>(&self, ty: &T) -> bool {
        let Some(name) = ty.name() else {
            return false;
        };

        if let Some(reason) = self.kb.skip.skip_reason(name) {
            if reason != SkipReason::OutsideV1Namespace {
                debug!("Skipping {} ({:?})", name, reason);
            }
            return false;
        }

        if name.starts_with(V1_SERVICES_PREFIX) {
            if self.kb.services.is_third_party_extension(name) {
                info!(
                    "Skipping transformation for {}: root package {} is a custom SDK, not a maintained v1 service",
                    name,
                    root_package(name).unwrap_or(name)
                );
                return false;
            }
            return true;
        }

        patterns::is_v1_model_class(ty) || patterns::is_v1_client_class(ty)
    }

    /// Whether the v2 type can be constructed through a builder
    pub fn is_eligible_for_builder_conversion<T: TypeRef + ?Sized>(&self, ty: &T) -> bool {
        let Some(name) = ty.name() else {
            return false;
        };

        patterns::is_v2_model_class(ty)
            || patterns::is_v2_client_class(ty)
            || self.kb.builders.contains_class(name)
            || patterns::is_v2_transfer_manager(ty)
    }

    /// Whether the v2 type is a core class constructible through a static factory
    pub fn is_eligible_for_static_factory<T: TypeRef + ?Sized>(&self, ty: &T) -> bool {
        ty.name()
            .is_some_and(|name| self.kb.factories.contains_class(name))
    }

    /// Number of arguments the static factory of a v2 core class takes
    pub fn static_factory_arity<T: TypeRef + ?Sized>(&self, ty: &T) -> Option<u8> {
        ty.name().and_then(|name| self.kb.factories.arity(name))
    }

    pub fn is_v2_core_class_with_builder<T: TypeRef + ?Sized>(&self, ty: &T) -> bool {
        ty.name()
            .is_some_and(|name| self.kb.builders.contains_class(name))
    }

    /// Whether the name is the builder of a mapped v2 core class
    pub fn is_v2_core_class_builder<T: TypeRef + ?Sized>(&self, ty: &T) -> bool {
        ty.name()
            .is_some_and(|name| self.kb.builders.is_known_builder(name))
    }

    /// Fully-qualified name of the builder for an eligible v2 type
    ///
    /// - model classes that are not already model builders get a nested `.Builder`
    /// - mapped core classes get their mapped builder, which may be the class itself
    /// - everything else (clients, the transfer manager, model builders) gets a
    ///   `Builder` suffix
    ///
    /// Fails with `InvalidArgument` unless
    /// [`is_eligible_for_builder_conversion`](Self::is_eligible_for_builder_conversion) holds.
    pub fn derive_builder_identifier<T: TypeRef + ?Sized>(&self, ty: &T) -> Result<String> {
        let name = match ty.name() {
            Some(name) if self.is_eligible_for_builder_conversion(ty) => name,
            other => {
                return Err(ClassifierError::invalid_argument(
                    other.unwrap_or_default(),
                    "cannot be converted to builder",
                ))
            }
        };

        if patterns::is_v2_model_class(ty) && !patterns::is_v2_model_builder(ty) {
            return Ok(format!("{name}.Builder"));
        }

        if let Some(builder) = self.kb.builders.builder_for(name) {
            return Ok(builder.to_string());
        }

        Ok(format!("{name}Builder"))
    }

    /// Client type built by a v2 client builder (or the transfer manager)
    ///
    /// Removes every occurrence of `Builder`, not just a trailing one.
    pub fn derive_client_from_builder<T: TypeRef + ?Sized>(&self, ty: &T) -> Result<String> {
        match ty.name() {
            Some(name) if patterns::is_v2_client_builder(ty) || patterns::is_v2_transfer_manager(ty) => {
                Ok(name.replace("Builder", ""))
            }
            other => Err(ClassifierError::invalid_argument(
                other.unwrap_or_default(),
                "is not a client builder",
            )),
        }
    }
}
