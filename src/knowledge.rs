//! Knowledge base - every table the classifier consults, built once
//!
//! The built-in tables are compiled in. Hosts that need to recognise an extra
//! service or exclude an additional package go through [`KnowledgeBaseBuilder`]
//! before the first query; the result is immutable.

use crate::error::{ClassifierError, Result};
use crate::registry::{BuilderMapping, ServiceRegistry, SkipRegistry, StaticFactoryMapping};
use std::sync::LazyLock;

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::builtin);

/// Skip rules, service roots, and core-class tables
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    pub(crate) skip: SkipRegistry,
    pub(crate) services: ServiceRegistry,
    pub(crate) builders: BuilderMapping,
    pub(crate) factories: StaticFactoryMapping,
}

impl KnowledgeBase {
    /// Assemble the compiled-in tables
    pub fn builtin() -> Self {
        Self {
            skip: SkipRegistry::builtin(),
            services: ServiceRegistry::builtin(),
            builders: BuilderMapping::builtin(),
            factories: StaticFactoryMapping::builtin(),
        }
    }

    /// Process-wide instance of the built-in tables
    pub fn global() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Start from the built-in tables and add entries
    pub fn builder() -> KnowledgeBaseBuilder {
        KnowledgeBaseBuilder::default()
    }

    pub fn skip_registry(&self) -> &SkipRegistry {
        &self.skip
    }

    pub fn service_registry(&self) -> &ServiceRegistry {
        &self.services
    }

    pub fn builder_mapping(&self) -> &BuilderMapping {
        &self.builders
    }

    pub fn static_factory_mapping(&self) -> &StaticFactoryMapping {
        &self.factories
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Collects additions to the built-in tables
#[derive(Debug, Default)]
pub struct KnowledgeBaseBuilder {
    service_packages: Vec<String>,
    skip_packages: Vec<String>,
    skip_classes: Vec<String>,
    builders: Vec<(String, String)>,
    factories: Vec<(String, u8)>,
}

impl KnowledgeBaseBuilder {
    /// Treat `package` as a maintained v1 service root
    pub fn service_package(mut self, package: impl Into<String>) -> Self {
        self.service_packages.push(package.into());
        self
    }

    pub fn skip_package(mut self, package: impl Into<String>) -> Self {
        self.skip_packages.push(package.into());
        self
    }

    pub fn skip_class(mut self, class: impl Into<String>) -> Self {
        self.skip_classes.push(class.into());
        self
    }

    /// Map a v2 core class to its builder
    pub fn core_class_builder(
        mut self,
        class: impl Into<String>,
        builder: impl Into<String>,
    ) -> Self {
        self.builders.push((class.into(), builder.into()));
        self
    }

    /// Register a v2 core class constructible through a static factory
    pub fn core_class_static_factory(mut self, class: impl Into<String>, arity: u8) -> Self {
        self.factories.push((class.into(), arity));
        self
    }

    /// Validate the additions and produce an immutable knowledge base
    pub fn build(self) -> Result<KnowledgeBase> {
        let mut kb = KnowledgeBase::builtin();

        for package in self.service_packages {
            validate_name("service package", &package)?;
            kb.services.insert(package);
        }
        for package in self.skip_packages {
            validate_name("skip package", &package)?;
            kb.skip.insert_package(package);
        }
        for class in self.skip_classes {
            validate_name("skip class", &class)?;
            kb.skip.insert_class(class);
        }
        for (class, builder) in self.builders {
            validate_name("core class", &class)?;
            validate_name("builder", &builder)?;
            kb.builders.insert(class, builder);
        }
        for (class, arity) in self.factories {
            validate_name("core class", &class)?;
            kb.factories.insert(class, arity);
        }

        Ok(kb)
    }
}

/// Entries must be namespace-qualified, non-empty dotted names
fn validate_name(kind: &str, name: &str) -> Result<()> {
    let qualified = name.contains('.')
        && name
            .split('.')
            .all(|segment| !segment.is_empty() && !segment.contains(char::is_whitespace));

    if qualified {
        Ok(())
    } else {
        Err(ClassifierError::InvalidConfiguration(format!(
            "{kind} '{name}' is not a fully-qualified name"
        )))
    }
}
