//! v2 core classes that do not follow the generated-code naming conventions
//!
//! Credentials and client configuration types live outside the services
//! namespace, so their builders and factories are listed explicitly.

use std::collections::{HashMap, HashSet};

const AUTH_CREDENTIALS: &str = "software.amazon.awssdk.auth.credentials";
const STS_AUTH: &str = "software.amazon.awssdk.services.sts.auth";
const CLIENT_CONFIG: &str = "software.amazon.awssdk.core.client.config";

/// How a core class reaches its builder
#[derive(Debug, Clone, Copy)]
enum BuilderShape {
    /// Nested `<Class>.Builder` type
    Nested,
    /// The class acts as its own builder
    SelfBuilt,
}

/// (package, simple name, builder shape)
const CORE_CLASSES_WITH_BUILDER: &[(&str, &str, BuilderShape)] = &[
    (CLIENT_CONFIG, "ClientOverrideConfiguration", BuilderShape::Nested),
    (AUTH_CREDENTIALS, "AwsBasicCredentials", BuilderShape::Nested),
    (AUTH_CREDENTIALS, "AwsSessionCredentials", BuilderShape::Nested),
    (AUTH_CREDENTIALS, "DefaultCredentialsProvider", BuilderShape::SelfBuilt),
    (AUTH_CREDENTIALS, "ProfileCredentialsProvider", BuilderShape::SelfBuilt),
    (AUTH_CREDENTIALS, "ContainerCredentialsProvider", BuilderShape::SelfBuilt),
    (AUTH_CREDENTIALS, "InstanceProfileCredentialsProvider", BuilderShape::Nested),
    (AUTH_CREDENTIALS, "StaticCredentialsProvider", BuilderShape::Nested),
    (AUTH_CREDENTIALS, "ProcessCredentialsProvider", BuilderShape::Nested),
    (STS_AUTH, "StsAssumeRoleCredentialsProvider", BuilderShape::Nested),
    (STS_AUTH, "StsGetSessionTokenCredentialsProvider", BuilderShape::Nested),
    (STS_AUTH, "StsAssumeRoleWithWebIdentityCredentialsProvider", BuilderShape::Nested),
];

/// (package, simple name, static factory arity)
const CORE_CLASSES_WITH_STATIC_FACTORY: &[(&str, &str, u8)] = &[
    (AUTH_CREDENTIALS, "EnvironmentVariableCredentialsProvider", 0),
    (AUTH_CREDENTIALS, "InstanceProfileCredentialsProvider", 0),
    (AUTH_CREDENTIALS, "AwsBasicCredentials", 2),
    (AUTH_CREDENTIALS, "AwsSessionCredentials", 3),
    (AUTH_CREDENTIALS, "StaticCredentialsProvider", 1),
];

/// Core class to builder mapping, plus the reverse set of builder names
#[derive(Debug, Clone)]
pub struct BuilderMapping {
    builders: HashMap<String, String>,
    known_builders: HashSet<String>,
}

impl BuilderMapping {
    pub fn builtin() -> Self {
        let mut mapping = Self {
            builders: HashMap::new(),
            known_builders: HashSet::new(),
        };

        for (package, name, shape) in CORE_CLASSES_WITH_BUILDER {
            let class = format!("{package}.{name}");
            let builder = match shape {
                BuilderShape::Nested => format!("{class}.Builder"),
                BuilderShape::SelfBuilt => class.clone(),
            };
            mapping.insert(class, builder);
        }

        mapping
    }

    /// Maps `class` to `builder`, keeping the reverse set in sync
    pub(crate) fn insert(&mut self, class: impl Into<String>, builder: impl Into<String>) {
        let builder = builder.into();
        if let Some(previous) = self.builders.insert(class.into(), builder.clone()) {
            if previous != builder && !self.builders.values().any(|b| *b == previous) {
                self.known_builders.remove(&previous);
            }
        }
        self.known_builders.insert(builder);
    }

    pub fn builder_for(&self, class: &str) -> Option<&str> {
        self.builders.get(class).map(String::as_str)
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.builders.contains_key(class)
    }

    /// Whether `name` is the builder of some mapped core class
    pub fn is_known_builder(&self, name: &str) -> bool {
        self.known_builders.contains(name)
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.builders.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Core class to static factory arity mapping
#[derive(Debug, Clone)]
pub struct StaticFactoryMapping {
    arities: HashMap<String, u8>,
}

impl StaticFactoryMapping {
    pub fn builtin() -> Self {
        Self {
            arities: CORE_CLASSES_WITH_STATIC_FACTORY
                .iter()
                .map(|(package, name, arity)| (format!("{package}.{name}"), *arity))
                .collect(),
        }
    }

    pub(crate) fn insert(&mut self, class: impl Into<String>, arity: u8) {
        self.arities.insert(class.into(), arity);
    }

    pub fn arity(&self, class: &str) -> Option<u8> {
        self.arities.get(class).copied()
    }

    pub fn contains_class(&self, class: &str) -> bool {
        self.arities.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.arities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arities.is_empty()
    }
}
