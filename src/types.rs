//! Type references handed over by the host type system
//!
//! A reference is either a bare fully-qualified name or a [`JavaType`] that also
//! carries its supertype and interfaces. Shape checks follow the host's
//! assignability rule: a type matches when it, or any of its ancestors, does.
//! Absent references (`None`, empty strings) never match anything.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A fully-qualified type with its direct ancestors
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JavaType {
    fully_qualified_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supertype: Option<Box<JavaType>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    interfaces: Vec<JavaType>,
}

impl JavaType {
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            supertype: None,
            interfaces: Vec::new(),
        }
    }

    pub fn with_supertype(mut self, supertype: JavaType) -> Self {
        self.supertype = Some(Box::new(supertype));
        self
    }

    pub fn with_interface(mut self, interface: JavaType) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn fully_qualified_name(&self) -> &str {
        &self.fully_qualified_name
    }

    pub fn supertype(&self) -> Option<&JavaType> {
        self.supertype.as_deref()
    }

    pub fn interfaces(&self) -> &[JavaType] {
        &self.interfaces
    }
}

impl From<&str> for JavaType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for JavaType {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Anything the classifier can inspect as a type
pub trait TypeRef {
    /// Fully-qualified name, or `None` when the reference is absent
    fn name(&self) -> Option<&str>;

    fn supertype(&self) -> Option<&JavaType> {
        None
    }

    fn interfaces(&self) -> &[JavaType] {
        &[]
    }
}

impl TypeRef for str {
    fn name(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }
}

impl TypeRef for String {
    fn name(&self) -> Option<&str> {
        self.as_str().name()
    }
}

impl TypeRef for JavaType {
    fn name(&self) -> Option<&str> {
        self.fully_qualified_name.as_str().name()
    }

    fn supertype(&self) -> Option<&JavaType> {
        JavaType::supertype(self)
    }

    fn interfaces(&self) -> &[JavaType] {
        JavaType::interfaces(self)
    }
}

impl<T: TypeRef + ?Sized> TypeRef for &T {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }

    fn supertype(&self) -> Option<&JavaType> {
        (**self).supertype()
    }

    fn interfaces(&self) -> &[JavaType] {
        (**self).interfaces()
    }
}

impl<T: TypeRef> TypeRef for Option<T> {
    fn name(&self) -> Option<&str> {
        self.as_ref().and_then(|ty| ty.name())
    }

    fn supertype(&self) -> Option<&JavaType> {
        self.as_ref().and_then(|ty| ty.supertype())
    }

    fn interfaces(&self) -> &[JavaType] {
        match self {
            Some(ty) => ty.interfaces(),
            None => &[],
        }
    }
}

/// Whether the type or any ancestor satisfies `predicate`
///
/// Interfaces are visited before the supertype.
pub fn any_in_hierarchy<T, F>(ty: &T, predicate: F) -> bool
where
    T: TypeRef + ?Sized,
    F: Fn(&str) -> bool + Copy,
{
    let Some(name) = ty.name() else {
        return false;
    };
    if predicate(name) {
        return true;
    }

    ty.interfaces()
        .iter()
        .any(|interface| any_in_hierarchy(interface, predicate))
        || ty
            .supertype()
            .is_some_and(|supertype| any_in_hierarchy(supertype, predicate))
}

/// Whether the type or any ancestor fully matches `pattern`
pub fn is_assignable_from<T: TypeRef + ?Sized>(ty: &T, pattern: &Regex) -> bool {
    any_in_hierarchy(ty, |name| pattern.is_match(name))
}

/// Whether the type is `fully_qualified_name` or one of its subtypes
pub fn is_assignable_to<T: TypeRef + ?Sized>(fully_qualified_name: &str, ty: &T) -> bool {
    any_in_hierarchy(ty, |name| name == fully_qualified_name)
}
