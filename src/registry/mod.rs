//! Static knowledge about the v1 and v2 SDK surfaces
//!
//! - `skip` - packages and classes excluded from migration
//! - `services` - root packages of maintained v1 services
//! - `core_classes` - v2 core classes with explicit builders or static factories

mod core_classes;
mod services;
mod skip;

pub use core_classes::{BuilderMapping, StaticFactoryMapping};
pub use services::{root_package, ServiceRegistry};
pub use skip::{SkipReason, SkipRegistry};

/// Every v1 type lives under this prefix
pub const V1_ROOT_PREFIX: &str = "com.amazonaws.";

/// v1 service packages live under this prefix
pub const V1_SERVICES_PREFIX: &str = "com.amazonaws.services.";

pub const V1_S3_MODEL_PACKAGE: &str = "com.amazonaws.services.s3.model.";
