//! Structural patterns of the v1 and v2 SDK surfaces
//!
//! Every predicate is purely syntactic: it checks the dotted shape of a name
//! (and of its ancestors, when the caller supplies a [`JavaType`](crate::JavaType)),
//! never whether the type really exists. All patterns are anchored at both ends.
//!
//! The v2 model-class pattern is deliberately broader than the model-builder
//! pattern: `...model.PutObjectRequest.Builder` is both. Callers that need to
//! tell them apart must ask [`is_v2_model_builder`] first.

use crate::types::{is_assignable_from, TypeRef};
use regex::Regex;
use std::sync::LazyLock;

// Static regexes compiled once for performance
static V1_MODEL_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^com\.amazonaws\.services\.[a-zA-Z0-9]+\.model\.[a-zA-Z0-9]+$").unwrap()
});
static V1_CLIENT_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^com\.amazonaws\.services\.[a-zA-Z0-9]+\.[a-zA-Z0-9]+$").unwrap()
});
static V1_CLIENT_BUILDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^com\.amazonaws\.services\.[a-zA-Z0-9]+\.[a-zA-Z0-9]+Builder$").unwrap()
});
static V1_KINESIS_VIDEO_PUT_MEDIA_BUILDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^com\.amazonaws\.services\.kinesisvideo\.AmazonKinesisVideoPutMediaClientBuilder$")
        .unwrap()
});

static V2_MODEL_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^software\.amazon\.awssdk\.services\.[a-zA-Z0-9]+\.model\.[a-zA-Z0-9]+(\.[a-zA-Z0-9]+)*$",
    )
    .unwrap()
});
static V2_MODEL_BUILDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^software\.amazon\.awssdk\.services\.[a-zA-Z0-9]+\.model\.[a-zA-Z0-9]+\.Builder$")
        .unwrap()
});
static V2_CLIENT_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^software\.amazon\.awssdk\.services\.[a-zA-Z0-9]+\.[a-zA-Z0-9]+$").unwrap()
});
static V2_ASYNC_CLIENT_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^software\.amazon\.awssdk\.services\.[a-zA-Z0-9]+\.[a-zA-Z0-9]+AsyncClient$")
        .unwrap()
});
static V2_CLIENT_BUILDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^software\.amazon\.awssdk\.services\.[a-zA-Z0-9]+\.[a-zA-Z0-9]+Builder$").unwrap()
});
static V2_TRANSFER_MANAGER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^software\.amazon\.awssdk\.transfer\.s3\.S3TransferManager$").unwrap()
});

/// `com.amazonaws.services.<svc>.model.<Name>`
pub fn is_v1_model_class<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V1_MODEL_CLASS_RE)
}

/// `com.amazonaws.services.<svc>.<Name>` - clients and other service-level classes
pub fn is_v1_client_class<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V1_CLIENT_CLASS_RE)
}

/// `com.amazonaws.services.<svc>.<Name>Builder`
pub fn is_v1_client_builder_class<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V1_CLIENT_BUILDER_RE)
}

/// False only for the Kinesis Video PutMedia client builder, which has no v2 counterpart
pub fn is_supported_v1_client_class<T: TypeRef + ?Sized>(ty: &T) -> bool {
    !is_assignable_from(ty, &V1_KINESIS_VIDEO_PUT_MEDIA_BUILDER_RE)
}

/// `software.amazon.awssdk.services.<svc>.model.<Name>`, nested types included
pub fn is_v2_model_class<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V2_MODEL_CLASS_RE)
}

/// `software.amazon.awssdk.services.<svc>.model.<Name>.Builder`
pub fn is_v2_model_builder<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V2_MODEL_BUILDER_RE)
}

/// `software.amazon.awssdk.services.<svc>.<Name>`
pub fn is_v2_client_class<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V2_CLIENT_CLASS_RE)
}

pub fn is_v2_async_client_class<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V2_ASYNC_CLIENT_CLASS_RE)
}

pub fn is_v2_client_builder<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V2_CLIENT_BUILDER_RE)
}

pub fn is_v2_transfer_manager<T: TypeRef + ?Sized>(ty: &T) -> bool {
    is_assignable_from(ty, &V2_TRANSFER_MANAGER_RE)
}
