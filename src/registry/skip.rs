//! Packages and classes that are never migrated
//!
//! Entries here either have no v2 equivalent, belong to a separate library that
//! merely shares the `com.amazonaws` namespace, or are handled by a dedicated
//! transformation elsewhere.

use super::{V1_ROOT_PREFIX, V1_S3_MODEL_PACKAGE};
use std::collections::HashSet;

/// Package prefixes skipped wholesale
pub(crate) const SKIPPED_PACKAGES: &[&str] = &[
    "com.amazonaws.services.s3.transfer",
    "com.amazonaws.services.dynamodbv2.datamodeling",
    // parity features
    "com.amazonaws.services.lambda.invoke",
    "com.amazonaws.services.sns.message",
    "com.amazonaws.services.dynamodbv2.xspec",
    "com.amazonaws.services.dynamodbv2.document.spec",
    "com.amazonaws.services.stepfunctions.builder",
    "com.amazonaws.services.elasticmapreduce.util",
    "com.amazonaws.services.elasticmapreduce.spi",
    // aws-lambda-java-core
    "com.amazonaws.services.lambda.runtime",
    // amazon-kinesis-client
    "com.amazonaws.services.kinesis.clientlibrary",
    "com.amazonaws.services.kinesis.leases",
    "com.amazonaws.services.kinesis.metrics",
    "com.amazonaws.services.kinesis.multilang",
    // amazon-kinesis-producer
    "com.amazonaws.services.kinesis.producer",
];

/// Fully-qualified classes skipped individually
pub(crate) const SKIPPED_CLASSES: &[&str] = &[
    "com.amazonaws.services.simpleemail.AWSJavaMailTransport",
    "com.amazonaws.services.kinesisvideo.AmazonKinesisVideoPutMedia",
];

/// Simple names under `com.amazonaws.services.s3.model.` skipped individually
pub(crate) const SKIPPED_S3_MODEL_CLASSES: &[&str] = &[
    "PresignedUrlDownloadRequest",
    "PresignedUrlDownloadResult",
    "PresignedUrlDownloadConfig",
    "PresignedUrlUploadRequest",
    "PresignedUrlUploadResult",
    // POJOs with no v2 equivalent
    "SSEAwsKeyManagementParams",
    "SSECustomerKey",
    "BucketLoggingConfiguration",
    "Filter",
    "GenericBucketRequest",
    "ListBucketsPaginatedRequest",
    "ListBucketsPaginatedResult",
    "ListNextBatchOfObjectsRequest",
    "ListNextBatchOfVersionsRequest",
    "MultiFactorAuthentication",
    "ResponseHeaderOverrides",
    "S3AccelerateUnsupported",
    "S3DataSource",
    "S3ObjectId",
    "S3ObjectIdBuilder",
    "TagSet",
    // enums with no v2 equivalent
    "GroupGrantee",
    "Region",
    // split into BucketCannedACL and ObjectCannedACL in v2
    "CannedAccessControlList",
    // no specific exceptions in v2
    "IllegalBucketNameException",
    "MultiObjectDeleteException",
    "MultiObjectDeleteSlowdownException",
    "SelectObjectContentEventException",
    // client-side encryption
    "CryptoConfiguration",
    "CryptoConfigurationV2",
    "CryptoKeyWrapAlgorithm",
    "CryptoMode",
    "CryptoRangeGetMode",
    "CryptoStorageMode",
    "EncryptedGetObjectRequest",
    "EncryptedInitiateMultipartUploadRequest",
    "EncryptedPutObjectRequest",
    "AmazonS3EncryptionClient",
    "PutInstructionFileRequest",
    "InstructionFileId",
    "KMSEncryptionMaterials",
    "EncryptionMaterials",
    "KMSEncryptionMaterialsProvider",
    "StaticEncryptionMaterialsProvider",
    "EncryptionMaterialsProvider",
    "MaterialsDescriptionProvider",
    "UploadObjectRequest",
    "SimpleMaterialProvider",
    "ExtraMaterialsDescription",
];

/// Why a name was excluded from migration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not under `com.amazonaws.` at all
    OutsideV1Namespace,
    /// Under a skipped package prefix
    SkippedPackage,
    /// Listed as a skipped class
    SkippedClass,
}

/// Skip rules applied before any eligibility decision
#[derive(Debug, Clone)]
pub struct SkipRegistry {
    // Kept in insertion order so the first matching prefix is deterministic
    packages: Vec<String>,
    classes: HashSet<String>,
}

impl SkipRegistry {
    pub fn builtin() -> Self {
        let classes = SKIPPED_CLASSES
            .iter()
            .map(|c| c.to_string())
            .chain(
                SKIPPED_S3_MODEL_CLASSES
                    .iter()
                    .map(|c| format!("{V1_S3_MODEL_PACKAGE}{c}")),
            )
            .collect();

        Self {
            packages: SKIPPED_PACKAGES.iter().map(|p| p.to_string()).collect(),
            classes,
        }
    }

    pub(crate) fn insert_package(&mut self, package: impl Into<String>) {
        let package = package.into();
        if !self.packages.contains(&package) {
            self.packages.push(package);
        }
    }

    pub(crate) fn insert_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    /// First rule that excludes `fully_qualified_name`, if any
    pub fn skip_reason(&self, fully_qualified_name: &str) -> Option<SkipReason> {
        if !fully_qualified_name.starts_with(V1_ROOT_PREFIX) {
            return Some(SkipReason::OutsideV1Namespace);
        }

        if self
            .packages
            .iter()
            .any(|package| fully_qualified_name.starts_with(package.as_str()))
        {
            return Some(SkipReason::SkippedPackage);
        }

        if self.classes.contains(fully_qualified_name) {
            return Some(SkipReason::SkippedClass);
        }

        None
    }

    pub fn should_skip(&self, fully_qualified_name: &str) -> bool {
        self.skip_reason(fully_qualified_name).is_some()
    }

    pub fn skipped_packages(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    pub fn skipped_classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}
