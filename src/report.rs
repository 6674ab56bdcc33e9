//! Classification report - every decision for one name in a single record
//!
//! This is what the rewrite layer consumes when it wants the whole picture at
//! once instead of calling the individual predicates.

use crate::classifier::Classifier;
use crate::patterns;
use crate::types::TypeRef;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Structural category of a name on either SDK surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    V2TransferManager,
    V2ModelBuilder,
    V2ModelClass,
    V2ClientBuilder,
    V2AsyncClient,
    V2Client,
    V2CoreClassWithBuilder,
    V2CoreClassWithStaticFactory,
    V2CoreClassBuilder,
    V1ClientBuilder,
    V1ModelClass,
    V1Client,
    Unclassified,
}

impl TypeCategory {
    pub fn is_v1(self) -> bool {
        matches!(self, Self::V1ClientBuilder | Self::V1ModelClass | Self::V1Client)
    }

    pub fn is_v2(self) -> bool {
        !self.is_v1() && self != Self::Unclassified
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub identifier: String,
    pub category: TypeCategory,
    /// Excluded by a skip rule (or outside `com.amazonaws.` entirely)
    pub skipped: bool,
    pub third_party_extension: bool,
    pub supported_v1: bool,
    /// Builder name, when builder conversion is eligible
    pub builder: Option<String>,
    /// Client name, when the name is a client builder or the transfer manager
    pub client: Option<String>,
    pub static_factory_arity: Option<u8>,
}

impl Classification {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<'kb> Classifier<'kb> {
    /// Structural category, testing narrower shapes before the broader ones
    /// they overlap with
    pub fn categorize<T: TypeRef + ?Sized>(&self, ty: &T) -> TypeCategory {
        let Some(name) = ty.name() else {
            return TypeCategory::Unclassified;
        };

        if patterns::is_v2_transfer_manager(ty) {
            return TypeCategory::V2TransferManager;
        }
        if patterns::is_v2_model_builder(ty) {
            return TypeCategory::V2ModelBuilder;
        }
        if patterns::is_v2_model_class(ty) {
            return TypeCategory::V2ModelClass;
        }
        if patterns::is_v2_client_builder(ty) {
            return TypeCategory::V2ClientBuilder;
        }
        if patterns::is_v2_async_client_class(ty) {
            return TypeCategory::V2AsyncClient;
        }
        if patterns::is_v2_client_class(ty) {
            return TypeCategory::V2Client;
        }

        let kb = self.knowledge_base();
        if kb.builders.contains_class(name) {
            return TypeCategory::V2CoreClassWithBuilder;
        }
        if kb.factories.contains_class(name) {
            return TypeCategory::V2CoreClassWithStaticFactory;
        }
        if kb.builders.is_known_builder(name) {
            return TypeCategory::V2CoreClassBuilder;
        }

        if patterns::is_v1_client_builder_class(ty) {
            return TypeCategory::V1ClientBuilder;
        }
        if patterns::is_v1_model_class(ty) {
            return TypeCategory::V1ModelClass;
        }
        if patterns::is_v1_client_class(ty) {
            return TypeCategory::V1Client;
        }

        TypeCategory::Unclassified
    }

    /// Every decision the classifier can make about one name
    pub fn classify<T: TypeRef + ?Sized>(&self, ty: &T) -> Classification {
        Classification {
            identifier: ty.name().unwrap_or_default().to_string(),
            category: self.categorize(ty),
            skipped: self.should_skip(ty),
            third_party_extension: self.is_third_party_extension(ty),
            supported_v1: self.is_supported_v1_type(ty),
            builder: self.derive_builder_identifier(ty).ok(),
            client: self.derive_client_from_builder(ty).ok(),
            static_factory_arity: self.static_factory_arity(ty),
        }
    }

    /// Classify many names in parallel; output order follows input order
    pub fn classify_batch<S>(&self, identifiers: &[S]) -> Vec<Classification>
    where
        S: AsRef<str> + Sync,
    {
        identifiers
            .par_iter()
            .map(|identifier| self.classify(identifier.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str) -> TypeCategory {
        Classifier::global().categorize(name)
    }

    #[test]
    fn test_v2_categories() {
        assert_eq!(
            category("software.amazon.awssdk.transfer.s3.S3TransferManager"),
            TypeCategory::V2TransferManager
        );
        assert_eq!(
            category("software.amazon.awssdk.services.s3.model.PutObjectRequest.Builder"),
            TypeCategory::V2ModelBuilder
        );
        assert_eq!(
            category("software.amazon.awssdk.services.s3.model.PutObjectRequest"),
            TypeCategory::V2ModelClass
        );
        assert_eq!(
            category("software.amazon.awssdk.services.s3.S3ClientBuilder"),
            TypeCategory::V2ClientBuilder
        );
        assert_eq!(
            category("software.amazon.awssdk.services.s3.S3AsyncClient"),
            TypeCategory::V2AsyncClient
        );
        assert_eq!(
            category("software.amazon.awssdk.services.s3.S3Client"),
            TypeCategory::V2Client
        );
    }

    #[test]
    fn test_core_class_categories() {
        assert_eq!(
            category("software.amazon.awssdk.auth.credentials.AwsBasicCredentials"),
            TypeCategory::V2CoreClassWithBuilder
        );
        assert_eq!(
            category("software.amazon.awssdk.auth.credentials.EnvironmentVariableCredentialsProvider"),
            TypeCategory::V2CoreClassWithStaticFactory
        );
        assert_eq!(
            category("software.amazon.awssdk.auth.credentials.AwsBasicCredentials.Builder"),
            TypeCategory::V2CoreClassBuilder
        );
    }

    #[test]
    fn test_v1_categories() {
        assert_eq!(
            category("com.amazonaws.services.s3.AmazonS3ClientBuilder"),
            TypeCategory::V1ClientBuilder
        );
        assert_eq!(
            category("com.amazonaws.services.s3.model.Bucket"),
            TypeCategory::V1ModelClass
        );
        assert_eq!(
            category("com.amazonaws.services.s3.AmazonS3"),
            TypeCategory::V1Client
        );
        assert!(TypeCategory::V1Client.is_v1());
        assert!(!TypeCategory::V1Client.is_v2());
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(category("java.lang.String"), TypeCategory::Unclassified);
        assert_eq!(category(""), TypeCategory::Unclassified);
        assert!(!TypeCategory::Unclassified.is_v1());
        assert!(!TypeCategory::Unclassified.is_v2());
    }

    #[test]
    fn test_classify_v1_client() {
        let report = Classifier::global().classify("com.amazonaws.services.sqs.AmazonSQSClient");
        assert_eq!(report.category, TypeCategory::V1Client);
        assert!(report.supported_v1);
        assert!(!report.skipped);
        assert!(!report.third_party_extension);
        assert_eq!(report.builder, None);
        assert_eq!(report.client, None);
    }

    #[test]
    fn test_classify_core_class() {
        let name = "software.amazon.awssdk.auth.credentials.AwsSessionCredentials";
        let report = Classifier::global().classify(name);
        assert_eq!(report.category, TypeCategory::V2CoreClassWithBuilder);
        assert!(report.skipped, "v2 names are outside the v1 namespace");
        assert!(!report.supported_v1);
        assert_eq!(report.builder.as_deref(), Some(format!("{name}.Builder").as_str()));
        assert_eq!(report.static_factory_arity, Some(3));
    }

    #[test]
    fn test_classify_client_builder() {
        let report =
            Classifier::global().classify("software.amazon.awssdk.services.sqs.SqsClientBuilder");
        assert_eq!(report.category, TypeCategory::V2ClientBuilder);
        assert_eq!(
            report.client.as_deref(),
            Some("software.amazon.awssdk.services.sqs.SqsClient")
        );
        // Client builders also match the client-class shape
        assert_eq!(
            report.builder.as_deref(),
            Some("software.amazon.awssdk.services.sqs.SqsClientBuilderBuilder")
        );
    }

    #[test]
    fn test_classify_batch_preserves_order() {
        let names = vec![
            "com.amazonaws.services.s3.AmazonS3".to_string(),
            "software.amazon.awssdk.services.s3.S3Client".to_string(),
            "java.io.File".to_string(),
            "com.amazonaws.services.unknownservice.UnknownClient".to_string(),
        ];
        let reports = Classifier::global().classify_batch(&names);

        assert_eq!(reports.len(), names.len());
        for (report, name) in reports.iter().zip(&names) {
            assert_eq!(&report.identifier, name);
        }
        assert!(reports[3].third_party_extension);
        assert!(!reports[3].supported_v1);
    }

    #[test]
    fn test_report_json() {
        let report = Classifier::global().classify("software.amazon.awssdk.services.s3.S3Client");
        let json = report.to_json().unwrap();
        assert!(json.contains(r#""category":"v2_client""#));
        assert!(json.contains(r#""builder":"software.amazon.awssdk.services.s3.S3ClientBuilder""#));

        let back: Classification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
