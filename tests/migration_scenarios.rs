// End-to-end classification scenarios against the built-in knowledge base

use anyhow::Result;
use sdk_migration_types::{patterns, type_kinds};
use sdk_migration_types::{Classifier, ClassifierError, JavaType, KnowledgeBase, TypeCategory};

const STATIC_PROVIDER: &str = "software.amazon.awssdk.auth.credentials.StaticCredentialsProvider";

#[test]
fn every_skipped_class_is_unsupported() {
    let classifier = Classifier::global();
    let skip = KnowledgeBase::global().skip_registry();

    let mut checked = 0;
    for class in skip.skipped_classes() {
        assert!(
            !classifier.is_supported_v1_type(class),
            "{class} is skip-listed but reported as supported"
        );
        checked += 1;
    }
    assert!(checked > 50, "expected the full skip table, saw {checked} entries");
}

#[test]
fn everything_under_a_skipped_package_is_unsupported() {
    let classifier = Classifier::global();
    let skip = KnowledgeBase::global().skip_registry();

    for package in skip.skipped_packages() {
        for class in ["AmazonWidgetClient", "model.Widget", "Widget"] {
            let name = format!("{package}.{class}");
            assert!(
                !classifier.is_supported_v1_type(name.as_str()),
                "{name} is under a skipped package but reported as supported"
            );
        }
    }
}

#[test]
fn unregistered_service_roots_are_third_party() {
    let classifier = Classifier::global();

    for name in [
        "com.amazonaws.services.unknownservice.UnknownClient",
        "com.amazonaws.services.acme.model.Widget",
        "com.amazonaws.services.mycompanyinternal.InternalClientBuilder",
    ] {
        assert!(classifier.is_third_party_extension(name), "{name}");
        assert!(!classifier.is_supported_v1_type(name), "{name}");
    }
}

#[test]
fn registered_service_roots_are_supported_unless_skipped() {
    let classifier = Classifier::global();
    let kb = KnowledgeBase::global();

    for package in kb.service_registry().packages() {
        let name = format!("{package}.AmazonWidgetClient");
        let expected = !classifier.should_skip(name.as_str());
        assert_eq!(
            classifier.is_supported_v1_type(name.as_str()),
            expected,
            "unexpected support decision for {name}"
        );
    }

    assert!(classifier.is_supported_v1_type("com.amazonaws.services.dynamodbv2.AmazonDynamoDB"));
    assert!(classifier.is_supported_v1_type("com.amazonaws.services.sns.model.PublishRequest"));
}

#[test]
fn transfer_package_is_skipped_despite_client_shape() {
    let classifier = Classifier::global();
    let name = "com.amazonaws.services.s3.transfer.Upload";

    assert!(!classifier.is_supported_v1_type(name));
    assert!(classifier.should_skip(name));
    // Nothing about the registry says it is third-party
    assert!(!classifier.is_third_party_extension(name));
}

#[test]
fn model_class_builder_is_nested_builder() -> Result<()> {
    let classifier = Classifier::global();

    for model in [
        "software.amazon.awssdk.services.s3.model.PutObjectRequest",
        "software.amazon.awssdk.services.dynamodb.model.AttributeValue",
        "software.amazon.awssdk.services.sqs.model.SendMessageRequest",
    ] {
        let builder = classifier.derive_builder_identifier(model)?;
        assert_eq!(builder, format!("{model}.Builder"));
        assert!(patterns::is_v2_model_builder(builder.as_str()));
        // A model builder is not a client builder
        assert!(classifier.derive_client_from_builder(builder.as_str()).is_err());
    }
    Ok(())
}

#[test]
fn client_builder_round_trip() -> Result<()> {
    let classifier = Classifier::global();

    for builder in [
        "software.amazon.awssdk.services.s3.S3ClientBuilder",
        "software.amazon.awssdk.services.s3.S3AsyncClientBuilder",
        "software.amazon.awssdk.services.dynamodb.DynamoDbClientBuilder",
    ] {
        let client = classifier.derive_client_from_builder(builder)?;
        assert!(!client.contains("Builder"));
        assert_eq!(format!("{client}Builder"), builder);
        assert_eq!(classifier.derive_builder_identifier(client.as_str())?, builder);
    }
    Ok(())
}

#[test]
fn ineligible_names_fail_builder_derivation() {
    let classifier = Classifier::global();

    for name in [
        "java.lang.String",
        "com.amazonaws.services.s3.AmazonS3Client",
        "software.amazon.awssdk.core.SdkBytes",
        "",
    ] {
        assert!(!classifier.is_eligible_for_builder_conversion(name));
        match classifier.derive_builder_identifier(name) {
            Err(ClassifierError::InvalidArgument { identifier, .. }) => {
                assert_eq!(identifier, name)
            }
            other => panic!("expected InvalidArgument for {name:?}, got {other:?}"),
        }
    }
}

#[test]
fn static_credentials_provider_is_a_mapped_core_class() -> Result<()> {
    let classifier = Classifier::global();

    assert!(classifier.is_eligible_for_static_factory(STATIC_PROVIDER));
    assert_eq!(classifier.static_factory_arity(STATIC_PROVIDER), Some(1));

    assert!(classifier.is_eligible_for_builder_conversion(STATIC_PROVIDER));
    assert!(!patterns::is_v2_model_class(STATIC_PROVIDER));
    assert!(!patterns::is_v2_client_class(STATIC_PROVIDER));
    assert!(classifier.is_v2_core_class_with_builder(STATIC_PROVIDER));

    let builder = classifier.derive_builder_identifier(STATIC_PROVIDER)?;
    assert!(classifier.is_v2_core_class_builder(builder.as_str()));
    Ok(())
}

#[test]
fn optional_inputs_classify_as_false() {
    let classifier = Classifier::global();
    let absent: Option<&str> = None;
    let present = Some("software.amazon.awssdk.services.s3.S3Client");

    assert!(!classifier.is_eligible_for_builder_conversion(&absent));
    assert!(!classifier.is_eligible_for_static_factory(&absent));
    assert!(!classifier.is_supported_v1_type(&absent));
    assert!(classifier.is_eligible_for_builder_conversion(&present));
}

#[test]
fn request_body_type_kinds() {
    let upload_stream = JavaType::new("java.io.FileInputStream")
        .with_supertype(JavaType::new("java.io.InputStream"));

    assert!(type_kinds::is_input_stream_type(&upload_stream));
    assert!(type_kinds::is_string_type("java.lang.String"));
    assert!(type_kinds::is_file_type("java.io.File"));
    assert!(type_kinds::is_uri_type("java.net.URI"));
    assert!(!type_kinds::is_file_type(&upload_stream));
}

#[test]
fn concurrent_queries_agree() {
    let names = [
        "com.amazonaws.services.s3.AmazonS3Client",
        "com.amazonaws.services.unknownservice.UnknownClient",
        "software.amazon.awssdk.services.s3.model.PutObjectRequest",
        STATIC_PROVIDER,
    ];
    let expected: Vec<_> = names
        .iter()
        .map(|name| Classifier::global().classify(*name))
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let classifier = Classifier::global();
                for (name, want) in names.iter().zip(&expected) {
                    assert_eq!(&classifier.classify(*name), want);
                }
            });
        }
    });
}

#[test]
fn batch_classification_matches_single_queries() {
    let classifier = Classifier::global();
    let names: Vec<String> = KnowledgeBase::global()
        .service_registry()
        .packages()
        .take(40)
        .map(|package| format!("{package}.model.DescribeThingRequest"))
        .collect();

    let reports = classifier.classify_batch(&names);
    assert_eq!(reports.len(), names.len());
    for (report, name) in reports.iter().zip(&names) {
        assert_eq!(report, &classifier.classify(name.as_str()));
    }
}

#[test]
fn categories_for_a_typical_migration() {
    let classifier = Classifier::global();

    let cases = [
        ("com.amazonaws.services.s3.AmazonS3ClientBuilder", TypeCategory::V1ClientBuilder),
        ("com.amazonaws.services.s3.model.PutObjectRequest", TypeCategory::V1ModelClass),
        ("software.amazon.awssdk.services.s3.S3Client", TypeCategory::V2Client),
        ("software.amazon.awssdk.services.s3.S3ClientBuilder", TypeCategory::V2ClientBuilder),
        (
            "software.amazon.awssdk.services.s3.model.PutObjectRequest.Builder",
            TypeCategory::V2ModelBuilder,
        ),
        (
            "software.amazon.awssdk.core.client.config.ClientOverrideConfiguration",
            TypeCategory::V2CoreClassWithBuilder,
        ),
    ];

    for (name, category) in cases {
        assert_eq!(classifier.categorize(name), category, "{name}");
    }
}
