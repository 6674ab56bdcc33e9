//! Root packages of the v1 services maintained by the SDK team
//!
//! Anything under `com.amazonaws.services.` whose root package is missing from
//! this table is a third-party extension of the v1 namespace and is left alone.

use super::V1_SERVICES_PREFIX;
use std::collections::HashSet;
use tracing::debug;

/// Canonical root packages, one per maintained v1 service.
///
/// A few sub-module packages (`s3.model`, `ec2.util`, `dynamodbv2.xspec`) are
/// listed as well. Root extraction never yields them, so they are inert.
pub(crate) const V1_SERVICE_PACKAGES: &[&str] = &[
    "com.amazonaws.services.sagemakeredgemanager",
    "com.amazonaws.services.medialive",
    "com.amazonaws.services.cloudhsm",
    "com.amazonaws.services.comprehendmedical",
    "com.amazonaws.services.cloudsearchv2",
    "com.amazonaws.services.cloudsearchdomain",
    "com.amazonaws.services.billingconductor",
    "com.amazonaws.services.support",
    "com.amazonaws.services.memorydb",
    "com.amazonaws.services.kinesisvideowebrtcstorage",
    "com.amazonaws.services.kinesisvideosignalingchannels",
    "com.amazonaws.services.chime",
    "com.amazonaws.services.inspector2",
    "com.amazonaws.services.taxsettings",
    "com.amazonaws.services.rds",
    "com.amazonaws.services.paymentcryptographydata",
    "com.amazonaws.services.verifiedpermissions",
    "com.amazonaws.services.ecrpublic",
    "com.amazonaws.services.internetmonitor",
    "com.amazonaws.services.ec2.util",
    "com.amazonaws.services.ec2",
    "com.amazonaws.services.tnb",
    "com.amazonaws.services.securitytoken",
    "com.amazonaws.services.translate",
    "com.amazonaws.services.inspector",
    "com.amazonaws.services.datasync",
    "com.amazonaws.services.certificatemanager",
    "com.amazonaws.services.codepipeline",
    "com.amazonaws.services.braket",
    "com.amazonaws.services.appconfigdata",
    "com.amazonaws.services.qldbsession",
    "com.amazonaws.services.gluedatabrew",
    "com.amazonaws.services.workdocs",
    "com.amazonaws.services.amplify",
    "com.amazonaws.services.bedrock",
    "com.amazonaws.services.outposts",
    "com.amazonaws.services.ram",
    "com.amazonaws.services.macie2",
    "com.amazonaws.services.elasticfilesystem",
    "com.amazonaws.services.simpleemailv2",
    "com.amazonaws.services.logs",
    "com.amazonaws.services.servicediscovery",
    "com.amazonaws.services.importexport",
    "com.amazonaws.services.workspacesweb",
    "com.amazonaws.services.appflow",
    "com.amazonaws.services.chimesdkvoice",
    "com.amazonaws.services.lookoutmetrics",
    "com.amazonaws.services.s3.model",
    "com.amazonaws.services.s3",
    "com.amazonaws.services.repostspace",
    "com.amazonaws.services.health",
    "com.amazonaws.services.amplifyuibuilder",
    "com.amazonaws.services.databasemigrationservice",
    "com.amazonaws.services.dax",
    "com.amazonaws.services.clouddirectory",
    "com.amazonaws.services.costexplorer",
    "com.amazonaws.services.elasticloadbalancing",
    "com.amazonaws.services.omics",
    "com.amazonaws.services.timestreaminfluxdb",
    "com.amazonaws.services.workmailmessageflow",
    "com.amazonaws.services.codebuild",
    "com.amazonaws.services.workmail",
    "com.amazonaws.services.ssooidc",
    "com.amazonaws.services.cloudwatch",
    "com.amazonaws.services.servermigration",
    "com.amazonaws.services.stepfunctions",
    "com.amazonaws.services.ssmincidents",
    "com.amazonaws.services.trustedadvisor",
    "com.amazonaws.services.wellarchitected",
    "com.amazonaws.services.elasticsearch",
    "com.amazonaws.services.quicksight",
    "com.amazonaws.services.forecastquery",
    "com.amazonaws.services.bedrockagent",
    "com.amazonaws.services.migrationhub",
    "com.amazonaws.services.imagebuilder",
    "com.amazonaws.services.medicalimaging",
    "com.amazonaws.services.appsync",
    "com.amazonaws.services.paymentcryptography",
    "com.amazonaws.services.budgets",
    "com.amazonaws.services.controlcatalog",
    "com.amazonaws.services.iotfleetwise",
    "com.amazonaws.services.forecast",
    "com.amazonaws.services.chimesdkidentity",
    "com.amazonaws.services.networkfirewall",
    "com.amazonaws.services.computeoptimizer",
    "com.amazonaws.services.cloudformation",
    "com.amazonaws.services.simpleemail",
    "com.amazonaws.services.pinpoint",
    "com.amazonaws.services.mturk",
    "com.amazonaws.services.autoscalingplans",
    "com.amazonaws.services.elastictranscoder",
    "com.amazonaws.services.neptunedata",
    "com.amazonaws.services.qapps",
    "com.amazonaws.services.dlm",
    "com.amazonaws.services.workspaces",
    "com.amazonaws.services.mediaconvert",
    "com.amazonaws.services.connect",
    "com.amazonaws.services.account",
    "com.amazonaws.services.sagemakerfeaturestoreruntime",
    "com.amazonaws.services.apigateway",
    "com.amazonaws.services.mediapackage",
    "com.amazonaws.services.amplifybackend",
    "com.amazonaws.services.proton",
    "com.amazonaws.services.config",
    "com.amazonaws.services.wafv2",
    "com.amazonaws.services.qconnect",
    "com.amazonaws.services.emrserverless",
    "com.amazonaws.services.scheduler",
    "com.amazonaws.services.mailmanager",
    "com.amazonaws.services.mainframemodernization",
    "com.amazonaws.services.dynamodbv2.xspec",
    "com.amazonaws.services.dynamodbv2",
    "com.amazonaws.services.personalize",
    "com.amazonaws.services.managedgrafana",
    "com.amazonaws.services.codegurusecurity",
    "com.amazonaws.services.ivschat",
    "com.amazonaws.services.s3outposts",
    "com.amazonaws.services.cloudwatchrum",
    "com.amazonaws.services.ivs",
    "com.amazonaws.services.directory",
    "com.amazonaws.services.costandusagereport",
    "com.amazonaws.services.connectcampaign",
    "com.amazonaws.services.iotanalytics",
    "com.amazonaws.services.identitystore",
    "com.amazonaws.services.migrationhuborchestrator",
    "com.amazonaws.services.eksauth",
    "com.amazonaws.services.codeconnections",
    "com.amazonaws.services.transfer",
    "com.amazonaws.services.waf",
    "com.amazonaws.services.greengrassv2",
    "com.amazonaws.services.supportapp",
    "com.amazonaws.services.deadline",
    "com.amazonaws.services.cognitosync",
    "com.amazonaws.services.route53recoverycontrolconfig",
    "com.amazonaws.services.connectcontactlens",
    "com.amazonaws.services.appfabric",
    "com.amazonaws.services.cleanroomsml",
    "com.amazonaws.services.licensemanagerusersubscriptions",
    "com.amazonaws.services.appregistry",
    "com.amazonaws.services.eventbridge",
    "com.amazonaws.services.mediaconnect",
    "com.amazonaws.services.costoptimizationhub",
    "com.amazonaws.services.ec2instanceconnect",
    "com.amazonaws.services.migrationhubstrategyrecommendations",
    "com.amazonaws.services.iottwinmaker",
    "com.amazonaws.services.customerprofiles",
    "com.amazonaws.services.route53domains",
    "com.amazonaws.services.route53",
    "com.amazonaws.services.freetier",
    "com.amazonaws.services.iotsecuretunneling",
    "com.amazonaws.services.sagemakergeospatial",
    "com.amazonaws.services.backupgateway",
    "com.amazonaws.services.s3control",
    "com.amazonaws.services.kinesisanalyticsv2",
    "com.amazonaws.services.mediapackagevod",
    "com.amazonaws.services.kinesisvideo",
    "com.amazonaws.services.route53recoverycluster",
    "com.amazonaws.services.docdbelastic",
    "com.amazonaws.services.marketplacemetering",
    "com.amazonaws.services.applicationautoscaling",
    "com.amazonaws.services.mediapackagev2",
    "com.amazonaws.services.ebs",
    "com.amazonaws.services.qbusiness",
    "com.amazonaws.services.simpleworkflow",
    "com.amazonaws.services.cognitoidp",
    "com.amazonaws.services.codestarnotifications",
    "com.amazonaws.services.networkmonitor",
    "com.amazonaws.services.iotfleethub",
    "com.amazonaws.services.iotwireless",
    "com.amazonaws.services.eks",
    "com.amazonaws.services.controltower",
    "com.amazonaws.services.drs",
    "com.amazonaws.services.opensearch",
    "com.amazonaws.services.ssmcontacts",
    "com.amazonaws.services.applicationdiscovery",
    "com.amazonaws.services.private5g",
    "com.amazonaws.services.cloudfront",
    "com.amazonaws.services.location",
    "com.amazonaws.services.timestreamquery",
    "com.amazonaws.services.marketplacedeployment",
    "com.amazonaws.services.route53recoveryreadiness",
    "com.amazonaws.services.chimesdkmediapipelines",
    "com.amazonaws.services.shield",
    "com.amazonaws.services.synthetics",
    "com.amazonaws.services.xray",
    "com.amazonaws.services.elasticloadbalancingv2",
    "com.amazonaws.services.marketplaceagreement",
    "com.amazonaws.services.signer",
    "com.amazonaws.services.directconnect",
    "com.amazonaws.services.codegurureviewer",
    "com.amazonaws.services.securitylake",
    "com.amazonaws.services.sso",
    "com.amazonaws.services.lexmodelbuilding",
    "com.amazonaws.services.mgn",
    "com.amazonaws.services.lightsail",
    "com.amazonaws.services.iotjobsdataplane",
    "com.amazonaws.services.pricing",
    "com.amazonaws.services.vpclattice",
    "com.amazonaws.services.identitymanagement",
    "com.amazonaws.services.datapipeline",
    "com.amazonaws.services.marketplacecommerceanalytics",
    "com.amazonaws.services.globalaccelerator",
    "com.amazonaws.services.mq",
    "com.amazonaws.services.marketplaceentitlement",
    "com.amazonaws.services.resourcegroups",
    "com.amazonaws.services.pipes",
    "com.amazonaws.services.artifact",
    "com.amazonaws.services.finspace",
    "com.amazonaws.services.opensearchserverless",
    "com.amazonaws.services.athena",
    "com.amazonaws.services.ecr",
    "com.amazonaws.services.storagegateway",
    "com.amazonaws.services.panorama",
    "com.amazonaws.services.managedblockchainquery",
    "com.amazonaws.services.bedrockagentruntime",
    "com.amazonaws.services.cognitoidentity",
    "com.amazonaws.services.iotdata",
    "com.amazonaws.services.iot",
    "com.amazonaws.services.sqs",
    "com.amazonaws.services.pinpointsmsvoicev2",
    "com.amazonaws.services.rekognition",
    "com.amazonaws.services.dataexchange",
    "com.amazonaws.services.fsx",
    "com.amazonaws.services.snowdevicemanagement",
    "com.amazonaws.services.finspacedata",
    "com.amazonaws.services.inspectorscan",
    "com.amazonaws.services.recyclebin",
    "com.amazonaws.services.detective",
    "com.amazonaws.services.mwaa",
    "com.amazonaws.services.applicationcostprofiler",
    "com.amazonaws.services.iotevents",
    "com.amazonaws.services.ivsrealtime",
    "com.amazonaws.services.ecs",
    "com.amazonaws.services.bedrockruntime",
    "com.amazonaws.services.kinesis",
    "com.amazonaws.services.kinesisanalytics",
    "com.amazonaws.services.kinesisfirehose",
    "com.amazonaws.services.cloudhsmv2",
    "com.amazonaws.services.glue",
    "com.amazonaws.services.codedeploy",
    "com.amazonaws.services.simpledb.util",
    "com.amazonaws.services.simpledb",
    "com.amazonaws.services.launchwizard",
    "com.amazonaws.services.personalizeevents",
    "com.amazonaws.services.devopsguru",
    "com.amazonaws.services.opsworks",
    "com.amazonaws.services.kafka",
    "com.amazonaws.services.voiceid",
    "com.amazonaws.services.cloudcontrolapi",
    "com.amazonaws.services.sagemakerruntime",
    "com.amazonaws.services.textract",
    "com.amazonaws.services.batch",
    "com.amazonaws.services.appconfig",
    "com.amazonaws.services.cloudwatchevents",
    "com.amazonaws.services.codeartifact",
    "com.amazonaws.services.autoscaling",
    "com.amazonaws.services.resiliencehub",
    "com.amazonaws.services.securityhub",
    "com.amazonaws.services.backup",
    "com.amazonaws.services.iotdeviceadvisor",
    "com.amazonaws.services.mediastore",
    "com.amazonaws.services.serverlessapplicationrepository",
    "com.amazonaws.services.fms",
    "com.amazonaws.services.timestreamwrite",
    "com.amazonaws.services.ioteventsdata",
    "com.amazonaws.services.codeguruprofiler",
    "com.amazonaws.services.lexruntimev2",
    "com.amazonaws.services.elasticache",
    "com.amazonaws.services.kendra",
    "com.amazonaws.services.snowball",
    "com.amazonaws.services.iotthingsgraph",
    "com.amazonaws.services.pcaconnectorscep",
    "com.amazonaws.services.iotsitewise",
    "com.amazonaws.services.lexmodelsv2",
    "com.amazonaws.services.redshiftserverless",
    "com.amazonaws.services.migrationhubconfig",
    "com.amazonaws.services.pi",
    "com.amazonaws.services.kendraranking",
    "com.amazonaws.services.osis",
    "com.amazonaws.services.bcmdataexports",
    "com.amazonaws.services.accessanalyzer",
    "com.amazonaws.services.appintegrations",
    "com.amazonaws.services.b2bi",
    "com.amazonaws.services.keyspaces",
    "com.amazonaws.services.elasticinference",
    "com.amazonaws.services.redshift",
    "com.amazonaws.services.cloudtrail",
    "com.amazonaws.services.connectparticipant",
    "com.amazonaws.services.gamelift",
    "com.amazonaws.services.acmpca",
    "com.amazonaws.services.simspaceweaver",
    "com.amazonaws.services.lookoutequipment",
    "com.amazonaws.services.pinpointsmsvoice",
    "com.amazonaws.services.codestarconnections",
    "com.amazonaws.services.personalizeruntime",
    "com.amazonaws.services.lambda",
    "com.amazonaws.services.emrcontainers",
    "com.amazonaws.services.sns.util",
    "com.amazonaws.services.sns",
    "com.amazonaws.services.chimesdkmeetings",
    "com.amazonaws.services.entityresolution",
    "com.amazonaws.services.networkmanager",
    "com.amazonaws.services.datazone",
    "com.amazonaws.services.savingsplans",
    "com.amazonaws.services.resourcegroupstaggingapi",
    "com.amazonaws.services.organizations",
    "com.amazonaws.services.ssoadmin",
    "com.amazonaws.services.lakeformation",
    "com.amazonaws.services.kafkaconnect",
    "com.amazonaws.services.glacier",
    "com.amazonaws.services.docdb",
    "com.amazonaws.services.appstream",
    "com.amazonaws.services.applicationsignals",
    "com.amazonaws.services.cloudwatchevidently",
    "com.amazonaws.services.healthlake",
    "com.amazonaws.services.sagemaker",
    "com.amazonaws.services.codecommit",
    "com.amazonaws.services.frauddetector",
    "com.amazonaws.services.apptest",
    "com.amazonaws.services.transcribe",
    "com.amazonaws.services.migrationhubrefactorspaces",
    "com.amazonaws.services.apprunner",
    "com.amazonaws.services.machinelearning",
    "com.amazonaws.services.servicequotas",
    "com.amazonaws.services.marketplacecatalog",
    "com.amazonaws.services.route53resolver",
    "com.amazonaws.services.nimblestudio",
    "com.amazonaws.services.rdsdata",
    "com.amazonaws.services.fis",
    "com.amazonaws.services.chimesdkmessaging",
    "com.amazonaws.services.lookoutforvision",
    "com.amazonaws.services.chatbot",
    "com.amazonaws.services.resourceexplorer2",
    "com.amazonaws.services.cloudtraildata",
    "com.amazonaws.services.devicefarm",
    "com.amazonaws.services.lexruntime",
    "com.amazonaws.services.arczonalshift",
    "com.amazonaws.services.ssmsap",
    "com.amazonaws.services.comprehend",
    "com.amazonaws.services.connectwisdom",
    "com.amazonaws.services.licensemanagerlinuxsubscriptions",
    "com.amazonaws.services.polly",
    "com.amazonaws.services.appmesh",
    "com.amazonaws.services.schemas",
    "com.amazonaws.services.managedblockchain",
    "com.amazonaws.services.guardduty",
    "com.amazonaws.services.cloud9",
    "com.amazonaws.services.greengrass",
    "com.amazonaws.services.simplesystemsmanagement",
    "com.amazonaws.services.connectcases",
    "com.amazonaws.services.licensemanager",
    "com.amazonaws.services.mediastoredata",
    "com.amazonaws.services.servicecatalog",
    "com.amazonaws.services.oam",
    "com.amazonaws.services.secretsmanager",
    "com.amazonaws.services.qldb",
    "com.amazonaws.services.redshiftdataapi",
    "com.amazonaws.services.opsworkscm",
    "com.amazonaws.services.pinpointemail",
    "com.amazonaws.services.apigatewayv2",
    "com.amazonaws.services.cleanrooms",
    "com.amazonaws.services.elasticmapreduce",
    "com.amazonaws.services.pcaconnectorad",
    "com.amazonaws.services.elasticbeanstalk",
    "com.amazonaws.services.worklink",
    "com.amazonaws.services.supplychain",
    "com.amazonaws.services.sagemakermetrics",
    "com.amazonaws.services.groundstation",
    "com.amazonaws.services.prometheus",
    "com.amazonaws.services.apigatewaymanagementapi",
    "com.amazonaws.services.neptune",
    "com.amazonaws.services.workspacesthinclient",
    "com.amazonaws.services.codestar",
    "com.amazonaws.services.route53profiles",
    "com.amazonaws.services.augmentedairuntime",
    "com.amazonaws.services.auditmanager",
    "com.amazonaws.services.iamrolesanywhere",
    "com.amazonaws.services.mediatailor",
    "com.amazonaws.services.kms",
    "com.amazonaws.services.robomaker",
    "com.amazonaws.services.applicationinsights",
];

/// Registry of v1 service root packages
#[derive(Debug, Clone)]
pub struct ServiceRegistry {
    packages: HashSet<String>,
}

impl ServiceRegistry {
    pub fn builtin() -> Self {
        Self {
            packages: V1_SERVICE_PACKAGES.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub(crate) fn insert(&mut self, package: impl Into<String>) {
        self.packages.insert(package.into());
    }

    /// Whether `package` is a registered root package
    pub fn contains(&self, package: &str) -> bool {
        self.packages.contains(package)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    /// True when `fully_qualified_name` lives under `com.amazonaws.services.`
    /// but its root package is not a maintained service.
    ///
    /// Names outside the services namespace are never extensions of it.
    pub fn is_third_party_extension(&self, fully_qualified_name: &str) -> bool {
        let Some(root) = root_package(fully_qualified_name) else {
            return false;
        };

        let third_party = !self.contains(root);
        if third_party {
            debug!(root_package = root, "root package is not a registered v1 service");
        }
        third_party
    }
}

/// Root package of a name under `com.amazonaws.services.`
///
/// The root stops at the first segment boundary after the services prefix:
/// `com.amazonaws.services.s3.model.Bucket` has root `com.amazonaws.services.s3`.
/// A name with no boundary after the prefix is its own root.
pub fn root_package(fully_qualified_name: &str) -> Option<&str> {
    let rest = fully_qualified_name.strip_prefix(V1_SERVICES_PREFIX)?;
    match rest.find('.') {
        Some(module_len) => Some(&fully_qualified_name[..V1_SERVICES_PREFIX.len() + module_len]),
        None => Some(fully_qualified_name),
    }
}
