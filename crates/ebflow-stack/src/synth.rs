//! Top-level synthesis: one configuration in, one resource graph out.

use crate::dns;
use crate::graph::{Resource, ResourceGraph};
use crate::options::{OptionDefaults, build_option_settings};
use crate::pipeline::{BUILD_PROJECT_ID, ProjectKind, assemble_pipeline};
use crate::source::SourceAction;
use crate::{Result, buildspec};
use ebflow_core::StackConfig;
use serde_json::json;
use tracing::{debug, info};

/// Platform runtime the environment runs on.
pub const SOLUTION_STACK: &str = "64bit Amazon Linux 2 v5.8.0 running Node.js 18";

const APPLICATION_ID: &str = "eb-application";
const APP_VERSION_ID: &str = "eb-app-version";
const INSTANCE_ROLE_ID: &str = "eb-instance-role";
const INSTANCE_PROFILE_ID: &str = "eb-instance-profile";
const ENVIRONMENT_ID: &str = "eb-environment";
const PIPELINE_ID: &str = "codepipeline";
const DNS_RECORD_ID: &str = "dns-alias-record";

/// Key under which the bootstrap source bundle is staged in the pipeline
/// bucket. Gives the environment a deployable version before the pipeline
/// runs for the first time.
const BOOTSTRAP_BUNDLE_KEY: &str = "bootstrap/demo-app.zip";

/// Synthesize the full resource graph for one deployment target.
///
/// Runs the resolver stages in dependency order: hosting options, source
/// action, pipeline shape, optional DNS alias. The configuration is read-only
/// throughout; there is exactly one evaluation pass.
pub fn synthesize(config: &StackConfig, defaults: &OptionDefaults) -> Result<ResourceGraph> {
    info!(
        environment = %config.environment_type,
        app = %config.app_name,
        "Synthesizing resource graph"
    );

    let mut graph = ResourceGraph::new();

    graph.add(Resource::new(
        APPLICATION_ID,
        "elasticbeanstalk:application",
        json!({ "application_name": config.app_name }),
    ));

    graph.add(
        Resource::new(
            APP_VERSION_ID,
            "elasticbeanstalk:application-version",
            json!({
                "application_name": config.app_name,
                "source_bundle": {
                    "s3_bucket": config.pipeline_bucket,
                    "s3_key": BOOTSTRAP_BUNDLE_KEY,
                },
            }),
        )
        .depends_on(APPLICATION_ID),
    );

    graph.add(Resource::new(
        INSTANCE_ROLE_ID,
        "iam:role",
        json!({
            "role_name": format!("{}-aws-elasticbeanstalk-ec2-role", config.app_name),
            "assumed_by": "ec2.amazonaws.com",
            "managed_policies": ["AWSElasticBeanstalkWebTier"],
        }),
    ));

    let instance_profile_name = format!("{}-instance-profile", config.app_name);
    graph.add(
        Resource::new(
            INSTANCE_PROFILE_ID,
            "iam:instance-profile",
            json!({
                "instance_profile_name": instance_profile_name,
                "roles": [ResourceGraph::attr_ref(INSTANCE_ROLE_ID, "roleName")],
            }),
        )
        .depends_on(INSTANCE_ROLE_ID),
    );

    let option_settings = build_option_settings(&instance_profile_name, config, defaults);
    debug!(count = option_settings.len(), "Built option settings");

    graph.add(
        Resource::new(
            ENVIRONMENT_ID,
            "elasticbeanstalk:environment",
            json!({
                "environment_name": config.env_name,
                "application_name": config.app_name,
                "solution_stack_name": SOLUTION_STACK,
                "option_settings": option_settings,
                "version_label": ResourceGraph::attr_ref(APP_VERSION_ID, "ref"),
            }),
        )
        .depends_on(APP_VERSION_ID)
        .depends_on(INSTANCE_PROFILE_ID),
    );

    let kind = ProjectKind::from_project_type(&config.project_type);
    if kind.has_build_stage() {
        graph.add(Resource::new(
            BUILD_PROJECT_ID,
            "codebuild:project",
            json!({
                "build_image": buildspec::BUILD_IMAGE,
                "buildspec": buildspec::buildspec(),
            }),
        ));
    }

    let source = SourceAction::new(config.source_provider.clone(), config.branch.clone());
    let pipeline = assemble_pipeline(kind, source, config);
    debug!(stages = ?pipeline.stage_names(), "Assembled pipeline");

    graph.add(
        Resource::new(
            PIPELINE_ID,
            "codepipeline:pipeline",
            serde_json::to_value(&pipeline)?,
        )
        .depends_on(APPLICATION_ID)
        .depends_on(ENVIRONMENT_ID),
    );

    let endpoint = ResourceGraph::attr_ref(ENVIRONMENT_ID, "endpointUrl");
    graph.add_output(
        "eb-endpoint-url",
        endpoint.clone(),
        "URL endpoint for the hosting environment",
    );

    if let Some(record) = dns::resolve_alias(
        config.hosted_zone_name.as_deref(),
        config.subdomain.as_deref(),
        &endpoint,
    ) {
        graph.add(
            Resource::new(
                DNS_RECORD_ID,
                "route53:record",
                json!({
                    "record_name": record.record_name,
                    "zone_name": record.zone_name,
                    "record_type": "A",
                    "alias_target": record.target,
                }),
            )
            // the alias can only be created once the environment reports its
            // endpoint
            .depends_on(ENVIRONMENT_ID),
        );
        graph.add_output(
            "dns-record-name",
            record.record_name,
            "Resolved name of the environment alias record",
        );
    }

    Ok(graph)
}
