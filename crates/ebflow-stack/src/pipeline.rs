//! Pipeline stage assembly.
//!
//! A pipeline has exactly one of two shapes, decided by the project type:
//! `[Source, Deploy]` for deploy-as-is projects, `[Source, Build, Deploy]`
//! for projects that need a build. The stage shape and the deploy action's
//! input artifact are computed together from that single decision, so a build
//! stage can never be present while deploy still reads the source artifact.

use crate::buildspec;
use crate::source::{ArtifactHandle, SourceAction};
use ebflow_core::StackConfig;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Graph id of the build project resource, referenced by the build action.
pub const BUILD_PROJECT_ID: &str = "codebuild-project";

/// Whether the project needs a build stage before deploy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// Source is transpiled before deploy (project type "ts").
    Build,
    /// Source bundle deploys unchanged (every other project type).
    DeployAsIs,
}

impl ProjectKind {
    pub fn from_project_type(project_type: &str) -> Self {
        if project_type == "ts" {
            ProjectKind::Build
        } else {
            ProjectKind::DeployAsIs
        }
    }

    pub fn has_build_stage(&self) -> bool {
        matches!(self, ProjectKind::Build)
    }
}

/// One pipeline action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub properties: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<ArtifactHandle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<ArtifactHandle>,
}

/// Named stage holding its actions in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub actions: Vec<Action>,
}

/// Assembled pipeline: ordered stages plus the artifact bucket they share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSpec {
    pub name: String,
    pub artifact_bucket: String,
    pub stages: Vec<Stage>,
}

impl PipelineSpec {
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name.as_str()).collect()
    }

    /// Input artifact of the deploy action (the final stage).
    pub fn deploy_input(&self) -> Option<&ArtifactHandle> {
        self.stages
            .last()
            .and_then(|stage| stage.actions.first())
            .and_then(|action| action.input.as_ref())
    }
}

/// Assemble the stage list for one deployment target.
pub fn assemble_pipeline(
    kind: ProjectKind,
    source: SourceAction,
    config: &StackConfig,
) -> PipelineSpec {
    let source_stage = Stage {
        name: "Source".to_string(),
        actions: vec![Action {
            name: source.action_name().to_string(),
            properties: source.properties(),
            input: None,
            outputs: vec![source.output.clone()],
        }],
    };

    let deploy_action = |input: ArtifactHandle| Action {
        name: "ElasticBeanstalk".to_string(),
        properties: json!({
            "application_name": config.app_name,
            "environment_name": config.env_name,
        }),
        input: Some(input),
        outputs: Vec::new(),
    };

    // Shape and deploy input are one decision.
    let stages = match kind {
        ProjectKind::DeployAsIs => vec![
            source_stage,
            Stage {
                name: "Deploy".to_string(),
                actions: vec![deploy_action(source.output.clone())],
            },
        ],
        ProjectKind::Build => {
            let build_output = ArtifactHandle::new("BuildOutput");
            let build_stage = Stage {
                name: "Build".to_string(),
                actions: vec![Action {
                    name: "CodeBuild".to_string(),
                    properties: json!({
                        "project": BUILD_PROJECT_ID,
                        "buildspec": buildspec::buildspec(),
                    }),
                    input: Some(source.output.clone()),
                    outputs: vec![build_output.clone()],
                }],
            };
            vec![
                source_stage,
                build_stage,
                Stage {
                    name: "Deploy".to_string(),
                    actions: vec![deploy_action(build_output)],
                },
            ]
        }
    };

    PipelineSpec {
        name: config.pipeline_name.clone(),
        artifact_bucket: config.pipeline_bucket.clone(),
        stages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ebflow_core::{EnvironmentType, SourceProvider};

    fn config(project_type: &str) -> StackConfig {
        StackConfig {
            environment_type: EnvironmentType::Dev,
            stack_name: "widget-dev".to_string(),
            branch: "develop".to_string(),
            pipeline_name: "widget-dev-pipeline".to_string(),
            pipeline_bucket: "widget-dev-artifacts".to_string(),
            min_size: None,
            max_size: None,
            instance_types: None,
            env_name: "widget-dev-env".to_string(),
            app_name: "widget-dev".to_string(),
            project_type: project_type.to_string(),
            source_provider: SourceProvider::CodeCommit {
                repo: "widget-api".to_string(),
            },
            ssl_certificate_arn: None,
            health_check_path: None,
            hosted_zone_name: None,
            subdomain: None,
            environment_variables: Vec::new(),
        }
    }

    fn source(config: &StackConfig) -> SourceAction {
        SourceAction::new(config.source_provider.clone(), config.branch.clone())
    }

    #[test]
    fn test_project_kind_mapping() {
        assert_eq!(ProjectKind::from_project_type("ts"), ProjectKind::Build);
        assert_eq!(ProjectKind::from_project_type("js"), ProjectKind::DeployAsIs);
        assert_eq!(ProjectKind::from_project_type(""), ProjectKind::DeployAsIs);
        assert_eq!(
            ProjectKind::from_project_type("typescript"),
            ProjectKind::DeployAsIs
        );
    }

    #[test]
    fn test_deploy_as_is_shape() {
        let cfg = config("js");
        let pipeline = assemble_pipeline(ProjectKind::DeployAsIs, source(&cfg), &cfg);

        assert_eq!(pipeline.stage_names(), vec!["Source", "Deploy"]);
        assert_eq!(pipeline.deploy_input().unwrap().name(), "SourceOutput");
    }

    #[test]
    fn test_build_shape() {
        let cfg = config("ts");
        let pipeline = assemble_pipeline(ProjectKind::Build, source(&cfg), &cfg);

        assert_eq!(pipeline.stage_names(), vec!["Source", "Build", "Deploy"]);

        // build consumes the source artifact
        let build = &pipeline.stages[1].actions[0];
        assert_eq!(build.input.as_ref().unwrap().name(), "SourceOutput");
        assert_eq!(build.outputs[0].name(), "BuildOutput");

        // deploy consumes the build artifact, not source
        assert_eq!(pipeline.deploy_input().unwrap().name(), "BuildOutput");
    }

    #[test]
    fn test_source_stage_has_single_action_with_single_output() {
        let cfg = config("js");
        let pipeline = assemble_pipeline(ProjectKind::DeployAsIs, source(&cfg), &cfg);

        let source_stage = &pipeline.stages[0];
        assert_eq!(source_stage.actions.len(), 1);
        assert!(source_stage.actions[0].input.is_none());
        assert_eq!(source_stage.actions[0].outputs.len(), 1);
    }

    #[test]
    fn test_pipeline_carries_name_and_bucket() {
        let cfg = config("js");
        let pipeline = assemble_pipeline(ProjectKind::DeployAsIs, source(&cfg), &cfg);

        assert_eq!(pipeline.name, "widget-dev-pipeline");
        assert_eq!(pipeline.artifact_bucket, "widget-dev-artifacts");
    }

    #[test]
    fn test_deploy_action_targets_application_and_environment() {
        let cfg = config("ts");
        let pipeline = assemble_pipeline(ProjectKind::Build, source(&cfg), &cfg);

        let deploy = &pipeline.stages[2].actions[0];
        assert_eq!(deploy.name, "ElasticBeanstalk");
        assert_eq!(deploy.properties["application_name"], "widget-dev");
        assert_eq!(deploy.properties["environment_name"], "widget-dev-env");
    }
}
