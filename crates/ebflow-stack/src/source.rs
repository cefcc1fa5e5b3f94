//! Pipeline source action.

use ebflow_core::SourceProvider;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Opaque handle to a pipeline-stage output artifact.
///
/// Identity only; the artifact contents live in the pipeline bucket and are
/// never modeled here. Each handle is produced by exactly one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactHandle(String);

impl ArtifactHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtifactHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single entry point that fetches code.
///
/// Exactly one per pipeline; the provider variant was resolved during
/// configuration intake and is never re-derived here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAction {
    pub provider: SourceProvider,
    pub branch: String,
    pub output: ArtifactHandle,
}

impl SourceAction {
    pub fn new(provider: SourceProvider, branch: impl Into<String>) -> Self {
        Self {
            provider,
            branch: branch.into(),
            output: ArtifactHandle::new("SourceOutput"),
        }
    }

    /// Action name shown in the pipeline stage.
    pub fn action_name(&self) -> &'static str {
        match self.provider {
            SourceProvider::GitHub { .. } => "GitHub",
            SourceProvider::CodeCommit { .. } => "CodeCommit",
        }
    }

    /// Provider-specific action configuration.
    pub fn properties(&self) -> serde_json::Value {
        match &self.provider {
            SourceProvider::GitHub {
                owner,
                repo,
                token_secret,
            } => json!({
                "owner": owner,
                "repo": repo,
                "branch": self.branch,
                // resolved from the secret store at deploy time
                "oauth_token": format!("{{{{resolve:secretsmanager:{token_secret}}}}}"),
            }),
            SourceProvider::CodeCommit { repo } => json!({
                "repo": repo,
                "branch": self.branch,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_github_action() {
        let action = SourceAction::new(
            SourceProvider::GitHub {
                owner: "acme".to_string(),
                repo: "widget-api".to_string(),
                token_secret: "github-token".to_string(),
            },
            "main",
        );

        assert_eq!(action.action_name(), "GitHub");
        assert_eq!(action.output.name(), "SourceOutput");

        let props = action.properties();
        assert_eq!(props["owner"], "acme");
        assert_eq!(props["repo"], "widget-api");
        assert_eq!(props["branch"], "main");
        assert_eq!(
            props["oauth_token"],
            "{{resolve:secretsmanager:github-token}}"
        );
    }

    #[test]
    fn test_code_commit_action_needs_no_credentials() {
        let action = SourceAction::new(
            SourceProvider::CodeCommit {
                repo: "widget-api".to_string(),
            },
            "develop",
        );

        assert_eq!(action.action_name(), "CodeCommit");

        let props = action.properties();
        assert_eq!(props["repo"], "widget-api");
        assert_eq!(props["branch"], "develop");
        assert!(props.get("oauth_token").is_none());
        assert!(props.get("owner").is_none());
    }
}
