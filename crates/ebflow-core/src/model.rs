//! Settings document and resolved stack configuration.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw settings document as written by the operator.
///
/// Shared fields apply to every environment; the `dev` and `prod` blocks hold
/// the per-environment sizing and naming. Which block is resolved is decided
/// by `environment_type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Selects the environment block to resolve ("dev" or "prod").
    pub environment_type: String,

    /// "ts" projects get a build stage; everything else deploys as-is.
    pub project_type: String,

    pub github_repo_owner: String,
    pub github_repo_name: String,

    /// Secrets Manager secret holding the GitHub OAuth token.
    pub github_access_token_name: String,

    /// Use the account-authorized CodeCommit repository instead of GitHub.
    #[serde(default)]
    pub use_code_commit: bool,

    /// Enables the HTTPS listener block on the hosting environment.
    #[serde(default)]
    pub ssl_certificate_arn: Option<String>,

    /// Overrides the platform default health-check path ("/").
    #[serde(default)]
    pub health_check_path: Option<String>,

    /// Hosted zone for the optional DNS alias. Only used together with
    /// `subdomain`.
    #[serde(default)]
    pub hosted_zone_name: Option<String>,

    #[serde(default)]
    pub subdomain: Option<String>,

    /// Extra application environment variables, order-preserving.
    #[serde(default)]
    pub environment_variables: Vec<EnvVariable>,

    #[serde(default)]
    pub dev: Option<EnvironmentSettings>,

    #[serde(default)]
    pub prod: Option<EnvironmentSettings>,
}

/// Per-environment block of the settings document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSettings {
    pub stack_name: String,
    pub branch: String,
    pub pipeline_config: PipelineSettings,
    pub pipeline_bucket: String,
    #[serde(default)]
    pub min_size: Option<SizeValue>,
    #[serde(default)]
    pub max_size: Option<SizeValue>,
    #[serde(default)]
    pub instance_types: Option<String>,
    pub eb_env_name: String,
    pub eb_app_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSettings {
    pub name: String,
}

/// One (name, value) application environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVariable {
    pub name: String,
    pub value: String,
}

/// Instance count that may appear as a YAML number or a string.
///
/// The target option format wants strings, so both forms coerce.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Number(u64),
    Text(String),
}

impl SizeValue {
    pub fn to_option_value(&self) -> String {
        match self {
            SizeValue::Number(n) => n.to_string(),
            SizeValue::Text(s) => s.clone(),
        }
    }
}

/// Supported environment types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentType {
    Dev,
    Prod,
}

impl FromStr for EnvironmentType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(EnvironmentType::Dev),
            "prod" => Ok(EnvironmentType::Prod),
            other => Err(ConfigError::UnknownEnvironmentType(other.to_string())),
        }
    }
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentType::Dev => write!(f, "dev"),
            EnvironmentType::Prod => write!(f, "prod"),
        }
    }
}

/// Source-control provider, resolved once at configuration time.
///
/// Downstream code carries this tagged value instead of re-checking the
/// `use_code_commit` flag; which action was built and which artifact is
/// referenced later can then never drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum SourceProvider {
    /// GitHub; the OAuth token is resolved at deploy time from the named
    /// secret.
    #[serde(rename = "github")]
    GitHub {
        owner: String,
        repo: String,
        token_secret: String,
    },
    /// CodeCommit; authorization is implicit through the hosting account.
    #[serde(rename = "codecommit")]
    CodeCommit { repo: String },
}

impl SourceProvider {
    pub fn repo(&self) -> &str {
        match self {
            SourceProvider::GitHub { repo, .. } => repo,
            SourceProvider::CodeCommit { repo } => repo,
        }
    }
}

/// Fully resolved configuration for one deployment target.
///
/// Immutable after construction; every resolver stage reads it by reference.
#[derive(Debug, Clone)]
pub struct StackConfig {
    pub environment_type: EnvironmentType,
    pub stack_name: String,
    pub branch: String,
    pub pipeline_name: String,
    pub pipeline_bucket: String,
    pub min_size: Option<String>,
    pub max_size: Option<String>,
    pub instance_types: Option<String>,
    pub env_name: String,
    pub app_name: String,
    pub project_type: String,
    pub source_provider: SourceProvider,
    pub ssl_certificate_arn: Option<String>,
    pub health_check_path: Option<String>,
    pub hosted_zone_name: Option<String>,
    pub subdomain: Option<String>,
    pub environment_variables: Vec<EnvVariable>,
}

impl Settings {
    /// Parse a settings document from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Resolve the document into the configuration for its declared
    /// environment type.
    ///
    /// Fails when `environment_type` is neither "dev" nor "prod", or when the
    /// selected block is missing. No further validation happens here; ARNs,
    /// secret names, and instance types pass through uninterpreted and are
    /// judged by the provisioning control plane, not by us.
    pub fn resolve(&self) -> Result<StackConfig> {
        let environment_type: EnvironmentType = self.environment_type.parse()?;

        let env = match environment_type {
            EnvironmentType::Dev => self.dev.as_ref(),
            EnvironmentType::Prod => self.prod.as_ref(),
        }
        .ok_or_else(|| ConfigError::MissingEnvironmentBlock(self.environment_type.clone()))?;

        let source_provider = if self.use_code_commit {
            SourceProvider::CodeCommit {
                repo: self.github_repo_name.clone(),
            }
        } else {
            SourceProvider::GitHub {
                owner: self.github_repo_owner.clone(),
                repo: self.github_repo_name.clone(),
                token_secret: self.github_access_token_name.clone(),
            }
        };

        Ok(StackConfig {
            environment_type,
            stack_name: env.stack_name.clone(),
            branch: env.branch.clone(),
            pipeline_name: env.pipeline_config.name.clone(),
            pipeline_bucket: env.pipeline_bucket.clone(),
            min_size: env.min_size.as_ref().map(SizeValue::to_option_value),
            max_size: env.max_size.as_ref().map(SizeValue::to_option_value),
            instance_types: env.instance_types.clone(),
            env_name: env.eb_env_name.clone(),
            app_name: env.eb_app_name.clone(),
            project_type: self.project_type.clone(),
            source_provider,
            ssl_certificate_arn: self.ssl_certificate_arn.clone(),
            health_check_path: self.health_check_path.clone(),
            hosted_zone_name: self.hosted_zone_name.clone(),
            subdomain: self.subdomain.clone(),
            environment_variables: self.environment_variables.clone(),
        })
    }
}
