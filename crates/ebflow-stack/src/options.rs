//! Hosting environment option settings.
//!
//! The environment is configured through an ordered list of
//! (namespace, option name, value) entries. Order matters: the target system
//! resolves duplicate namespace+name entries by last write, so the list is
//! built as a fixed required prefix followed by independently gated extension
//! steps, each a pure `Vec<OptionSetting> -> Vec<OptionSetting>` function.

use ebflow_core::StackConfig;
use serde::{Deserialize, Serialize};

pub const NS_LAUNCH_CONFIGURATION: &str = "aws:autoscaling:launchconfiguration";
pub const NS_AUTOSCALING_GROUP: &str = "aws:autoscaling:asg";
pub const NS_INSTANCES: &str = "aws:ec2:instances";
pub const NS_ENVIRONMENT: &str = "aws:elasticbeanstalk:environment";
pub const NS_HTTPS_LISTENER: &str = "aws:elbv2:listener:443";
pub const NS_APPLICATION: &str = "aws:elasticbeanstalk:application";
pub const NS_APP_ENVIRONMENT: &str = "aws:elasticbeanstalk:application:environment";

/// One namespaced option entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSetting {
    pub namespace: String,
    pub option_name: String,
    pub value: String,
}

impl OptionSetting {
    pub fn new(
        namespace: impl Into<String>,
        option_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            option_name: option_name.into(),
            value: value.into(),
        }
    }
}

/// Fallback values for the sizing options.
///
/// Historical settings revisions disagreed on the instance-type default
/// ("t2.micro" vs "t3.small"), so it is configurable rather than a constant.
/// Min and max sizes default independently of each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefaults {
    pub min_size: String,
    pub max_size: String,
    pub instance_types: String,
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            min_size: "1".to_string(),
            max_size: "1".to_string(),
            instance_types: "t3.small".to_string(),
        }
    }
}

impl OptionDefaults {
    pub fn with_instance_types(mut self, instance_types: impl Into<String>) -> Self {
        self.instance_types = instance_types.into();
        self
    }
}

/// Build the full ordered option list for one environment.
///
/// Append order: base four, optional health check, optional TLS block,
/// optional application variables.
pub fn build_option_settings(
    instance_profile_name: &str,
    config: &StackConfig,
    defaults: &OptionDefaults,
) -> Vec<OptionSetting> {
    let options = base_options(instance_profile_name, config, defaults);
    let options = with_health_check(options, config.health_check_path.as_deref());
    let options = with_tls_listener(options, config.ssl_certificate_arn.as_deref());
    with_app_variables(options, &config.environment_variables)
}

/// The required prefix, always present, in fixed order.
fn base_options(
    instance_profile_name: &str,
    config: &StackConfig,
    defaults: &OptionDefaults,
) -> Vec<OptionSetting> {
    vec![
        OptionSetting::new(
            NS_LAUNCH_CONFIGURATION,
            "IamInstanceProfile",
            instance_profile_name,
        ),
        OptionSetting::new(
            NS_AUTOSCALING_GROUP,
            "MinSize",
            config.min_size.as_deref().unwrap_or(&defaults.min_size),
        ),
        OptionSetting::new(
            NS_AUTOSCALING_GROUP,
            "MaxSize",
            config.max_size.as_deref().unwrap_or(&defaults.max_size),
        ),
        OptionSetting::new(
            NS_INSTANCES,
            "InstanceTypes",
            config
                .instance_types
                .as_deref()
                .unwrap_or(&defaults.instance_types),
        ),
    ]
}

/// Override the platform's default "/" health-check path when one is set.
fn with_health_check(
    mut options: Vec<OptionSetting>,
    health_check_path: Option<&str>,
) -> Vec<OptionSetting> {
    if let Some(path) = health_check_path {
        options.push(OptionSetting::new(
            NS_APPLICATION,
            "Application Healthcheck URL",
            path,
        ));
    }
    options
}

/// Enable the application load balancer and HTTPS listener when a certificate
/// is configured. Exactly four entries, in this order.
fn with_tls_listener(
    mut options: Vec<OptionSetting>,
    ssl_certificate_arn: Option<&str>,
) -> Vec<OptionSetting> {
    if let Some(arn) = ssl_certificate_arn {
        options.push(OptionSetting::new(
            NS_ENVIRONMENT,
            "LoadBalancerType",
            "application",
        ));
        options.push(OptionSetting::new(NS_HTTPS_LISTENER, "ListenerEnabled", "true"));
        options.push(OptionSetting::new(NS_HTTPS_LISTENER, "SSLCertificateArns", arn));
        options.push(OptionSetting::new(NS_HTTPS_LISTENER, "Protocol", "HTTPS"));
    }
    options
}

/// One entry per application variable, input order preserved.
fn with_app_variables(
    mut options: Vec<OptionSetting>,
    variables: &[ebflow_core::EnvVariable],
) -> Vec<OptionSetting> {
    for variable in variables {
        options.push(OptionSetting::new(
            NS_APP_ENVIRONMENT,
            &variable.name,
            &variable.value,
        ));
    }
    options
}
