//! Optional DNS alias for the hosting environment endpoint.

use serde::{Deserialize, Serialize};

/// Alias record pointing a subdomain at the environment endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    /// Fully qualified record name, e.g. "app.example.com".
    pub record_name: String,
    pub zone_name: String,
    /// Endpoint reference resolved by the orchestrator after the environment
    /// exists.
    pub target: String,
}

/// Resolve the alias record, when DNS is configured at all.
///
/// Returns `None` unless both the hosted zone name and the subdomain are
/// present and non-empty; the DNS stage is skipped entirely in that case.
pub fn resolve_alias(
    hosted_zone_name: Option<&str>,
    subdomain: Option<&str>,
    target: &str,
) -> Option<AliasRecord> {
    let zone = hosted_zone_name.filter(|z| !z.is_empty())?;
    let subdomain = subdomain.filter(|s| !s.is_empty())?;

    Some(AliasRecord {
        record_name: format!("{}.{}", subdomain, zone.trim_end_matches('.')),
        zone_name: zone.to_string(),
        target: target.to_string(),
    })
}
