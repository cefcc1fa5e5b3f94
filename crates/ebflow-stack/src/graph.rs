//! Declarative resource graph types.
//!
//! The graph is a description handed to the provisioning control plane, not
//! an execution plan of our own. Dependency edges are ordering hints for that
//! orchestrator (environment before DNS record, application before version).

use serde::{Deserialize, Serialize};

/// One declared resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Graph-unique identifier, referenced by dependency edges.
    pub id: String,

    /// Resource type (e.g., "elasticbeanstalk:environment", "route53:record")
    pub resource_type: String,

    /// Resource-specific configuration
    pub properties: serde_json::Value,

    /// Ids of resources that must exist before this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl Resource {
    pub fn new(
        id: impl Into<String>,
        resource_type: impl Into<String>,
        properties: serde_json::Value,
    ) -> Self {
        Self {
            id: id.into(),
            resource_type: resource_type.into(),
            properties,
            depends_on: Vec::new(),
        }
    }

    /// Add an ordering dependency on another resource.
    pub fn depends_on(mut self, id: impl Into<String>) -> Self {
        self.depends_on.push(id.into());
        self
    }
}

/// Named output surfaced to the operator after evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    pub name: String,
    pub value: String,
    pub description: String,
}

/// Ordered set of resources plus named outputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceGraph {
    pub resources: Vec<Resource>,
    pub outputs: Vec<Output>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, resource: Resource) {
        self.resources.push(resource);
    }

    pub fn add_output(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.outputs.push(Output {
            name: name.into(),
            value: value.into(),
            description: description.into(),
        });
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    pub fn by_type(&self, resource_type: &str) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| r.resource_type == resource_type)
            .collect()
    }

    /// Reference to an attribute a resource exposes only after provisioning.
    ///
    /// Resolved by the orchestrator at apply time, opaque to us.
    pub fn attr_ref(id: &str, attribute: &str) -> String {
        format!("${{{id}.{attribute}}}")
    }

    /// Summary of the graph
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            resources: self.resources.len(),
            outputs: self.outputs.len(),
        }
    }
}

/// Summary of a synthesized graph
#[derive(Debug, Clone)]
pub struct GraphSummary {
    pub resources: usize,
    pub outputs: usize,
}

impl std::fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} resources, {} outputs",
            self.resources, self.outputs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_depends_on_accumulates() {
        let resource = Resource::new("env", "elasticbeanstalk:environment", json!({}))
            .depends_on("app-version")
            .depends_on("instance-profile");

        assert_eq!(resource.depends_on, vec!["app-version", "instance-profile"]);
    }

    #[test]
    fn test_get_and_by_type() {
        let mut graph = ResourceGraph::new();
        graph.add(Resource::new("a", "iam:role", json!({})));
        graph.add(Resource::new("b", "iam:role", json!({})));
        graph.add(Resource::new("c", "route53:record", json!({})));

        assert!(graph.get("c").is_some());
        assert!(graph.get("missing").is_none());
        assert_eq!(graph.by_type("iam:role").len(), 2);
    }

    #[test]
    fn test_attr_ref_format() {
        assert_eq!(
            ResourceGraph::attr_ref("eb-environment", "endpointUrl"),
            "${eb-environment.endpointUrl}"
        );
    }

    #[test]
    fn test_empty_depends_on_not_serialized() {
        let resource = Resource::new("a", "iam:role", json!({}));
        let value = serde_json::to_value(&resource).unwrap();
        assert!(value.get("depends_on").is_none());
    }
}
