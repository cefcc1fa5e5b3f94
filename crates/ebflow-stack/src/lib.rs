//! Resource graph synthesis for ebflow.
//!
//! Takes a resolved [`ebflow_core::StackConfig`] and produces the declarative
//! resource graph for one deployment target: the hosting environment with its
//! ordered option settings, the source→(build)→deploy pipeline, and the
//! optional DNS alias. Evaluation is one synchronous pass; applying the graph
//! is the external control plane's job, including all retry, health-check,
//! and rollout behavior.

pub mod buildspec;
pub mod dns;
pub mod error;
pub mod graph;
pub mod options;
pub mod pipeline;
pub mod source;
pub mod synth;

pub use error::{Result, StackError};
pub use graph::{Output, Resource, ResourceGraph};
pub use options::{OptionDefaults, OptionSetting, build_option_settings};
pub use pipeline::{PipelineSpec, ProjectKind, Stage, assemble_pipeline};
pub use source::{ArtifactHandle, SourceAction};
pub use synth::synthesize;
