//! Settings model and environment resolution for ebflow.
//!
//! A settings document describes one deployable application for up to two
//! environment types (`dev`, `prod`). This crate loads the document and
//! resolves it into a [`StackConfig`] for exactly one of them. Everything
//! downstream (option building, pipeline assembly, synthesis) consumes the
//! resolved configuration read-only.

pub mod error;
pub mod loader;
pub mod model;

pub use error::{ConfigError, Result};
pub use loader::{find_config_file, find_config_file_in, load_settings};
pub use model::{
    EnvVariable, EnvironmentSettings, EnvironmentType, PipelineSettings, Settings, SizeValue,
    SourceProvider, StackConfig,
};
