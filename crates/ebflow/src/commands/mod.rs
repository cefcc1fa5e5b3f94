pub mod synth;
pub mod validate;

use std::path::PathBuf;

/// Resolve the settings file path: explicit flag first, discovery otherwise.
pub fn locate_config(config: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match config {
        Some(path) => Ok(path),
        None => Ok(ebflow_core::find_config_file()?),
    }
}
