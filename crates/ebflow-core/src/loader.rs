//! Settings file discovery and loading.

use crate::error::{ConfigError, Result};
use crate::model::Settings;
use std::path::{Path, PathBuf};
use tracing::debug;

const CANDIDATES: [&str; 4] = ["ebflow.yaml", ".ebflow.yaml", "ebflow.yml", ".ebflow.yml"];

/// Locate the settings file.
///
/// Search order:
/// 1. `EBFLOW_CONFIG_PATH` environment variable (direct path)
/// 2. current directory: ebflow.yaml, .ebflow.yaml, ebflow.yml, .ebflow.yml
/// 3. `./.ebflow/` directory, same candidate order
/// 4. `~/.config/ebflow/ebflow.yaml` (global settings)
pub fn find_config_file() -> Result<PathBuf> {
    if let Ok(config_path) = std::env::var("EBFLOW_CONFIG_PATH") {
        let path = PathBuf::from(config_path);
        if path.exists() {
            return Ok(path);
        }
    }

    let current_dir = std::env::current_dir()?;
    if let Some(path) = find_config_file_in(&current_dir) {
        return Ok(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let global_config = config_dir.join("ebflow").join("ebflow.yaml");
        if global_config.exists() {
            return Ok(global_config);
        }
    }

    Err(ConfigError::ConfigFileNotFound)
}

/// Check one directory (and its `.ebflow/` subdirectory) for a settings file.
pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    for filename in &CANDIDATES {
        let path = dir.join(filename);
        if path.exists() {
            return Some(path);
        }
    }

    let ebflow_dir = dir.join(".ebflow");
    if ebflow_dir.is_dir() {
        for filename in &CANDIDATES {
            let path = ebflow_dir.join(filename);
            if path.exists() {
                return Some(path);
            }
        }
    }

    None
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    debug!(path = %path.display(), "Loading settings file");
    let text = std::fs::read_to_string(path)?;
    Settings::from_yaml(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MINIMAL: &str = r#"
environmentType: dev
projectType: js
githubRepoOwner: acme
githubRepoName: widget-api
githubAccessTokenName: github-token
dev:
  stackName: widget-dev
  branch: develop
  pipelineConfig:
    name: widget-dev-pipeline
  pipelineBucket: widget-dev-artifacts
  ebEnvName: widget-dev-env
  ebAppName: widget-dev
"#;

    #[test]
    fn test_find_config_file_in_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("ebflow.yaml"), MINIMAL).unwrap();

        let found = find_config_file_in(temp_dir.path()).unwrap();
        assert!(found.ends_with("ebflow.yaml"));
    }

    #[test]
    fn test_find_config_file_candidate_priority() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("ebflow.yml"), MINIMAL).unwrap();
        fs::write(temp_dir.path().join(".ebflow.yaml"), MINIMAL).unwrap();

        // .ebflow.yaml comes before ebflow.yml in the candidate list
        let found = find_config_file_in(temp_dir.path()).unwrap();
        assert!(found.ends_with(".ebflow.yaml"));
    }

    #[test]
    fn test_find_config_file_in_ebflow_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ebflow_dir = temp_dir.path().join(".ebflow");
        fs::create_dir(&ebflow_dir).unwrap();
        fs::write(ebflow_dir.join("ebflow.yaml"), MINIMAL).unwrap();

        let found = find_config_file_in(temp_dir.path()).unwrap();
        assert!(found.ends_with(".ebflow/ebflow.yaml"));
    }

    #[test]
    fn test_find_config_file_env_var() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("custom.yaml");
        fs::write(&config_path, MINIMAL).unwrap();

        temp_env::with_var("EBFLOW_CONFIG_PATH", Some(config_path.to_str().unwrap()), || {
            let found = find_config_file().unwrap();
            assert_eq!(found, config_path);
        });
    }

    #[test]
    fn test_find_config_file_in_empty_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(find_config_file_in(temp_dir.path()).is_none());
    }

    #[test]
    fn test_load_settings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("ebflow.yaml");
        fs::write(&path, MINIMAL).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.environment_type, "dev");
        assert_eq!(settings.project_type, "js");
    }

    #[test]
    fn test_load_settings_malformed_yaml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("ebflow.yaml");
        fs::write(&path, "environmentType: [unclosed").unwrap();

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}
