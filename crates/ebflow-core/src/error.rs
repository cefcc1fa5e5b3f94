use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "settings file not found. Checked:\n\
        - current directory: ebflow.yaml, .ebflow.yaml, ebflow.yml, .ebflow.yml\n\
        - ./.ebflow/ directory\n\
        - ~/.config/ebflow/ebflow.yaml\n\
        or set EBFLOW_CONFIG_PATH to point at the file directly"
    )]
    ConfigFileNotFound,

    #[error("unknown environment type: {0:?} (expected \"dev\" or \"prod\")")]
    UnknownEnvironmentType(String),

    #[error("settings define environmentType {0:?} but carry no {0:?} block")]
    MissingEnvironmentBlock(String),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
