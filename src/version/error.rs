use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Crate not found: {0}")]
    NotFound(String),

    #[error("Invalid crate name: {0}")]
    InvalidName(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No documentation builds for {0}")]
    NoBuilds(String),

    #[error("Invalid documentation path: {0}")]
    InvalidPath(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Requested version has no matching record; resolution still falls back
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Version '{version}' of crate '{package}' does not exist")]
pub struct VersionNotFound {
    pub package: String,
    pub version: String,
}
