// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum WildsweepError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<WildsweepError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, WildsweepError>;

impl WildsweepError {
    /// Strips any number of `Context` layers.
    pub fn root(&self) -> &WildsweepError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Malformed request: empty pattern list, non-string path, duplicate pattern,
    /// empty exclusion list.
    pub fn is_validation(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::Validation { .. }))
    }

    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self.root(), Self::Domain(DomainError::InvalidPattern { .. }))
    }

    /// The tree could not be listed, or the root is not a directory.
    pub fn is_traversal(&self) -> bool {
        matches!(
            self.root(),
            Self::Infrastructure(InfrastructureError::Traversal { .. })
                | Self::Application(ApplicationError::RootNotDirectory { .. })
        )
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self.root(), Self::Infrastructure(InfrastructureError::Deletion { .. }))
    }
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid request: {reason}")]
    Validation { reason: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

impl DomainError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Every grammar violation carries the same user-facing detail.
    pub fn invalid_wildcard(pattern: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            details: "Invalid wildcard.".to_string(),
        }
    }
}

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Starting path '{path}' is not a directory")]
    RootNotDirectory { path: PathBuf },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to traverse '{path}': {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to delete '{path}': {source}")]
    Deletion {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported request file '{path}': expected .json, .yaml or .yml")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WildsweepError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for WildsweepError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<WildsweepError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| WildsweepError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| WildsweepError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
