// crates/infra/src/persistence/request_file.rs
use std::fs;
use std::path::Path;

use wildsweep_domain::InclusionRequest;
use wildsweep_shared_kernel::{ErrorContext, InfrastructureError, Result};

/// Serialisation of a request document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl RequestFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Read an inclusion request from a `.json`, `.yaml` or `.yml` file.
///
/// Only the document shape is checked here; the request itself is validated by the
/// use case so that its check order is the same for every front end.
///
/// # Errors
/// Fails on an unknown extension, an unreadable file or a malformed document.
pub fn load_request(path: &Path) -> Result<InclusionRequest> {
    let unsupported = || InfrastructureError::UnsupportedFormat {
        path: path.to_path_buf(),
    };
    let format = RequestFormat::from_path(path).ok_or_else(unsupported)?;
    let text = fs::read_to_string(path).map_err(|source| InfrastructureError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_request(&text, format)
        .with_context(|| format!("In request file '{}'", path.display()))
}

/// # Errors
/// Fails when `text` is not a well-formed document of `format`.
pub fn parse_request(text: &str, format: RequestFormat) -> Result<InclusionRequest> {
    match format {
        RequestFormat::Json => Ok(serde_json::from_str(text)?),
        #[cfg(feature = "yaml")]
        RequestFormat::Yaml => Ok(serde_yaml::from_str(text)?),
    }
}
