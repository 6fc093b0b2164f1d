// crates/domain/src/request.rs
use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;
use serde::de::IgnoredAny;
use wildsweep_shared_kernel::{DomainError, DomainResult};

/// A path field as it arrived from the caller.
///
/// Request documents may carry anything in a path slot. Non-string values are kept so
/// that validation, not deserialization, rejects them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PathValue {
    Text(String),
    NotText(IgnoredAny),
}

impl PathValue {
    fn absent() -> Self {
        Self::NotText(IgnoredAny)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::NotText(_) => None,
        }
    }
}

impl Default for PathValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for PathValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PathValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTypes {
    #[serde(default)]
    pub included_file_names: Vec<String>,
    #[serde(default)]
    pub excluded_file_names: Option<Vec<String>>,
}

/// Everything a deletion run needs, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionRequest {
    #[serde(default = "PathValue::absent")]
    pub starting_path: PathValue,
    #[serde(default)]
    pub stopping_path: PathValue,
    #[serde(default)]
    pub file_types: FileTypes,
}

/// A request that passed every check. Paths are still as given (possibly relative).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub starting_path: PathBuf,
    /// `None` when the caller passed an empty stopping path.
    pub stopping_path: Option<PathBuf>,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
}

impl InclusionRequest {
    pub fn new(
        starting_path: impl Into<PathValue>,
        stopping_path: impl Into<PathValue>,
        included: Vec<String>,
        excluded: Option<Vec<String>>,
    ) -> Self {
        Self {
            starting_path: starting_path.into(),
            stopping_path: stopping_path.into(),
            file_types: FileTypes {
                included_file_names: included,
                excluded_file_names: excluded,
            },
        }
    }

    /// Check the request. Checks run in a fixed order and the first failure wins.
    ///
    /// # Errors
    /// Returns [`DomainError::Validation`] for an empty inclusion list, a non-string path,
    /// an empty exclusion list, a duplicated inclusion token or an empty starting path.
    pub fn validate(&self) -> DomainResult<ValidatedRequest> {
        let included = &self.file_types.included_file_names;
        if included.is_empty() {
            return Err(DomainError::validation(
                "includedFileNames must contain at least one pattern",
            ));
        }

        let (Some(starting), Some(stopping)) =
            (self.starting_path.as_text(), self.stopping_path.as_text())
        else {
            return Err(DomainError::validation(
                "startingPath and stoppingPath must be strings",
            ));
        };

        let excluded = &self.file_types.excluded_file_names;
        if excluded.as_ref().is_some_and(Vec::is_empty) {
            return Err(DomainError::validation(
                "excludedFileNames must not be empty when present",
            ));
        }

        let mut seen = HashSet::with_capacity(included.len());
        if let Some(dup) = included.iter().find(|t| !seen.insert(t.as_str())) {
            return Err(DomainError::validation(format!(
                "duplicate pattern '{dup}' in includedFileNames"
            )));
        }

        if starting.is_empty() {
            return Err(DomainError::validation("startingPath must not be empty"));
        }

        Ok(ValidatedRequest {
            starting_path: PathBuf::from(starting),
            stopping_path: (!stopping.is_empty()).then(|| PathBuf::from(stopping)),
            included: included.clone(),
            excluded: excluded.clone().unwrap_or_default(),
        })
    }
}
