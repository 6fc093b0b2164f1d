// src/error.rs
use thiserror::Error;
use wildsweep_shared_kernel::WildsweepError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Run(#[from] WildsweepError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
