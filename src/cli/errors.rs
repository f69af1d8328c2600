use std::process::ExitCode;

use thiserror::Error;

use crate::error::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Expected 2 arguments, got {found}. {usage}")]
    Usage { found: usize, usage: String },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] clap::Error),

    #[error(transparent)]
    Render(#[from] Error),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            AppError::Usage { .. } => 1,
            AppError::Render(Error::Encoding(_)) => 2,
            AppError::Render(Error::Io(_)) => 3,
            AppError::InvalidArguments(_) => 4,
        }
    }
}
