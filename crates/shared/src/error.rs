use thiserror::Error;

use crate::protocol::StatusCode;

/// Recoverable console conditions. None of them stops the operator loop;
/// log-capacity overflow is absorbed by the log buffer and never shows up here.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("command '{command}' rejected: {status}")]
    CommandRejected { command: String, status: StatusCode },

    #[error("job storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    #[error("invalid value '{value}' for {key}")]
    InvalidSetting { key: &'static str, value: String },
}

impl ConsoleError {
    pub fn rejected(command: impl Into<String>, status: StatusCode) -> Self {
        Self::CommandRejected {
            command: command.into(),
            status,
        }
    }

    pub fn storage(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }
}
