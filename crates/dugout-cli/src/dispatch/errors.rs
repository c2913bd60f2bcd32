//! Error types for console request dispatch failures.
//!
//! Each variant maps to a specific failure mode and carries enough context
//! to produce a single actionable `error:` line for the operator.

use std::io;

use thiserror::Error;

use dugout_league::LeagueError;

/// Errors surfaced while parsing and dispatching console requests.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Request line does not follow the `keyword: key=value, ...` grammar.
    #[error("malformed request: {message}")]
    Malformed { message: String },

    /// Keyword does not name a registered command.
    #[error("request not recognised: {keyword}")]
    Unrecognized { keyword: String },

    /// Two handlers were registered under the same keyword.
    #[error("command {keyword:?} is registered twice")]
    DuplicateCommand { keyword: &'static str },

    /// The league refused or could not complete the requested operation.
    #[error(transparent)]
    League(#[from] LeagueError),

    /// Response JSON encoding failed.
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),

    /// IO error while writing a response.
    #[error("IO error: {0}")]
    Output(#[from] io::Error),
}

impl DispatchError {
    /// Creates a malformed request error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates an unrecognised keyword error.
    pub fn unrecognized(keyword: impl Into<String>) -> Self {
        Self::Unrecognized {
            keyword: keyword.into(),
        }
    }

    /// Creates a duplicate registration error.
    #[must_use]
    pub const fn duplicate_command(keyword: &'static str) -> Self {
        Self::DuplicateCommand { keyword }
    }
}
