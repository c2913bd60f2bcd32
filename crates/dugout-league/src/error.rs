//! Error types for service operations.

use dugout_store::StoreError;
use thiserror::Error;

/// Domain concept an error is tagged with.
///
/// The tag replaces one exception type per concept: every service failure
/// names the concept it concerns, and the console renders the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Concept {
    /// Stadium records.
    Stadium,
    /// Team records.
    Team,
    /// Player records.
    Player,
    /// Release records.
    #[strum(serialize = "out player")]
    OutPlayer,
}

/// Errors returned by the service layer.
#[derive(Debug, Error)]
pub enum LeagueError {
    /// A business rule rejected a save.
    #[error("{concept} registration failed: {reason}")]
    Registration {
        /// Concept whose registration was rejected.
        concept: Concept,
        /// Which rule rejected it.
        reason: String,
    },

    /// Storage failed while completing a save.
    #[error("{concept} registration failed: {source}")]
    RegistrationFault {
        /// Concept whose registration was under way.
        concept: Concept,
        /// Underlying storage failure.
        #[source]
        source: StoreError,
    },

    /// Storage failed while reading.
    #[error("{concept} lookup failed: {source}")]
    Find {
        /// Concept that was being read.
        concept: Concept,
        /// Underlying storage failure.
        #[source]
        source: StoreError,
    },
}

impl LeagueError {
    /// Creates a new `Registration` error.
    #[must_use]
    pub fn registration(concept: Concept, reason: impl Into<String>) -> Self {
        Self::Registration {
            concept,
            reason: reason.into(),
        }
    }

    /// Creates a new `RegistrationFault` error.
    #[must_use]
    pub const fn registration_fault(concept: Concept, source: StoreError) -> Self {
        Self::RegistrationFault { concept, source }
    }

    /// Creates a new `Find` error.
    #[must_use]
    pub const fn find(concept: Concept, source: StoreError) -> Self {
        Self::Find { concept, source }
    }

    /// Returns the concept this error is tagged with.
    #[must_use]
    pub const fn concept(&self) -> Concept {
        match self {
            Self::Registration { concept, .. }
            | Self::RegistrationFault { concept, .. }
            | Self::Find { concept, .. } => *concept,
        }
    }
}
