//! Stadium records.

use serde::Serialize;
use time::OffsetDateTime;

use crate::StadiumId;

/// A registered stadium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stadium {
    /// Row identifier assigned on insert.
    id: StadiumId,
    /// Stadium name, unique across the league.
    name: String,
    /// When the stadium was registered.
    #[serde(with = "time::serde::rfc3339")]
    registered_at: OffsetDateTime,
}

impl Stadium {
    /// Assembles a stadium record from its persisted parts.
    #[must_use]
    pub fn new(id: StadiumId, name: impl Into<String>, registered_at: OffsetDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            registered_at,
        }
    }

    /// Returns the stadium's identifier.
    #[must_use]
    pub const fn id(&self) -> StadiumId {
        self.id
    }

    /// Returns the stadium's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the stadium was registered.
    #[must_use]
    pub const fn registered_at(&self) -> OffsetDateTime {
        self.registered_at
    }
}
