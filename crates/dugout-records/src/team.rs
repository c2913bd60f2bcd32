//! Team records.

use serde::Serialize;
use time::OffsetDateTime;

use crate::{StadiumId, TeamId};

/// A registered team and its home stadium reference.
///
/// The stadium reference is kept as a bare id; resolving it to a name is a
/// read-time join (see `TeamWithStadium`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    id: TeamId,
    stadium: StadiumId,
    name: String,
    #[serde(with = "time::serde::rfc3339")]
    registered_at: OffsetDateTime,
}

impl Team {
    /// Assembles a team record from its persisted parts.
    #[must_use]
    pub fn new(
        id: TeamId,
        stadium: StadiumId,
        name: impl Into<String>,
        registered_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            stadium,
            name: name.into(),
            registered_at,
        }
    }

    /// Returns the team's identifier.
    #[must_use]
    pub const fn id(&self) -> TeamId {
        self.id
    }

    /// Returns the team's home stadium.
    #[must_use]
    pub const fn stadium(&self) -> StadiumId {
        self.stadium
    }

    /// Returns the team's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the team was registered.
    #[must_use]
    pub const fn registered_at(&self) -> OffsetDateTime {
        self.registered_at
    }
}
