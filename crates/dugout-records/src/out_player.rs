//! Release records.

use serde::Serialize;
use time::OffsetDateTime;

use crate::{OutPlayerId, PlayerId};

/// The historical record of one player's release.
///
/// At most one release record exists per player; the player row keeps the
/// name and position while this record keeps the reason and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutPlayer {
    id: OutPlayerId,
    player: PlayerId,
    reason: String,
    #[serde(with = "time::serde::rfc3339")]
    released_at: OffsetDateTime,
}

impl OutPlayer {
    /// Assembles a release record from its persisted parts.
    #[must_use]
    pub fn new(
        id: OutPlayerId,
        player: PlayerId,
        reason: impl Into<String>,
        released_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            player,
            reason: reason.into(),
            released_at,
        }
    }

    /// Returns the release record's identifier.
    #[must_use]
    pub const fn id(&self) -> OutPlayerId {
        self.id
    }

    /// Returns the released player's identifier.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    /// Returns why the player was released.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns when the player was released.
    #[must_use]
    pub const fn released_at(&self) -> OffsetDateTime {
        self.released_at
    }
}
