//! Player records and the active/released state.

use serde::Serialize;
use time::OffsetDateTime;

use crate::{PlayerId, TeamId};

/// A registered player.
///
/// A player is *active* while the team reference is present and *released*
/// once it has been cleared.  Release is one-way: records never move back to
/// a team.
///
/// # Example
///
/// ```
/// use dugout_records::{Player, PlayerId, TeamId};
/// use time::OffsetDateTime;
///
/// let signed = Player::new(
///     PlayerId::new(1),
///     Some(TeamId::new(3)),
///     "Kim",
///     "pitcher",
///     OffsetDateTime::UNIX_EPOCH,
/// );
/// assert!(signed.is_active());
/// assert!(!signed.released().is_active());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    id: PlayerId,
    team: Option<TeamId>,
    name: String,
    position: String,
    #[serde(with = "time::serde::rfc3339")]
    registered_at: OffsetDateTime,
}

impl Player {
    /// Assembles a player record from its persisted parts.
    #[must_use]
    pub fn new(
        id: PlayerId,
        team: Option<TeamId>,
        name: impl Into<String>,
        position: impl Into<String>,
        registered_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            team,
            name: name.into(),
            position: position.into(),
            registered_at,
        }
    }

    /// Returns the player's identifier.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's team, or `None` once released.
    #[must_use]
    pub const fn team(&self) -> Option<TeamId> {
        self.team
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's field position.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns when the player was registered.
    #[must_use]
    pub const fn registered_at(&self) -> OffsetDateTime {
        self.registered_at
    }

    /// Returns `true` while the player still belongs to a team.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.team.is_some()
    }

    /// Returns the same record with the team reference cleared.
    #[must_use]
    pub fn released(self) -> Self {
        Self { team: None, ..self }
    }
}
