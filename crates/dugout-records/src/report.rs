//! Read projections assembled per request.
//!
//! Each list command joins records into one of these shapes, renders it, and
//! drops it.  Nothing here is written back to storage.

use serde::Serialize;
use time::OffsetDateTime;

use crate::{OutPlayer, Player, Team};

/// A team joined with its home stadium's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamWithStadium {
    team: Team,
    stadium_name: String,
}

impl TeamWithStadium {
    /// Pairs a team with its resolved stadium name.
    #[must_use]
    pub fn new(team: Team, stadium_name: impl Into<String>) -> Self {
        Self {
            team,
            stadium_name: stadium_name.into(),
        }
    }

    /// Returns the team record.
    #[must_use]
    pub const fn team(&self) -> &Team {
        &self.team
    }

    /// Returns the home stadium's name.
    #[must_use]
    pub fn stadium_name(&self) -> &str {
        &self.stadium_name
    }
}

/// A player joined with their team's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerWithTeam {
    player: Player,
    team_name: String,
}

impl PlayerWithTeam {
    /// Pairs a player with their resolved team name.
    #[must_use]
    pub fn new(player: Player, team_name: impl Into<String>) -> Self {
        Self {
            player,
            team_name: team_name.into(),
        }
    }

    /// Returns the player record.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the team's name.
    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }
}

/// A released player joined with the reason and date of release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleasedPlayer {
    name: String,
    position: String,
    reason: String,
    #[serde(with = "time::serde::rfc3339")]
    released_at: OffsetDateTime,
}

impl ReleasedPlayer {
    /// Assembles one row of the released-players report.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        reason: impl Into<String>,
        released_at: OffsetDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            reason: reason.into(),
            released_at,
        }
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

/// Outcome of a completed release.
///
/// Carries the player as they now stand (team reference cleared) together
/// with the release record written in the same unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    player: Player,
    record: OutPlayer,
}

impl Release {
    /// Pairs the released player with the new release record.
    #[must_use]
    pub const fn new(player: Player, record: OutPlayer) -> Self {
        Self { player, record }
    }

    /// Returns the released player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the release record.
    #[must_use]
    pub const fn record(&self) -> &OutPlayer {
        &self.record
    }
}

/// One (team, position, player) triple feeding the position pivot.
///
/// The pivot itself is a rendering concern; storage only supplies the
/// triples for active players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionEntry {
    team_name: String,
    position: String,
    player_name: String,
}

impl PositionEntry {
    /// Assembles one pivot input row.
    #[must_use]
    pub fn new(
        team_name: impl Into<String>,
        position: impl Into<String>,
        player_name: impl Into<String>,
    ) -> Self {
        Self {
            team_name: team_name.into(),
            position: position.into(),
            player_name: player_name.into(),
        }
    }

    /// Returns the team's name.
    #[must_use]
    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    /// Returns the field position.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the player's name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }
}
