//! Player registration, rosters, and the position pivot feed.

use dugout_records::{Player, PlayerWithTeam, PositionEntry, TeamId};
use dugout_store::{Database, PlayerStore, StoreError, TeamStore};
use time::OffsetDateTime;
use tracing::info;

use crate::{Concept, LeagueError, SERVICE_TARGET};

/// Registration and listing of players.
#[derive(Debug, Clone, Copy)]
pub struct PlayerService {
    players: PlayerStore,
    teams: TeamStore,
}

impl PlayerService {
    /// Wires the service to its accessors.
    #[must_use]
    pub const fn new(players: PlayerStore, teams: TeamStore) -> Self {
        Self { players, teams }
    }

    /// Registers a player under an existing team.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Registration`] when the name or position is
    /// blank or the team does not exist, or
    /// [`LeagueError::RegistrationFault`] when storage fails underneath the
    /// save.
    pub fn register(
        &self,
        db: &Database,
        team: TeamId,
        name: &str,
        position: &str,
    ) -> Result<PlayerWithTeam, LeagueError> {
        let fault = |source: StoreError| LeagueError::registration_fault(Concept::Player, source);
        if name.trim().is_empty() {
            return Err(LeagueError::registration(
                Concept::Player,
                "player name must not be blank",
            ));
        }
        if position.trim().is_empty() {
            return Err(LeagueError::registration(
                Concept::Player,
                "player position must not be blank",
            ));
        }
        let conn = db.connection();
        let home = self
            .teams
            .find_by_id(conn, team)
            .map_err(fault)?
            .ok_or_else(|| {
                LeagueError::registration(Concept::Player, format!("team #{team} does not exist"))
            })?;
        let player = self
            .players
            .save(conn, team, name, position, OffsetDateTime::now_utc())
            .map_err(fault)?;
        info!(target: SERVICE_TARGET, id = %player.id(), name, team = %team, "player registered");
        Ok(PlayerWithTeam::new(player, home.name()))
    }

    /// Returns the active players of one team in registration order.
    ///
    /// An unknown team id yields an empty roster; reads do not validate
    /// referential existence.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Find`] when storage fails underneath the read.
    pub fn roster(&self, db: &Database, team: TeamId) -> Result<Vec<Player>, LeagueError> {
        self.players
            .find_by_team(db.connection(), team)
            .map_err(|source| LeagueError::find(Concept::Player, source))
    }

    /// Returns one (team, position, player) triple per active player.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Find`] when storage fails underneath the read.
    pub fn positions(&self, db: &Database) -> Result<Vec<PositionEntry>, LeagueError> {
        self.players
            .position_entries(db.connection())
            .map_err(|source| LeagueError::find(Concept::Player, source))
    }
}
