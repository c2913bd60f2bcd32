//! The facade handed to dispatch.

use dugout_records::{
    Player, PlayerId, PlayerWithTeam, PositionEntry, Release, ReleasedPlayer, Stadium, StadiumId,
    TeamId, TeamWithStadium,
};
use dugout_store::{Database, OutPlayerStore, PlayerStore, StadiumStore, TeamStore};

use crate::{LeagueError, OutPlayerService, PlayerService, StadiumService, TeamService};

/// Owner of the database and the per-concept services.
///
/// Constructed once at startup; command handlers borrow it per request.
/// Every method is a thin delegation to one service, so the console's
/// operation set reads off this impl block.
#[derive(Debug)]
pub struct League {
    db: Database,
    stadiums: StadiumService,
    teams: TeamService,
    players: PlayerService,
    out_players: OutPlayerService,
}

impl League {
    /// Wires the accessors into services around an opened database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        let stadium_store = StadiumStore::new();
        let team_store = TeamStore::new();
        let player_store = PlayerStore::new();
        let out_player_store = OutPlayerStore::new();
        Self {
            db,
            stadiums: StadiumService::new(stadium_store),
            teams: TeamService::new(team_store, stadium_store),
            players: PlayerService::new(player_store, team_store),
            out_players: OutPlayerService::new(player_store, out_player_store),
        }
    }

    /// Returns the underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Registers a stadium.
    ///
    /// # Errors
    ///
    /// See [`StadiumService::register`].
    pub fn register_stadium(&self, name: &str) -> Result<Stadium, LeagueError> {
        self.stadiums.register(&self.db, name)
    }

    /// Returns every stadium in registration order.
    ///
    /// # Errors
    ///
    /// See [`StadiumService::list`].
    pub fn stadiums(&self) -> Result<Vec<Stadium>, LeagueError> {
        self.stadiums.list(&self.db)
    }

    /// Registers a team under an existing stadium.
    ///
    /// # Errors
    ///
    /// See [`TeamService::register`].
    pub fn register_team(
        &self,
        stadium: StadiumId,
        name: &str,
    ) -> Result<TeamWithStadium, LeagueError> {
        self.teams.register(&self.db, stadium, name)
    }

    /// Returns every team with its stadium's name.
    ///
    /// # Errors
    ///
    /// See [`TeamService::list`].
    pub fn teams(&self) -> Result<Vec<TeamWithStadium>, LeagueError> {
        self.teams.list(&self.db)
    }

    /// Registers a player under an existing team.
    ///
    /// # Errors
    ///
    /// See [`PlayerService::register`].
    pub fn register_player(
        &self,
        team: TeamId,
        name: &str,
        position: &str,
    ) -> Result<PlayerWithTeam, LeagueError> {
        self.players.register(&self.db, team, name, position)
    }

    /// Returns one team's active roster.
    ///
    /// # Errors
    ///
    /// See [`PlayerService::roster`].
    pub fn roster(&self, team: TeamId) -> Result<Vec<Player>, LeagueError> {
        self.players.roster(&self.db, team)
    }

    /// Releases an active player in one unit of work.
    ///
    /// # Errors
    ///
    /// See [`OutPlayerService::release`].
    pub fn release_player(&mut self, player: PlayerId, reason: &str) -> Result<Release, LeagueError> {
        self.out_players.release(&mut self.db, player, reason)
    }

    /// Returns the released-players report in release order.
    ///
    /// # Errors
    ///
    /// See [`OutPlayerService::released`].
    pub fn released(&self) -> Result<Vec<ReleasedPlayer>, LeagueError> {
        self.out_players.released(&self.db)
    }

    /// Returns the pivot feed of (team, position, player) triples.
    ///
    /// # Errors
    ///
    /// See [`PlayerService::positions`].
    pub fn positions(&self) -> Result<Vec<PositionEntry>, LeagueError> {
        self.players.positions(&self.db)
    }
}
