//! Team registration and listing.

use dugout_records::{StadiumId, TeamWithStadium};
use dugout_store::{Database, StadiumStore, StoreError, TeamStore};
use time::OffsetDateTime;
use tracing::info;

use crate::{Concept, LeagueError, SERVICE_TARGET};

/// Registration and listing of teams.
///
/// Holds the stadium accessor as well: registering a team resolves its home
/// stadium, both to enforce existence and to report the stadium's name back.
#[derive(Debug, Clone, Copy)]
pub struct TeamService {
    teams: TeamStore,
    stadiums: StadiumStore,
}

impl TeamService {
    /// Wires the service to its accessors.
    #[must_use]
    pub const fn new(teams: TeamStore, stadiums: StadiumStore) -> Self {
        Self { teams, stadiums }
    }

    /// Registers a team with a league-unique name under an existing stadium.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Registration`] when the name is blank or
    /// already taken or the stadium does not exist, or
    /// [`LeagueError::RegistrationFault`] when storage fails underneath the
    /// save.
    pub fn register(
        &self,
        db: &Database,
        stadium: StadiumId,
        name: &str,
    ) -> Result<TeamWithStadium, LeagueError> {
        let fault = |source: StoreError| LeagueError::registration_fault(Concept::Team, source);
        if name.trim().is_empty() {
            return Err(LeagueError::registration(
                Concept::Team,
                "team name must not be blank",
            ));
        }
        let conn = db.connection();
        let home = self
            .stadiums
            .find_by_id(conn, stadium)
            .map_err(fault)?
            .ok_or_else(|| {
                LeagueError::registration(
                    Concept::Team,
                    format!("stadium #{stadium} does not exist"),
                )
            })?;
        if self
            .teams
            .find_by_name(conn, name)
            .map_err(fault)?
            .is_some()
        {
            return Err(LeagueError::registration(
                Concept::Team,
                format!("team {name:?} is already registered"),
            ));
        }
        let team = self
            .teams
            .save(conn, stadium, name, OffsetDateTime::now_utc())
            .map_err(fault)?;
        info!(target: SERVICE_TARGET, id = %team.id(), name, stadium = %stadium, "team registered");
        Ok(TeamWithStadium::new(team, home.name()))
    }

    /// Returns every team with its stadium's name, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Find`] when storage fails underneath the read.
    pub fn list(&self, db: &Database) -> Result<Vec<TeamWithStadium>, LeagueError> {
        self.teams
            .find_all_with_stadiums(db.connection())
            .map_err(|source| LeagueError::find(Concept::Team, source))
    }
}
