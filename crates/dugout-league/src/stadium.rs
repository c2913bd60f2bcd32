//! Stadium registration and listing.

use dugout_records::Stadium;
use dugout_store::{Database, StadiumStore, StoreError};
use time::OffsetDateTime;
use tracing::info;

use crate::{Concept, LeagueError, SERVICE_TARGET};

/// Registration and listing of stadiums.
#[derive(Debug, Clone, Copy)]
pub struct StadiumService {
    stadiums: StadiumStore,
}

impl StadiumService {
    /// Wires the service to its accessor.
    #[must_use]
    pub const fn new(stadiums: StadiumStore) -> Self {
        Self { stadiums }
    }

    /// Registers a stadium with a league-unique name.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Registration`] when the name is blank or
    /// already taken, or [`LeagueError::RegistrationFault`] when storage
    /// fails underneath the save.
    pub fn register(&self, db: &Database, name: &str) -> Result<Stadium, LeagueError> {
        let fault = |source: StoreError| LeagueError::registration_fault(Concept::Stadium, source);
        if name.trim().is_empty() {
            return Err(LeagueError::registration(
                Concept::Stadium,
                "stadium name must not be blank",
            ));
        }
        let conn = db.connection();
        if self
            .stadiums
            .find_by_name(conn, name)
            .map_err(fault)?
            .is_some()
        {
            return Err(LeagueError::registration(
                Concept::Stadium,
                format!("stadium {name:?} is already registered"),
            ));
        }
        let stadium = self
            .stadiums
            .save(conn, name, OffsetDateTime::now_utc())
            .map_err(fault)?;
        info!(target: SERVICE_TARGET, id = %stadium.id(), name, "stadium registered");
        Ok(stadium)
    }

    /// Returns every stadium in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Find`] when storage fails underneath the read.
    pub fn list(&self, db: &Database) -> Result<Vec<Stadium>, LeagueError> {
        self.stadiums
            .find_all(db.connection())
            .map_err(|source| LeagueError::find(Concept::Stadium, source))
    }
}
