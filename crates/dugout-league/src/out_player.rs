//! Release handling: the one-way transition out of a team.

use dugout_records::{PlayerId, Release, ReleasedPlayer};
use dugout_store::{Database, OutPlayerStore, PlayerStore, StoreError};
use time::OffsetDateTime;
use tracing::info;

use crate::{Concept, LeagueError, SERVICE_TARGET};

/// Release registration and the released-players report.
#[derive(Debug, Clone, Copy)]
pub struct OutPlayerService {
    players: PlayerStore,
    out_players: OutPlayerStore,
}

impl OutPlayerService {
    /// Wires the service to its accessors.
    #[must_use]
    pub const fn new(players: PlayerStore, out_players: OutPlayerStore) -> Self {
        Self {
            players,
            out_players,
        }
    }

    /// Releases an active player.
    ///
    /// The team-reference clear and the release record are written in one
    /// transaction: a failure on either side rolls both back, so a player
    /// can never be off their roster without a release record or the other
    /// way round.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Registration`] when the reason is blank, the
    /// player does not exist, or the player is already released, or
    /// [`LeagueError::RegistrationFault`] when storage fails underneath the
    /// unit of work.
    pub fn release(
        &self,
        db: &mut Database,
        player: PlayerId,
        reason: &str,
    ) -> Result<Release, LeagueError> {
        let fault = |source: StoreError| LeagueError::registration_fault(Concept::OutPlayer, source);
        if reason.trim().is_empty() {
            return Err(LeagueError::registration(
                Concept::OutPlayer,
                "release reason must not be blank",
            ));
        }
        let found = self
            .players
            .find_by_id(db.connection(), player)
            .map_err(fault)?
            .ok_or_else(|| {
                LeagueError::registration(
                    Concept::OutPlayer,
                    format!("player #{player} does not exist"),
                )
            })?;
        if !found.is_active() {
            return Err(LeagueError::registration(
                Concept::OutPlayer,
                format!("player #{player} is already released"),
            ));
        }
        let released_at = OffsetDateTime::now_utc();
        let tx = db.transaction().map_err(fault)?;
        self.players.clear_team(&tx, player).map_err(fault)?;
        let record = self
            .out_players
            .save(&tx, player, reason, released_at)
            .map_err(fault)?;
        tx.commit().map_err(StoreError::from).map_err(fault)?;
        info!(target: SERVICE_TARGET, player = %player, reason, "player released");
        Ok(Release::new(found.released(), record))
    }

    /// Returns the released-players report in release order.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueError::Find`] when storage fails underneath the read.
    pub fn released(&self, db: &Database) -> Result<Vec<ReleasedPlayer>, LeagueError> {
        self.out_players
            .find_all_released(db.connection())
            .map_err(|source| LeagueError::find(Concept::OutPlayer, source))
    }
}
