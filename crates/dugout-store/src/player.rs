//! Player persistence and the released-state sentinel.

use dugout_records::{Player, PlayerId, PositionEntry, TeamId};
use rusqlite::{Connection, OptionalExtension, Row, params};
use time::OffsetDateTime;

use crate::{StoreError, timestamp};

/// Column value marking a released player.  Never leaves this module;
/// callers see `Option<TeamId>`.
const NO_TEAM_SENTINEL: i64 = -1;

type PlayerRow = (i64, i64, String, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<PlayerRow> {
    Ok((
        row.get("id")?,
        row.get("team_id")?,
        row.get("name")?,
        row.get("position")?,
        row.get("registered_at")?,
    ))
}

fn into_player((id, raw_team, name, position, stamp): PlayerRow) -> Result<Player, StoreError> {
    let team = if raw_team == NO_TEAM_SENTINEL {
        None
    } else {
        Some(TeamId::new(raw_team))
    };
    Ok(Player::new(
        PlayerId::new(id),
        team,
        name,
        position,
        timestamp::decode(&stamp)?,
    ))
}

/// Accessor for the `player` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerStore;

impl PlayerStore {
    /// Creates a player accessor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Inserts an active player and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NothingInserted`] when the insert affected no
    /// rows, or [`StoreError::Sqlite`] when the statement fails.
    pub fn save(
        &self,
        conn: &Connection,
        team: TeamId,
        name: &str,
        position: &str,
        registered_at: OffsetDateTime,
    ) -> Result<Player, StoreError> {
        let stamp = timestamp::encode(registered_at)?;
        let affected = conn.execute(
            "INSERT INTO player (team_id, name, position, registered_at) VALUES (?1, ?2, ?3, ?4)",
            params![team.get(), name, position, stamp],
        )?;
        if affected == 0 {
            return Err(StoreError::nothing_inserted("player"));
        }
        Ok(Player::new(
            PlayerId::new(conn.last_insert_rowid()),
            Some(team),
            name,
            position,
            registered_at,
        ))
    }

    /// Looks a player up by id, released or not.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_by_id(
        &self,
        conn: &Connection,
        id: PlayerId,
    ) -> Result<Option<Player>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, team_id, name, position, registered_at FROM player WHERE id = ?1",
        )?;
        let row = stmt
            .query_row(params![id.get()], |row| read_row(row))
            .optional()?;
        row.map(into_player).transpose()
    }

    /// Returns the active players of one team in id order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_by_team(&self, conn: &Connection, team: TeamId) -> Result<Vec<Player>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT id, team_id, name, position, registered_at
             FROM player WHERE team_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![team.get()], |row| read_row(row))?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(into_player).collect()
    }

    /// Clears a player's team reference, marking them released.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NothingUpdated`] when no row matched the id
    /// (zero affected rows is the failure condition), or
    /// [`StoreError::Sqlite`] when the statement fails.
    pub fn clear_team(&self, conn: &Connection, id: PlayerId) -> Result<(), StoreError> {
        let affected = conn.execute(
            "UPDATE player SET team_id = ?1 WHERE id = ?2",
            params![NO_TEAM_SENTINEL, id.get()],
        )?;
        if affected == 0 {
            return Err(StoreError::nothing_updated("player"));
        }
        Ok(())
    }

    /// Returns one (team, position, player) triple per active player.
    ///
    /// Released players carry the sentinel team id and fall out of the
    /// inner join.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails.
    pub fn position_entries(&self, conn: &Connection) -> Result<Vec<PositionEntry>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT t.name AS team_name, p.position, p.name AS player_name
             FROM player p JOIN team t ON t.id = p.team_id
             ORDER BY t.name, p.position, p.name",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(PositionEntry::new(
                    row.get::<_, String>("team_name")?,
                    row.get::<_, String>("position")?,
                    row.get::<_, String>("player_name")?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
