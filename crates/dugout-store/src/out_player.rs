//! Release-record persistence.

use dugout_records::{OutPlayer, OutPlayerId, PlayerId, ReleasedPlayer};
use rusqlite::{Connection, params};
use time::OffsetDateTime;

use crate::{StoreError, timestamp};

/// Accessor for the `out_player` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutPlayerStore;

impl OutPlayerStore {
    /// Creates a release-record accessor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Inserts a release record and returns it.
    ///
    /// The table's `UNIQUE(player_id)` constraint makes a second release of
    /// the same player fail here even if the service check was bypassed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NothingInserted`] when the insert affected no
    /// rows, or [`StoreError::Sqlite`] when the statement fails (including
    /// the uniqueness violation).
    pub fn save(
        &self,
        conn: &Connection,
        player: PlayerId,
        reason: &str,
        released_at: OffsetDateTime,
    ) -> Result<OutPlayer, StoreError> {
        let stamp = timestamp::encode(released_at)?;
        let affected = conn.execute(
            "INSERT INTO out_player (player_id, reason, released_at) VALUES (?1, ?2, ?3)",
            params![player.get(), reason, stamp],
        )?;
        if affected == 0 {
            return Err(StoreError::nothing_inserted("out_player"));
        }
        Ok(OutPlayer::new(
            OutPlayerId::new(conn.last_insert_rowid()),
            player,
            reason,
            released_at,
        ))
    }

    /// Returns the released-players report in release order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_all_released(&self, conn: &Connection) -> Result<Vec<ReleasedPlayer>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT p.name, p.position, o.reason, o.released_at
             FROM out_player o JOIN player p ON p.id = o.player_id
             ORDER BY o.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>("name")?,
                    row.get::<_, String>("position")?,
                    row.get::<_, String>("reason")?,
                    row.get::<_, String>("released_at")?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter()
            .map(|(name, position, reason, stamp)| {
                Ok(ReleasedPlayer::new(
                    name,
                    position,
                    reason,
                    timestamp::decode(&stamp)?,
                ))
            })
            .collect()
    }
}
