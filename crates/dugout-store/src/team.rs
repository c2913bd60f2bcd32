//! Team persistence.

use dugout_records::{StadiumId, Team, TeamId, TeamWithStadium};
use rusqlite::{Connection, OptionalExtension, Row, params};
use time::OffsetDateTime;

use crate::{StoreError, timestamp};

type TeamRow = (i64, i64, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<TeamRow> {
    Ok((
        row.get("id")?,
        row.get("stadium_id")?,
        row.get("name")?,
        row.get("registered_at")?,
    ))
}

fn into_team((id, stadium, name, stamp): TeamRow) -> Result<Team, StoreError> {
    Ok(Team::new(
        TeamId::new(id),
        StadiumId::new(stadium),
        name,
        timestamp::decode(&stamp)?,
    ))
}

/// Accessor for the `team` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamStore;

impl TeamStore {
    /// Creates a team accessor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Inserts a team and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NothingInserted`] when the insert affected no
    /// rows, or [`StoreError::Sqlite`] when the statement fails.
    pub fn save(
        &self,
        conn: &Connection,
        stadium: StadiumId,
        name: &str,
        registered_at: OffsetDateTime,
    ) -> Result<Team, StoreError> {
        let stamp = timestamp::encode(registered_at)?;
        let affected = conn.execute(
            "INSERT INTO team (stadium_id, name, registered_at) VALUES (?1, ?2, ?3)",
            params![stadium.get(), name, stamp],
        )?;
        if affected == 0 {
            return Err(StoreError::nothing_inserted("team"));
        }
        Ok(Team::new(
            TeamId::new(conn.last_insert_rowid()),
            stadium,
            name,
            registered_at,
        ))
    }

    /// Returns every team joined with its stadium's name, in id order.
    ///
    /// Teams whose stadium row has gone missing are not invented: the join
    /// is inner, matching the service rule that a team's stadium exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_all_with_stadiums(
        &self,
        conn: &Connection,
    ) -> Result<Vec<TeamWithStadium>, StoreError> {
        let mut stmt = conn.prepare(
            "SELECT t.id, t.stadium_id, t.name, t.registered_at, s.name AS stadium_name
             FROM team t JOIN stadium s ON s.id = t.stadium_id
             ORDER BY t.id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((read_row(row)?, row.get::<_, String>("stadium_name")?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter()
            .map(|(team_row, stadium_name)| {
                Ok(TeamWithStadium::new(into_team(team_row)?, stadium_name))
            })
            .collect()
    }

    /// Looks a team up by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_by_id(&self, conn: &Connection, id: TeamId) -> Result<Option<Team>, StoreError> {
        let mut stmt = conn
            .prepare("SELECT id, stadium_id, name, registered_at FROM team WHERE id = ?1")?;
        let row = stmt
            .query_row(params![id.get()], |row| read_row(row))
            .optional()?;
        row.map(into_team).transpose()
    }

    /// Looks a team up by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_by_name(&self, conn: &Connection, name: &str) -> Result<Option<Team>, StoreError> {
        let mut stmt = conn
            .prepare("SELECT id, stadium_id, name, registered_at FROM team WHERE name = ?1")?;
        let row = stmt
            .query_row(params![name], |row| read_row(row))
            .optional()?;
        row.map(into_team).transpose()
    }
}
