//! Stadium persistence.

use dugout_records::{Stadium, StadiumId};
use rusqlite::{Connection, OptionalExtension, Row, params};
use time::OffsetDateTime;

use crate::{StoreError, timestamp};

type StadiumRow = (i64, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<StadiumRow> {
    Ok((row.get("id")?, row.get("name")?, row.get("registered_at")?))
}

fn into_stadium((id, name, stamp): StadiumRow) -> Result<Stadium, StoreError> {
    Ok(Stadium::new(
        StadiumId::new(id),
        name,
        timestamp::decode(&stamp)?,
    ))
}

/// Accessor for the `stadium` table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StadiumStore;

impl StadiumStore {
    /// Creates a stadium accessor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Inserts a stadium and returns the persisted record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NothingInserted`] when the insert affected no
    /// rows, or [`StoreError::Sqlite`] when the statement fails.
    pub fn save(
        &self,
        conn: &Connection,
        name: &str,
        registered_at: OffsetDateTime,
    ) -> Result<Stadium, StoreError> {
        let stamp = timestamp::encode(registered_at)?;
        let affected = conn.execute(
            "INSERT INTO stadium (name, registered_at) VALUES (?1, ?2)",
            params![name, stamp],
        )?;
        if affected == 0 {
            return Err(StoreError::nothing_inserted("stadium"));
        }
        Ok(Stadium::new(
            StadiumId::new(conn.last_insert_rowid()),
            name,
            registered_at,
        ))
    }

    /// Returns every stadium in id order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_all(&self, conn: &Connection) -> Result<Vec<Stadium>, StoreError> {
        let mut stmt = conn.prepare("SELECT id, name, registered_at FROM stadium ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| read_row(row))?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(into_stadium).collect()
    }

    /// Looks a stadium up by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_by_id(
        &self,
        conn: &Connection,
        id: StadiumId,
    ) -> Result<Option<Stadium>, StoreError> {
        let mut stmt = conn.prepare("SELECT id, name, registered_at FROM stadium WHERE id = ?1")?;
        let row = stmt
            .query_row(params![id.get()], |row| read_row(row))
            .optional()?;
        row.map(into_stadium).transpose()
    }

    /// Looks a stadium up by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when the query fails, or
    /// [`StoreError::Timestamp`] when a stored timestamp is unreadable.
    pub fn find_by_name(
        &self,
        conn: &Connection,
        name: &str,
    ) -> Result<Option<Stadium>, StoreError> {
        let mut stmt =
            conn.prepare("SELECT id, name, registered_at FROM stadium WHERE name = ?1")?;
        let row = stmt
            .query_row(params![name], |row| read_row(row))
            .optional()?;
        row.map(into_stadium).transpose()
    }
}
