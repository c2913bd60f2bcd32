//! Connection ownership and schema bootstrap.

use std::path::Path;

use rusqlite::{Connection, Transaction};

use crate::StoreError;

/// Schema version stamped into `PRAGMA user_version` on first open.
pub const SCHEMA_VERSION: i64 = 1;

/// The tables this build reads and writes.
///
/// No foreign keys and no uniqueness constraints on names: referential and
/// uniqueness rules are enforced by the service layer.  `out_player` keeps
/// `UNIQUE(player_id)` because release is a one-way transition and a second
/// release record for the same player can only be a fault.
const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS stadium (
  id            INTEGER PRIMARY KEY AUTOINCREMENT,
  name          TEXT NOT NULL,
  registered_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS team (
  id            INTEGER PRIMARY KEY AUTOINCREMENT,
  stadium_id    INTEGER NOT NULL,
  name          TEXT NOT NULL,
  registered_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS player (
  id            INTEGER PRIMARY KEY AUTOINCREMENT,
  team_id       INTEGER NOT NULL,
  name          TEXT NOT NULL,
  position      TEXT NOT NULL,
  registered_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS out_player (
  id          INTEGER PRIMARY KEY AUTOINCREMENT,
  player_id   INTEGER NOT NULL UNIQUE,
  reason      TEXT NOT NULL,
  released_at TEXT NOT NULL
);
";

/// Owner of the process-wide SQLite connection.
///
/// Opening a database applies the schema if the file is fresh and verifies
/// the `user_version` stamp otherwise.  Accessors borrow the connection per
/// call; the release unit of work borrows it mutably for a transaction.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (and if necessary initialises) the database at `path`.
    ///
    /// The special path `:memory:` opens a transient in-memory database, as
    /// the sqlite shell does.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::SchemaVersion`] when the file carries a
    /// `user_version` this build does not support, or
    /// [`StoreError::Sqlite`] when opening or initialising fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        bootstrap(&conn)?;
        Ok(Self { conn })
    }

    /// Opens a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when initialisation fails.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        bootstrap(&conn)?;
        Ok(Self { conn })
    }

    /// Returns the underlying connection for read and single-statement use.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Begins a transaction that rolls back on drop unless committed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Sqlite`] when SQLite refuses to begin.
    pub fn transaction(&mut self) -> Result<Transaction<'_>, StoreError> {
        Ok(self.conn.transaction()?)
    }
}

fn bootstrap(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=NORMAL;
        ",
    )?;
    let found: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    match found {
        0 => {
            conn.execute_batch(SCHEMA)?;
            conn.execute_batch(&format!("PRAGMA user_version={SCHEMA_VERSION};"))?;
            Ok(())
        }
        v if v == SCHEMA_VERSION => Ok(()),
        v => Err(StoreError::schema_version(v, SCHEMA_VERSION)),
    }
}
