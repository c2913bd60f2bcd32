//! Error types for storage operations.

use thiserror::Error;

/// Errors returned by the storage layer.
///
/// Everything here is a fault rather than a business outcome: a missing row
/// on lookup is `Ok(None)`, not an error.  The service layer decides what a
/// fault means for the request that triggered it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying SQLite call failed.
    #[error("sqlite failure: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// An insert reported zero affected rows.
    #[error("insert into {table} affected no rows")]
    NothingInserted {
        /// Table the insert targeted.
        table: &'static str,
    },

    /// An update reported zero affected rows.
    #[error("update of {table} affected no rows")]
    NothingUpdated {
        /// Table the update targeted.
        table: &'static str,
    },

    /// A stored timestamp did not parse back as RFC 3339.
    #[error("stored timestamp {value:?} is not RFC 3339")]
    Timestamp {
        /// The text found in the column.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: time::error::Parse,
    },

    /// A timestamp could not be encoded for storage.
    #[error("timestamp could not be encoded: {0}")]
    TimestampEncode(#[from] time::error::Format),

    /// The database file carries a schema version this build cannot read.
    #[error("database schema version {found} is not supported (expected {supported})")]
    SchemaVersion {
        /// Version stamped in the file's `user_version` pragma.
        found: i64,
        /// Version this build reads and writes.
        supported: i64,
    },
}

impl StoreError {
    /// Creates a new `NothingInserted` error.
    #[must_use]
    pub const fn nothing_inserted(table: &'static str) -> Self {
        Self::NothingInserted { table }
    }

    /// Creates a new `NothingUpdated` error.
    #[must_use]
    pub const fn nothing_updated(table: &'static str) -> Self {
        Self::NothingUpdated { table }
    }

    /// Creates a new `Timestamp` error.
    #[must_use]
    pub fn bad_timestamp(value: impl Into<String>, source: time::error::Parse) -> Self {
        Self::Timestamp {
            value: value.into(),
            source,
        }
    }

    /// Creates a new `SchemaVersion` error.
    #[must_use]
    pub const fn schema_version(found: i64, supported: i64) -> Self {
        Self::SchemaVersion { found, supported }
    }
}
