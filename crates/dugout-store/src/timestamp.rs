//! RFC 3339 round-trip for stored timestamps.
//!
//! Timestamps live in `TEXT` columns so the file stays inspectable with the
//! sqlite3 shell.  A stored value that no longer parses is a data-integrity
//! fault and surfaces as [`StoreError::Timestamp`].

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::StoreError;

pub(crate) fn encode(stamp: OffsetDateTime) -> Result<String, StoreError> {
    stamp.format(&Rfc3339).map_err(StoreError::from)
}

pub(crate) fn decode(value: &str) -> Result<OffsetDateTime, StoreError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|source| StoreError::bad_timestamp(value, source))
}
