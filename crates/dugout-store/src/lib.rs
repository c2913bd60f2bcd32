//! SQLite persistence for the dugout console.
//!
//! [`Database`] owns the single process-wide connection, applies the schema
//! on open, and stamps it with `PRAGMA user_version` so a file from a newer
//! build is refused instead of misread.  One accessor per record type issues
//! parameterized SQL against a borrowed connection:
//!
//! - [`StadiumStore`], [`TeamStore`], [`PlayerStore`], [`OutPlayerStore`]
//!
//! Accessors hold no state and no business rules.  Referential and
//! uniqueness checks belong to `dugout-league`; the schema deliberately
//! carries no foreign keys.  The released state is stored as a sentinel team
//! id inside this crate and never crosses the crate boundary: callers see
//! `Option<TeamId>`.

mod database;
mod error;
mod out_player;
mod player;
mod stadium;
mod team;
mod timestamp;

pub use database::{Database, SCHEMA_VERSION};
pub use error::StoreError;
pub use out_player::OutPlayerStore;
pub use player::PlayerStore;
pub use stadium::StadiumStore;
pub use team::TeamStore;

#[cfg(test)]
mod tests;
