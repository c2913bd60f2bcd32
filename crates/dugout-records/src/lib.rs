//! Domain records for the dugout console.
//!
//! The types here are plain data: the storage layer assembles them from
//! database rows and the service layer hands them to rendering.  Records
//! never enforce business rules themselves; uniqueness and referential
//! checks live in `dugout-league`.
//!
//! # Core Types
//!
//! - [`Stadium`], [`Team`], [`Player`], [`OutPlayer`] - persisted records,
//!   identified by the id newtypes in this crate
//! - [`TeamWithStadium`], [`PlayerWithTeam`], [`Release`],
//!   [`ReleasedPlayer`], [`PositionEntry`] - read projections assembled per
//!   request and discarded after rendering
//!
//! A released player keeps their [`Player`] row but loses the team
//! reference: [`Player::team`] returns `None`, and the matching
//! [`OutPlayer`] record preserves when and why the player left.

mod id;
mod out_player;
mod player;
mod report;
mod stadium;
mod team;

pub use id::{OutPlayerId, PlayerId, StadiumId, TeamId};
pub use out_player::OutPlayer;
pub use player::Player;
pub use report::{PlayerWithTeam, PositionEntry, Release, ReleasedPlayer, TeamWithStadium};
pub use stadium::Stadium;
pub use team::Team;

#[cfg(test)]
mod tests;
