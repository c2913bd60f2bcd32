//! Business rules for the dugout console.
//!
//! One service per domain concept sits between dispatch and storage:
//!
//! - [`StadiumService`] - stadium names are unique
//! - [`TeamService`] - a team's stadium must exist, team names are unique
//! - [`PlayerService`] - a player's team must exist
//! - [`OutPlayerService`] - release requires an existing, active player and
//!   commits the team-reference clear and the release record as one unit of
//!   work
//!
//! [`League`] is the composition root's handle: it owns the
//! [`Database`](dugout_store::Database), wires the accessors into the
//! services at construction, and exposes one method per console operation.
//! Failures carry the affected [`Concept`] so the console can report
//! "team registration failed" rather than a bare storage message.

mod error;
mod league;
mod out_player;
mod player;
mod stadium;
mod team;

pub use error::{Concept, LeagueError};
pub use league::League;
pub use out_player::OutPlayerService;
pub use player::PlayerService;
pub use stadium::StadiumService;
pub use team::TeamService;

/// Log target for service-level events.
const SERVICE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::service");

#[cfg(test)]
mod tests;
