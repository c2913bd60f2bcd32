//! Shared fixtures for service tests.

use dugout_records::{PlayerId, TeamId};
use dugout_store::Database;
use rstest::fixture;

use crate::{Concept, League, LeagueError};

#[fixture]
pub(super) fn league() -> League {
    League::new(Database::open_in_memory().expect("open in-memory database"))
}

/// Seeds one stadium (Jamsil), one team (Doosan), and one active player
/// (Kim, pitcher); returns the team and player ids.
pub(super) fn seed_roster(league: &League) -> (TeamId, PlayerId) {
    let stadium = league.register_stadium("Jamsil").expect("register stadium");
    let team = league
        .register_team(stadium.id(), "Doosan")
        .expect("register team");
    let player = league
        .register_player(team.team().id(), "Kim", "pitcher")
        .expect("register player");
    (team.team().id(), player.player().id())
}

#[track_caller]
pub(super) fn assert_registration_failure(err: &LeagueError, concept: Concept) {
    assert!(
        matches!(err, LeagueError::Registration { .. }),
        "expected a registration failure, got {err:?}"
    );
    assert_eq!(err.concept(), concept);
}
