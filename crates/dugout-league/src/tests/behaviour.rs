//! Service behaviour: registration rules and the release unit of work.

use dugout_records::{PlayerId, StadiumId, TeamId};
use dugout_store::OutPlayerStore;
use rstest::rstest;
use time::macros::datetime;

use crate::{Concept, League, LeagueError};

use super::support::{assert_registration_failure, league, seed_roster};

#[rstest]
fn stadium_registration_assigns_fresh_increasing_ids(league: League) {
    let first = league.register_stadium("Jamsil").expect("first stadium");
    let second = league.register_stadium("Gocheok").expect("second stadium");
    assert!(second.id() > first.id());
}

#[rstest]
fn duplicate_stadium_name_is_refused(league: League) {
    league.register_stadium("Jamsil").expect("first stadium");
    let err = league.register_stadium("Jamsil").expect_err("duplicate");
    assert_registration_failure(&err, Concept::Stadium);
}

#[rstest]
fn blank_stadium_name_is_refused(league: League) {
    let err = league.register_stadium("   ").expect_err("blank name");
    assert_registration_failure(&err, Concept::Stadium);
}

#[rstest]
fn team_registration_requires_an_existing_stadium(league: League) {
    let err = league
        .register_team(StadiumId::new(7), "Doosan")
        .expect_err("no stadium");
    assert_registration_failure(&err, Concept::Team);
    assert!(
        league.teams().expect("team report").is_empty(),
        "a refused registration must write nothing"
    );
}

#[rstest]
fn team_registration_reports_the_resolved_stadium_name(league: League) {
    let stadium = league.register_stadium("Jamsil").expect("stadium");
    let team = league.register_team(stadium.id(), "Doosan").expect("team");
    assert_eq!(team.team().name(), "Doosan");
    assert_eq!(team.stadium_name(), "Jamsil");
}

#[rstest]
fn duplicate_team_name_is_refused(league: League) {
    let stadium = league.register_stadium("Jamsil").expect("stadium");
    league.register_team(stadium.id(), "Doosan").expect("team");
    let err = league
        .register_team(stadium.id(), "Doosan")
        .expect_err("duplicate");
    assert_registration_failure(&err, Concept::Team);
}

#[rstest]
fn player_registration_requires_an_existing_team(league: League) {
    let err = league
        .register_player(TeamId::new(7), "Kim", "pitcher")
        .expect_err("no team");
    assert_registration_failure(&err, Concept::Player);
}

#[rstest]
fn player_registration_reports_the_resolved_team_name(league: League) {
    let (team, _) = seed_roster(&league);
    let report = league
        .register_player(team, "Park", "catcher")
        .expect("second player");
    assert_eq!(report.team_name(), "Doosan");
    assert!(report.player().is_active());
}

#[rstest]
fn roster_of_unknown_team_is_empty(league: League) {
    let roster = league.roster(TeamId::new(9)).expect("roster");
    assert!(roster.is_empty());
}

#[rstest]
fn fresh_league_reports_empty_collections(league: League) {
    assert!(league.stadiums().expect("stadiums").is_empty());
    assert!(league.teams().expect("teams").is_empty());
    assert!(league.released().expect("released report").is_empty());
    assert!(league.positions().expect("position feed").is_empty());
}

#[rstest]
fn release_moves_the_player_off_roster_and_into_the_report(mut league: League) {
    let (team, player) = seed_roster(&league);
    let outcome = league.release_player(player, "waived").expect("release");
    assert!(!outcome.player().is_active());
    assert_eq!(outcome.record().player(), player);
    assert_eq!(outcome.record().reason(), "waived");
    assert!(league.roster(team).expect("roster").is_empty());
    let released = league.released().expect("released report");
    assert_eq!(released.len(), 1);
    assert_eq!(released.first().expect("released row").name(), "Kim");
    assert!(league.positions().expect("position feed").is_empty());
}

#[rstest]
fn releasing_an_unknown_player_is_refused(mut league: League) {
    let err = league
        .release_player(PlayerId::new(42), "waived")
        .expect_err("player missing");
    assert_registration_failure(&err, Concept::OutPlayer);
}

#[rstest]
fn releasing_a_released_player_is_refused(mut league: League) {
    let (_, player) = seed_roster(&league);
    league.release_player(player, "waived").expect("first release");
    let err = league
        .release_player(player, "again")
        .expect_err("second release");
    assert_registration_failure(&err, Concept::OutPlayer);
}

#[rstest]
fn blank_release_reason_is_refused(mut league: League) {
    let (_, player) = seed_roster(&league);
    let err = league.release_player(player, "  ").expect_err("blank reason");
    assert_registration_failure(&err, Concept::OutPlayer);
}

#[rstest]
fn failed_release_rolls_back_the_team_clear(mut league: League) {
    let (team, player) = seed_roster(&league);
    // A pre-existing release record makes the insert half of the unit of
    // work hit the UNIQUE(player_id) constraint after the team clear.
    OutPlayerStore::new()
        .save(
            league.database().connection(),
            player,
            "seeded conflict",
            datetime!(2024-07-01 00:00 UTC),
        )
        .expect("seed conflicting release record");
    let err = league
        .release_player(player, "waived")
        .expect_err("unique constraint must fire");
    assert!(matches!(err, LeagueError::RegistrationFault { .. }));
    assert_eq!(err.concept(), Concept::OutPlayer);
    let roster = league.roster(team).expect("roster");
    assert_eq!(roster.len(), 1, "the team clear must roll back");
}
