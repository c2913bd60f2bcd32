//! Unit tests for the storage layer, run against in-memory databases.

#![expect(
    clippy::expect_used,
    reason = "test setup failures should panic with context"
)]

use rstest::{fixture, rstest};
use time::OffsetDateTime;
use time::macros::datetime;

use dugout_records::{PlayerId, StadiumId, TeamId};

use crate::{
    Database, OutPlayerStore, PlayerStore, SCHEMA_VERSION, StadiumStore, StoreError, TeamStore,
};

const REGISTERED: OffsetDateTime = datetime!(2024-04-01 12:00 UTC);
const RELEASED: OffsetDateTime = datetime!(2024-07-15 08:30 UTC);

#[fixture]
fn db() -> Database {
    Database::open_in_memory().expect("open in-memory database")
}

/// Seeds one stadium, one team, and one active player; returns the player id.
fn seed_roster(db: &Database) -> PlayerId {
    let conn = db.connection();
    let stadium = StadiumStore::new()
        .save(conn, "Jamsil", REGISTERED)
        .expect("save stadium");
    let team = TeamStore::new()
        .save(conn, stadium.id(), "Doosan", REGISTERED)
        .expect("save team");
    PlayerStore::new()
        .save(conn, team.id(), "Kim", "pitcher", REGISTERED)
        .expect("save player")
        .id()
}

#[rstest]
fn saved_stadiums_get_fresh_increasing_ids(db: Database) {
    let store = StadiumStore::new();
    let first = store
        .save(db.connection(), "Jamsil", REGISTERED)
        .expect("save first");
    let second = store
        .save(db.connection(), "Gocheok", REGISTERED)
        .expect("save second");
    assert_eq!(first.id(), StadiumId::new(1));
    assert_eq!(second.id(), StadiumId::new(2));
}

#[rstest]
fn saved_stadium_round_trips_through_find_all(db: Database) {
    let store = StadiumStore::new();
    let saved = store
        .save(db.connection(), "Jamsil", REGISTERED)
        .expect("save stadium");
    let all = store.find_all(db.connection()).expect("find all");
    assert_eq!(all, vec![saved]);
}

#[rstest]
fn find_all_on_empty_table_returns_empty(db: Database) {
    let all = StadiumStore::new()
        .find_all(db.connection())
        .expect("find all");
    assert!(all.is_empty());
}

#[rstest]
fn find_by_name_distinguishes_hit_from_miss(db: Database) {
    let store = StadiumStore::new();
    store
        .save(db.connection(), "Jamsil", REGISTERED)
        .expect("save stadium");
    let hit = store
        .find_by_name(db.connection(), "Jamsil")
        .expect("query hit");
    let miss = store
        .find_by_name(db.connection(), "Sajik")
        .expect("query miss");
    assert!(hit.is_some());
    assert!(miss.is_none());
}

#[rstest]
fn team_report_joins_stadium_names(db: Database) {
    seed_roster(&db);
    let report = TeamStore::new()
        .find_all_with_stadiums(db.connection())
        .expect("team report");
    let row = report.first().expect("one team");
    assert_eq!(row.team().name(), "Doosan");
    assert_eq!(row.stadium_name(), "Jamsil");
}

#[rstest]
fn clear_team_releases_the_player(db: Database) {
    let player_id = seed_roster(&db);
    let players = PlayerStore::new();
    players
        .clear_team(db.connection(), player_id)
        .expect("clear team");
    let player = players
        .find_by_id(db.connection(), player_id)
        .expect("find player")
        .expect("player still exists");
    assert_eq!(player.team(), None);
    assert!(!player.is_active());
}

#[rstest]
fn clear_team_on_unknown_id_reports_nothing_updated(db: Database) {
    let err = PlayerStore::new()
        .clear_team(db.connection(), PlayerId::new(99))
        .expect_err("no row to update");
    assert!(matches!(
        err,
        StoreError::NothingUpdated { table: "player" }
    ));
}

#[rstest]
fn released_players_leave_their_team_roster(db: Database) {
    let player_id = seed_roster(&db);
    let players = PlayerStore::new();
    players
        .clear_team(db.connection(), player_id)
        .expect("clear team");
    let roster = players
        .find_by_team(db.connection(), TeamId::new(1))
        .expect("roster");
    assert!(roster.is_empty());
}

#[rstest]
fn position_entries_exclude_released_players(db: Database) {
    let player_id = seed_roster(&db);
    let players = PlayerStore::new();
    let before = players
        .position_entries(db.connection())
        .expect("entries before release");
    assert_eq!(before.len(), 1);
    players
        .clear_team(db.connection(), player_id)
        .expect("clear team");
    let after = players
        .position_entries(db.connection())
        .expect("entries after release");
    assert!(after.is_empty());
}

#[rstest]
fn second_release_record_for_a_player_is_refused(db: Database) {
    let player_id = seed_roster(&db);
    let out = OutPlayerStore::new();
    out.save(db.connection(), player_id, "injury", RELEASED)
        .expect("first release record");
    let err = out
        .save(db.connection(), player_id, "again", RELEASED)
        .expect_err("unique constraint");
    assert!(matches!(err, StoreError::Sqlite(_)));
}

#[rstest]
fn released_report_joins_player_details(db: Database) {
    let player_id = seed_roster(&db);
    let out = OutPlayerStore::new();
    out.save(db.connection(), player_id, "injury", RELEASED)
        .expect("release record");
    let report = out
        .find_all_released(db.connection())
        .expect("released report");
    let row = report.first().expect("one released player");
    assert_eq!(row.name(), "Kim");
    assert_eq!(row.position(), "pitcher");
    assert_eq!(row.reason(), "injury");
    assert_eq!(row.released_at(), RELEASED);
}

#[test]
fn reopening_a_file_backed_database_keeps_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("league.db");
    {
        let db = Database::open(&path).expect("first open");
        StadiumStore::new()
            .save(db.connection(), "Jamsil", REGISTERED)
            .expect("save stadium");
    }
    let db = Database::open(&path).expect("reopen");
    let all = StadiumStore::new()
        .find_all(db.connection())
        .expect("find all");
    assert_eq!(all.len(), 1);
}

#[test]
fn newer_schema_version_is_refused() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("league.db");
    drop(Database::open(&path).expect("initial open"));
    {
        let conn = rusqlite::Connection::open(&path).expect("raw open");
        conn.execute_batch("PRAGMA user_version=99;")
            .expect("tamper with version");
    }
    let err = Database::open(&path).expect_err("version check");
    assert!(matches!(
        err,
        StoreError::SchemaVersion {
            found: 99,
            supported: SCHEMA_VERSION
        }
    ));
}
