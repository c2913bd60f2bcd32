//! Unit tests for the dugout-records crate.

#![expect(
    clippy::unwrap_used,
    reason = "test assertions may panic on malformed fixtures"
)]

mod id_tests {
    use crate::{PlayerId, StadiumId, TeamId};

    #[test]
    fn ids_display_as_bare_numbers() {
        assert_eq!(format!("{}", StadiumId::new(1)), "1");
        assert_eq!(format!("{}", TeamId::new(42)), "42");
        assert_eq!(format!("{}", PlayerId::new(7)), "7");
    }

    #[test]
    fn ids_order_by_raw_value() {
        let mut ids = vec![PlayerId::new(3), PlayerId::new(1), PlayerId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![PlayerId::new(1), PlayerId::new(2), PlayerId::new(3)]);
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&StadiumId::new(9)).unwrap();
        assert_eq!(json, "9");
    }
}

mod player_tests {
    use time::OffsetDateTime;

    use crate::{Player, PlayerId, TeamId};

    fn signed_player() -> Player {
        Player::new(
            PlayerId::new(1),
            Some(TeamId::new(3)),
            "Kim",
            "pitcher",
            OffsetDateTime::UNIX_EPOCH,
        )
    }

    #[test]
    fn player_with_team_is_active() {
        assert!(signed_player().is_active());
    }

    #[test]
    fn released_player_loses_team_but_keeps_identity() {
        let released = signed_player().released();
        assert!(!released.is_active());
        assert_eq!(released.team(), None);
        assert_eq!(released.id(), PlayerId::new(1));
        assert_eq!(released.name(), "Kim");
        assert_eq!(released.position(), "pitcher");
    }

    #[test]
    fn released_team_serializes_as_null() {
        let json = serde_json::to_string(&signed_player().released()).unwrap();
        assert!(json.contains("\"team\":null"), "got {json}");
    }
}

mod report_tests {
    use time::macros::datetime;

    use crate::{PositionEntry, ReleasedPlayer};

    #[test]
    fn released_player_serializes_timestamp_as_rfc3339() {
        let row = ReleasedPlayer::new("Kim", "pitcher", "injury", datetime!(2024-05-01 09:30 UTC));
        let json = serde_json::to_string(&row).unwrap();
        assert!(
            json.contains("\"released_at\":\"2024-05-01T09:30:00Z\""),
            "got {json}"
        );
    }

    #[test]
    fn position_entry_exposes_all_three_axes() {
        let entry = PositionEntry::new("Doosan", "catcher", "Park");
        assert_eq!(entry.team_name(), "Doosan");
        assert_eq!(entry.position(), "catcher");
        assert_eq!(entry.player_name(), "Park");
    }
}
