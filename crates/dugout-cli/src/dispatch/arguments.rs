//! Typed argument sets for the registered commands.
//!
//! Each command with a body gets a small struct that pulls its fields out of
//! the parsed [`Request`], converts ids, and rejects anything left over.

use dugout_records::{PlayerId, StadiumId, TeamId};

use super::errors::DispatchError;
use super::request::Request;

/// Arguments for `register-stadium`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterStadiumArgs {
    pub name: String,
}

impl RegisterStadiumArgs {
    /// Extracts the arguments from a parsed request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] when `name` is absent or extra
    /// fields are present.
    pub fn from_request(request: &Request) -> Result<Self, DispatchError> {
        let mut fields = request.fields();
        let name = fields.take("name")?.to_owned();
        fields.finish()?;
        Ok(Self { name })
    }
}

/// Arguments for `register-team`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterTeamArgs {
    pub stadium: StadiumId,
    pub name: String,
}

impl RegisterTeamArgs {
    /// Extracts the arguments from a parsed request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] when a field is absent, the id is
    /// not a positive integer, or extra fields are present.
    pub fn from_request(request: &Request) -> Result<Self, DispatchError> {
        let mut fields = request.fields();
        let stadium = parse_id("stadium-id", fields.take("stadium-id")?)?;
        let name = fields.take("name")?.to_owned();
        fields.finish()?;
        Ok(Self {
            stadium: StadiumId::new(stadium),
            name,
        })
    }
}

/// Arguments for `register-player`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPlayerArgs {
    pub team: TeamId,
    pub name: String,
    pub position: String,
}

impl RegisterPlayerArgs {
    /// Extracts the arguments from a parsed request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] when a field is absent, the id is
    /// not a positive integer, or extra fields are present.
    pub fn from_request(request: &Request) -> Result<Self, DispatchError> {
        let mut fields = request.fields();
        let team = parse_id("team-id", fields.take("team-id")?)?;
        let name = fields.take("name")?.to_owned();
        let position = fields.take("position")?.to_owned();
        fields.finish()?;
        Ok(Self {
            team: TeamId::new(team),
            name,
            position,
        })
    }
}

/// Arguments for `list-players`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPlayersArgs {
    pub team: TeamId,
}

impl ListPlayersArgs {
    /// Extracts the arguments from a parsed request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] when `team-id` is absent, not a
    /// positive integer, or extra fields are present.
    pub fn from_request(request: &Request) -> Result<Self, DispatchError> {
        let mut fields = request.fields();
        let team = parse_id("team-id", fields.take("team-id")?)?;
        fields.finish()?;
        Ok(Self {
            team: TeamId::new(team),
        })
    }
}

/// Arguments for `release-player`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlayerArgs {
    pub player: PlayerId,
    pub reason: String,
}

impl ReleasePlayerArgs {
    /// Extracts the arguments from a parsed request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Malformed`] when a field is absent, the id is
    /// not a positive integer, or extra fields are present.
    pub fn from_request(request: &Request) -> Result<Self, DispatchError> {
        let mut fields = request.fields();
        let player = parse_id("player-id", fields.take("player-id")?)?;
        let reason = fields.take("reason")?.to_owned();
        fields.finish()?;
        Ok(Self {
            player: PlayerId::new(player),
            reason,
        })
    }
}

fn parse_id(key: &str, value: &str) -> Result<i64, DispatchError> {
    let invalid = || {
        DispatchError::malformed(format!(
            "field {key:?} must be a positive integer, got {value:?}"
        ))
    };
    let id: i64 = value.parse().map_err(|_| invalid())?;
    if id < 1 {
        return Err(invalid());
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn request(line: &str) -> Request {
        Request::parse(line).expect("request should parse")
    }

    #[track_caller]
    fn assert_malformed<T: std::fmt::Debug>(result: Result<T, DispatchError>, needle: &str) {
        let error = result.expect_err("arguments should be rejected");
        assert!(
            matches!(&error, DispatchError::Malformed { .. }),
            "unexpected error: {error:?}"
        );
        let message = error.to_string();
        assert!(message.contains(needle), "missing {needle:?} in {message:?}");
    }

    #[test]
    fn register_team_arguments_parse() {
        let args = RegisterTeamArgs::from_request(&request("register-team: stadium-id=1, name=Doosan"))
            .expect("arguments should parse");
        assert_eq!(args.stadium, StadiumId::new(1));
        assert_eq!(args.name, "Doosan");
    }

    #[test]
    fn register_player_requires_every_field() {
        assert_malformed(
            RegisterPlayerArgs::from_request(&request("register-player: team-id=1, name=Kim")),
            "missing field \"position\"",
        );
    }

    #[rstest]
    #[case::not_a_number("list-players: team-id=first")]
    #[case::zero("list-players: team-id=0")]
    #[case::negative("list-players: team-id=-3")]
    fn ids_must_be_positive_integers(#[case] line: &str) {
        assert_malformed(
            ListPlayersArgs::from_request(&request(line)),
            "positive integer",
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert_malformed(
            RegisterStadiumArgs::from_request(&request("register-stadium: name=Jamsil, city=Seoul")),
            "unexpected field \"city\"",
        );
    }

    #[test]
    fn release_reason_keeps_inner_spacing() {
        let args = ReleasePlayerArgs::from_request(&request(
            "release-player: player-id=4, reason=season-ending knee injury",
        ))
        .expect("arguments should parse");
        assert_eq!(args.player, PlayerId::new(4));
        assert_eq!(args.reason, "season-ending knee injury");
    }
}
