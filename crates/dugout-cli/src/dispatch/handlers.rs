//! Handlers for the built-in console commands.
//!
//! Each handler converts the request into typed arguments, invokes the
//! league, and hands the result to the renderer. Validation failures and
//! league refusals propagate to the loop's single catch point.

use std::io::Write;

use dugout_league::League;

use crate::output::Renderer;

use super::arguments::{
    ListPlayersArgs, RegisterPlayerArgs, RegisterStadiumArgs, RegisterTeamArgs, ReleasePlayerArgs,
};
use super::errors::DispatchError;
use super::request::Request;

pub(super) fn register_stadium<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    let args = RegisterStadiumArgs::from_request(request)?;
    let stadium = league.register_stadium(&args.name)?;
    renderer.stadium_registered(&stadium)
}

pub(super) fn list_stadiums<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    request.expect_no_body()?;
    let stadiums = league.stadiums()?;
    renderer.stadiums(&stadiums)
}

pub(super) fn register_team<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    let args = RegisterTeamArgs::from_request(request)?;
    let registered = league.register_team(args.stadium, &args.name)?;
    renderer.team_registered(&registered)
}

pub(super) fn list_teams<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    request.expect_no_body()?;
    let teams = league.teams()?;
    renderer.teams(&teams)
}

pub(super) fn register_player<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    let args = RegisterPlayerArgs::from_request(request)?;
    let registered = league.register_player(args.team, &args.name, &args.position)?;
    renderer.player_registered(&registered)
}

pub(super) fn list_players<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    let args = ListPlayersArgs::from_request(request)?;
    let players = league.roster(args.team)?;
    renderer.roster(&players)
}

pub(super) fn release_player<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    let args = ReleasePlayerArgs::from_request(request)?;
    let release = league.release_player(args.player, &args.reason)?;
    renderer.player_released(&release)
}

pub(super) fn list_released<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    request.expect_no_body()?;
    let released = league.released()?;
    renderer.released(&released)
}

pub(super) fn list_positions<W: Write>(
    request: &Request,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    request.expect_no_body()?;
    let entries = league.positions()?;
    renderer.positions(&entries)
}
