//! Renders league records and projections into console responses.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use serde::Serialize;
use time::OffsetDateTime;

use dugout_records::{
    Player, PlayerWithTeam, PositionEntry, Release, ReleasedPlayer, Stadium, TeamWithStadium,
};

use crate::dispatch::DispatchError;

use super::OutputFormat;
use super::table::Table;

/// Writes command responses in the configured format.
///
/// Text mode prints one-line confirmations and aligned tables; JSON mode
/// prints one `serde_json` document per response. Either way a response is
/// flushed as whole lines, so transcripts stay stable under capture.
#[derive(Debug)]
pub struct Renderer<W> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Renderer<W> {
    /// Creates a renderer writing to `out`.
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Confirms a stadium registration.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn stadium_registered(&mut self, stadium: &Stadium) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => self.line(&format!(
                "stadium registered: #{} {}",
                stadium.id(),
                stadium.name()
            )),
            OutputFormat::Json => self.json(&stadium),
        }
    }

    /// Lists every registered stadium.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn stadiums(&mut self, stadiums: &[Stadium]) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => {
                if stadiums.is_empty() {
                    return self.line("(none)");
                }
                let mut table = Table::new(["id", "name"]);
                for stadium in stadiums {
                    table.push_row([stadium.id().to_string(), stadium.name().to_owned()]);
                }
                self.table(&table)
            }
            OutputFormat::Json => self.json(&stadiums),
        }
    }

    /// Confirms a team registration, naming the home stadium.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn team_registered(&mut self, registered: &TeamWithStadium) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => self.line(&format!(
                "team registered: #{} {} (home: {})",
                registered.team().id(),
                registered.team().name(),
                registered.stadium_name()
            )),
            OutputFormat::Json => self.json(&registered),
        }
    }

    /// Lists every registered team with its home stadium.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn teams(&mut self, teams: &[TeamWithStadium]) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => {
                if teams.is_empty() {
                    return self.line("(none)");
                }
                let mut table = Table::new(["id", "name", "stadium"]);
                for entry in teams {
                    table.push_row([
                        entry.team().id().to_string(),
                        entry.team().name().to_owned(),
                        entry.stadium_name().to_owned(),
                    ]);
                }
                self.table(&table)
            }
            OutputFormat::Json => self.json(&teams),
        }
    }

    /// Confirms a player registration, naming the team.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn player_registered(&mut self, registered: &PlayerWithTeam) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => self.line(&format!(
                "player registered: #{} {} [{}] (team: {})",
                registered.player().id(),
                registered.player().name(),
                registered.player().position(),
                registered.team_name()
            )),
            OutputFormat::Json => self.json(&registered),
        }
    }

    /// Lists a team's active roster.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn roster(&mut self, players: &[Player]) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => {
                if players.is_empty() {
                    return self.line("(none)");
                }
                let mut table = Table::new(["id", "name", "position"]);
                for player in players {
                    table.push_row([
                        player.id().to_string(),
                        player.name().to_owned(),
                        player.position().to_owned(),
                    ]);
                }
                self.table(&table)
            }
            OutputFormat::Json => self.json(&players),
        }
    }

    /// Confirms a completed release.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn player_released(&mut self, release: &Release) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => self.line(&format!(
                "player released: #{} {} (reason: {})",
                release.player().id(),
                release.player().name(),
                release.record().reason()
            )),
            OutputFormat::Json => self.json(&release),
        }
    }

    /// Lists every released player with reason and release date.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn released(&mut self, released: &[ReleasedPlayer]) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => {
                if released.is_empty() {
                    return self.line("(none)");
                }
                let mut table = Table::new(["name", "position", "reason", "released"]);
                for entry in released {
                    table.push_row([
                        entry.name().to_owned(),
                        entry.position().to_owned(),
                        entry.reason().to_owned(),
                        date_cell(entry.released_at()),
                    ]);
                }
                self.table(&table)
            }
            OutputFormat::Json => self.json(&released),
        }
    }

    /// Renders the position pivot: one column per team, one row per position.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the response cannot be written.
    pub fn positions(&mut self, entries: &[PositionEntry]) -> Result<(), DispatchError> {
        match self.format {
            OutputFormat::Text => {
                if entries.is_empty() {
                    return self.line("(none)");
                }
                self.table(&position_grid(entries))
            }
            OutputFormat::Json => self.json(&position_map(entries)),
        }
    }

    fn line(&mut self, text: &str) -> Result<(), DispatchError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn table(&mut self, table: &Table) -> Result<(), DispatchError> {
        self.out.write_all(table.render().as_bytes())?;
        Ok(())
    }

    fn json<T: Serialize>(&mut self, value: &T) -> Result<(), DispatchError> {
        let encoded = serde_json::to_string(value)?;
        writeln!(self.out, "{encoded}")?;
        Ok(())
    }
}

fn date_cell(timestamp: OffsetDateTime) -> String {
    let date = timestamp.date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Groups pivot triples into a table, sorting every axis.
///
/// Teams become columns, positions become rows, and each cell joins the
/// matching player names with `, `. Everything is ordered through `BTree`
/// collections so the same triples render byte-identically regardless of
/// insertion order.
fn position_grid(entries: &[PositionEntry]) -> Table {
    let teams: BTreeSet<&str> = entries.iter().map(PositionEntry::team_name).collect();
    let mut cells: BTreeMap<&str, BTreeMap<&str, Vec<&str>>> = BTreeMap::new();
    for entry in entries {
        cells
            .entry(entry.position())
            .or_default()
            .entry(entry.team_name())
            .or_default()
            .push(entry.player_name());
    }

    let mut headers = vec!["position".to_owned()];
    headers.extend(teams.iter().map(|team| (*team).to_owned()));
    let mut table = Table::new(headers);
    for (position, by_team) in &cells {
        let mut row = vec![(*position).to_owned()];
        for team in &teams {
            let cell = match by_team.get(team) {
                Some(names) => {
                    let mut sorted = names.clone();
                    sorted.sort_unstable();
                    sorted.join(", ")
                }
                None => String::new(),
            };
            row.push(cell);
        }
        table.push_row(row);
    }
    table
}

fn position_map(entries: &[PositionEntry]) -> BTreeMap<&str, BTreeMap<&str, Vec<&str>>> {
    let mut grid: BTreeMap<&str, BTreeMap<&str, Vec<&str>>> = BTreeMap::new();
    for entry in entries {
        grid.entry(entry.team_name())
            .or_default()
            .entry(entry.position())
            .or_default()
            .push(entry.player_name());
    }
    for positions in grid.values_mut() {
        for names in positions.values_mut() {
            names.sort_unstable();
        }
    }
    grid
}
