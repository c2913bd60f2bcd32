//! Line-oriented console for a baseball league record book.
//!
//! The binary reads one request per line (`register-team: stadium-id=1,
//! name=Doosan`), applies it to the league through
//! [`dugout_league::League`], and writes the response to stdout. Stadiums,
//! teams, players, and release records persist in a SQLite database managed
//! by `dugout_store`.
//!
//! [`run`] is the composition root. The binary's `main` only locks the
//! standard streams and forwards them here, so integration tests drive the
//! exact production path with scripted input.

mod config;
mod dispatch;
mod output;
pub mod telemetry;

pub use config::{Cli, LogFormat};
pub use output::OutputFormat;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use thiserror::Error;
use tracing::info;

use dugout_league::League;
use dugout_store::{Database, StoreError};

use dispatch::{CommandRegistry, DispatchError};
use output::Renderer;
use telemetry::TelemetryError;

/// Errors that abort the session before or outside the request loop.
#[derive(Debug, Error)]
enum AppError {
    /// Telemetry could not be installed.
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    /// The record book could not be opened.
    #[error("failed to open the record book: {0}")]
    Database(#[from] StoreError),
    /// Command wiring failed at startup.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    /// A console stream failed.
    #[error("console session failed: {0}")]
    Session(#[from] io::Error),
}

/// Runs a console session over the given streams.
///
/// Responses go to `output`; error reports go to `errors`; telemetry goes to
/// the process stderr. The session ends cleanly at EOF on `input`. The exit
/// code is [`ExitCode::FAILURE`] only when startup fails or a stream breaks
/// mid-session.
pub fn run<R, W, E>(cli: Cli, input: R, output: &mut W, errors: &mut E) -> ExitCode
where
    R: BufRead,
    W: Write,
    E: Write,
{
    match serve(cli, input, output, errors) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(errors, "error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn serve<R, W, E>(cli: Cli, input: R, output: &mut W, errors: &mut E) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let _telemetry = telemetry::initialise(&cli)?;
    let database = Database::open(&cli.db)?;
    let mut league = League::new(database);
    let registry = CommandRegistry::with_builtin_commands()?;
    let mut renderer = Renderer::new(output, cli.output);
    info!(db = %cli.db.display(), "record book opened");
    dispatch::run_loop(input, &registry, &mut renderer, errors, &mut league)?;
    info!("console session ended");
    Ok(())
}
