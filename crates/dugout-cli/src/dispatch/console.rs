//! The interactive console loop.

use std::io::{self, BufRead, Write};

use tracing::warn;

use dugout_league::League;

use crate::output::Renderer;

use super::DISPATCH_TARGET;
use super::errors::DispatchError;
use super::registry::CommandRegistry;
use super::request::Request;

/// Reads request lines until EOF, dispatching each in turn.
///
/// Blank lines are skipped. Every recoverable failure is reported as a
/// single `error:` line on `errors` and the loop moves to the next request;
/// a request never terminates the session.
///
/// # Errors
///
/// Returns the underlying [`io::Error`] when the input stream fails or a
/// response can no longer be written.
pub fn run_loop<R, W, E>(
    input: R,
    registry: &CommandRegistry<W>,
    renderer: &mut Renderer<W>,
    errors: &mut E,
    league: &mut League,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let Err(error) = serve(&line, registry, renderer, league) {
            match error {
                DispatchError::Output(source) => {
                    warn!(target: DISPATCH_TARGET, error = %source, "response stream failed");
                    return Err(source);
                }
                recoverable => {
                    warn!(target: DISPATCH_TARGET, error = %recoverable, "request failed");
                    writeln!(errors, "error: {recoverable}")?;
                }
            }
        }
    }
    Ok(())
}

fn serve<W: Write>(
    line: &str,
    registry: &CommandRegistry<W>,
    renderer: &mut Renderer<W>,
    league: &mut League,
) -> Result<(), DispatchError> {
    let request = Request::parse(line)?;
    registry.dispatch(&request, renderer, league)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use dugout_store::Database;

    use crate::output::OutputFormat;

    use super::*;

    fn run_script(script: &str) -> (String, String) {
        let mut league = League::new(Database::open_in_memory().expect("in-memory database"));
        let registry = CommandRegistry::with_builtin_commands().expect("registry builds");
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let mut renderer = Renderer::new(&mut output, OutputFormat::Text);
        run_loop(
            Cursor::new(script),
            &registry,
            &mut renderer,
            &mut errors,
            &mut league,
        )
        .expect("loop runs to EOF");
        drop(renderer);
        (
            String::from_utf8(output).expect("responses are valid UTF-8"),
            String::from_utf8(errors).expect("error lines are valid UTF-8"),
        )
    }

    #[test]
    fn blank_input_produces_no_output() {
        let (output, errors) = run_script("\n   \n\n");
        assert_eq!(output, "");
        assert_eq!(errors, "");
    }

    #[test]
    fn failed_requests_do_not_stop_the_loop() {
        let (output, errors) = run_script("scoreboard\nregister-stadium: name=Jamsil\n");
        assert_eq!(output, "stadium registered: #1 Jamsil\n");
        assert_eq!(errors, "error: request not recognised: scoreboard\n");
    }

    #[test]
    fn each_failure_reports_exactly_one_line() {
        let (output, errors) = run_script("register-stadium\nregister-stadium: name=\n");
        assert_eq!(output, "");
        let lines: Vec<&str> = errors.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(
            lines
                .iter()
                .all(|line| line.starts_with("error: malformed request:")),
            "unexpected report: {errors:?}"
        );
    }

    #[test]
    fn league_refusals_are_reported_and_recovered() {
        let (output, errors) = run_script(
            "register-stadium: name=Jamsil\n\
             register-team: stadium-id=9, name=Doosan\n\
             list-teams\n",
        );
        assert_eq!(
            output,
            "stadium registered: #1 Jamsil\n(none)\n",
            "the refused team must not appear"
        );
        assert_eq!(
            errors,
            "error: team registration failed: stadium #9 does not exist\n"
        );
    }
}
