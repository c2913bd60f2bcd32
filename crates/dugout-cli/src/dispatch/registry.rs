//! Keyword-to-handler dispatch table.

use std::collections::BTreeMap;
use std::io::Write;

use tracing::debug;

use dugout_league::League;

use crate::output::Renderer;

use super::DISPATCH_TARGET;
use super::errors::DispatchError;
use super::handlers;
use super::request::Request;

/// Function signature shared by every command handler.
pub type Handler<W> = fn(&Request, &mut Renderer<W>, &mut League) -> Result<(), DispatchError>;

/// Maps request keywords to their handlers.
///
/// The table is populated once at startup; registration refuses duplicate
/// keywords so a wiring mistake fails the process before any request is
/// served.
#[derive(Debug)]
pub struct CommandRegistry<W> {
    handlers: BTreeMap<&'static str, Handler<W>>,
}

impl<W: Write> CommandRegistry<W> {
    /// Builds the registry with every built-in command installed.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DuplicateCommand`] when two commands claim
    /// the same keyword.
    pub fn with_builtin_commands() -> Result<Self, DispatchError> {
        let mut registry = Self {
            handlers: BTreeMap::new(),
        };
        registry.register("register-stadium", handlers::register_stadium)?;
        registry.register("list-stadiums", handlers::list_stadiums)?;
        registry.register("register-team", handlers::register_team)?;
        registry.register("list-teams", handlers::list_teams)?;
        registry.register("register-player", handlers::register_player)?;
        registry.register("list-players", handlers::list_players)?;
        registry.register("release-player", handlers::release_player)?;
        registry.register("list-released", handlers::list_released)?;
        registry.register("list-positions", handlers::list_positions)?;
        Ok(registry)
    }

    /// Installs `handler` under `keyword`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DuplicateCommand`] when the keyword is
    /// already taken.
    pub fn register(
        &mut self,
        keyword: &'static str,
        handler: Handler<W>,
    ) -> Result<(), DispatchError> {
        if self.handlers.insert(keyword, handler).is_some() {
            return Err(DispatchError::duplicate_command(keyword));
        }
        Ok(())
    }

    /// Routes `request` to the handler registered for its keyword.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Unrecognized`] for an unregistered keyword,
    /// otherwise whatever the handler fails with.
    pub fn dispatch(
        &self,
        request: &Request,
        renderer: &mut Renderer<W>,
        league: &mut League,
    ) -> Result<(), DispatchError> {
        let Some(handler) = self.handlers.get(request.keyword()) else {
            return Err(DispatchError::unrecognized(request.keyword()));
        };
        debug!(target: DISPATCH_TARGET, keyword = request.keyword(), "dispatching request");
        handler(request, renderer, league)
    }
}

#[cfg(test)]
mod tests {
    use dugout_store::Database;

    use crate::output::OutputFormat;

    use super::*;

    const BUILTIN_KEYWORDS: [&str; 9] = [
        "register-stadium",
        "list-stadiums",
        "register-team",
        "list-teams",
        "register-player",
        "list-players",
        "release-player",
        "list-released",
        "list-positions",
    ];

    #[test]
    fn every_builtin_keyword_is_registered() {
        let registry: CommandRegistry<Vec<u8>> =
            CommandRegistry::with_builtin_commands().expect("registry builds");
        for keyword in BUILTIN_KEYWORDS {
            assert!(
                registry.handlers.contains_key(keyword),
                "missing {keyword}"
            );
        }
        assert_eq!(registry.handlers.len(), BUILTIN_KEYWORDS.len());
    }

    #[test]
    fn duplicate_keyword_is_rejected() {
        let mut registry: CommandRegistry<Vec<u8>> =
            CommandRegistry::with_builtin_commands().expect("registry builds");
        let error = registry
            .register("list-stadiums", handlers::list_stadiums)
            .expect_err("keyword is taken");
        assert!(matches!(
            error,
            DispatchError::DuplicateCommand {
                keyword: "list-stadiums"
            }
        ));
    }

    #[test]
    fn unknown_keyword_writes_nothing() {
        let mut league = League::new(Database::open_in_memory().expect("in-memory database"));
        let registry = CommandRegistry::with_builtin_commands().expect("registry builds");
        let mut buffer = Vec::new();
        let mut renderer = Renderer::new(&mut buffer, OutputFormat::Text);
        let request = Request::parse("help").expect("request parses");
        let error = registry
            .dispatch(&request, &mut renderer, &mut league)
            .expect_err("keyword is not registered");
        assert!(matches!(error, DispatchError::Unrecognized { .. }));
        assert!(buffer.is_empty());
    }
}
