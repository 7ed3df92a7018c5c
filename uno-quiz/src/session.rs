use tracing::info;

use crate::config::GameConfig;
use crate::error::{Result, UnoError};
use crate::turn::Outcome;
use crate::uno::Uno;

/// Owns at most one running game. Front ends keep a `Session` instead of a
/// global game handle and drive its lifecycle explicitly.
#[derive(Debug)]
pub enum Session {
    Idle {
        config: GameConfig,
    },
    Ongoing {
        game: Uno,
    },
    Finished {
        game: Uno,
        outcome: Outcome,
    },
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Session::Idle { config }
    }

    /// Starts a game from the idle configuration. Starting an ongoing
    /// session is a no-op.
    pub fn start(&mut self) -> Result<()> {
        match self {
            Session::Idle { config } => {
                let game = Uno::new(config.clone())?;
                *self = Session::Ongoing { game };
                Ok(())
            }
            Session::Ongoing { .. } => Ok(()),
            Session::Finished { .. } => Err(UnoError::GameOver),
        }
    }

    /// Throws away the current game, if any, and deals a new one with the
    /// same configuration. Seeded configurations deal the same game again.
    pub fn restart(&mut self) -> Result<()> {
        let config = self.config().clone();
        let game = Uno::new(config)?;
        info!("session restarted");
        *self = Session::Ongoing { game };
        Ok(())
    }

    /// Moves an ongoing session whose game has ended to `Finished`.
    pub fn sync(&mut self) -> Option<Outcome> {
        let outcome = match self {
            Session::Ongoing { game } => game.outcome()?,
            Session::Finished { outcome, .. } => return Some(*outcome),
            Session::Idle { .. } => return None,
        };

        let idle = Session::Idle {
            config: self.config().clone(),
        };
        if let Session::Ongoing { game } = std::mem::replace(self, idle) {
            *self = Session::Finished { game, outcome };
        }
        Some(outcome)
    }

    /// Drops the current game without an outcome and returns to idle.
    pub fn close(&mut self) {
        let config = self.config().clone();
        info!("session closed");
        *self = Session::Idle { config };
    }

    pub fn game(&self) -> Result<&Uno> {
        match self {
            Session::Ongoing { game } | Session::Finished { game, .. } => Ok(game),
            Session::Idle { .. } => Err(UnoError::NoActiveGame),
        }
    }

    /// Mutable access to a running game. Finished games are read-only.
    pub fn game_mut(&mut self) -> Result<&mut Uno> {
        match self {
            Session::Ongoing { game } => Ok(game),
            Session::Finished { .. } => Err(UnoError::GameOver),
            Session::Idle { .. } => Err(UnoError::NoActiveGame),
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Session::Finished { outcome, .. } => Some(*outcome),
            Session::Ongoing { game } => game.outcome(),
            Session::Idle { .. } => None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        match self {
            Session::Idle { config } => config,
            Session::Ongoing { game } | Session::Finished { game, .. } => game.config(),
        }
    }
}
