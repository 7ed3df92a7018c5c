use thiserror::Error;

use crate::{card::Card, player::Seat};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnoError {
    #[error("It is {expected}'s turn, not {actual}'s")]
    WrongTurn { expected: Seat, actual: Seat },
    #[error("{card} cannot be played on {active}")]
    IllegalCard { card: Card, active: Card },
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("The deck is empty")]
    EmptyDeck,
    #[error("The game is already over")]
    GameOver,
    #[error("A color must be declared when playing a color-changing card")]
    ColorNotDeclared,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid arrangement: {0}")]
    InvalidArrangement(String),
    #[error("The question bank is empty")]
    EmptyQuestionBank,
    #[error("No game is running")]
    NoActiveGame,
}

impl UnoError {
    /// Errors the acting player can recover from by trying again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            UnoError::WrongTurn { .. } | UnoError::IllegalCard { .. } | UnoError::ColorNotDeclared
        )
    }
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
