use crate::card::{Card, CardColor};
use crate::challenge::ChallengeOutcome;
use crate::player::Seat;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnAction {
    /// Play `card`. `color` names the new color for color-changing cards and
    /// is ignored otherwise.
    Play { card: Card, color: Option<CardColor> },
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Seat),
    Tie,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    AwaitingPlay(Seat),
    GameOver(Outcome),
}

/// Who acts next once a turn has been resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    Seat(Seat),
    GameOver(Outcome),
}

impl From<GameState> for Next {
    fn from(state: GameState) -> Self {
        match state {
            GameState::AwaitingPlay(seat) => Next::Seat(seat),
            GameState::GameOver(outcome) => Next::GameOver(outcome),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Neutral,
    Skip,
    Reverse,
    ColorChange(CardColor),
    Challenge(ChallengeOutcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayResult {
    pub seat: Seat,
    pub card: Card,
    pub effect: Effect,
    pub active_card: Card,
    pub next: Next,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawResult {
    Drew { seat: Seat, card: Card, next: Seat },
    /// The deck was empty; the game was decided on score.
    Exhausted(Outcome),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnResult {
    Played(PlayResult),
    Drew(DrawResult),
}
