//! The trivia challenge raised by Draw Two and Draw Four cards.
//!
//! When a draw card is played, the targeted seat is asked a question through
//! a [`ChallengeResponder`]. The engine is mutably borrowed for the whole
//! call, so nothing else can observe or change the game while the responder
//! is waiting for the player.

use crate::player::Seat;
use crate::question::{Answer, Question};

/// Supplies the targeted player's reply to a challenge question.
pub trait ChallengeResponder {
    fn answer(&mut self, seat: Seat, question: &Question) -> String;
}

impl<F> ChallengeResponder for F
where
    F: FnMut(Seat, &Question) -> String,
{
    fn answer(&mut self, seat: Seat, question: &Question) -> String {
        self(seat, question)
    }
}

/// Replies with the same text to every question.
#[derive(Clone, Debug)]
pub struct FixedReply(pub String);

impl FixedReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self(reply.into())
    }
}

impl ChallengeResponder for FixedReply {
    fn answer(&mut self, _seat: Seat, _question: &Question) -> String {
        self.0.clone()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeOutcome {
    pub target: Seat,
    pub question: Question,
    pub answer: Answer,
    pub correct: bool,
    /// Cards the target would have drawn.
    pub penalty: u8,
    /// Cards actually drawn; fewer than `penalty` when the deck ran out.
    pub cards_drawn: usize,
    pub score_change: i32,
}
