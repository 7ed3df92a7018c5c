use std::fmt::Debug;

use rand::{seq::SliceRandom, RngCore};

use crate::card::CardColor;
use crate::player::Seat;

/// Picks the color for a color-changing card when the player did not name
/// one.
pub trait ColorPolicy: Debug {
    fn choose_color(&mut self, seat: Seat, rng: &mut dyn RngCore) -> CardColor;
}

/// Uniformly random suit, drawn from the game's RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomColor;

impl ColorPolicy for RandomColor {
    fn choose_color(&mut self, _seat: Seat, rng: &mut dyn RngCore) -> CardColor {
        *CardColor::SUITS
            .choose(rng)
            .unwrap_or(&CardColor::Red)
    }
}

/// Always the same suit.
#[derive(Clone, Copy, Debug)]
pub struct FixedColor(pub CardColor);

impl ColorPolicy for FixedColor {
    fn choose_color(&mut self, _seat: Seat, _rng: &mut dyn RngCore) -> CardColor {
        self.0
    }
}
