use rand::{seq::SliceRandom, Rng};

use crate::{
    card::{Card, CardColor, CardKind},
    constants::*,
    error::{Result, UnoError},
};

/// Draw pile. The top of the pile is the end of the vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck(pub(crate) Vec<Card>);

impl Deck {
    /// The full, unshuffled deck.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK);

        for color in CardColor::SUITS {
            // Number Cards
            for number in NUMBER_CARDS_PER_COLOR {
                cards.push(Card::number(color, *number));
            }

            // Special Cards
            for kind in SPECIAL_CARDS_PER_COLOR {
                cards.push(Card::new(color, *kind));
            }
        }

        for _ in 0..WILD_COLOR_CHANGE_CARDS_IN_DECK {
            cards.push(Card::wild(CardKind::ColorChange));
        }

        for _ in 0..WILD_DRAW_FOUR_CARDS_IN_DECK {
            cards.push(Card::wild(CardKind::DrawFour));
        }

        Self(cards)
    }

    /// The full deck, shuffled with `rng`.
    pub fn build<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// A pile in the given order; the last card is drawn first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn draw(&mut self) -> Result<Card> {
        self.0.pop().ok_or(UnoError::EmptyDeck)
    }

    /// Draws up to `count` cards, stopping early once the pile runs out.
    pub(crate) fn draw_up_to(&mut self, count: usize) -> Vec<Card> {
        let split = self.0.len().saturating_sub(count);
        let mut drawn = self.0.split_off(split);
        drawn.reverse();
        drawn
    }

    pub fn cards_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}
