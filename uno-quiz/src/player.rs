use std::fmt;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{Result, UnoError};

/// One of the two fixed player slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::First),
            1 => Some(Seat::Second),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat {}", self.index())
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    pub(crate) hand: Vec<Card>,
    pub(crate) score: i32,
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            hand: Vec::new(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn card_index(&self, card: &Card) -> Option<usize> {
        self.hand.iter().position(|x| x == card)
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.card_index(card).is_some()
    }

    pub(crate) fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Removes one instance of `card`.
    pub(crate) fn remove_card(&mut self, card: &Card) -> Result<Card> {
        let index = self.card_index(card).ok_or(UnoError::CardNotInHand(*card))?;
        Ok(self.hand.remove(index))
    }

    pub(crate) fn adjust_score(&mut self, delta: i32) {
        self.score = self.score.saturating_add(delta);
    }
}

/// Deals `count` cards to every player, one at a time in seat order.
pub fn deal(deck: &mut Deck, players: &mut [Player], count: usize) -> Result<()> {
    for _ in 0..count {
        for player in players.iter_mut() {
            player.add_card(deck.draw()?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, CardKind};

    #[test]
    fn seats_alternate() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
        assert_eq!(Seat::from_index(1), Some(Seat::Second));
        assert_eq!(Seat::from_index(2), None);
    }

    #[test]
    fn remove_card_removes_a_single_instance() {
        let mut player = Player::new("Player 1".to_string());
        let skip = Card::new(CardColor::Red, CardKind::Skip);
        player.add_card(skip);
        player.add_card(skip);

        assert_eq!(player.remove_card(&skip).unwrap(), skip);
        assert_eq!(player.cards_count(), 1);
    }

    #[test]
    fn remove_missing_card_fails() {
        let mut player = Player::new("Player 1".to_string());
        player.add_card(Card::number(CardColor::Blue, 1));

        let error = player
            .remove_card(&Card::number(CardColor::Red, 1))
            .unwrap_err();
        assert!(matches!(error, UnoError::CardNotInHand(_)));
        assert_eq!(player.cards_count(), 1);
    }

    #[test]
    fn score_can_go_negative() {
        let mut player = Player::new("Player 1".to_string());
        player.adjust_score(-10);
        player.adjust_score(-10);
        assert_eq!(player.score(), -20);
    }

    #[test]
    fn deal_gives_each_player_count_cards() {
        let mut deck = Deck::new();
        let mut players = [
            Player::new("Player 1".to_string()),
            Player::new("Player 2".to_string()),
        ];

        deal(&mut deck, &mut players, 7).unwrap();

        assert_eq!(players[0].cards_count(), 7);
        assert_eq!(players[1].cards_count(), 7);
        assert_eq!(deck.cards_count(), 68 - 14);
    }

    #[test]
    fn deal_fails_when_deck_underflows() {
        let mut deck = Deck::from_cards(vec![Card::number(CardColor::Red, 1); 3]);
        let mut players = [
            Player::new("Player 1".to_string()),
            Player::new("Player 2".to_string()),
        ];

        let error = deal(&mut deck, &mut players, 2).unwrap_err();
        assert_eq!(error, UnoError::EmptyDeck);
    }
}
