mod common;

use std::collections::HashMap;

use common::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uno_quiz::{
    card::{Card, CardColor, CardKind},
    challenge::FixedReply,
    config::GameConfig,
    deck::Deck,
    player::Seat,
    turn::{DrawResult, Effect, GameState},
    uno::Uno,
};

proptest! {
    #[test]
    fn deck_has_68_cards_for_any_seed(seed in any::<u64>()) {
        let deck = Deck::build(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(deck.cards_count(), 68);

        let mut counts = HashMap::new();
        for card in deck.cards() {
            *counts.entry(*card).or_insert(0usize) += 1;
        }
        // 60 distinct colored cards plus two distinct wild cards.
        prop_assert_eq!(counts.len(), 62);
        prop_assert_eq!(counts[&Card::wild(CardKind::DrawFour)], 4);
        prop_assert_eq!(counts[&Card::wild(CardKind::ColorChange)], 4);
    }

    #[test]
    fn setup_deals_seven_each_for_any_seed(seed in any::<u64>()) {
        let uno = Uno::new(GameConfig::new().with_seed(seed)).unwrap();
        let view = uno.view();
        prop_assert_eq!(view.hands[0].len(), 7);
        prop_assert_eq!(view.hands[1].len(), 7);
        prop_assert_eq!(view.deck_size, 53);
        prop_assert_eq!(view.state, GameState::AwaitingPlay(Seat::First));
    }

    #[test]
    fn illegal_plays_never_change_the_game(seed in any::<u64>()) {
        let mut uno = Uno::new(GameConfig::new().with_seed(seed)).unwrap();
        let active = *uno.active_card();
        let illegal = uno
            .player(Seat::First)
            .hand()
            .iter()
            .filter(|card| !card.can_be_played_on(&active))
            .copied()
            .collect::<Vec<_>>();

        for card in illegal {
            prop_assert!(card.color() != active.color());
            prop_assert!(!card.is_wild_family());

            let before = format!("{:?}", uno.view());
            let result = uno.play_card(Seat::First, card, None, &mut never_asked);
            prop_assert!(result.is_err());
            prop_assert_eq!(format!("{:?}", uno.view()), before);
        }
    }

    #[test]
    fn drawing_alternates_seats(seed in any::<u64>(), draws in 1usize..53) {
        let mut uno = Uno::new(GameConfig::new().with_seed(seed)).unwrap();
        let mut seat = Seat::First;

        for _ in 0..draws {
            let result = uno.draw_card(seat).unwrap();
            let is_drew = matches!(result, DrawResult::Drew { .. });
            prop_assert!(is_drew);
            seat = seat.other();
            prop_assert_eq!(uno.current_seat(), Some(seat));
        }
    }

    #[test]
    fn wrong_answers_draw_at_most_the_deck(deck_size in 0usize..8, draw_four in any::<bool>()) {
        let kind = if draw_four { CardKind::DrawFour } else { CardKind::DrawTwo };
        let penalty = if draw_four { 4 } else { 2 };
        let mut uno = arranged(
            vec![special(CardColor::Red, kind), filler(1)[0]],
            filler(2),
            number(CardColor::Red, 3),
            filler(deck_size),
        );

        let result = uno
            .play_card(Seat::First, special(CardColor::Red, kind), None, &mut FixedReply::new("no"))
            .unwrap();

        let expected = penalty.min(deck_size);
        match result.effect {
            Effect::Challenge(challenge) => {
                prop_assert_eq!(challenge.cards_drawn, expected);
            }
            other => {
                prop_assert!(false, "expected a challenge, got {:?}", other);
            }
        }
        prop_assert_eq!(uno.player(Seat::Second).cards_count(), 2 + expected);
        prop_assert_eq!(uno.player(Seat::Second).score(), -10);
        prop_assert_eq!(uno.deck_size(), deck_size - expected);
    }
}
