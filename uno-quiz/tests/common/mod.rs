#![allow(dead_code)]

use uno_quiz::{
    card::{Card, CardColor, CardKind},
    config::GameConfig,
    deck::Deck,
    player::Seat,
    question::{Answer, Question, QuestionBank},
    uno::Uno,
};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A config whose only question expects "yes", so tests know which replies
/// are correct.
pub fn yes_config() -> GameConfig {
    let bank = QuestionBank::new(vec![Question::new(
        "Are there 5! ways to order 5 distinct objects?",
        Answer::Yes,
    )])
    .unwrap();
    GameConfig::new().with_seed(7).with_question_bank(bank)
}

pub fn number(color: CardColor, number: u8) -> Card {
    Card::number(color, number)
}

pub fn special(color: CardColor, kind: CardKind) -> Card {
    Card::new(color, kind)
}

pub fn filler(count: usize) -> Vec<Card> {
    vec![Card::number(CardColor::Yellow, 0); count]
}

pub fn arranged(first: Vec<Card>, second: Vec<Card>, active: Card, deck: Vec<Card>) -> Uno {
    init_tracing();
    Uno::arranged(
        yes_config(),
        Deck::from_cards(deck),
        [first, second],
        active,
        Seat::First,
    )
    .unwrap()
}

/// Responder for plays that must not raise a challenge.
pub fn never_asked(seat: Seat, question: &Question) -> String {
    panic!("{seat} was unexpectedly asked {:?}", question.prompt)
}
