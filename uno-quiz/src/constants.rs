use crate::card::CardKind;

pub(crate) const NUMBER_CARDS_PER_COLOR: &[u8] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
pub(crate) const SPECIAL_CARDS_PER_COLOR: &[CardKind] = &[
    CardKind::DrawTwo,
    CardKind::Skip,
    CardKind::Reverse,
    CardKind::ColorChange,
    CardKind::DrawFour,
];

pub(crate) const SUIT_COUNT: usize = 4;

pub(crate) const NUMBER_CARDS_IN_DECK: usize = NUMBER_CARDS_PER_COLOR.len() * SUIT_COUNT;
pub(crate) const SPECIAL_CARDS_IN_DECK: usize = SPECIAL_CARDS_PER_COLOR.len() * SUIT_COUNT;

pub(crate) const WILD_COLOR_CHANGE_CARDS_IN_DECK: usize = 4;
pub(crate) const WILD_DRAW_FOUR_CARDS_IN_DECK: usize = 4;

pub const TOTAL_CARDS_IN_DECK: usize = NUMBER_CARDS_IN_DECK
    + SPECIAL_CARDS_IN_DECK
    + WILD_COLOR_CHANGE_CARDS_IN_DECK
    + WILD_DRAW_FOUR_CARDS_IN_DECK;

pub const DEFAULT_HAND_SIZE: usize = 7;
pub const DEFAULT_CHALLENGE_POINTS: i32 = 10;

pub const PLAYER_COUNT: usize = 2;
