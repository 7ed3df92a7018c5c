use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro};

#[derive(Clone, Copy, Debug, Display, EnumCountMacro, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

impl CardColor {
    /// The four colors a card can be matched against.
    pub const SUITS: [CardColor; 4] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
    ];

    pub fn is_wild(self) -> bool {
        self == CardColor::Wild
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardKind {
    Number(u8),
    DrawTwo,
    Skip,
    Reverse,
    ColorChange,
    DrawFour,
}

impl CardKind {
    /// Number of cards the opponent is challenged to draw, if any.
    pub fn penalty(self) -> Option<u8> {
        match self {
            CardKind::DrawTwo => Some(2),
            CardKind::DrawFour => Some(4),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    color: CardColor,
    kind: CardKind,
}

impl Card {
    /// A numbered card. `number` must be in `0..=9`.
    pub fn number(color: CardColor, number: u8) -> Self {
        debug_assert!(number <= 9, "card number {number} out of range");
        Self {
            color,
            kind: CardKind::Number(number.min(9)),
        }
    }

    pub fn new(color: CardColor, kind: CardKind) -> Self {
        match kind {
            CardKind::Number(number) => Self::number(color, number),
            kind => Self { color, kind },
        }
    }

    pub fn wild(kind: CardKind) -> Self {
        Self::new(CardColor::Wild, kind)
    }

    pub fn color(&self) -> CardColor {
        self.color
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn number_value(&self) -> Option<u8> {
        match self.kind {
            CardKind::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Wild-family cards can be played on anything.
    pub fn is_wild_family(&self) -> bool {
        self.color.is_wild() || matches!(self.kind, CardKind::ColorChange | CardKind::DrawFour)
    }

    /// Whether playing this card requires a color to be named.
    pub fn needs_color(&self) -> bool {
        self.kind == CardKind::ColorChange || self.color.is_wild()
    }

    pub fn can_be_played_on(&self, active: &Card) -> bool {
        if self.is_wild_family() || self.color == active.color {
            return true;
        }

        matches!(
            (self.number_value(), active.number_value()),
            (Some(a), Some(b)) if a == b
        )
    }

    /// Copy of this card showing `color`. Used for the played instance of a
    /// color-changing card; cards still in hands or the deck are untouched.
    pub fn recolored(&self, color: CardColor) -> Self {
        Self {
            color,
            kind: self.kind,
        }
    }
}

impl Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardKind::Number(number) => write!(f, "{number}"),
            CardKind::DrawTwo => write!(f, "Draw Two"),
            CardKind::Skip => write!(f, "Skip"),
            CardKind::Reverse => write!(f, "Reverse"),
            CardKind::ColorChange => write!(f, "Color Change"),
            CardKind::DrawFour => write!(f, "Draw Four"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
