//! Game configuration.
//!
//! Every rule constant the engine uses can be overridden here; the defaults
//! give the standard game: 7-card hands, ±10 points per challenge and a
//! random color for color-changing cards played without a declared color.

use crate::constants::{
    DEFAULT_CHALLENGE_POINTS, DEFAULT_HAND_SIZE, PLAYER_COUNT, TOTAL_CARDS_IN_DECK,
};
use crate::error::{Result, UnoError};
use crate::question::QuestionBank;

/// How the color of a color-changing card is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorDeclaration {
    /// A declared color is used; otherwise the engine's color policy picks one.
    #[default]
    Random,
    /// The play must name a color.
    Required,
}

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub hand_size: usize,
    pub challenge_reward: i32,
    pub challenge_penalty: i32,
    pub player_names: [String; PLAYER_COUNT],
    /// Seed for shuffling, question selection and random colors. `None`
    /// seeds from the operating system.
    pub seed: Option<u64>,
    pub color_declaration: ColorDeclaration,
    pub question_bank: QuestionBank,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            challenge_reward: DEFAULT_CHALLENGE_POINTS,
            challenge_penalty: DEFAULT_CHALLENGE_POINTS,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            seed: None,
            color_declaration: ColorDeclaration::default(),
            question_bank: QuestionBank::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_challenge_points(mut self, reward: i32, penalty: i32) -> Self {
        self.challenge_reward = reward;
        self.challenge_penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_player_names(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    #[must_use]
    pub fn with_color_declaration(mut self, color_declaration: ColorDeclaration) -> Self {
        self.color_declaration = color_declaration;
        self
    }

    #[must_use]
    pub fn with_question_bank(mut self, question_bank: QuestionBank) -> Self {
        self.question_bank = question_bank;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.hand_size == 0 {
            return Err(UnoError::InvalidConfig(
                "hand size must be at least 1".to_string(),
            ));
        }

        // Both hands plus the starting card.
        let needed = self
            .hand_size
            .checked_mul(PLAYER_COUNT)
            .and_then(|cards| cards.checked_add(1));
        match needed {
            Some(needed) if needed <= TOTAL_CARDS_IN_DECK => {}
            _ => {
                return Err(UnoError::InvalidConfig(format!(
                    "a hand size of {} does not fit in a {TOTAL_CARDS_IN_DECK}-card deck",
                    self.hand_size
                )))
            }
        }

        if self.challenge_reward < 0 || self.challenge_penalty < 0 {
            return Err(UnoError::InvalidConfig(
                "challenge points must not be negative".to_string(),
            ));
        }

        if self.question_bank.is_empty() {
            return Err(UnoError::EmptyQuestionBank);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.challenge_reward, 10);
        assert_eq!(config.challenge_penalty, 10);
        assert_eq!(config.color_declaration, ColorDeclaration::Random);
    }

    #[test]
    fn zero_hand_size_is_rejected() {
        let error = GameConfig::new().with_hand_size(0).validate().unwrap_err();
        assert!(matches!(error, UnoError::InvalidConfig(_)));
    }

    #[test]
    fn hand_size_must_fit_the_deck() {
        assert!(GameConfig::new().with_hand_size(33).validate().is_ok());

        let error = GameConfig::new().with_hand_size(34).validate().unwrap_err();
        assert!(matches!(error, UnoError::InvalidConfig(_)));

        let error = GameConfig::new()
            .with_hand_size(usize::MAX)
            .validate()
            .unwrap_err();
        assert!(matches!(error, UnoError::InvalidConfig(_)));
    }

    #[test]
    fn negative_points_are_rejected() {
        let error = GameConfig::new()
            .with_challenge_points(-5, 10)
            .validate()
            .unwrap_err();
        assert!(matches!(error, UnoError::InvalidConfig(_)));
    }
}
