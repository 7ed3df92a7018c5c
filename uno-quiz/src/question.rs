//! Trivia questions asked when a player is hit by a draw card.

use rand::Rng;
use strum_macros::Display;

use crate::error::{Result, UnoError};

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
    Invalid,
}

impl Answer {
    /// Maps a raw reply to an answer. Case and surrounding whitespace are
    /// ignored; `si` and `yes` mean yes, `no` means no, anything else is
    /// invalid.
    pub fn normalize(raw: &str) -> Self {
        let raw = raw.trim().to_lowercase();
        match raw.as_str() {
            "si" | "yes" => Answer::Yes,
            "no" => Answer::No,
            _ => Answer::Invalid,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub expected: Answer,
}

impl Question {
    pub fn new(prompt: impl Into<String>, expected: Answer) -> Self {
        Self {
            prompt: prompt.into(),
            expected,
        }
    }

    /// An invalid reply never counts as correct.
    pub fn is_correct(&self, answer: Answer) -> bool {
        answer != Answer::Invalid && answer == self.expected
    }
}

const PERMUTATIONS_AND_COMBINATIONS: &[(&str, Answer)] = &[
    ("Are there 5! ways to order 5 distinct objects?", Answer::Yes),
    ("Is a combination of 5 elements taken 3 at a time larger than a permutation of the same elements?", Answer::No),
    ("For a set of 4 elements, are there more permutations than combinations?", Answer::Yes),
    ("Does P(5,2) count the ways of selecting 2 elements out of 5 regardless of order?", Answer::No),
    ("When counting combinations, is order irrelevant?", Answer::Yes),
    ("Do permutations take the order of the elements into account?", Answer::Yes),
    ("Is the number of ways to arrange 3 elements out of a set of 5 equal to C(5,3)?", Answer::No),
    ("Does C(n,r) stand for the combinations of n elements taken r at a time?", Answer::Yes),
    ("Are there exactly 3! ways to order a set of 3 elements?", Answer::Yes),
    ("Is a combination always larger than a permutation of the same set of elements?", Answer::No),
    ("Can the letters of the word 'PERMUTATIONS' be arranged in more than 5,000 ways?", Answer::Yes),
    ("With 15 participants and prizes for the first 3 places, is the prize assignment a permutation?", Answer::Yes),
    ("Given 8 balls of different colors, can 4 of them be selected in exactly 70 different ways?", Answer::No),
    ("Can 2 questions be chosen from a set of 12 questions in more than one way?", Answer::Yes),
    ("Can a team of 3 people be formed from a group of 9 without regard to order?", Answer::Yes),
    ("Given 7 people, is there only one way to form a line with 3 people in the middle?", Answer::No),
    ("For a committee of 5 people chosen from a group of 12, is the order of selection irrelevant?", Answer::Yes),
    ("Can 4 books be ordered in a single unique way if 2 of them are identical?", Answer::No),
    ("Can 6 objects be distributed into 3 pockets in more than one way?", Answer::Yes),
    ("If 3 cards of different suits are drawn from a 52-card deck, are the possible combinations limited?", Answer::Yes),
];

/// A fixed, read-only set of questions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionBank(Vec<Question>);

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(UnoError::EmptyQuestionBank);
        }
        if let Some(question) = questions.iter().find(|q| q.expected == Answer::Invalid) {
            return Err(UnoError::InvalidConfig(format!(
                "question {:?} has no valid expected answer",
                question.prompt
            )));
        }
        Ok(Self(questions))
    }

    /// Picks a question uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Question {
        // The constructor guarantees the bank is non-empty.
        let index = rng.gen_range(0..self.0.len());
        &self.0[index]
    }

    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self(
            PERMUTATIONS_AND_COMBINATIONS
                .iter()
                .map(|(prompt, expected)| Question::new(*prompt, *expected))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn normalize_accepts_yes_and_si() {
        assert_eq!(Answer::normalize("yes"), Answer::Yes);
        assert_eq!(Answer::normalize("  SI "), Answer::Yes);
        assert_eq!(Answer::normalize("Yes\n"), Answer::Yes);
    }

    #[test]
    fn normalize_accepts_no() {
        assert_eq!(Answer::normalize("no"), Answer::No);
        assert_eq!(Answer::normalize(" NO"), Answer::No);
    }

    #[test]
    fn normalize_rejects_everything_else() {
        assert_eq!(Answer::normalize(""), Answer::Invalid);
        assert_eq!(Answer::normalize("maybe"), Answer::Invalid);
        assert_eq!(Answer::normalize("y"), Answer::Invalid);
        assert_eq!(Answer::normalize("yes please"), Answer::Invalid);
    }

    #[test]
    fn invalid_answer_is_never_correct() {
        let question = Question::new("?", Answer::No);
        assert!(question.is_correct(Answer::No));
        assert!(!question.is_correct(Answer::Yes));
        assert!(!question.is_correct(Answer::Invalid));
    }

    #[test]
    fn default_bank_has_twenty_questions() {
        let bank = QuestionBank::default();
        assert_eq!(bank.len(), 20);
        assert!(bank
            .questions()
            .iter()
            .all(|q| q.expected != Answer::Invalid));
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(
            QuestionBank::new(Vec::new()).unwrap_err(),
            UnoError::EmptyQuestionBank
        );
    }

    #[test]
    fn pick_is_repeatable_with_the_same_seed() {
        let bank = QuestionBank::default();
        let a = bank.pick(&mut ChaCha8Rng::seed_from_u64(3)).clone();
        let b = bank.pick(&mut ChaCha8Rng::seed_from_u64(3)).clone();
        assert_eq!(a, b);
        assert!(bank.questions().contains(&a));
    }
}
