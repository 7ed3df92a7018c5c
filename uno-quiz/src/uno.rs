use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info, warn};

use crate::card::{Card, CardColor, CardKind};
use crate::challenge::{ChallengeOutcome, ChallengeResponder};
use crate::color::{ColorPolicy, RandomColor};
use crate::config::{ColorDeclaration, GameConfig};
use crate::constants::PLAYER_COUNT;
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::player::{deal, Player, Seat};
use crate::question::Answer;
use crate::turn::{
    DrawResult, Effect, GameState, Next, Outcome, PlayResult, TurnAction, TurnResult,
};

/// Read-only snapshot of everything a front end needs to draw the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView<'a> {
    pub active_card: Card,
    pub hands: [&'a [Card]; PLAYER_COUNT],
    pub scores: [i32; PLAYER_COUNT],
    pub current_seat: Option<Seat>,
    pub state: GameState,
    pub deck_size: usize,
}

#[derive(Debug)]
pub struct Uno {
    deck: Deck,
    players: [Player; PLAYER_COUNT],
    active_card: Card,
    state: GameState,
    config: GameConfig,
    rng: ChaCha8Rng,
    color_policy: Box<dyn ColorPolicy>,
}

impl Uno {
    /// Shuffles a fresh deck, deals both hands and turns over the starting
    /// card. The first seat plays first.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_color_policy(config, Box::new(RandomColor))
    }

    pub fn with_color_policy(
        config: GameConfig,
        mut color_policy: Box<dyn ColorPolicy>,
    ) -> Result<Self> {
        config.validate()?;

        let mut rng = Self::seeded_rng(&config);
        let mut deck = Deck::build(&mut rng);
        let mut players = config.player_names.clone().map(Player::new);

        deal(&mut deck, &mut players, config.hand_size).map_err(|err| {
            error!(%err, "deck underflow while dealing");
            err
        })?;

        let active_card = Self::turn_over_starter(&mut deck, color_policy.as_mut(), &mut rng)
            .map_err(|err| {
                error!(%err, "no starting card left after dealing");
                err
            })?;

        info!(
            %active_card,
            deck_size = deck.cards_count(),
            hand_size = config.hand_size,
            "game started"
        );

        Ok(Uno {
            deck,
            players,
            active_card,
            state: GameState::AwaitingPlay(Seat::First),
            config,
            rng,
            color_policy,
        })
    }

    /// Builds a game from an explicit table: the draw pile, both hands, the
    /// active card and the seat to play first. `config.hand_size` is not used.
    pub fn arranged(
        config: GameConfig,
        deck: Deck,
        hands: [Vec<Card>; PLAYER_COUNT],
        active_card: Card,
        first: Seat,
    ) -> Result<Self> {
        config.validate()?;

        if active_card.color().is_wild() {
            return Err(UnoError::InvalidArrangement(format!(
                "the active card {active_card} has no color"
            )));
        }
        if hands.iter().any(Vec::is_empty) {
            return Err(UnoError::InvalidArrangement(
                "every hand needs at least one card".to_string(),
            ));
        }

        let rng = Self::seeded_rng(&config);
        let mut players = config.player_names.clone().map(Player::new);
        for (player, hand) in players.iter_mut().zip(hands) {
            player.hand = hand;
        }

        debug!(%active_card, ?first, deck_size = deck.cards_count(), "arranged game");

        Ok(Uno {
            deck,
            players,
            active_card,
            state: GameState::AwaitingPlay(first),
            config,
            rng,
            color_policy: Box::new(RandomColor),
        })
    }

    pub fn set_color_policy(&mut self, color_policy: Box<dyn ColorPolicy>) {
        self.color_policy = color_policy;
    }

    pub fn play_turn<R>(
        &mut self,
        seat: Seat,
        action: TurnAction,
        responder: &mut R,
    ) -> Result<TurnResult>
    where
        R: ChallengeResponder + ?Sized,
    {
        match action {
            TurnAction::Play { card, color } => self
                .play_card(seat, card, color, responder)
                .map(TurnResult::Played),
            TurnAction::Draw => self.draw_card(seat).map(TurnResult::Drew),
        }
    }

    /// Plays `card` from `seat`'s hand.
    ///
    /// Rejected plays (wrong turn, card not held, illegal card, missing
    /// color) leave the game untouched. Draw cards challenge the other seat
    /// through `responder` before the call returns.
    #[tracing::instrument(level = "debug", skip(self, responder))]
    pub fn play_card<R>(
        &mut self,
        seat: Seat,
        card: Card,
        color: Option<CardColor>,
        responder: &mut R,
    ) -> Result<PlayResult>
    where
        R: ChallengeResponder + ?Sized,
    {
        self.ensure_turn(seat)?;

        let player = &self.players[seat.index()];
        if !player.has_card(&card) {
            warn!(%card, "card not in hand");
            return Err(UnoError::CardNotInHand(card));
        }

        if !card.can_be_played_on(&self.active_card) {
            warn!(%card, active_card = %self.active_card, "illegal play");
            return Err(UnoError::IllegalCard {
                card,
                active: self.active_card,
            });
        }

        let wins = player.cards_count() == 1;

        // Decided before anything changes so a missing color rejects the play.
        let new_color = if card.needs_color() && !wins {
            Some(self.resolve_color(seat, color)?)
        } else {
            None
        };

        self.players[seat.index()].remove_card(&card)?;
        self.active_card = new_color.map_or(card, |color| card.recolored(color));

        info!(%card, active_card = %self.active_card, "card played");

        if wins {
            let outcome = Outcome::Winner(seat);
            self.state = GameState::GameOver(outcome);
            info!(?outcome, "hand emptied, game over");

            return Ok(PlayResult {
                seat,
                card,
                effect: Effect::Neutral,
                active_card: self.active_card,
                next: self.state.into(),
            });
        }

        let (effect, next_seat) = match card.kind() {
            CardKind::DrawTwo | CardKind::DrawFour => {
                let penalty = card.kind().penalty().unwrap_or_default();
                let outcome = self.challenge(seat.other(), penalty, responder);
                (Effect::Challenge(outcome), seat.other())
            }
            CardKind::Skip => (Effect::Skip, seat),
            // With two seats a reverse hands the turn straight back.
            CardKind::Reverse => (Effect::Reverse, seat),
            CardKind::ColorChange => (Effect::ColorChange(self.active_card.color()), seat.other()),
            CardKind::Number(_) => (Effect::Neutral, seat.other()),
        };

        self.state = GameState::AwaitingPlay(next_seat);
        debug!(?effect, next = ?next_seat, "turn resolved");

        Ok(PlayResult {
            seat,
            card,
            effect,
            active_card: self.active_card,
            next: Next::Seat(next_seat),
        })
    }

    /// Draws one card for `seat` and passes the turn. Drawing from an empty
    /// deck ends the game on score instead.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn draw_card(&mut self, seat: Seat) -> Result<DrawResult> {
        self.ensure_turn(seat)?;

        let Ok(card) = self.deck.draw() else {
            let outcome = self.outcome_by_score();
            self.state = GameState::GameOver(outcome);
            info!(
                ?outcome,
                first_score = self.players[0].score(),
                second_score = self.players[1].score(),
                "deck exhausted, game over"
            );
            return Ok(DrawResult::Exhausted(outcome));
        };

        self.players[seat.index()].add_card(card);
        self.state = GameState::AwaitingPlay(seat.other());
        debug!(deck_size = self.deck.cards_count(), "card drawn");

        Ok(DrawResult::Drew {
            seat,
            card,
            next: seat.other(),
        })
    }

    /// Ends the game in favour of the other seat. Either seat may forfeit at
    /// any point before the game is over.
    pub fn forfeit(&mut self, seat: Seat) -> Result<Outcome> {
        if let GameState::GameOver(_) = self.state {
            return Err(UnoError::GameOver);
        }

        let outcome = Outcome::Winner(seat.other());
        self.state = GameState::GameOver(outcome);
        info!(?seat, ?outcome, "player forfeited");
        Ok(outcome)
    }

    pub fn playable_cards(&self, seat: Seat) -> Vec<Card> {
        self.players[seat.index()]
            .hand()
            .iter()
            .filter(|card| card.can_be_played_on(&self.active_card))
            .copied()
            .collect()
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            active_card: self.active_card,
            hands: [self.players[0].hand(), self.players[1].hand()],
            scores: [self.players[0].score(), self.players[1].score()],
            current_seat: self.current_seat(),
            state: self.state,
            deck_size: self.deck.cards_count(),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn current_seat(&self) -> Option<Seat> {
        match self.state {
            GameState::AwaitingPlay(seat) => Some(seat),
            GameState::GameOver(_) => None,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::AwaitingPlay(_) => None,
            GameState::GameOver(outcome) => Some(outcome),
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn active_card(&self) -> &Card {
        &self.active_card
    }

    pub fn deck_size(&self) -> usize {
        self.deck.cards_count()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Draws the starting card from the top of the pile. A Wild-colored card
    /// is shown in a color from `color_policy` so the first play can match it.
    fn turn_over_starter(
        deck: &mut Deck,
        color_policy: &mut dyn ColorPolicy,
        rng: &mut ChaCha8Rng,
    ) -> Result<Card> {
        let starter = deck.draw()?;
        if starter.color().is_wild() {
            let color = color_policy.choose_color(Seat::First, rng);
            debug!(%starter, %color, "wild starting card recolored");
            return Ok(starter.recolored(color));
        }
        Ok(starter)
    }

    fn seeded_rng(config: &GameConfig) -> ChaCha8Rng {
        match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    fn ensure_turn(&self, seat: Seat) -> Result<()> {
        match self.state {
            GameState::GameOver(_) => {
                warn!(?seat, "action after game over");
                Err(UnoError::GameOver)
            }
            GameState::AwaitingPlay(expected) if expected != seat => {
                warn!(?expected, actual = ?seat, "wrong turn");
                Err(UnoError::WrongTurn {
                    expected,
                    actual: seat,
                })
            }
            GameState::AwaitingPlay(_) => Ok(()),
        }
    }

    fn resolve_color(&mut self, seat: Seat, declared: Option<CardColor>) -> Result<CardColor> {
        match (declared, self.config.color_declaration) {
            (Some(color), _) if !color.is_wild() => Ok(color),
            (_, ColorDeclaration::Required) => Err(UnoError::ColorNotDeclared),
            (_, ColorDeclaration::Random) => {
                let color = self.color_policy.choose_color(seat, &mut self.rng);
                debug!(%color, "color chosen by policy");
                Ok(color)
            }
        }
    }

    fn challenge<R>(&mut self, target: Seat, penalty: u8, responder: &mut R) -> ChallengeOutcome
    where
        R: ChallengeResponder + ?Sized,
    {
        let question = self.config.question_bank.pick(&mut self.rng).clone();
        let answer = Answer::normalize(&responder.answer(target, &question));
        let correct = question.is_correct(answer);

        let (score_change, cards_drawn) = if correct {
            (self.config.challenge_reward, 0)
        } else {
            let cards = self.deck.draw_up_to(penalty.into());
            let drawn = cards.len();
            let player = &mut self.players[target.index()];
            for card in cards {
                player.add_card(card);
            }
            (-self.config.challenge_penalty, drawn)
        };

        let player = &mut self.players[target.index()];
        player.adjust_score(score_change);

        info!(
            ?target,
            ?answer,
            correct,
            penalty,
            cards_drawn,
            score = player.score(),
            "challenge resolved"
        );

        ChallengeOutcome {
            target,
            question,
            answer,
            correct,
            penalty,
            cards_drawn,
            score_change,
        }
    }

    fn outcome_by_score(&self) -> Outcome {
        let first = self.players[0].score();
        let second = self.players[1].score();

        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Outcome::Winner(Seat::First),
            std::cmp::Ordering::Less => Outcome::Winner(Seat::Second),
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}
