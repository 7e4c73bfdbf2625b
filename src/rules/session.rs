//! Session controller.
//!
//! Owns the current [`SessionState`] and the dice source, and threads each
//! action through [`apply`](super::apply). This is the single owner of the
//! turn pointer; hosts talk to the engine through it.

use serde::{Deserialize, Serialize};

use super::engine::{apply, legal_actions, roll};
use crate::core::{Action, GameRng, GameRngState, Phase, PlayerId, SessionConfig, SessionState};
use crate::dice::DiceSource;
use crate::error::{ConfigError, EngineError, RuleViolation};
use crate::ledger::parse_amount;
use crate::settlement::RoundReport;
use crate::turns::Throw;

/// Saved session position: table state plus RNG position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub state: SessionState,
    pub rng: GameRngState,
}

/// A running play session.
///
/// ## Example
///
/// ```
/// use chinchiro::core::{Phase, PlayerId, SessionConfig};
/// use chinchiro::rules::Session;
///
/// let mut session = Session::new(SessionConfig::default_names(3), 7).unwrap();
/// session.set_bet(PlayerId::new(1), 1_000).unwrap();
/// session.set_bet(PlayerId::new(2), 500).unwrap();
/// session.confirm_bets().unwrap();
///
/// while session.state().phase() == Phase::Acting {
///     let seat = session.state().active_player().unwrap();
///     while session.can_roll(seat) {
///         session.roll(seat).unwrap();
///     }
///     session.finish_turn(seat).unwrap();
/// }
///
/// assert!(session.state().last_report().unwrap().is_zero_sum());
/// ```
#[derive(Clone, Debug)]
pub struct Session<D: DiceSource = GameRng> {
    config: SessionConfig,
    state: SessionState,
    dice: D,
}

impl Session<GameRng> {
    /// Start a session with seeded dice.
    pub fn new(config: SessionConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_dice(config, GameRng::new(seed))
    }

    /// Capture the state and RNG position.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            state: self.state.clone(),
            rng: self.dice.state(),
        }
    }

    /// Resume from a checkpoint.
    ///
    /// The config must be valid and seat the same number of players as the
    /// checkpoint, and the checkpointed table must satisfy every invariant.
    pub fn restore(config: SessionConfig, checkpoint: &Checkpoint) -> Result<Self, EngineError> {
        config.validate()?;

        let seated = checkpoint.state.player_count();
        if seated != config.player_count() {
            return Err(EngineError::CheckpointMismatch {
                config: config.player_count(),
                checkpoint: seated,
            });
        }
        checkpoint
            .state
            .check_invariants()
            .map_err(EngineError::CorruptCheckpoint)?;

        Ok(Self {
            config,
            state: checkpoint.state.clone(),
            dice: GameRng::from_state(&checkpoint.rng),
        })
    }

    /// Rebuild a session by re-applying recorded actions from its seed.
    pub fn replay(
        config: SessionConfig,
        seed: u64,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<Self, EngineError> {
        let mut session = Self::new(config, seed)?;
        for action in actions {
            session.apply(action)?;
        }
        Ok(session)
    }
}

impl<D: DiceSource> Session<D> {
    /// Start a session with any dice source.
    pub fn with_dice(config: SessionConfig, dice: D) -> Result<Self, ConfigError> {
        let state = SessionState::new(&config)?;
        Ok(Self {
            config,
            state,
            dice,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Apply an action, committing the new state only on success.
    pub fn apply(&mut self, action: Action) -> Result<&SessionState, RuleViolation> {
        self.state = apply(&self.state, &action, &mut self.dice)?;
        Ok(&self.state)
    }

    pub fn set_bet(&mut self, player: PlayerId, amount: i64) -> Result<i64, RuleViolation> {
        self.apply(Action::SetBet { player, amount })?;
        Ok(self.state.players[player].bet)
    }

    /// Set a bet from form text; unparseable text bets zero.
    pub fn set_bet_text(&mut self, player: PlayerId, text: &str) -> Result<i64, RuleViolation> {
        self.set_bet(player, parse_amount(text))
    }

    pub fn add_bet(&mut self, player: PlayerId, delta: i64) -> Result<i64, RuleViolation> {
        self.apply(Action::AddBet { player, delta })?;
        Ok(self.state.players[player].bet)
    }

    pub fn borrow(&mut self, player: PlayerId, amount: i64) -> Result<(), RuleViolation> {
        self.apply(Action::Borrow { player, amount }).map(|_| ())
    }

    pub fn repay(&mut self, player: PlayerId, amount: i64) -> Result<(), RuleViolation> {
        self.apply(Action::Repay { player, amount }).map(|_| ())
    }

    pub fn confirm_bets(&mut self) -> Result<(), RuleViolation> {
        self.apply(Action::ConfirmBets).map(|_| ())
    }

    #[must_use]
    pub fn can_roll(&self, player: PlayerId) -> bool {
        self.state.active_player() == Some(player)
            && self
                .state
                .player(player)
                .is_some_and(crate::turns::can_roll)
    }

    /// Throw for the active seat and return the authoritative result.
    pub fn roll(&mut self, player: PlayerId) -> Result<Throw, RuleViolation> {
        let (next, throw) = roll(&self.state, player, &mut self.dice)?;
        self.state = next;
        Ok(throw)
    }

    /// End the active seat's turn. Returns the report when this settled
    /// the round.
    pub fn finish_turn(&mut self, player: PlayerId) -> Result<Option<&RoundReport>, RuleViolation> {
        self.apply(Action::FinishTurn { player })?;
        Ok(match self.state.phase() {
            Phase::Result => self.state.last_report(),
            _ => None,
        })
    }

    pub fn next_round(&mut self) -> Result<(), RuleViolation> {
        self.apply(Action::NextRound).map(|_| ())
    }

    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        legal_actions(&self.state)
    }
}
