//! Error types.
//!
//! Only contract violations are errors. Player input (amounts, bet text) is
//! normalized instead of rejected, so none of these variants describe bad
//! player input; they describe a caller driving the engine out of order.

use thiserror::Error;

use crate::core::{Phase, PlayerId};
use crate::dice::Face;
use crate::hands::HandKind;

/// Problems with a session configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("player count {got} outside {min}..={max}")]
    PlayerCount { got: usize, min: usize, max: usize },
    #[error("starting balance must be positive (got {0})")]
    StartingBalance(i64),
    #[error("off-table probability must lie in 0.0..=1.0 (got {0})")]
    OffTableProbability(f64),
}

/// A transition was requested that the current state does not allow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("invalid phase: expected {expected:?}, found {found:?}")]
    WrongPhase { expected: Phase, found: Phase },
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("{player} acted out of turn (active: {active:?})")]
    NotActiveTurn {
        player: PlayerId,
        active: Option<PlayerId>,
    },
    #[error("{0} has a final hand and cannot roll again")]
    HandIsFinal(PlayerId),
    #[error("{0} cannot finish a turn before the hand is final")]
    HandNotFinal(PlayerId),
    #[error("{0} already finished this turn")]
    TurnAlreadyFinished(PlayerId),
    #[error("the banker ({0}) does not place a bet")]
    BankerCannotBet(PlayerId),
    #[error("{0} has not placed a bet")]
    MissingBet(PlayerId),
    #[error("turn order is incomplete: {finished} of {expected} turns finished")]
    IncompleteTurnOrder { finished: usize, expected: usize },
    #[error("die face {0} outside 1..=6")]
    InvalidFace(Face),
    #[error("{kind:?} cannot carry tie-break {tie_break:?}")]
    InvalidHand {
        kind: HandKind,
        tie_break: Option<Face>,
    },
}

/// Any engine failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    #[error("checkpoint seats {checkpoint} players but the config names {config}")]
    CheckpointMismatch { config: usize, checkpoint: usize },
    #[error("checkpoint breaks a table invariant: {0}")]
    CorruptCheckpoint(&'static str),
}
