//! # chinchiro
//!
//! Round-settlement rule engine for chinchirorin, the banker-versus-table
//! three-dice game.
//!
//! Each round one seat banks. Every other seat (a challenger) bets, then
//! throws three dice up to three times to make a hand; the banker throws
//! last. Each challenger is settled against the banker's hand and the
//! banker takes the other side of every settlement, so rounds are zero-sum.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: the session moves only through
//!    [`rules::apply`], which maps `(state, action)` to a new state.
//!
//! 2. **Injectable randomness**: every throw goes through a
//!    [`DiceSource`]; seeded [`GameRng`] for play, [`ScriptedDice`] for
//!    tests and replays.
//!
//! 3. **Normalize input, reject misuse**: amounts are clamped and parsed
//!    leniently; acting out of turn or out of phase is a [`RuleViolation`].
//!
//! ## Modules
//!
//! - `core`: Players, configuration, actions, state, RNG
//! - `dice`: Faces, throws, dice sources
//! - `hands`: Hand categories and classification
//! - `outcome`: Banker-versus-challenger resolution
//! - `turns`: Roll state machine and turn order
//! - `settlement`: Zero-sum settlement and banker rotation
//! - `ledger`: Bets and house credit
//! - `rules`: Transition function and session controller

pub mod core;
pub mod dice;
pub mod error;
pub mod hands;
pub mod ledger;
pub mod outcome;
pub mod rules;
pub mod settlement;
pub mod turns;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameRng, GameRngState, Phase, Player, PlayerId, PlayerMap, SessionConfig,
    SessionState,
};

pub use crate::dice::{Dice, DiceSource, Face, ScriptedDice};

pub use crate::error::{ConfigError, EngineError, RuleViolation};

pub use crate::hands::{classify, Hand, HandKind, HandRank};

pub use crate::outcome::{resolve, Outcome, Side};

pub use crate::turns::{build_turn_order, can_roll, Throw, TurnOrder, TurnState, MAX_ROLLS};

pub use crate::settlement::{RoundReport, SettlementEntry};

pub use crate::rules::{apply, legal_actions, Checkpoint, Session};
