//! Actions: every state transition a host can request.
//!
//! Betting and credit actions carry an amount; turn actions name the seat
//! that is acting so out-of-turn calls are caught instead of being applied
//! to whoever happens to be active.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A requested state transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Replace a challenger's bet, clamped to `0..=balance`.
    SetBet { player: PlayerId, amount: i64 },
    /// Add to a challenger's bet, clamping the new total to `0..=balance`.
    AddBet { player: PlayerId, delta: i64 },
    /// Take house credit: balance and debt both grow by `amount`.
    Borrow { player: PlayerId, amount: i64 },
    /// Pay back up to `amount` of debt.
    Repay { player: PlayerId, amount: i64 },
    /// Close betting and start the turn sequence.
    ConfirmBets,
    /// Throw the dice for the active seat.
    Roll { player: PlayerId },
    /// End the active seat's turn. Settles the round after the banker.
    FinishTurn { player: PlayerId },
    /// Rotate the banker and open betting for the next round.
    NextRound,
}

impl Action {
    /// The seat this action names, if any.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match *self {
            Action::SetBet { player, .. }
            | Action::AddBet { player, .. }
            | Action::Borrow { player, .. }
            | Action::Repay { player, .. }
            | Action::Roll { player }
            | Action::FinishTurn { player } => Some(player),
            Action::ConfirmBets | Action::NextRound => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetBet { .. } => "set_bet",
            Action::AddBet { .. } => "add_bet",
            Action::Borrow { .. } => "borrow",
            Action::Repay { .. } => "repay",
            Action::ConfirmBets => "confirm_bets",
            Action::Roll { .. } => "roll",
            Action::FinishTurn { .. } => "finish_turn",
            Action::NextRound => "next_round",
        }
    }
}

/// An applied action with its position in the session.
///
/// Used for:
/// - Replaying a session from its seed
/// - Debugging a disputed round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Round number the action was applied in (starts at 1).
    pub round: u32,

    /// Sequence number within the session.
    pub sequence: u32,

    /// The action applied.
    pub action: Action,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(round: u32, sequence: u32, action: Action) -> Self {
        Self {
            round,
            sequence,
            action,
        }
    }
}
