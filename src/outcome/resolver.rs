//! Outcome resolution.
//!
//! Pure functions only: the same hands and bet always settle the same way.
//!
//! ## Rules
//!
//! - The stronger hand wins; equal strength goes to the banker.
//! - The payout multiplier is the larger of the winner's win multiplier and
//!   the loser's loss multiplier, so a losing Hifumi pays double even
//!   against a one-times winner.
//! - Amounts are signed from the challenger's side: positive when the
//!   challenger collects, negative when the challenger pays.
//! - Amounts saturate at the `i64` bounds instead of wrapping.

use serde::{Deserialize, Serialize};

use crate::hands::Hand;

/// Which side of a banker/challenger comparison won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Banker,
    Challenger,
}

/// Result of comparing one challenger against the banker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Side,
    pub multiplier: u32,
    /// Signed amount from the challenger's side.
    pub amount: i64,
}

/// Decide the winner and multiplier without a bet.
#[must_use]
pub fn decide(banker: &Hand, challenger: &Hand) -> (Side, u32) {
    let (winner, winning, losing) = if banker.rank() >= challenger.rank() {
        (Side::Banker, banker, challenger)
    } else {
        (Side::Challenger, challenger, banker)
    };
    (winner, winning.win_multiplier().max(losing.loss_multiplier()))
}

/// Full outcome for a bet.
#[must_use]
pub fn outcome(banker: &Hand, challenger: &Hand, bet: i64) -> Outcome {
    let (winner, multiplier) = decide(banker, challenger);
    let magnitude = bet.saturating_mul(i64::from(multiplier));
    let amount = match winner {
        Side::Challenger => magnitude,
        Side::Banker => magnitude.saturating_neg(),
    };
    Outcome {
        winner,
        multiplier,
        amount,
    }
}

/// Signed settlement amount for a challenger's bet.
///
/// ```
/// use chinchiro::hands::Hand;
/// use chinchiro::outcome::resolve;
///
/// // Banker Triple Ones beats Point 6 at five times the bet.
/// assert_eq!(resolve(&Hand::triple_ones(), &Hand::point(6), 1000), -5000);
/// ```
#[must_use]
pub fn resolve(banker: &Hand, challenger: &Hand, bet: i64) -> i64 {
    outcome(banker, challenger, bet).amount
}
