//! Per-seat roll state machine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Player, PlayerId};
use crate::dice::{Dice, DiceSource};
use crate::error::RuleViolation;
use crate::hands::{classify, Hand, HandKind};

/// Throws allowed per turn.
pub const MAX_ROLLS: u8 = 3;

/// Where a seat stands within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    AwaitingFirstRoll,
    HasHand(HandKind),
    TurnComplete,
}

/// One authoritative throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Throw {
    /// Faces that came up. Kept even when the throw went off the table.
    pub dice: Dice,
    pub hand: Hand,
    pub off_table: bool,
}

#[must_use]
pub fn turn_state(player: &Player) -> TurnState {
    if player.turn_finished {
        return TurnState::TurnComplete;
    }
    match player.hand {
        None => TurnState::AwaitingFirstRoll,
        Some(hand) => TurnState::HasHand(hand.kind()),
    }
}

/// Whether the seat may throw again this turn.
#[must_use]
pub fn can_roll(player: &Player) -> bool {
    if player.turn_finished || player.roll_count >= MAX_ROLLS {
        return false;
    }
    match player.hand {
        None => true,
        Some(hand) => hand.kind() == HandKind::NoScore,
    }
}

/// Whether the seat holds a hand it can no longer improve.
#[must_use]
pub fn hand_is_final(player: &Player) -> bool {
    player.hand.is_some() && !can_roll(player)
}

/// Draw the override first, then throw; the override replaces the hand
/// but never the dice.
pub fn throw_dice<D: DiceSource + ?Sized>(source: &mut D, off_table_probability: f64) -> Throw {
    let off_table = source.off_table(off_table_probability);
    let dice = source.roll_dice();
    let hand = if off_table {
        Hand::off_table()
    } else {
        classify(dice)
    };
    Throw {
        dice,
        hand,
        off_table,
    }
}

/// Throw for `seat` and record the result on `player`.
///
/// The player is left untouched when the throw is not allowed.
pub fn roll<D: DiceSource + ?Sized>(
    seat: PlayerId,
    player: &mut Player,
    source: &mut D,
    off_table_probability: f64,
) -> Result<Throw, RuleViolation> {
    if player.turn_finished {
        return Err(RuleViolation::TurnAlreadyFinished(seat));
    }
    if !can_roll(player) {
        return Err(RuleViolation::HandIsFinal(seat));
    }

    let throw = throw_dice(source, off_table_probability);
    player.dice = Some(throw.dice);
    player.hand = Some(throw.hand);
    player.roll_count += 1;

    debug!(
        player = %seat,
        dice = %throw.dice,
        hand = %throw.hand,
        roll = player.roll_count,
        off_table = throw.off_table,
        "dice thrown"
    );

    Ok(throw)
}

/// Mark the turn complete. Requires a final hand.
pub fn finish_turn(seat: PlayerId, player: &mut Player) -> Result<(), RuleViolation> {
    if player.turn_finished {
        return Err(RuleViolation::TurnAlreadyFinished(seat));
    }
    if !hand_is_final(player) {
        return Err(RuleViolation::HandNotFinal(seat));
    }
    player.turn_finished = true;
    Ok(())
}
