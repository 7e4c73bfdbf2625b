//! Turn sequencing: the per-seat roll state machine and turn order.
//!
//! ## Roll state machine
//!
//! `AwaitingFirstRoll -> HasHand(kind) -> TurnComplete`
//!
//! A seat may throw while it has no hand, or while its hand is No-Score
//! and fewer than [`MAX_ROLLS`] throws were taken. Any other hand is final.
//! Finishing the turn is a separate, explicit step so the final hand is
//! always observable before play moves on.

mod order;
mod sequencer;

pub use order::{build_turn_order, TurnOrder};
pub use sequencer::{
    can_roll, finish_turn, hand_is_final, roll, throw_dice, turn_state, Throw, TurnState, MAX_ROLLS,
};
