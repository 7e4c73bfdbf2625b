//! Die faces, the three-die throw, and pluggable randomness.
//!
//! Everything random in the engine goes through [`DiceSource`]. The session
//! uses the seeded [`GameRng`](crate::core::GameRng); tests and replays can
//! substitute [`ScriptedDice`] to pin every throw.

mod source;
mod triple;

pub use source::{DiceSource, ScriptedDice};
pub use triple::{Dice, Face, FACES};
