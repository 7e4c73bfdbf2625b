//! Hand categories and classification of a throw.
//!
//! Strength is an explicit total order: [`HandKind`] is declared weakest
//! first, and [`Hand`] compares by kind, then by tie-break face for the two
//! kinds that carry one (Triple and Point).

mod classifier;
mod hand;

pub use classifier::classify;
pub use hand::{Hand, HandKind, HandRank};
