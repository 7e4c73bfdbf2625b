//! Banker-versus-challenger comparison and payout.

mod resolver;

pub use resolver::{decide, outcome, resolve, Outcome, Side};
