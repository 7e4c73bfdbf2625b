//! Bets and house credit.
//!
//! Amounts are normalized, never rejected: bets clamp into `0..=balance`,
//! repayments shrink to what is owed and affordable, and unparseable amount
//! text counts as zero.

mod credit;

pub use credit::{add_bet, borrow, parse_amount, repay, set_bet};
