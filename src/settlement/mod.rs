//! Round settlement and banker rotation.
//!
//! Every challenger is resolved against the banker's hand; the banker takes
//! the negated sum, so each settled round is zero-sum across the table.

mod engine;

pub use engine::{reset_for_next_round, rotate_banker, settle, RoundReport, SettlementEntry};
