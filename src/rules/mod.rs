//! Game rules: the transition function and the session controller.
//!
//! - [`apply`] turns a state and an action into the next state
//! - [`legal_actions`] lists the discrete actions open right now
//! - [`Session`] owns a state and a dice source for hosts that prefer
//!   method calls over threading snapshots themselves

pub mod engine;
pub mod session;

pub use engine::{apply, bets_ready, legal_actions};
pub use session::{Checkpoint, Session};
