//! Core engine types: players, configuration, actions, state, RNG.
//!
//! These are the shared building blocks every rule module reads; none of
//! them encode a game rule beyond the table invariants.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{
    SessionConfig, DEFAULT_OFF_TABLE_PROBABILITY, DEFAULT_STARTING_BALANCE, MAX_PLAYERS,
    MIN_PLAYERS,
};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{Phase, SessionState};
