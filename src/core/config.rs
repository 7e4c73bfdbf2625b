//! Session configuration.
//!
//! A host builds a `SessionConfig` once at session start. Everything else
//! about the table (banker seat, turn order, phase) is derived state.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fewest seats a table can run with.
pub const MIN_PLAYERS: usize = 2;
/// Most seats a table can run with.
pub const MAX_PLAYERS: usize = 6;
/// Balance each seat starts with unless configured otherwise.
pub const DEFAULT_STARTING_BALANCE: i64 = 20_000;
/// Chance per throw that the dice land off the table.
pub const DEFAULT_OFF_TABLE_PROBABILITY: f64 = 0.01;

/// Configuration accepted at session start.
///
/// ## Example
///
/// ```
/// use chinchiro::core::SessionConfig;
///
/// let config = SessionConfig::new(["Aki", "Ren", ""])
///     .with_starting_balance(50_000)
///     .with_off_table_probability(0.0);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.player_count(), 3);
/// assert_eq!(config.display_name(2), "Player 3");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Balance every seat starts with.
    pub starting_balance: i64,

    /// One name per seat, in registration order.
    pub player_names: Vec<String>,

    /// Probability that any single throw is forced off the table.
    pub off_table_probability: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::default_names(MIN_PLAYERS)
    }
}

impl SessionConfig {
    /// Configure a table with the given seat names.
    pub fn new<I, S>(player_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            player_names: player_names.into_iter().map(Into::into).collect(),
            off_table_probability: DEFAULT_OFF_TABLE_PROBABILITY,
        }
    }

    /// Configure `player_count` seats named `Player 1`, `Player 2`, ...
    pub fn default_names(player_count: usize) -> Self {
        Self::new((1..=player_count).map(|n| format!("Player {n}")))
    }

    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    #[must_use]
    pub fn with_off_table_probability(mut self, probability: f64) -> Self {
        self.off_table_probability = probability;
        self
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    /// Name shown for a seat. Blank names fall back to `Player N`.
    #[must_use]
    pub fn display_name(&self, seat: usize) -> String {
        match self.player_names.get(seat).map(|name| name.trim()) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Player {}", seat + 1),
        }
    }

    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.player_count();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(ConfigError::PlayerCount {
                got: count,
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }
        if self.starting_balance <= 0 {
            return Err(ConfigError::StartingBalance(self.starting_balance));
        }
        if !(0.0..=1.0).contains(&self.off_table_probability) {
            return Err(ConfigError::OffTableProbability(self.off_table_probability));
        }
        Ok(())
    }
}
