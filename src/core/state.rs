//! Session state: one immutable snapshot of the table.
//!
//! ## Phases
//!
//! `Betting -> Acting -> Result -> Betting -> ...` with no terminal phase;
//! the host decides when to stop.
//!
//! ## Snapshots
//!
//! Transitions in [`rules`](crate::rules) never edit a state in place.
//! They clone it (O(1) thanks to `im`), edit the clone, and hand it back
//! only if every check passed.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::SessionConfig;
use super::player::{Player, PlayerId, PlayerMap};
use crate::error::ConfigError;
use crate::settlement::RoundReport;
use crate::turns::{TurnOrder, MAX_ROLLS};

/// Round phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Challengers set bets; anyone may borrow or repay.
    Betting,
    /// Seats take turns in order, banker last.
    Acting,
    /// Round settled; waiting for the next round.
    Result,
}

/// Complete state of a play session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub(crate) players: PlayerMap<Player>,
    pub(crate) banker: PlayerId,
    pub(crate) phase: Phase,
    pub(crate) turn_order: TurnOrder,
    pub(crate) current_turn: usize,
    pub(crate) round: u32,
    pub(crate) history: Vector<ActionRecord>,
    pub(crate) last_report: Option<RoundReport>,
    pub(crate) off_table_probability: f64,
}

impl SessionState {
    /// Seat the configured players. Seat 0 banks the first round.
    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let banker = PlayerId::new(0);
        let players = PlayerMap::new(config.player_count(), |seat| {
            let name = config.display_name(seat.index());
            let mut player = Player::new(name, config.starting_balance);
            player.is_banker = seat == banker;
            player
        });

        Ok(Self {
            players,
            banker,
            phase: Phase::Betting,
            turn_order: TurnOrder::new(),
            current_turn: 0,
            round: 1,
            history: Vector::new(),
            last_report: None,
            off_table_probability: config.off_table_probability,
        })
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.players.get(player)
    }

    #[must_use]
    pub fn banker(&self) -> PlayerId {
        self.banker
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Round number, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Turn order for the current round. Empty while betting.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Index into [`turn_order`](Self::turn_order) of the active turn.
    #[must_use]
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// The one seat allowed to roll or finish, while acting.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Acting => self.turn_order.get(self.current_turn).copied(),
            Phase::Betting | Phase::Result => None,
        }
    }

    /// Every action applied so far.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Report of the most recently settled round.
    #[must_use]
    pub fn last_report(&self) -> Option<&RoundReport> {
        self.last_report.as_ref()
    }

    #[must_use]
    pub fn off_table_probability(&self) -> f64 {
        self.off_table_probability
    }

    /// Verify the table invariants, naming the first one broken.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        let bankers: Vec<_> = self
            .players
            .iter()
            .filter(|(_, p)| p.is_banker)
            .map(|(id, _)| id)
            .collect();
        if bankers != [self.banker] {
            return Err("exactly one player holds the banker flag");
        }

        for (_, player) in self.players.iter() {
            if player.debt < 0 {
                return Err("debt is never negative");
            }
            if player.roll_count > MAX_ROLLS {
                return Err("roll count stays within the roll limit");
            }
            if self.phase != Phase::Result && !(0..=player.balance.max(0)).contains(&player.bet) {
                return Err("bet stays within 0..=balance");
            }
        }

        if self.phase != Phase::Betting {
            let mut seats: Vec<_> = self.turn_order.to_vec();
            seats.sort_unstable();
            if seats != self.players.player_ids().collect::<Vec<_>>() {
                return Err("turn order holds every player exactly once");
            }
            if self.turn_order.last() != Some(&self.banker) {
                return Err("the banker acts last");
            }
        }

        Ok(())
    }
}
