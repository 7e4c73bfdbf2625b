//! Settlement engine.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{Player, PlayerId, PlayerMap};
use crate::hands::Hand;
use crate::outcome::resolve;

/// One seat's line in a round report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementEntry {
    pub player: PlayerId,
    pub name: String,
    pub is_banker: bool,
    /// Hand the seat was settled with.
    pub hand: Hand,
    pub hand_label: String,
    pub bet: i64,
    /// Signed result: positive means the seat collected.
    pub net: i64,
    /// Balance after settlement.
    pub balance: i64,
}

/// Per-seat results of a settled round, in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub banker: PlayerId,
    pub entries: Vec<SettlementEntry>,
}

impl RoundReport {
    #[must_use]
    pub fn entry(&self, player: PlayerId) -> Option<&SettlementEntry> {
        self.entries.iter().find(|entry| entry.player == player)
    }

    #[must_use]
    pub fn banker_net(&self) -> i64 {
        self.entry(self.banker).map_or(0, |entry| entry.net)
    }

    /// Sum of every challenger's net.
    #[must_use]
    pub fn challenger_total(&self) -> i64 {
        self.entries
            .iter()
            .filter(|entry| !entry.is_banker)
            .fold(0i64, |total, entry| total.saturating_add(entry.net))
    }

    #[must_use]
    pub fn is_zero_sum(&self) -> bool {
        self.banker_net().checked_add(self.challenger_total()) == Some(0)
    }
}

fn settled_hand(seat: PlayerId, player: &Player) -> Hand {
    player.hand.unwrap_or_else(|| {
        warn!(player = %seat, "no hand recorded at settlement, scoring as No Score");
        Hand::no_score()
    })
}

/// Resolve every challenger against the banker and apply the nets.
///
/// Missing hands settle as No-Score. Balances change by exactly the nets,
/// and the banker's net is the negated sum of the challengers'. Every sum
/// saturates at the `i64` bounds, so a round that would overflow pins the
/// affected balances instead of wrapping.
pub fn settle(players: &mut PlayerMap<Player>, banker: PlayerId, round: u32) -> RoundReport {
    let hands: Vec<Hand> = players
        .iter()
        .map(|(seat, player)| settled_hand(seat, player))
        .collect();
    let banker_hand = hands[banker.index()];

    let mut banker_net: i64 = 0;
    for (seat, player) in players.iter_mut() {
        if seat == banker {
            continue;
        }
        player.net = resolve(&banker_hand, &hands[seat.index()], player.bet);
        player.balance = player.balance.saturating_add(player.net);
        banker_net = banker_net.saturating_sub(player.net);
    }

    let bank = &mut players[banker];
    bank.net = banker_net;
    bank.balance = bank.balance.saturating_add(banker_net);

    info!(
        round,
        banker = %banker,
        banker_hand = %banker_hand,
        banker_net,
        "round settled"
    );

    let entries = players
        .iter()
        .map(|(seat, player)| {
            let hand = hands[seat.index()];
            SettlementEntry {
                player: seat,
                name: player.name.clone(),
                is_banker: seat == banker,
                hand,
                hand_label: hand.label(),
                bet: player.bet,
                net: player.net,
                balance: player.balance,
            }
        })
        .collect();

    RoundReport {
        round,
        banker,
        entries,
    }
}

/// The seat that banks after `banker`, wrapping around the table.
#[must_use]
pub fn rotate_banker(banker: PlayerId, player_count: usize) -> PlayerId {
    banker.next_seat(player_count)
}

/// Hand the banker flag to `banker` and clear every per-round field.
///
/// Balances and debts carry over untouched.
pub fn reset_for_next_round(players: &mut PlayerMap<Player>, banker: PlayerId) {
    for (seat, player) in players.iter_mut() {
        player.reset_for_round();
        player.is_banker = seat == banker;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(hands: &[Option<Hand>], bets: &[i64]) -> PlayerMap<Player> {
        PlayerMap::new(hands.len(), |seat| {
            let mut player = Player::new(format!("P{}", seat.index()), 10_000);
            player.hand = hands[seat.index()];
            player.bet = bets[seat.index()];
            player.is_banker = seat.index() == 0;
            player
        })
    }

    #[test]
    fn test_settle_zero_sum() {
        let mut players = table(
            &[
                Some(Hand::point(4)),
                Some(Hand::triple_ones()),
                Some(Hand::hifumi()),
                Some(Hand::point(4)),
            ],
            &[0, 1_000, 2_000, 500],
        );

        let report = settle(&mut players, PlayerId::new(0), 1);

        assert_eq!(players[PlayerId::new(1)].net, 5_000);
        assert_eq!(players[PlayerId::new(2)].net, -4_000);
        assert_eq!(players[PlayerId::new(3)].net, -500);
        assert_eq!(players[PlayerId::new(0)].net, -500);

        assert_eq!(players[PlayerId::new(0)].balance, 9_500);
        assert_eq!(players[PlayerId::new(1)].balance, 15_000);
        assert_eq!(players[PlayerId::new(2)].balance, 6_000);

        assert!(report.is_zero_sum());
        assert_eq!(report.banker_net(), -500);
        assert_eq!(report.entry(PlayerId::new(2)).unwrap().hand_label, "Hifumi (2x loss)");
    }

    #[test]
    fn test_missing_hand_settles_as_no_score() {
        let mut players = table(&[Some(Hand::no_score()), None], &[0, 300]);

        let report = settle(&mut players, PlayerId::new(0), 4);

        // Tie at No-Score goes to the banker.
        assert_eq!(players[PlayerId::new(1)].net, -300);
        assert_eq!(report.entry(PlayerId::new(1)).unwrap().hand, Hand::no_score());
        assert_eq!(report.round, 4);
    }

    #[test]
    fn test_settlement_can_overdraw() {
        let mut players = table(&[Some(Hand::triple_ones()), Some(Hand::point(2))], &[0, 10_000]);

        settle(&mut players, PlayerId::new(0), 1);

        assert_eq!(players[PlayerId::new(1)].balance, -40_000);
        assert_eq!(players[PlayerId::new(0)].balance, 60_000);
    }

    #[test]
    fn test_settlement_saturates_instead_of_wrapping() {
        let bet = i64::MAX / 2 + 20_000;
        let mut players = table(&[Some(Hand::point(3)), Some(Hand::triple(6))], &[0, bet]);
        players[PlayerId::new(1)].balance = bet;

        let report = settle(&mut players, PlayerId::new(0), 1);

        assert_eq!(players[PlayerId::new(1)].net, i64::MAX);
        assert_eq!(players[PlayerId::new(1)].balance, i64::MAX);
        assert_eq!(players[PlayerId::new(0)].net, -i64::MAX);
        assert_eq!(players[PlayerId::new(0)].balance, 10_000 - i64::MAX);
        assert!(report.is_zero_sum());
    }

    #[test]
    fn test_rotate_wraps() {
        assert_eq!(rotate_banker(PlayerId::new(0), 3), PlayerId::new(1));
        assert_eq!(rotate_banker(PlayerId::new(2), 3), PlayerId::new(0));
    }

    #[test]
    fn test_reset_keeps_money_moves_flag() {
        let mut players = table(&[Some(Hand::point(1)), Some(Hand::point(2))], &[0, 700]);
        players[PlayerId::new(1)].debt = 2_000;
        settle(&mut players, PlayerId::new(0), 1);
        let balances: Vec<_> = players.iter().map(|(_, p)| p.balance).collect();

        reset_for_next_round(&mut players, PlayerId::new(1));

        for (seat, player) in players.iter() {
            assert_eq!(player.balance, balances[seat.index()]);
            assert_eq!(player.bet, 0);
            assert_eq!(player.net, 0);
            assert_eq!(player.hand, None);
            assert_eq!(player.is_banker, seat == PlayerId::new(1));
        }
        assert_eq!(players[PlayerId::new(1)].debt, 2_000);
    }
}
