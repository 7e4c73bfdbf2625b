//! Turn order for a round.

use smallvec::SmallVec;

use crate::core::{Player, PlayerId, PlayerMap, MAX_PLAYERS};

/// Seats in acting order. Inline for every legal table size.
pub type TurnOrder = SmallVec<[PlayerId; MAX_PLAYERS]>;

/// Challengers by ascending bet, ties in seat order, banker last.
///
/// ```
/// use chinchiro::core::{Player, PlayerId, PlayerMap};
/// use chinchiro::turns::build_turn_order;
///
/// let bets = [0, 500, 100, 300];
/// let players = PlayerMap::new(4, |seat| {
///     let mut player = Player::new(seat.to_string(), 1_000);
///     player.bet = bets[seat.index()];
///     player
/// });
///
/// let order = build_turn_order(&players, PlayerId::new(0));
/// assert_eq!(
///     order.as_slice(),
///     &[PlayerId::new(2), PlayerId::new(3), PlayerId::new(1), PlayerId::new(0)]
/// );
/// ```
#[must_use]
pub fn build_turn_order(players: &PlayerMap<Player>, banker: PlayerId) -> TurnOrder {
    let mut challengers: SmallVec<[(PlayerId, i64); MAX_PLAYERS]> = players
        .iter()
        .filter(|&(seat, _)| seat != banker)
        .map(|(seat, player)| (seat, player.bet))
        .collect();

    // Stable, so equal bets keep seat order.
    challengers.sort_by_key(|&(_, bet)| bet);

    challengers
        .into_iter()
        .map(|(seat, _)| seat)
        .chain(std::iter::once(banker))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(bets: &[i64]) -> PlayerMap<Player> {
        PlayerMap::new(bets.len(), |seat| {
            let mut player = Player::new(seat.to_string(), 10_000);
            player.bet = bets[seat.index()];
            player
        })
    }

    #[test]
    fn test_ascending_bets_banker_last() {
        let players = table(&[500, 0, 100, 300]);
        let order = build_turn_order(&players, PlayerId::new(1));

        assert_eq!(
            order.as_slice(),
            &[PlayerId::new(2), PlayerId::new(3), PlayerId::new(0), PlayerId::new(1)]
        );
    }

    #[test]
    fn test_equal_bets_keep_seat_order() {
        let players = table(&[200, 200, 0, 200]);
        let order = build_turn_order(&players, PlayerId::new(2));

        assert_eq!(
            order.as_slice(),
            &[PlayerId::new(0), PlayerId::new(1), PlayerId::new(3), PlayerId::new(2)]
        );
    }

    #[test]
    fn test_every_seat_once() {
        let players = table(&[10, 60, 30, 20, 50, 40]);
        let order = build_turn_order(&players, PlayerId::new(4));

        let mut seats = order.to_vec();
        seats.sort();
        assert_eq!(seats, PlayerId::all(6).collect::<Vec<_>>());
        assert_eq!(order.last(), Some(&PlayerId::new(4)));
        assert!(!order.spilled());
    }
}
