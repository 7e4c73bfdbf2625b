//! Credit ledger and bet management.

use crate::core::Player;

fn clamp_bet(player: &Player, amount: i64) -> i64 {
    amount.clamp(0, player.balance.max(0))
}

/// Replace the bet, clamped to `0..=balance`.
pub fn set_bet(player: &mut Player, amount: i64) {
    player.bet = clamp_bet(player, amount);
}

/// Add `delta` to the bet and clamp the new total to `0..=balance`.
///
/// The cap is the full balance, not the balance left after the current
/// bet, so repeated additions stop at an all-in bet.
pub fn add_bet(player: &mut Player, delta: i64) {
    let total = player.bet.saturating_add(delta);
    player.bet = clamp_bet(player, total);
}

/// Extend house credit: balance and debt both grow by `amount`.
///
/// Non-positive amounts leave the player unchanged. Returns the amount
/// actually borrowed.
pub fn borrow(player: &mut Player, amount: i64) -> i64 {
    if amount <= 0 {
        return 0;
    }
    player.balance = player.balance.saturating_add(amount);
    player.debt = player.debt.saturating_add(amount);
    amount
}

/// Repay up to `requested`, limited by both debt and balance.
///
/// A standing bet shrinks with the balance if it no longer fits. Returns
/// the amount actually repaid; zero means nothing changed.
///
/// ```
/// use chinchiro::core::Player;
/// use chinchiro::ledger::repay;
///
/// let mut player = Player::new("Aki", 12_000);
/// player.debt = 5_000;
///
/// assert_eq!(repay(&mut player, 8_000), 5_000);
/// assert_eq!((player.balance, player.debt), (7_000, 0));
/// assert_eq!(repay(&mut player, 100), 0);
/// ```
pub fn repay(player: &mut Player, requested: i64) -> i64 {
    let actual = requested.min(player.debt).min(player.balance);
    if actual <= 0 {
        return 0;
    }
    player.balance -= actual;
    player.debt -= actual;
    player.bet = clamp_bet(player, player.bet);
    actual
}

/// Parse amount text from a form field. Anything unparseable is zero.
///
/// ```
/// use chinchiro::ledger::parse_amount;
///
/// assert_eq!(parse_amount(" 1500 "), 1500);
/// assert_eq!(parse_amount("abc"), 0);
/// ```
#[must_use]
pub fn parse_amount(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(balance: i64) -> Player {
        Player::new("Mio", balance)
    }

    #[test]
    fn test_set_bet_clamps() {
        let mut p = player(1_000);

        set_bet(&mut p, 400);
        assert_eq!(p.bet, 400);

        set_bet(&mut p, 5_000);
        assert_eq!(p.bet, 1_000);

        set_bet(&mut p, -50);
        assert_eq!(p.bet, 0);
    }

    #[test]
    fn test_add_bet_caps_at_full_balance() {
        let mut p = player(2_500);

        add_bet(&mut p, 1_000);
        add_bet(&mut p, 1_000);
        assert_eq!(p.bet, 2_000);

        add_bet(&mut p, 1_000);
        assert_eq!(p.bet, 2_500);

        add_bet(&mut p, -10_000);
        assert_eq!(p.bet, 0);
    }

    #[test]
    fn test_add_bet_saturates() {
        let mut p = player(100);
        set_bet(&mut p, 100);
        add_bet(&mut p, i64::MAX);
        assert_eq!(p.bet, 100);
    }

    #[test]
    fn test_bet_with_overdrawn_balance() {
        let mut p = player(-300);
        set_bet(&mut p, 100);
        assert_eq!(p.bet, 0);
    }

    #[test]
    fn test_borrow() {
        let mut p = player(1_000);

        assert_eq!(borrow(&mut p, 10_000), 10_000);
        assert_eq!(p.balance, 11_000);
        assert_eq!(p.debt, 10_000);

        assert_eq!(borrow(&mut p, 0), 0);
        assert_eq!(borrow(&mut p, -5), 0);
        assert_eq!(p.balance, 11_000);
        assert_eq!(p.debt, 10_000);
    }

    #[test]
    fn test_repay_bounded_by_debt() {
        let mut p = player(12_000);
        p.debt = 5_000;

        assert_eq!(repay(&mut p, 8_000), 5_000);
        assert_eq!(p.debt, 0);
        assert_eq!(p.balance, 7_000);

        assert_eq!(repay(&mut p, 100), 0);
        assert_eq!(p.balance, 7_000);
    }

    #[test]
    fn test_repay_bounded_by_balance() {
        let mut p = player(2_000);
        p.debt = 10_000;

        assert_eq!(repay(&mut p, 10_000), 2_000);
        assert_eq!(p.balance, 0);
        assert_eq!(p.debt, 8_000);
    }

    #[test]
    fn test_repay_shrinks_standing_bet() {
        let mut p = player(3_000);
        p.debt = 2_000;
        set_bet(&mut p, 2_500);

        assert_eq!(repay(&mut p, 2_000), 2_000);
        assert_eq!(p.balance, 1_000);
        assert_eq!(p.bet, 1_000);
    }

    #[test]
    fn test_repay_non_positive_is_noop() {
        let mut p = player(3_000);
        p.debt = 1_000;
        let before = p.clone();

        assert_eq!(repay(&mut p, 0), 0);
        assert_eq!(repay(&mut p, -500), 0);
        assert_eq!(p, before);

        p.balance = -100;
        assert_eq!(repay(&mut p, 500), 0);
        assert_eq!(p.debt, 1_000);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("20000"), 20_000);
        assert_eq!(parse_amount(""), 0);
        assert_eq!(parse_amount("12k"), 0);
        assert_eq!(parse_amount("-40"), -40);
    }
}
