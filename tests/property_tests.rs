//! Property tests for classification, resolution and settlement.

use proptest::prelude::*;

use chinchiro::core::{Phase, PlayerId, SessionConfig};
use chinchiro::dice::Dice;
use chinchiro::hands::{classify, Hand, HandKind};
use chinchiro::outcome::{decide, resolve, Side};
use chinchiro::rules::Session;

fn any_dice() -> impl Strategy<Value = Dice> {
    prop::array::uniform3(1u8..=6).prop_map(|faces| Dice::new(faces).unwrap())
}

fn any_hand() -> impl Strategy<Value = Hand> {
    prop_oneof![Just(Hand::off_table()), any_dice().prop_map(classify)]
}

// =============================================================================
// Classification and Resolution Properties
// =============================================================================

proptest! {
    #[test]
    fn test_classify_ignores_face_order(dice in any_dice()) {
        let [a, b, c] = dice.faces();
        let expected = classify(dice);

        for faces in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            prop_assert_eq!(classify(Dice::new(faces).unwrap()), expected);
        }
    }

    #[test]
    fn test_point_is_the_odd_face(dice in any_dice()) {
        let hand = classify(dice);
        if hand.kind() == HandKind::Point {
            let [a, b, c] = dice.sorted();
            let odd = if a == b { c } else { a };
            prop_assert_eq!(hand.tie_break(), Some(odd));
        }
    }

    #[test]
    fn test_payout_magnitude(
        banker in any_hand(),
        challenger in any_hand(),
        bet in 0i64..1_000_000,
    ) {
        let (winner, multiplier) = decide(&banker, &challenger);
        let (winning, losing) = match winner {
            Side::Banker => (banker, challenger),
            Side::Challenger => (challenger, banker),
        };

        prop_assert_eq!(
            multiplier,
            winning.win_multiplier().max(losing.loss_multiplier())
        );
        let magnitude = bet * i64::from(multiplier);
        prop_assert_eq!(resolve(&banker, &challenger, bet).abs(), magnitude);
    }

    #[test]
    fn test_ties_never_pay_challenger(hand in any_hand(), bet in 1i64..100_000) {
        prop_assert!(resolve(&hand, &hand, bet) <= 0);
    }

    #[test]
    fn test_stronger_challenger_collects(
        banker in any_hand(),
        challenger in any_hand(),
        bet in 1i64..100_000,
    ) {
        let amount = resolve(&banker, &challenger, bet);
        prop_assert_eq!(amount > 0, challenger > banker);
    }
}

// =============================================================================
// Session Properties
// =============================================================================

proptest! {
    #[test]
    fn test_sessions_stay_zero_sum(
        seed in any::<u64>(),
        players in 2usize..=6,
        bets in prop::collection::vec(1i64..5_000, 6),
        rounds in 1usize..4,
    ) {
        let config = SessionConfig::default_names(players).with_off_table_probability(0.05);
        let mut session = Session::new(config, seed).unwrap();
        let opening: i64 = session.state().players().iter().map(|(_, p)| p.balance).sum();

        for _ in 0..rounds {
            let banker = session.state().banker();
            for seat in PlayerId::all(players).filter(|&seat| seat != banker) {
                // Top up overdrawn seats so every challenger can bet.
                let balance = session.state().players()[seat].balance;
                if balance <= 0 {
                    session.borrow(seat, 10_000 - balance).unwrap();
                }
                session.set_bet(seat, bets[seat.index()]).unwrap();
            }
            session.confirm_bets().unwrap();

            while session.state().phase() == Phase::Acting {
                let seat = session.state().active_player().unwrap();
                while session.can_roll(seat) {
                    session.roll(seat).unwrap();
                }
                session.finish_turn(seat).unwrap();
            }

            let report = session.state().last_report().unwrap();
            prop_assert!(report.is_zero_sum());
            prop_assert!(session.state().check_invariants().is_ok());
            session.next_round().unwrap();
        }

        let state = session.state();
        let closing: i64 = state.players().iter().map(|(_, p)| p.balance).sum();
        let borrowed: i64 = state.players().iter().map(|(_, p)| p.debt).sum();
        prop_assert_eq!(closing, opening + borrowed);
    }
}
