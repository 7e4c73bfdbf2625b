//! The transition function.
//!
//! `apply(state, action, dice) -> Result<state>` is the only way a session
//! moves. Each call validates the action against the current phase and the
//! active turn, builds the next snapshot from a clone, and returns it. The
//! input state is never modified, so a rejected action leaves nothing
//! half-applied.

use tracing::{debug, info};

use crate::core::{Action, ActionRecord, Phase, Player, PlayerId, SessionState};
use crate::dice::DiceSource;
use crate::error::RuleViolation;
use crate::ledger;
use crate::settlement::{reset_for_next_round, rotate_banker, settle};
use crate::turns::{self, build_turn_order, Throw};

fn expect_phase(state: &SessionState, expected: Phase) -> Result<(), RuleViolation> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(RuleViolation::WrongPhase {
            expected,
            found: state.phase,
        })
    }
}

fn seat_mut(state: &mut SessionState, player: PlayerId) -> Result<&mut Player, RuleViolation> {
    state
        .players
        .get_mut(player)
        .ok_or(RuleViolation::UnknownPlayer(player))
}

/// A betting seat: betting phase, seated, not the banker.
fn challenger_mut(
    state: &mut SessionState,
    player: PlayerId,
) -> Result<&mut Player, RuleViolation> {
    expect_phase(state, Phase::Betting)?;
    if player == state.banker && state.players.contains(player) {
        return Err(RuleViolation::BankerCannotBet(player));
    }
    seat_mut(state, player)
}

/// The active seat: acting phase, seated, holding the current turn.
fn active_mut(state: &mut SessionState, player: PlayerId) -> Result<&mut Player, RuleViolation> {
    expect_phase(state, Phase::Acting)?;
    if !state.players.contains(player) {
        return Err(RuleViolation::UnknownPlayer(player));
    }
    let active = state.active_player();
    if active != Some(player) {
        return Err(RuleViolation::NotActiveTurn { player, active });
    }
    seat_mut(state, player)
}

/// Whether every challenger has a positive bet.
#[must_use]
pub fn bets_ready(state: &SessionState) -> bool {
    first_missing_bet(state).is_none()
}

fn first_missing_bet(state: &SessionState) -> Option<PlayerId> {
    state
        .players
        .iter()
        .find(|&(seat, player)| seat != state.banker && player.bet <= 0)
        .map(|(seat, _)| seat)
}

fn confirm_bets(state: &mut SessionState) -> Result<(), RuleViolation> {
    expect_phase(state, Phase::Betting)?;
    if let Some(seat) = first_missing_bet(state) {
        return Err(RuleViolation::MissingBet(seat));
    }

    state.turn_order = build_turn_order(&state.players, state.banker);
    for (_, player) in state.players.iter_mut() {
        player.clear_turn();
    }
    state.current_turn = 0;
    state.phase = Phase::Acting;

    info!(
        round = state.round,
        banker = %state.banker,
        order = ?state.turn_order.as_slice(),
        "bets confirmed"
    );
    Ok(())
}

fn finish_turn(state: &mut SessionState, player: PlayerId) -> Result<(), RuleViolation> {
    turns::finish_turn(player, active_mut(state, player)?)?;

    if state.current_turn + 1 < state.turn_order.len() {
        state.current_turn += 1;
        return Ok(());
    }

    let finished = state
        .players
        .iter()
        .filter(|(_, player)| player.turn_finished)
        .count();
    if finished != state.turn_order.len() {
        return Err(RuleViolation::IncompleteTurnOrder {
            finished,
            expected: state.turn_order.len(),
        });
    }

    let report = settle(&mut state.players, state.banker, state.round);
    state.last_report = Some(report);
    state.phase = Phase::Result;
    Ok(())
}

fn next_round(state: &mut SessionState) -> Result<(), RuleViolation> {
    expect_phase(state, Phase::Result)?;

    let banker = rotate_banker(state.banker, state.player_count());
    reset_for_next_round(&mut state.players, banker);
    state.banker = banker;
    state.turn_order.clear();
    state.current_turn = 0;
    state.round += 1;
    state.phase = Phase::Betting;

    info!(round = state.round, banker = %banker, "round opened");
    Ok(())
}

fn record(state: &SessionState, mut next: SessionState, action: &Action) -> SessionState {
    let sequence = next.history.len() as u32;
    next.history
        .push_back(ActionRecord::new(state.round, sequence, action.clone()));
    debug_assert_eq!(next.check_invariants(), Ok(()));
    next
}

/// Throw for the active seat, returning the next state and the throw.
pub(crate) fn roll<D: DiceSource + ?Sized>(
    state: &SessionState,
    player: PlayerId,
    dice: &mut D,
) -> Result<(SessionState, Throw), RuleViolation> {
    let mut next = state.clone();
    let probability = next.off_table_probability;
    let seat = active_mut(&mut next, player)?;
    let throw = turns::roll(player, seat, dice, probability)?;
    Ok((record(state, next, &Action::Roll { player }), throw))
}

/// Apply one action to a state, producing the next state.
///
/// ## Example
///
/// ```
/// use chinchiro::core::{Action, Phase, PlayerId, SessionConfig, SessionState};
/// use chinchiro::dice::{Dice, ScriptedDice};
/// use chinchiro::rules::apply;
///
/// let state = SessionState::new(&SessionConfig::default()).unwrap();
/// let mut dice = ScriptedDice::new([Dice::new([2, 2, 6]).unwrap()]);
///
/// let bet = Action::SetBet { player: PlayerId::new(1), amount: 1_000 };
/// let state = apply(&state, &bet, &mut dice).unwrap();
/// let state = apply(&state, &Action::ConfirmBets, &mut dice).unwrap();
///
/// assert_eq!(state.phase(), Phase::Acting);
/// assert_eq!(state.active_player(), Some(PlayerId::new(1)));
/// ```
pub fn apply<D: DiceSource + ?Sized>(
    state: &SessionState,
    action: &Action,
    dice: &mut D,
) -> Result<SessionState, RuleViolation> {
    let mut next = state.clone();

    match *action {
        Action::SetBet { player, amount } => {
            let seat = challenger_mut(&mut next, player)?;
            ledger::set_bet(seat, amount);
            debug!(player = %player, bet = seat.bet, "bet set");
        }
        Action::AddBet { player, delta } => {
            let seat = challenger_mut(&mut next, player)?;
            ledger::add_bet(seat, delta);
            debug!(player = %player, bet = seat.bet, "bet raised");
        }
        Action::Borrow { player, amount } => {
            expect_phase(&next, Phase::Betting)?;
            let seat = seat_mut(&mut next, player)?;
            let borrowed = ledger::borrow(seat, amount);
            debug!(player = %player, borrowed, debt = seat.debt, "credit extended");
        }
        Action::Repay { player, amount } => {
            expect_phase(&next, Phase::Betting)?;
            let seat = seat_mut(&mut next, player)?;
            let repaid = ledger::repay(seat, amount);
            debug!(player = %player, repaid, debt = seat.debt, "credit repaid");
        }
        Action::ConfirmBets => confirm_bets(&mut next)?,
        Action::Roll { player } => return roll(state, player, dice).map(|(next, _)| next),
        Action::FinishTurn { player } => finish_turn(&mut next, player)?,
        Action::NextRound => next_round(&mut next)?,
    }

    Ok(record(state, next, action))
}

/// Discrete actions available right now.
///
/// Amount-carrying actions (bets, credit) are always open during betting
/// and are not enumerated.
#[must_use]
pub fn legal_actions(state: &SessionState) -> Vec<Action> {
    match state.phase {
        Phase::Betting if bets_ready(state) => vec![Action::ConfirmBets],
        Phase::Betting => Vec::new(),
        Phase::Acting => {
            let Some(player) = state.active_player() else {
                return Vec::new();
            };
            let seat = &state.players[player];
            let mut actions = Vec::new();
            if turns::can_roll(seat) {
                actions.push(Action::Roll { player });
            }
            if turns::hand_is_final(seat) {
                actions.push(Action::FinishTurn { player });
            }
            actions
        }
        Phase::Result => vec![Action::NextRound],
    }
}
