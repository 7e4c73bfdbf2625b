//! Sources of die faces and override draws.

use std::collections::VecDeque;

use super::triple::{Dice, Face, FACES};

/// Injectable randomness for a throw.
///
/// A throw consumes one [`off_table`](DiceSource::off_table) draw followed
/// by one [`roll_dice`](DiceSource::roll_dice), whatever the draw decided,
/// so the thrown dice are always available for display.
pub trait DiceSource {
    /// One face, uniform over `1..=6`.
    fn roll_die(&mut self) -> Face;

    /// Three independent faces.
    fn roll_dice(&mut self) -> Dice {
        let faces = [self.roll_die(), self.roll_die(), self.roll_die()];
        debug_assert!(faces.iter().all(|face| FACES.contains(face)));
        Dice(faces)
    }

    /// Bernoulli draw deciding whether this throw lands off the table.
    fn off_table(&mut self, probability: f64) -> bool;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll_die(&mut self) -> Face {
        (**self).roll_die()
    }

    fn roll_dice(&mut self) -> Dice {
        (**self).roll_dice()
    }

    fn off_table(&mut self, probability: f64) -> bool {
        (**self).off_table(probability)
    }
}

/// A fixed script of throws.
///
/// Throws are served in order and the script wraps around when exhausted.
/// Off-table draws come from a separate queue and default to `false` once
/// it runs dry, so a plain script never produces an override.
///
/// ```
/// use chinchiro::dice::{Dice, DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([Dice::new([4, 5, 6]).unwrap()])
///     .with_off_table([false, true]);
///
/// assert!(!dice.off_table(0.01));
/// assert_eq!(dice.roll_dice().faces(), [4, 5, 6]);
/// assert!(dice.off_table(0.01));
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    throws: Vec<Dice>,
    cursor: usize,
    overrides: VecDeque<bool>,
}

impl ScriptedDice {
    /// Script the given throws. Panics on an empty script.
    pub fn new(throws: impl IntoIterator<Item = Dice>) -> Self {
        let throws: Vec<Dice> = throws.into_iter().collect();
        assert!(!throws.is_empty(), "Script needs at least one throw");
        Self {
            throws,
            cursor: 0,
            overrides: VecDeque::new(),
        }
    }

    /// Queue off-table draw results, consumed one per throw.
    #[must_use]
    pub fn with_off_table(mut self, draws: impl IntoIterator<Item = bool>) -> Self {
        self.overrides.extend(draws);
        self
    }

    /// Number of full throws served so far.
    #[must_use]
    pub fn throws_served(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> Face {
        let throw = self.roll_dice();
        throw.faces()[0]
    }

    fn roll_dice(&mut self) -> Dice {
        let throw = self.throws[self.cursor % self.throws.len()];
        self.cursor += 1;
        throw
    }

    fn off_table(&mut self, _probability: f64) -> bool {
        self.overrides.pop_front().unwrap_or(false)
    }
}
