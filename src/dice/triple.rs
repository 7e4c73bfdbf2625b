//! The three-die throw.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::RuleViolation;

/// A single die face, 1 through 6.
pub type Face = u8;

/// Every legal face value.
pub const FACES: RangeInclusive<Face> = 1..=6;

/// Three die faces in the order they were thrown.
///
/// Order carries no meaning for scoring; [`Dice::sorted`] is what the
/// classifier reads. Construction validates every face, so a `Dice` value
/// always holds faces in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Face; 3]", into = "[Face; 3]")]
pub struct Dice(pub(super) [Face; 3]);

impl Dice {
    /// Validate and wrap three faces.
    pub fn new(faces: [Face; 3]) -> Result<Self, RuleViolation> {
        match faces.iter().find(|&&face| !FACES.contains(&face)) {
            Some(&bad) => Err(RuleViolation::InvalidFace(bad)),
            None => Ok(Self(faces)),
        }
    }

    /// Faces as thrown.
    #[must_use]
    pub const fn faces(self) -> [Face; 3] {
        self.0
    }

    /// Faces in ascending order.
    #[must_use]
    pub fn sorted(self) -> [Face; 3] {
        let mut faces = self.0;
        faces.sort_unstable();
        faces
    }

    /// All 216 ordered throws.
    pub fn all() -> impl Iterator<Item = Dice> {
        FACES.flat_map(|a| FACES.flat_map(move |b| FACES.map(move |c| Dice([a, b, c]))))
    }
}

impl TryFrom<[Face; 3]> for Dice {
    type Error = RuleViolation;

    fn try_from(faces: [Face; 3]) -> Result<Self, Self::Error> {
        Self::new(faces)
    }
}

impl From<Dice> for [Face; 3] {
    fn from(dice: Dice) -> Self {
        dice.0
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}-{b}-{c}")
    }
}
