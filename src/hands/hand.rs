//! Hand representation and ordering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::dice::{Face, FACES};
use crate::error::RuleViolation;

/// Hand category, declared from weakest to strongest.
///
/// The derived `Ord` is the strength order used for comparison:
/// `OffTable < Hifumi < NoScore < Point < HighStraight < Triple < TripleOnes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HandKind {
    /// Dice left the table. Forced by a rare draw, not by the faces.
    OffTable,
    /// 1-2-3.
    Hifumi,
    /// No pair and no pattern.
    NoScore,
    /// A pair plus a singleton; the singleton is the point.
    Point,
    /// 4-5-6.
    HighStraight,
    /// Three of a kind, 2 through 6.
    Triple,
    /// 1-1-1.
    TripleOnes,
}

impl HandKind {
    /// Every kind, weakest first.
    pub const ALL: [HandKind; 7] = [
        HandKind::OffTable,
        HandKind::Hifumi,
        HandKind::NoScore,
        HandKind::Point,
        HandKind::HighStraight,
        HandKind::Triple,
        HandKind::TripleOnes,
    ];

    /// Multiplier applied when this hand wins.
    #[must_use]
    pub const fn win_multiplier(self) -> u32 {
        match self {
            HandKind::TripleOnes => 5,
            HandKind::Triple => 3,
            HandKind::HighStraight => 2,
            _ => 1,
        }
    }

    /// Multiplier applied when this hand loses.
    #[must_use]
    pub const fn loss_multiplier(self) -> u32 {
        match self {
            HandKind::Hifumi => 2,
            _ => 1,
        }
    }

    /// Whether hands of this kind are ordered among themselves by a face.
    #[must_use]
    pub const fn has_tie_break(self) -> bool {
        matches!(self, HandKind::Triple | HandKind::Point)
    }

    /// Kinds a presentation layer announces with a cut-in.
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, HandKind::Point | HandKind::NoScore)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HandKind::OffTable => "Off Table",
            HandKind::Hifumi => "Hifumi",
            HandKind::NoScore => "No Score",
            HandKind::Point => "Point",
            HandKind::HighStraight => "High Straight",
            HandKind::Triple => "Triple",
            HandKind::TripleOnes => "Triple Ones",
        }
    }
}

/// Comparable strength of a hand: kind first, then tie-break face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandRank {
    pub kind: HandKind,
    pub tie_break: Face,
}

/// A classified hand.
///
/// Only Triple and Point carry a tie-break face; the constructors and
/// deserialization enforce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHand")]
pub struct Hand {
    kind: HandKind,
    tie_break: Option<Face>,
}

#[derive(Deserialize)]
struct RawHand {
    kind: HandKind,
    tie_break: Option<Face>,
}

impl TryFrom<RawHand> for Hand {
    type Error = RuleViolation;

    fn try_from(raw: RawHand) -> Result<Self, Self::Error> {
        Self::new(raw.kind, raw.tie_break)
    }
}

impl Hand {
    /// Build a hand from its parts, checking the tie-break face.
    ///
    /// Triple takes a face in `2..=6`, Point a face in `1..=6`; every other
    /// kind takes none.
    pub fn new(kind: HandKind, tie_break: Option<Face>) -> Result<Self, RuleViolation> {
        let valid = match (kind, tie_break) {
            (HandKind::Triple, Some(face)) => (2..=6).contains(&face),
            (HandKind::Point, Some(face)) => FACES.contains(&face),
            (kind, None) => !kind.has_tie_break(),
            (_, Some(_)) => false,
        };
        if valid {
            Ok(Self { kind, tie_break })
        } else {
            Err(RuleViolation::InvalidHand { kind, tie_break })
        }
    }

    const fn plain(kind: HandKind) -> Self {
        Self {
            kind,
            tie_break: None,
        }
    }

    #[must_use]
    pub const fn triple_ones() -> Self {
        Self::plain(HandKind::TripleOnes)
    }

    /// Three of `face`. `face` is expected in `2..=6`; ones are
    /// [`Hand::triple_ones`].
    #[must_use]
    pub const fn triple(face: Face) -> Self {
        Self {
            kind: HandKind::Triple,
            tie_break: Some(face),
        }
    }

    #[must_use]
    pub const fn high_straight() -> Self {
        Self::plain(HandKind::HighStraight)
    }

    /// Pair plus the singleton `point`.
    #[must_use]
    pub const fn point(point: Face) -> Self {
        Self {
            kind: HandKind::Point,
            tie_break: Some(point),
        }
    }

    #[must_use]
    pub const fn no_score() -> Self {
        Self::plain(HandKind::NoScore)
    }

    #[must_use]
    pub const fn hifumi() -> Self {
        Self::plain(HandKind::Hifumi)
    }

    /// The forced off-table hand. Independent of any dice.
    #[must_use]
    pub const fn off_table() -> Self {
        Self::plain(HandKind::OffTable)
    }

    #[must_use]
    pub const fn kind(self) -> HandKind {
        self.kind
    }

    #[must_use]
    pub const fn tie_break(self) -> Option<Face> {
        self.tie_break
    }

    #[must_use]
    pub const fn win_multiplier(self) -> u32 {
        self.kind.win_multiplier()
    }

    #[must_use]
    pub const fn loss_multiplier(self) -> u32 {
        self.kind.loss_multiplier()
    }

    /// Strength used for banker/challenger comparison.
    #[must_use]
    pub fn rank(self) -> HandRank {
        HandRank {
            kind: self.kind,
            tie_break: self.tie_break.unwrap_or(0),
        }
    }

    /// Human-readable label including the payout hint.
    #[must_use]
    pub fn label(self) -> String {
        match (self.kind, self.tie_break) {
            (HandKind::TripleOnes, _) => "Triple Ones (5x)".to_string(),
            (HandKind::Triple, Some(face)) => format!("Triple {face}s (3x)"),
            (HandKind::HighStraight, _) => "High Straight (2x win)".to_string(),
            (HandKind::Point, Some(face)) => format!("Point {face}"),
            (HandKind::Hifumi, _) => "Hifumi (2x loss)".to_string(),
            (kind, _) => kind.name().to_string(),
        }
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
