//! Classification of a throw into a hand.

use super::hand::Hand;
use crate::dice::Dice;

/// Classify a throw.
///
/// Total over every legal throw and independent of face order: the faces
/// are sorted before any pattern is checked.
///
/// ```
/// use chinchiro::dice::Dice;
/// use chinchiro::hands::{classify, Hand};
///
/// assert_eq!(classify(Dice::new([6, 4, 5]).unwrap()), Hand::high_straight());
/// assert_eq!(classify(Dice::new([3, 1, 3]).unwrap()), Hand::point(1));
/// ```
#[must_use]
pub fn classify(dice: Dice) -> Hand {
    match dice.sorted() {
        [1, 1, 1] => Hand::triple_ones(),
        [low, mid, high] if low == mid && mid == high => Hand::triple(low),
        [4, 5, 6] => Hand::high_straight(),
        [1, 2, 3] => Hand::hifumi(),
        [low, mid, high] if low == mid => Hand::point(high),
        [low, mid, high] if mid == high => Hand::point(low),
        _ => Hand::no_score(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Face;
    use crate::hands::HandKind;

    fn classify_faces(faces: [Face; 3]) -> Hand {
        classify(Dice::new(faces).unwrap())
    }

    #[test]
    fn test_triple_ones() {
        assert_eq!(classify_faces([1, 1, 1]), Hand::triple_ones());
    }

    #[test]
    fn test_triples() {
        for face in 2..=6 {
            assert_eq!(classify_faces([face, face, face]), Hand::triple(face));
        }
    }

    #[test]
    fn test_straights() {
        assert_eq!(classify_faces([5, 6, 4]), Hand::high_straight());
        assert_eq!(classify_faces([3, 2, 1]), Hand::hifumi());
    }

    #[test]
    fn test_points_use_singleton() {
        assert_eq!(classify_faces([2, 2, 5]), Hand::point(5));
        assert_eq!(classify_faces([5, 2, 2]), Hand::point(5));
        assert_eq!(classify_faces([6, 1, 6]), Hand::point(1));
        assert_eq!(classify_faces([1, 1, 6]), Hand::point(6));
    }

    #[test]
    fn test_no_score() {
        assert_eq!(classify_faces([1, 3, 5]), Hand::no_score());
        assert_eq!(classify_faces([2, 4, 6]), Hand::no_score());
        assert_eq!(classify_faces([2, 3, 4]), Hand::no_score());
    }

    #[test]
    fn test_never_off_table() {
        assert!(Dice::all().all(|dice| classify(dice).kind() != HandKind::OffTable));
    }

    #[test]
    fn test_kind_counts_over_all_throws() {
        let count = |kind: HandKind| Dice::all().filter(|&d| classify(d).kind() == kind).count();

        assert_eq!(count(HandKind::TripleOnes), 1);
        assert_eq!(count(HandKind::Triple), 5);
        assert_eq!(count(HandKind::HighStraight), 6);
        assert_eq!(count(HandKind::Hifumi), 6);
        assert_eq!(count(HandKind::Point), 90);
        assert_eq!(count(HandKind::NoScore), 108);
    }
}
