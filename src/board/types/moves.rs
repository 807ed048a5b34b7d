//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::MoveParseError;

use super::square::Square;

/// A move as an origin/destination pair.
///
/// A `Move` carries no legality of its own: it is only meaningful in the
/// context of the board it was generated from. Promotion is implied (a pawn
/// reaching the far rank always becomes a queen), so no promotion piece is
/// stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, e.g. "e2e4".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Counted and split as characters so arbitrary input cannot land a
        // slice inside a multi-byte character.
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: chars.len() });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from_str: String = chars[0..2].iter().collect();
        let to_str: String = chars[2..4].iter().collect();
        let from = from_str.parse().map_err(|_| invalid())?;
        let to = to_str.parse().map_err(|_| invalid())?;
        Ok(Move::new(from, to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate_notation() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv.from(), Square(1, 4));
        assert_eq!(mv.to(), Square(3, 4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert_eq!(
            "e2e4e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 5 })
        );
    }

    #[test]
    fn test_bad_squares_rejected() {
        assert!(matches!(
            "e9e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert!(matches!(
            "i2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn test_multibyte_input_errors_instead_of_panicking() {
        // 4 bytes but only 3 characters.
        assert_eq!(
            "aée".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        // 4 characters that are not squares.
        assert!(matches!(
            "éée4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
    }
}
