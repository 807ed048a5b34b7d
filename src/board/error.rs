//! Error types for chess board operations.

use std::fmt;

use super::types::{Color, Square};

/// Error type for a rejected move request.
///
/// Rejection is always recoverable: the caller keeps the same board and may
/// retry with a different move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate lies outside the 8x8 board
    OffBoard { rank: usize, file: usize },
    /// No piece on the origin square
    EmptySquare { at: Square },
    /// The piece on the origin square belongs to the side not on move
    WrongSide { at: Square, expected: Color },
    /// Destination is not reachable by the piece's movement rules
    IllegalDestination { from: Square, to: Square },
    /// The move would leave the mover's own king attacked
    SelfCheck { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard { rank, file } => {
                write!(f, "Coordinate ({rank}, {file}) is off the board")
            }
            MoveError::EmptySquare { at } => {
                write!(f, "No piece on {at}")
            }
            MoveError::WrongSide { at, expected } => {
                write!(f, "Piece on {at} does not belong to {expected}")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Piece on {from} cannot move to {to}")
            }
            MoveError::SelfCheck { from, to } => {
                write!(f, "Moving {from} to {to} would leave the king in check")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Too many ranks in position string
    TooManyRanks { ranks: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Position is missing a king
    MissingKing { color: Color },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::TooManyRanks { ranks } => {
                write!(f, "Too many ranks ({ranks}) in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::MissingKing { color } => {
                write!(f, "Position has no {color} king")
            }
        }
    }
}

impl std::error::Error for FenError {}
