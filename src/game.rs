//! Game-turn state machine: alternating AI plies with a hard ply cap.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Color, Difficulty, GameStatus, Move, MoveError};

/// Hard cap on plies before the game is declared drawn, guarding against
/// engines that shuffle indefinitely on evaluation ties.
pub const PLY_CAP: u32 = 200;

/// Why a game ended in a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawReason {
    Stalemate,
    PlyCap,
}

/// Final result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    Draw(DrawReason),
}

/// Result of advancing the state machine by one ply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ply {
    /// A move was selected and applied.
    Moved(Move),
    /// The game is over; no move was made.
    Over(Outcome),
}

/// One applied move together with its notation, recorded in order.
#[derive(Clone, Debug)]
pub struct MoveRecord {
    pub mv: Move,
    pub san: String,
}

/// A single AI-vs-AI game: board, per-side difficulty, and the session RNG.
///
/// One generator serves every random draw in the session (easy-tier picks
/// and medium/hard sampling alike), with no reseeding between moves.
pub struct GameSession {
    board: Board,
    white: Difficulty,
    black: Difficulty,
    rng: StdRng,
    record: Vec<MoveRecord>,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// New game from the starting position, RNG seeded from entropy.
    #[must_use]
    pub fn new(white: Difficulty, black: Difficulty) -> Self {
        Self::from_rng(white, black, StdRng::from_entropy())
    }

    /// New game with a fixed seed, for reproducible play.
    #[must_use]
    pub fn with_seed(white: Difficulty, black: Difficulty, seed: u64) -> Self {
        Self::from_rng(white, black, StdRng::seed_from_u64(seed))
    }

    fn from_rng(white: Difficulty, black: Difficulty, rng: StdRng) -> Self {
        GameSession {
            board: Board::new(),
            white,
            black,
            rng,
            record: Vec::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Applied moves so far, in order.
    #[must_use]
    pub fn record(&self) -> &[MoveRecord] {
        &self.record
    }

    #[must_use]
    pub fn plies(&self) -> u32 {
        self.record.len() as u32
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    fn difficulty_for(&self, side: Color) -> Difficulty {
        match side {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Advance one ply: classify the position, select a move for the side to
    /// move, and apply it. Returns what happened; once the game is over,
    /// every further call reports the same outcome.
    pub fn play_ply(&mut self) -> Result<Ply, MoveError> {
        if let Some(outcome) = self.outcome {
            return Ok(Ply::Over(outcome));
        }

        if self.plies() >= PLY_CAP {
            log::debug!("ply cap of {PLY_CAP} reached, drawing");
            return Ok(self.finish(Outcome::Draw(DrawReason::PlyCap)));
        }

        let side = self.board.side_to_move();
        match self.board.status(side) {
            GameStatus::Checkmate { winner } => {
                log::debug!("{side} is checkmated");
                return Ok(self.finish(Outcome::Win(winner)));
            }
            GameStatus::Stalemate => {
                log::debug!("{side} is stalemated");
                return Ok(self.finish(Outcome::Draw(DrawReason::Stalemate)));
            }
            GameStatus::InProgress => {}
        }

        let difficulty = self.difficulty_for(side);
        let mv = match self.board.select_move(side, difficulty, &mut self.rng) {
            Some(mv) => mv,
            // Unreachable after an InProgress status, but never panic on it.
            None => return Ok(self.finish(Outcome::Draw(DrawReason::Stalemate))),
        };

        let san = self.board.move_to_san(mv);
        self.board.apply_move(mv.from(), mv.to())?;
        log::debug!("ply {}: {side} plays {san}", self.record.len() + 1);
        self.record.push(MoveRecord { mv, san });
        Ok(Ply::Moved(mv))
    }

    /// Run the game to its conclusion.
    pub fn play_to_end(&mut self) -> Result<Outcome, MoveError> {
        loop {
            if let Ply::Over(outcome) = self.play_ply()? {
                return Ok(outcome);
            }
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Ply {
        self.outcome = Some(outcome);
        Ply::Over(outcome)
    }
}
