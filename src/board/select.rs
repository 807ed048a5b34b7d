//! Tiered stochastic move selection.
//!
//! Easy picks uniformly without scoring. Medium and hard score every legal
//! move by applying it to the live board (snapshot/restore), then sample:
//! medium takes the top move 60% of the time and otherwise one of the top 5,
//! hard 90% / top 3. Ties keep enumeration order via a stable sort.

use std::fmt;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Board;
use super::types::{Color, Move};

/// AI difficulty tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Extra score for delivering check to the opponent.
const CHECK_BONUS: i32 = 50;

#[derive(Clone, Copy, Debug)]
struct ScoredMove {
    mv: Move,
    score: i32,
}

impl Board {
    /// Choose one legal move for `side`, or `None` if it has no legal moves.
    ///
    /// All randomness comes from the caller-owned `rng`, so selection is
    /// reproducible with a seeded generator. The board is mutated only
    /// transiently during scoring and is restored before returning.
    #[must_use]
    pub fn select_move<R: Rng>(
        &mut self,
        side: Color,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Option<Move> {
        let legal = self.legal_moves(side);
        if legal.is_empty() {
            return None;
        }

        // Easy never looks at the evaluation at all.
        if difficulty == Difficulty::Easy {
            let choice = legal[rng.gen_range(0..legal.len())];
            log::debug!("{side} ({difficulty}) picks {choice} from {} moves", legal.len());
            return Some(choice);
        }

        let mut scored: Vec<ScoredMove> = legal
            .iter()
            .map(|&mv| ScoredMove {
                mv,
                score: self.score_move(side, mv),
            })
            .collect();
        // Stable: equal scores stay in enumeration order.
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let (top_probability, pool_size) = match difficulty {
            Difficulty::Medium => (0.6, 5),
            _ => (0.9, 3),
        };

        let choice = if rng.gen::<f64>() < top_probability {
            scored[0]
        } else {
            let pool = pool_size.min(scored.len());
            scored[rng.gen_range(0..pool)]
        };

        log::debug!(
            "{side} ({difficulty}) picks {} scored {} among {} moves",
            choice.mv,
            choice.score,
            scored.len()
        );
        Some(choice.mv)
    }

    /// Score a legal move from the mover's perspective: the static evaluation
    /// after the move, plus a tenth of any captured piece's value, plus a
    /// bonus for giving check. The move is rolled back before returning.
    fn score_move(&mut self, side: Color, mv: Move) -> i32 {
        let saved = self.snapshot();
        let captured = self.apply_unchecked(mv.from(), mv.to());

        let mut score = self.evaluate() * side.sign();
        if let Some((_, piece)) = captured {
            score += piece.value() / 10;
        }
        if self.in_check(side.opponent()) {
            score += CHECK_BONUS;
        }

        self.restore(&saved);
        score
    }
}
