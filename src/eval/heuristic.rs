//! Single-cell heuristic scoring
//!
//! Scores an empty cell by pretending a stone of the given color sits there
//! and classifying the run through it on each of the four axes. The same
//! function serves offence (AI color) and defence (opponent color).

use crate::board::{Board, Pos, Stone};
use crate::rules::{scan_run, Run, AXES};

use super::patterns::Pattern;

/// One axis through a candidate cell, measured and classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    pub run: Run,
    pub pattern: Pattern,
}

impl LineShape {
    #[inline]
    pub fn score(&self) -> i32 {
        self.pattern.score()
    }
}

/// Measure and classify every axis through `pos` for `player`.
///
/// The tri-state run ends are kept in `run`; they collapse to a single
/// "blocked" flag only in the pattern.
pub fn line_shapes(board: &Board, pos: Pos, player: Stone) -> [LineShape; 4] {
    AXES.map(|axis| {
        let run = scan_run(board, pos, axis, player);
        LineShape {
            run,
            pattern: Pattern::classify(run.length(), run.is_blocked()),
        }
    })
}

/// Heuristic value of playing `player` at `pos`.
///
/// Returns 0 for an occupied cell. Otherwise the pattern weights of the
/// four axes are summed, so a cell that completes five scores at least
/// [`super::PatternScore::FIVE`].
#[must_use]
pub fn position_score(board: &Board, pos: Pos, player: Stone) -> i32 {
    if !board.is_empty(pos) || player == Stone::Empty {
        return 0;
    }
    line_shapes(board, pos, player).iter().map(LineShape::score).sum()
}

/// Both sides' view of one empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellEval {
    /// `position_score` for the AI
    pub own: i32,
    /// `position_score` for the opponent
    pub block: i32,
}

/// Evaluate `pos` for `ai` and its opponent. `None` if occupied.
pub fn evaluate_cell(board: &Board, pos: Pos, ai: Stone) -> Option<CellEval> {
    if !board.is_empty(pos) {
        return None;
    }
    Some(CellEval {
        own: position_score(board, pos, ai),
        block: position_score(board, pos, ai.opponent()),
    })
}
