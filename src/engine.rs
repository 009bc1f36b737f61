//! Move evaluator for the computer player
//!
//! Picks the AI's next move from a board snapshot with a single-ply
//! heuristic. There is no look-ahead: every empty cell is scored once for
//! the AI ("own") and once for the opponent ("block"), and the policy for the
//! chosen [`Difficulty`] turns those scores into a move.
//!
//! Priority for the scoring difficulties:
//!
//! 1. **Immediate win**: any cell that completes five for the AI
//! 2. **Block**: any cell that would complete five for the opponent
//! 3. **Heuristic**: highest combined score, first in row-major order on ties
//!
//! Each tier scans the whole board before the next one is tried, so a win
//! anywhere beats a block anywhere, whatever their row-major order.
//!
//! # Example
//!
//! ```
//! use gomoku::{select_move, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! for col in 3..7 {
//!     board.place_stone(Pos::new(7, col), Stone::White);
//! }
//!
//! // White to play finishes the row
//! let pos = select_move(&board, Stone::White, Difficulty::Medium);
//! assert!(pos == Pos::new(7, 2) || pos == Pos::new(7, 7));
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument, trace};

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate_cell, CellEval, PatternScore};

/// AI policy preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    /// Uniform random empty cell
    #[default]
    Easy,
    /// Offence plus weighted defence
    Medium,
    /// Medium plus a pull toward the center
    Hard,
    /// Hard plus bonuses for making or denying threes and fours
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    /// One-line summary of how the AI plays at this level
    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Plays a random empty cell. Good for learning the game.",
            Difficulty::Medium => "Takes wins, blocks fives and weighs attack against defence.",
            Difficulty::Hard => "Like Medium, but prefers central points.",
            Difficulty::Expert => "Like Hard, and hunts for threes and fours on both sides.",
        }
    }

    #[inline]
    fn uses_center_bonus(self) -> bool {
        matches!(self, Difficulty::Hard | Difficulty::Expert)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why the evaluator picked its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    /// Easy: random choice
    Random,
    /// Completes five for the AI
    ImmediateWin,
    /// Stops the opponent completing five
    Block,
    /// Best combined heuristic score
    Heuristic,
    /// Board was full; center returned
    Fallback,
}

/// Result of a move selection with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Move to play
    pub best_move: Pos,
    /// Combined score of the move (0 for random / fallback moves)
    pub score: i32,
    /// Which rule chose the move
    pub reason: MoveReason,
    /// Empty cells considered
    pub candidates: u32,
}

impl MoveResult {
    #[inline]
    fn random(pos: Pos, candidates: u32) -> Self {
        Self {
            best_move: pos,
            score: 0,
            reason: MoveReason::Random,
            candidates,
        }
    }

    #[inline]
    fn immediate_win(pos: Pos, eval: &CellEval, candidates: u32) -> Self {
        Self {
            best_move: pos,
            score: eval.own,
            reason: MoveReason::ImmediateWin,
            candidates,
        }
    }

    #[inline]
    fn block(pos: Pos, eval: &CellEval, candidates: u32) -> Self {
        Self {
            best_move: pos,
            score: eval.block,
            reason: MoveReason::Block,
            candidates,
        }
    }

    #[inline]
    fn heuristic(pos: Pos, score: i32, candidates: u32) -> Self {
        Self {
            best_move: pos,
            score,
            reason: MoveReason::Heuristic,
            candidates,
        }
    }

    #[inline]
    fn fallback() -> Self {
        Self {
            best_move: Pos::center(),
            score: 0,
            reason: MoveReason::Fallback,
            candidates: 0,
        }
    }
}

/// Center pull for Hard and Expert: 10 at the center, fading to 0 at
/// Manhattan distance 10.
const CENTER_BONUS_MAX: i32 = 10;

/// Expert bonuses when a side's cell score reaches the four / three weight
const EXPERT_OWN_FOUR: i32 = 1_000;
const EXPERT_BLOCK_FOUR: i32 = 800;
const EXPERT_OWN_THREE: i32 = 100;
const EXPERT_BLOCK_THREE: i32 = 80;

/// Center bonus for `pos`
#[inline]
pub fn center_bonus(pos: Pos) -> i32 {
    (CENTER_BONUS_MAX - pos.center_distance()).max(0)
}

/// Expert threat bonus, keyed on the summed cell scores. Cumulative: a
/// score at the four weight also clears the three weight.
fn expert_bonus(eval: &CellEval) -> i32 {
    let mut bonus = 0;
    if eval.own >= PatternScore::FOUR {
        bonus += EXPERT_OWN_FOUR;
    }
    if eval.block >= PatternScore::FOUR {
        bonus += EXPERT_BLOCK_FOUR;
    }
    if eval.own >= PatternScore::THREE {
        bonus += EXPERT_OWN_THREE;
    }
    if eval.block >= PatternScore::THREE {
        bonus += EXPERT_BLOCK_THREE;
    }
    bonus
}

/// Combined score for the heuristic tier.
///
/// Defence counts 4/5 of offence. All pattern weights are multiples of 10,
/// so `block * 4 / 5` is exact.
pub fn combined_score(pos: Pos, eval: &CellEval, difficulty: Difficulty) -> i32 {
    let mut score = eval.own + eval.block * 4 / 5;
    if difficulty.uses_center_bonus() {
        score += center_bonus(pos);
    }
    if difficulty == Difficulty::Expert {
        score += expert_bonus(eval);
    }
    score
}

/// Pick the AI's move. Always an empty cell unless the board is full, in
/// which case the center is returned; callers check for a draw first.
#[must_use]
pub fn select_move(board: &Board, ai: Stone, difficulty: Difficulty) -> Pos {
    select_move_with_rng(board, ai, difficulty, &mut rand::thread_rng())
}

/// [`select_move`] with a caller-supplied RNG.
pub fn select_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    ai: Stone,
    difficulty: Difficulty,
    rng: &mut R,
) -> Pos {
    evaluate_move(board, ai, difficulty, rng).best_move
}

/// Full move selection, reporting the reason and score.
#[instrument(level = "debug", skip(board, rng), fields(stones = board.stone_count()))]
pub fn evaluate_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Stone,
    difficulty: Difficulty,
    rng: &mut R,
) -> MoveResult {
    let result = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        _ => heuristic_move(board, ai, difficulty),
    };
    debug!(
        best = %result.best_move,
        reason = ?result.reason,
        score = result.score,
        candidates = result.candidates,
        "AI move selected"
    );
    result
}

fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> MoveResult {
    let empties: Vec<Pos> = board.empty_cells().collect();
    match empties.choose(rng) {
        Some(&pos) => MoveResult::random(pos, empties.len() as u32),
        None => MoveResult::fallback(),
    }
}

fn heuristic_move(board: &Board, ai: Stone, difficulty: Difficulty) -> MoveResult {
    let cells: Vec<(Pos, CellEval)> = board
        .empty_cells()
        .filter_map(|pos| evaluate_cell(board, pos, ai).map(|eval| (pos, eval)))
        .collect();
    let candidates = cells.len() as u32;

    // Winning beats blocking wherever the two cells sit on the board.
    if let Some((pos, eval)) = cells.iter().find(|(_, e)| e.own >= PatternScore::FIVE) {
        return MoveResult::immediate_win(*pos, eval, candidates);
    }
    if let Some((pos, eval)) = cells.iter().find(|(_, e)| e.block >= PatternScore::FIVE) {
        return MoveResult::block(*pos, eval, candidates);
    }

    let mut best: Option<(Pos, i32)> = None;
    for (pos, eval) in &cells {
        let score = combined_score(*pos, eval, difficulty);
        trace!(%pos, own = eval.own, block = eval.block, score, "candidate");
        // Strict `>` keeps the first maximum in row-major order
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((*pos, score));
        }
    }

    match best {
        Some((pos, score)) => MoveResult::heuristic(pos, score, candidates),
        None => MoveResult::fallback(),
    }
}
