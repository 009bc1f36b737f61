//! Game engine: board ownership, move legality, turn order and outcomes
//!
//! [`Game`] is the single owner of the board. The presentation layer holds
//! one instance, routes every move (human or AI) through
//! [`Game::apply_move`], and reads state back through the accessors or a
//! [`GameSnapshot`].
//!
//! The engine never calls the move evaluator itself. When it is the AI's
//! turn, [`Game::phase`] reports [`Phase::AwaitingAi`] and
//! [`Game::ai_request`] hands out everything the caller needs to compute the
//! move on its own schedule (after a delay, on a worker thread, ...).
//!
//! # Example
//!
//! ```
//! use gomoku::{Game, GameStatus, Stone};
//!
//! let mut game = Game::default();
//! assert!(game.apply_move(7, 7).is_ok());
//! assert_eq!(game.current_player(), Stone::White);
//!
//! // Occupied cell: rejected, nothing changes
//! assert!(game.apply_move(7, 7).is_err());
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Pos, Stone};
use crate::engine::{evaluate_move, Difficulty, MoveResult};
use crate::rules::{check_winner, find_five_line_at_pos};

/// Game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    Finished,
}

/// Who the game is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanToMove,
    AwaitingAi,
    Finished,
}

/// Why a move was not applied. The board is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("the game is already over")]
    GameOver,
}

/// Effect of an accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on; `next` is to move
    Continue { next: Stone },
    /// Five or more in a row; `line` holds the whole run
    Won { winner: Stone, line: Vec<Pos> },
    /// Board filled without a winner
    Draw,
}

/// How a finished game counts for the human
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    HumanWin,
    AiWin,
    Draw,
}

/// Human's record for this run of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub total_games: u32,
    pub wins: u32,
    pub draws: u32,
}

impl SessionStats {
    /// Count one finished game
    pub fn record(&mut self, verdict: Verdict) {
        self.total_games += 1;
        match verdict {
            Verdict::HumanWin => self.wins += 1,
            Verdict::Draw => self.draws += 1,
            Verdict::AiWin => {}
        }
    }

    /// Games the AI won. Saturates for hand-built, inconsistent counts.
    pub fn losses(&self) -> u32 {
        self.total_games.saturating_sub(self.wins).saturating_sub(self.draws)
    }

    /// Win percentage rounded half up, 0 before the first game
    pub fn win_rate(&self) -> u32 {
        if self.total_games == 0 {
            return 0;
        }
        (self.wins * 200 + self.total_games) / (self.total_games * 2)
    }
}

/// Read-only copy of the observable game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Stone,
    pub status: GameStatus,
    pub winner: Option<Stone>,
    pub last_move: Option<Pos>,
    pub move_count: u32,
    pub phase: Phase,
}

/// Everything the AI needs to choose a move, detached from the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiRequest {
    pub board: Board,
    pub ai_color: Stone,
    pub difficulty: Difficulty,
}

impl AiRequest {
    /// Run the evaluator with the thread-local RNG
    pub fn evaluate(&self) -> MoveResult {
        self.evaluate_with_rng(&mut rand::thread_rng())
    }

    pub fn evaluate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> MoveResult {
        evaluate_move(&self.board, self.ai_color, self.difficulty, rng)
    }
}

/// The board engine: owns one game plus the session statistics.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Stone,
    status: GameStatus,
    winner: Option<Stone>,
    last_move: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
    move_count: u32,
    difficulty: Difficulty,
    player_color: Stone,
    stats: SessionStats,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Difficulty::default(), Stone::Black)
    }
}

impl Game {
    /// Fresh game with the human playing `player_color`.
    ///
    /// `Stone::Empty` is not a player and falls back to Black.
    pub fn new(difficulty: Difficulty, player_color: Stone) -> Self {
        let player_color = match player_color {
            Stone::Empty => Stone::Black,
            color => color,
        };
        Self {
            board: Board::new(),
            current_player: Stone::Black,
            status: GameStatus::Playing,
            winner: None,
            last_move: None,
            winning_line: None,
            move_count: 0,
            difficulty,
            player_color,
            stats: SessionStats::default(),
        }
    }

    /// Start over with an empty board. Settings and statistics survive;
    /// any game in progress is discarded without being counted.
    #[instrument(level = "debug", skip(self))]
    pub fn new_game(&mut self) {
        self.board = Board::new();
        self.current_player = Stone::Black;
        self.status = GameStatus::Playing;
        self.winner = None;
        self.last_move = None;
        self.winning_line = None;
        self.move_count = 0;
        debug!(human = %self.player_color, difficulty = %self.difficulty, "new game");
    }

    /// Place the current player's stone at (row, col).
    ///
    /// Rejected without touching any state when the game is over, the
    /// coordinates are off the board or the cell is taken.
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<MoveOutcome, MoveError> {
        if self.status != GameStatus::Playing {
            debug!(row, col, "move rejected: game over");
            return Err(MoveError::GameOver);
        }
        let Some(pos) = Pos::try_new(row, col) else {
            debug!(row, col, "move rejected: off the board");
            return Err(MoveError::OutOfBounds { row, col });
        };
        self.play(pos)
    }

    /// [`Game::apply_move`] for an already validated position.
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, MoveError> {
        if self.status != GameStatus::Playing {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "move rejected: occupied");
            return Err(MoveError::Occupied(pos));
        }

        let color = self.current_player;
        self.board.place_stone(pos, color);
        self.last_move = Some(pos);
        self.move_count += 1;
        debug!(%pos, %color, moves = self.move_count, "move applied");

        if let Some(winner) = check_winner(&self.board, pos) {
            let line = find_five_line_at_pos(&self.board, pos).unwrap_or_default();
            self.status = GameStatus::Finished;
            self.winner = Some(winner);
            self.winning_line = Some(line.clone());
            self.finish(if winner == self.player_color {
                Verdict::HumanWin
            } else {
                Verdict::AiWin
            });
            return Ok(MoveOutcome::Won { winner, line });
        }

        if self.board.is_full() {
            self.status = GameStatus::Finished;
            self.finish(Verdict::Draw);
            return Ok(MoveOutcome::Draw);
        }

        self.current_player = color.opponent();
        Ok(MoveOutcome::Continue {
            next: self.current_player,
        })
    }

    fn finish(&mut self, verdict: Verdict) {
        self.stats.record(verdict);
        info!(
            ?verdict,
            winner = ?self.winner,
            moves = self.move_count,
            total_games = self.stats.total_games,
            wins = self.stats.wins,
            win_rate = self.stats.win_rate(),
            "game finished"
        );
    }

    /// Change the AI policy; takes effect on the next AI move.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            debug!(from = %self.difficulty, to = %difficulty, "difficulty changed");
        }
        self.difficulty = difficulty;
    }

    /// Choose the human's color. Does not reset the board; callers that
    /// want a fresh game call [`Game::new_game`] afterwards.
    pub fn set_player_color(&mut self, color: Stone) {
        if color == Stone::Empty {
            warn!("ignoring Empty as a player color");
            return;
        }
        self.player_color = color;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Cells of the winning run once the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn player_color(&self) -> Stone {
        self.player_color
    }

    pub fn ai_color(&self) -> Stone {
        self.player_color.opponent()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Finished and drawn
    pub fn is_draw(&self) -> bool {
        self.is_finished() && self.winner.is_none()
    }

    pub fn phase(&self) -> Phase {
        if self.is_finished() {
            Phase::Finished
        } else if self.current_player == self.player_color {
            Phase::HumanToMove
        } else {
            Phase::AwaitingAi
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        self.phase() == Phase::AwaitingAi
    }

    /// Inputs for the evaluator when the AI is due to move.
    pub fn ai_request(&self) -> Option<AiRequest> {
        self.is_ai_turn().then(|| AiRequest {
            board: self.board,
            ai_color: self.ai_color(),
            difficulty: self.difficulty,
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.current_player,
            status: self.status,
            winner: self.winner,
            last_move: self.last_move,
            move_count: self.move_count,
            phase: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TOTAL_CELLS;

    fn play_all(game: &mut Game, moves: &[(i32, i32)]) -> Result<MoveOutcome, MoveError> {
        let mut last = Err(MoveError::GameOver);
        for &(r, c) in moves {
            last = game.apply_move(r, c);
            assert!(last.is_ok(), "move ({r}, {c}) rejected: {last:?}");
        }
        last
    }

    /// Black fills column 0 rows 0..5 while White answers in column 14
    fn black_wins(game: &mut Game) {
        for row in 0..4 {
            game.apply_move(row, 0).unwrap();
            game.apply_move(row, 14).unwrap();
        }
        game.apply_move(4, 0).unwrap();
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::default();
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.winner(), None);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.phase(), Phase::HumanToMove);
    }

    #[test]
    fn test_new_game_idempotent() {
        let mut game = Game::default();
        play_all(&mut game, &[(7, 7), (7, 8), (3, 3)]).unwrap();
        game.new_game();
        let first = game.snapshot();
        game.new_game();
        let second = game.snapshot();
        assert_eq!(first, second);
        assert_eq!(first, Game::default().snapshot());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::default();
        let mut expected = Stone::Black;
        for (r, c) in [(0, 0), (5, 5), (0, 2), (9, 9), (14, 3), (2, 11)] {
            assert_eq!(game.current_player(), expected);
            let outcome = game.apply_move(r, c).unwrap();
            expected = expected.opponent();
            assert_eq!(outcome, MoveOutcome::Continue { next: expected });
        }
    }

    #[test]
    fn test_move_writes_only_target() {
        let mut game = Game::default();
        play_all(&mut game, &[(7, 7), (7, 8)]).unwrap();
        let before = *game.board();
        game.apply_move(3, 9).unwrap();
        let after = *game.board();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            if pos == Pos::new(3, 9) {
                assert_eq!(after.get(pos), Stone::Black);
            } else {
                assert_eq!(before.get(pos), after.get(pos));
            }
        }
        assert_eq!(game.last_move(), Some(Pos::new(3, 9)));
    }

    #[test]
    fn test_occupied_rejected_without_change() {
        let mut game = Game::default();
        game.apply_move(7, 7).unwrap();
        let before = game.snapshot();
        assert_eq!(game.apply_move(7, 7), Err(MoveError::Occupied(Pos::new(7, 7))));
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.board().get(Pos::new(7, 7)), Stone::Black);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::default();
        for (r, c) in [(-1, 0), (0, -1), (15, 0), (0, 15), (100, 100)] {
            assert_eq!(game.apply_move(r, c), Err(MoveError::OutOfBounds { row: r, col: c }));
        }
        assert_eq!(game.snapshot(), Game::default().snapshot());
    }

    #[test]
    fn test_vertical_win_finishes_game() {
        let mut game = Game::default();
        let outcome = play_all(
            &mut game,
            &[(7, 7), (7, 8), (8, 7), (8, 8), (9, 7), (9, 8), (6, 7), (0, 0), (5, 7)],
        )
        .unwrap();
        match outcome {
            MoveOutcome::Won { winner, line } => {
                assert_eq!(winner, Stone::Black);
                assert_eq!(line.len(), 5);
                assert!(line.contains(&Pos::new(5, 7)) && line.contains(&Pos::new(9, 7)));
            }
            other => panic!("expected a win, got {other:?}"),
        }
        assert_eq!(game.status(), GameStatus::Finished);
        assert_eq!(game.winner(), Some(Stone::Black));
        assert_eq!(game.phase(), Phase::Finished);
        // Winner keeps the turn marker
        assert_eq!(game.current_player(), Stone::Black);
        assert_eq!(game.winning_line().map(<[Pos]>::len), Some(5));
    }

    #[test]
    fn test_finished_game_rejects_moves() {
        let mut game = Game::default();
        black_wins(&mut game);
        let before = game.snapshot();
        assert_eq!(game.apply_move(10, 10), Err(MoveError::GameOver));
        assert_eq!(game.play(Pos::new(10, 10)), Err(MoveError::GameOver));
        // Game-over takes precedence over bounds
        assert_eq!(game.apply_move(-3, 99), Err(MoveError::GameOver));
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_human_win_counts() {
        let mut game = Game::default();
        black_wins(&mut game);
        assert_eq!(
            *game.stats(),
            SessionStats {
                total_games: 1,
                wins: 1,
                draws: 0
            }
        );
        assert_eq!(game.stats().win_rate(), 100);
    }

    #[test]
    fn test_ai_win_counts_as_loss() {
        let mut game = Game::new(Difficulty::Medium, Stone::White);
        black_wins(&mut game);
        assert_eq!(game.winner(), Some(Stone::Black));
        assert_eq!(game.stats().total_games, 1);
        assert_eq!(game.stats().wins, 0);
        assert_eq!(game.stats().losses(), 1);
        assert_eq!(game.stats().win_rate(), 0);
    }

    #[test]
    fn test_abandoned_game_not_counted() {
        let mut game = Game::default();
        play_all(&mut game, &[(7, 7), (7, 8)]).unwrap();
        game.new_game();
        assert_eq!(game.stats().total_games, 0);
    }

    #[test]
    fn test_losses_never_underflow() {
        let stats = SessionStats {
            total_games: 1,
            wins: 1,
            draws: 1,
        };
        assert_eq!(stats.losses(), 0);
        let stats = SessionStats {
            total_games: 5,
            wins: 2,
            draws: 1,
        };
        assert_eq!(stats.losses(), 2);
    }

    #[test]
    fn test_win_rate_rounding() {
        let mut stats = SessionStats::default();
        assert_eq!(stats.win_rate(), 0);
        stats.record(Verdict::HumanWin);
        stats.record(Verdict::HumanWin);
        stats.record(Verdict::AiWin);
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.win_rate(), 67);

        let mut stats = SessionStats::default();
        stats.record(Verdict::HumanWin);
        stats.record(Verdict::AiWin);
        stats.record(Verdict::AiWin);
        assert_eq!(stats.win_rate(), 33);

        // 1 of 8 = 12.5 -> 13
        let mut stats = SessionStats::default();
        stats.record(Verdict::HumanWin);
        for _ in 0..7 {
            stats.record(Verdict::AiWin);
        }
        assert_eq!(stats.win_rate(), 13);
    }

    #[test]
    fn test_draw_on_full_board() {
        // Column pairs alternate color and shift by one pair per row,
        // so no run is longer than two in any direction.
        let mut game = Game::default();
        let mut black = Vec::new();
        let mut white = Vec::new();
        for row in 0..15i32 {
            for col in 0..15i32 {
                let band = (col / 2 + row) % 2;
                if band == 0 {
                    black.push((row, col));
                } else {
                    white.push((row, col));
                }
            }
        }
        // Black moves first and has one stone more on 225 cells
        assert_eq!(black.len(), white.len() + 1, "layout must suit alternation");
        let mut outcome = None;
        for i in 0..black.len() {
            let (r, c) = black[i];
            outcome = Some(game.apply_move(r, c).unwrap());
            if let Some(&(r, c)) = white.get(i) {
                outcome = Some(game.apply_move(r, c).unwrap());
            }
        }
        assert_eq!(outcome, Some(MoveOutcome::Draw));
        assert!(game.is_draw());
        assert_eq!(game.winner(), None);
        assert_eq!(game.stats().total_games, 1);
        assert_eq!(game.stats().draws, 1);
        assert_eq!(game.stats().wins, 0);
    }

    #[test]
    fn test_phase_and_ai_request() {
        let mut game = Game::new(Difficulty::Hard, Stone::White);
        assert_eq!(game.phase(), Phase::AwaitingAi);
        let request = game.ai_request().unwrap();
        assert_eq!(request.ai_color, Stone::Black);
        assert_eq!(request.difficulty, Difficulty::Hard);

        let result = request.evaluate();
        game.play(result.best_move).unwrap();
        assert_eq!(game.phase(), Phase::HumanToMove);
        assert!(game.ai_request().is_none());
    }

    #[test]
    fn test_settings_do_not_reset_board() {
        let mut game = Game::default();
        game.apply_move(7, 7).unwrap();
        game.set_difficulty(Difficulty::Expert);
        game.set_player_color(Stone::White);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.difficulty(), Difficulty::Expert);
        assert_eq!(game.player_color(), Stone::White);
        assert_eq!(game.ai_color(), Stone::Black);
        // White (human) to move now
        assert_eq!(game.phase(), Phase::HumanToMove);
    }

    #[test]
    fn test_empty_player_color_ignored() {
        let mut game = Game::new(Difficulty::Easy, Stone::Empty);
        assert_eq!(game.player_color(), Stone::Black);
        game.set_player_color(Stone::Empty);
        assert_eq!(game.player_color(), Stone::Black);
    }

    #[test]
    fn test_stats_survive_new_game() {
        let mut game = Game::default();
        black_wins(&mut game);
        game.new_game();
        assert_eq!(game.stats().total_games, 1);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.winning_line().is_none());
    }
}
