//! Game state management for the Gomoku GUI
//!
//! Wraps the engine's [`Game`] with the pieces only the GUI cares about:
//! the AI worker thread, the artificial thinking delay, and a status line.

use crate::{Difficulty, Game, GameConfig, MoveResult, Phase, Pos, Stone};
use rand::Rng;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// GUI-side game state
pub struct GameState {
    pub game: Game,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub last_ai_time: Option<Duration>,
    pub message: Option<String>,
    think_min: Duration,
    think_max: Duration,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            game: Game::new(config.difficulty, config.player_color),
            ai_state: AiState::Idle,
            last_ai_result: None,
            last_ai_time: None,
            message: None,
            think_min: config.think_min,
            think_max: config.think_max,
        }
    }

    /// Start a fresh game. An AI move still in flight is dropped along
    /// with its receiver.
    pub fn reset(&mut self) {
        self.game.new_game();
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.message = None;
    }

    /// Switch sides and start over
    pub fn play_as(&mut self, color: Stone) {
        self.game.set_player_color(color);
        self.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.game.set_difficulty(difficulty);
    }

    pub fn is_human_turn(&self) -> bool {
        self.game.phase() == Phase::HumanToMove
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Board clicks are live only on the human's turn with the AI idle
    pub fn accepting_input(&self) -> bool {
        self.is_human_turn() && !self.is_ai_thinking()
    }

    /// Attempt to place the human's stone
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.game.is_finished() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.game.play(pos).map_err(|e| e.to_string())?;
        self.message = None;
        Ok(())
    }

    fn think_delay(&self) -> Duration {
        if self.think_min >= self.think_max {
            return self.think_min;
        }
        rand::thread_rng().gen_range(self.think_min..=self.think_max)
    }

    /// Hand the position to a worker thread if the AI is due to move
    pub fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        let Some(request) = self.game.ai_request() else {
            return;
        };

        let delay = self.think_delay();
        debug!(?delay, difficulty = %request.difficulty, "AI thinking");
        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(delay);
            let result = request.evaluate();
            // Receiver is gone if the game was reset meanwhile
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move once the worker has delivered it
    pub fn check_ai_result(&mut self) {
        let (move_result, elapsed) = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => (result, start_time.elapsed()),
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;
        self.last_ai_time = Some(elapsed);

        if let Err(e) = self.game.play(move_result.best_move) {
            warn!(error = %e, pos = %move_result.best_move, "AI move rejected");
            self.message = Some(format!("AI move rejected: {e}"));
        }
        self.last_ai_result = Some(move_result);
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
