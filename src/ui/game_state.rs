//! Game state management for the Halma GUI

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use crate::board::{Color, Pos};
use crate::engine::{AiEngine, MoveResult};
use crate::error::HalmaError;
use crate::game::Game;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human on one side, AI on the other
    PvE { human_color: Color },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        Self::PvE {
            human_color: Color::Black,
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Wall clock for the turn in progress. Halted while the game is over.
pub struct TurnClock {
    started: Option<Instant>,
}

impl Default for TurnClock {
    fn default() -> Self {
        Self {
            started: Some(Instant::now()),
        }
    }
}

impl TurnClock {
    pub fn restart(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn halt(&mut self) {
        self.started = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.started.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state: the turn controller plus GUI-only concerns
pub struct GameState {
    pub game: Game,
    pub mode: GameMode,
    pub game_over: Option<Color>,
    pub last_ai_result: Option<MoveResult>,
    pub last_ai_time: Option<Duration>,
    pub ai_state: AiState,
    pub clock: TurnClock,
    pub message: Option<String>,

    ai_depth: u8,
}

impl GameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            game: Game::new(),
            mode,
            game_over: None,
            last_ai_result: None,
            last_ai_time: None,
            ai_state: AiState::Idle,
            clock: TurnClock::default(),
            message: None,
            ai_depth: crate::engine::DEFAULT_DEPTH,
        }
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.game_over = None;
        self.last_ai_result = None;
        self.last_ai_time = None;
        self.ai_state = AiState::Idle;
        self.clock = TurnClock::default();
        self.message = None;
    }

    /// Check if it's a human-controlled turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.game.turn() == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.game.turn() != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if the AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Handle a click on a board cell
    pub fn handle_click(&mut self, pos: Pos) {
        if self.game_over.is_some() {
            return;
        }
        if self.is_ai_thinking() || !self.is_human_turn() {
            self.message = Some("AI is thinking".to_string());
            return;
        }

        let had_selection = self.game.selected().is_some();
        let accepted = self.game.select(pos);

        if accepted {
            self.message = None;
            // A selection survives the click; a committed move clears it
            if had_selection && self.game.selected().is_none() {
                self.after_move();
            }
        } else if had_selection {
            self.message = Some(HalmaError::IllegalMove.to_string());
        }
    }

    /// Post-move bookkeeping shared by human and AI moves
    fn after_move(&mut self) {
        if let Some(winner) = self.game.winner() {
            info!(?winner, "game over");
            self.game_over = Some(winner);
            self.clock.halt();
        } else {
            self.clock.restart();
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.game.board().clone();
        let color = self.game.turn();
        let depth = self.ai_depth;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let engine = AiEngine::new(depth);
            let result = engine.get_move(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll for a finished AI search and commit its move
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_time = Some(elapsed);

            match move_result.board.clone() {
                Some(board) => {
                    self.game.commit_board(board);
                    self.after_move();
                }
                None => {
                    // No legal move: the turn passes back without a move
                    self.message = Some(HalmaError::NoLegalMove.to_string());
                    self.game.change_turn();
                }
            }
            self.last_ai_result = Some(move_result);
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}
