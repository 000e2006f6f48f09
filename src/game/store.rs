use log::{debug, info};

use super::{
    action::{Command, Direction},
    config::GameConfig,
    engine::{GameEngine, StepInfo},
    state::GameState,
};

/// Owner of the current game snapshot.
///
/// Every mutation replaces the snapshot with the result of a transition, so
/// callers holding a `&GameState` from `snapshot()` always see a consistent
/// value. The store is not shared across threads; one event loop drives it.
pub struct GameStore {
    engine: GameEngine,
    state: GameState,
}

impl GameStore {
    pub fn new(mut engine: GameEngine) -> Self {
        let state = engine.new_session();
        Self { engine, state }
    }

    pub fn snapshot(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Run one movement tick
    pub fn advance(&mut self) -> StepInfo {
        let result = self.engine.advance(&self.state);

        if result.info.ate_food {
            debug!(
                "food eaten at ({}, {}), score {}",
                result.state.snake.head().x,
                result.state.snake.head().y,
                result.state.score
            );
        }
        if result.ended_game() {
            info!(
                "game over: {:?}, score {}, high score {}",
                result.info.collision_type, result.state.score, result.state.high_score
            );
        }

        self.state = result.state;
        result.info
    }

    /// Request a direction change for the next tick
    pub fn turn(&mut self, direction: Direction) {
        self.state = self.state.with_pending_direction(direction);
    }

    /// Unconditionally begin a new game, keeping the high score
    pub fn start(&mut self) {
        self.state = self.engine.start(&self.state);
        info!("game started, high score {}", self.state.high_score);
    }

    /// Begin a new game only if none is running; returns whether it started
    pub fn request_start(&mut self) -> bool {
        if !self.state.can_start() {
            return false;
        }
        self.start();
        true
    }

    pub fn toggle_pause(&mut self) {
        self.state = self.state.toggled_pause();
        debug!("paused: {}", self.state.is_paused);
    }

    /// Apply a normalized command
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => self.turn(direction),
            Command::TogglePause => self.toggle_pause(),
            Command::Start => {
                self.request_start();
            }
        }
    }
}
