use super::{
    action::Direction,
    config::GameConfig,
    state::{CollisionType, GameState, Position, Snake},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Random draws attempted per grid cell before falling back to a scan
const FOOD_DRAWS_PER_CELL: usize = 4;

/// Information about a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
    /// The snake filled every cell, leaving nowhere to put food
    pub board_full: bool,
}

/// Result of a movement tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// The state after the tick
    pub state: GameState,
    /// What happened during the tick
    pub info: StepInfo,
}

impl StepResult {
    /// Whether this tick moved the game into its terminal state
    pub fn ended_game(&self) -> bool {
        self.info.collision_type.is_some() || self.info.board_full
    }
}

/// Pick a free cell for food uniformly at random.
///
/// Draws are rejected while they land on the snake. After a bounded number of
/// misses the free cells are enumerated instead, so this only returns `None`
/// when the snake covers the whole grid.
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake, grid_size: usize) -> Option<Position> {
    let cells = grid_size * grid_size;
    if grid_size == 0 || snake.len() >= cells {
        return None;
    }

    for _ in 0..cells * FOOD_DRAWS_PER_CELL {
        let x = rng.gen_range(0..grid_size) as i32;
        let y = rng.gen_range(0..grid_size) as i32;
        let pos = Position::new(x, y);

        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..grid_size as i32)
        .flat_map(|y| (0..grid_size as i32).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.occupies(*pos))
        .collect();

    if free.is_empty() {
        None
    } else {
        Some(free[rng.gen_range(0..free.len())])
    }
}

/// The game engine: owns the configuration and the food RNG, and produces new
/// snapshots from old ones
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine seeded from the OS
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine with a fixed seed, for reproducible food sequences
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The state shown before the first game of a session: not started, no
    /// high score yet
    pub fn new_session(&mut self) -> GameState {
        let snake = self.initial_snake();
        let food = self.spawn_food(&snake);

        GameState::new(snake, food, Direction::Right, self.config.grid_size)
    }

    /// Fresh running game; only the high score survives from `previous`
    pub fn start(&mut self, previous: &GameState) -> GameState {
        let mut state = self.new_session();
        state.high_score = previous.high_score;
        state.is_started = true;
        state
    }

    /// Execute one movement tick
    pub fn advance(&mut self, state: &GameState) -> StepResult {
        if !state.is_active() {
            return StepResult {
                state: state.clone(),
                info: StepInfo::default(),
            };
        }

        let new_head = state.snake.head().moved_in_direction(state.pending_direction);

        if let Some(collision_type) = check_collision(state, new_head) {
            return StepResult {
                state: state.ended(),
                info: StepInfo {
                    collision_type: Some(collision_type),
                    ..StepInfo::default()
                },
            };
        }

        let ate_food = new_head == state.food;

        let mut next = state.clone();
        next.snake.advance_to(new_head, ate_food);
        next.direction = next.pending_direction;

        if !ate_food {
            return StepResult {
                state: next,
                info: StepInfo::default(),
            };
        }

        next.score += self.config.food_reward;

        match place_food(&mut self.rng, &next.snake, self.config.grid_size) {
            Some(food) => {
                next.food = food;
                StepResult {
                    state: next,
                    info: StepInfo {
                        ate_food: true,
                        ..StepInfo::default()
                    },
                }
            }
            None => StepResult {
                state: next.ended(),
                info: StepInfo {
                    ate_food: true,
                    board_full: true,
                    ..StepInfo::default()
                },
            },
        }
    }

    fn initial_snake(&self) -> Snake {
        let center = (self.config.grid_size / 2) as i32;

        Snake::new(
            Position::new(center, center),
            Direction::Right,
            self.config.initial_snake_length,
        )
    }

    fn spawn_food(&mut self, snake: &Snake) -> Position {
        // A fresh snake never fills the grid, so the origin is unreachable in practice.
        place_food(&mut self.rng, snake, self.config.grid_size).unwrap_or(Position::new(0, 0))
    }
}

/// Check if the new head position causes a collision.
///
/// The body is checked before the tail moves away, so stepping onto the
/// current tail cell counts as a collision.
fn check_collision(state: &GameState, pos: Position) -> Option<CollisionType> {
    if !state.is_in_bounds(pos) {
        return Some(CollisionType::Wall);
    }

    if state.is_occupied_by_snake(pos) {
        return Some(CollisionType::SelfCollision);
    }

    None
}
