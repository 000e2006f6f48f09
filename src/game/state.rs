use std::collections::HashSet;

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a snake whose body trails behind `head`, opposite to `direction`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body }
    }

    /// Create a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>) -> Self {
        Self { body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if any segment, tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head, dropping the tail unless the snake grows
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// True when no two segments share a cell
    pub fn has_unique_segments(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.body.len());
        self.body.iter().all(|pos| seen.insert(*pos))
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into one of its own segments
    SelfCollision,
}

/// Complete game state snapshot
///
/// Snapshots are never edited in place by the transitions; each transition
/// returns a new value and the previous one is simply dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Direction requested by input, applied on the next tick
    pub pending_direction: Direction,
    pub score: u32,
    pub high_score: u32,
    pub is_started: bool,
    pub is_paused: bool,
    pub game_over: bool,
    pub grid_size: usize,
}

impl GameState {
    /// Build a state that has not been started yet
    pub fn new(snake: Snake, food: Position, direction: Direction, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            direction,
            pending_direction: direction,
            score: 0,
            high_score: 0,
            is_started: false,
            is_paused: false,
            game_over: false,
            grid_size,
        }
    }

    /// Whether the tick driver should be running
    pub fn is_active(&self) -> bool {
        self.is_started && !self.game_over && !self.is_paused
    }

    /// Whether a start/restart request would be honoured
    pub fn can_start(&self) -> bool {
        self.game_over || !self.is_started
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.grid_size as i32;
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }

    /// Check if a position is occupied by the snake
    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }

    /// Request a new direction for the next tick
    ///
    /// A request that reverses the *current* direction is dropped, no matter
    /// which direction is pending. Later requests overwrite earlier ones.
    pub fn with_pending_direction(&self, requested: Direction) -> Self {
        if self.direction.is_opposite(requested) {
            return self.clone();
        }

        Self {
            pending_direction: requested,
            ..self.clone()
        }
    }

    /// Flip the paused flag; allowed in every phase
    pub fn toggled_pause(&self) -> Self {
        Self {
            is_paused: !self.is_paused,
            ..self.clone()
        }
    }

    /// Terminal transition: only the flags and high score change
    pub fn ended(&self) -> Self {
        Self {
            game_over: true,
            high_score: self.score.max(self.high_score),
            ..self.clone()
        }
    }
}
