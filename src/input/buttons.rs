use crate::game::{Command, Direction, GameState};

/// On-screen buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Pause,
    /// The overlay's main action: start, restart or resume
    Primary,
}

impl Button {
    /// Buttons drawn in the control strip, left to right
    pub const CONTROLS: [Button; 5] = [
        Button::Left,
        Button::Up,
        Button::Down,
        Button::Right,
        Button::Pause,
    ];

    pub fn label(&self, state: &GameState) -> &'static str {
        match self {
            Button::Up => "▲",
            Button::Down => "▼",
            Button::Left => "◀",
            Button::Right => "▶",
            Button::Pause if state.is_paused => "Resume",
            Button::Pause => "Pause",
            Button::Primary => primary_label(state),
        }
    }

    /// What pressing this button asks of the store, given the shown state
    pub fn command(&self, state: &GameState) -> Command {
        match self {
            Button::Up => Command::Turn(Direction::Up),
            Button::Down => Command::Turn(Direction::Down),
            Button::Left => Command::Turn(Direction::Left),
            Button::Right => Command::Turn(Direction::Right),
            Button::Pause => Command::TogglePause,
            Button::Primary if state.is_started && !state.game_over && state.is_paused => {
                Command::TogglePause
            }
            Button::Primary => Command::Start,
        }
    }
}

fn primary_label(state: &GameState) -> &'static str {
    if state.game_over {
        "Play Again"
    } else if !state.is_started {
        "Start Game"
    } else {
        "Resume"
    }
}
