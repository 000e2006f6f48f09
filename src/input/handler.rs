use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Command, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameCommand(Command),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::GameCommand(Command::Turn(Direction::Up)),
            KeyCode::Down => KeyAction::GameCommand(Command::Turn(Direction::Down)),
            KeyCode::Left => KeyAction::GameCommand(Command::Turn(Direction::Left)),
            KeyCode::Right => KeyAction::GameCommand(Command::Turn(Direction::Right)),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => {
                KeyAction::GameCommand(Command::Turn(Direction::Up))
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::GameCommand(Command::Turn(Direction::Down))
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::GameCommand(Command::Turn(Direction::Left))
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::GameCommand(Command::Turn(Direction::Right))
            }

            // Controls
            KeyCode::Char(' ') => KeyAction::GameCommand(Command::TogglePause),
            KeyCode::Enter => KeyAction::GameCommand(Command::Start),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            press(KeyCode::Up),
            KeyAction::GameCommand(Command::Turn(Direction::Up))
        );
        assert_eq!(
            press(KeyCode::Down),
            KeyAction::GameCommand(Command::Turn(Direction::Down))
        );
        assert_eq!(
            press(KeyCode::Left),
            KeyAction::GameCommand(Command::Turn(Direction::Left))
        );
        assert_eq!(
            press(KeyCode::Right),
            KeyAction::GameCommand(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            press(KeyCode::Char('w')),
            KeyAction::GameCommand(Command::Turn(Direction::Up))
        );
        assert_eq!(
            press(KeyCode::Char('a')),
            KeyAction::GameCommand(Command::Turn(Direction::Left))
        );
        assert_eq!(
            press(KeyCode::Char('s')),
            KeyAction::GameCommand(Command::Turn(Direction::Down))
        );
        assert_eq!(
            press(KeyCode::Char('d')),
            KeyAction::GameCommand(Command::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::GameCommand(Command::Turn(Direction::Up))
        );
    }

    #[test]
    fn test_pause_and_start_keys() {
        assert_eq!(
            press(KeyCode::Char(' ')),
            KeyAction::GameCommand(Command::TogglePause)
        );
        assert_eq!(press(KeyCode::Enter), KeyAction::GameCommand(Command::Start));
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);

        let q_upper = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(q_upper), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(KeyCode::Char('r')), KeyAction::None);
    }
}
