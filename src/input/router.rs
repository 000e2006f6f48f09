use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{
    buttons::Button,
    handler::{InputHandler, KeyAction},
    swipe::{cell_to_screen, Gesture, SwipeTracker},
};
use crate::game::{Command, GameConfig, GameStore};

/// Whether the host loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Funnels keyboard, pointer and button input into store commands.
///
/// Every direction intent goes through `GameStore::turn`, so the reversal
/// filter applies whichever device produced it.
pub struct InputRouter {
    keys: InputHandler,
    swipe: SwipeTracker,
}

impl InputRouter {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            keys: InputHandler::new(),
            swipe: SwipeTracker::new(config.swipe_threshold),
        }
    }

    pub fn handle_key(&self, key: KeyEvent, store: &mut GameStore) -> Flow {
        match self.keys.handle_key_event(key) {
            KeyAction::GameCommand(command) => {
                store.dispatch(command);
                Flow::Continue
            }
            KeyAction::Quit => Flow::Quit,
            KeyAction::None => Flow::Continue,
        }
    }

    /// Feed a terminal mouse event. Taps are resolved through `button_at`,
    /// which maps a terminal cell to the button drawn there, if any.
    pub fn handle_mouse<F>(&mut self, mouse: MouseEvent, store: &mut GameStore, button_at: F)
    where
        F: Fn(u16, u16) -> Option<Button>,
    {
        let (x, y) = cell_to_screen(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.swipe.pointer_down(x, y),
            MouseEventKind::Up(MouseButton::Left) => match self.swipe.pointer_up(x, y) {
                Some(Gesture::Swipe(direction)) => store.turn(direction),
                Some(Gesture::Tap) => {
                    if let Some(button) = button_at(mouse.column, mouse.row) {
                        self.press(button, store);
                    }
                }
                None => {}
            },
            _ => {}
        }
    }

    pub fn press(&self, button: Button, store: &mut GameStore) {
        let command: Command = button.command(store.snapshot());
        store.dispatch(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameEngine};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn setup() -> (InputRouter, GameStore) {
        let config = GameConfig::default();
        let router = InputRouter::new(&config);
        let store = GameStore::new(GameEngine::with_seed(config, 99));
        (router, store)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn gesture<F>(
        router: &mut InputRouter,
        store: &mut GameStore,
        from: (u16, u16),
        to: (u16, u16),
        button_at: F,
    ) where
        F: Fn(u16, u16) -> Option<Button> + Copy,
    {
        let down = mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1);
        let up = mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1);
        router.handle_mouse(down, store, button_at);
        router.handle_mouse(up, store, button_at);
    }

    fn no_buttons(_: u16, _: u16) -> Option<Button> {
        None
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_only_starts_when_idle() {
        let (router, mut store) = setup();

        assert_eq!(
            router.handle_key(key(KeyCode::Enter), &mut store),
            Flow::Continue
        );
        assert!(store.snapshot().is_active());

        router.handle_key(key(KeyCode::Down), &mut store);
        let before = store.snapshot().clone();
        router.handle_key(key(KeyCode::Enter), &mut store);
        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_space_toggles_pause_and_quit_passes_through() {
        let (router, mut store) = setup();
        store.start();

        router.handle_key(key(KeyCode::Char(' ')), &mut store);
        assert!(store.snapshot().is_paused);

        assert_eq!(
            router.handle_key(key(KeyCode::Char('q')), &mut store),
            Flow::Quit
        );
    }

    #[test]
    fn test_every_source_respects_reversal_filter() {
        let (mut router, mut store) = setup();
        store.start();

        router.handle_key(key(KeyCode::Left), &mut store);
        assert_eq!(store.snapshot().pending_direction, Direction::Right);

        router.press(Button::Left, &mut store);
        assert_eq!(store.snapshot().pending_direction, Direction::Right);

        gesture(&mut router, &mut store, (40, 10), (20, 10), no_buttons);
        assert_eq!(store.snapshot().pending_direction, Direction::Right);
    }

    #[test]
    fn test_swipe_sets_direction() {
        let (mut router, mut store) = setup();
        store.start();

        gesture(&mut router, &mut store, (10, 5), (11, 9), no_buttons);

        assert_eq!(store.snapshot().pending_direction, Direction::Down);
    }

    #[test]
    fn test_tap_presses_button_under_pointer() {
        let (mut router, mut store) = setup();
        let hit = |column: u16, row: u16| (column == 3 && row == 2).then_some(Button::Primary);

        gesture(&mut router, &mut store, (3, 2), (3, 2), hit);
        assert!(store.snapshot().is_active());

        // A tap that misses every button does nothing.
        gesture(&mut router, &mut store, (30, 20), (30, 20), hit);
        assert!(store.snapshot().is_active());
    }

    #[test]
    fn test_primary_button_resumes_when_paused() {
        let (router, mut store) = setup();
        store.start();
        store.toggle_pause();

        router.press(Button::Primary, &mut store);
        assert!(store.snapshot().is_active());
        assert_eq!(store.snapshot().score, 0);
    }
}
