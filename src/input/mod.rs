//! Input router: keyboard, pointer gestures and on-screen buttons

pub mod buttons;
pub mod handler;
pub mod router;
pub mod swipe;

pub use buttons::Button;
pub use handler::{InputHandler, KeyAction};
pub use router::{Flow, InputRouter};
pub use swipe::{classify_swipe, Gesture, SwipeTracker};
