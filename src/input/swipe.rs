//! Pointer gesture recognition.
//!
//! A gesture is a pointer-down followed by a release. Short gestures are taps;
//! longer ones resolve to the direction of their dominant axis.

use crate::game::Direction;

/// Screen units spanned by one terminal column
pub const CELL_WIDTH_UNITS: f32 = 8.0;

/// Screen units spanned by one terminal row
pub const CELL_HEIGHT_UNITS: f32 = 16.0;

/// Convert a terminal cell to screen units, so the swipe threshold means
/// roughly the same physical distance as on a pixel surface
pub fn cell_to_screen(column: u16, row: u16) -> (f32, f32) {
    (
        f32::from(column) * CELL_WIDTH_UNITS,
        f32::from(row) * CELL_HEIGHT_UNITS,
    )
}

/// Resolve a pointer displacement to a direction, or `None` for a tap
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    if dx.abs().max(dy.abs()) < threshold {
        return None;
    }

    if dx.abs() > dy.abs() {
        Some(if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        Some(if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Swipe(Direction),
    Tap,
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    origin: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.origin = Some((x, y));
    }

    /// Finish the gesture; a release without a preceding press yields nothing
    pub fn pointer_up(&mut self, x: f32, y: f32) -> Option<Gesture> {
        let (start_x, start_y) = self.origin.take()?;

        Some(
            match classify_swipe(x - start_x, y - start_y, self.threshold) {
                Some(direction) => Gesture::Swipe(direction),
                None => Gesture::Tap,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_moves_are_ignored() {
        assert_eq!(classify_swipe(0.0, 0.0, 30.0), None);
        assert_eq!(classify_swipe(29.9, -29.9, 30.0), None);
    }

    #[test]
    fn test_dominant_axis_wins() {
        assert_eq!(classify_swipe(30.0, 0.0, 30.0), Some(Direction::Right));
        assert_eq!(classify_swipe(-45.0, 20.0, 30.0), Some(Direction::Left));
        assert_eq!(classify_swipe(10.0, 31.0, 30.0), Some(Direction::Down));
        assert_eq!(classify_swipe(-5.0, -80.0, 30.0), Some(Direction::Up));
    }

    #[test]
    fn test_diagonal_tie_goes_vertical() {
        assert_eq!(classify_swipe(40.0, 40.0, 30.0), Some(Direction::Down));
        assert_eq!(classify_swipe(40.0, -40.0, 30.0), Some(Direction::Up));
    }

    #[test]
    fn test_tracker_gestures() {
        let mut tracker = SwipeTracker::new(30.0);

        tracker.pointer_down(100.0, 100.0);
        assert_eq!(
            tracker.pointer_up(160.0, 110.0),
            Some(Gesture::Swipe(Direction::Right))
        );

        tracker.pointer_down(100.0, 100.0);
        assert_eq!(tracker.pointer_up(105.0, 95.0), Some(Gesture::Tap));

        // The press was consumed by the previous release.
        assert_eq!(tracker.pointer_up(300.0, 100.0), None);
    }

    #[test]
    fn test_cell_conversion() {
        assert_eq!(cell_to_screen(0, 0), (0.0, 0.0));
        assert_eq!(cell_to_screen(4, 2), (32.0, 32.0));

        // Two rows of vertical travel clears the threshold, three columns do not.
        let (x0, y0) = cell_to_screen(10, 10);
        let (x1, y1) = cell_to_screen(13, 12);
        assert_eq!(classify_swipe(x1 - x0, y1 - y0, 30.0), Some(Direction::Down));
        let (x2, _) = cell_to_screen(13, 10);
        assert_eq!(classify_swipe(x2 - x0, 0.0, 30.0), None);
    }
}
