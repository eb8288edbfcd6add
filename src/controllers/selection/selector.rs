use log::debug;

use crate::controllers::selection::events::pointer::PointerEvent;
use crate::controllers::selection::events::rubber_band::RubberBandEvent;
use crate::core::data::point::Point;
use crate::core::data::selection_rect::SelectionRect;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RubberBandState {
    #[default]
    Idle,
    Selecting { start: Point, current: Point },
}

/// Tracks a single press-drag-release gesture.
///
/// Events that do not fit the current state are ignored: a second press while
/// dragging keeps the original anchor, and moves or releases without a press do
/// nothing.
#[derive(Debug, Default)]
pub struct RubberBandSelector {
    state: RubberBandState,
}

impl RubberBandSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: PointerEvent) -> Option<RubberBandEvent> {
        match (self.state, event) {
            (RubberBandState::Idle, PointerEvent::Down(start)) => {
                self.state = RubberBandState::Selecting {
                    start,
                    current: start,
                };
                None
            }
            (RubberBandState::Selecting { start, .. }, PointerEvent::Move(current)) => {
                self.state = RubberBandState::Selecting { start, current };
                Some(RubberBandEvent::SelectionUpdated { start, current })
            }
            (RubberBandState::Selecting { start, .. }, PointerEvent::Up(end)) => {
                self.state = RubberBandState::Idle;
                debug!("Selection complete: {start:?} -> {end:?}");
                Some(RubberBandEvent::SelectionComplete(SelectionRect::new(start, end)))
            }
            (RubberBandState::Selecting { .. }, PointerEvent::Down(_))
            | (RubberBandState::Idle, PointerEvent::Move(_) | PointerEvent::Up(_)) => None,
        }
    }

    /// Abandons an in-progress gesture. Returns whether one was active.
    pub fn cancel(&mut self) -> bool {
        let was_selecting = self.is_selecting();
        self.state = RubberBandState::Idle;
        was_selecting
    }

    /// The normalized rectangle being dragged, for overlay painting.
    #[must_use]
    pub fn preview(&self) -> Option<SelectionRect> {
        match self.state {
            RubberBandState::Idle => None,
            RubberBandState::Selecting { start, current } => {
                Some(SelectionRect::new(start, current).normalized())
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> RubberBandState {
        self.state
    }

    #[must_use]
    pub fn is_selecting(&self) -> bool {
        matches!(self.state, RubberBandState::Selecting { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_drag_release_emits_one_completion() {
        let mut selector = RubberBandSelector::new();

        let events: Vec<RubberBandEvent> = [
            PointerEvent::Down(Point::new(10, 10)),
            PointerEvent::Move(Point::new(50, 50)),
            PointerEvent::Up(Point::new(60, 60)),
        ]
        .into_iter()
        .filter_map(|event| selector.handle(event))
        .collect();

        assert_eq!(
            events,
            vec![
                RubberBandEvent::SelectionUpdated {
                    start: Point::new(10, 10),
                    current: Point::new(50, 50)
                },
                RubberBandEvent::SelectionComplete(SelectionRect::new(
                    Point::new(10, 10),
                    Point::new(60, 60)
                )),
            ]
        );
        assert_eq!(selector.state(), RubberBandState::Idle);
    }

    #[test]
    fn test_second_press_keeps_original_anchor() {
        let mut selector = RubberBandSelector::new();

        assert_eq!(selector.handle(PointerEvent::Down(Point::new(10, 10))), None);
        assert_eq!(selector.handle(PointerEvent::Down(Point::new(99, 99))), None);

        assert_eq!(
            selector.state(),
            RubberBandState::Selecting {
                start: Point::new(10, 10),
                current: Point::new(10, 10)
            }
        );
    }

    #[test]
    fn test_move_and_release_ignored_when_idle() {
        let mut selector = RubberBandSelector::new();

        assert_eq!(selector.handle(PointerEvent::Move(Point::new(5, 5))), None);
        assert_eq!(selector.handle(PointerEvent::Up(Point::new(5, 5))), None);
        assert_eq!(selector.state(), RubberBandState::Idle);
    }

    #[test]
    fn test_release_without_move_completes_at_release_point() {
        let mut selector = RubberBandSelector::new();
        selector.handle(PointerEvent::Down(Point::new(3, 4)));

        let event = selector.handle(PointerEvent::Up(Point::new(30, 40)));

        assert_eq!(
            event,
            Some(RubberBandEvent::SelectionComplete(SelectionRect::new(
                Point::new(3, 4),
                Point::new(30, 40)
            )))
        );
    }

    #[test]
    fn test_completion_keeps_raw_drag_direction() {
        let mut selector = RubberBandSelector::new();
        selector.handle(PointerEvent::Down(Point::new(60, 60)));

        let event = selector.handle(PointerEvent::Up(Point::new(10, 20)));

        assert_eq!(
            event,
            Some(RubberBandEvent::SelectionComplete(SelectionRect::new(
                Point::new(60, 60),
                Point::new(10, 20)
            )))
        );
    }

    #[test]
    fn test_preview_is_normalized() {
        let mut selector = RubberBandSelector::new();
        assert_eq!(selector.preview(), None);

        selector.handle(PointerEvent::Down(Point::new(60, 10)));
        selector.handle(PointerEvent::Move(Point::new(20, 40)));

        assert_eq!(
            selector.preview(),
            Some(SelectionRect::new(Point::new(20, 10), Point::new(60, 40)))
        );
    }

    #[test]
    fn test_cancel_returns_to_idle_without_event() {
        let mut selector = RubberBandSelector::new();
        selector.handle(PointerEvent::Down(Point::new(1, 1)));

        assert!(selector.cancel());
        assert!(!selector.cancel());
        assert_eq!(selector.handle(PointerEvent::Up(Point::new(9, 9))), None);
        assert!(!selector.is_selecting());
    }

    #[test]
    fn test_new_gesture_after_completion() {
        let mut selector = RubberBandSelector::new();
        selector.handle(PointerEvent::Down(Point::new(1, 1)));
        selector.handle(PointerEvent::Up(Point::new(5, 5)));

        selector.handle(PointerEvent::Down(Point::new(7, 8)));

        assert_eq!(
            selector.state(),
            RubberBandState::Selecting {
                start: Point::new(7, 8),
                current: Point::new(7, 8)
            }
        );
    }
}
