use crate::core::data::point::Point;
use crate::core::data::selection_rect::SelectionRect;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RubberBandEvent {
    /// The pointer moved during a drag; `start` and `current` are raw, not normalized.
    SelectionUpdated { start: Point, current: Point },
    SelectionComplete(SelectionRect),
}
