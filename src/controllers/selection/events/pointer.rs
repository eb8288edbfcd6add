use crate::core::data::point::Point;

/// Primary-button pointer input in widget-local pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}
