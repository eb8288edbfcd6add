use crate::core::data::point::Point;

/// A finished rubber-band gesture in widget pixels.
///
/// `end` may lie left of or above `start`; use [`SelectionRect::normalized`] to get
/// the same rectangle with `start` as the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SelectionRect {
    pub start: Point,
    pub end: Point,
}

impl SelectionRect {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            start: Point {
                x: self.start.x.min(self.end.x),
                y: self.start.y.min(self.end.y),
            },
            end: Point {
                x: self.start.x.max(self.end.x),
                y: self.start.y.max(self.end.y),
            },
        }
    }

    /// True when the gesture collapsed to a line or a point.
    #[must_use]
    pub fn is_zero_area(&self) -> bool {
        self.start.x == self.end.x || self.start.y == self.end.y
    }
}
