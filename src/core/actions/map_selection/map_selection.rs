use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::selection_rect::SelectionRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection has zero area")]
    ZeroArea,

    #[error("widget size must be positive: {width}x{height}")]
    InvalidWidgetSize { width: i32, height: i32 },
}

/// Maps a pixel-space selection over a widget showing `region` to a new region.
///
/// The selection is normalized first, so dragging in any direction yields a
/// rectangle with the same orientation as `region`. Selections may extend past
/// the widget edges; the mapping is linear and extrapolates.
pub fn map_selection(
    region: ComplexRect,
    widget_width: i32,
    widget_height: i32,
    selection: SelectionRect,
) -> Result<ComplexRect, SelectionError> {
    if widget_width <= 0 || widget_height <= 0 {
        return Err(SelectionError::InvalidWidgetSize {
            width: widget_width,
            height: widget_height,
        });
    }

    if selection.is_zero_area() {
        return Err(SelectionError::ZeroArea);
    }

    let selection = selection.normalized();
    let to_complex = |x: i32, y: i32| Complex {
        real: (region.width() * f64::from(x)) / f64::from(widget_width) + region.top_left().real,
        imag: (region.height() * f64::from(y)) / f64::from(widget_height) + region.top_left().imag,
    };

    // Both corners differ on each axis, so the only way to fail is a span that
    // underflows to zero at extreme zoom depth.
    ComplexRect::new(
        to_complex(selection.start.x, selection.start.y),
        to_complex(selection.end.x, selection.end.y),
    )
    .map_err(|_| SelectionError::ZeroArea)
}
