//! Pixel format conversion helpers for presentation adapters.

use thiserror::Error;

use crate::core::data::selection_rect::SelectionRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    #[error("source length {0} is not a multiple of 3")]
    RaggedSource(usize),

    #[error("destination length {actual} does not match expected {expected}")]
    DestinationSize { expected: usize, actual: usize },
}

/// Copies RGB pixel data to RGBA format, setting alpha to 255.
pub fn copy_rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 3 != 0 {
        return Err(PixelFormatError::RaggedSource(src.len()));
    }

    let expected = (src.len() / 3) * 4;
    if dst.len() != expected {
        return Err(PixelFormatError::DestinationSize {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

/// Inverts the colour of every RGBA pixel on the border of `rect`.
///
/// `rect` is expected to be normalized. Parts outside the `width` x `height`
/// frame are clipped; the far edge is drawn on row/column `end`.
pub fn invert_rect_outline(frame: &mut [u8], width: u32, height: u32, rect: SelectionRect) {
    let max_x = i64::from(width) - 1;
    let max_y = i64::from(height) - 1;
    let (x0, y0) = (i64::from(rect.start.x), i64::from(rect.start.y));
    let (x1, y1) = (i64::from(rect.end.x), i64::from(rect.end.y));

    if max_x < 0 || max_y < 0 || x1 < 0 || y1 < 0 || x0 > max_x || y0 > max_y {
        return;
    }

    let mut invert = |x: i64, y: i64| {
        let index = ((y * i64::from(width) + x) * 4) as usize;
        if let Some(pixel) = frame.get_mut(index..index + 3) {
            for channel in pixel {
                *channel = 255 - *channel;
            }
        }
    };

    let (cx0, cx1) = (x0.max(0), x1.min(max_x));
    let (cy0, cy1) = (y0.max(0), y1.min(max_y));

    for x in cx0..=cx1 {
        if y0 >= 0 {
            invert(x, y0);
        }
        if y1 <= max_y && y1 != y0 {
            invert(x, y1);
        }
    }

    // corners already done by the horizontal edges
    for y in (cy0 + 1)..cy1 {
        if x0 >= 0 {
            invert(x0, y);
        }
        if x1 <= max_x && x1 != x0 {
            invert(x1, y);
        }
    }
}
