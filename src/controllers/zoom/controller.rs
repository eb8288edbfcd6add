use log::{debug, warn};

use crate::controllers::selection::{PointerEvent, RubberBandEvent, RubberBandSelector};
use crate::controllers::viewport::ViewportModel;
use crate::controllers::zoom::errors::ZoomError;
use crate::core::actions::map_selection::map_selection::{SelectionError, map_selection};
use crate::core::data::selection_rect::SelectionRect;

/// Turns completed rubber-band gestures into viewport zooms.
///
/// The widget size is tracked separately from the viewport resolution: the
/// selection is always mapped against what the user sees, even when the image
/// is rendered at a different resolution.
pub struct ZoomController {
    viewport: ViewportModel,
    selector: RubberBandSelector,
    widget_width: i32,
    widget_height: i32,
    follow_widget_size: bool,
}

impl ZoomController {
    pub fn new(viewport: ViewportModel) -> Self {
        let resolution = viewport.resolution();

        Self {
            viewport,
            selector: RubberBandSelector::new(),
            widget_width: saturating_i32(resolution.width()),
            widget_height: saturating_i32(resolution.height()),
            follow_widget_size: true,
        }
    }

    /// Whether [`ZoomController::resize_widget`] also re-renders at the new size.
    #[must_use]
    pub fn with_follow_widget_size(mut self, follow_widget_size: bool) -> Self {
        self.follow_widget_size = follow_widget_size;
        self
    }

    /// Feeds one pointer event through the selector and zooms on completion.
    ///
    /// The selector's event is returned so the caller can repaint the overlay.
    /// Zero-area selections are dropped without touching the viewport.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
    ) -> Result<Option<RubberBandEvent>, ZoomError> {
        let rubber_band_event = self.selector.handle(event);

        if let Some(RubberBandEvent::SelectionComplete(selection)) = rubber_band_event {
            self.zoom_to(selection)?;
        }

        Ok(rubber_band_event)
    }

    /// Records a new widget size. Zero-sized widgets (minimized windows) are ignored.
    ///
    /// When following the widget, the size is only recorded once the viewport
    /// has rendered at it; a failed render leaves both unchanged.
    pub fn resize_widget(&mut self, width: u32, height: u32) -> Result<(), ZoomError> {
        if width == 0 || height == 0 {
            debug!("Ignoring resize to {width}x{height}");
            return Ok(());
        }

        if self.follow_widget_size {
            self.viewport.set_resolution(width, height)?;
        }

        self.widget_width = saturating_i32(width);
        self.widget_height = saturating_i32(height);

        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportModel {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportModel {
        &mut self.viewport
    }

    #[must_use]
    pub fn selector(&self) -> &RubberBandSelector {
        &self.selector
    }

    pub fn cancel_selection(&mut self) -> bool {
        self.selector.cancel()
    }

    #[must_use]
    pub fn widget_size(&self) -> (i32, i32) {
        (self.widget_width, self.widget_height)
    }

    fn zoom_to(&mut self, selection: SelectionRect) -> Result<(), ZoomError> {
        match map_selection(
            self.viewport.region(),
            self.widget_width,
            self.widget_height,
            selection,
        ) {
            Ok(region) => {
                debug!(
                    "Zooming to {:?} -> {:?}",
                    region.top_left(),
                    region.bottom_right()
                );
                self.viewport.set_region(region)?;
                Ok(())
            }
            Err(SelectionError::ZeroArea) => {
                warn!(
                    "Ignoring zero-area selection {:?} -> {:?}",
                    selection.start, selection.end
                );
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
