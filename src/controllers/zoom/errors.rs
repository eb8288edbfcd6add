use thiserror::Error;

use crate::core::actions::map_selection::map_selection::SelectionError;
use crate::core::errors::RenderError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZoomError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
