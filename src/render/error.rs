use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that can occur while rendering or displaying the figure
#[derive(Debug, Error)]
pub enum RenderError {
    /// Drawing backend failure
    #[error("Drawing error: {0}")]
    Drawing(String),

    /// Window/display backend failure (e.g. no display available)
    #[error("Display error: {0}")]
    Display(String),

    /// Panel area too small to hold one pixel per cell
    #[error("Panel of {width}x{height} pixels cannot fit a {size}x{size} grid")]
    TooSmall { width: u32, height: u32, size: usize },

    /// Axis labels do not match the matrix size
    #[error("Panel '{title}' has {labels} {axis} labels for a {size}x{size} matrix")]
    LabelMismatch {
        title: String,
        axis: &'static str,
        labels: usize,
        size: usize,
    },

    /// Panels do not cover the 2×2 grid exactly once
    #[error("Invalid figure layout: {0}")]
    Layout(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(e.to_string())
    }
}

/// Type alias for Results using RenderError
pub type Result<T> = std::result::Result<T, RenderError>;
