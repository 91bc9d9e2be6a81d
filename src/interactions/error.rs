use thiserror::Error;

/// Errors raised while building interaction matrices
#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    /// Grid side length of zero
    #[error("Grid size must be positive")]
    EmptyGrid,

    /// Grid side beyond `MAX_GRID_SIZE`
    #[error("Grid size must be at most {max}, got {size}")]
    GridTooLarge { size: usize, max: usize },

    /// Density outside the open interval (0, 1)
    #[error("Density must be in (0, 1), got {0}")]
    DensityOutOfRange(f64),

    /// Ratings are stored as `u8` starting at 1
    #[error("Max rating must be in 1..=255, got {0}")]
    InvalidMaxRating(u32),
}

/// Type alias for Results using GenerateError
pub type Result<T> = std::result::Result<T, GenerateError>;
