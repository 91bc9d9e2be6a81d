//! Synthetic interaction data
//!
//! Structure:
//! - `domain.rs`: The four recommendation domains and their grid slots
//! - `matrix.rs`: Immutable sparse rating matrix
//! - `generator.rs`: Seeded sampling of sparse matrices
//! - `error.rs`: Error types

pub mod domain;
pub mod error;
pub mod generator;
pub mod matrix;

pub use domain::{numbered_labels, Domain};
pub use error::{GenerateError, Result};
pub use generator::{generate, MatrixSpec, MAX_GRID_SIZE};
pub use matrix::{CellCategory, InteractionMatrix};
