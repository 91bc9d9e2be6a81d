//! Sparse interaction grid library
//!
//! Generates synthetic sparse user–item rating matrices for four domains and
//! renders them as a 2×2 grid of heatmaps, gray for missing cells.
//!
//! Module organization:
//! - `interactions`: Domains, sparse matrices and their seeded generation
//! - `render`: Palettes, panel layout, drawing and display
//! - `config`: Embedded figure configuration
//! - `pipeline`: Generation → rasterization → display

pub mod config;
pub mod interactions;
pub mod pipeline;
pub mod render;
