//! Heatmap grid rendering
//!
//! Structure:
//! - `palettes.rs`: Palette registry and the missing + rating color list
//! - `layout.rs`: Pixel geometry of one panel
//! - `heatmap.rs`: Cell and label drawing for one panel
//! - `figure.rs`: The 2×2 figure and rasterization
//! - `window.rs`: Desktop window showing the rasterized figure
//! - `error.rs`: Error types

pub mod error;
pub mod figure;
pub mod heatmap;
pub mod layout;
pub mod palettes;
pub mod window;

pub use error::{RenderError, Result};
pub use figure::{panel_areas, rasterize, render_figure, Figure, FigureImage};
pub use heatmap::Panel;
pub use palettes::{parse_hex_color, FigurePalette, PALETTE_REGISTRY};
pub use window::show;
