//! Figure generation pipeline
//!
//! The pipeline:
//! 1. Seeds one random source from the configuration
//! 2. Generates one sparse matrix per configured panel, in configuration order
//! 3. Rasterizes the 2×2 figure
//! 4. Shows it in a window

use crate::config::{ConfigError, FigureConfig};
use crate::interactions::{generate, numbered_labels, GenerateError};
use crate::render::{self, Figure, Panel, RenderError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::info;

/// Error type for pipeline operations
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Generate one labelled panel per configured domain
pub fn generate_panels<R: Rng + ?Sized>(config: &FigureConfig, rng: &mut R) -> Result<Vec<Panel>> {
    let user_labels = numbered_labels(&config.user_label_prefix, config.grid_size);

    let mut panels = Vec::with_capacity(config.panels.len());
    for panel_config in &config.panels {
        let matrix = generate(&config.matrix_spec(panel_config), rng)?;

        info!(
            domain = %panel_config.domain,
            observed = matrix.observed_count(),
            density = matrix.density(),
            "generated interaction matrix"
        );

        panels.push(Panel::new(
            panel_config.domain,
            panel_config.title.clone(),
            matrix,
            panel_config.domain.item_labels(config.grid_size),
            user_labels.clone(),
        )?);
    }

    Ok(panels)
}

/// Build the figure from a seeded random source
pub fn build_figure(config: &FigureConfig) -> Result<Figure> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let panels = generate_panels(config, &mut rng)?;

    Ok(Figure::new(
        config.title.clone(),
        config.window.width,
        config.window.height,
        config.figure_palette()?,
        panels,
    )?)
}

/// Generate, render and display the figure
pub fn run(config: &FigureConfig) -> Result<()> {
    info!("[1/3] Generating interaction matrices (seed {})...", config.seed);
    let figure = build_figure(config)?;

    info!(
        "[2/3] Rendering {}x{} figure...",
        figure.width, figure.height
    );
    let image = render::rasterize(&figure)?;

    info!("[3/3] Displaying figure (close the window to exit)...");
    render::show(image, &figure.title)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_panels_shares_one_random_source() {
        let config = FigureConfig::embedded().unwrap();

        let mut rng = StdRng::seed_from_u64(config.seed);
        let panels = generate_panels(&config, &mut rng).unwrap();

        // Each panel gets a fresh draw, not a restart of the seed
        let mut fresh = StdRng::seed_from_u64(config.seed);
        let first_only = generate(&config.matrix_spec(&config.panels[1]), &mut fresh).unwrap();
        assert_ne!(panels[1].matrix, first_only);
    }

    #[test]
    fn test_build_figure_labels() {
        let config = FigureConfig::embedded().unwrap();
        let figure = build_figure(&config).unwrap();

        for panel in figure.panels() {
            assert_eq!(panel.y_labels.first().map(String::as_str), Some("User 1"));
            assert_eq!(panel.y_labels.last().map(String::as_str), Some("User 10"));
            assert_eq!(panel.x_labels.len(), 10);
        }
        assert_eq!(figure.panels()[3].x_labels[4], "Product 5");
        assert_eq!(figure.width, 1400);
        assert_eq!(figure.height, 1200);
    }
}
