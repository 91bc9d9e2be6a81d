//! Figure configuration
//!
//! All fixed inputs (seed, grid size, densities, titles, colors, window size)
//! live in figure.json, embedded at compile time. Nothing is read from the
//! command line, the environment or the filesystem at runtime.

use crate::interactions::{Domain, MatrixSpec};
use crate::render::palettes::PaletteRegistry;
use crate::render::{parse_hex_color, FigurePalette, PALETTE_REGISTRY};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Embedded figure.json content
const FIGURE_JSON: &str = include_str!("../figure.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse figure configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Domain '{0}' is configured more than once")]
    DuplicateDomain(Domain),

    #[error("Domain '{0}' has no panel configured")]
    MissingDomain(Domain),

    #[error("Unknown palette '{0}'")]
    UnknownPalette(String),

    #[error("Invalid hex color '{0}'")]
    InvalidColor(String),

    #[error("Palette '{palette}' has invalid color stop '{color}'")]
    InvalidPaletteColor { palette: String, color: String },

    #[error("Invalid ramp range [{start}, {end}]: must satisfy 0 <= start < end <= 1")]
    InvalidRamp { start: f64, end: f64 },

    #[error("Window size must be in 1..=16384 per side, got {width}x{height}")]
    InvalidWindow { width: u32, height: u32 },

    #[error("Invalid matrix parameters for '{domain}': {source}")]
    Matrix {
        domain: Domain,
        #[source]
        source: crate::interactions::GenerateError,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Largest window side in pixels
pub const MAX_WINDOW_SIDE: u32 = 16_384;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaletteConfig {
    /// Missing-cell color as hex
    pub missing: String,
    /// Name of a sequential palette in palettes.json
    pub ramp: String,
    /// Ramp position of rating 1
    pub ramp_start: f64,
    /// Ramp position of the highest rating
    pub ramp_end: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    pub domain: Domain,
    pub title: String,
    /// Fraction of observed cells
    pub density: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FigureConfig {
    pub title: String,
    /// Seed of the single random source shared by all panels
    pub seed: u64,
    pub grid_size: usize,
    pub max_rating: u32,
    pub user_label_prefix: String,
    pub window: WindowConfig,
    pub palette: PaletteConfig,
    pub panels: Vec<PanelConfig>,
}

impl FigureConfig {
    /// The configuration compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(FIGURE_JSON)
    }

    /// Parse and validate a configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FigureConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let side_ok = |side: u32| (1..=MAX_WINDOW_SIDE).contains(&side);
        if !side_ok(self.window.width) || !side_ok(self.window.height) {
            return Err(ConfigError::InvalidWindow {
                width: self.window.width,
                height: self.window.height,
            });
        }

        let mut seen = HashSet::new();
        for panel in &self.panels {
            if !seen.insert(panel.domain) {
                return Err(ConfigError::DuplicateDomain(panel.domain));
            }
            self.matrix_spec(panel)
                .validate()
                .map_err(|source| ConfigError::Matrix {
                    domain: panel.domain,
                    source,
                })?;
        }
        if let Some(missing) = Domain::ALL.iter().find(|d| !seen.contains(*d)) {
            return Err(ConfigError::MissingDomain(*missing));
        }

        self.figure_palette()?;
        Ok(())
    }

    /// Generator parameters for one panel
    pub fn matrix_spec(&self, panel: &PanelConfig) -> MatrixSpec {
        MatrixSpec::new(self.grid_size, panel.density, self.max_rating)
    }

    /// Missing color followed by one ramp color per rating
    pub fn figure_palette(&self) -> Result<FigurePalette> {
        self.figure_palette_from(&PALETTE_REGISTRY)
    }

    /// Same as `figure_palette`, looking the ramp up in `registry`
    pub fn figure_palette_from(&self, registry: &PaletteRegistry) -> Result<FigurePalette> {
        let missing = parse_hex_color(&self.palette.missing)
            .ok_or_else(|| ConfigError::InvalidColor(self.palette.missing.clone()))?;

        let ramp = registry
            .get(&self.palette.ramp)
            .ok_or_else(|| ConfigError::UnknownPalette(self.palette.ramp.clone()))?;
        if let Some(color) = ramp.invalid_color() {
            return Err(ConfigError::InvalidPaletteColor {
                palette: ramp.name.clone(),
                color: color.to_string(),
            });
        }

        let (start, end) = (self.palette.ramp_start, self.palette.ramp_end);
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start >= end {
            return Err(ConfigError::InvalidRamp { start, end });
        }

        Ok(FigurePalette::from_ramp(
            missing,
            ramp,
            start,
            end,
            self.max_rating as usize,
        ))
    }
}
