//! Palette registry and the figure's cell color mapping
//!
//! Loads sequential palettes (gradients from low to high values) from
//! palettes.json, embedded at compile time, and provides access by name.
//! The figure palette is an explicit ordered list: index 0 is the
//! missing-cell color, index `r` is the color of rating `r`.

use crate::interactions::CellCategory;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Embedded palettes.json content
const PALETTES_JSON: &str = include_str!("../../palettes.json");

/// Global palette registry, initialized lazily on first access
pub static PALETTE_REGISTRY: Lazy<PaletteRegistry> = Lazy::new(|| {
    PaletteRegistry::from_json(PALETTES_JSON).unwrap_or_else(|e| {
        warn!("Failed to load palettes.json: {}", e);
        PaletteRegistry::default()
    })
});

/// A single palette definition from palettes.json
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteDefinition {
    pub name: String,
    /// Color stops as hex, low to high
    pub colors: Vec<String>,
}

impl PaletteDefinition {
    /// Color stop at `index`; gray when out of range or not valid hex
    pub fn get_color(&self, index: usize) -> [u8; 3] {
        self.colors
            .get(index)
            .and_then(|hex| parse_hex_color(hex))
            .unwrap_or([128, 128, 128])
    }

    /// First color stop that is not valid hex, if any
    pub fn invalid_color(&self) -> Option<&str> {
        self.colors
            .iter()
            .find(|hex| parse_hex_color(hex).is_none())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Interpolate a color from the palette at position t ∈ [0, 1]
    ///
    /// t=0 returns the first color, t=1 returns the last color.
    /// Values in between are linearly interpolated.
    pub fn interpolate(&self, t: f64) -> [u8; 3] {
        if self.colors.is_empty() {
            return [128, 128, 128];
        }

        let t = t.clamp(0.0, 1.0);
        let n = self.colors.len();

        if n == 1 {
            return self.get_color(0);
        }

        let pos = t * (n - 1) as f64;
        let idx_low = pos.floor() as usize;
        let idx_high = (idx_low + 1).min(n - 1);
        let frac = pos - idx_low as f64;

        let low = self.get_color(idx_low);
        let high = self.get_color(idx_high);

        [
            lerp(low[0], high[0], frac),
            lerp(low[1], high[1], frac),
            lerp(low[2], high[2], frac),
        ]
    }

    /// `levels` evenly spaced samples over [start, end]
    pub fn sample(&self, start: f64, end: f64, levels: usize) -> Vec<[u8; 3]> {
        match levels {
            0 => Vec::new(),
            1 => vec![self.interpolate(start)],
            _ => {
                let step = (end - start) / (levels - 1) as f64;
                (0..levels)
                    .map(|i| self.interpolate(start + step * i as f64))
                    .collect()
            }
        }
    }
}

fn lerp(a: u8, b: u8, frac: f64) -> u8 {
    (a as f64 * (1.0 - frac) + b as f64 * frac).round() as u8
}

/// Registry of all available palettes
#[derive(Debug, Clone, Default)]
pub struct PaletteRegistry {
    /// All palettes by name (lowercase keys for case-insensitive lookup)
    palettes: HashMap<String, PaletteDefinition>,
}

impl PaletteRegistry {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let definitions: Vec<PaletteDefinition> = serde_json::from_str(json)?;

        let mut registry = Self::default();

        for def in definitions {
            registry.palettes.insert(def.name.to_lowercase(), def);
        }

        debug!(total = registry.palettes.len(), "loaded palette registry");

        Ok(registry)
    }

    /// Get a palette by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&PaletteDefinition> {
        self.palettes.get(&name.to_lowercase())
    }
}

/// Parse a hex color string to RGB array
///
/// Supports `#RRGGBB`, `#RRGGBBAA` (alpha ignored) and both without `#`.
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let hex = hex.trim_start_matches('#');

    if (hex.len() != 6 && hex.len() != 8) || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some([r, g, b])
}

/// Ordered cell colors: `[missing, rating 1, ..., rating M]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigurePalette {
    colors: Vec<[u8; 3]>,
}

impl FigurePalette {
    /// Missing color followed by `levels` samples of `ramp` over [start, end]
    pub fn from_ramp(
        missing: [u8; 3],
        ramp: &PaletteDefinition,
        start: f64,
        end: f64,
        levels: usize,
    ) -> Self {
        let mut colors = Vec::with_capacity(levels + 1);
        colors.push(missing);
        colors.extend(ramp.sample(start, end, levels));
        Self { colors }
    }

    /// Color for a cell category; ratings above the last level share its color
    pub fn color(&self, category: CellCategory) -> [u8; 3] {
        let idx = category.index().min(self.colors.len() - 1);
        self.colors[idx]
    }

    pub fn missing(&self) -> [u8; 3] {
        self.colors[0]
    }

    /// Number of rating levels (excluding missing)
    pub fn levels(&self) -> usize {
        self.colors.len() - 1
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }
}
