//! The 2×2 figure: shared title, four panels, rasterization to RGB

use super::error::{RenderError, Result};
use super::heatmap::{draw_panel, Panel};
use super::palettes::FigurePalette;
use crate::interactions::Domain;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

const FIGURE_TITLE_FONT_SIZE: u32 = 22;

/// Everything needed to draw the figure
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub palette: FigurePalette,
    /// Panels in grid order: movies, books, music, products
    panels: Vec<Panel>,
}

impl Figure {
    /// Build a figure; panels are placed by domain, whatever their order here
    pub fn new(
        title: impl Into<String>,
        width: u32,
        height: u32,
        palette: FigurePalette,
        panels: Vec<Panel>,
    ) -> Result<Self> {
        if panels.len() != Domain::ALL.len() {
            return Err(RenderError::Layout(format!(
                "expected {} panels, got {}",
                Domain::ALL.len(),
                panels.len()
            )));
        }

        let mut slots: Vec<Option<Panel>> = vec![None; Domain::ALL.len()];
        for panel in panels {
            let slot = &mut slots[panel.domain.slot_index()];
            if slot.is_some() {
                return Err(RenderError::Layout(format!(
                    "domain '{}' appears more than once",
                    panel.domain
                )));
            }
            *slot = Some(panel);
        }
        // Count check above plus no duplicates means every slot is filled
        let panels: Vec<Panel> = slots.into_iter().flatten().collect();

        Ok(Self {
            title: title.into(),
            width,
            height,
            palette,
            panels,
        })
    }

    /// Panels in row-major grid order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, domain: Domain) -> &Panel {
        &self.panels[domain.slot_index()]
    }
}

/// Draw the shared title and return the four panel areas in slot order
pub fn panel_areas<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    title: &str,
) -> Result<Vec<DrawingArea<DB, Shift>>> {
    let body = root.titled(title, ("sans-serif", FIGURE_TITLE_FONT_SIZE).into_font())?;
    Ok(body.split_evenly((2, 2)))
}

/// Draw the whole figure onto a drawing area
pub fn render_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
) -> Result<()> {
    root.fill(&WHITE)?;

    let areas = panel_areas(root, &figure.title)?;

    for panel in figure.panels() {
        debug!(domain = %panel.domain, title = %panel.title, "drawing panel");
        draw_panel(&areas[panel.domain.slot_index()], panel, &figure.palette)?;
    }

    Ok(())
}

/// Row-major RGB image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl FigureImage {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.rgb[idx], self.rgb[idx + 1], self.rgb[idx + 2]]
    }
}

/// Run `draw` against an in-memory bitmap and return the pixels
pub fn rasterize_with<F>(width: u32, height: u32, draw: F) -> Result<FigureImage>
where
    F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
{
    let mut rgb = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        draw(&root)?;
        root.present()?;
    }

    Ok(FigureImage { width, height, rgb })
}

/// Render the figure into an RGB image of the figure's size
pub fn rasterize(figure: &Figure) -> Result<FigureImage> {
    rasterize_with(figure.width, figure.height, |root| render_figure(root, figure))
}
