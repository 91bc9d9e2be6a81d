//! Drawing of a single annotated heatmap panel
//!
//! Cells are filled from the figure palette, then outlined with a light grid.
//! Labels are drawn separately so that cell painting never touches fonts.

use super::error::{RenderError, Result};
use super::layout::PanelLayout;
use super::palettes::FigurePalette;
use crate::interactions::{Domain, InteractionMatrix};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

/// Light gray cell outline
pub const GRID_COLOR: RGBColor = RGBColor(211, 211, 211);

const TITLE_FONT_SIZE: u32 = 16;
const TICK_FONT_SIZE: u32 = 12;

/// One titled heatmap of the figure
#[derive(Debug, Clone)]
pub struct Panel {
    pub domain: Domain,
    pub title: String,
    pub matrix: InteractionMatrix,
    /// Item names, one per column
    pub x_labels: Vec<String>,
    /// User names, one per row
    pub y_labels: Vec<String>,
}

impl Panel {
    pub fn new(
        domain: Domain,
        title: impl Into<String>,
        matrix: InteractionMatrix,
        x_labels: Vec<String>,
        y_labels: Vec<String>,
    ) -> Result<Self> {
        let title = title.into();
        let size = matrix.size();
        if x_labels.len() != size {
            return Err(RenderError::LabelMismatch {
                title,
                axis: "x",
                labels: x_labels.len(),
                size,
            });
        }
        if y_labels.len() != size {
            return Err(RenderError::LabelMismatch {
                title,
                axis: "y",
                labels: y_labels.len(),
                size,
            });
        }

        Ok(Self {
            domain,
            title,
            matrix,
            x_labels,
            y_labels,
        })
    }
}

pub(crate) fn rgb(color: [u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

/// Fill every cell with its category color and draw the cell grid
pub fn draw_cells<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &PanelLayout,
    matrix: &InteractionMatrix,
    palette: &FigurePalette,
) -> Result<()> {
    let n = layout.n.min(matrix.size());

    for row in 0..n {
        for col in 0..n {
            let color = rgb(palette.color(matrix.category(row, col)));
            let (upper_left, bottom_right) = layout.cell_rect(row, col);
            area.draw(&Rectangle::new([upper_left, bottom_right], color.filled()))?;
        }
    }

    let grid_style = GRID_COLOR.stroke_width(1);
    for row in 0..n {
        for col in 0..n {
            let (upper_left, bottom_right) = layout.cell_rect(row, col);
            area.draw(&Rectangle::new([upper_left, bottom_right], grid_style))?;
        }
    }

    Ok(())
}

/// Draw the panel title, user labels and rotated item labels
pub fn draw_labels<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    layout: &PanelLayout,
    panel: &Panel,
) -> Result<()> {
    let title_style = TextStyle::from(("sans-serif", TITLE_FONT_SIZE).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        panel.title.as_str(),
        layout.title_anchor(),
        title_style,
    ))?;

    let y_style = TextStyle::from(("sans-serif", TICK_FONT_SIZE).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for (row, label) in panel.y_labels.iter().enumerate() {
        area.draw(&Text::new(
            label.as_str(),
            layout.y_label_anchor(row),
            y_style.clone(),
        ))?;
    }

    // Rotated clockwise so item names read downwards from the grid edge.
    // plotters only rotates text in quarter turns, so no 45° slant here.
    let x_style = TextStyle::from(("sans-serif", TICK_FONT_SIZE).into_font())
        .color(&BLACK)
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Left, VPos::Center));
    for (col, label) in panel.x_labels.iter().enumerate() {
        area.draw(&Text::new(
            label.as_str(),
            layout.x_label_anchor(col),
            x_style.clone(),
        ))?;
    }

    Ok(())
}

/// Draw a complete panel into its own drawing area
pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    palette: &FigurePalette,
) -> Result<()> {
    let (width, height) = area.dim_in_pixel();
    let layout = PanelLayout::compute(width, height, panel.matrix.size())?;

    draw_cells(area, &layout, &panel.matrix, palette)?;
    draw_labels(area, &layout, panel)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactions::{generate, numbered_labels, MatrixSpec};
    use crate::render::figure::rasterize_with;
    use crate::render::palettes::PALETTE_REGISTRY;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn palette() -> FigurePalette {
        let greens = PALETTE_REGISTRY.get("Greens").unwrap();
        FigurePalette::from_ramp([230, 230, 230], greens, 0.3, 0.9, 5)
    }

    fn matrix(density: f64, seed: u64) -> InteractionMatrix {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(&MatrixSpec::new(10, density, 5), &mut rng).unwrap()
    }

    #[test]
    fn test_panel_rejects_label_mismatch() {
        let m = matrix(0.1, 1);
        let err = Panel::new(
            Domain::Books,
            "Books",
            m.clone(),
            Domain::Books.item_labels(9),
            numbered_labels("User", 10),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::LabelMismatch { axis: "x", labels: 9, .. }));

        let err = Panel::new(
            Domain::Books,
            "Books",
            m.clone(),
            Domain::Books.item_labels(10),
            numbered_labels("User", 11),
        )
        .unwrap_err();
        assert!(matches!(err, RenderError::LabelMismatch { axis: "y", labels: 11, .. }));

        assert!(Panel::new(
            Domain::Books,
            "Books",
            m,
            Domain::Books.item_labels(10),
            numbered_labels("User", 10),
        )
        .is_ok());
    }

    #[test]
    fn test_every_cell_painted_with_its_category_color() {
        let palette = palette();
        let m = matrix(0.5, 9);
        let layout = PanelLayout::compute(400, 400, 10).unwrap();

        let image = rasterize_with(400, 400, |root| {
            root.fill(&WHITE)?;
            draw_cells(root, &layout, &m, &palette)
        })
        .unwrap();

        for row in 0..10 {
            for col in 0..10 {
                let (x, y) = layout.cell_center(row, col);
                let pixel = image.pixel(x as u32, y as u32);
                assert_eq!(pixel, palette.color(m.category(row, col)), "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_grid_lines_drawn_on_cell_borders() {
        let palette = palette();
        let m = matrix(0.1, 2);
        let layout = PanelLayout::compute(400, 400, 10).unwrap();

        let image = rasterize_with(400, 400, |root| {
            root.fill(&WHITE)?;
            draw_cells(root, &layout, &m, &palette)
        })
        .unwrap();

        let ((x0, _), _) = layout.cell_rect(4, 4);
        let (_, cy) = layout.cell_center(4, 4);
        assert_eq!(image.pixel(x0 as u32, cy as u32), [211, 211, 211]);
    }
}
