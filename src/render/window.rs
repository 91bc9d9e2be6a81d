//! On-screen display of the rasterized figure
//!
//! The figure is drawn once into an RGB buffer, uploaded as a single texture
//! and shown until the window is closed.

use super::error::{RenderError, Result};
use super::figure::FigureImage;
use eframe::egui;
use tracing::info;

struct FigureWindow {
    texture: egui::TextureHandle,
}

impl FigureWindow {
    fn new(cc: &eframe::CreationContext<'_>, image: FigureImage) -> Self {
        let color_image = egui::ColorImage::from_rgb(
            [image.width as usize, image.height as usize],
            &image.rgb,
        );
        let texture =
            cc.egui_ctx
                .load_texture("interaction-grid", color_image, egui::TextureOptions::LINEAR);

        Self { texture }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Image::new((self.texture.id(), self.texture.size_vec2()))
                            .shrink_to_fit(),
                    );
                });
            });
    }
}

/// Open a window showing `image`; blocks until the window is closed
pub fn show(image: FigureImage, title: &str) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size([image.width as f32, image.height as f32]),
        ..Default::default()
    };

    info!(
        width = image.width,
        height = image.height,
        "opening figure window"
    );

    eframe::run_native(
        title,
        options,
        Box::new(move |cc| Ok(Box::new(FigureWindow::new(cc, image)))),
    )
    .map_err(|e| RenderError::Display(e.to_string()))
}
