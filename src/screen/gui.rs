use crate::device_image_source::interface::ImageSourceKind;
use crate::library::logger::interface::Logger;
use crate::screen::core::Event;
use crate::screen::main::Screen;
use crate::screen::render::{render, ResultView, View, CAPTURE_LABEL, SELECT_LABEL};
use crate::screen::run_effect::Waker;
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0x00, 0xbc, 0xd4);
const GALLERY: egui::Color32 = egui::Color32::from_rgb(0x4c, 0xaf, 0x50);
const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x1e, 0x1e, 0x1e);
const RESULT_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);
const PREVIEW_SIZE: f32 = 300.0;
const PREVIEW_MAX_PIXELS: u32 = 900;

struct Preview {
    path: PathBuf,
    /// `None` when the file could not be decoded.
    texture: Option<egui::TextureHandle>,
}

struct ScreenWindow {
    screen: Screen,
    preview: Option<Preview>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ScreenWindow {
    fn new(screen: Screen) -> Self {
        let logger = screen.logger().with_namespace("gui");
        Self {
            screen,
            preview: None,
            logger,
        }
    }

    fn preview_texture(
        &mut self,
        ctx: &egui::Context,
        path: Option<&Path>,
    ) -> Option<egui::TextureHandle> {
        let path = match path {
            Some(path) => path,
            None => {
                self.preview = None;
                return None;
            }
        };

        let stale = match &self.preview {
            Some(preview) => preview.path != path,
            None => true,
        };
        if stale {
            self.preview = Some(Preview {
                path: path.to_path_buf(),
                texture: decode_preview(path, self.logger.as_ref()).map(|color_image| {
                    ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR)
                }),
            });
        }

        self.preview.as_ref().and_then(|p| p.texture.clone())
    }
}

fn decode_preview(
    path: &Path,
    logger: &(dyn Logger + Send + Sync),
) -> Option<egui::ColorImage> {
    let decoded = match image::open(path) {
        Ok(decoded) => decoded,
        Err(e) => {
            let _ = logger.error(&format!("Failed to decode {}: {}", path.display(), e));
            return None;
        }
    };
    let rgba = decoded
        .thumbnail(PREVIEW_MAX_PIXELS, PREVIEW_MAX_PIXELS)
        .to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];

    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

fn action_button(label: &str, fill: egui::Color32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label)
            .size(18.0)
            .color(egui::Color32::WHITE)
            .strong(),
    )
    .fill(fill)
    .rounding(12.0)
    .min_size(egui::vec2(300.0, 48.0))
}

fn draw(
    ui: &mut egui::Ui,
    view: &View,
    texture: Option<&egui::TextureHandle>,
) -> Option<ImageSourceKind> {
    let mut requested = None;

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            egui::RichText::new(view.title)
                .size(28.0)
                .color(egui::Color32::WHITE)
                .strong(),
        );
        ui.add_space(30.0);

        if ui
            .add_enabled(view.buttons_enabled, action_button(CAPTURE_LABEL, ACCENT))
            .clicked()
        {
            requested = Some(ImageSourceKind::Camera);
        }
        ui.add_space(10.0);
        if ui
            .add_enabled(view.buttons_enabled, action_button(SELECT_LABEL, GALLERY))
            .clicked()
        {
            requested = Some(ImageSourceKind::Library);
        }

        if let Some(texture) = texture {
            ui.add_space(30.0);
            egui::Frame::none()
                .stroke(egui::Stroke::new(2.0, ACCENT))
                .rounding(12.0)
                .show(ui, |ui| {
                    ui.add(
                        egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                            .fit_to_exact_size(egui::vec2(PREVIEW_SIZE, PREVIEW_SIZE)),
                    );
                });
        }

        if view.loading {
            ui.add_space(20.0);
            ui.add(egui::Spinner::new().size(32.0).color(ACCENT));
        }

        match &view.result {
            Some(ResultView::Success {
                landmark_line,
                distance_line,
            }) => {
                ui.add_space(30.0);
                egui::Frame::none()
                    .fill(RESULT_BACKGROUND)
                    .rounding(10.0)
                    .inner_margin(20.0)
                    .show(ui, |ui| {
                        for line in [landmark_line, distance_line] {
                            ui.label(
                                egui::RichText::new(line)
                                    .size(18.0)
                                    .color(egui::Color32::WHITE),
                            );
                        }
                    });
            }
            Some(ResultView::Failure { message }) => {
                ui.add_space(20.0);
                ui.label(egui::RichText::new(message).color(egui::Color32::RED));
            }
            None => {}
        }
    });

    requested
}

impl eframe::App for ScreenWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.screen.drain();

        let view = render(self.screen.state());
        let texture = self.preview_texture(ctx, view.image.as_deref());

        let requested = egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(BACKGROUND))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| draw(ui, &view, texture.as_ref()))
                    .inner
            })
            .inner;

        if let Some(source) = requested {
            self.screen.dispatch(Event::AcquireRequested(source));
        }
    }
}

/// Opens the window and blocks until it is closed. `build_screen` receives a
/// waker that repaints the window whenever an effect reports back.
pub fn run<F>(build_screen: F) -> Result<(), eframe::Error>
where
    F: FnOnce(Waker) -> Screen + 'static,
{
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 780.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Campus Navigator",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            let ctx = cc.egui_ctx.clone();
            let mut screen = build_screen(Arc::new(move || ctx.request_repaint()));
            screen.start();
            Box::new(ScreenWindow::new(screen))
        }),
    )
}
