//! kaleido-rs - Kaleidoscope animation
//!
//! A handful of moving shapes are mirrored around the canvas center by
//! rotational symmetry. Each frame the motion driver moves the shapes, then
//! the renderer fills `reflections` rotated copies of every visible shape.

use eframe::egui;

mod animation;
mod config;
mod geometry;
mod render;
mod settings;
mod shapes;

use animation::Animator;
use config::{validate_figure_size, RenderConfig};
use render::KaleidoscopeCanvas;
use settings::AppSettings;
use shapes::{Rgb, ShapeKind};

/// Upper bound on a frame's time step, so a stalled window doesn't teleport shapes
const MAX_FRAME_DT: f32 = 0.1;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting kaleido-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("kaleido-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "kaleido-rs",
        options,
        Box::new(|cc| Ok(Box::new(KaleidoscopeApp::new(cc)))),
    )
}

/// Main application state
pub struct KaleidoscopeApp {
    pub(crate) config: RenderConfig,
    pub(crate) canvas: KaleidoscopeCanvas,
    pub(crate) animator: Animator,
    pub(crate) show_settings: bool,
    pub(crate) paused: bool,

    // Spawn parameters
    pub(crate) figure_size: i32,
    pub(crate) shapes_per_kind: usize,
    pub(crate) needs_respawn: bool,

    settings_dirty: bool,
}

impl KaleidoscopeApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            config: RenderConfig::default(),
            canvas: KaleidoscopeCanvas::new(),
            animator: Animator::new(),
            show_settings: true,
            paused: false,
            figure_size: 20,
            shapes_per_kind: 2,
            needs_respawn: true,
            settings_dirty: false,
        };

        AppSettings::load().apply(&mut app);
        app
    }

    fn status(&self) -> String {
        let visible = self
            .animator
            .models()
            .iter()
            .filter(|m| self.config.is_visible(m.kind))
            .count();
        format!(
            "{} of {} shapes visible, {} reflections",
            visible,
            self.animator.models().len(),
            self.config.reflections()
        )
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Kaleidoscope");
        ui.separator();

        let mut reflections = self.config.reflections() as i32;
        if ui
            .add(egui::Slider::new(&mut reflections, 1..=24).text("Reflections"))
            .changed()
        {
            match self.config.set_reflections(reflections) {
                Ok(()) => self.settings_dirty = true,
                Err(e) => log::warn!("{}", e),
            }
        }

        ui.separator();
        ui.label("Shapes:");
        for &kind in ShapeKind::all() {
            let mut visible = self.config.is_visible(kind);
            if ui.checkbox(&mut visible, kind.name()).changed() {
                self.config.set_visible(kind, visible);
                self.settings_dirty = true;
            }
        }

        ui.separator();

        ui.collapsing("Motion", |ui| {
            if ui
                .add(egui::Slider::new(&mut self.animator.speed, 0.0..=5.0).text("Speed"))
                .changed()
            {
                self.settings_dirty = true;
            }

            let mut size = self.figure_size;
            if ui
                .add(egui::Slider::new(&mut size, 5..=60).text("Figure size"))
                .changed()
            {
                match validate_figure_size(size) {
                    Ok(size) => {
                        self.figure_size = size;
                        self.animator.set_figure_size(size);
                        self.settings_dirty = true;
                    }
                    Err(e) => log::warn!("{}", e),
                }
            }

            if ui
                .add(egui::Slider::new(&mut self.shapes_per_kind, 1..=10).text("Shapes per kind"))
                .changed()
            {
                self.needs_respawn = true;
                self.settings_dirty = true;
            }

            if ui.button("Respawn").clicked() {
                self.needs_respawn = true;
            }
        });

        ui.separator();

        ui.collapsing("Background", |ui| {
            ui.horizontal(|ui| {
                for (name, color) in [("Cyan", Rgb::CYAN), ("Black", Rgb::BLACK), ("White", Rgb::WHITE)] {
                    if ui.button(name).clicked() {
                        self.canvas.renderer.background = color;
                        self.settings_dirty = true;
                    }
                }
            });
        });
    }
}

impl eframe::App for KaleidoscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("kaleido-rs");
                ui.separator();

                let button_text = if self.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(button_text).clicked() {
                    self.paused = !self.paused;
                    self.settings_dirty = true;
                }

                ui.separator();
                if ui.toggle_value(&mut self.show_settings, "⚙ Settings").changed() {
                    self.settings_dirty = true;
                }
                ui.separator();
                ui.label(self.status());
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| self.settings_panel(ui));
        }

        // Main kaleidoscope display
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                // Bounds must be current before anything moves
                KaleidoscopeCanvas::fit(ui, &mut self.config);

                if self.needs_respawn {
                    self.animator
                        .spawn(self.shapes_per_kind, self.figure_size, self.config.canvas());
                    self.needs_respawn = false;
                }

                if !self.paused {
                    let dt = ctx.input(|i| i.stable_dt).min(MAX_FRAME_DT);
                    self.animator.step(dt, self.config.canvas());
                }

                self.canvas.show(ui, self.animator.models(), &mut self.config);
            });

        if self.settings_dirty {
            AppSettings::from_app(self).save();
            self.settings_dirty = false;
        }
    }
}
