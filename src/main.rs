#![windows_subsystem = "windows"]
//! Code Converter - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod session;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use tracing::{info, warn};
use types::{Action, Language};
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "code-converter.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,code_converter=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Code Converter starting");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start async runtime");
            return Err(eframe::Error::AppCreation(Box::new(e)));
        }
    };

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    info!(api = %settings.api_base_url, "Settings ready");
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(1280.0, 820.0)))
        .with_min_inner_size([900.0, 600.0])
        .with_title(APP_TITLE);

    // Set window/taskbar icon from the inline SVG
    match utils::rasterize_icon(64) {
        Some((rgba, width, height)) => {
            let icon = egui::IconData { rgba, width, height };
            viewport = viewport.with_icon(std::sync::Arc::new(icon));
        }
        None => warn!("Failed to rasterize window icon"),
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, runtime, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Copy outputs out so the lock is not held while drawing
        let (converted, debugged, convert_outcome, debug_outcome, convert_pending, debug_pending) = {
            let s = self.session.lock().unwrap();
            (
                s.converted().to_string(),
                s.debugged().to_string(),
                s.outcome(Action::Convert).clone(),
                s.outcome(Action::Debug).clone(),
                s.is_pending(Action::Convert),
                s.is_pending(Action::Debug),
            )
        };

        let mut toggle_clicked = false;
        let mut convert_clicked = false;
        let mut debug_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                theme::card_frame(self.theme_mode).show(ui, |ui| {
                    // Header
                    theme::header_frame().show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(components::gradient_title(APP_TITLE, theme::FONT_TITLE));
                            ui.add_space(theme::SPACING_SM);
                            ui.label(
                                egui::RichText::new(APP_SUBTITLE)
                                    .size(theme::FONT_SUBTITLE)
                                    .strong()
                                    .color(theme::HEADER_TEXT),
                            );
                        });
                    });

                    ui.add_space(theme::SPACING_MD);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        toggle_clicked = components::theme_toggle(ui, self.theme_mode);
                    });
                    ui.add_space(theme::SPACING_LG);

                    // Editors
                    theme::header_frame().show(ui, |ui| {
                        ui.columns(3, |cols| {
                            let selector_w = cols[0].available_width();

                            components::language_selector(
                                &mut cols[0],
                                "from_language",
                                &mut self.form.from_language,
                                &Language::SOURCE_ORDER,
                                selector_w,
                            );
                            cols[0].add_space(theme::SPACING_MD);
                            components::code_editor(&mut cols[0], &mut self.form.input, INPUT_HINT);

                            components::language_selector(
                                &mut cols[1],
                                "to_language",
                                &mut self.form.to_language,
                                &Language::TARGET_ORDER,
                                selector_w,
                            );
                            cols[1].add_space(theme::SPACING_MD);
                            components::code_output(&mut cols[1], &converted, CONVERTED_HINT);

                            // Lines the third editor up with the other two
                            let selector_h = cols[2].spacing().interact_size.y;
                            cols[2].add_space(selector_h + theme::SPACING_MD);
                            components::code_output(&mut cols[2], &debugged, DEBUGGED_HINT);

                            cols[2].add_space(theme::SPACING_LG);
                            cols[2].horizontal(|ui| {
                                let w = (ui.available_width() - theme::SPACING_MD) / 2.0;
                                let size = egui::vec2(w, theme::BUTTON_HEIGHT_LARGE);
                                let convert_label = components::action_label(Action::Convert, convert_pending);
                                let debug_label = components::action_label(Action::Debug, debug_pending);
                                convert_clicked = ui.add_sized(size, theme::button_accent(convert_label)).clicked();
                                debug_clicked = ui.add_sized(size, theme::button_accent(debug_label)).clicked();
                            });
                            cols[2].add_space(theme::SPACING_SM);
                            components::outcome_line(&mut cols[2], "Convert", &convert_outcome);
                            components::outcome_line(&mut cols[2], "Debug", &debug_outcome);
                        });
                    });
                });
            });
        });

        if toggle_clicked {
            self.toggle_theme(ctx);
        }
        if convert_clicked {
            self.convert(ctx);
        }
        if debug_clicked {
            self.debug(ctx);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down");
        self.save_settings();
    }
}
