//! App module - contains the main application state and logic

mod dispatch;

use crate::api::ConverterClient;
use crate::session::Session;
use crate::settings::Settings;
use crate::theme::{self, ThemeMode};
use crate::types::Language;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::debug;

// ============================================================================
// APP STATE
// ============================================================================

/// Values the user edits directly
pub struct Form {
    pub input: String,
    pub from_language: Language,
    pub to_language: Language,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            input: String::new(),
            from_language: Language::JavaScript,
            to_language: Language::Python,
        }
    }
}

pub struct App {
    pub(crate) form: Form,
    // Outputs, written by request completions
    pub(crate) session: Arc<Mutex<Session>>,
    pub(crate) client: ConverterClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) theme_mode: ThemeMode,
    // Settings
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let app = Self::with_settings(runtime, settings, data_dir);
        theme::apply_visuals(&cc.egui_ctx, app.theme_mode);
        app
    }

    /// State without any egui setup
    pub(crate) fn with_settings(
        runtime: tokio::runtime::Runtime,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        let client = ConverterClient::new(&settings.api_base_url);
        debug!(api = %client.base_url(), "Converter client ready");

        Self {
            form: Form::default(),
            session: Arc::new(Mutex::new(Session::default())),
            client,
            runtime,
            theme_mode: ThemeMode::default(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            api_base_url: self.client.base_url().to_string(),
        };
        settings.save(&self.data_dir);
    }

    /// Flip light/dark. Form and session are untouched.
    pub fn toggle_mode(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggled();
        debug!(mode = ?self.theme_mode, "Theme toggled");
        self.theme_mode
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        let mode = self.toggle_mode();
        theme::apply_visuals(ctx, mode);
    }
}
