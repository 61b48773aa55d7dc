//! Widgets for the converter form: language dropdowns, code panes,
//! the theme toggle and the per-action status line.

use crate::theme::{self, ThemeMode};
use crate::types::{Action, ActionOutcome, Language};
use eframe::egui;

/// Dropdown over a fixed language list
pub fn language_selector(
    ui: &mut egui::Ui,
    id_salt: &str,
    value: &mut Language,
    options: &[Language],
    width: f32,
) {
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(egui::RichText::new(value.name()).size(theme::FONT_BODY))
        .width(width)
        .show_ui(ui, |ui| {
            for &lang in options {
                ui.selectable_value(value, lang, lang.name());
            }
        });
}

/// Button caption; stays clickable while a request is in flight
pub fn action_label(action: Action, pending: bool) -> &'static str {
    match (action, pending) {
        (Action::Convert, false) => "Convert",
        (Action::Convert, true) => "Converting...",
        (Action::Debug, false) => "Debug",
        (Action::Debug, true) => "Debugging...",
    }
}

/// Editable code area
pub fn code_editor(ui: &mut egui::Ui, text: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::multiline(text)
            .code_editor()
            .hint_text(hint)
            .desired_rows(theme::EDITOR_ROWS)
            .desired_width(f32::INFINITY),
    )
}

/// Read-only code area. Text stays selectable for copying.
pub fn code_output(ui: &mut egui::Ui, text: &str, hint: &str) -> egui::Response {
    let mut text = text;
    ui.add(
        egui::TextEdit::multiline(&mut text)
            .code_editor()
            .hint_text(hint)
            .desired_rows(theme::EDITOR_ROWS)
            .desired_width(f32::INFINITY),
    )
}

/// Square icon button that flips the theme. Returns true if clicked.
pub fn theme_toggle(ui: &mut egui::Ui, mode: ThemeMode) -> bool {
    let size = egui::vec2(theme::TOGGLE_SIZE, theme::TOGGLE_SIZE);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let palette = mode.palette();

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = theme::button_visual(&response, palette.bg_input, rect);
        let painter = ui.painter();
        painter.rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            mode.toggle_icon(),
            egui::FontId::proportional(theme::TOGGLE_SIZE * 0.55),
            palette.icon,
        );
    }
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response.on_hover_text("Toggle light/dark mode").clicked()
}

/// One-line status under the action buttons
pub fn outcome_line(ui: &mut egui::Ui, verb: &str, outcome: &ActionOutcome) {
    ui.horizontal(|ui| match outcome {
        ActionOutcome::Idle => {}
        ActionOutcome::Pending => {
            ui.add(egui::Spinner::new().size(theme::FONT_BODY));
            ui.label(egui::RichText::new(format!("{verb}...")).size(theme::FONT_SMALL));
        }
        ActionOutcome::Success => {
            ui.label(
                egui::RichText::new(format!("{} {verb} done", egui_phosphor::regular::CHECK))
                    .size(theme::FONT_SMALL)
                    .color(theme::STATUS_SUCCESS),
            );
        }
        ActionOutcome::Failed(reason) => {
            ui.label(
                egui::RichText::new(format!("{} {verb} failed: {reason}", egui_phosphor::regular::WARNING))
                    .size(theme::FONT_SMALL)
                    .color(theme::STATUS_ERROR),
            );
        }
    });
}

/// Title text with a left-to-right color gradient
pub fn gradient_title(text: &str, size: f32) -> egui::text::LayoutJob {
    let mut job = egui::text::LayoutJob::default();
    let count = text.chars().count().max(2) - 1;
    for (i, ch) in text.chars().enumerate() {
        let t = i as f32 / count as f32;
        job.append(
            ch.encode_utf8(&mut [0; 4]),
            0.0,
            egui::TextFormat {
                font_id: egui::FontId::proportional(size),
                color: lerp_color(theme::TITLE_GRADIENT_START, theme::TITLE_GRADIENT_END, t),
                ..Default::default()
            },
        );
    }
    job
}

fn lerp_color(a: egui::Color32, b: egui::Color32, t: f32) -> egui::Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    egui::Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
