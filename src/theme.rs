//! Centralized theme constants for Code Converter
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// THEME MODE
// =============================================================================

/// Light/dark switch. Purely cosmetic, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    /// Icon shown on the toggle button (moon switches to dark, sun to light)
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Light => egui_phosphor::regular::MOON,
            ThemeMode::Dark => egui_phosphor::regular::SUN,
        }
    }

    pub fn egui_theme(self) -> egui::Theme {
        match self {
            ThemeMode::Light => egui::Theme::Light,
            ThemeMode::Dark => egui::Theme::Dark,
        }
    }
}

// =============================================================================
// COLORS - Palettes
// =============================================================================

pub struct Palette {
    pub bg_base: Color32,
    pub bg_elevated: Color32,
    pub bg_input: Color32,
    pub bg_hover: Color32,
    pub border_subtle: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub icon: Color32,
    pub selection: Color32,
}

pub const DARK: Palette = Palette {
    bg_base: Color32::from_rgb(0x09, 0x09, 0x0b),     // zinc-950
    bg_elevated: Color32::from_rgb(0x18, 0x18, 0x1b), // zinc-900
    bg_input: Color32::from_rgb(0x14, 0x14, 0x18),
    bg_hover: Color32::from_rgb(0x0f, 0x1a, 0x19), // subtle teal hover
    border_subtle: Color32::from_rgb(0x27, 0x27, 0x2a),
    text_primary: Color32::WHITE,
    text_secondary: Color32::from_rgb(0xe4, 0xe4, 0xe7), // zinc-200
    icon: Color32::WHITE,
    selection: Color32::from_rgb(0x3a, 0x3a, 0x3f),
};

pub const LIGHT: Palette = Palette {
    bg_base: Color32::from_rgb(0xf5, 0xf5, 0xf5),
    bg_elevated: Color32::from_rgb(0xc0, 0xde, 0xd0), // mint card
    bg_input: Color32::WHITE,
    bg_hover: Color32::from_rgb(0xe6, 0xf4, 0xf1),
    border_subtle: Color32::from_rgb(0xd4, 0xd4, 0xd8), // zinc-300
    text_primary: Color32::from_rgb(0x33, 0x33, 0x33),
    text_secondary: Color32::from_rgb(0x3f, 0x3f, 0x46), // zinc-700
    icon: Color32::from_rgb(0x33, 0x33, 0x33),
    selection: Color32::from_rgb(0xb4, 0xe4, 0xdc),
};

// =============================================================================
// COLORS - Shared
// =============================================================================
pub const HEADER_FILL: Color32 = Color32::from_rgb(0x07, 0x60, 0x60); // deep teal
pub const HEADER_TEXT: Color32 = Color32::WHITE;
pub const TITLE_GRADIENT_START: Color32 = Color32::from_rgb(0xff, 0xff, 0x00);
pub const TITLE_GRADIENT_END: Color32 = Color32::from_rgb(0x79, 0x28, 0xca);

pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400

// Accent (sky) button
pub const BTN_ACCENT: Color32 = Color32::from_rgb(0x1d, 0xa1, 0xf2);
pub const BTN_ACCENT_TEXT: Color32 = Color32::WHITE;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_TITLE: f32 = 34.0;
pub const FONT_SUBTITLE: f32 = 20.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_SMALL: f32 = 12.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const EDITOR_ROWS: usize = 22;
pub const TOGGLE_SIZE: f32 = 32.0;
pub const BUTTON_HEIGHT_LARGE: f32 = 36.0;

pub const RADIUS_DEFAULT: f32 = 4.0;
pub const RADIUS_MEDIUM: f32 = 6.0;

pub const STROKE_DEFAULT: f32 = 1.0;
pub const STROKE_MEDIUM: f32 = 1.5;

pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 20.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context, mode: ThemeMode) {
    let p = mode.palette();
    let base = match mode {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    };

    ctx.set_theme(mode.egui_theme());
    ctx.set_visuals(egui::Visuals {
        dark_mode: mode == ThemeMode::Dark,
        panel_fill: p.bg_base,
        window_fill: p.bg_elevated,
        extreme_bg_color: p.bg_input,
        faint_bg_color: p.bg_elevated,
        selection: egui::style::Selection {
            bg_fill: p.selection,
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: p.bg_elevated,
                weak_bg_fill: p.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: p.bg_input,
                weak_bg_fill: p.bg_input,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_secondary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: p.bg_hover,
                weak_bg_fill: p.bg_hover,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: p.bg_hover,
                weak_bg_fill: p.bg_hover,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -1.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: p.bg_elevated,
                weak_bg_fill: p.bg_elevated,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.border_subtle),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, p.text_primary),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..base
    });

    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Outer card holding the whole form
pub fn card_frame(mode: ThemeMode) -> egui::Frame {
    egui::Frame::new()
        .fill(mode.palette().bg_elevated)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, mode.palette().border_subtle))
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Teal panel behind the header and the editor columns
pub fn header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(HEADER_FILL)
        .corner_radius(RADIUS_MEDIUM)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

// =============================================================================
// HELPER - Buttons
// =============================================================================

/// Accent button for the two actions
pub fn button_accent(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(BTN_ACCENT_TEXT).size(FONT_BODY))
        .fill(BTN_ACCENT)
        .corner_radius(RADIUS_DEFAULT)
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_between_two_modes() {
        let mut mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Light);
        mode = mode.toggled();
        assert_eq!(mode, ThemeMode::Dark);
        mode = mode.toggled();
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn palettes_differ_per_mode() {
        assert_ne!(ThemeMode::Light.palette().bg_base, ThemeMode::Dark.palette().bg_base);
        assert_ne!(ThemeMode::Light.toggle_icon(), ThemeMode::Dark.toggle_icon());
    }

    #[test]
    fn lighten_moves_toward_white() {
        let c = lighten(Color32::from_rgb(0, 100, 200), 0.5);
        assert_eq!(c, Color32::from_rgb(127, 177, 227));
        assert_eq!(lighten(Color32::WHITE, 0.3), Color32::WHITE);
    }
}
