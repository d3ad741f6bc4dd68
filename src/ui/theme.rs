use egui::style::WidgetVisuals;
use egui::{Color32, FontId, Rounding, Stroke, Visuals};

// ── Palette ──────────────────────────────────────────────────────────────────

/// Timeline canvas behind the rows.
pub const BG_DARK: Color32 = Color32::from_rgb(22, 25, 30);
pub const BG_PANEL: Color32 = Color32::from_rgb(29, 33, 40);
/// Hour-label strip and the member column.
pub const BG_HEADER: Color32 = Color32::from_rgb(35, 40, 49);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(52, 58, 70);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(226, 231, 238);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(150, 160, 175);
pub const TEXT_DIM: Color32 = Color32::from_rgb(98, 108, 122);
pub const TEXT_ON_BAR: Color32 = Color32::WHITE;

pub const ACCENT: Color32 = Color32::from_rgb(38, 166, 154);
pub const GRID_LINE: Color32 = Color32::from_rgb(46, 52, 62);
pub const GRID_LINE_HALF: Color32 = Color32::from_rgb(36, 41, 49);
pub const HANDLE_COLOR: Color32 = Color32::from_rgb(245, 247, 250);
pub const REMOVE_HOVER: Color32 = Color32::from_rgb(229, 57, 53);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_HEIGHT: f32 = 36.0;
pub const ROW_GAP: f32 = 2.0;
pub const HEADER_HEIGHT: f32 = 32.0;
pub const MEMBER_COLUMN_WIDTH: f32 = 150.0;
/// Grab zone for the start/end resize handles.
pub const HANDLE_WIDTH: f32 = 8.0;
pub const BAR_ROUNDING: f32 = 5.0;
pub const BAR_INSET: f32 = 4.0;
pub const STATUS_BAR_HEIGHT: f32 = 24.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_header() -> FontId {
    FontId::monospace(11.0)
}

pub fn font_bar() -> FontId {
    FontId::proportional(11.5)
}

pub fn font_member() -> FontId {
    FontId::proportional(12.5)
}

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

// ── Shift bars ───────────────────────────────────────────────────────────────

/// Part-time bars cycle through these by row.
pub const SHIFT_COLORS: &[Color32] = &[
    Color32::from_rgb(66, 133, 244),
    Color32::from_rgb(52, 168, 83),
    Color32::from_rgb(171, 71, 188),
    Color32::from_rgb(251, 140, 0),
    Color32::from_rgb(3, 169, 244),
    Color32::from_rgb(0, 188, 212),
];

pub const MANAGER_COLOR: Color32 = Color32::from_rgb(229, 57, 53);

pub fn shift_color(index: usize) -> Color32 {
    SHIFT_COLORS[index % SHIFT_COLORS.len()]
}

// ── Visuals ──────────────────────────────────────────────────────────────────

fn widget(visuals: &mut WidgetVisuals, fill: Color32, border: Color32) {
    visuals.bg_fill = fill;
    visuals.weak_bg_fill = fill;
    visuals.bg_stroke = Stroke::new(1.0, border);
    visuals.rounding = Rounding::same(3.0);
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.extreme_bg_color = BG_DARK;

    widget(&mut visuals.widgets.noninteractive, BG_PANEL, BORDER_SUBTLE);
    widget(&mut visuals.widgets.inactive, BG_HEADER, BORDER_SUBTLE);
    widget(&mut visuals.widgets.hovered, GRID_LINE, ACCENT);
    widget(&mut visuals.widgets.active, GRID_LINE, ACCENT);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.selection.bg_fill = ACCENT.linear_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    ctx.set_visuals(visuals);
}
