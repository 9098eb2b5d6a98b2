//! Muted-orange palette matching the prototype mock.

use std::collections::BTreeMap;

use egui::Color32;

pub const ACCENT: Color32 = Color32::from_rgb(0xe6, 0xb4, 0x7c);
pub const BG: Color32 = Color32::from_rgb(0xf5, 0xf3, 0xf0);
pub const SURFACE: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
pub const TEXT: Color32 = Color32::from_rgb(0x1c, 0x1c, 0x1c);
pub const SUBTEXT: Color32 = Color32::from_rgb(0x6b, 0x6b, 0x6b);
pub const BORDER: Color32 = Color32::from_rgb(0xe5, 0xe5, 0xe5);
pub const CHIP_BG: Color32 = Color32::from_rgb(0xf2, 0xf2, 0xf2);
pub const HOVER: Color32 = Color32::from_rgb(0xec, 0xea, 0xe6);

pub fn apply(ctx: &egui::Context, text_scale: f32) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG;
    style.visuals.window_fill = SURFACE;
    style.visuals.faint_bg_color = CHIP_BG;
    style.visuals.widgets.hovered.bg_fill = HOVER;
    style.visuals.selection.bg_fill = ACCENT;
    style.text_styles = scaled_text_styles(text_scale);
    ctx.set_style(style);
}

fn scaled_text_styles(text_scale: f32) -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    for font in styles.values_mut() {
        font.size *= text_scale;
    }
    styles
}
