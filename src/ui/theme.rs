use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

pub const BG_PURE_BLACK: Color32 = Color32::from_rgb(0, 0, 0);
pub const BG_PANEL: Color32 = Color32::from_rgb(6, 9, 5);
pub const BG_WIDGET: Color32 = Color32::from_rgb(16, 22, 13);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(26, 36, 20);
pub const BG_WIDGET_ACTIVE: Color32 = Color32::from_rgb(38, 52, 26);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(170, 176, 162);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(108, 114, 100);
pub const TEXT_BRIGHT: Color32 = Color32::from_rgb(222, 228, 214);

// Plane base tint and hover tint, brightened for legibility.
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(72, 150, 10);
pub const ACCENT_LIME: Color32 = Color32::from_rgb(150, 170, 90);
pub const ACCENT_RED: Color32 = Color32::from_rgb(172, 35, 35);
pub const ACCENT_ORANGE: Color32 = Color32::from_rgb(172, 117, 35);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgba_premultiplied(40, 60, 30, 77);
pub const BORDER_ACCENT: Color32 = ACCENT_GREEN;

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.window_rounding = Rounding::same(6.0);
    visuals.extreme_bg_color = BG_PURE_BLACK;
    visuals.faint_bg_color = BG_PANEL;
    visuals.warn_fg_color = ACCENT_ORANGE;
    visuals.error_fg_color = ACCENT_RED;
    visuals.slider_trailing_fill = true;
    visuals.handle_shape = egui::style::HandleShape::Circle;

    visuals.selection.bg_fill = ACCENT_GREEN.gamma_multiply(0.4);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT_LIME);

    let widgets = &mut visuals.widgets;
    for (w, fill, stroke, fg) in [
        (&mut widgets.noninteractive, BG_PANEL, BORDER_SUBTLE, TEXT_MUTED),
        (&mut widgets.inactive, BG_WIDGET, BORDER_SUBTLE, TEXT_PRIMARY),
        (&mut widgets.hovered, BG_WIDGET_HOVER, BORDER_ACCENT, TEXT_BRIGHT),
        (&mut widgets.active, BG_WIDGET_ACTIVE, ACCENT_LIME, TEXT_BRIGHT),
        (&mut widgets.open, BG_WIDGET_ACTIVE, BORDER_ACCENT, TEXT_BRIGHT),
    ] {
        w.bg_fill = fill;
        w.weak_bg_fill = fill;
        w.bg_stroke = Stroke::new(1.0, stroke);
        w.fg_stroke = Stroke::new(1.0, fg);
        w.rounding = Rounding::same(4.0);
    }

    let mut style = (*ctx.style()).clone();
    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.slider_width = 150.0;

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
    ]
    .into();

    ctx.set_style(style);
}
