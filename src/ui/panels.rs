use egui::{Color32, Context, RichText, ScrollArea, Ui};

use crate::config::Variant;
use crate::renderer::CameraMode;
use crate::ui::state::{FrameStats, UiState};
use crate::ui::theme::*;

#[derive(Default)]
pub struct UiActions {
    /// Grid sliders moved; the mesh must be rebuilt this frame.
    pub grid_changed: bool,
    /// Re-roll the noise with the current grid.
    pub regenerate: bool,
}

impl UiActions {
    pub fn needs_rebuild(&self) -> bool {
        self.grid_changed || self.regenerate
    }
}

pub fn draw_side_panel(ctx: &Context, state: &mut UiState, stats: &FrameStats) -> UiActions {
    let mut actions = UiActions::default();

    egui::SidePanel::right("control_panel")
        .min_width(280.0)
        .max_width(380.0)
        .default_width(300.0)
        .frame(egui::Frame::default().fill(BG_PANEL).inner_margin(16.0))
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new("TERRAIN 3D").strong());
                ui.add_space(4.0);
                ui.label(
                    RichText::new(state.variant.label())
                        .color(TEXT_MUTED)
                        .size(11.0),
                );
                ui.add_space(16.0);

                section_header(ui, "GRID");
                actions.grid_changed = grid_controls(ui, state);
                ui.add_space(8.0);
                if ui
                    .add(
                        egui::Button::new(RichText::new("Regenerate").color(BG_PURE_BLACK))
                            .fill(ACCENT_GREEN)
                            .min_size(egui::vec2(ui.available_width(), 32.0)),
                    )
                    .clicked()
                {
                    actions.regenerate = true;
                }
                ui.add_space(16.0);

                ui.separator();
                ui.add_space(12.0);

                section_header(ui, "VIEW");
                camera_controls(ui, &mut state.camera_mode);
                if state.variant == Variant::Animated {
                    ui.checkbox(&mut state.animation_paused, "Pause animation");
                }
                ui.add_space(16.0);

                perf_controls(ui, state);
                ui.add_space(16.0);

                if state.show_stats {
                    ui.separator();
                    ui.add_space(12.0);
                    stats_panel(ui, stats, state.animation_paused);
                }
            });
        });

    actions
}

fn section_header(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(TEXT_MUTED).size(11.0).strong());
    ui.add_space(4.0);
}

fn grid_controls(ui: &mut Ui, state: &mut UiState) -> bool {
    let limits = state.variant.limits();
    let grid = &mut state.grid;
    let mut changed = false;

    egui::Grid::new("grid_config")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Width");
            changed |= ui
                .add(egui::Slider::new(&mut grid.width, limits.extent.clone()))
                .changed();
            ui.end_row();

            ui.label("Height");
            changed |= ui
                .add(egui::Slider::new(&mut grid.height, limits.extent.clone()))
                .changed();
            ui.end_row();

            ui.label("Width segments");
            changed |= ui
                .add(egui::Slider::new(&mut grid.width_segments, limits.segments.clone()))
                .changed();
            ui.end_row();

            ui.label("Height segments");
            changed |= ui
                .add(egui::Slider::new(&mut grid.height_segments, limits.segments.clone()))
                .changed();
            ui.end_row();
        });

    changed
}

fn camera_controls(ui: &mut Ui, mode: &mut CameraMode) {
    ui.horizontal(|ui| {
        ui.label("Camera:");
        if ui.selectable_label(*mode == CameraMode::Orbital, "Orbital").clicked() {
            *mode = CameraMode::Orbital;
        }
        if ui.selectable_label(*mode == CameraMode::Free, "Free").clicked() {
            *mode = CameraMode::Free;
        }
    });
}

fn perf_controls(ui: &mut Ui, state: &mut UiState) {
    section_header(ui, "DISPLAY");
    ui.horizontal(|ui| {
        ui.checkbox(&mut state.vsync_enabled, "VSync");
        ui.checkbox(&mut state.show_stats, "Stats");
    });
}

fn stats_panel(ui: &mut Ui, stats: &FrameStats, paused: bool) {
    section_header(ui, "STATISTICS");
    egui::Frame::default()
        .fill(BG_WIDGET)
        .stroke(egui::Stroke::new(1.0, BORDER_SUBTLE))
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.style_mut().override_font_id =
                Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));

            let fps_color = if stats.fps >= 60.0 {
                ACCENT_GREEN
            } else if stats.fps >= 30.0 {
                ACCENT_ORANGE
            } else {
                ACCENT_RED
            };

            egui::Grid::new("stats")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    stat_row(ui, "FPS", format!("{:.0}", stats.fps), fps_color);
                    stat_row(ui, "Vertices", fmt_num(stats.vertices), TEXT_PRIMARY);
                    stat_row(ui, "Triangles", fmt_num(stats.triangles), TEXT_PRIMARY);
                    stat_row(ui, "Highlights", stats.highlights.to_string(), ACCENT_LIME);
                    let hovered = stats
                        .hovered_face
                        .map_or_else(|| "-".to_string(), |face| face.to_string());
                    stat_row(ui, "Hovered", hovered, TEXT_PRIMARY);
                    let time = if paused {
                        format!("{:.2} (paused)", stats.time)
                    } else {
                        format!("{:.2}", stats.time)
                    };
                    stat_row(ui, "Time", time, TEXT_PRIMARY);
                });
        });
}

fn stat_row(ui: &mut Ui, label: &str, value: String, color: Color32) {
    ui.label(RichText::new(label).color(TEXT_MUTED));
    ui.label(RichText::new(value).color(color));
    ui.end_row();
}

pub fn draw_help_overlay(ctx: &Context, mode: CameraMode, pos: [f32; 3]) {
    let controls = match mode {
        CameraMode::Orbital => "RMB+Drag - Orbit | Scroll - Zoom",
        CameraMode::Free => "WASD - Move | RMB+Drag - Look | Scroll - Speed",
    };

    egui::Area::new(egui::Id::new("help_overlay"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(Color32::from_black_alpha(180))
                .rounding(6.0)
                .inner_margin(10.0)
                .show(ui, |ui| {
                    ui.style_mut().override_font_id =
                        Some(egui::FontId::new(11.0, egui::FontFamily::Monospace));
                    ui.label(RichText::new(controls).color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!(
                            "Pos: ({:.1}, {:.1}, {:.1})",
                            pos[0], pos[1], pos[2]
                        ))
                        .color(TEXT_MUTED),
                    );
                });
        });
}

fn fmt_num(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num_scales() {
        assert_eq!(fmt_num(676), "676");
        assert_eq!(fmt_num(5_151), "5.2K");
        assert_eq!(fmt_num(2_500_000), "2.50M");
    }

    #[test]
    fn test_actions_need_rebuild() {
        assert!(!UiActions::default().needs_rebuild());
        let actions = UiActions {
            regenerate: true,
            ..Default::default()
        };
        assert!(actions.needs_rebuild());
    }
}
