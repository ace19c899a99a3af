//! Painter-drawn chart panels for the stats snapshot.

use std::f32::consts::TAU;

use eframe::egui::{self, Align2, Color32, Pos2, RichText, Sense, Shape, Stroke, TextStyle};

use super::{EguiApp, style};
use crate::sentiment_api::StatsSnapshot;

const SENTIMENT_LABELS: [&str; 3] = ["Positive", "Negative", "Neutral"];
const GENDER_LABELS: [&str; 2] = ["Male", "Female"];

const PIE_DIAMETER: f32 = 180.0;
const BAR_PANEL_HEIGHT: f32 = 200.0;
const BAR_LABEL_BAND: f32 = 20.0;

impl EguiApp {
    /// Render the stats area: header with reload, then the three panels,
    /// a loading placeholder, or the empty state.
    pub(super) fn render_stats_panels(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let loading = self.controller.ui.stats.loading;

        let mut reload_clicked = false;
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Statistics")
                    .color(palette.text_primary)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.add_enabled(!loading, egui::Button::new("Reload")).clicked() {
                    reload_clicked = true;
                }
            });
        });
        ui.add_space(8.0);

        if loading {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("Loading statistics…").color(palette.text_muted));
            });
        } else if let Some(snapshot) = self.controller.ui.stats.snapshot.clone() {
            self.render_snapshot_panels(ui, &snapshot);
        } else {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new("No statistics available yet.").color(palette.text_muted));
            });
        }

        if reload_clicked {
            self.controller.refresh_stats();
        }
    }

    fn render_snapshot_panels(&mut self, ui: &mut egui::Ui, snapshot: &StatsSnapshot) {
        ui.columns(2, |columns| {
            panel_frame().show(&mut columns[0], |ui| {
                render_sentiment_pie(ui, snapshot);
            });
            panel_frame().show(&mut columns[1], |ui| {
                render_gender_bars(ui, snapshot);
            });
        });
        ui.add_space(10.0);
        panel_frame().show(ui, |ui| {
            render_insights_panel(ui, snapshot);
        });
    }
}

fn panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(style::palette().bg_secondary)
        .stroke(style::panel_border())
        .inner_margin(egui::Margin::same(12))
}

fn render_sentiment_pie(ui: &mut egui::Ui, snapshot: &StatsSnapshot) {
    let palette = style::palette();
    let counts = snapshot.sentiment_series();
    let colors = style::sentiment_colors();

    ui.label(RichText::new("Sentiment distribution").color(palette.text_primary));
    ui.add_space(6.0);

    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), PIE_DIAMETER), Sense::hover());
    let center = rect.center();
    let radius = (PIE_DIAMETER / 2.0 - 4.0).min(rect.width() / 2.0 - 4.0);

    let slices = pie_slices(&counts, &colors);
    if slices.is_empty() {
        ui.painter()
            .circle_stroke(center, radius, Stroke::new(1.0, palette.grid_soft));
        ui.painter().text(
            center,
            Align2::CENTER_CENTER,
            "No comments yet",
            TextStyle::Body.resolve(ui.style()),
            palette.text_muted,
        );
    } else {
        for slice in &slices {
            ui.painter().add(Shape::convex_polygon(
                slice_points(center, radius, slice.start, slice.sweep),
                slice.color,
                Stroke::NONE,
            ));
        }
    }

    ui.add_space(6.0);
    for ((label, count), color) in SENTIMENT_LABELS.iter().zip(counts).zip(colors) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("■").color(color));
            ui.label(RichText::new(format!("{label}: {count}")).color(palette.text_muted));
        });
    }
}

fn render_gender_bars(ui: &mut egui::Ui, snapshot: &StatsSnapshot) {
    let palette = style::palette();
    let counts = snapshot.gender_series();

    ui.label(RichText::new("Participation by gender").color(palette.text_primary));
    ui.add_space(6.0);

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), BAR_PANEL_HEIGHT),
        Sense::hover(),
    );
    let plot = egui::Rect::from_min_max(
        rect.min,
        egui::pos2(rect.max.x, rect.max.y - BAR_LABEL_BAND),
    );
    ui.painter().line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, palette.grid_soft),
    );

    let fractions = bar_fractions(&counts);
    let slot_width = plot.width() / counts.len() as f32;
    let bar_width = slot_width * 0.5;
    let font = TextStyle::Body.resolve(ui.style());
    for (index, (label, count)) in GENDER_LABELS.iter().zip(counts).enumerate() {
        let slot_center_x = plot.left() + slot_width * (index as f32 + 0.5);
        let height = (plot.height() - 18.0) * fractions[index];
        let bar = egui::Rect::from_min_max(
            egui::pos2(slot_center_x - bar_width / 2.0, plot.bottom() - height),
            egui::pos2(slot_center_x + bar_width / 2.0, plot.bottom()),
        );
        ui.painter().rect_filled(bar, 2.0, palette.chart_bar);
        ui.painter().text(
            egui::pos2(slot_center_x, bar.top() - 4.0),
            Align2::CENTER_BOTTOM,
            count.to_string(),
            font.clone(),
            palette.text_primary,
        );
        ui.painter().text(
            egui::pos2(slot_center_x, rect.bottom()),
            Align2::CENTER_BOTTOM,
            *label,
            font.clone(),
            palette.text_muted,
        );
    }
}

fn render_insights_panel(ui: &mut egui::Ui, snapshot: &StatsSnapshot) {
    let palette = style::palette();
    ui.label(RichText::new("Insights").color(palette.text_primary));
    ui.add_space(6.0);
    let text = if snapshot.insights.trim().is_empty() {
        "No insights reported."
    } else {
        snapshot.insights.as_str()
    };
    egui::ScrollArea::vertical()
        .id_salt("insights_scroll")
        .max_height(160.0)
        .show(ui, |ui| {
            ui.label(RichText::new(text).color(palette.text_muted));
        });
}

struct PieSlice {
    start: f32,
    sweep: f32,
    color: Color32,
}

/// Split the full circle into slices proportional to `counts`, starting at
/// twelve o'clock. Zero counts produce no slice; an all-zero series produces
/// none at all (the caller renders an empty-circle hint instead of NaN
/// geometry).
fn pie_slices(counts: &[u64], colors: &[Color32]) -> Vec<PieSlice> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut start = -TAU / 4.0;
    counts
        .iter()
        .zip(colors)
        .filter(|(count, _)| **count > 0)
        .map(|(count, color)| {
            let sweep = (*count as f32 / total as f32) * TAU;
            let slice = PieSlice {
                start,
                sweep,
                color: *color,
            };
            start += sweep;
            slice
        })
        .collect()
}

/// Fan of points for one slice: the center followed by the arc, dense
/// enough that the polygon edge reads as a circle.
fn slice_points(center: Pos2, radius: f32, start: f32, sweep: f32) -> Vec<Pos2> {
    let steps = ((sweep / TAU) * 64.0).ceil().max(2.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = start + sweep * (step as f32 / steps as f32);
        points.push(egui::pos2(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    points
}

/// Bar heights relative to the tallest bar.
fn bar_fractions(counts: &[u64; 2]) -> [f32; 2] {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return [0.0, 0.0];
    }
    [
        counts[0] as f32 / max as f32,
        counts[1] as f32 / max as f32,
    ]
}
