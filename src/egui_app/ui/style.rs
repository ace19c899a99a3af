use eframe::egui::{Color32, Stroke, Visuals};

/// Colors shared across the dashboard panels.
#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub chart_positive: Color32,
    pub chart_negative: Color32,
    pub chart_neutral: Color32,
    pub chart_bar: Color32,
    pub success: Color32,
    pub failure: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        bg_tertiary: Color32::from_rgb(42, 44, 48),
        panel_outline: Color32::from_rgb(38, 42, 48),
        grid_soft: Color32::from_rgb(30, 32, 36),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        chart_positive: Color32::from_rgb(34, 197, 94),
        chart_negative: Color32::from_rgb(239, 68, 68),
        chart_neutral: Color32::from_rgb(250, 204, 21),
        chart_bar: Color32::from_rgb(37, 99, 235),
        success: Color32::from_rgb(102, 176, 136),
        failure: Color32::from_rgb(192, 57, 43),
    }
}

/// Sentiment series colors in fixed slot order: positive, negative, neutral.
pub fn sentiment_colors() -> [Color32; 3] {
    let palette = palette();
    [
        palette.chart_positive,
        palette.chart_negative,
        palette.chart_neutral,
    ]
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.selection.bg_fill = palette.grid_soft;
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.inactive.bg_fill = palette.bg_tertiary;
    visuals.widgets.hovered.bg_fill = palette.bg_tertiary;
    visuals.widgets.active.bg_fill = palette.bg_tertiary;
}

pub fn panel_border() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}
