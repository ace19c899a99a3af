use eframe::egui::{self, RichText};

use super::{EguiApp, style};
use crate::egui_app::state::{Gender, OutcomeTone};

impl EguiApp {
    /// Render the comment submission form bound to the current draft.
    pub(super) fn render_comment_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.add_space(8.0);
        ui.label(
            RichText::new("Analyze a new comment")
                .color(palette.text_primary)
                .strong(),
        );
        ui.add_space(10.0);

        let mut submit_clicked = false;
        {
            let state = &mut self.controller.ui.form;
            let submitting = state.submitting;

            ui.label(RichText::new("Name").color(palette.text_muted));
            ui.add_enabled(
                !submitting,
                egui::TextEdit::singleline(&mut state.draft.name)
                    .hint_text("Your name")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(RichText::new("Gender").color(palette.text_muted));
            ui.add_enabled_ui(!submitting, |ui| {
                egui::ComboBox::from_id_salt("gender_combo")
                    .selected_text(state.draft.gender.label())
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for gender in Gender::ALL {
                            ui.selectable_value(&mut state.draft.gender, gender, gender.label());
                        }
                    });
            });
            ui.add_space(8.0);

            ui.label(RichText::new("Comment").color(palette.text_muted));
            ui.add_enabled(
                !submitting,
                egui::TextEdit::multiline(&mut state.draft.text)
                    .hint_text("Describe cómo te sientes con la maestría aquí...")
                    .desired_width(f32::INFINITY)
                    .desired_rows(5),
            );
            ui.add_space(12.0);

            // Blank drafts keep the control disabled; no request is ever built.
            let can_submit = !submitting && state.draft.is_submittable();
            let button_label = if submitting {
                "Analyzing…"
            } else {
                "Submit comment"
            };
            if ui
                .add_enabled(
                    can_submit,
                    egui::Button::new(button_label).min_size(egui::vec2(ui.available_width(), 30.0)),
                )
                .clicked()
            {
                submit_clicked = true;
            }

            if let Some(outcome) = state.outcome.as_ref() {
                let color = match outcome.tone {
                    OutcomeTone::Success => palette.success,
                    OutcomeTone::Failure => palette.failure,
                };
                ui.add_space(10.0);
                ui.label(RichText::new(&outcome.message).color(color));
            }
        }

        if submit_clicked {
            self.controller.submit_comment();
        }
    }
}
