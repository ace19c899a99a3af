//! Dashboard controller: owns the config, the UI state, and the background
//! jobs for the two network operations.

mod background_jobs;
mod jobs;

use eframe::egui::Color32;

use crate::config::AppConfig;
use crate::egui_app::state::UiState;
use crate::sentiment_api::CommentPayload;
use jobs::ControllerJobs;

/// Mutates [`UiState`] in response to user input and job completions; the
/// view renders that state every frame and calls back into the controller.
pub struct DashboardController {
    pub ui: UiState,
    config: AppConfig,
    jobs: ControllerJobs,
}

impl DashboardController {
    pub fn new(config: AppConfig) -> Self {
        Self {
            ui: UiState::default(),
            config,
            jobs: ControllerJobs::new(),
        }
    }

    /// Submit the current draft for classification.
    ///
    /// Blank drafts are silently blocked: no request, no state change. At
    /// most one submission is in flight; extra calls are rejected until the
    /// pending one settles.
    pub fn submit_comment(&mut self) {
        if self.ui.form.submitting {
            return;
        }
        if !self.ui.form.draft.is_submittable() {
            return;
        }
        let draft = &self.ui.form.draft;
        let payload = CommentPayload {
            nombre: draft.name.trim().to_string(),
            genero: draft.gender.wire_code().to_string(),
            comentario: draft.text.trim().to_string(),
        };
        self.ui.form.submitting = true;
        self.ui.form.outcome = None;
        self.set_status("Analyzing comment…", StatusTone::Busy);
        self.jobs
            .begin_submit(self.config.api.base_url.clone(), self.config.api.envelope, payload);
    }

    /// Kick off a stats refresh unless one is already in flight.
    ///
    /// The loading flag is raised immediately and cleared when the worker's
    /// completion message is drained, success or failure.
    pub fn refresh_stats(&mut self) {
        if self.jobs.stats_fetch_in_progress() {
            return;
        }
        self.ui.stats.loading = true;
        self.jobs.begin_stats_fetch(self.config.api.base_url.clone());
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }
}

#[derive(Clone, Copy, Debug)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Idle => ("Idle".into(), Color32::from_rgb(42, 42, 42)),
        StatusTone::Busy => ("Working".into(), Color32::from_rgb(31, 139, 255)),
        StatusTone::Info => ("Info".into(), Color32::from_rgb(64, 140, 112)),
        StatusTone::Warning => ("Warning".into(), Color32::from_rgb(192, 138, 43)),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(192, 57, 43)),
    }
}
