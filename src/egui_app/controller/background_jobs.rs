//! Per-frame drain of worker completion messages.

use super::jobs::JobMessage;
use super::{DashboardController, StatusTone};
use crate::egui_app::state::{OutcomeTone, SUBMIT_FAILURE_MESSAGE, SubmissionOutcome};
use crate::sentiment_api::{ServiceError, StatsSnapshot};

impl DashboardController {
    /// Drain all pending job messages. Called at the top of every frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(_) => break,
            };
            match message {
                JobMessage::CommentSubmitted(result) => self.apply_comment_submitted(result),
                JobMessage::StatsFetched(result) => self.apply_stats_fetched(result),
            }
        }
    }

    fn apply_comment_submitted(&mut self, result: Result<String, ServiceError>) {
        self.jobs.clear_submit();
        self.ui.form.submitting = false;
        match result {
            Ok(label) => {
                self.ui.form.outcome = Some(SubmissionOutcome {
                    message: format!("Comment analyzed as {label}"),
                    tone: OutcomeTone::Success,
                });
                self.ui.form.draft.reset();
                self.set_status(format!("Comment classified: {label}"), StatusTone::Info);
                self.refresh_stats();
            }
            Err(err) => {
                tracing::warn!("Comment submission failed: {err}");
                // The draft is deliberately left intact so the user can retry.
                self.ui.form.outcome = Some(SubmissionOutcome {
                    message: SUBMIT_FAILURE_MESSAGE.to_string(),
                    tone: OutcomeTone::Failure,
                });
                self.set_status("Comment submission failed", StatusTone::Error);
            }
        }
    }

    fn apply_stats_fetched(&mut self, result: Result<StatsSnapshot, ServiceError>) {
        self.jobs.clear_stats_fetch();
        self.ui.stats.loading = false;
        match result {
            Ok(snapshot) => {
                self.ui.stats.snapshot = Some(snapshot);
                self.set_status("Statistics updated", StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!("Statistics refresh failed: {err}");
                // Stale-but-present beats a cleared view; the old snapshot stays.
                self.set_status(format!("Statistics refresh failed: {err}"), StatusTone::Warning);
            }
        }
    }
}
