//! UI state owned by the dashboard controller.

use eframe::egui::Color32;

use crate::sentiment_api::StatsSnapshot;

/// Fixed user-facing message for any failed submission attempt.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Could not analyze the comment. Please try again.";

/// Gender selection offered by the form.
///
/// The service encodes these as single letters: `"M"` (Femenino) and
/// `"H"` (Masculino). The form defaults to `"M"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Female, Gender::Male];

    /// Single-letter code used on the wire.
    pub fn wire_code(self) -> &'static str {
        match self {
            Gender::Female => "M",
            Gender::Male => "H",
        }
    }

    /// Label shown in the form's selector.
    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

/// Mutable form contents for the comment being composed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommentDraft {
    pub name: String,
    pub gender: Gender,
    pub text: String,
}

impl CommentDraft {
    /// A draft may be submitted only with non-blank comment text.
    pub fn is_submittable(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Reset to empty defaults after a successful submission.
    pub fn reset(&mut self) {
        *self = CommentDraft::default();
    }
}

/// Tone of the one-line submission outcome under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeTone {
    Success,
    Failure,
}

/// Result line of the most recent submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub message: String,
    pub tone: OutcomeTone,
}

/// Form state: the draft plus the submit-in-flight guard and last outcome.
#[derive(Debug, Default)]
pub struct FormState {
    pub draft: CommentDraft,
    pub submitting: bool,
    pub outcome: Option<SubmissionOutcome>,
}

/// Stats state: the last snapshot (if any) and the fetch loading flag.
#[derive(Debug, Default)]
pub struct StatsState {
    pub snapshot: Option<StatsSnapshot>,
    pub loading: bool,
}

/// Status bar contents.
#[derive(Debug)]
pub struct StatusState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl Default for StatusState {
    fn default() -> Self {
        Self {
            text: "Ready".to_string(),
            badge_label: "Idle".to_string(),
            badge_color: Color32::from_rgb(42, 42, 42),
        }
    }
}

/// All UI state rendered each frame.
#[derive(Debug, Default)]
pub struct UiState {
    pub form: FormState,
    pub stats: StatsState,
    pub status: StatusState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_draft_is_empty_with_female_gender() {
        let draft = CommentDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.gender, Gender::Female);
        assert_eq!(draft.text, "");
    }

    #[test]
    fn blank_and_whitespace_drafts_are_not_submittable() {
        let mut draft = CommentDraft::default();
        assert!(!draft.is_submittable());
        draft.text = "   \t\n".to_string();
        assert!(!draft.is_submittable());
        draft.text = "Me encanta".to_string();
        assert!(draft.is_submittable());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = CommentDraft {
            name: "Ana".to_string(),
            gender: Gender::Male,
            text: "hola".to_string(),
        };
        draft.reset();
        assert_eq!(draft, CommentDraft::default());
    }

    #[test]
    fn wire_codes_match_service_contract() {
        assert_eq!(Gender::Female.wire_code(), "M");
        assert_eq!(Gender::Male.wire_code(), "H");
        assert_eq!(Gender::default().wire_code(), "M");
    }
}
