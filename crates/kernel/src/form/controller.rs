//! Form controller: owns the password form state and reacts to user actions.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::state::{FormAction, FormState, Phase, VisibilityMode};
use super::validate::ValidationResult;

/// Whether a dispatched action changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The action was applied.
    Applied,
    /// The action was rejected because submit was not armed.
    Ignored,
}

/// Drives a single password form instance.
///
/// Each displayed form gets its own controller; the state lives exactly as
/// long as the controller does.
pub struct FormController {
    form_build_id: Uuid,
    state: FormState,
}

impl FormController {
    /// Create a controller for a freshly displayed form.
    pub fn new() -> Self {
        let form_build_id = Uuid::now_v7();
        debug!(%form_build_id, "password form displayed");
        Self {
            form_build_id,
            state: FormState::new(),
        }
    }

    /// Identifier of this form instance.
    pub fn form_build_id(&self) -> Uuid {
        self.form_build_id
    }

    /// Current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Last classification result.
    pub fn result(&self) -> &ValidationResult {
        &self.state.result
    }

    pub fn submit_enabled(&self) -> bool {
        self.state.submit_enabled
    }

    pub fn visibility(&self) -> VisibilityMode {
        self.state.visibility
    }

    /// The password input changed.
    pub fn on_password_edit(&mut self, value: impl Into<String>) {
        self.dispatch(&FormAction::edit_password(value));
    }

    /// The confirmation input changed.
    pub fn on_confirmation_edit(&mut self, value: impl Into<String>) {
        self.dispatch(&FormAction::edit_confirmation(value));
    }

    /// Flip between masked and plain inputs.
    pub fn on_toggle_visibility(&mut self) {
        self.dispatch(&FormAction::ToggleVisibility);
    }

    /// Validate the current inputs.
    ///
    /// Returns the new result, or `None` when submit was not armed and
    /// nothing happened.
    pub fn on_submit(&mut self) -> Option<&ValidationResult> {
        match self.dispatch(&FormAction::Submit) {
            Transition::Applied => Some(&self.state.result),
            Transition::Ignored => None,
        }
    }

    /// Apply an action to the form, running it to completion.
    pub fn dispatch(&mut self, action: &FormAction) -> Transition {
        if matches!(action, FormAction::Submit) && !self.state.submit_enabled {
            debug!(
                form_build_id = %self.form_build_id,
                phase = ?self.state.phase(),
                "submit ignored, form unchanged since last validation"
            );
            return Transition::Ignored;
        }

        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);

        match action {
            FormAction::Submit => match &self.state.result {
                ValidationResult::Invalid { reason, .. } => {
                    info!(
                        form_build_id = %self.form_build_id,
                        rule = %reason,
                        "password rejected"
                    );
                }
                ValidationResult::Valid { .. } => {
                    info!(form_build_id = %self.form_build_id, "password accepted");
                }
                ValidationResult::Unvalidated => {}
            },
            FormAction::ToggleVisibility => {
                debug!(
                    form_build_id = %self.form_build_id,
                    visibility = ?self.state.visibility,
                    "visibility toggled"
                );
            }
            _ => {
                debug!(
                    form_build_id = %self.form_build_id,
                    action = action.kind(),
                    "input edited"
                );
            }
        }

        Transition::Applied
    }

    /// Snapshot of the observable state, without the raw inputs.
    pub fn view(&self) -> FormView {
        FormView {
            form_build_id: self.form_build_id.to_string(),
            phase: self.state.phase(),
            visibility: self.state.visibility,
            input_type: self.state.visibility.input_type(),
            submit_enabled: self.state.submit_enabled,
            result: self.state.result.clone(),
        }
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("form_build_id", &self.form_build_id)
            .field("state", &self.state)
            .finish()
    }
}

/// Serializable snapshot of a form for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub form_build_id: String,
    pub phase: Phase,
    pub visibility: VisibilityMode,
    pub input_type: &'static str,
    pub submit_enabled: bool,
    pub result: ValidationResult,
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::form::validate::RuleId;

    #[test]
    fn test_controller_starts_pristine() {
        let controller = FormController::new();
        assert_eq!(controller.state().phase(), Phase::Pristine);
        assert!(!controller.submit_enabled());
        assert_eq!(controller.visibility(), VisibilityMode::Masked);
    }

    #[test]
    fn test_submit_returns_result_once() {
        let mut controller = FormController::new();
        controller.on_password_edit("abc123");

        let result = controller.on_submit().cloned();
        assert_eq!(
            result.and_then(|r| r.reason()),
            Some(RuleId::HasUppercase)
        );
        assert!(controller.on_submit().is_none());
        assert_eq!(controller.result().reason(), Some(RuleId::HasUppercase));
    }

    #[test]
    fn test_pristine_submit_is_ignored() {
        let mut controller = FormController::new();
        assert_eq!(controller.dispatch(&FormAction::Submit), Transition::Ignored);
        assert_eq!(*controller.result(), ValidationResult::Unvalidated);
    }

    #[test]
    fn test_applied_submit_always_validates() {
        for password in ["", "abcABC123$%"] {
            let mut controller = FormController::new();
            controller.on_password_edit(password);
            controller.on_confirmation_edit(password);
            assert_eq!(controller.dispatch(&FormAction::Submit), Transition::Applied);
            assert!(controller.result().is_validated(), "{password:?}");
        }
        let mut controller = FormController::new();
        controller.on_password_edit("abcABC123$%");
        controller.on_confirmation_edit("abcABC123$%");
        assert!(matches!(
            controller.on_submit(),
            Some(ValidationResult::Valid { .. })
        ));
    }

    #[test]
    fn test_toggle_does_not_arm_submit() {
        let mut controller = FormController::new();
        controller.on_toggle_visibility();
        assert_eq!(controller.visibility(), VisibilityMode::Plain);
        assert!(!controller.submit_enabled());
        assert_eq!(controller.state().phase(), Phase::Pristine);
    }

    #[test]
    fn test_build_ids_are_unique() {
        assert_ne!(
            FormController::new().form_build_id(),
            FormController::new().form_build_id()
        );
    }

    #[test]
    fn test_view_serialization() {
        let mut controller = FormController::new();
        controller.on_password_edit("abcABC123$%");
        controller.on_confirmation_edit("abcABC123$%");
        controller.on_toggle_visibility();
        controller.on_submit();

        let json = serde_json::to_value(controller.view()).unwrap();
        assert_eq!(json["phase"], "submitted");
        assert_eq!(json["visibility"], "plain");
        assert_eq!(json["input_type"], "text");
        assert_eq!(json["submit_enabled"], false);
        assert_eq!(json["result"]["status"], "valid");
        assert!(!json.to_string().contains("abcABC123"));
    }
}
