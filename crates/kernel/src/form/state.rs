//! Password form state and the actions that change it.

use serde::{Deserialize, Serialize};

use super::validate::{ValidationResult, validate};

/// How the two password inputs are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityMode {
    /// Characters are obscured.
    #[default]
    Masked,
    /// Characters are shown as typed.
    Plain,
}

impl VisibilityMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            VisibilityMode::Masked => VisibilityMode::Plain,
            VisibilityMode::Plain => VisibilityMode::Masked,
        }
    }

    /// HTML `type` attribute for inputs in this mode.
    pub fn input_type(self) -> &'static str {
        match self {
            VisibilityMode::Masked => "password",
            VisibilityMode::Plain => "text",
        }
    }
}

/// Where the form is in its edit/submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Freshly displayed, nothing edited yet.
    Pristine,
    /// Edited since the last submission; submit is armed.
    Edited,
    /// Submitted; holds a result until the next edit.
    Submitted,
}

/// A user action on the password form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FormAction {
    /// The password input changed.
    EditPassword { value: String },

    /// The confirmation input changed.
    EditConfirmation { value: String },

    /// The show/hide icon was clicked.
    ToggleVisibility,

    /// The submit button was pressed.
    Submit,
}

impl FormAction {
    /// Create a password edit.
    pub fn edit_password(value: impl Into<String>) -> Self {
        Self::EditPassword {
            value: value.into(),
        }
    }

    /// Create a confirmation edit.
    pub fn edit_confirmation(value: impl Into<String>) -> Self {
        Self::EditConfirmation {
            value: value.into(),
        }
    }

    /// Short name for logging. Never includes input values.
    pub fn kind(&self) -> &'static str {
        match self {
            FormAction::EditPassword { .. } => "edit_password",
            FormAction::EditConfirmation { .. } => "edit_confirmation",
            FormAction::ToggleVisibility => "toggle_visibility",
            FormAction::Submit => "submit",
        }
    }
}

/// Everything the password form knows.
///
/// Visibility and the validation result are separate fields: toggling never
/// touches the result, and edits or submissions never touch visibility.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Raw password input, no normalization.
    pub password: String,

    /// Raw confirmation input.
    pub confirmation: String,

    pub visibility: VisibilityMode,

    /// Armed by any edit, cleared by a submission.
    pub submit_enabled: bool,

    /// Last classification, or `Unvalidated` after an edit.
    pub result: ValidationResult,
}

impl FormState {
    /// A freshly displayed form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the current phase.
    pub fn phase(&self) -> Phase {
        if self.result.is_validated() {
            Phase::Submitted
        } else if self.submit_enabled {
            Phase::Edited
        } else {
            Phase::Pristine
        }
    }

    /// Apply an action and return the next state.
    ///
    /// A submit while the form is not armed returns the state unchanged.
    pub fn reduce(mut self, action: &FormAction) -> Self {
        match action {
            FormAction::EditPassword { value } => {
                self.password.clone_from(value);
                self.mark_edited();
            }
            FormAction::EditConfirmation { value } => {
                self.confirmation.clone_from(value);
                self.mark_edited();
            }
            FormAction::ToggleVisibility => {
                self.visibility = self.visibility.toggled();
            }
            FormAction::Submit => {
                if self.submit_enabled {
                    self.result = validate(&self.password, &self.confirmation);
                    self.submit_enabled = false;
                }
            }
        }
        self
    }

    fn mark_edited(&mut self) {
        self.result = ValidationResult::Unvalidated;
        self.submit_enabled = true;
    }
}

// Inputs are redacted so states can be logged and asserted on safely.
impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("password_len", &self.password.chars().count())
            .field("confirmation_len", &self.confirmation.chars().count())
            .field("visibility", &self.visibility)
            .field("submit_enabled", &self.submit_enabled)
            .field("result", &self.result)
            .finish()
    }
}
