//! The password form definition, built from the current form state.

use super::state::{FormState, VisibilityMode};
use super::types::{Feedback, FeedbackStatus, Form, FormElement, VisibilityToggle};
use super::validate::{MIN_PASSWORD_LENGTH, SPECIAL_CHARACTERS, ValidationResult};

/// Form identifier.
pub const FORM_ID: &str = "password_form";

/// Element name (and HTML id) of the password input.
pub const PASSWORD_FIELD: &str = "password";

/// Element name (and HTML id) of the confirmation input.
pub const CONFIRM_FIELD: &str = "passwordConfirm";

/// Element name of the submit button.
pub const SUBMIT_FIELD: &str = "passwordSubmit";

pub const SHOW_HIDE_TEST_ID: &str = "showHideIcon";
pub const FEEDBACK_TEST_ID: &str = "passwordValidation";
pub const HELP_TEST_ID: &str = "passwordHelp";

pub const SUBMIT_LABEL: &str = "Submit Password";

/// Help text listing every requirement.
pub fn help_text() -> String {
    format!(
        "Your password must be at least {MIN_PASSWORD_LENGTH} characters long and contain at \
         least one of each of the following: uppercase letter, lowercase letter, number, and a \
         special character ({SPECIAL_CHARACTERS})"
    )
}

/// Map a validation result to inline feedback.
pub fn feedback_for(result: &ValidationResult) -> Option<Feedback> {
    let status = match result {
        ValidationResult::Unvalidated => return None,
        ValidationResult::Valid { .. } => FeedbackStatus::Valid,
        ValidationResult::Invalid { .. } => FeedbackStatus::Invalid,
    };
    let message = result.message().unwrap_or_default();
    Some(Feedback::new(status, message).test_id(FEEDBACK_TEST_ID))
}

fn visibility_toggle(mode: VisibilityMode) -> VisibilityToggle {
    let (icon, label) = match mode {
        VisibilityMode::Masked => ("eye", "Show password"),
        VisibilityMode::Plain => ("eye-slash", "Hide password"),
    };
    VisibilityToggle {
        icon: icon.to_string(),
        label: label.to_string(),
        test_id: Some(SHOW_HIDE_TEST_ID.to_string()),
    }
}

/// Build the form for the given state.
///
/// Input values are not carried into the definition; only what the state
/// machine makes observable is.
pub fn build(state: &FormState, form_build_id: &str) -> Form {
    let input_type = state.visibility.input_type();
    let feedback = feedback_for(&state.result);

    let mut password = FormElement::password(input_type)
        .title("Password")
        .description(help_text())
        .test_id(PASSWORD_FIELD)
        .class("form-control")
        .toggle(visibility_toggle(state.visibility))
        .weight(0);
    if let Some(feedback) = feedback {
        password = password.class(feedback.status.control_class()).feedback(feedback);
    }

    let confirm = FormElement::password(input_type)
        .title("Confirm Password")
        .test_id(CONFIRM_FIELD)
        .class("form-control")
        .weight(10);

    let submit = FormElement::submit(SUBMIT_LABEL)
        .test_id(SUBMIT_FIELD)
        .class("btn")
        .class("btn-primary")
        .disabled_if(!state.submit_enabled)
        .weight(100);

    Form::new(FORM_ID, form_build_id)
        .novalidate()
        .element(PASSWORD_FIELD, password)
        .element(CONFIRM_FIELD, confirm)
        .element(SUBMIT_FIELD, submit)
}
