//! Password form: rule validation, state machine, and declarative definition.
//!
//! The form system is split into:
//! - `validate`: pure classification of a password/confirmation pair
//! - `state`: the form state and a reducer over user actions
//! - `controller`: owns one form instance and logs each transition
//! - `password_form`: turns the current state into a renderable [`Form`]

mod controller;
pub mod password_form;
mod state;
mod types;
pub mod validate;

pub use controller::{FormController, FormView, Transition};
pub use state::{FormAction, FormState, Phase, VisibilityMode};
pub use types::{ElementType, Feedback, FeedbackStatus, Form, FormElement, VisibilityToggle};
pub use validate::{RuleId, ValidationResult, validate};
