//! Form and form element types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A complete form definition, ready for the theme engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    /// Form identifier (e.g., "password_form").
    pub form_id: String,

    /// Build ID of the form instance this definition was produced for.
    pub form_build_id: String,

    /// Form elements keyed by name.
    pub elements: BTreeMap<String, FormElement>,

    /// Skip the browser's built-in constraint validation.
    #[serde(default)]
    pub novalidate: bool,
}

impl Form {
    /// Create a new form with the given ID.
    pub fn new(form_id: impl Into<String>, form_build_id: impl Into<String>) -> Self {
        Self {
            form_id: form_id.into(),
            form_build_id: form_build_id.into(),
            elements: BTreeMap::new(),
            novalidate: false,
        }
    }

    /// Disable browser-side validation.
    pub fn novalidate(mut self) -> Self {
        self.novalidate = true;
        self
    }

    /// Add an element to the form.
    pub fn element(mut self, name: impl Into<String>, element: FormElement) -> Self {
        self.elements.insert(name.into(), element);
        self
    }

    /// Get an element by name.
    pub fn get_element(&self, name: &str) -> Option<&FormElement> {
        self.elements.get(name)
    }

    /// Get elements sorted by weight.
    pub fn sorted_elements(&self) -> Vec<(&String, &FormElement)> {
        let mut elements: Vec<_> = self.elements.iter().collect();
        elements.sort_by_key(|(_, el)| el.weight);
        elements
    }
}

/// A form element definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormElement {
    /// Element type with type-specific configuration.
    #[serde(flatten)]
    pub element_type: ElementType,

    /// Element title/label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Element description/help text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sort weight (lower = appears first).
    #[serde(default)]
    pub weight: i32,

    /// Test hook rendered as `data-testid`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,

    /// Extra CSS classes on the control itself.
    #[serde(default)]
    pub classes: Vec<String>,

    /// Whether this element is disabled.
    #[serde(default)]
    pub disabled: bool,

    /// Inline feedback shown under the control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,

    /// Show/hide icon appended to the control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<VisibilityToggle>,
}

impl FormElement {
    /// Create a password field rendered with the given input type.
    pub fn password(input_type: impl Into<String>) -> Self {
        Self::new(ElementType::Password {
            input_type: input_type.into(),
        })
    }

    /// Create a submit button.
    pub fn submit(value: impl Into<String>) -> Self {
        Self::new(ElementType::Submit {
            value: value.into(),
        })
    }

    /// Create a new element with the given type.
    fn new(element_type: ElementType) -> Self {
        Self {
            element_type,
            title: None,
            description: None,
            weight: 0,
            test_id: None,
            classes: Vec::new(),
            disabled: false,
            feedback: None,
            toggle: None,
        }
    }

    /// Set the element title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the element description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the weight.
    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the test hook.
    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Add a CSS class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Mark as disabled when `disabled` is true.
    pub fn disabled_if(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach inline feedback.
    pub fn feedback(mut self, feedback: Feedback) -> Self {
        self.feedback = Some(feedback);
        self
    }

    /// Attach a show/hide icon.
    pub fn toggle(mut self, toggle: VisibilityToggle) -> Self {
        self.toggle = Some(toggle);
        self
    }
}

/// Element type variants with type-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementType {
    /// Password input; `input_type` is `password` when masked, `text` when shown.
    Password { input_type: String },

    /// Submit button.
    Submit { value: String },
}

impl ElementType {
    /// Get the type name as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementType::Password { .. } => "password",
            ElementType::Submit { .. } => "submit",
        }
    }

    /// Template used to render this element type.
    pub fn template_name(&self) -> &'static str {
        match self {
            ElementType::Password { .. } => "form/password.html",
            ElementType::Submit { .. } => "form/submit.html",
        }
    }
}

/// Feedback status, mapped to CSS classes by the templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    Valid,
    Invalid,
}

impl FeedbackStatus {
    /// Class applied to the control (`is-valid` / `is-invalid`).
    pub fn control_class(self) -> &'static str {
        match self {
            FeedbackStatus::Valid => "is-valid",
            FeedbackStatus::Invalid => "is-invalid",
        }
    }

    /// Class applied to the feedback region.
    pub fn feedback_class(self) -> &'static str {
        match self {
            FeedbackStatus::Valid => "valid-feedback",
            FeedbackStatus::Invalid => "invalid-feedback",
        }
    }
}

/// Inline feedback attached to an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub status: FeedbackStatus,
    pub message: String,
    /// CSS class for the feedback region.
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl Feedback {
    /// Create feedback with the given status and message.
    pub fn new(status: FeedbackStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            class: status.feedback_class().to_string(),
            test_id: None,
        }
    }

    /// Set the test hook.
    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }
}

/// Show/hide icon state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityToggle {
    /// Icon name (`eye` while masked, `eye-slash` while shown).
    pub icon: String,
    /// Accessible label for the control.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}
