//! Theme engine with Tera templates.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tera::Tera;
use tracing::debug;

use crate::form::{Form, FormElement};

/// Templates compiled into the binary.
const DEFAULT_TEMPLATES: [(&str, &str); 3] = [
    ("form/form.html", include_str!("../../templates/form/form.html")),
    (
        "form/password.html",
        include_str!("../../templates/form/password.html"),
    ),
    (
        "form/submit.html",
        include_str!("../../templates/form/submit.html"),
    ),
];

/// Theme engine for rendering forms.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine using only the built-in templates.
    pub fn new() -> Result<Self> {
        Ok(Self {
            tera: Self::defaults()?,
        })
    }

    /// Create a theme engine loading templates from the given directory.
    ///
    /// Templates found there replace the built-in ones of the same name;
    /// anything missing falls back to the defaults.
    pub fn with_template_dir(template_dir: &Path) -> Result<Self> {
        if !template_dir.is_dir() {
            bail!(
                "template directory does not exist: {}",
                template_dir.display()
            );
        }

        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern
            .to_str()
            .context("invalid template directory path")?;

        let mut tera = Tera::new(pattern_str).context("failed to initialize Tera templates")?;
        let overrides = tera.get_template_names().count();
        tera.extend(&Self::defaults()?)
            .context("failed to merge default templates")?;

        debug!(
            dir = %template_dir.display(),
            overrides,
            "loaded theme templates"
        );

        Ok(Self { tera })
    }

    fn defaults() -> Result<Tera> {
        let mut tera = Tera::default();
        tera.add_raw_templates(DEFAULT_TEMPLATES)
            .context("failed to compile built-in templates")?;
        Ok(tera)
    }

    /// Render a form to HTML.
    pub fn render_form(&self, form: &Form) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("form", form);

        let elements_html = self.render_form_elements(form, &context)?;
        context.insert("elements", &elements_html);

        self.tera
            .render("form/form.html", &context)
            .context("failed to render form template")
    }

    /// Render form elements to HTML, ordered by weight.
    fn render_form_elements(&self, form: &Form, context: &tera::Context) -> Result<String> {
        let mut html = String::new();

        for (name, element) in form.sorted_elements() {
            let element_html = self.render_form_element(name, element, context)?;
            html.push_str(&element_html);
        }

        Ok(html)
    }

    /// Render a single form element to HTML.
    fn render_form_element(
        &self,
        name: &str,
        element: &FormElement,
        context: &tera::Context,
    ) -> Result<String> {
        let mut el_context = context.clone();
        el_context.insert("name", name);
        el_context.insert("element", element);

        self.tera
            .render(element.element_type.template_name(), &el_context)
            .with_context(|| format!("failed to render form element: {name}"))
    }
}

impl std::fmt::Debug for ThemeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEngine")
            .field("template_count", &self.tera.get_template_names().count())
            .finish()
    }
}
