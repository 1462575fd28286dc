//! Action scripts: a headless stand-in for the browser.
//!
//! A script is a sequence of JSON lines, one [`FormAction`] per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! {"action":"edit_password","value":"abcABC123$%"}
//! {"action":"edit_confirmation","value":"abcABC123$%"}
//! {"action":"toggle_visibility"}
//! {"action":"submit"}
//! ```

use std::io::BufRead;

use anyhow::Context;
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::{AppError, AppResult};
use crate::form::{FormAction, FormController, password_form};
use crate::theme::ThemeEngine;

/// Parse a script held in memory.
pub fn parse_script(input: &str) -> AppResult<Vec<FormAction>> {
    read_script(input.as_bytes())
}

/// Parse a script from a reader, line by line.
pub fn read_script(reader: impl BufRead) -> AppResult<Vec<FormAction>> {
    let mut actions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| AppError::ScriptRead {
            line: index + 1,
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let action: FormAction =
            serde_json::from_str(trimmed).map_err(|source| AppError::Script {
                line: index + 1,
                source,
            })?;
        actions.push(action);
    }

    debug!(count = actions.len(), "parsed action script");
    Ok(actions)
}

/// Renders a controller's form in the configured format.
#[derive(Debug)]
pub struct Renderer {
    theme: ThemeEngine,
    format: OutputFormat,
}

impl Renderer {
    pub fn new(theme: ThemeEngine, format: OutputFormat) -> Self {
        Self { theme, format }
    }

    /// Render the current form.
    pub fn render(&self, controller: &FormController) -> AppResult<String> {
        match self.format {
            OutputFormat::Html => {
                let form = password_form::build(
                    controller.state(),
                    &controller.form_build_id().to_string(),
                );
                Ok(self.theme.render_form(&form)?)
            }
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&controller.view())
                .context("failed to serialize form view")?),
        }
    }
}

/// Play a script against a fresh form.
///
/// Returns one rendering per action when `each` is set, otherwise a single
/// rendering of the final form.
pub fn run_script(
    actions: &[FormAction],
    renderer: &Renderer,
    each: bool,
) -> AppResult<(FormController, Vec<String>)> {
    let mut controller = FormController::new();
    let mut outputs = Vec::new();

    for action in actions {
        controller.dispatch(action);
        if each {
            outputs.push(renderer.render(&controller)?);
        }
    }

    if !each || actions.is_empty() {
        outputs.push(renderer.render(&controller)?);
    }

    Ok((controller, outputs))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::form::{Phase, RuleId};

    fn json_renderer() -> Renderer {
        Renderer::new(ThemeEngine::new().unwrap(), OutputFormat::Json)
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let actions = parse_script(
            "# start\n\n{\"action\":\"edit_password\",\"value\":\"abc\"}\n  \n{\"action\":\"submit\"}\n",
        )
        .unwrap();
        assert_eq!(
            actions,
            vec![FormAction::edit_password("abc"), FormAction::Submit]
        );
    }

    #[test]
    fn test_parse_error_names_line() {
        let err = parse_script("{\"action\":\"submit\"}\n# note\n{\"action\":\"explode\"}\n")
            .unwrap_err();
        match err {
            AppError::Script { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_error_names_line() {
        let input: &[u8] = b"{\"action\":\"submit\"}\n\xff\xfe\n";
        let err = read_script(input).unwrap_err();
        assert!(matches!(err, AppError::ScriptRead { line: 2, .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_run_script_final_only() {
        let actions = parse_script(
            "{\"action\":\"edit_password\",\"value\":\"ABC123\"}\n{\"action\":\"submit\"}\n",
        )
        .unwrap();
        let (controller, outputs) = run_script(&actions, &json_renderer(), false).unwrap();

        assert_eq!(outputs.len(), 1);
        assert_eq!(controller.state().phase(), Phase::Submitted);
        assert_eq!(controller.result().reason(), Some(RuleId::HasLowercase));
        assert!(outputs[0].contains("has_lowercase"));
    }

    #[test]
    fn test_run_script_each() {
        let actions = vec![
            FormAction::ToggleVisibility,
            FormAction::edit_password("abc"),
            FormAction::Submit,
        ];
        let (_, outputs) = run_script(&actions, &json_renderer(), true).unwrap();
        assert_eq!(outputs.len(), 3);
        assert!(outputs[0].contains("\"pristine\""));
        assert!(outputs[1].contains("\"edited\""));
        assert!(outputs[2].contains("\"submitted\""));
    }

    #[test]
    fn test_run_empty_script_renders_pristine() {
        let (_, outputs) = run_script(&[], &json_renderer(), true).unwrap();
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0].contains("\"pristine\""));
    }
}
