//! Step lines and their attached arguments.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use super::Renderer;
use crate::model::{Step, StepArgument};

// The trailing lazy group is part of the historical pattern and matches the
// empty string, so each match ends at the closing `>`.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(<\s*[^>]*>(.*?))").unwrap_or_else(|_| unreachable!()));

/// Wrap every `<placeholder>` in `text` in backticks.
///
/// ```
/// use gherkin_markdown::render::highlight_placeholders;
///
/// assert_eq!(
///     highlight_placeholders("I pay <amount> to <payee>"),
///     "I pay `<amount>` to `<payee>`",
/// );
/// ```
#[must_use]
pub fn highlight_placeholders(text: &str) -> Cow<'_, str> {
    PLACEHOLDER_RE.replace_all(text, "`${1}`")
}

impl Renderer<'_> {
    pub(super) fn render_steps(&mut self, steps: &[Step]) {
        let last = steps.len().saturating_sub(1);
        for (index, step) in steps.iter().enumerate() {
            self.write_blank_line();
            self.render_step(step, index == last);
        }
    }

    fn render_step(&mut self, step: &Step, last: bool) {
        let text = terminated_text(step, last);
        self.write_line(&format!(
            "_{}_ {}",
            step.keyword.trim(),
            highlight_placeholders(&text)
        ));

        if let Some(argument) = step.argument.as_ref() {
            self.write_blank_line();
            match argument {
                StepArgument::DocString(doc) => self.render_doc_string(doc),
                StepArgument::DataTable(table) => self.render_table(table),
            }
        }
    }
}

/// The step text, with a full stop appended when it closes its sequence.
fn terminated_text(step: &Step, last: bool) -> Cow<'_, str> {
    if last && step.argument.is_none() && !step.text.ends_with('.') {
        Cow::Owned(format!("{}.", step.text))
    } else {
        Cow::Borrowed(step.text.as_str())
    }
}
