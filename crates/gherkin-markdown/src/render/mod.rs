//! Markdown rendering of a parsed document tree.
//!
//! A [`Renderer`] owns the output buffer and the active [`LabelFilter`] for a
//! single call and is consumed by [`Renderer::render`]. Rendering performs no
//! I/O, so the same document always produces the same text and independent
//! renders may run on any number of threads.
//!
//! The output layout is:
//!
//! - `# <feature>` followed by the trimmed feature description,
//! - one `##` section per background or scenario, separated by blank lines,
//! - `_<keyword>_ <text>` per step, with placeholders wrapped in backticks,
//! - pipe tables for data tables and examples, fenced blocks for doc strings.

use crate::filter::LabelFilter;
use crate::model::{Background, Document, Examples, Feature, FeatureChild, Scenario};

mod docstring;
mod step;
mod table;

pub use step::highlight_placeholders;

/// Render `document` to Markdown, omitting anything labelled by `filter`.
///
/// # Examples
///
/// ```
/// use gherkin_markdown::model::{Document, Feature, FeatureChild, Scenario, Step};
/// use gherkin_markdown::{LabelFilter, render};
///
/// let document = Document::new(Feature {
///     name: "Foo".into(),
///     children: vec![FeatureChild::Scenario(Scenario {
///         name: "Bar".into(),
///         steps: vec![Step::new("Given ", "something")],
///         ..Scenario::default()
///     })],
///     ..Feature::default()
/// });
///
/// let markdown = render(&document, &LabelFilter::none());
/// assert_eq!(markdown, "# Foo\n\n## Bar\n\n_Given_ something.\n");
/// ```
#[must_use]
pub fn render(document: &Document, filter: &LabelFilter) -> String {
    Renderer::new(filter).render(document)
}

/// Accumulates Markdown for one document.
#[derive(Debug)]
pub struct Renderer<'a> {
    out: String,
    filter: &'a LabelFilter,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with an empty buffer.
    #[must_use]
    pub fn new(filter: &'a LabelFilter) -> Self {
        Self {
            out: String::new(),
            filter,
        }
    }

    /// Render the document and return the accumulated text.
    #[must_use]
    pub fn render(mut self, document: &Document) -> String {
        if let Some(feature) = document.feature.as_ref() {
            self.render_feature(feature);
        }
        self.out
    }

    fn render_feature(&mut self, feature: &Feature) {
        if self.filter.excludes(feature.labels.as_slice()) {
            return;
        }

        self.write_line(&format!("# {}", feature.name));
        self.write_description(&feature.description);

        for child in &feature.children {
            match child {
                FeatureChild::Background(background) => {
                    self.write_blank_line();
                    self.render_background(background);
                }
                FeatureChild::Scenario(scenario) => {
                    if !self.filter.excludes(scenario.labels.as_slice()) {
                        self.write_blank_line();
                        self.render_scenario(scenario);
                    }
                }
            }
        }
    }

    fn render_background(&mut self, background: &Background) {
        if background.name.trim().is_empty() {
            self.write_line("## Background");
        } else {
            self.write_line(&format!("## Background ({})", background.name));
        }
        self.write_description(&background.description);
        self.render_steps(&background.steps);
    }

    fn render_scenario(&mut self, scenario: &Scenario) {
        self.write_line(&format!("## {}", scenario.name));
        self.write_description(&scenario.description);
        self.render_steps(&scenario.steps);

        if !scenario.examples.is_empty() {
            self.write_blank_line();
            self.render_examples(&scenario.examples);
        }
    }

    fn render_examples(&mut self, examples: &[Examples]) {
        self.write_line("### Examples");

        for block in examples {
            if !block.name.is_empty() {
                self.write_blank_line();
                self.write_line(&format!("#### {}", block.name));
            }
            self.write_description(&block.description);

            // An Examples keyword without a table has nothing to tabulate.
            if let Some(table) = block.table.as_ref() {
                self.write_blank_line();
                self.render_table(table);
            }
        }
    }

    fn write_description(&mut self, description: &str) {
        if !description.is_empty() {
            self.write_blank_line();
            self.write_line(description.trim());
        }
    }

    fn write_line(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn write_blank_line(&mut self) {
        self.out.push('\n');
    }
}

#[cfg(test)]
mod tests;
