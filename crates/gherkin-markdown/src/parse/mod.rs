//! Parsing Gherkin source text into the rendering model.
//!
//! The `gherkin` crate does the syntactic work. This module normalises its
//! output into [`crate::model`]: tags become `@`-prefixed labels, optional
//! names become (possibly empty) strings and the background is placed before
//! the scenarios as it is in the source. Doc strings, descriptions and
//! escaped table cells are read back from the raw text where the crate's
//! rendition of them loses information.

use gherkin::GherkinEnv;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{
    Background, DocString, Document, Examples, Feature, FeatureChild, Scenario, Step,
    StepArgument, Table,
};

mod cells;
mod description;
mod docstring;

/// Parse Gherkin `source` into a [`Document`].
///
/// A source made only of blank lines and comments yields a document without
/// a feature.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the text is not valid Gherkin and
/// [`Error::UnsupportedRule`] when the feature contains `Rule:` blocks.
pub fn parse_document(source: &str) -> Result<Document> {
    if !declares_anything(source) {
        return Ok(Document::default());
    }

    let mut text = cells::mask_escapes(source);
    normalise_trailing_newline(&mut text);

    let feature = gherkin::Feature::parse(&text, GherkinEnv::default())?;
    if let Some(rule) = feature.rules.first() {
        return Err(Error::UnsupportedRule {
            name: rule.name.clone(),
        });
    }

    // Spans index `text`; masking keeps byte widths, so they index `source` too.
    Ok(Document::new(convert_feature(source, &feature)))
}

fn declares_anything(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .any(|line| !line.is_empty() && !line.starts_with('#'))
}

fn normalise_trailing_newline(text: &mut String) {
    if !text.ends_with('\n') {
        text.push('\n');
    }
}

fn convert_feature(source: &str, feature: &gherkin::Feature) -> Feature {
    let mut children = Vec::with_capacity(feature.scenarios.len().saturating_add(1));
    if let Some(background) = feature.background.as_ref() {
        children.push(FeatureChild::Background(Background {
            name: background.name.clone(),
            description: description::recover_description(
                source,
                background.span.start,
                background.description.as_deref(),
            ),
            steps: convert_steps(source, &background.steps),
        }));
    }
    children.extend(
        feature
            .scenarios
            .iter()
            .map(|scenario| FeatureChild::Scenario(convert_scenario(source, scenario))),
    );

    debug!(
        feature = %feature.name,
        children = children.len(),
        "parsed feature"
    );

    Feature {
        name: feature.name.clone(),
        description: description::recover_description(
            source,
            feature.span.start,
            feature.description.as_deref(),
        ),
        labels: labels(&feature.tags),
        children,
    }
}

fn convert_scenario(source: &str, scenario: &gherkin::Scenario) -> Scenario {
    Scenario {
        name: scenario.name.clone(),
        description: description::recover_description(
            source,
            scenario.span.start,
            scenario.description.as_deref(),
        ),
        labels: labels(&scenario.tags),
        steps: convert_steps(source, &scenario.steps),
        examples: scenario
            .examples
            .iter()
            .map(|examples| convert_examples(source, examples))
            .collect(),
    }
}

fn convert_examples(source: &str, examples: &gherkin::Examples) -> Examples {
    Examples {
        name: examples.name.clone().unwrap_or_default(),
        description: description::recover_description(
            source,
            examples.span.start,
            examples.description.as_deref(),
        ),
        table: examples.table.as_ref().map(convert_table),
    }
}

fn convert_steps(source: &str, steps: &[gherkin::Step]) -> Vec<Step> {
    steps.iter().map(|step| convert_step(source, step)).collect()
}

fn convert_step(source: &str, step: &gherkin::Step) -> Step {
    let argument = step.table.as_ref().map_or_else(
        || {
            step.docstring
                .as_ref()
                .map(|content| StepArgument::DocString(convert_docstring(source, step, content)))
        },
        |table| Some(StepArgument::DataTable(convert_table(table))),
    );

    Step {
        keyword: step.keyword.clone(),
        text: step.value.clone(),
        argument,
    }
}

fn convert_docstring(source: &str, step: &gherkin::Step, parsed: &str) -> DocString {
    docstring::find_doc_string(source, step.span.end).unwrap_or_else(|| {
        debug!(step = %step.value, "doc string delimiter not found in source");
        DocString {
            content_type: String::new(),
            content: parsed.trim_matches('\n').to_owned(),
        }
    })
}

fn convert_table(table: &gherkin::Table) -> Table {
    Table::from_rows(
        table
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cells::unmask_cell(cell))),
    )
}

fn labels(tags: &[String]) -> Vec<String> {
    tags.iter()
        .map(|tag| format!("@{}", tag.trim_start_matches('@')))
        .collect()
}
