//! Tests for the document walker.

use super::*;
use crate::model::{DocString, Step, StepArgument, Table};

fn scenario(name: &str, labels: &[&str], steps: Vec<Step>) -> FeatureChild {
    FeatureChild::Scenario(Scenario {
        name: name.into(),
        labels: labels.iter().map(|l| (*l).to_owned()).collect(),
        steps,
        ..Scenario::default()
    })
}

fn feature(labels: &[&str], children: Vec<FeatureChild>) -> Document {
    Document::new(Feature {
        name: "Foo".into(),
        description: String::new(),
        labels: labels.iter().map(|l| (*l).to_owned()).collect(),
        children,
    })
}

fn sample() -> Document {
    let mut document = feature(
        &["@feature"],
        vec![
            FeatureChild::Background(Background {
                name: String::new(),
                description: String::new(),
                steps: vec![Step::new("Given ", "a clean database")],
            }),
            scenario("First", &["@keep"], vec![Step::new("When ", "I act")]),
            scenario("Second", &["@drop"], vec![Step::new("Then ", "it fails")]),
            scenario("Third", &[], vec![Step::new("Then ", "it works.")]),
        ],
    );
    if let Some(feature) = document.feature.as_mut() {
        feature.description = "  Some words.  \n".into();
    }
    document
}

#[test]
fn document_without_feature_renders_nothing() {
    assert_eq!(render(&Document::default(), &LabelFilter::none()), "");
}

#[test]
fn minimal_feature() {
    let document = feature(&[], vec![scenario("Bar", &[], vec![Step::new("Given ", "something")])]);
    assert_eq!(
        render(&document, &LabelFilter::none()),
        "# Foo\n\n## Bar\n\n_Given_ something.\n"
    );
}

#[test]
fn feature_without_children_is_just_a_heading() {
    assert_eq!(render(&feature(&[], Vec::new()), &LabelFilter::none()), "# Foo\n");
}

#[test]
fn full_sample_layout() {
    assert_eq!(
        render(&sample(), &LabelFilter::none()),
        concat!(
            "# Foo\n",
            "\n",
            "Some words.\n",
            "\n",
            "## Background\n",
            "\n",
            "_Given_ a clean database.\n",
            "\n",
            "## First\n",
            "\n",
            "_When_ I act.\n",
            "\n",
            "## Second\n",
            "\n",
            "_Then_ it fails.\n",
            "\n",
            "## Third\n",
            "\n",
            "_Then_ it works.\n",
        )
    );
}

#[test]
fn excluded_feature_renders_nothing() {
    let filter = LabelFilter::new(["@feature"]);
    assert_eq!(render(&sample(), &filter), "");
}

#[test]
fn excluded_scenario_is_removed_without_disturbing_siblings() {
    let full = render(&sample(), &LabelFilter::none());
    let filtered = render(&sample(), &LabelFilter::new(["@drop"]));

    assert!(!filtered.contains("## Second"));
    assert!(!filtered.contains("it fails"));
    assert_eq!(
        filtered,
        full.replace("\n## Second\n\n_Then_ it fails.\n", "")
    );
    assert!(!filtered.contains("\n\n\n"));
}

#[test]
fn background_ignores_the_filter() {
    let document = feature(
        &[],
        vec![FeatureChild::Background(Background {
            name: "setup".into(),
            description: String::new(),
            steps: vec![Step::new("Given ", "x")],
        })],
    );
    let output = render(&document, &LabelFilter::new(["@anything"]));
    assert!(output.contains("## Background (setup)\n"));
}

#[test]
fn whitespace_background_name_is_treated_as_absent() {
    let document = feature(
        &[],
        vec![FeatureChild::Background(Background {
            name: "   ".into(),
            ..Background::default()
        })],
    );
    assert_eq!(
        render(&document, &LabelFilter::none()),
        "# Foo\n\n## Background\n"
    );
}

#[test]
fn rendering_is_deterministic() {
    let filter = LabelFilter::new(["@drop"]);
    assert_eq!(render(&sample(), &filter), render(&sample(), &filter));
}

#[test]
fn only_the_last_step_is_punctuated() {
    let document = feature(
        &[],
        vec![scenario(
            "Steps",
            &[],
            vec![
                Step::new("Given ", "one"),
                Step::new("And ", "two"),
                Step::new("Then ", "three"),
            ],
        )],
    );
    let output = render(&document, &LabelFilter::none());
    assert!(output.contains("_Given_ one\n"));
    assert!(output.contains("_And_ two\n"));
    assert!(output.contains("_Then_ three.\n"));
}

#[test]
fn step_arguments_follow_a_blank_line() {
    let document = feature(
        &[],
        vec![scenario(
            "Args",
            &[],
            vec![
                Step::new("Given ", "a doc").with_argument(StepArgument::DocString(DocString {
                    content_type: "text".into(),
                    content: "hello".into(),
                })),
                Step::new("Then ", "a table").with_argument(StepArgument::DataTable(
                    Table::from_rows([["a", "bb"], ["x", "y"]]),
                )),
            ],
        )],
    );
    assert_eq!(
        render(&document, &LabelFilter::none()),
        concat!(
            "# Foo\n",
            "\n",
            "## Args\n",
            "\n",
            "_Given_ a doc\n",
            "\n",
            "```text\n",
            "hello\n",
            "```\n",
            "\n",
            "_Then_ a table\n",
            "\n",
            "| a | bb |\n",
            "|---|----|\n",
            "| x | y  |\n",
        )
    );
}

#[test]
fn outline_renders_examples_blocks() {
    let document = Document::new(Feature {
        name: "Outlines".into(),
        children: vec![FeatureChild::Scenario(Scenario {
            name: "Paying".into(),
            description: "Pays people.".into(),
            steps: vec![Step::new("When ", "I pay <amount>")],
            examples: vec![
                Examples {
                    name: String::new(),
                    description: String::new(),
                    table: Some(Table::from_rows([["amount"], ["10"]])),
                },
                Examples {
                    name: "Large".into(),
                    description: "Big numbers.".into(),
                    table: Some(Table::from_rows([["amount"], ["1000000"]])),
                },
            ],
            ..Scenario::default()
        })],
        ..Feature::default()
    });
    assert_eq!(
        render(&document, &LabelFilter::none()),
        concat!(
            "# Outlines\n",
            "\n",
            "## Paying\n",
            "\n",
            "Pays people.\n",
            "\n",
            "_When_ I pay `<amount>`.\n",
            "\n",
            "### Examples\n",
            "\n",
            "| amount |\n",
            "|--------|\n",
            "| 10     |\n",
            "\n",
            "#### Large\n",
            "\n",
            "Big numbers.\n",
            "\n",
            "| amount  |\n",
            "|---------|\n",
            "| 1000000 |\n",
        )
    );
}

#[test]
fn examples_without_table_emit_only_headings() {
    let document = Document::new(Feature {
        name: "F".into(),
        children: vec![FeatureChild::Scenario(Scenario {
            name: "S".into(),
            examples: vec![Examples {
                name: "Empty".into(),
                ..Examples::default()
            }],
            ..Scenario::default()
        })],
        ..Feature::default()
    });
    assert_eq!(
        render(&document, &LabelFilter::none()),
        "# F\n\n## S\n\n### Examples\n\n#### Empty\n"
    );
}
