//! Read-only document tree consumed by the renderer.
//!
//! The tree is produced once per input by [`crate::parse`] (or built by hand
//! in tests) and is never mutated by rendering. Optional names and
//! descriptions are stored as empty strings rather than `Option`s, because the
//! renderer only ever distinguishes "empty" from "present".

/// A parsed Gherkin document holding zero or one feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The feature declared by the document, if any.
    pub feature: Option<Feature>,
}

impl Document {
    /// Wrap a feature in a document.
    #[must_use]
    pub fn new(feature: Feature) -> Self {
        Self {
            feature: Some(feature),
        }
    }
}

/// Top-level named unit of behaviour.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    /// Feature title.
    pub name: String,
    /// Free text following the title.
    pub description: String,
    /// Tags attached to the feature, including their `@` prefix.
    pub labels: Vec<String>,
    /// Background and scenarios in document order.
    pub children: Vec<FeatureChild>,
}

/// A direct child of a [`Feature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureChild {
    /// Steps shared by every scenario.
    Background(Background),
    /// A scenario or scenario outline.
    Scenario(Scenario),
}

/// Steps implicitly shared by all scenarios in a feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Background {
    /// Optional background name; empty when absent.
    pub name: String,
    /// Free text following the keyword line.
    pub description: String,
    /// Ordered steps.
    pub steps: Vec<Step>,
}

/// A scenario, or a scenario outline when `examples` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scenario {
    /// Scenario title.
    pub name: String,
    /// Free text following the title.
    pub description: String,
    /// Tags attached to the scenario, including their `@` prefix.
    pub labels: Vec<String>,
    /// Ordered steps.
    pub steps: Vec<Step>,
    /// Examples blocks of an outline, in document order.
    pub examples: Vec<Examples>,
}

/// One line of behaviour with an optional attached argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Leading keyword as written in the source (`Given `, `And `, ...).
    pub keyword: String,
    /// Step text following the keyword.
    pub text: String,
    /// Doc string or data table attached to the step.
    pub argument: Option<StepArgument>,
}

impl Step {
    /// Build a step without an argument.
    #[must_use]
    pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            text: text.into(),
            argument: None,
        }
    }

    /// Attach an argument to the step.
    #[must_use]
    pub fn with_argument(mut self, argument: StepArgument) -> Self {
        self.argument = Some(argument);
        self
    }
}

/// Payload attached to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepArgument {
    /// A block of literal text.
    DocString(DocString),
    /// A table whose first row is the header.
    DataTable(Table),
}

/// A block of literal text attached to a step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocString {
    /// Media type written after the opening delimiter; may be empty.
    pub content_type: String,
    /// Literal content, which may itself contain backtick runs.
    pub content: String,
}

/// Rows of cells; the first row is the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// All rows, header first.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from rows of anything string-like.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// The header row, if the table has any rows.
    #[must_use]
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// All rows after the header.
    #[must_use]
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or_default()
    }
}

/// Substitution values for a scenario outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Examples {
    /// Optional name; empty when absent.
    pub name: String,
    /// Free text following the keyword line.
    pub description: String,
    /// Header and body rows. `None` when the block declares no table.
    pub table: Option<Table>,
}
