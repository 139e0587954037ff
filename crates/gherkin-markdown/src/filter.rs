//! Label-based exclusion of features and scenarios.

use std::collections::HashSet;

/// Set of labels whose presence removes a feature or scenario from the output.
///
/// Entries are trimmed and compared exactly with labels, which keep their
/// `@`: the entry `@wip` excludes `@wip`, the entry `wip` excludes nothing.
/// Empty entries are kept as given; labels parsed from a document are never
/// empty, so they never match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    excluded: HashSet<String>,
}

impl LabelFilter {
    /// Build a filter from individual labels.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: labels
                .into_iter()
                .map(|label| label.as_ref().trim().to_owned())
                .collect(),
        }
    }

    /// Build a filter from a comma-separated list such as `@slow, @wip`.
    ///
    /// Each entry is trimmed. Splitting an empty string yields a single empty
    /// entry, which is harmless.
    #[must_use]
    pub fn from_csv(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// A filter that excludes nothing.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Return `true` when any of `labels` is in the exclusion set.
    #[must_use]
    pub fn excludes<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        labels
            .iter()
            .any(|label| self.excluded.contains(label.as_ref()))
    }

    /// Number of entries in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    /// Return `true` when the set holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }
}
