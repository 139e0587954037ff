//! Doc strings recovered from the raw feature text.
//!
//! The `gherkin` crate returns everything between the delimiters, dedented
//! as a block: the media type written after the opening delimiter
//! (`"""json`) ends up as the first content line and the newlines next to
//! the delimiters are kept. The block is therefore read again from the
//! source that follows the step.

use crate::model::DocString;

const DELIMITERS: [&str; 2] = ["\"\"\"", "```"];

/// Read the doc string whose opening delimiter follows byte offset
/// `step_end`.
///
/// Scanning starts on the line after `step_end` and skips blank and comment
/// lines. Content lines lose as much leading whitespace as the opening
/// delimiter is indented by. `None` means no complete block was found.
pub(super) fn find_doc_string(source: &str, step_end: usize) -> Option<DocString> {
    let cursor = advance_to_next_line(source, step_end)?;
    let mut lines = source.get(cursor..)?.lines();

    let opening = lines.by_ref().find(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#')
    })?;
    let indent = leading_whitespace(opening);
    let (delimiter, content_type) = DELIMITERS.iter().find_map(|delimiter| {
        opening
            .trim_start()
            .strip_prefix(delimiter)
            .map(|rest| (*delimiter, rest.trim()))
    })?;

    let mut content = Vec::new();
    for line in lines {
        if line.trim_start().starts_with(delimiter) {
            return Some(DocString {
                content_type: content_type.to_owned(),
                content: content.join("\n"),
            });
        }
        content.push(unescape(dedent(line, indent), delimiter));
    }
    None
}

fn advance_to_next_line(source: &str, start_from: usize) -> Option<usize> {
    let tail = source.get(start_from..)?;
    // A span ending just after the newline already sits on the next line.
    if start_from > 0 && source.get(..start_from).is_some_and(|head| head.ends_with('\n')) {
        return Some(start_from);
    }
    let newline = tail.find('\n')?;
    Some(start_from.saturating_add(newline).saturating_add(1))
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|ch| ch.is_whitespace()).count()
}

/// Strip `indent` leading characters, or all leading whitespace when the
/// line is indented less than that.
fn dedent(line: &str, indent: usize) -> &str {
    if leading_whitespace(line) < indent {
        return line.trim_start();
    }
    line.char_indices()
        .nth(indent)
        .and_then(|(offset, _)| line.get(offset..))
        .unwrap_or_default()
}

fn unescape(line: &str, delimiter: &str) -> String {
    let escaped: String = delimiter.chars().flat_map(|ch| ['\\', ch]).collect();
    line.replace(&escaped, delimiter)
}
