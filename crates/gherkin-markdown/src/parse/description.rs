//! Descriptions as written in the source.
//!
//! The `gherkin` crate trims every description line and drops blank lines
//! between them. Its text still decides which lines belong to the
//! description; the lines themselves are read back from the source so that
//! nested indentation and paragraph breaks are kept.

/// Recover the description of the block whose keyword starts at
/// `keyword_start`, given the text the parser produced for it.
///
/// Falls back to `parsed` when its lines cannot be located after the keyword
/// line.
pub(super) fn recover_description(
    source: &str,
    keyword_start: usize,
    parsed: Option<&str>,
) -> String {
    let Some(parsed) = parsed else {
        return String::new();
    };
    verbatim_lines(source, keyword_start, parsed).unwrap_or_else(|| parsed.to_owned())
}

fn verbatim_lines(source: &str, keyword_start: usize, parsed: &str) -> Option<String> {
    let (_, body) = source.get(keyword_start..)?.split_once('\n')?;

    let mut remaining = body.lines().enumerate();
    let mut span: Option<(usize, usize)> = None;
    for wanted in parsed.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let (index, _) = remaining.find(|(_, line)| line.trim() == wanted)?;
        span = Some(span.map_or((index, index), |(first, _)| (first, index)));
    }
    let (first, last) = span?;

    let lines: Vec<&str> = body
        .lines()
        .skip(first)
        .take(last.saturating_sub(first).saturating_add(1))
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect();
    Some(lines.join("\n"))
}
