//! Escape sequences inside table cells.
//!
//! Gherkin allows `\|`, `\\` and `\n` inside a cell, but the `gherkin` crate
//! splits rows on every pipe. Before parsing, those escapes are replaced on
//! table lines by stand-in characters that are two bytes wide in UTF-8, as
//! wide as the escapes themselves, so spans reported for the masked text
//! index the original source unchanged. Each parsed cell is then unmasked.

const PIPE: char = '\u{91}';
const BACKSLASH: char = '\u{92}';
const NEWLINE: char = '\u{93}';

/// Replace cell escapes on every table line of `source`.
pub(super) fn mask_escapes(source: &str) -> String {
    let mut masked = String::with_capacity(source.len());
    for line in source.split_inclusive('\n') {
        if line.trim_start().starts_with('|') {
            mask_line(line, &mut masked);
        } else {
            masked.push_str(line);
        }
    }
    masked
}

fn mask_line(line: &str, out: &mut String) {
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let stand_in = match chars.peek() {
            Some('|') => PIPE,
            Some('\\') => BACKSLASH,
            Some('n') => NEWLINE,
            _ => {
                out.push(ch);
                continue;
            }
        };
        chars.next();
        out.push(stand_in);
    }
}

/// Turn the stand-ins in a parsed cell back into the characters they escape.
pub(super) fn unmask_cell(cell: &str) -> String {
    cell.chars()
        .map(|ch| match ch {
            PIPE => '|',
            BACKSLASH => '\\',
            NEWLINE => '\n',
            other => other,
        })
        .collect()
}
