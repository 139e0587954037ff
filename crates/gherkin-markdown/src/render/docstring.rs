//! Fenced code blocks for doc strings.

use super::Renderer;
use crate::model::DocString;

const DEFAULT_FENCE_LEN: usize = 3;

impl Renderer<'_> {
    /// Emit a fenced block long enough not to be closed by the content.
    ///
    /// Content with backticks but no run of at least three is dropped
    /// entirely; this mirrors the fencing rule of earlier releases and is
    /// kept for output compatibility.
    pub(super) fn render_doc_string(&mut self, doc: &DocString) {
        let Some(fence) = fence_for(&doc.content) else {
            return;
        };
        self.write_line(&format!("{fence}{}", doc.content_type));
        self.write_line(&doc.content);
        self.write_line(&fence);
    }
}

/// Choose the fence for `content`, or `None` when the block is dropped.
fn fence_for(content: &str) -> Option<String> {
    if !content.contains('`') {
        return Some("`".repeat(DEFAULT_FENCE_LEN));
    }
    let run = longest_backtick_run(content);
    (run >= DEFAULT_FENCE_LEN).then(|| "`".repeat(run + 1))
}

fn longest_backtick_run(content: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for ch in content.chars() {
        if ch == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
