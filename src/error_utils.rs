//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Create a NamedSource labelled with the document's path
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}

/// Convert a 1-based line/column pair (as reported by serde_json) into a
/// one-character span, clamped to the end of `content`.
pub fn span_at_line_column(content: &str, line: usize, column: usize) -> SourceSpan {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();

    let offset = (line_start + column.saturating_sub(1)).min(content.len());
    let length = if offset < content.len() { 1 } else { 0 };

    SourceSpan::new(offset.into(), length)
}
