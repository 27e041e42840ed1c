//! Splicing an accepted completion into the buffer line.
//!
//! Columns are char indices and are clamped to the line.

use crate::kernel::services::ports::{CompletionItem, SnippetService, TextBuffer};

pub fn insert_text(item: &CompletionItem) -> &str {
    item.insert_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .unwrap_or(item.label.as_str())
}

/// Replaces `[base_position, cursor_col)` of `line` with `completion`.
pub fn replace_prefix_with_completion(
    line: &str,
    base_position: usize,
    cursor_col: usize,
    completion: &str,
) -> String {
    let len = line.chars().count();
    let cursor_col = cursor_col.min(len);
    let base_position = base_position.min(cursor_col);

    let mut out = String::with_capacity(line.len() + completion.len());
    out.extend(line.chars().take(base_position));
    out.push_str(completion);
    out.extend(line.chars().skip(cursor_col));
    out
}

/// Start column of the longest run ending at the cursor that also appears
/// in `completion`.
pub fn completion_start(line: &str, cursor_col: usize, completion: &str) -> usize {
    let chars: Vec<char> = line.chars().collect();
    let cursor_col = cursor_col.min(chars.len());

    let mut start = cursor_col;
    let mut typed = String::new();
    while start > 0 {
        typed.insert(0, chars[start - 1]);
        if !completion.contains(typed.as_str()) {
            break;
        }
        start -= 1;
    }
    start
}

/// Applies `item` on `row`, replacing the text typed since `base_position`.
///
/// Snippets are handed to `snippets` instead of being spliced when a snippet
/// service is available; the typed prefix is removed either way. The cursor
/// moves by the change in line length.
pub fn commit_completion<B: TextBuffer + ?Sized>(
    buffer: &mut B,
    snippets: Option<&mut dyn SnippetService>,
    row: usize,
    base_position: usize,
    item: &CompletionItem,
) {
    let Some(original) = buffer.lines(row, row + 1).into_iter().next() else {
        tracing::debug!(row, "commit completion on missing line");
        return;
    };

    let (_, column) = buffer.cursor();
    let snippets = snippets.filter(|_| item.is_snippet());
    let text = if snippets.is_some() {
        ""
    } else {
        insert_text(item)
    };

    let new_line = replace_prefix_with_completion(&original, base_position, column, text);
    let old_len = original.chars().count();
    let new_len = new_line.chars().count();

    buffer.set_lines(row, row + 1, vec![new_line]);
    buffer.set_cursor(row, (column + new_len).saturating_sub(old_len));

    if let Some(snippets) = snippets {
        snippets.insert_snippet(insert_text(item));
    }

    tracing::debug!(row, label = %item.label, "completion committed");
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/completion/commit.rs"]
mod tests;
