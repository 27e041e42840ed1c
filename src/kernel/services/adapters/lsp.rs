//! Conversion of language server completion responses.

use crate::kernel::services::ports::{CompletionItem, CompletionItemKind, InsertTextFormat};

const MAX_COMPLETION_ITEMS: usize = 200;

pub fn completion_item_kind(kind: lsp_types::CompletionItemKind) -> Option<CompletionItemKind> {
    let value = serde_json::to_value(kind).ok()?.as_u64()?;
    CompletionItemKind::from_u32(u32::try_from(value).ok()?)
}

pub fn insert_text_format(format: Option<lsp_types::InsertTextFormat>) -> InsertTextFormat {
    match format {
        Some(format) if format == lsp_types::InsertTextFormat::SNIPPET => InsertTextFormat::Snippet,
        _ => InsertTextFormat::PlainText,
    }
}

/// Converts one item; blank labels are rejected.
pub fn completion_item(item: lsp_types::CompletionItem) -> Option<CompletionItem> {
    let label = item.label.trim().to_string();
    if label.is_empty() {
        return None;
    }

    let insert_text = match item.text_edit {
        Some(lsp_types::CompletionTextEdit::Edit(edit)) => Some(edit.new_text),
        Some(lsp_types::CompletionTextEdit::InsertAndReplace(edit)) => Some(edit.new_text),
        None => item.insert_text,
    };

    Some(CompletionItem {
        label,
        kind: item.kind.and_then(completion_item_kind),
        detail: item.detail,
        insert_text,
        insert_text_format: insert_text_format(item.insert_text_format),
        filter_text: item.filter_text,
        sort_text: item.sort_text,
    })
}

/// Returns the converted items and whether the list is incomplete.
pub fn completion_items(resp: lsp_types::CompletionResponse) -> (Vec<CompletionItem>, bool) {
    let (items, mut is_incomplete) = match resp {
        lsp_types::CompletionResponse::Array(items) => (items, false),
        lsp_types::CompletionResponse::List(list) => (list.items, list.is_incomplete),
    };

    if items.len() > MAX_COMPLETION_ITEMS {
        tracing::debug!(
            received = items.len(),
            kept = MAX_COMPLETION_ITEMS,
            "truncating completion response"
        );
        is_incomplete = true;
    }

    let out = items
        .into_iter()
        .take(MAX_COMPLETION_ITEMS)
        .filter_map(completion_item)
        .collect();
    (out, is_incomplete)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/lsp.rs"]
mod tests;
