//! Service ports: traits + data contracts.

pub mod buffer;
pub mod completion;
pub mod settings;

pub use buffer::{SnippetService, TextBuffer};
pub use completion::{CompletionItem, CompletionItemKind, InsertTextFormat};
pub use settings::{CompletionSettings, Settings};
