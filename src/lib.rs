//! zcomplete - completion popup core
//!
//! Module layout:
//! - kernel::completion: meet detection, candidate ranking, acceptance
//! - kernel::menu: generic selectable-list store
//! - kernel::services: ports (buffer, snippet, settings, item types) and adapters
//! - logging: tracing subscriber setup

pub mod kernel;
pub mod logging;

pub use kernel::completion::{completion_meet, rank, CompletionMeet, MeetDetector};
pub use kernel::menu::{MenuAction, MenuConfiguration, MenuId, MenuState, MenuStore};
pub use kernel::services::ports::{CompletionItem, CompletionItemKind, InsertTextFormat};
