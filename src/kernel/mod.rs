//! Headless completion core (meet detection, ranking, menu state).

pub mod completion;
pub mod menu;
pub mod services;

pub use completion::{CompletionMeet, MeetDetector};
pub use menu::{MenuAction, MenuConfiguration, MenuId, MenuState, MenuStore};
pub use services::ports::{CompletionItem, CompletionItemKind, InsertTextFormat};
