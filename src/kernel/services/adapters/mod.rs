//! Service adapters: concrete implementations of the ports.

pub mod buffer;
pub mod lsp;
pub mod perf;
pub mod settings;

pub use buffer::RopeBuffer;
pub use lsp::{completion_item, completion_items};
pub use settings::{ensure_settings_file, load_settings, parse_settings};
