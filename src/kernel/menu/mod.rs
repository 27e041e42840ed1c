//! Selectable list state shared by the completion popup and other
//! filterable menus.

pub mod action;
pub mod filter;
pub mod state;
pub mod store;

pub use action::MenuAction;
pub use filter::{FnFilter, MenuFilter, PassthroughFilter, RankFilter, SharedMenuFilter};
pub use state::{MenuConfiguration, MenuId, MenuState, MenusState};
pub use store::{DispatchResult, MenuStore};
