use std::fmt;
use std::sync::Arc;

use super::filter::{RankFilter, SharedMenuFilter};
use super::state::{MenuConfiguration, MenuId};
use crate::kernel::completion::rank::Candidate;

pub enum MenuAction<T, F> {
    Show {
        id: MenuId,
        items: Vec<T>,
        filter: String,
        filter_function: SharedMenuFilter<T, F>,
    },
    SetItems {
        id: MenuId,
        items: Vec<T>,
    },
    SetLoading {
        id: MenuId,
        is_loading: bool,
    },
    Hide,
    Next,
    Previous,
    Filter {
        filter: String,
    },
    SetConfiguration(MenuConfiguration),
}

impl<T, F> MenuAction<T, F> {
    pub fn show_with(
        id: MenuId,
        items: Vec<T>,
        filter: impl Into<String>,
        filter_function: SharedMenuFilter<T, F>,
    ) -> Self {
        Self::Show {
            id,
            items,
            filter: filter.into(),
            filter_function,
        }
    }

    pub fn filter(filter: impl Into<String>) -> Self {
        Self::Filter {
            filter: filter.into(),
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Show { .. } => "show",
            Self::SetItems { .. } => "set_items",
            Self::SetLoading { .. } => "set_loading",
            Self::Hide => "hide",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::Filter { .. } => "filter",
            Self::SetConfiguration(_) => "set_configuration",
        }
    }
}

impl<T: Candidate + Clone + 'static> MenuAction<T, T> {
    /// Shows a menu ranked by the completion ranker.
    pub fn show(id: MenuId, items: Vec<T>, filter: impl Into<String>) -> Self {
        Self::show_with(id, items, filter, Arc::new(RankFilter))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for MenuAction<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show {
                id, items, filter, ..
            } => f
                .debug_struct("Show")
                .field("id", id)
                .field("items", items)
                .field("filter", filter)
                .finish_non_exhaustive(),
            Self::SetItems { id, items } => f
                .debug_struct("SetItems")
                .field("id", id)
                .field("items", items)
                .finish(),
            Self::SetLoading { id, is_loading } => f
                .debug_struct("SetLoading")
                .field("id", id)
                .field("is_loading", is_loading)
                .finish(),
            Self::Hide => f.write_str("Hide"),
            Self::Next => f.write_str("Next"),
            Self::Previous => f.write_str("Previous"),
            Self::Filter { filter } => f.debug_struct("Filter").field("filter", filter).finish(),
            Self::SetConfiguration(config) => {
                f.debug_tuple("SetConfiguration").field(config).finish()
            }
        }
    }
}
