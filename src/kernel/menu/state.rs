use std::fmt;

use serde::{Deserialize, Serialize};

use super::filter::SharedMenuFilter;

/// Opaque identity of one popup instance. Responses tagged with an old id
/// are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuId(pub u64);

/// Display parameters shared by every menu the store shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuConfiguration {
    pub row_height: u16,
    pub max_items_to_show: usize,
}

impl Default for MenuConfiguration {
    fn default() -> Self {
        Self {
            row_height: 1,
            max_items_to_show: 10,
        }
    }
}

pub struct MenuState<T, F> {
    pub id: MenuId,
    pub options: Vec<T>,
    pub filtered_options: Vec<F>,
    pub filter: String,
    pub filter_function: SharedMenuFilter<T, F>,
    pub selected_index: usize,
    pub is_loading: bool,
}

impl<T, F> MenuState<T, F> {
    pub fn selected_item(&self) -> Option<&F> {
        self.filtered_options.get(self.selected_index)
    }

    pub fn is_empty(&self) -> bool {
        self.filtered_options.is_empty()
    }

    /// Re-runs the stored filter over `options`.
    pub(super) fn refilter(&mut self) {
        self.filtered_options = self.filter_function.filter(&self.options, &self.filter);
    }
}

impl<T: Clone, F: Clone> Clone for MenuState<T, F> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            options: self.options.clone(),
            filtered_options: self.filtered_options.clone(),
            filter: self.filter.clone(),
            filter_function: self.filter_function.clone(),
            selected_index: self.selected_index,
            is_loading: self.is_loading,
        }
    }
}

impl<T: fmt::Debug, F: fmt::Debug> fmt::Debug for MenuState<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuState")
            .field("id", &self.id)
            .field("options", &self.options)
            .field("filtered_options", &self.filtered_options)
            .field("filter", &self.filter)
            .field("selected_index", &self.selected_index)
            .field("is_loading", &self.is_loading)
            .finish_non_exhaustive()
    }
}

pub struct MenusState<T, F> {
    pub configuration: MenuConfiguration,
    pub menu: Option<MenuState<T, F>>,
}

impl<T, F> Default for MenusState<T, F> {
    fn default() -> Self {
        Self {
            configuration: MenuConfiguration::default(),
            menu: None,
        }
    }
}

impl<T: fmt::Debug, F: fmt::Debug> fmt::Debug for MenusState<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenusState")
            .field("configuration", &self.configuration)
            .field("menu", &self.menu)
            .finish()
    }
}
