use super::action::MenuAction;
use super::state::{MenuConfiguration, MenuState, MenusState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self { state_changed }
    }
}

/// Owns the popup state and applies actions in dispatch order.
///
/// Holds at most one live menu. Item and loading updates carry the id of
/// the menu they were requested for and are dropped once that menu is gone.
pub struct MenuStore<T, F> {
    state: MenusState<T, F>,
}

impl<T, F> Default for MenuStore<T, F> {
    fn default() -> Self {
        Self::new(MenuConfiguration::default())
    }
}

impl<T, F> MenuStore<T, F> {
    pub fn new(configuration: MenuConfiguration) -> Self {
        Self {
            state: MenusState {
                configuration,
                menu: None,
            },
        }
    }

    pub fn state(&self) -> &MenusState<T, F> {
        &self.state
    }

    pub fn menu(&self) -> Option<&MenuState<T, F>> {
        self.state.menu.as_ref()
    }

    pub fn configuration(&self) -> MenuConfiguration {
        self.state.configuration
    }

    pub fn dispatch(&mut self, action: MenuAction<T, F>) -> DispatchResult {
        let action_name = action.name();
        let config_changed = reduce_configuration(&mut self.state.configuration, &action);
        let menu_changed = reduce_menu(&mut self.state.menu, action);
        tracing::trace!(
            action = action_name,
            changed = config_changed || menu_changed,
            "menu dispatch"
        );
        DispatchResult::changed(config_changed || menu_changed)
    }
}

fn reduce_configuration<T, F>(config: &mut MenuConfiguration, action: &MenuAction<T, F>) -> bool {
    match action {
        MenuAction::SetConfiguration(next) => {
            let changed = config != next;
            *config = *next;
            changed
        }
        _ => false,
    }
}

fn reduce_menu<T, F>(slot: &mut Option<MenuState<T, F>>, action: MenuAction<T, F>) -> bool {
    match action {
        MenuAction::Show {
            id,
            items,
            filter,
            filter_function,
        } => {
            let filtered_options = filter_function.filter(&items, &filter);
            *slot = Some(MenuState {
                id,
                options: items,
                filtered_options,
                filter,
                filter_function,
                selected_index: 0,
                is_loading: false,
            });
            true
        }
        MenuAction::SetItems { id, items } => {
            let Some(menu) = current_menu(slot, id, "set_items") else {
                return false;
            };
            menu.options = items;
            menu.refilter();
            if menu.selected_index >= menu.filtered_options.len() {
                menu.selected_index = 0;
            }
            true
        }
        MenuAction::SetLoading { id, is_loading } => {
            let Some(menu) = current_menu(slot, id, "set_loading") else {
                return false;
            };
            let changed = menu.is_loading != is_loading;
            menu.is_loading = is_loading;
            changed
        }
        MenuAction::Hide => slot.take().is_some(),
        MenuAction::Next => {
            let Some(menu) = slot.as_mut() else {
                return false;
            };
            let size = menu.filtered_options.len();
            let prev = menu.selected_index;
            menu.selected_index = if size == 0 {
                0
            } else {
                (menu.selected_index + 1) % size
            };
            menu.selected_index != prev
        }
        MenuAction::Previous => {
            let Some(menu) = slot.as_mut() else {
                return false;
            };
            let size = menu.filtered_options.len();
            let prev = menu.selected_index;
            menu.selected_index = if size == 0 {
                0
            } else if menu.selected_index > 0 {
                menu.selected_index - 1
            } else {
                size - 1
            };
            menu.selected_index != prev
        }
        MenuAction::Filter { filter } => {
            let Some(menu) = slot.as_mut() else {
                return false;
            };
            // Still applied with a passthrough filter; the source re-filters
            // on its side.
            menu.filter = filter;
            menu.refilter();
            menu.selected_index = 0;
            true
        }
        MenuAction::SetConfiguration(_) => false,
    }
}

fn current_menu<'a, T, F>(
    slot: &'a mut Option<MenuState<T, F>>,
    id: super::MenuId,
    action: &'static str,
) -> Option<&'a mut MenuState<T, F>> {
    match slot.as_ref().map(|menu| menu.id) {
        Some(current) if current == id => slot.as_mut(),
        Some(current) => {
            tracing::debug!(
                action,
                target_id = id.0,
                current_id = current.0,
                "drop stale menu action"
            );
            None
        }
        None => {
            tracing::debug!(action, target_id = id.0, "drop menu action without open menu");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/menu/store.rs"]
mod tests;
