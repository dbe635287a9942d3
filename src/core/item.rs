//! # Selectable Items
//!
//! One renderable, actionable menu entry. Items are immutable after
//! construction; a dynamic list rebuilds its items from scratch on every
//! display cycle, so nothing here needs interior mutability.

use crate::console::Console;
use crate::core::flow::Flow;
use crate::core::menu::Navigable;

/// Callback invoked when an action item is selected.
pub type ActionFn = Box<dyn FnMut(&mut dyn Console) -> Flow>;

/// What selecting an item does.
pub enum ItemAction {
    /// Invoke a callback; its returned [`Flow`] steers the enclosing loop.
    Invoke(ActionFn),
    /// Descend into a nested navigable container, depth-first.
    Enter(Box<dyn Navigable>),
    /// Terminal option: leave the current container.
    Back,
    /// Terminal option: terminate every enclosing container.
    Quit,
}

/// One entry in a navigable container.
pub struct Item {
    title: String,
    shortcut: Option<String>,
    action: ItemAction,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        shortcut: Option<String>,
        action: ItemAction,
    ) -> Self {
        Self {
            title: title.into(),
            shortcut,
            action,
        }
    }

    /// An item that runs a callback on selection.
    pub fn action(
        title: impl Into<String>,
        shortcut: impl Into<String>,
        callback: impl FnMut(&mut dyn Console) -> Flow + 'static,
    ) -> Self {
        Self::new(
            title,
            Some(shortcut.into()),
            ItemAction::Invoke(Box::new(callback)),
        )
    }

    /// An item that opens a nested navigable; the entry takes its title from
    /// the navigable itself.
    pub fn submenu(shortcut: impl Into<String>, nav: impl Navigable + 'static) -> Self {
        let title = nav.title().to_string();
        Self::new(title, Some(shortcut.into()), ItemAction::Enter(Box::new(nav)))
    }

    /// A quit terminal option.
    pub fn quit(title: impl Into<String>, shortcut: impl Into<String>) -> Self {
        Self::new(title, Some(shortcut.into()), ItemAction::Quit)
    }

    /// A back terminal option.
    pub fn back(title: impl Into<String>, shortcut: impl Into<String>) -> Self {
        Self::new(title, Some(shortcut.into()), ItemAction::Back)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    pub(crate) fn action_mut(&mut self) -> &mut ItemAction {
        &mut self.action
    }
}

/// The row a list callback was invoked for: its index in the materialized
/// sequence and the element pulled from the model at that cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    pub index: usize,
    pub element: T,
}
