//! # Navigable Container
//!
//! An ordered set of [`Item`]s that renders itself, reads a choice, resolves
//! it by shortcut, and dispatches, looping until a terminating choice is
//! made. While a container is being displayed it is *locked*: structural
//! edits from the embedding application are rejected so what is shown can
//! never diverge from what the container holds.
//!
//! Locking is re-entrancy discipline, not thread safety. `run` saves the
//! prior lock state and restores it on every exit path, so a container can be
//! invoked while already nested inside a locked ancestor.

use log::{debug, info, warn};

use crate::console::Console;
use crate::core::error::MenuError;
use crate::core::flow::{self, Flow, Outcome};
use crate::core::item::{Item, ItemAction};
use crate::render::{DefaultMenuRenderer, MenuRenderer};

/// Any component that presents choices and runs a read/dispatch loop.
pub trait Navigable {
    fn title(&self) -> &str;

    /// Render, read and dispatch until this container terminates. A nested
    /// quit surfaces as [`Outcome::Quit`].
    fn run(&mut self, console: &mut dyn Console) -> Result<Outcome, MenuError>;
}

/// A statically populated menu.
pub struct Menu {
    title: String,
    items: Vec<Item>,
    locked: bool,
    auto_back: bool,
    renderer: Box<dyn MenuRenderer>,
    on_item_selected: Option<Box<dyn FnMut(usize)>>,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            locked: false,
            auto_back: false,
            renderer: Box::new(DefaultMenuRenderer::new()),
            on_item_selected: None,
        }
    }

    /// When true, one dispatched selection ends the run instead of
    /// re-displaying the menu.
    pub fn set_auto_back(&mut self, auto_back: bool) {
        self.auto_back = auto_back;
    }

    pub fn add(&mut self, item: Item) -> Result<(), MenuError> {
        self.ensure_unlocked("add an option to")?;
        self.push_item(item)
    }

    pub fn clear_items(&mut self) -> Result<(), MenuError> {
        self.ensure_unlocked("clear the options of")?;
        self.items.clear();
        Ok(())
    }

    pub fn register_quit(&mut self, shortcut: impl Into<String>) -> Result<(), MenuError> {
        self.ensure_unlocked("register the quit option of")?;
        self.push_item(Item::quit("Exit", shortcut))
    }

    pub fn register_back(&mut self, shortcut: impl Into<String>) -> Result<(), MenuError> {
        self.ensure_unlocked("register the back option of")?;
        self.push_item(Item::back("Back", shortcut))
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn MenuRenderer>) -> Result<(), MenuError> {
        self.ensure_unlocked("change the renderer of")?;
        self.renderer = renderer;
        Ok(())
    }

    /// Generic "a selection was made" notification, fired with the selected
    /// index before the item's own action is dispatched.
    pub fn set_on_item_selected(&mut self, hook: impl FnMut(usize) + 'static) {
        self.on_item_selected = Some(Box::new(hook));
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Unlock and report whether the container was locked before.
    pub fn unlock(&mut self) -> bool {
        let prior = self.locked;
        self.locked = false;
        prior
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    fn ensure_unlocked(&self, operation: &'static str) -> Result<(), MenuError> {
        if self.locked {
            return Err(MenuError::ConcurrentModification {
                container: self.title.clone(),
                operation,
            });
        }
        Ok(())
    }

    /// Sibling shortcuts must be unique or input resolution is ambiguous.
    fn push_item(&mut self, item: Item) -> Result<(), MenuError> {
        if let Some(shortcut) = item.shortcut()
            && self.items.iter().any(|held| held.shortcut() == Some(shortcut))
        {
            return Err(MenuError::DuplicateShortcut {
                container: self.title.clone(),
                shortcut: shortcut.to_string(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Repopulation path for derived containers: bypasses the lock check, the
    /// lock having been handled by the caller.
    pub(crate) fn clear_items_internal(&mut self) {
        self.items.clear();
    }

    fn render(&self, console: &mut dyn Console) {
        console.print_line(&self.renderer.header(&self.title));
        for item in &self.items {
            console.print_line(&self.renderer.item_line(item));
        }
        console.print(&self.renderer.prompt());
    }

    fn resolve(&self, raw: &str) -> Option<usize> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.items
            .iter()
            .position(|item| item.shortcut() == Some(trimmed))
    }

    fn dispatch(
        &mut self,
        index: usize,
        console: &mut dyn Console,
    ) -> Result<Flow, MenuError> {
        if let Some(hook) = self.on_item_selected.as_mut() {
            hook(index);
        }
        let item = &mut self.items[index];
        debug!("dispatching \"{}\"", item.title());
        match item.action_mut() {
            ItemAction::Invoke(callback) => Ok(callback(console)),
            ItemAction::Enter(nav) => flow::descend(nav.as_mut(), console),
            ItemAction::Back => Ok(Flow::Back),
            ItemAction::Quit => Ok(Flow::Quit),
        }
    }

    pub(crate) fn auto_back(&self) -> bool {
        self.auto_back
    }

    /// One display cycle: render, read until a shortcut matches, dispatch.
    ///
    /// Derived containers repopulate before calling this, so one cycle always
    /// shows one materialization.
    pub(crate) fn run_once(&mut self, console: &mut dyn Console) -> Result<Flow, MenuError> {
        if self.items.is_empty() {
            return Err(MenuError::EmptyMenu {
                container: self.title.clone(),
            });
        }
        loop {
            self.render(console);
            let raw = match console.read_line() {
                Some(line) => line,
                None => {
                    // Input source exhausted; nothing left to dispatch.
                    info!("input closed while running \"{}\"", self.title);
                    return Ok(Flow::Quit);
                }
            };
            match self.resolve(&raw) {
                Some(index) => return self.dispatch(index, console),
                None => {
                    warn!("rejected input {raw:?} in \"{}\"", self.title);
                    console.print_line(&self.renderer.invalid(&raw));
                }
            }
        }
    }

    fn run_loop(&mut self, console: &mut dyn Console) -> Result<Outcome, MenuError> {
        loop {
            match self.run_once(console)? {
                Flow::Quit => return Ok(Outcome::Quit),
                Flow::Back => return Ok(Outcome::Exited),
                Flow::Continue => {
                    if self.auto_back {
                        return Ok(Outcome::Exited);
                    }
                }
            }
        }
    }
}

impl Navigable for Menu {
    fn title(&self) -> &str {
        &self.title
    }

    fn run(&mut self, console: &mut dyn Console) -> Result<Outcome, MenuError> {
        debug!("running menu \"{}\"", self.title);
        let prior = self.locked;
        self.locked = true;
        let result = self.run_loop(console);
        self.locked = prior;
        result
    }
}
