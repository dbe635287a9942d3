//! # Dynamic List Engine
//!
//! A navigable container whose items are never declared by hand: they are
//! regenerated from a live data source on every run. Between cycles the
//! source may change, typically because a dispatched action mutated it, and
//! the next display cycle observes the change: materialization always happens
//! immediately before render/read and nowhere else.
//!
//! ```text
//! run()
//!  └── loop: one cycle per redisplay
//!       ├── materialize()       pull model → rebuild items → count
//!       │     └── (count 0, no terminals) → print empty message, done
//!       └── run_once()          render / read / dispatch / descend
//! ```
//!
//! Each element maps to exactly one of two handling modes, fixed at
//! construction as a [`Binding`]: a per-element callback, or a per-element
//! sub-navigable entered depth-first.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::console::Console;
use crate::core::error::MenuError;
use crate::core::flow::{Flow, Outcome};
use crate::core::item::{Item, ItemAction, Selection};
use crate::core::menu::{Menu, Navigable};
use crate::render::{DefaultListItemRenderer, ListItemRenderer, MenuRenderer};

/// Capability returning the current element sequence, or `None` when no
/// model is available at all (distinct from an empty sequence).
pub type ListModel<T> = Box<dyn Fn() -> Option<Vec<T>>>;

/// Per-element callback; receives the selected row as an explicit value
/// object rather than through closure capture.
pub type ListActionFn<T> = Rc<RefCell<dyn FnMut(&mut dyn Console, Selection<T>) -> Flow>>;

/// Resolves an element to the navigable container it opens.
pub type NavigableMapFn<T> = Box<dyn FnMut(&T) -> Result<Box<dyn Navigable>, MenuError>>;

/// How list elements are handled on selection. Exactly one mode exists per
/// list; "both set" and "neither set" are unrepresentable.
pub enum Binding<T> {
    /// Invoke a callback with the selected `(index, element)`.
    Action(ListActionFn<T>),
    /// Resolve the element to a sub-navigable and enter it depth-first.
    Navigable(NavigableMapFn<T>),
}

impl<T> Binding<T> {
    pub fn action(
        callback: impl FnMut(&mut dyn Console, Selection<T>) -> Flow + 'static,
    ) -> Self {
        Binding::Action(Rc::new(RefCell::new(callback)))
    }

    pub fn navigable(
        map: impl FnMut(&T) -> Result<Box<dyn Navigable>, MenuError> + 'static,
    ) -> Self {
        Binding::Navigable(Box::new(map))
    }
}

/// A registered quit/back entry; rebuilt into a fresh [`Item`] each cycle.
struct TerminalOption {
    label: String,
    shortcut: String,
}

/// A navigable container derived from a data source.
pub struct List<T> {
    menu: Menu,
    model: ListModel<T>,
    binding: Binding<T>,
    item_renderer: Box<dyn ListItemRenderer<T>>,
    quit: Option<TerminalOption>,
    back: Option<TerminalOption>,
}

impl<T: Clone + fmt::Display + 'static> List<T> {
    /// A list with the default rendering strategy (natural string form,
    /// alphabetic shortcuts). Auto-back is enabled by default.
    pub fn new(
        title: impl Into<String>,
        model: impl Fn() -> Option<Vec<T>> + 'static,
        binding: Binding<T>,
    ) -> Self {
        let mut menu = Menu::new(title);
        menu.set_auto_back(true);
        Self {
            menu,
            model: Box::new(model),
            binding,
            item_renderer: Box::new(DefaultListItemRenderer),
            quit: None,
            back: None,
        }
    }
}

impl<T: Clone + 'static> List<T> {
    pub fn title(&self) -> &str {
        self.menu.title()
    }

    pub fn set_auto_back(&mut self, auto_back: bool) {
        self.menu.set_auto_back(auto_back);
    }

    /// Items on a list are derived from its model; manual addition is always
    /// an error, locked or not.
    pub fn add(&mut self, item: Item) -> Result<(), MenuError> {
        Err(MenuError::ManualAddForbidden {
            list: self.menu.title().to_string(),
            item: item.title().to_string(),
        })
    }

    pub fn register_quit(&mut self, shortcut: impl Into<String>) -> Result<(), MenuError> {
        self.register_quit_labeled(shortcut, "Exit")
    }

    pub fn register_quit_labeled(
        &mut self,
        shortcut: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), MenuError> {
        self.ensure_unlocked("register the quit option of")?;
        self.quit = Some(TerminalOption {
            label: label.into(),
            shortcut: shortcut.into(),
        });
        Ok(())
    }

    pub fn register_back(&mut self, shortcut: impl Into<String>) -> Result<(), MenuError> {
        self.register_back_labeled(shortcut, "Back")
    }

    pub fn register_back_labeled(
        &mut self,
        shortcut: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), MenuError> {
        self.ensure_unlocked("register the back option of")?;
        self.back = Some(TerminalOption {
            label: label.into(),
            shortcut: shortcut.into(),
        });
        Ok(())
    }

    pub fn set_item_renderer(
        &mut self,
        renderer: Box<dyn ListItemRenderer<T>>,
    ) -> Result<(), MenuError> {
        self.ensure_unlocked("change the item renderer of")?;
        self.item_renderer = renderer;
        Ok(())
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn MenuRenderer>) -> Result<(), MenuError> {
        self.menu.set_renderer(renderer)
    }

    /// See [`Menu::set_on_item_selected`]. In navigable mode this is the
    /// list's generic selection hook: it fires before the resolved
    /// sub-navigable is entered.
    pub fn set_on_item_selected(&mut self, hook: impl FnMut(usize) + 'static) {
        self.menu.set_on_item_selected(hook);
    }

    pub fn is_locked(&self) -> bool {
        self.menu.is_locked()
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.menu.set_locked(locked);
    }

    pub fn unlock(&mut self) -> bool {
        self.menu.unlock()
    }

    /// The item set of the current cycle (data-derived rows plus terminal
    /// options). Valid until the next materialize.
    pub fn items(&self) -> &[Item] {
        self.menu.items()
    }

    /// Invoke the action binding directly with an already-resolved selection.
    /// Fails on a navigable-mode list, which has no action binding.
    pub fn dispatch(
        &mut self,
        console: &mut dyn Console,
        selection: Selection<T>,
    ) -> Result<Flow, MenuError> {
        match &self.binding {
            Binding::Action(callback) => Ok((callback.borrow_mut())(console, selection)),
            Binding::Navigable(_) => Err(MenuError::NoListAction {
                list: self.menu.title().to_string(),
            }),
        }
    }

    /// Rebuild the item set from the model's current contents.
    ///
    /// Not referentially transparent: it replaces the container's visible
    /// items as a side effect, and `run` calls it exactly once per display
    /// cycle. Returns the count of data-derived items, excluding terminal
    /// options.
    pub fn materialize(&mut self) -> Result<usize, MenuError> {
        let elements = (self.model)().ok_or_else(|| MenuError::NoListModel {
            list: self.menu.title().to_string(),
        })?;
        debug!(
            "materializing \"{}\": {} element(s)",
            self.menu.title(),
            elements.len()
        );
        self.menu.clear_items_internal();
        // The surrounding traversal holds the lock; repopulation needs it
        // lifted, and exactly as it was afterwards.
        let was_locked = self.menu.unlock();
        let populated = self.populate(&elements);
        self.menu.set_locked(was_locked);
        populated?;
        Ok(elements.len())
    }

    fn populate(&mut self, elements: &[T]) -> Result<(), MenuError> {
        for (index, element) in elements.iter().enumerate() {
            let title = self.item_renderer.title(index, element);
            let shortcut = self.item_renderer.shortcut(index, element);
            let action = match &mut self.binding {
                Binding::Action(callback) => {
                    let callback = Rc::clone(callback);
                    let element = element.clone();
                    ItemAction::Invoke(Box::new(move |console| {
                        (callback.borrow_mut())(
                            console,
                            Selection {
                                index,
                                element: element.clone(),
                            },
                        )
                    }))
                }
                Binding::Navigable(map) => ItemAction::Enter(map(element)?),
            };
            self.menu.add(Item::new(title, shortcut, action))?;
        }
        if let Some(quit) = &self.quit {
            self.menu.add(Item::quit(&quit.label, &quit.shortcut))?;
        }
        if let Some(back) = &self.back {
            self.menu.add(Item::back(&back.label, &back.shortcut))?;
        }
        Ok(())
    }

    fn ensure_unlocked(&self, operation: &'static str) -> Result<(), MenuError> {
        if self.menu.is_locked() {
            return Err(MenuError::ConcurrentModification {
                container: self.menu.title().to_string(),
                operation,
            });
        }
        Ok(())
    }
}

impl<T: Clone + 'static> List<T> {
    /// One materialize-then-display cycle per iteration, so a model mutated
    /// by a dispatched action is observed on the very next redisplay.
    fn run_cycles(&mut self, console: &mut dyn Console) -> Result<Outcome, MenuError> {
        loop {
            let count = self.materialize()?;
            if count == 0 {
                console.print_line(&self.item_renderer.empty());
                if self.menu.items().is_empty() {
                    // No terminal options either: nothing to read or dispatch.
                    return Ok(Outcome::Exited);
                }
            }
            match self.menu.run_once(console)? {
                Flow::Quit => return Ok(Outcome::Quit),
                Flow::Back => return Ok(Outcome::Exited),
                Flow::Continue => {
                    if self.menu.auto_back() {
                        return Ok(Outcome::Exited);
                    }
                }
            }
        }
    }
}

impl<T: Clone + 'static> Navigable for List<T> {
    fn title(&self) -> &str {
        self.menu.title()
    }

    fn run(&mut self, console: &mut dyn Console) -> Result<Outcome, MenuError> {
        debug!("running list \"{}\"", self.menu.title());
        let prior = self.menu.is_locked();
        self.menu.set_locked(true);
        let result = self.run_cycles(console);
        self.menu.set_locked(prior);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::test_support::{people_model, ScriptedConsole};

    fn noop_action_list(people: &Rc<RefCell<Vec<String>>>) -> List<String> {
        let source = Rc::clone(people);
        List::new(
            "People",
            move || Some(source.borrow().clone()),
            Binding::action(|_console, _selection: Selection<String>| Flow::Continue),
        )
    }

    #[test]
    fn test_materialize_counts_data_items_only() {
        let people = people_model(&["Ginette", "Marcel", "Gisèle"]);
        let mut list = noop_action_list(&people);
        list.register_quit("q").unwrap();
        list.register_back("b").unwrap();

        let count = list.materialize().unwrap();
        assert_eq!(count, 3);
        // Quit then back, appended after the data rows.
        assert_eq!(list.items().len(), 5);
        assert_eq!(list.items()[3].title(), "Exit");
        assert_eq!(list.items()[4].title(), "Back");
    }

    #[test]
    fn test_materialize_is_deterministic_for_unchanged_model() {
        let people = people_model(&["Ginette", "Marcel"]);
        let mut list = noop_action_list(&people);

        list.materialize().unwrap();
        let first: Vec<(String, Option<String>)> = list
            .items()
            .iter()
            .map(|item| (item.title().to_string(), item.shortcut().map(String::from)))
            .collect();

        list.materialize().unwrap();
        let second: Vec<(String, Option<String>)> = list
            .items()
            .iter()
            .map(|item| (item.title().to_string(), item.shortcut().map(String::from)))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_model_mutation_visible_on_next_materialize_only() {
        let people = people_model(&["Ginette", "Marcel", "Gisèle"]);
        let mut list = noop_action_list(&people);

        list.materialize().unwrap();
        assert_eq!(list.items().len(), 3);

        people.borrow_mut().retain(|p| p != "Marcel");
        // The already-rendered set is untouched until the next cycle.
        assert_eq!(list.items().len(), 3);

        list.materialize().unwrap();
        let titles: Vec<&str> = list.items().iter().map(Item::title).collect();
        assert_eq!(titles, vec!["Ginette", "Gisèle"]);
    }

    #[test]
    fn test_manual_add_always_forbidden() {
        let people = people_model(&["Ginette"]);
        let mut list = noop_action_list(&people);

        let err = list
            .add(Item::action("rogue", "r", |_console| Flow::Continue))
            .unwrap_err();
        assert!(matches!(err, MenuError::ManualAddForbidden { .. }));

        list.set_locked(true);
        let err = list
            .add(Item::action("rogue", "r", |_console| Flow::Continue))
            .unwrap_err();
        assert!(matches!(err, MenuError::ManualAddForbidden { .. }));
    }

    #[test]
    fn test_register_terminals_rejected_while_locked() {
        let people = people_model(&["Ginette"]);
        let mut list = noop_action_list(&people);
        list.set_locked(true);

        assert!(matches!(
            list.register_quit("q"),
            Err(MenuError::ConcurrentModification { .. })
        ));
        assert!(matches!(
            list.register_back("b"),
            Err(MenuError::ConcurrentModification { .. })
        ));

        list.set_locked(false);
        list.register_quit("q").unwrap();
        list.materialize().unwrap();
        assert_eq!(list.items().last().unwrap().title(), "Exit");
    }

    #[test]
    fn test_renderer_change_rejected_while_locked() {
        let people = people_model(&["Ginette"]);
        let mut list = noop_action_list(&people);
        list.set_locked(true);
        let err = list
            .set_item_renderer(Box::new(crate::render::IndexListItemRenderer))
            .unwrap_err();
        assert!(matches!(err, MenuError::ConcurrentModification { .. }));
    }

    #[test]
    fn test_absent_model_fails_without_partial_items() {
        let mut list: List<String> = List::new(
            "People",
            || None,
            Binding::action(|_console, _selection: Selection<String>| Flow::Continue),
        );
        let err = list.materialize().unwrap_err();
        assert!(matches!(err, MenuError::NoListModel { .. }));
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_action_binding_receives_index_and_element() {
        let people = people_model(&["Ginette", "Marcel", "Gisèle"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&seen);
        let source = Rc::clone(&people);

        let mut list = List::new(
            "People",
            move || Some(source.borrow().clone()),
            Binding::action(move |_console, selection: Selection<String>| {
                recorder.borrow_mut().push(selection);
                Flow::Continue
            }),
        );

        // Auto-back is on by default, so one selection ends the run.
        let mut console = ScriptedConsole::new(&["b"]);
        let outcome = list.run(&mut console).unwrap();
        assert_eq!(outcome, Outcome::Exited);
        assert_eq!(
            *seen.borrow(),
            vec![Selection {
                index: 1,
                element: "Marcel".to_string(),
            }]
        );
    }

    #[test]
    fn test_dispatch_requires_action_binding() {
        let people = people_model(&["Ginette"]);
        let source = Rc::clone(&people);
        let mut list = List::new(
            "People",
            move || Some(source.borrow().clone()),
            Binding::navigable(|person: &String| {
                Ok(Box::new(Menu::new(person.clone())) as Box<dyn Navigable>)
            }),
        );
        let mut console = ScriptedConsole::new(&[]);
        let err = list
            .dispatch(
                &mut console,
                Selection {
                    index: 0,
                    element: "Ginette".to_string(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, MenuError::NoListAction { .. }));
    }

    #[test]
    fn test_empty_model_with_quit_still_offers_the_terminal() {
        let people = people_model(&[]);
        let mut list = noop_action_list(&people);
        list.register_quit("q").unwrap();

        let mut console = ScriptedConsole::new(&["q"]);
        let outcome = list.run(&mut console).unwrap();
        assert_eq!(outcome, Outcome::Quit);
        assert!(console.output().contains("The list is empty."));
        assert!(console.output().contains("q : Exit"));
    }

    #[test]
    fn test_lock_restored_when_populate_fails() {
        // A renderer that collides every shortcut forces a populate error.
        struct Colliding;
        impl ListItemRenderer<String> for Colliding {
            fn title(&self, _index: usize, element: &String) -> String {
                element.clone()
            }
            fn shortcut(&self, _index: usize, _element: &String) -> Option<String> {
                Some("x".to_string())
            }
            fn empty(&self) -> String {
                "empty".to_string()
            }
        }

        let people = people_model(&["Ginette", "Marcel"]);
        let mut list = noop_action_list(&people);
        list.set_item_renderer(Box::new(Colliding)).unwrap();
        list.set_locked(true);

        let err = list.materialize().unwrap_err();
        assert!(matches!(err, MenuError::DuplicateShortcut { .. }));
        assert!(list.is_locked());
    }
}
