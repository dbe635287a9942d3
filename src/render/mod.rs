//! # Rendering Strategies
//!
//! Pluggable formatting for menus and list rows. The core never formats text
//! itself; it asks a [`MenuRenderer`] for menu chrome (header, item lines,
//! prompt) and a [`ListItemRenderer`] for the title/shortcut of each element
//! pulled from a list model.

use std::fmt;

use crate::core::item::Item;

/// Formats a container's output: header, one line per item, the prompt, and
/// the reaction to input that matches no shortcut.
pub trait MenuRenderer {
    fn header(&self, title: &str) -> String;
    fn item_line(&self, item: &Item) -> String;
    fn prompt(&self) -> String;
    fn invalid(&self, raw: &str) -> String;
}

/// Plain text renderer: `shortcut : title` lines under the container title.
pub struct DefaultMenuRenderer {
    prompt: String,
}

impl DefaultMenuRenderer {
    pub fn new() -> Self {
        Self {
            prompt: "> ".to_string(),
        }
    }

    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for DefaultMenuRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuRenderer for DefaultMenuRenderer {
    fn header(&self, title: &str) -> String {
        format!("\n{title} :")
    }

    fn item_line(&self, item: &Item) -> String {
        match item.shortcut() {
            Some(shortcut) => format!("{shortcut} : {}", item.title()),
            // Unselectable rows still display, indented past the shortcuts.
            None => format!("    {}", item.title()),
        }
    }

    fn prompt(&self) -> String {
        self.prompt.clone()
    }

    fn invalid(&self, raw: &str) -> String {
        format!("\"{raw}\" is not a valid choice.")
    }
}

/// Turns one model element into a display title and shortcut, and formats the
/// message shown when the model holds nothing.
pub trait ListItemRenderer<T> {
    fn title(&self, index: usize, element: &T) -> String;
    fn shortcut(&self, index: usize, element: &T) -> Option<String>;
    fn empty(&self) -> String;
}

/// Default strategy: the element's natural string form as the title, and
/// sequential alphabetic shortcuts (`a`..`z`, then `aa`, `ab`, ...).
pub struct DefaultListItemRenderer;

impl<T: fmt::Display> ListItemRenderer<T> for DefaultListItemRenderer {
    fn title(&self, _index: usize, element: &T) -> String {
        element.to_string()
    }

    fn shortcut(&self, index: usize, _element: &T) -> Option<String> {
        Some(alpha_shortcut(index))
    }

    fn empty(&self) -> String {
        "The list is empty.".to_string()
    }
}

/// Alternative strategy with 1-based numeric shortcuts.
pub struct IndexListItemRenderer;

impl<T: fmt::Display> ListItemRenderer<T> for IndexListItemRenderer {
    fn title(&self, _index: usize, element: &T) -> String {
        element.to_string()
    }

    fn shortcut(&self, index: usize, _element: &T) -> Option<String> {
        Some((index + 1).to_string())
    }

    fn empty(&self) -> String {
        "The list is empty.".to_string()
    }
}

/// Shortcut for a 0-based index in bijective base 26: 0 → `a`, 25 → `z`,
/// 26 → `aa`, 51 → `az`.
pub fn alpha_shortcut(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}
