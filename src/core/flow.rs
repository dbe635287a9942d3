//! # Traversal Control Flow
//!
//! Navigation is depth-first over the natural call stack: entering a sub-menu
//! is a nested `run` invocation, leaving it is a return. What travels back up
//! is structured, not an unwound panic:
//!
//! ```text
//! action dispatch  →  Flow     (what the selected item requests)
//! completed run    →  Outcome  (what a finished container reports)
//! ```
//!
//! A quit selected anywhere in the hierarchy becomes `Outcome::Quit`, and
//! every enclosing frame checks it and re-propagates without re-displaying
//! its own menu.

use log::debug;

use crate::console::Console;
use crate::core::error::MenuError;
use crate::core::menu::Navigable;

/// What a dispatched action asks the enclosing run loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going; the container continues or exits per its own `auto_back`.
    Continue,
    /// Leave the current container and hand control back to its parent.
    Back,
    /// Terminate every enclosing run loop.
    Quit,
}

/// How a completed container run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The container finished normally (back, auto-back, or nothing to show).
    Exited,
    /// A quit was selected somewhere below; ancestors must stop too.
    Quit,
}

/// Run a nested navigable to completion before the caller's loop continues.
///
/// The nested container's own exit is invisible to the parent's continuation
/// decision; only a quit crosses the frame boundary.
pub fn descend(
    nav: &mut dyn Navigable,
    console: &mut dyn Console,
) -> Result<Flow, MenuError> {
    debug!("descending into \"{}\"", nav.title());
    match nav.run(console)? {
        Outcome::Quit => Ok(Flow::Quit),
        Outcome::Exited => Ok(Flow::Continue),
    }
}
